//! Live job search provider — RapidAPI JSearch behind a trait so the
//! handlers never care where postings came from.
//!
//! Provider failures are internal only: callers catch them and fall back to
//! the demo catalog, never surfacing an upstream error to the client.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::job::{JobDetail, JobPosting};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Api(u16),

    #[error("provider response missing expected data")]
    MissingData,
}

#[async_trait]
pub trait JobProvider: Send + Sync {
    async fn search(
        &self,
        query: &str,
        location: &str,
        page: u32,
    ) -> Result<Vec<JobPosting>, ProviderError>;

    async fn job_details(&self, job_id: &str) -> Result<JobDetail, ProviderError>;
}

/// JSearch (RapidAPI) client. One instance is built at startup when an API
/// key is configured.
pub struct JSearchProvider {
    client: Client,
    api_key: String,
    api_host: String,
}

impl JSearchProvider {
    pub fn new(api_key: String, api_host: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            api_host,
        }
    }
}

#[async_trait]
impl JobProvider for JSearchProvider {
    async fn search(
        &self,
        query: &str,
        location: &str,
        page: u32,
    ) -> Result<Vec<JobPosting>, ProviderError> {
        let url = format!("https://{}/search", self.api_host);
        let response = self
            .client
            .get(url)
            .query(&[
                ("query", format!("{query} developer").as_str()),
                ("location", location),
                ("page", page.to_string().as_str()),
                ("num_pages", "1"),
            ])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api(status.as_u16()));
        }

        let envelope: SearchEnvelope = response.json().await?;
        Ok(envelope.data.into_iter().map(map_wire_job).collect())
    }

    async fn job_details(&self, job_id: &str) -> Result<JobDetail, ProviderError> {
        let url = format!("https://{}/job-details", self.api_host);
        let response = self
            .client
            .get(url)
            .query(&[("job_id", job_id)])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api(status.as_u16()));
        }

        let envelope: SearchEnvelope = response.json().await?;
        let job = envelope
            .data
            .into_iter()
            .next()
            .ok_or(ProviderError::MissingData)?;
        Ok(map_wire_detail(job))
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    data: Vec<WireJob>,
}

#[derive(Debug, Default, Deserialize)]
struct WireJob {
    job_id: Option<String>,
    job_title: Option<String>,
    employer_name: Option<String>,
    job_city: Option<String>,
    job_country: Option<String>,
    job_min_salary: Option<f64>,
    job_max_salary: Option<f64>,
    job_description: Option<String>,
    job_highlights: Option<WireHighlights>,
    job_required_skills: Option<Vec<String>>,
    job_benefits: Option<Vec<String>>,
    job_posted_at_datetime_utc: Option<DateTime<Utc>>,
    job_apply_link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireHighlights {
    #[serde(rename = "Summary", default)]
    summary: Vec<String>,
}

fn display_salary(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("${min:.0}k - ${max:.0}k"),
        (Some(min), None) => format!("${min:.0}k+"),
        _ => "Salary not specified".to_string(),
    }
}

fn display_location(city: Option<&str>, country: Option<&str>) -> String {
    match (city, country) {
        (Some(city), Some(country)) => format!("{city}, {country}"),
        (Some(city), None) => city.to_string(),
        (None, Some(country)) => country.to_string(),
        (None, None) => "Remote".to_string(),
    }
}

fn map_wire_job(job: WireJob) -> JobPosting {
    let id = job.job_id.unwrap_or_default();
    let description = job
        .job_description
        .filter(|d| !d.is_empty())
        .or_else(|| {
            job.job_highlights
                .map(|h| h.summary.join(" "))
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| "No description available".to_string());

    JobPosting {
        title: job.job_title.unwrap_or_default(),
        company: job.employer_name.unwrap_or_default(),
        location: display_location(job.job_city.as_deref(), job.job_country.as_deref()),
        salary: display_salary(job.job_min_salary, job.job_max_salary),
        description,
        skills: job.job_required_skills.unwrap_or_default(),
        posted_date: job.job_posted_at_datetime_utc.unwrap_or_else(Utc::now),
        apply_url: job
            .job_apply_link
            .unwrap_or_else(|| format!("https://linkedin.com/jobs/view/{id}")),
        id,
        // Live results get a neutral default score; real scoring only runs
        // in the personalized-recommendation path.
        match_score: 75,
        match_reasons: vec![
            "Skills alignment".to_string(),
            "Experience match".to_string(),
            "Location fit".to_string(),
        ],
    }
}

fn map_wire_detail(job: WireJob) -> JobDetail {
    JobDetail {
        id: job.job_id.clone().unwrap_or_default(),
        title: job.job_title.unwrap_or_default(),
        company: job.employer_name.unwrap_or_default(),
        location: display_location(job.job_city.as_deref(), job.job_country.as_deref()),
        salary: display_salary(job.job_min_salary, job.job_max_salary),
        description: job.job_description.unwrap_or_default(),
        requirements: job.job_required_skills.unwrap_or_default(),
        benefits: job.job_benefits.unwrap_or_default(),
        posted_date: job.job_posted_at_datetime_utc.unwrap_or_else(Utc::now),
        apply_url: job.job_apply_link.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_display_variants() {
        assert_eq!(display_salary(Some(120.0), Some(180.0)), "$120k - $180k");
        assert_eq!(display_salary(Some(120.0), None), "$120k+");
        assert_eq!(display_salary(None, Some(180.0)), "Salary not specified");
        assert_eq!(display_salary(None, None), "Salary not specified");
    }

    #[test]
    fn test_location_falls_back_to_remote() {
        assert_eq!(display_location(None, None), "Remote");
        assert_eq!(display_location(Some("Austin"), Some("US")), "Austin, US");
        assert_eq!(display_location(None, Some("US")), "US");
    }

    #[test]
    fn test_wire_job_mapping_defaults() {
        let posting = map_wire_job(WireJob {
            job_id: Some("abc".to_string()),
            job_title: Some("Engineer".to_string()),
            ..Default::default()
        });
        assert_eq!(posting.id, "abc");
        assert_eq!(posting.description, "No description available");
        assert_eq!(posting.apply_url, "https://linkedin.com/jobs/view/abc");
        assert_eq!(posting.match_score, 75);
    }

    #[test]
    fn test_wire_job_description_uses_highlights_when_empty() {
        let posting = map_wire_job(WireJob {
            job_highlights: Some(WireHighlights {
                summary: vec!["Build things.".to_string(), "Ship often.".to_string()],
            }),
            ..Default::default()
        });
        assert_eq!(posting.description, "Build things. Ship often.");
    }

    #[test]
    fn test_search_envelope_tolerates_missing_data_field() {
        let envelope: SearchEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_empty());
    }
}
