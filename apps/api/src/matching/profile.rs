//! Candidate profile inference — skills, experience level, and preferred
//! role categories derived from resume content. Nothing here is persisted;
//! inference reruns on every request.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matching::vocabulary::{
    PREF_BACKEND, PREF_DATA, PREF_DEVOPS, PREF_FRONTEND, PREF_MOBILE, TECH_KEYWORDS,
};
use crate::models::resume::ResumeRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    Frontend,
    Backend,
    Fullstack,
    Data,
    Devops,
    Mobile,
    General,
}

/// Matches "3 years", "1.5 year", etc. in free-text duration fields.
static YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*years?").expect("years regex"));

/// Technology keywords found in `text` by unanchored, case-insensitive
/// substring search. "java" matches inside "javascript" — see the
/// vocabulary module.
pub fn extract_tech_keywords(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    TECH_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .copied()
        .collect()
}

/// The candidate's lowercased skill set: explicit skills, keywords mined
/// from experience descriptions, project technologies, and keywords mined
/// from project descriptions. Order is first-seen; duplicates collapse.
pub fn extract_skills(resume: &ResumeRow) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();

    for skill in &resume.skills {
        push_unique(&mut skills, skill.to_lowercase());
    }

    for entry in resume.experience.iter() {
        if let Some(description) = &entry.description {
            for kw in extract_tech_keywords(description) {
                push_unique(&mut skills, kw.to_string());
            }
        }
    }

    for project in resume.projects.iter() {
        for tech in &project.technologies {
            push_unique(&mut skills, tech.to_lowercase());
        }
        if let Some(description) = &project.description {
            for kw in extract_tech_keywords(description) {
                push_unique(&mut skills, kw.to_string());
            }
        }
    }

    skills
}

fn push_unique(skills: &mut Vec<String>, skill: String) {
    if !skills.contains(&skill) {
        skills.push(skill);
    }
}

/// Averages the "N years" figures found in experience durations and
/// thresholds at ≥5 → senior, ≥2 → mid. No parseable durations ⇒ junior.
pub fn infer_experience_level(resume: &ResumeRow) -> ExperienceLevel {
    let mut total_years = 0.0_f64;
    let mut matched = 0_u32;

    for entry in resume.experience.iter() {
        if let Some(duration) = &entry.duration {
            if let Some(caps) = YEARS_RE.captures(duration) {
                if let Ok(years) = caps[1].parse::<f64>() {
                    total_years += years;
                    matched += 1;
                }
            }
        }
    }

    let avg_years = if matched > 0 {
        total_years / matched as f64
    } else {
        0.0
    };

    if avg_years >= 5.0 {
        ExperienceLevel::Senior
    } else if avg_years >= 2.0 {
        ExperienceLevel::Mid
    } else {
        ExperienceLevel::Junior
    }
}

/// Role categories the candidate plausibly wants, from skill-set membership
/// and position/description text. Fullstack requires both frontend and
/// backend signals. Empty ⇒ [General].
pub fn infer_preferred_roles(resume: &ResumeRow, skills: &[String]) -> Vec<RoleCategory> {
    let mut roles = Vec::new();

    let title_text: String = resume
        .experience
        .iter()
        .flat_map(|e| [e.position.as_deref(), e.description.as_deref()])
        .flatten()
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let has_skill = |set: &[&str]| skills.iter().any(|s| set.contains(&s.as_str()));

    if has_skill(PREF_FRONTEND) || title_text.contains("frontend") || title_text.contains("front-end")
    {
        roles.push(RoleCategory::Frontend);
    }

    if has_skill(PREF_BACKEND)
        || title_text.contains("backend")
        || title_text.contains("back-end")
        || title_text.contains("server")
    {
        roles.push(RoleCategory::Backend);
    }

    if roles.contains(&RoleCategory::Frontend) && roles.contains(&RoleCategory::Backend) {
        roles.push(RoleCategory::Fullstack);
    }

    if has_skill(PREF_DATA)
        || title_text.contains("data")
        || title_text.contains("analyst")
        || title_text.contains("scientist")
    {
        roles.push(RoleCategory::Data);
    }

    if has_skill(PREF_DEVOPS)
        || title_text.contains("devops")
        || title_text.contains("infrastructure")
        || title_text.contains("cloud")
    {
        roles.push(RoleCategory::Devops);
    }

    if has_skill(PREF_MOBILE)
        || title_text.contains("mobile")
        || title_text.contains("ios")
        || title_text.contains("android")
    {
        roles.push(RoleCategory::Mobile);
    }

    if roles.is_empty() {
        roles.push(RoleCategory::General);
    }

    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceEntry, PersonalInfo, ProjectEntry};
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn make_resume(
        skills: Vec<&str>,
        experience: Vec<ExperienceEntry>,
        projects: Vec<ProjectEntry>,
    ) -> ResumeRow {
        let now = Utc::now();
        ResumeRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "My Resume".to_string(),
            template: "professional".to_string(),
            personal_info: Json(PersonalInfo::default()),
            summary: None,
            experience: Json(experience),
            education: Json(Vec::new()),
            skills: skills.into_iter().map(String::from).collect(),
            projects: Json(projects),
            certifications: Json(Vec::new()),
            languages: Json(Vec::new()),
            created_at: now,
            updated_at: now,
        }
    }

    fn experience(description: &str, duration: Option<&str>) -> ExperienceEntry {
        ExperienceEntry {
            description: Some(description.to_string()),
            duration: duration.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_skills_are_lowercased() {
        let resume = make_resume(vec!["React", "Node.js"], vec![], vec![]);
        let skills = extract_skills(&resume);
        assert_eq!(skills, vec!["react", "node.js"]);
    }

    #[test]
    fn test_keywords_mined_from_experience_descriptions() {
        let resume = make_resume(
            vec![],
            vec![experience("Built services with Docker and Kubernetes", None)],
            vec![],
        );
        let skills = extract_skills(&resume);
        assert!(skills.contains(&"docker".to_string()));
        assert!(skills.contains(&"kubernetes".to_string()));
    }

    // Known quirk: substring matching means "javascript" text also yields
    // "java". Preserved for compatibility.
    #[test]
    fn test_java_false_positive_inside_javascript() {
        let resume = make_resume(
            vec![],
            vec![experience("Wrote a lot of JavaScript", None)],
            vec![],
        );
        let skills = extract_skills(&resume);
        assert!(skills.contains(&"javascript".to_string()));
        assert!(skills.contains(&"java".to_string()));
    }

    #[test]
    fn test_project_technologies_counted() {
        let resume = make_resume(
            vec![],
            vec![],
            vec![ProjectEntry {
                technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
                description: Some("CLI tool using redis for caching".to_string()),
                ..Default::default()
            }],
        );
        let skills = extract_skills(&resume);
        assert!(skills.contains(&"rust".to_string()));
        assert!(skills.contains(&"postgresql".to_string()));
        assert!(skills.contains(&"redis".to_string()));
    }

    #[test]
    fn test_experience_level_thresholds() {
        let senior = make_resume(
            vec![],
            vec![
                experience("x", Some("6 years")),
                experience("y", Some("7 years")),
            ],
            vec![],
        );
        assert_eq!(infer_experience_level(&senior), ExperienceLevel::Senior);

        let mid = make_resume(vec![], vec![experience("x", Some("3 years"))], vec![]);
        assert_eq!(infer_experience_level(&mid), ExperienceLevel::Mid);

        let junior = make_resume(vec![], vec![experience("x", Some("1 year"))], vec![]);
        assert_eq!(infer_experience_level(&junior), ExperienceLevel::Junior);
    }

    #[test]
    fn test_experience_level_averages_across_entries() {
        // (6 + 1) / 2 = 3.5 → mid, despite one senior-length stint.
        let resume = make_resume(
            vec![],
            vec![
                experience("x", Some("6 years")),
                experience("y", Some("1 year")),
            ],
            vec![],
        );
        assert_eq!(infer_experience_level(&resume), ExperienceLevel::Mid);
    }

    #[test]
    fn test_fractional_years_parse() {
        let resume = make_resume(vec![], vec![experience("x", Some("2.5 years"))], vec![]);
        assert_eq!(infer_experience_level(&resume), ExperienceLevel::Mid);
    }

    #[test]
    fn test_no_durations_means_junior() {
        let resume = make_resume(vec![], vec![experience("x", None)], vec![]);
        assert_eq!(infer_experience_level(&resume), ExperienceLevel::Junior);
    }

    #[test]
    fn test_preferred_roles_from_skills() {
        let resume = make_resume(vec!["react", "node.js"], vec![], vec![]);
        let skills = extract_skills(&resume);
        let roles = infer_preferred_roles(&resume, &skills);
        assert!(roles.contains(&RoleCategory::Frontend));
        assert!(roles.contains(&RoleCategory::Backend));
        assert!(roles.contains(&RoleCategory::Fullstack));
    }

    #[test]
    fn test_preferred_roles_from_position_text() {
        let resume = make_resume(
            vec![],
            vec![ExperienceEntry {
                position: Some("DevOps Engineer".to_string()),
                ..Default::default()
            }],
            vec![],
        );
        let roles = infer_preferred_roles(&resume, &[]);
        assert!(roles.contains(&RoleCategory::Devops));
    }

    #[test]
    fn test_empty_signals_fall_back_to_general() {
        let resume = make_resume(vec![], vec![], vec![]);
        let roles = infer_preferred_roles(&resume, &[]);
        assert_eq!(roles, vec![RoleCategory::General]);
    }
}
