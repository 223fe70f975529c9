//! Job match scoring — the 0–100 heuristic ranking a posting against a
//! candidate profile. All weights are additive onto a base of 50 and the
//! result is clamped; postings are scored independently of one another.

use crate::matching::profile::{ExperienceLevel, RoleCategory};
use crate::matching::vocabulary::{
    JOB_BACKEND, JOB_BACKEND_CORE, JOB_DATA, JOB_DEVOPS, JOB_FRONTEND, JOB_FRONTEND_CORE,
    JOB_MOBILE, TOP_COMPANIES,
};
use crate::models::job::JobPosting;

const BASE_SCORE: f64 = 50.0;
const SKILL_WEIGHT: f64 = 40.0;
const EXPERIENCE_BONUS: f64 = 20.0;
const EXPERIENCE_PENALTY: f64 = 10.0;
const ROLE_BONUS: f64 = 20.0;
const PRESTIGE_BONUS: f64 = 10.0;
const LOCATION_BONUS: f64 = 10.0;

/// Categorizes a posting from its title, then its skill list. Branch order
/// matters: a posting whose skills span several categories lands in the
/// first branch that claims it.
pub fn infer_job_role_type(job: &JobPosting) -> RoleCategory {
    let title = job.title.to_lowercase();
    let skills: Vec<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();
    let has = |set: &[&str]| skills.iter().any(|s| set.contains(&s.as_str()));

    if title.contains("frontend") || title.contains("front-end") || has(JOB_FRONTEND) {
        return RoleCategory::Frontend;
    }
    if title.contains("backend")
        || title.contains("back-end")
        || title.contains("server")
        || has(JOB_BACKEND)
    {
        return RoleCategory::Backend;
    }
    if (title.contains("full") && title.contains("stack"))
        || (has(JOB_FRONTEND_CORE) && has(JOB_BACKEND_CORE))
    {
        return RoleCategory::Fullstack;
    }
    if title.contains("data")
        || title.contains("analyst")
        || title.contains("scientist")
        || has(JOB_DATA)
    {
        return RoleCategory::Data;
    }
    if title.contains("devops")
        || title.contains("infrastructure")
        || title.contains("cloud")
        || has(JOB_DEVOPS)
    {
        return RoleCategory::Devops;
    }
    if title.contains("mobile")
        || title.contains("ios")
        || title.contains("android")
        || has(JOB_MOBILE)
    {
        return RoleCategory::Mobile;
    }

    RoleCategory::General
}

fn is_senior_title(title: &str) -> bool {
    title.contains("senior") || title.contains("lead") || title.contains("principal")
}

fn is_junior_title(title: &str) -> bool {
    title.contains("junior") || title.contains("entry") || title.contains("associate")
}

/// Job skills with at least one bidirectional, case-insensitive substring
/// match against the candidate's skills.
fn matched_job_skills(job: &JobPosting, resume_skills: &[String]) -> Vec<String> {
    let resume_lower: Vec<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();
    job.skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|job_skill| {
            resume_lower
                .iter()
                .any(|rs| job_skill.contains(rs.as_str()) || rs.contains(job_skill.as_str()))
        })
        .collect()
}

/// Computes the 0–100 match score for one posting.
pub fn match_score(
    job: &JobPosting,
    resume_skills: &[String],
    experience_level: ExperienceLevel,
    preferred_roles: &[RoleCategory],
    resume_location: &str,
) -> u32 {
    let mut score = BASE_SCORE;

    // Skill overlap, weighted by the fraction of the posting's skills the
    // candidate covers.
    let matches = matched_job_skills(job, resume_skills).len();
    let ratio = matches as f64 / job.skills.len().max(1) as f64;
    score += ratio * SKILL_WEIGHT;

    // Experience-level fit from title substrings. A junior candidate against
    // a non-senior role counts as a match; only hard mismatches are
    // penalized.
    let title = job.title.to_lowercase();
    let senior_role = is_senior_title(&title);
    let junior_role = is_junior_title(&title);

    let level_fits = match experience_level {
        ExperienceLevel::Senior => senior_role,
        ExperienceLevel::Mid => !senior_role && !junior_role,
        ExperienceLevel::Junior => junior_role || !senior_role,
    };
    let hard_mismatch = matches!(
        (experience_level, senior_role, junior_role),
        (ExperienceLevel::Junior, true, _) | (ExperienceLevel::Senior, _, true)
    );

    if level_fits {
        score += EXPERIENCE_BONUS;
    } else if hard_mismatch {
        score -= EXPERIENCE_PENALTY;
    }

    // Role-type fit. General never earns the bonus.
    let role_type = infer_job_role_type(job);
    if role_type != RoleCategory::General && preferred_roles.contains(&role_type) {
        score += ROLE_BONUS;
    }

    if TOP_COMPANIES.contains(&job.company.to_lowercase().as_str()) {
        score += PRESTIGE_BONUS;
    }

    // Location fit: remote postings always qualify; otherwise substring
    // containment of the candidate's location. An empty candidate location
    // matches vacuously — preserved behavior.
    let job_location = job.location.to_lowercase();
    if job_location.contains("remote") || job_location.contains(&resume_location.to_lowercase()) {
        score += LOCATION_BONUS;
    }

    (score.round()).clamp(0.0, 100.0) as u32
}

/// Up to three human-readable reasons backing the score.
pub fn match_reasons(
    job: &JobPosting,
    resume_skills: &[String],
    experience_level: ExperienceLevel,
    resume_location: &str,
) -> Vec<String> {
    let mut reasons = Vec::new();

    let match_count = matched_job_skills(job, resume_skills).len();
    if match_count > 0 {
        let plural = if match_count > 1 { "es" } else { "" };
        reasons.push(format!("{match_count} skill match{plural} found"));
    }

    let title = job.title.to_lowercase();
    let senior_role = title.contains("senior") || title.contains("lead");
    let junior_role = title.contains("junior") || title.contains("entry");
    let level_note = match experience_level {
        ExperienceLevel::Senior => senior_role,
        ExperienceLevel::Mid => !senior_role && !junior_role,
        ExperienceLevel::Junior => false,
    };
    if level_note {
        reasons.push("Experience level matches your background".to_string());
    }

    let job_location = job.location.to_lowercase();
    if job_location.contains("remote") {
        reasons.push("Remote work opportunity".to_string());
    } else if !resume_location.is_empty()
        && job_location.contains(&resume_location.to_lowercase())
    {
        reasons.push("Location matches your preferences".to_string());
    }

    if TOP_COMPANIES.contains(&job.company.to_lowercase().as_str()) {
        reasons.push("Top-tier company opportunity".to_string());
    }

    if reasons.is_empty() {
        reasons.push("Skills alignment with job requirements".to_string());
        reasons.push("Relevant experience match".to_string());
    }

    reasons.truncate(3);
    reasons
}

/// Scores every posting independently, sorts descending (stable — ties keep
/// catalog order), and returns the top 8 with score and reasons attached.
pub fn rank_jobs(
    jobs: &[JobPosting],
    resume_skills: &[String],
    experience_level: ExperienceLevel,
    preferred_roles: &[RoleCategory],
    resume_location: &str,
) -> Vec<JobPosting> {
    let mut scored: Vec<JobPosting> = jobs
        .iter()
        .map(|job| {
            let mut job = job.clone();
            job.match_score = match_score(
                &job,
                resume_skills,
                experience_level,
                preferred_roles,
                resume_location,
            );
            job.match_reasons =
                match_reasons(&job, resume_skills, experience_level, resume_location);
            job
        })
        .collect();

    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(8);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_job(title: &str, company: &str, location: &str, skills: &[&str]) -> JobPosting {
        JobPosting {
            id: "test".to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            salary: "$100k - $150k".to_string(),
            description: "A job".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            posted_date: Utc::now(),
            apply_url: "https://example.com".to_string(),
            match_score: 0,
            match_reasons: Vec::new(),
        }
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_half_skill_overlap_adds_twenty() {
        // 1 of 2 job skills matched → ratio 0.5 → +20 over the no-skill case.
        let job = make_job("Developer", "Acme", "Nowhere", &["React", "TypeScript"]);
        let with = match_score(
            &job,
            &skills(&["react", "node.js"]),
            ExperienceLevel::Mid,
            &[],
            "zzz",
        );
        let without = match_score(&job, &[], ExperienceLevel::Mid, &[], "zzz");
        assert_eq!(with - without, 20);
    }

    #[test]
    fn test_junior_candidate_senior_role_penalized() {
        let senior_job = make_job("Senior Backend Engineer", "Acme", "Nowhere", &[]);
        let neutral_job = make_job("Backend Engineer", "Acme", "Nowhere", &[]);

        let penalized = match_score(&senior_job, &[], ExperienceLevel::Junior, &[], "zzz");
        let matched = match_score(&neutral_job, &[], ExperienceLevel::Junior, &[], "zzz");

        // Junior vs non-senior role earns the +20 fit bonus; junior vs
        // senior role takes the −10 penalty instead.
        assert_eq!(matched - penalized, 30);
        assert_eq!(penalized, 40);
    }

    #[test]
    fn test_adding_matching_skill_never_decreases_score() {
        let job = make_job(
            "Software Engineer",
            "Acme",
            "Remote",
            &["Python", "AWS", "Docker"],
        );
        let mut resume_skills = skills(&["python"]);
        let mut last = match_score(&job, &resume_skills, ExperienceLevel::Mid, &[], "");
        for extra in ["aws", "docker"] {
            resume_skills.push(extra.to_string());
            let next = match_score(&job, &resume_skills, ExperienceLevel::Mid, &[], "");
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn test_score_clamped_to_100_when_everything_triggers() {
        let job = make_job("Frontend Developer", "Google", "Remote", &["React", "CSS"]);
        let score = match_score(
            &job,
            &skills(&["react", "css"]),
            ExperienceLevel::Mid,
            &[RoleCategory::Frontend],
            "",
        );
        // 50 + 40 + 20 + 20 + 10 + 10 = 150 before the clamp.
        assert_eq!(score, 100);
    }

    #[test]
    fn test_score_floor_is_zero() {
        let job = make_job("Senior Principal Engineer", "Acme", "Nowhere", &["COBOL"]);
        let score = match_score(&job, &[], ExperienceLevel::Junior, &[], "zzz");
        assert!(score <= 100);
        // 50 − 10 = 40; the floor only engages for pathological weights, but
        // the clamp is exercised here for the contract.
        assert_eq!(score, 40);
    }

    #[test]
    fn test_role_inference_title_beats_skills() {
        let job = make_job("Frontend Developer", "Acme", "X", &["Python", "Django"]);
        assert_eq!(infer_job_role_type(&job), RoleCategory::Frontend);
    }

    // Branch-order quirk: a DevOps posting listing Python lands in the
    // backend branch before the devops branch is consulted.
    #[test]
    fn test_devops_posting_with_python_categorized_backend() {
        let job = make_job(
            "Platform Engineer",
            "Acme",
            "X",
            &["Kubernetes", "Python", "Terraform"],
        );
        assert_eq!(infer_job_role_type(&job), RoleCategory::Backend);
    }

    #[test]
    fn test_devops_posting_without_backend_skills() {
        let job = make_job(
            "Site Reliability Engineer",
            "Acme",
            "X",
            &["Kubernetes", "Terraform", "Ansible"],
        );
        assert_eq!(infer_job_role_type(&job), RoleCategory::Devops);
    }

    #[test]
    fn test_general_role_never_earns_role_bonus() {
        let job = make_job("Ombudsman", "Acme", "Nowhere", &[]);
        assert_eq!(infer_job_role_type(&job), RoleCategory::General);
        let with_general = match_score(
            &job,
            &[],
            ExperienceLevel::Mid,
            &[RoleCategory::General],
            "zzz",
        );
        let without = match_score(&job, &[], ExperienceLevel::Mid, &[], "zzz");
        assert_eq!(with_general, without);
    }

    #[test]
    fn test_prestige_bonus_is_case_insensitive() {
        let google = make_job("Engineer", "Google", "Nowhere", &[]);
        let acme = make_job("Engineer", "Acme", "Nowhere", &[]);
        let a = match_score(&google, &[], ExperienceLevel::Mid, &[], "zzz");
        let b = match_score(&acme, &[], ExperienceLevel::Mid, &[], "zzz");
        assert_eq!(a - b, 10);
    }

    #[test]
    fn test_remote_location_bonus() {
        let remote = make_job("Engineer", "Acme", "Remote", &[]);
        let onsite = make_job("Engineer", "Acme", "Des Moines, IA", &[]);
        let a = match_score(&remote, &[], ExperienceLevel::Mid, &[], "zzz");
        let b = match_score(&onsite, &[], ExperienceLevel::Mid, &[], "zzz");
        assert_eq!(a - b, 10);
    }

    // Preserved behavior: an empty candidate location substring-matches any
    // job location, so the bonus applies everywhere.
    #[test]
    fn test_empty_resume_location_matches_vacuously() {
        let onsite = make_job("Engineer", "Acme", "Des Moines, IA", &[]);
        let with_empty = match_score(&onsite, &[], ExperienceLevel::Mid, &[], "");
        let with_other = match_score(&onsite, &[], ExperienceLevel::Mid, &[], "zzz");
        assert_eq!(with_empty - with_other, 10);
    }

    #[test]
    fn test_rank_jobs_sorts_descending_and_truncates() {
        let jobs: Vec<JobPosting> = (0..12)
            .map(|i| {
                if i == 6 {
                    make_job("Engineer", "Google", "Remote", &[])
                } else {
                    make_job("Engineer", &format!("Company {i}"), "Nowhere", &[])
                }
            })
            .collect();

        let ranked = rank_jobs(&jobs, &[], ExperienceLevel::Mid, &[], "zzz");
        assert_eq!(ranked.len(), 8);
        assert_eq!(ranked[0].company, "Google");
        // Stable sort: ties keep catalog order.
        assert_eq!(ranked[1].company, "Company 0");
        assert_eq!(ranked[2].company, "Company 1");
    }

    #[test]
    fn test_match_reasons_counts_and_defaults() {
        let job = make_job("Engineer", "Acme", "Nowhere", &["React", "CSS"]);
        let reasons = match_reasons(&job, &skills(&["react"]), ExperienceLevel::Junior, "");
        assert_eq!(reasons[0], "1 skill match found");

        let none = match_reasons(&job, &[], ExperienceLevel::Junior, "");
        assert_eq!(
            none,
            vec![
                "Skills alignment with job requirements".to_string(),
                "Relevant experience match".to_string()
            ]
        );
    }

    #[test]
    fn test_match_reasons_capped_at_three() {
        let job = make_job("Engineer", "Google", "Remote", &["React", "CSS"]);
        let reasons = match_reasons(
            &job,
            &skills(&["react", "css"]),
            ExperienceLevel::Mid,
            "",
        );
        assert!(reasons.len() <= 3);
    }
}
