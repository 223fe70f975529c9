//! Baked-in demo job catalog — the fallback dataset served whenever the live
//! search provider is unconfigured or unreachable, plus the keyword/location/
//! skill filtering applied identically to demo and live results.

use chrono::Utc;
use once_cell::sync::Lazy;

use crate::models::job::{JobDetail, JobPosting};

struct CatalogSeed {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary: &'static str,
    description: &'static str,
    skills: &'static [&'static str],
    apply_url: &'static str,
    match_score: u32,
    match_reasons: &'static [&'static str],
}

const CATALOG_SEED: &[CatalogSeed] = &[
    CatalogSeed {
        id: "1",
        title: "Frontend Developer",
        company: "Google",
        location: "Mountain View, CA",
        salary: "$120k - $180k",
        description: "Build next-generation web applications using React, TypeScript, and modern web technologies. Work with a world-class engineering team.",
        skills: &["React", "TypeScript", "JavaScript", "CSS", "Node.js", "HTML", "SASS", "Webpack"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=frontend+developer&location=California&f_C=1441",
        match_score: 85,
        match_reasons: &["Strong React experience", "TypeScript proficiency", "Modern web technologies"],
    },
    CatalogSeed {
        id: "2",
        title: "Full Stack Developer",
        company: "Microsoft",
        location: "Seattle, WA",
        salary: "$130k - $190k",
        description: "Develop and maintain scalable web applications using .NET, React, and Azure cloud services.",
        skills: &["React", "C#", ".NET", "Azure", "SQL", "JavaScript", "MongoDB", "Express"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=full+stack+developer&location=Seattle&f_C=1035",
        match_score: 78,
        match_reasons: &["Full-stack capabilities", "Cloud experience", "Database skills"],
    },
    CatalogSeed {
        id: "3",
        title: "Software Engineer",
        company: "Amazon",
        location: "Remote",
        salary: "$110k - $170k",
        description: "Work on distributed systems and cloud infrastructure. Experience with AWS, Python, and microservices required.",
        skills: &["Python", "AWS", "Docker", "Kubernetes", "Java", "Microservices", "REST API", "Django"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=software+engineer&f_WT=2",
        match_score: 92,
        match_reasons: &["Python expertise", "AWS experience", "Microservices knowledge"],
    },
    CatalogSeed {
        id: "4",
        title: "React Developer",
        company: "Meta",
        location: "Menlo Park, CA",
        salary: "$140k - $200k",
        description: "Build user-facing web applications for billions of users. Focus on performance, accessibility, and user experience.",
        skills: &["React", "JavaScript", "GraphQL", "Redux", "CSS", "TypeScript", "Jest", "Next.js"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=react+developer&location=California&f_C=10667",
        match_score: 88,
        match_reasons: &["Advanced React skills", "GraphQL experience", "Performance optimization"],
    },
    CatalogSeed {
        id: "5",
        title: "Backend Developer",
        company: "Netflix",
        location: "Los Gatos, CA",
        salary: "$150k - $220k",
        description: "Design and implement scalable backend services. Work with microservices architecture and cloud technologies.",
        skills: &["Java", "Spring Boot", "AWS", "Docker", "Kafka", "PostgreSQL", "Redis", "Microservices"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=backend+developer&location=California&f_C=165158",
        match_score: 76,
        match_reasons: &["Backend development experience", "Database knowledge", "API design"],
    },
    CatalogSeed {
        id: "6",
        title: "DevOps Engineer",
        company: "Spotify",
        location: "New York, NY",
        salary: "$120k - $180k",
        description: "Manage CI/CD pipelines, infrastructure as code, and cloud deployments. Experience with Kubernetes and monitoring tools.",
        skills: &["Kubernetes", "Docker", "AWS", "Terraform", "Jenkins", "Linux", "Python", "Ansible"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=devops+engineer&location=New+York&f_C=147195",
        match_score: 81,
        match_reasons: &["DevOps tools experience", "Cloud infrastructure", "Automation skills"],
    },
    CatalogSeed {
        id: "7",
        title: "Python Developer",
        company: "Tesla",
        location: "Austin, TX",
        salary: "$115k - $175k",
        description: "Develop Python applications for autonomous vehicle systems. Work with machine learning and data processing pipelines.",
        skills: &["Python", "Django", "Flask", "Machine Learning", "Pandas", "NumPy", "TensorFlow", "FastAPI"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=python+developer&location=Texas&f_C=4319",
        match_score: 89,
        match_reasons: &["Python proficiency", "ML experience", "Data processing skills"],
    },
    CatalogSeed {
        id: "8",
        title: "Mobile App Developer",
        company: "Apple",
        location: "Cupertino, CA",
        salary: "$130k - $200k",
        description: "Create innovative mobile applications for iOS devices. Experience with Swift and iOS development required.",
        skills: &["Swift", "iOS", "Xcode", "Objective-C", "UIKit", "Core Data", "SwiftUI", "React Native"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=ios+developer&location=California&f_C=162479",
        match_score: 74,
        match_reasons: &["Mobile development experience", "iOS expertise", "App development"],
    },
    CatalogSeed {
        id: "9",
        title: "Data Scientist",
        company: "Uber",
        location: "San Francisco, CA",
        salary: "$140k - $210k",
        description: "Analyze large datasets to improve ride-sharing algorithms and user experience. Strong statistical and machine learning skills required.",
        skills: &["Python", "R", "Machine Learning", "SQL", "Tableau", "Spark", "Hadoop", "Statistics"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=data+scientist&location=San+Francisco&f_C=1815218",
        match_score: 91,
        match_reasons: &["Data science expertise", "ML algorithms", "Statistical analysis"],
    },
    CatalogSeed {
        id: "10",
        title: "UI/UX Designer",
        company: "Adobe",
        location: "San Jose, CA",
        salary: "$100k - $160k",
        description: "Design intuitive user interfaces and experiences for creative software products. Proficiency in design tools required.",
        skills: &["Figma", "Sketch", "Adobe XD", "Prototyping", "User Research", "Wireframing", "Design Systems", "InVision"],
        apply_url: "https://www.indeed.com/jobs?q=ui+ux+designer&l=California",
        match_score: 67,
        match_reasons: &["Design tool proficiency", "UI/UX experience", "Prototyping skills"],
    },
    CatalogSeed {
        id: "11",
        title: "Database Administrator",
        company: "Oracle",
        location: "Redwood City, CA",
        salary: "$110k - $170k",
        description: "Manage and optimize large-scale database systems. Experience with Oracle databases and performance tuning required.",
        skills: &["Oracle", "SQL", "PL/SQL", "Database Administration", "Performance Tuning", "Backup & Recovery", "MySQL", "PostgreSQL"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=database+administrator&location=California&f_C=1028",
        match_score: 83,
        match_reasons: &["Database administration", "SQL expertise", "Performance tuning"],
    },
    CatalogSeed {
        id: "12",
        title: "Security Engineer",
        company: "Cisco",
        location: "San Jose, CA",
        salary: "$125k - $185k",
        description: "Implement and maintain cybersecurity measures for enterprise networks. Knowledge of security protocols and threat analysis required.",
        skills: &["Cybersecurity", "Network Security", "Firewalls", "SIEM", "Penetration Testing", "Python", "Linux", "Ethical Hacking"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=security+engineer&location=California&f_C=1063",
        match_score: 79,
        match_reasons: &["Security expertise", "Network knowledge", "Compliance experience"],
    },
    CatalogSeed {
        id: "13",
        title: "Angular Developer",
        company: "IBM",
        location: "Austin, TX",
        salary: "$105k - $165k",
        description: "Develop enterprise applications using Angular framework. Experience with TypeScript and RxJS required.",
        skills: &["Angular", "TypeScript", "RxJS", "JavaScript", "HTML", "CSS", "Node.js", "Express"],
        apply_url: "https://www.indeed.com/jobs?q=angular+developer&l=Texas",
        match_score: 86,
        match_reasons: &["Angular expertise", "TypeScript skills", "Enterprise development"],
    },
    CatalogSeed {
        id: "14",
        title: "Vue.js Developer",
        company: "GitLab",
        location: "Remote",
        salary: "$95k - $155k",
        description: "Build and maintain Vue.js applications for the GitLab platform. Experience with Vue ecosystem and testing frameworks.",
        skills: &["Vue.js", "JavaScript", "Vuex", "Nuxt.js", "Jest", "Cypress", "TypeScript", "GraphQL"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=vue+js+developer&f_WT=2&f_C=3808127",
        match_score: 82,
        match_reasons: &["Vue.js proficiency", "JavaScript skills", "Testing experience"],
    },
    CatalogSeed {
        id: "15",
        title: "Blockchain Developer",
        company: "Coinbase",
        location: "Remote",
        salary: "$135k - $195k",
        description: "Develop smart contracts and blockchain applications. Experience with Solidity and Web3 technologies required.",
        skills: &["Solidity", "Web3", "Ethereum", "Smart Contracts", "JavaScript", "React", "Node.js", "Truffle"],
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=blockchain+developer&f_WT=2&f_C=11700",
        match_score: 77,
        match_reasons: &["Blockchain experience", "Smart contract development", "Web3 knowledge"],
    },
];

static DEMO_CATALOG: Lazy<Vec<JobPosting>> = Lazy::new(|| {
    let posted = Utc::now();
    CATALOG_SEED
        .iter()
        .map(|seed| JobPosting {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            company: seed.company.to_string(),
            location: seed.location.to_string(),
            salary: seed.salary.to_string(),
            description: seed.description.to_string(),
            skills: seed.skills.iter().map(|s| s.to_string()).collect(),
            posted_date: posted,
            apply_url: seed.apply_url.to_string(),
            match_score: seed.match_score,
            match_reasons: seed.match_reasons.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
});

pub fn demo_jobs() -> &'static [JobPosting] {
    &DEMO_CATALOG
}

/// Fixed detail payload for the single-job endpoint when no live provider is
/// configured.
pub fn demo_job_detail(id: &str) -> JobDetail {
    JobDetail {
        id: id.to_string(),
        title: "Software Developer".to_string(),
        company: "Tech Company".to_string(),
        location: "San Francisco, CA".to_string(),
        salary: "$100k - $130k".to_string(),
        description: "We are looking for a talented software developer to join our team. You will work on cutting-edge web applications using modern technologies including React, Node.js, and cloud services.".to_string(),
        requirements: ["3+ years experience", "React", "Node.js", "JavaScript", "Git"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        benefits: [
            "Health insurance",
            "Remote work options",
            "401k matching",
            "Professional development budget",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        posted_date: Utc::now(),
        apply_url: "https://linkedin.com/jobs/view/software-developer-tech-company".to_string(),
    }
}

/// Applies the keyword/location/skill filters. With no filters set the input
/// passes through untouched; with filters set but nothing matching, the
/// first five postings come back as suggestions.
pub fn filter_jobs(
    jobs: &[JobPosting],
    skills: Option<&str>,
    location: Option<&str>,
    keywords: Option<&str>,
) -> Vec<JobPosting> {
    if skills.is_none() && location.is_none() && keywords.is_none() {
        return jobs.to_vec();
    }

    let skill_terms: Vec<String> = skills
        .map(|s| {
            s.split(',')
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let filtered: Vec<JobPosting> = jobs
        .iter()
        .filter(|job| {
            if !skill_terms.is_empty() {
                let job_skills: Vec<String> =
                    job.skills.iter().map(|s| s.to_lowercase()).collect();
                let any_match = skill_terms.iter().any(|user_skill| {
                    job_skills.iter().any(|job_skill| {
                        job_skill.contains(user_skill.as_str())
                            || user_skill.contains(job_skill.as_str())
                    })
                });
                if !any_match {
                    return false;
                }
            }

            if let Some(location) = location {
                let wanted = location.to_lowercase();
                let job_location = job.location.to_lowercase();
                let city = job_location
                    .split(',')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                if !job_location.contains(&wanted)
                    && !wanted.contains(&city)
                    && !job_location.contains("remote")
                {
                    return false;
                }
            }

            if let Some(keywords) = keywords {
                let wanted = keywords.to_lowercase();
                let job_text = format!(
                    "{} {} {}",
                    job.title,
                    job.description,
                    job.skills.join(" ")
                )
                .to_lowercase();
                if !job_text.contains(&wanted) {
                    return false;
                }
            }

            true
        })
        .cloned()
        .collect();

    if filtered.is_empty() {
        return jobs.iter().take(5).cloned().collect();
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_fifteen_postings() {
        assert_eq!(demo_jobs().len(), 15);
    }

    #[test]
    fn test_no_filters_passes_everything_through() {
        let all = filter_jobs(demo_jobs(), None, None, None);
        assert_eq!(all.len(), 15);
    }

    #[test]
    fn test_skill_filter_is_bidirectional_substring() {
        let hits = filter_jobs(demo_jobs(), Some("typescript"), None, None);
        // Postings listing "TypeScript" match directly.
        assert!(hits.iter().any(|j| j.title == "Frontend Developer"));
        // The match runs both directions, so the single-letter skill "R"
        // inside "typescript" also pulls in the Data Scientist posting.
        assert!(hits.iter().any(|j| j.title == "Data Scientist"));
    }

    #[test]
    fn test_location_filter_keeps_remote_postings() {
        let hits = filter_jobs(demo_jobs(), None, Some("Austin"), None);
        // Remote postings survive any location filter.
        assert!(hits
            .iter()
            .any(|j| j.location.to_lowercase().contains("remote")));
        assert!(hits.iter().any(|j| j.location.contains("Austin")));
    }

    #[test]
    fn test_keyword_filter_searches_title_description_skills() {
        let hits = filter_jobs(demo_jobs(), None, None, Some("blockchain"));
        assert!(hits.iter().any(|j| j.title == "Blockchain Developer"));
    }

    #[test]
    fn test_no_matches_degrades_to_first_five_suggestions() {
        let hits = filter_jobs(demo_jobs(), Some("qbasic"), None, None);
        assert_eq!(hits.len(), 5);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn test_blank_skill_terms_are_ignored() {
        let hits = filter_jobs(demo_jobs(), Some(" , ,"), None, None);
        // All terms blank → the skill check is skipped entirely.
        assert_eq!(hits.len(), 15);
    }
}
