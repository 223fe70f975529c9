//! Fixed vocabularies backing skill extraction and role inference.
//! Immutable reference data, loaded once.

/// Technology keywords searched for (case-insensitive, unanchored substring)
/// in resume free text. Substring matching means "java" also hits inside
/// "javascript" — kept for compatibility with existing score expectations.
pub const TECH_KEYWORDS: &[&str] = &[
    // Programming languages
    "javascript",
    "python",
    "java",
    "c++",
    "c#",
    "php",
    "ruby",
    "go",
    "rust",
    "swift",
    "kotlin",
    "typescript",
    // Web technologies
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "laravel",
    "html",
    "css",
    "sass",
    "less",
    // Databases
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "oracle",
    "sql server",
    // Cloud & devops
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "terraform",
    "ansible",
    "linux",
    "git",
    // Data science & ML
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "pytorch",
    "machine learning",
    "data science",
    "sql",
    "tableau",
    "power bi",
    // Mobile
    "ios",
    "android",
    "react native",
    "flutter",
    "xamarin",
    // Other
    "api",
    "rest",
    "graphql",
    "microservices",
    "agile",
    "scrum",
];

/// Employers granted the flat prestige bonus.
pub const TOP_COMPANIES: &[&str] = &[
    "google",
    "microsoft",
    "amazon",
    "meta",
    "apple",
    "netflix",
    "tesla",
];

// Candidate-side skill sets for preferred-role inference. Membership is
// exact (against extracted, lowercased skills), not substring.
pub const PREF_FRONTEND: &[&str] = &[
    "react",
    "angular",
    "vue",
    "javascript",
    "typescript",
    "html",
    "css",
];
pub const PREF_BACKEND: &[&str] = &[
    "node.js",
    "python",
    "java",
    "php",
    "ruby",
    "go",
    "c#",
    "spring",
    "django",
    "flask",
];
pub const PREF_DATA: &[&str] = &[
    "python",
    "r",
    "machine learning",
    "data science",
    "sql",
    "pandas",
    "numpy",
    "tableau",
];
pub const PREF_DEVOPS: &[&str] = &[
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "jenkins",
    "terraform",
    "ansible",
    "linux",
];
pub const PREF_MOBILE: &[&str] = &[
    "ios",
    "android",
    "swift",
    "kotlin",
    "react native",
    "flutter",
];

// Job-side skill sets for categorizing a posting. These differ slightly
// from the candidate-side sets above (they were tuned against posting data,
// not resume data) and are kept separate on purpose.
pub const JOB_FRONTEND: &[&str] = &[
    "react",
    "angular",
    "vue",
    "javascript",
    "typescript",
    "html",
    "css",
];
pub const JOB_BACKEND: &[&str] = &[
    "node.js",
    "python",
    "java",
    "php",
    "ruby",
    "go",
    "c#",
    "spring",
    "django",
];
pub const JOB_FRONTEND_CORE: &[&str] = &["react", "angular", "vue"];
pub const JOB_BACKEND_CORE: &[&str] = &["node.js", "python", "java", "php"];
pub const JOB_DATA: &[&str] = &["python", "r", "machine learning", "sql", "tableau", "pandas"];
pub const JOB_DEVOPS: &[&str] = &["docker", "kubernetes", "aws", "azure", "terraform", "ansible"];
pub const JOB_MOBILE: &[&str] = &["swift", "kotlin", "react native", "flutter"];
