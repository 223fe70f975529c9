//! Per-role question bank — immutable reference data, loaded once.
//!
//! Lookup is by exact role name; unknown roles fall back to the
//! Software Engineer bank.

pub struct QuestionBank {
    pub technical: &'static [&'static str],
    pub behavioral: &'static [&'static str],
}

pub const SOFTWARE_ENGINEER: QuestionBank = QuestionBank {
    technical: &[
        "Explain the difference between REST and GraphQL APIs.",
        "How would you optimize a slow database query?",
        "Describe your experience with version control systems.",
        "How do you handle state management in a React application?",
        "Explain the concept of microservices architecture.",
        "How would you approach debugging a memory leak?",
        "Describe the difference between SQL and NoSQL databases.",
        "How do you ensure code quality and prevent bugs?",
    ],
    behavioral: &[
        "Tell me about a challenging project you worked on and how you overcame obstacles.",
        "How do you handle tight deadlines and competing priorities?",
        "Describe a time when you received constructive criticism and how you responded.",
        "How do you approach learning new technologies?",
        "Tell me about a time you had to work with a difficult team member.",
        "How do you prioritize tasks when working on multiple projects?",
        "Describe your approach to code reviews.",
        "How do you stay updated with industry trends?",
    ],
};

const FRONTEND_DEVELOPER: QuestionBank = QuestionBank {
    technical: &[
        "How do you optimize React application performance?",
        "Explain the virtual DOM and how it works.",
        "How would you implement responsive design?",
        "Describe your experience with state management libraries.",
        "How do you handle cross-browser compatibility issues?",
        "Explain CSS Grid vs Flexbox.",
        "How do you approach testing React components?",
        "Describe your experience with build tools and bundlers.",
    ],
    behavioral: &[
        "How do you ensure your code is accessible?",
        "Tell me about a UI/UX challenge you faced.",
        "How do you collaborate with designers?",
        "Describe your approach to user feedback.",
        "How do you handle browser compatibility issues?",
        "Tell me about a time you improved user experience.",
        "How do you stay updated with frontend trends?",
        "Describe your debugging process for UI issues.",
    ],
};

const BACKEND_DEVELOPER: QuestionBank = QuestionBank {
    technical: &[
        "How do you design scalable APIs?",
        "Explain database indexing and when to use it.",
        "How do you handle database migrations?",
        "Describe your experience with caching strategies.",
        "How do you approach API security?",
        "Explain the differences between monolithic and microservices architecture.",
        "How do you handle database transactions?",
        "Describe your experience with message queues.",
    ],
    behavioral: &[
        "How do you ensure API reliability and uptime?",
        "Tell me about a performance optimization you implemented.",
        "How do you handle database schema changes?",
        "Describe your approach to code documentation.",
        "How do you collaborate with frontend developers?",
        "Tell me about a time you dealt with a production issue.",
        "How do you approach technical debt?",
        "Describe your monitoring and logging practices.",
    ],
};

const FULL_STACK_DEVELOPER: QuestionBank = QuestionBank {
    technical: &[
        "How do you approach full-stack architecture design?",
        "Explain your experience with both frontend and backend technologies.",
        "How do you handle data flow between frontend and backend?",
        "Describe your deployment and CI/CD experience.",
        "How do you ensure security across the full stack?",
        "Explain your approach to API design and documentation.",
        "How do you handle state synchronization in full-stack apps?",
        "Describe your experience with cloud platforms and services.",
    ],
    behavioral: &[
        "How do you coordinate between frontend and backend teams?",
        "Tell me about a full-stack project you led.",
        "How do you balance frontend and backend priorities?",
        "Describe your approach to end-to-end testing.",
        "How do you handle cross-team communication?",
        "Tell me about a time you optimized a full-stack application.",
        "How do you stay current with both frontend and backend technologies?",
        "Describe your experience with agile development in full-stack projects.",
    ],
};

const DATA_SCIENTIST: QuestionBank = QuestionBank {
    technical: &[
        "Explain the bias-variance tradeoff in machine learning.",
        "How do you handle missing data in a dataset?",
        "Describe your experience with feature engineering.",
        "How do you evaluate model performance?",
        "Explain overfitting and how to prevent it.",
        "How do you approach A/B testing?",
        "Describe your experience with data visualization.",
        "How do you handle imbalanced datasets?",
    ],
    behavioral: &[
        "How do you communicate technical findings to non-technical stakeholders?",
        "Tell me about a time you had to clean messy data.",
        "How do you validate your model's assumptions?",
        "Describe your approach to exploratory data analysis.",
        "How do you stay updated with ML research?",
        "Tell me about a model deployment challenge you faced.",
        "How do you ensure model fairness and ethics?",
        "Describe your experience with cross-functional collaboration.",
    ],
};

const DEVOPS_ENGINEER: QuestionBank = QuestionBank {
    technical: &[
        "How do you design and implement CI/CD pipelines?",
        "Explain your experience with infrastructure as code.",
        "How do you approach container orchestration?",
        "Describe your monitoring and alerting strategies.",
        "How do you handle incident response and resolution?",
        "Explain your experience with cloud platforms.",
        "How do you ensure system security and compliance?",
        "Describe your approach to performance optimization.",
    ],
    behavioral: &[
        "How do you collaborate with development and operations teams?",
        "Tell me about a time you improved deployment processes.",
        "How do you balance speed and reliability in deployments?",
        "Describe your approach to knowledge sharing in DevOps culture.",
        "How do you handle post-mortem reviews after incidents?",
        "Tell me about a time you automated a complex process.",
        "How do you stay updated with DevOps tools and practices?",
        "Describe your experience with cross-team collaboration.",
    ],
};

const MOBILE_APP_DEVELOPER: QuestionBank = QuestionBank {
    technical: &[
        "How do you approach mobile app architecture design?",
        "Explain your experience with native vs cross-platform development.",
        "How do you optimize mobile app performance?",
        "Describe your approach to mobile UI/UX implementation.",
        "How do you handle device compatibility and testing?",
        "Explain your experience with mobile APIs and services.",
        "How do you approach mobile security considerations?",
        "Describe your app store submission and deployment process.",
    ],
    behavioral: &[
        "How do you handle platform-specific design requirements?",
        "Tell me about a mobile app project you led.",
        "How do you balance app features with performance?",
        "Describe your approach to mobile user testing.",
        "How do you stay updated with mobile development trends?",
        "Tell me about a time you optimized app performance.",
        "How do you collaborate with designers for mobile projects?",
        "Describe your experience with app store guidelines and reviews.",
    ],
};

const PRODUCT_MANAGER: QuestionBank = QuestionBank {
    technical: &[
        "How do you prioritize features using data-driven approaches?",
        "Describe your experience with A/B testing frameworks.",
        "How do you define and track product metrics?",
        "Explain your approach to technical requirement gathering.",
        "How do you balance technical debt with new features?",
        "Describe your experience with agile methodologies.",
        "How do you validate product-market fit?",
        "Explain your approach to user research and feedback analysis.",
    ],
    behavioral: &[
        "Tell me about a time you had to say no to a feature request.",
        "How do you handle conflicting priorities from stakeholders?",
        "Describe a product launch you led.",
        "How do you build consensus among cross-functional teams?",
        "Tell me about a time you had to pivot on a product decision.",
        "How do you mentor and develop your team?",
        "Describe your approach to stakeholder management.",
        "How do you stay customer-focused in decision making?",
    ],
};

const QA_ENGINEER: QuestionBank = QuestionBank {
    technical: &[
        "How do you design comprehensive test suites?",
        "Explain your experience with automated testing frameworks.",
        "How do you approach test case design and coverage?",
        "Describe your experience with performance testing.",
        "How do you handle test environment setup and management?",
        "Explain your approach to bug tracking and reporting.",
        "How do you ensure test quality and effectiveness?",
        "Describe your experience with CI/CD integration testing.",
    ],
    behavioral: &[
        "How do you collaborate with developers to improve quality?",
        "Tell me about a time you found a critical bug before release.",
        "How do you balance thorough testing with release timelines?",
        "Describe your approach to test automation strategy.",
        "How do you handle conflicting priorities in testing?",
        "Tell me about a time you improved testing processes.",
        "How do you stay updated with testing methodologies?",
        "Describe your experience with agile testing practices.",
    ],
};

const BANKS: &[(&str, &QuestionBank)] = &[
    ("Software Engineer", &SOFTWARE_ENGINEER),
    ("Frontend Developer", &FRONTEND_DEVELOPER),
    ("Backend Developer", &BACKEND_DEVELOPER),
    ("Full Stack Developer", &FULL_STACK_DEVELOPER),
    ("Data Scientist", &DATA_SCIENTIST),
    ("DevOps Engineer", &DEVOPS_ENGINEER),
    ("Mobile App Developer", &MOBILE_APP_DEVELOPER),
    ("Product Manager", &PRODUCT_MANAGER),
    ("QA Engineer", &QA_ENGINEER),
];

/// Returns the bank for `role`, or the Software Engineer bank when the role
/// has no bank of its own.
pub fn bank_for_role(role: &str) -> &'static QuestionBank {
    BANKS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, bank)| *bank)
        .unwrap_or(&SOFTWARE_ENGINEER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_role_resolves_to_own_bank() {
        let bank = bank_for_role("Data Scientist");
        assert!(bank.technical[0].contains("bias-variance"));
    }

    #[test]
    fn test_unknown_role_falls_back_to_software_engineer() {
        let bank = bank_for_role("Underwater Basket Weaver");
        assert_eq!(bank.technical[0], SOFTWARE_ENGINEER.technical[0]);
    }

    #[test]
    fn test_every_bank_has_questions_on_both_tracks() {
        for (role, bank) in BANKS {
            assert!(!bank.technical.is_empty(), "{role} has no technical questions");
            assert!(!bank.behavioral.is_empty(), "{role} has no behavioral questions");
        }
    }
}
