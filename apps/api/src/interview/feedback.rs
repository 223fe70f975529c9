//! Feedback synthesis — pluggable, trait-based scorer for submitted answers.
//!
//! Default: `TemplateFeedbackSynthesizer`, a placeholder heuristic that draws
//! scores from a seeded RNG and picks canned phrasing per question type. The
//! trait boundary exists so a real evaluator (e.g. an LLM-backed one) can be
//! swapped in without touching the progression logic or handlers.
//!
//! `AppState` holds an `Arc<dyn FeedbackSynthesizer>`.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::interview::{Feedback, QuestionType};

/// Synthesizes feedback for one answer. Implementations must be cheap and
/// infallible — progression depends on every submission producing feedback.
pub trait FeedbackSynthesizer: Send + Sync {
    fn synthesize(&self, question_type: QuestionType, answer: &str) -> Feedback;
}

struct FeedbackPhrases {
    strengths: &'static [&'static str],
    improvements: &'static [&'static str],
    comments_high: &'static [&'static str],
    comments_medium: &'static [&'static str],
    comments_low: &'static [&'static str],
}

const TECHNICAL_PHRASES: FeedbackPhrases = FeedbackPhrases {
    strengths: &[
        "Clear technical understanding demonstrated",
        "Good use of relevant terminology",
        "Logical problem-solving approach",
        "Practical experience evident",
    ],
    improvements: &[
        "Could provide more specific examples",
        "Consider mentioning alternative approaches",
        "Add more technical depth",
        "Include performance considerations",
    ],
    comments_high: &[
        "Excellent technical response with strong problem-solving approach.",
        "Demonstrates deep understanding of technical concepts.",
        "Clear, concise, and technically accurate answer.",
    ],
    comments_medium: &[
        "Good technical foundation, could benefit from more specific examples.",
        "Solid understanding shown, consider adding implementation details.",
        "Technical knowledge is evident, focus on practical applications.",
    ],
    comments_low: &[
        "Basic understanding demonstrated, recommend deeper technical study.",
        "Response lacks technical depth, consider researching the topic further.",
        "More technical details and examples would strengthen this answer.",
    ],
};

const BEHAVIORAL_PHRASES: FeedbackPhrases = FeedbackPhrases {
    strengths: &[
        "Good communication skills",
        "Clear example provided",
        "Shows self-awareness",
        "Demonstrates growth mindset",
    ],
    improvements: &[
        "Could be more specific about outcomes",
        "Consider quantifying impact",
        "Add more context about challenges",
        "Include lessons learned",
    ],
    comments_high: &[
        "Excellent example with clear structure and strong communication.",
        "Well-articulated response showing self-awareness and growth.",
        "Compelling story with clear lessons learned and impact.",
    ],
    comments_medium: &[
        "Good example provided, could be more specific about outcomes.",
        "Solid response, consider adding more context about challenges faced.",
        "Clear communication, focus on quantifying impact and results.",
    ],
    comments_low: &[
        "Response needs more specific examples and outcomes.",
        "Consider providing more context and measurable results.",
        "Focus on specific situations and learnings from experiences.",
    ],
};

fn phrases_for(question_type: QuestionType) -> &'static FeedbackPhrases {
    match question_type {
        QuestionType::Technical => &TECHNICAL_PHRASES,
        // Situational questions share the behavioral phrasing pool.
        QuestionType::Behavioral | QuestionType::Situational => &BEHAVIORAL_PHRASES,
    }
}

/// The default heuristic synthesizer. Scores are drawn pseudo-randomly in a
/// realistic band; the RNG is the only non-determinism and is seedable so
/// tests can pin outputs.
pub struct TemplateFeedbackSynthesizer {
    rng: Mutex<StdRng>,
}

impl TemplateFeedbackSynthesizer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for TemplateFeedbackSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackSynthesizer for TemplateFeedbackSynthesizer {
    fn synthesize(&self, question_type: QuestionType, _answer: &str) -> Feedback {
        let phrases = phrases_for(question_type);
        let mut rng = self.rng.lock().expect("feedback rng poisoned");

        // Base in [6,9]; each component jitters within one point of the base.
        let base: i32 = rng.gen_range(6..=9);
        let relevance = (rng.gen_range(0..3) + base - 1).clamp(0, 10) as u8;
        let clarity = (rng.gen_range(0..3) + base - 1).clamp(0, 10) as u8;
        let completeness = (rng.gen_range(0..3) + base - 1).clamp(0, 10) as u8;

        let score = ((relevance as f64 + clarity as f64 + completeness as f64) / 3.0).round() as u8;

        let strengths_count = rng.gen_range(2..=3usize);
        let improvements_count = rng.gen_range(1..=2usize);

        let comment_pool = if score >= 8 {
            phrases.comments_high
        } else if score >= 6 {
            phrases.comments_medium
        } else {
            phrases.comments_low
        };
        let comments = comment_pool[rng.gen_range(0..comment_pool.len())].to_string();

        Feedback {
            score,
            strengths: phrases.strengths[..strengths_count]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            improvements: phrases.improvements[..improvements_count]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            relevance,
            clarity,
            completeness,
            comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_identical_feedback() {
        let a = TemplateFeedbackSynthesizer::with_seed(42);
        let b = TemplateFeedbackSynthesizer::with_seed(42);

        for _ in 0..20 {
            let fa = a.synthesize(QuestionType::Technical, "an answer");
            let fb = b.synthesize(QuestionType::Technical, "an answer");
            assert_eq!(fa.score, fb.score);
            assert_eq!(fa.relevance, fb.relevance);
            assert_eq!(fa.clarity, fb.clarity);
            assert_eq!(fa.completeness, fb.completeness);
            assert_eq!(fa.comments, fb.comments);
        }
    }

    #[test]
    fn test_components_and_score_stay_in_band() {
        let synth = TemplateFeedbackSynthesizer::with_seed(7);
        for _ in 0..200 {
            let f = synth.synthesize(QuestionType::Behavioral, "answer");
            assert!((5..=10).contains(&f.relevance));
            assert!((5..=10).contains(&f.clarity));
            assert!((5..=10).contains(&f.completeness));
            assert!((5..=10).contains(&f.score));
        }
    }

    #[test]
    fn test_strength_and_improvement_counts() {
        let synth = TemplateFeedbackSynthesizer::with_seed(99);
        for _ in 0..100 {
            let f = synth.synthesize(QuestionType::Technical, "answer");
            assert!((2..=3).contains(&f.strengths.len()));
            assert!((1..=2).contains(&f.improvements.len()));
        }
    }

    #[test]
    fn test_comment_matches_score_bracket() {
        let synth = TemplateFeedbackSynthesizer::with_seed(1);
        for _ in 0..200 {
            let f = synth.synthesize(QuestionType::Technical, "answer");
            let pool: &[&str] = if f.score >= 8 {
                TECHNICAL_PHRASES.comments_high
            } else if f.score >= 6 {
                TECHNICAL_PHRASES.comments_medium
            } else {
                TECHNICAL_PHRASES.comments_low
            };
            assert!(pool.contains(&f.comments.as_str()));
        }
    }

    #[test]
    fn test_situational_uses_behavioral_phrasing() {
        let synth = TemplateFeedbackSynthesizer::with_seed(3);
        let f = synth.synthesize(QuestionType::Situational, "answer");
        assert!(BEHAVIORAL_PHRASES.strengths.contains(&f.strengths[0].as_str()));
    }
}
