//! Question generation — deterministic selection from the per-role bank.
//!
//! Output is a pure function of (role, total, flags) apart from the freshly
//! minted question ids. No randomness is involved: small banks are cycled
//! modulo their length, so repeats are allowed and expected.

use uuid::Uuid;

use crate::interview::question_bank::bank_for_role;
use crate::models::interview::{Difficulty, Question, QuestionType};

const TOPIC_TECHNICAL: &str = "Technical Skills";
const TOPIC_BEHAVIORAL: &str = "Behavioral Skills";

/// Generates the ordered question list for a new session.
///
/// Technical questions fill `ceil(total * 0.6)` slots, behavioral questions
/// the remainder; all technical entries precede all behavioral ones and
/// `order` increases strictly from 0 in emission order. With both flags off
/// the result is empty.
pub fn generate_questions(
    role: &str,
    total_questions: u32,
    include_technical: bool,
    include_behavioral: bool,
) -> Vec<Question> {
    let bank = bank_for_role(role);
    let mut questions: Vec<Question> = Vec::new();
    let mut order: u32 = 0;

    if include_technical {
        let technical_count = (total_questions as f64 * 0.6).ceil() as u32;
        for i in 0..technical_count {
            if order >= total_questions {
                break;
            }
            let text = bank.technical[i as usize % bank.technical.len()];
            // Difficulty ramps with position within the technical batch:
            // first 30% easy, next 40% medium, final 30% hard.
            let difficulty = if (i as f64) < technical_count as f64 * 0.3 {
                Difficulty::Easy
            } else if (i as f64) < technical_count as f64 * 0.7 {
                Difficulty::Medium
            } else {
                Difficulty::Hard
            };
            questions.push(Question {
                id: Uuid::new_v4(),
                question: text.to_string(),
                question_type: QuestionType::Technical,
                difficulty,
                topic: TOPIC_TECHNICAL.to_string(),
                order,
            });
            order += 1;
        }
    }

    if include_behavioral {
        let behavioral_count = total_questions.saturating_sub(questions.len() as u32);
        for i in 0..behavioral_count {
            if order >= total_questions {
                break;
            }
            let text = bank.behavioral[i as usize % bank.behavioral.len()];
            // Behavioral batch ramps 40% easy / 40% medium / 20% hard.
            let difficulty = if (i as f64) < behavioral_count as f64 * 0.4 {
                Difficulty::Easy
            } else if (i as f64) < behavioral_count as f64 * 0.8 {
                Difficulty::Medium
            } else {
                Difficulty::Hard
            };
            questions.push(Question {
                id: Uuid::new_v4(),
                question: text.to_string(),
                question_type: QuestionType::Behavioral,
                difficulty,
                topic: TOPIC_BEHAVIORAL.to_string(),
                order,
            });
            order += 1;
        }
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_questions_split_six_technical_four_behavioral() {
        let questions = generate_questions("Software Engineer", 10, true, true);
        assert_eq!(questions.len(), 10);

        let technical: Vec<_> = questions
            .iter()
            .filter(|q| q.question_type == QuestionType::Technical)
            .collect();
        let behavioral: Vec<_> = questions
            .iter()
            .filter(|q| q.question_type == QuestionType::Behavioral)
            .collect();
        assert_eq!(technical.len(), 6);
        assert_eq!(behavioral.len(), 4);
    }

    #[test]
    fn test_orders_are_contiguous_from_zero() {
        let questions = generate_questions("Backend Developer", 10, true, true);
        let orders: Vec<u32> = questions.iter().map(|q| q.order).collect();
        assert_eq!(orders, (0..10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_all_technical_precede_all_behavioral() {
        let questions = generate_questions("Frontend Developer", 10, true, true);
        let first_behavioral = questions
            .iter()
            .position(|q| q.question_type == QuestionType::Behavioral)
            .unwrap();
        assert!(questions[first_behavioral..]
            .iter()
            .all(|q| q.question_type == QuestionType::Behavioral));
    }

    #[test]
    fn test_both_flags_off_returns_empty() {
        assert!(generate_questions("Software Engineer", 10, false, false).is_empty());
        assert!(generate_questions("Software Engineer", 100, false, false).is_empty());
    }

    #[test]
    fn test_technical_only_emits_sixty_percent_ceiling() {
        let questions = generate_questions("Software Engineer", 10, true, false);
        assert_eq!(questions.len(), 6);
        assert!(questions
            .iter()
            .all(|q| q.question_type == QuestionType::Technical));
    }

    #[test]
    fn test_behavioral_only_fills_full_count() {
        let questions = generate_questions("Software Engineer", 10, false, true);
        assert_eq!(questions.len(), 10);
        assert!(questions
            .iter()
            .all(|q| q.question_type == QuestionType::Behavioral));
    }

    #[test]
    fn test_small_bank_cycles_with_repeats() {
        // 30 technical slots against an 8-question bank wraps around.
        let questions = generate_questions("Software Engineer", 50, true, false);
        assert_eq!(questions.len(), 30);
        assert_eq!(questions[0].question, questions[8].question);
        assert_eq!(questions[1].question, questions[9].question);
    }

    #[test]
    fn test_difficulty_ramps_within_technical_batch() {
        let questions = generate_questions("Software Engineer", 10, true, false);
        // Batch of 6: thresholds at 1.8 and 4.2.
        assert_eq!(questions[0].difficulty, Difficulty::Easy);
        assert_eq!(questions[1].difficulty, Difficulty::Easy);
        assert_eq!(questions[2].difficulty, Difficulty::Medium);
        assert_eq!(questions[4].difficulty, Difficulty::Medium);
        assert_eq!(questions[5].difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_unknown_role_uses_fallback_bank() {
        let questions = generate_questions("Quantum Plumber", 2, true, false);
        assert_eq!(
            questions[0].question,
            "Explain the difference between REST and GraphQL APIs."
        );
    }

    #[test]
    fn test_zero_questions_requested() {
        assert!(generate_questions("Software Engineer", 0, true, true).is_empty());
    }

    #[test]
    fn test_question_text_is_deterministic_for_fixed_inputs() {
        let a = generate_questions("Data Scientist", 10, true, true);
        let b = generate_questions("Data Scientist", 10, true, true);
        let texts_a: Vec<_> = a.iter().map(|q| &q.question).collect();
        let texts_b: Vec<_> = b.iter().map(|q| &q.question).collect();
        assert_eq!(texts_a, texts_b);
    }
}
