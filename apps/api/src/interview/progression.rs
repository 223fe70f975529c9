//! Interview progression — answer submission, pause/resume transitions, and
//! derived-score maintenance.
//!
//! All functions here are synchronous and operate on an in-memory
//! `InterviewRow`; the handlers persist the mutated row afterwards.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::feedback::FeedbackSynthesizer;
use crate::models::interview::{
    Feedback, InterviewRow, Response, STATUS_ACTIVE, STATUS_COMPLETED, STATUS_PAUSED,
};

pub struct SubmitOutcome {
    pub feedback: Feedback,
    pub completed: bool,
}

/// Records an answer against the session.
///
/// The cursor is advanced to the matched question's position + 1, not to the
/// response count. A client answering out of order therefore reindexes the
/// cursor rather than being rejected — kept as-is pending product
/// clarification; see the `out_of_order` test below.
pub fn submit_answer(
    interview: &mut InterviewRow,
    question_id: Uuid,
    answer: &str,
    response_time: Option<i64>,
    synthesizer: &dyn FeedbackSynthesizer,
    now: DateTime<Utc>,
) -> Result<SubmitOutcome, AppError> {
    if interview.status == STATUS_COMPLETED {
        return Err(AppError::Validation(
            "Interview is already completed".to_string(),
        ));
    }

    let position = interview
        .questions
        .iter()
        .position(|q| q.id == question_id)
        .ok_or_else(|| AppError::NotFound(format!("Question {question_id} not found")))?;

    let question_type = interview.questions[position].question_type;
    let feedback = synthesizer.synthesize(question_type, answer);

    interview.responses.push(Response {
        question_id,
        answer: answer.to_string(),
        response_time,
        feedback: feedback.clone(),
        timestamp: now,
    });

    interview.current_question_index = (position + 1) as i32;

    if interview.current_question_index >= interview.questions.len() as i32 {
        interview.status = STATUS_COMPLETED.to_string();
        interview.end_time = Some(now);
        let elapsed_secs = (now - interview.start_time).num_seconds();
        interview.duration = Some((elapsed_secs as f64 / 60.0).round() as i32);
    }

    recompute_scores(interview);

    Ok(SubmitOutcome {
        feedback,
        completed: interview.status == STATUS_COMPLETED,
    })
}

/// Recomputes `total_score` and `average_score` from the recorded responses.
/// Must run on every persist; the stored values are never trusted.
pub fn recompute_scores(interview: &mut InterviewRow) {
    let scores: Vec<i32> = interview
        .responses
        .iter()
        .map(|r| r.feedback.score as i32)
        .collect();

    if scores.is_empty() {
        interview.total_score = 0;
        interview.average_score = 0.0;
        return;
    }

    interview.total_score = scores.iter().sum();
    interview.average_score = interview.total_score as f64 / scores.len() as f64;
}

/// `active → paused`. Explicit user action only.
pub fn pause(interview: &mut InterviewRow) -> Result<(), AppError> {
    if interview.status != STATUS_ACTIVE {
        return Err(AppError::Validation(format!(
            "Cannot pause an interview in status '{}'",
            interview.status
        )));
    }
    interview.status = STATUS_PAUSED.to_string();
    Ok(())
}

/// `paused → active`. A paused session never auto-transitions.
pub fn resume(interview: &mut InterviewRow) -> Result<(), AppError> {
    if interview.status != STATUS_PAUSED {
        return Err(AppError::Validation(format!(
            "Cannot resume an interview in status '{}'",
            interview.status
        )));
    }
    interview.status = STATUS_ACTIVE.to_string();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::generator::generate_questions;
    use crate::models::interview::{InterviewSettings, QuestionType};
    use sqlx::types::Json;

    /// Fixed-score synthesizer so progression tests stay deterministic.
    struct FixedSynthesizer(u8);

    impl FeedbackSynthesizer for FixedSynthesizer {
        fn synthesize(&self, _question_type: QuestionType, _answer: &str) -> Feedback {
            Feedback {
                score: self.0,
                strengths: vec!["Clear example provided".to_string()],
                improvements: vec!["Consider quantifying impact".to_string()],
                relevance: self.0,
                clarity: self.0,
                completeness: self.0,
                comments: "Fixed".to_string(),
            }
        }
    }

    fn make_interview(total: u32) -> InterviewRow {
        let now = Utc::now();
        InterviewRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            job_role: "Software Engineer".to_string(),
            job_description: String::new(),
            status: STATUS_ACTIVE.to_string(),
            questions: Json(generate_questions("Software Engineer", total, true, true)),
            responses: Json(Vec::new()),
            current_question_index: 0,
            total_score: 0,
            average_score: 0.0,
            start_time: now,
            end_time: None,
            duration: None,
            settings: Json(InterviewSettings::default()),
            created_at: now,
        }
    }

    #[test]
    fn test_unknown_question_id_is_not_found_and_appends_nothing() {
        let mut interview = make_interview(3);
        let synth = FixedSynthesizer(8);
        let result = submit_answer(
            &mut interview,
            Uuid::new_v4(),
            "answer",
            Some(30),
            &synth,
            Utc::now(),
        );
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(interview.responses.is_empty());
        assert_eq!(interview.current_question_index, 0);
    }

    #[test]
    fn test_submitting_all_answers_completes_the_session() {
        let mut interview = make_interview(3);
        let synth = FixedSynthesizer(8);
        let ids: Vec<Uuid> = interview.questions.iter().map(|q| q.id).collect();

        for (i, id) in ids.iter().enumerate() {
            let outcome =
                submit_answer(&mut interview, *id, "answer", Some(30), &synth, Utc::now()).unwrap();
            assert_eq!(outcome.completed, i == ids.len() - 1);
        }

        assert_eq!(interview.status, STATUS_COMPLETED);
        assert!(interview.end_time.is_some());
        assert!(interview.duration.unwrap() >= 0);
        assert_eq!(interview.responses.len(), 3);
    }

    #[test]
    fn test_scores_recomputed_on_every_submission() {
        let mut interview = make_interview(3);
        let ids: Vec<Uuid> = interview.questions.iter().map(|q| q.id).collect();

        submit_answer(
            &mut interview,
            ids[0],
            "a",
            None,
            &FixedSynthesizer(6),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(interview.total_score, 6);
        assert!((interview.average_score - 6.0).abs() < f64::EPSILON);

        submit_answer(
            &mut interview,
            ids[1],
            "b",
            None,
            &FixedSynthesizer(9),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(interview.total_score, 15);
        assert!((interview.average_score - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_responses_means_zero_average() {
        let mut interview = make_interview(3);
        recompute_scores(&mut interview);
        assert_eq!(interview.total_score, 0);
        assert_eq!(interview.average_score, 0.0);
    }

    // Known quirk: the cursor follows the matched question's position, so an
    // out-of-order submission desynchronizes it from the response count.
    #[test]
    fn test_out_of_order_submission_reindexes_cursor() {
        let mut interview = make_interview(5);
        let synth = FixedSynthesizer(7);
        let last_id = interview.questions.last().unwrap().id;

        let outcome =
            submit_answer(&mut interview, last_id, "answer", None, &synth, Utc::now()).unwrap();

        // One response recorded, but the cursor jumped to the end and the
        // session completed.
        assert_eq!(interview.responses.len(), 1);
        assert_eq!(interview.current_question_index, 5);
        assert!(outcome.completed);
        assert_eq!(interview.status, STATUS_COMPLETED);
    }

    #[test]
    fn test_completed_session_rejects_further_answers() {
        let mut interview = make_interview(2);
        let synth = FixedSynthesizer(8);
        let ids: Vec<Uuid> = interview.questions.iter().map(|q| q.id).collect();
        for id in &ids {
            submit_answer(&mut interview, *id, "answer", None, &synth, Utc::now()).unwrap();
        }

        let result = submit_answer(&mut interview, ids[0], "again", None, &synth, Utc::now());
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(interview.responses.len(), 2);
    }

    #[test]
    fn test_pause_and_resume_round_trip() {
        let mut interview = make_interview(3);
        pause(&mut interview).unwrap();
        assert_eq!(interview.status, STATUS_PAUSED);
        resume(&mut interview).unwrap();
        assert_eq!(interview.status, STATUS_ACTIVE);
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        let mut interview = make_interview(3);
        // Resume requires paused.
        assert!(resume(&mut interview).is_err());

        interview.status = STATUS_COMPLETED.to_string();
        assert!(pause(&mut interview).is_err());
        assert!(resume(&mut interview).is_err());
    }

    #[test]
    fn test_paused_session_still_accepts_answers_after_resume() {
        let mut interview = make_interview(2);
        let synth = FixedSynthesizer(8);
        let first_id = interview.questions[0].id;

        pause(&mut interview).unwrap();
        resume(&mut interview).unwrap();

        let outcome =
            submit_answer(&mut interview, first_id, "answer", None, &synth, Utc::now()).unwrap();
        assert!(!outcome.completed);
        assert_eq!(interview.current_question_index, 1);
    }
}
