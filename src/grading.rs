//! Grading of quiz submissions.
//!
//! Submissions round-trip the correct answer alongside the user's choice,
//! the same shape the original quiz form carried in hidden fields; grading
//! never re-derives answers and never fails. A missing selection grades as
//! incorrect.

use serde::{Deserialize, Serialize};

/// One answered (or skipped) question, as handed back by the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Question id from the generated batch.
    pub id: usize,
    /// Blanked question text, carried through for the report.
    pub question: String,
    /// The option the user picked, if any.
    pub selected: Option<String>,
    /// The correct answer, round-tripped from generation.
    pub answer: String,
}

/// Graded outcome of a single submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResult {
    pub id: usize,
    pub question: String,
    pub your_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Full graded report: per-question results sorted by id, plus the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    pub results: Vec<QuestionResult>,
    pub score: usize,
}

impl GradeReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }
}

/// Grade a set of submissions.
///
/// Correctness is exact case-sensitive string equality between the selected
/// option and the round-tripped answer. Results come back ordered by
/// ascending question id regardless of submission order.
pub fn grade(submissions: &[Submission]) -> GradeReport {
    let mut results: Vec<QuestionResult> = submissions
        .iter()
        .map(|submission| {
            let is_correct = submission.selected.as_deref() == Some(submission.answer.as_str());
            QuestionResult {
                id: submission.id,
                question: submission.question.clone(),
                your_answer: submission.selected.clone(),
                correct_answer: submission.answer.clone(),
                is_correct,
            }
        })
        .collect();
    results.sort_by_key(|result| result.id);
    let score = results.iter().filter(|result| result.is_correct).count();
    GradeReport { results, score }
}
