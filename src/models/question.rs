use serde::{Deserialize, Serialize};

/// A fill-in-the-blank multiple choice question.
///
/// `question` contains the blank marker exactly once, `answer` is always one
/// of `options`, and ids are contiguous from 0 within one generated batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mcq {
    pub id: usize,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}
