//! JSON persistence for a generated question batch.
//!
//! Lets a generated quiz be exported once and taken later (`--export` /
//! `--saved` on the CLI). Saves are atomic: written to a temp file in the
//! target directory and renamed into place.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::models::Mcq;

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Parse(serde_json::Error),
    /// The file parsed but contained zero questions.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read quiz file: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse quiz file: {}", e),
            LoadError::Empty => write!(f, "quiz file contains no questions"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Empty => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Load a previously exported question batch.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Mcq>, LoadError> {
    let json = fs::read_to_string(path.as_ref())?;
    let mcqs: Vec<Mcq> = serde_json::from_str(&json)?;
    if mcqs.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(mcqs)
}

/// Write a question batch as pretty-printed JSON, atomically.
pub fn save_questions_to_json<P: AsRef<Path>>(path: P, mcqs: &[Mcq]) -> Result<(), LoadError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(mcqs)?;
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut temp = match dir {
        Some(dir) => NamedTempFile::new_in(dir)?,
        None => NamedTempFile::new_in(".")?,
    };
    temp.write_all(json.as_bytes())?;
    temp.persist(path).map_err(|e| LoadError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mcqs() -> Vec<Mcq> {
        vec![Mcq {
            id: 0,
            question: format!("The {} sat on the mat.", crate::generate::BLANK),
            options: vec!["dog".into(), "cat".into(), "mat".into()],
            answer: "cat".into(),
        }]
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("quiz.json");

        save_questions_to_json(&path, &sample_mcqs()).expect("save quiz");
        let loaded = load_questions_from_json(&path).expect("load quiz");

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].answer, "cat");
        assert_eq!(loaded[0].options.len(), 3);
    }

    #[test]
    fn empty_batch_is_rejected_on_load() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("empty.json");
        fs::write(&path, "[]").expect("write file");

        assert!(matches!(
            load_questions_from_json(&path),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").expect("write file");

        assert!(matches!(
            load_questions_from_json(&path),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            load_questions_from_json("no-such-quiz.json"),
            Err(LoadError::Io(_))
        ));
    }
}
