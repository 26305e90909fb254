//! Text segmentation and part-of-speech tagging.
//!
//! `NlpEngine` bundles the two linguistic resources the generator needs: a
//! part-of-speech lexicon and an English stopword list. The process-wide
//! engine behind [`engine`] initializes lazily on first use, fetching the
//! lexicon into the on-disk cache if it is missing.

mod lexicon;
mod resources;
mod sentences;
mod tokenizer;

use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::sync::{Mutex, OnceLock};

pub use lexicon::{Lexicon, PosTag};

/// Errors from linguistic resource initialization.
#[derive(Debug)]
pub enum NlpError {
    /// A required resource could not be fetched or read. Fatal to any
    /// generation attempt; never silently degraded.
    ResourceUnavailable {
        resource: &'static str,
        reason: String,
    },
}

impl fmt::Display for NlpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NlpError::ResourceUnavailable { resource, reason } => {
                write!(f, "{} unavailable: {}", resource, reason)
            }
        }
    }
}

impl Error for NlpError {}

/// Collapse all whitespace runs (including newlines) to single spaces.
///
/// PDF extraction wraps lines mid-sentence; normalizing first keeps the
/// sentence splitter from breaking on layout artifacts.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sentence segmentation, word tagging, and stopword membership.
pub struct NlpEngine {
    lexicon: Lexicon,
    stopwords: HashSet<String>,
}

impl NlpEngine {
    /// Build an engine from explicit parts, bypassing the resource cache.
    /// Tests and embedders with their own word lists use this.
    pub fn from_parts(lexicon: Lexicon, stopwords: HashSet<String>) -> Self {
        let stopwords = stopwords
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();
        Self { lexicon, stopwords }
    }

    /// Split a text into sentences, in document order.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        sentences::split_sentences(text)
    }

    /// Tag every word of a span, in order.
    pub fn tag(&self, span: &str) -> Vec<(String, PosTag)> {
        tokenizer::words(span)
            .map(|word| (word.to_string(), self.lexicon.tag(word)))
            .collect()
    }

    /// Case-insensitive stopword membership.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }
}

static ENGINE: OnceLock<NlpEngine> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// The process-wide engine, initialized at most once.
///
/// Concurrent first calls serialize on the init lock, so the lexicon fetch
/// runs once no matter how many threads race here. A failed initialization
/// is not cached; the next caller retries the idempotent check-then-fetch.
pub fn engine() -> Result<&'static NlpEngine, NlpError> {
    if let Some(engine) = ENGINE.get() {
        return Ok(engine);
    }
    let _guard = INIT_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(engine) = ENGINE.get() {
        return Ok(engine);
    }
    let lexicon = resources::ensure_lexicon()?;
    let stopwords = stop_words::get(stop_words::LANGUAGE::English)
        .into_iter()
        .collect();
    Ok(ENGINE.get_or_init(|| NlpEngine::from_parts(lexicon, stopwords)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_engine() -> NlpEngine {
        let lexicon = Lexicon::from_entries([
            ("the", PosTag::Determiner),
            ("cat", PosTag::Noun),
            ("mat", PosTag::Noun),
            ("sat", PosTag::Verb),
        ]);
        let stopwords = ["the", "on"].into_iter().map(String::from).collect();
        NlpEngine::from_parts(lexicon, stopwords)
    }

    #[test]
    fn normalizes_whitespace_runs() {
        assert_eq!(
            normalize_whitespace("The cat\nsat  on\tthe mat."),
            "The cat sat on the mat."
        );
    }

    #[test]
    fn tags_words_in_order() {
        let engine = test_engine();
        let tags = engine.tag("The cat sat.");
        assert_eq!(
            tags,
            vec![
                ("The".to_string(), PosTag::Determiner),
                ("cat".to_string(), PosTag::Noun),
                ("sat".to_string(), PosTag::Verb),
            ]
        );
    }

    #[test]
    fn stopword_check_ignores_case() {
        let engine = test_engine();
        assert!(engine.is_stopword("The"));
        assert!(!engine.is_stopword("cat"));
    }
}
