//! Lexicon-based part-of-speech tagging.
//!
//! Tags come from the Moby part-of-speech lexicon, with suffix heuristics
//! for words the lexicon does not know. Downstream code only relies on the
//! noun/non-noun distinction; the finer categories exist because the lexicon
//! provides them for free and they make the tagger testable on its own.

use std::collections::HashMap;

/// Part-of-speech category of a word token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    PluralNoun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Determiner,
    Interjection,
    Other,
}

impl PosTag {
    /// The load-bearing distinction: common or proper, singular or plural.
    pub fn is_noun(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::PluralNoun | PosTag::ProperNoun)
    }
}

/// Moby separates a word from its part-of-speech codes with a multiply sign
/// (byte 0xD7); the file is not valid UTF-8, so parsing works on raw bytes.
const MOBY_SEPARATOR: u8 = 0xD7;

/// Word-to-tag mapping keyed by lowercase surface form.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    entries: HashMap<String, PosTag>,
}

impl Lexicon {
    /// Build a lexicon from explicit entries. Used by tests and embedders
    /// that bring their own word list.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, PosTag)>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, tag)| (word.into().to_lowercase(), tag))
            .collect();
        Self { entries }
    }

    /// Parse the Moby part-of-speech file. Multi-word entries are skipped;
    /// for words listed with several codes the first (dominant) one wins,
    /// and the first line listing a word wins over later ones.
    pub fn parse_moby(raw: &[u8]) -> Self {
        let mut entries = HashMap::new();
        for line in raw.split(|&b| b == b'\n') {
            let Some(sep) = line.iter().position(|&b| b == MOBY_SEPARATOR) else {
                continue;
            };
            let word = String::from_utf8_lossy(&line[..sep]);
            let word = word.trim();
            if word.is_empty() || word.contains(' ') || word.contains('\u{fffd}') {
                continue;
            }
            let Some(&code) = line.get(sep + 1) else {
                continue;
            };
            let Some(tag) = tag_from_moby_code(code) else {
                continue;
            };
            entries.entry(word.to_lowercase()).or_insert(tag);
        }
        log::debug!("parsed {} lexicon entries", entries.len());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tag a single word token. Lexicon lookup is case-insensitive; unknown
    /// words fall back to suffix heuristics.
    pub fn tag(&self, word: &str) -> PosTag {
        let lower = word.to_lowercase();
        if let Some(&tag) = self.entries.get(&lower) {
            return tag;
        }
        // A plural whose stem is a known noun.
        if let Some(stem) = lower.strip_suffix('s') {
            if self.entries.get(stem).copied().is_some_and(PosTag::is_noun) {
                return PosTag::PluralNoun;
            }
        }
        guess_by_shape(word, &lower)
    }
}

fn tag_from_moby_code(code: u8) -> Option<PosTag> {
    let tag = match code {
        b'N' | b'h' | b'o' => PosTag::Noun,
        b'p' => PosTag::PluralNoun,
        b'V' | b't' | b'i' => PosTag::Verb,
        b'A' => PosTag::Adjective,
        b'v' => PosTag::Adverb,
        b'r' => PosTag::Pronoun,
        b'P' => PosTag::Preposition,
        b'C' => PosTag::Conjunction,
        b'D' | b'I' => PosTag::Determiner,
        b'!' => PosTag::Interjection,
        _ => return None,
    };
    Some(tag)
}

/// Heuristic tag for out-of-vocabulary words. Capitalized unknowns are taken
/// as proper nouns; otherwise derivational suffixes decide, and the terminal
/// fallback is noun, the usual default-tag convention.
fn guess_by_shape(word: &str, lower: &str) -> PosTag {
    if word.chars().next().is_some_and(char::is_uppercase) {
        return PosTag::ProperNoun;
    }
    const NOUN_SUFFIXES: &[&str] = &[
        "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "hood", "ism", "ist",
    ];
    const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical"];
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Noun;
    }
    if lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Adjective;
    }
    if lower.ends_with("ing") || lower.ends_with("ed") || lower.ends_with("ize") {
        return PosTag::Verb;
    }
    PosTag::Noun
}
