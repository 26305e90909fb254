//! Question generation: turn raw text into a bounded, ordered batch of
//! fill-in-the-blank multiple choice questions.
//!
//! The algorithm builds one noun vocabulary from the whole text, then walks
//! sentences in document order: the first vocabulary noun in a sentence
//! becomes the answer, its first word-boundary occurrence becomes the blank,
//! and up to three distractors are sampled from the rest of the vocabulary.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Mcq;
use crate::nlp::{self, NlpEngine, NlpError};

/// Placeholder substituted for the answer word in question text.
pub const BLANK: &str = "_____";

const MAX_DISTRACTORS: usize = 3;

/// Generate up to `num_questions` questions from `text` using the
/// process-wide engine and thread-local randomness.
///
/// An empty result means the text had no usable nouns or sentences, which
/// callers should present as "not enough content", not as a fault.
pub fn generate(text: &str, num_questions: usize) -> Result<Vec<Mcq>, NlpError> {
    let engine = nlp::engine()?;
    Ok(generate_with(
        engine,
        text,
        num_questions,
        &mut rand::thread_rng(),
    ))
}

/// Deterministic-injectable core of [`generate`]: explicit engine, explicit
/// randomness. With a fixed seed, question texts and answers are stable
/// across calls on the same input.
pub fn generate_with(
    engine: &NlpEngine,
    text: &str,
    num_questions: usize,
    rng: &mut impl Rng,
) -> Vec<Mcq> {
    if num_questions == 0 {
        return Vec::new();
    }

    let cleaned = nlp::normalize_whitespace(text);
    let sentences = engine.sentences(&cleaned);
    let vocabulary = noun_vocabulary(engine, &cleaned);
    if vocabulary.is_empty() {
        log::debug!("no eligible nouns in input, generating nothing");
        return Vec::new();
    }

    let mut mcqs: Vec<Mcq> = Vec::new();
    for sentence in &sentences {
        if mcqs.len() >= num_questions {
            break;
        }
        let Some(answer) = pick_answer(engine, sentence, &vocabulary) else {
            continue;
        };
        let Some(question) = blank_first_occurrence(sentence, &answer) else {
            continue;
        };

        let answer_lower = answer.to_lowercase();
        let distractors: Vec<&String> = vocabulary
            .iter()
            .filter(|noun| **noun != answer_lower)
            .collect();
        let mut options: Vec<String> = distractors
            .choose_multiple(rng, MAX_DISTRACTORS)
            .map(|noun| (*noun).clone())
            .collect();
        options.push(answer.clone());
        options.shuffle(rng);

        mcqs.push(Mcq {
            id: mcqs.len(),
            question,
            options,
            answer,
        });
    }

    log::info!(
        "generated {} of {} requested questions from {} sentences",
        mcqs.len(),
        num_questions,
        sentences.len()
    );
    mcqs
}

/// The global noun vocabulary: every noun-tagged, alphabetic, non-stopword
/// token, deduplicated by lowercase form in first-occurrence order.
fn noun_vocabulary(engine: &NlpEngine, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut vocabulary = Vec::new();
    for (word, tag) in engine.tag(text) {
        if !tag.is_noun() || !word.chars().all(char::is_alphabetic) {
            continue;
        }
        let lower = word.to_lowercase();
        if engine.is_stopword(&lower) {
            continue;
        }
        if seen.insert(lower.clone()) {
            vocabulary.push(lower);
        }
    }
    vocabulary
}

/// First noun-tagged word of the sentence whose lowercase form is in the
/// vocabulary, original casing preserved. `None` skips the sentence.
fn pick_answer(engine: &NlpEngine, sentence: &str, vocabulary: &[String]) -> Option<String> {
    engine
        .tag(sentence)
        .into_iter()
        .find(|(word, tag)| {
            tag.is_noun() && {
                let lower = word.to_lowercase();
                vocabulary.iter().any(|noun| *noun == lower)
            }
        })
        .map(|(word, _)| word)
}

/// Replace the first word-boundary occurrence of `answer` with the blank
/// marker. Case-sensitive, first occurrence only; matches inside longer
/// words are skipped, so "cat" never blanks part of "category".
fn blank_first_occurrence(sentence: &str, answer: &str) -> Option<String> {
    let mut from = 0;
    while let Some(found) = sentence[from..].find(answer) {
        let start = from + found;
        let end = start + answer.len();
        let bounded_left = sentence[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let bounded_right = sentence[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        if bounded_left && bounded_right {
            return Some(format!("{}{}{}", &sentence[..start], BLANK, &sentence[end..]));
        }
        from = end;
    }
    None
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::nlp::{Lexicon, PosTag};

    fn test_engine() -> NlpEngine {
        let lexicon = Lexicon::from_entries([
            ("the", PosTag::Determiner),
            ("a", PosTag::Determiner),
            ("cat", PosTag::Noun),
            ("mat", PosTag::Noun),
            ("dog", PosTag::Noun),
            ("park", PosTag::Noun),
            ("sat", PosTag::Verb),
            ("ran", PosTag::Verb),
            ("chased", PosTag::Verb),
            ("and", PosTag::Conjunction),
            ("on", PosTag::Preposition),
            ("in", PosTag::Preposition),
            ("is", PosTag::Verb),
            ("of", PosTag::Preposition),
        ]);
        let stopwords: HashSet<String> = ["the", "a", "on", "in", "is", "of"]
            .into_iter()
            .map(String::from)
            .collect();
        NlpEngine::from_parts(lexicon, stopwords)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    const TWO_SENTENCES: &str = "The cat sat on the mat. The dog ran in the park.";

    #[test]
    fn generates_one_question_per_eligible_sentence() {
        let engine = test_engine();
        let mcqs = generate_with(&engine, TWO_SENTENCES, 2, &mut rng());

        assert_eq!(mcqs.len(), 2);
        assert_eq!(mcqs[0].answer, "cat");
        assert_eq!(mcqs[1].answer, "dog");
        for mcq in &mcqs {
            assert_eq!(mcq.question.matches(BLANK).count(), 1);
        }
    }

    #[test]
    fn answer_is_always_among_options() {
        let engine = test_engine();
        for mcq in generate_with(&engine, TWO_SENTENCES, 5, &mut rng()) {
            assert!(mcq.options.contains(&mcq.answer));
            assert!((1..=4).contains(&mcq.options.len()));
        }
    }

    #[test]
    fn respects_requested_count() {
        let engine = test_engine();
        let mcqs = generate_with(&engine, TWO_SENTENCES, 1, &mut rng());
        assert_eq!(mcqs.len(), 1);
    }

    #[test]
    fn zero_requested_questions_yields_empty_batch() {
        let engine = test_engine();
        assert!(generate_with(&engine, TWO_SENTENCES, 0, &mut rng()).is_empty());
    }

    #[test]
    fn stopword_only_text_yields_empty_batch() {
        let engine = test_engine();
        assert!(generate_with(&engine, "The is of on.", 5, &mut rng()).is_empty());
    }

    #[test]
    fn ids_are_contiguous_from_zero() {
        let engine = test_engine();
        let mcqs = generate_with(&engine, TWO_SENTENCES, 5, &mut rng());
        for (index, mcq) in mcqs.iter().enumerate() {
            assert_eq!(mcq.id, index);
        }
    }

    #[test]
    fn repeated_word_is_blanked_once() {
        let engine = test_engine();
        let mcqs = generate_with(&engine, "The cat chased the cat.", 1, &mut rng());

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].question, format!("The {} chased the cat.", BLANK));
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let engine = test_engine();
        let first = generate_with(&engine, TWO_SENTENCES, 5, &mut rng());
        let second = generate_with(&engine, TWO_SENTENCES, 5, &mut rng());

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.question, b.question);
            assert_eq!(a.answer, b.answer);
            assert_eq!(a.options, b.options);
        }
    }

    #[test]
    fn small_vocabulary_shrinks_the_option_set() {
        let lexicon = Lexicon::from_entries([("cat", PosTag::Noun), ("sat", PosTag::Verb)]);
        let engine = NlpEngine::from_parts(lexicon, HashSet::new());
        let mcqs = generate_with(&engine, "cat sat.", 1, &mut rng());

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].options, vec!["cat".to_string()]);
    }

    #[test]
    fn distractors_never_duplicate_the_answer() {
        let engine = test_engine();
        for mcq in generate_with(&engine, TWO_SENTENCES, 5, &mut rng()) {
            let answer_count = mcq
                .options
                .iter()
                .filter(|option| option.to_lowercase() == mcq.answer.to_lowercase())
                .count();
            assert_eq!(answer_count, 1);
        }
    }

    #[test]
    fn whitespace_artifacts_do_not_break_sentences() {
        let engine = test_engine();
        let wrapped = "The cat sat\non the mat. The\tdog ran in the park.";
        let mcqs = generate_with(&engine, wrapped, 2, &mut rng());
        assert_eq!(mcqs.len(), 2);
    }

    #[test]
    fn blanking_respects_word_boundaries() {
        let question = blank_first_occurrence("The category holds a cat.", "cat");
        assert_eq!(
            question.as_deref(),
            Some(format!("The category holds a {}.", BLANK).as_str())
        );
    }

    #[test]
    fn blanking_is_case_sensitive() {
        let question = blank_first_occurrence("Cat and cat.", "cat");
        assert_eq!(question.as_deref(), Some("Cat and _____."));
    }

    #[test]
    fn vocabulary_preserves_first_occurrence_order() {
        let engine = test_engine();
        let vocabulary = noun_vocabulary(&engine, "The mat and the cat and the mat.");
        assert_eq!(vocabulary, vec!["mat".to_string(), "cat".to_string()]);
    }
}
