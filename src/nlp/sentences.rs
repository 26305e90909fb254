//! Sentence boundary detection.
//!
//! Works on whitespace-normalized text: a boundary is a run of terminators
//! followed by whitespace and something that can start a sentence. Common
//! abbreviations and single initials do not end a sentence, and a period
//! between digits (decimals, section numbers) is never a boundary.

/// Lowercased abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "gen", "sen", "st", "sr", "jr",
    "etc", "vs", "eg", "ie", "cf", "al", "ca", "approx", "dept", "est", "fig",
    "inc", "ltd", "co", "corp", "no", "vol", "pp", "ed",
];

/// Characters that may trail a terminator and still belong to the sentence.
fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

/// Split text into sentences, in document order.
///
/// Sentences are trimmed; empty segments are dropped. A trailing fragment
/// without a terminator is still returned as a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_terminator(chars[i]) {
            i += 1;
            continue;
        }

        // Consume the full terminator run plus any closing quotes/brackets.
        let mut end = i + 1;
        while end < chars.len() && (is_terminator(chars[end]) || is_closing(chars[end])) {
            end += 1;
        }

        if chars[i] == '.' && end == i + 1 {
            if is_abbreviation(&chars, i) || splits_number(&chars, i) {
                i = end;
                continue;
            }
        }

        // Boundary only when followed by whitespace and a plausible sentence
        // opener, or at end of text.
        let mut next = end;
        while next < chars.len() && chars[next].is_whitespace() {
            next += 1;
        }
        let at_eof = next >= chars.len();
        let opener = !at_eof
            && (chars[next].is_uppercase()
                || chars[next].is_ascii_digit()
                || matches!(chars[next], '"' | '\u{201c}' | '\'' | '('));

        if at_eof || (next > end && opener) {
            push_trimmed(&mut sentences, &chars[start..end]);
            start = next;
            i = next;
        } else {
            i = end;
        }
    }

    if start < chars.len() {
        push_trimmed(&mut sentences, &chars[start..]);
    }

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, span: &[char]) {
    let sentence: String = span.iter().collect();
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

/// True when the word ending at `dot` is an abbreviation or a single initial.
fn is_abbreviation(chars: &[char], dot: usize) -> bool {
    let mut k = dot;
    while k > 0 && chars[k - 1].is_alphabetic() {
        k -= 1;
    }
    if k == dot {
        return false;
    }
    let word: String = chars[k..dot].iter().collect::<String>().to_lowercase();
    word.chars().count() == 1 || ABBREVIATIONS.contains(&word.as_str())
}

/// True when the period at `dot` sits between two digits ("3.14").
fn splits_number(chars: &[char], dot: usize) -> bool {
    dot > 0
        && chars[dot - 1].is_ascii_digit()
        && chars.get(dot + 1).is_some_and(|c| c.is_ascii_digit())
}
