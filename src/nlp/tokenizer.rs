//! Word tokenization: whitespace splitting with surrounding punctuation
//! trimmed, so "mat." and "(cat)" yield the bare surface forms that also
//! appear literally in the sentence text.

/// Iterate the word tokens of a span, in order.
pub fn words(span: &str) -> impl Iterator<Item = &str> {
    span.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_surrounding_punctuation() {
        let tokens: Vec<&str> = words("The cat sat on the mat.").collect();
        assert_eq!(tokens, vec!["The", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn keeps_interior_punctuation() {
        let tokens: Vec<&str> = words("It's a well-known fact, (mostly).").collect();
        assert_eq!(tokens, vec!["It's", "a", "well-known", "fact", "mostly"]);
    }

    #[test]
    fn drops_bare_punctuation_tokens() {
        let tokens: Vec<&str> = words("wait - what ?").collect();
        assert_eq!(tokens, vec!["wait", "what"]);
    }
}
