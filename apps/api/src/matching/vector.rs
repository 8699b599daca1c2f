//! Term-frequency vectors and cosine similarity shared by the cosine scorer.

use indexmap::IndexMap;

/// Splits `text` into lowercase word tokens.
///
/// Anything outside `[a-z0-9_]` (after lowercasing) is a delimiter, including
/// non-ASCII letters. Empty fragments are discarded. Unlike tag extraction,
/// tokens of any length are kept.
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds term-frequency vectors for two token lists over their union vocabulary.
///
/// Both vectors have one slot per distinct token, in first-seen order across
/// `left` then `right`.
pub fn term_frequency_vectors(left: &[String], right: &[String]) -> (Vec<f64>, Vec<f64>) {
    let mut vocabulary: IndexMap<&str, (f64, f64)> = IndexMap::new();

    for token in left {
        vocabulary.entry(token.as_str()).or_insert((0.0, 0.0)).0 += 1.0;
    }
    for token in right {
        vocabulary.entry(token.as_str()).or_insert((0.0, 0.0)).1 += 1.0;
    }

    vocabulary.into_values().unzip()
}

/// Cosine similarity of two equal-length vectors.
///
/// Returns 0.0 when either vector has zero magnitude or the lengths differ.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let magnitude_a = magnitude(a);
    let magnitude_b = magnitude(b);

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot / (magnitude_a * magnitude_b)
}

fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity of two texts under their shared term-frequency space.
pub fn text_cosine(left: &str, right: &str) -> f64 {
    let left_tokens = tokenize_words(left);
    let right_tokens = tokenize_words(right);
    let (a, b) = term_frequency_vectors(&left_tokens, &right_tokens);
    cosine_similarity(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_non_word_chars() {
        assert_eq!(
            tokenize_words("Hello, World! snake_case x2"),
            vec!["hello", "world", "snake_case", "x2"]
        );
    }

    #[test]
    fn test_tokenize_drops_empty_fragments() {
        assert!(tokenize_words("  ...  ").is_empty());
        assert!(tokenize_words("").is_empty());
    }

    #[test]
    fn test_vectors_share_vocabulary() {
        let left = tokenize_words("a b b");
        let right = tokenize_words("b c");
        let (a, b) = term_frequency_vectors(&left, &right);
        assert_eq!(a, vec![1.0, 2.0, 0.0]);
        assert_eq!(b, vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_cosine_zero_magnitude_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 3.0]), 0.0);
    }

    #[test]
    fn test_text_cosine_identical_is_one() {
        let score = text_cosine("roots and stems and leaves", "roots and stems and leaves");
        assert!((score - 1.0).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_text_cosine_known_value() {
        // [1,1,0]·[0,1,1] / (√2·√2) = 0.5
        let score = text_cosine("alpha beta", "beta gamma");
        assert!((score - 0.5).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_text_cosine_empty_side_is_zero() {
        assert_eq!(text_cosine("", "anything at all"), 0.0);
    }
}
