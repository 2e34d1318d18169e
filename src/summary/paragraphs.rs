//! Paragraph splitting, noise filtering, and ordinal labeling.

use serde::{Deserialize, Serialize};

/// A paragraph kept for the summary, labeled with its running ordinal.
///
/// Ordinals are 1-based and assigned in document order over the surviving
/// paragraphs, after noise filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeptParagraph {
    /// 1-based position among the kept paragraphs.
    pub ordinal: usize,

    /// The paragraph text.
    pub text: String,
}

/// Split cleaned text on blank-line boundaries into trimmed, non-empty
/// paragraphs, preserving document order.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a paragraph is too short or too content-free to summarize.
///
/// Noise is anything under `min_len` characters, or text made up entirely
/// of digits, punctuation, and whitespace (stray page numbers, rules,
/// slide counters). The boundary is inclusive: a paragraph of exactly
/// `min_len` characters is kept.
pub fn is_noise(paragraph: &str, min_len: usize) -> bool {
    if paragraph.chars().count() < min_len {
        return true;
    }
    paragraph
        .chars()
        .all(|c| c.is_numeric() || c.is_ascii_punctuation() || c.is_whitespace())
}

/// Keep the first `max_paragraphs` paragraphs that pass the noise filter,
/// in document order, labeling each with a running 1-based ordinal. The
/// most salient deck content is assumed to appear early; no reranking
/// happens here.
pub fn select_paragraphs(
    paragraphs: Vec<String>,
    max_paragraphs: usize,
    min_len: usize,
) -> Vec<KeptParagraph> {
    paragraphs
        .into_iter()
        .filter(|p| !is_noise(p, min_len))
        .take(max_paragraphs)
        .enumerate()
        .map(|(i, text)| KeptParagraph {
            ordinal: i + 1,
            text,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_blank_lines() {
        let text = "first paragraph here\n\nsecond paragraph here";
        let paragraphs = split_paragraphs(text);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0], "first paragraph here");
    }

    #[test]
    fn test_split_drops_empty_segments() {
        let paragraphs = split_paragraphs("alpha\n\n\n\nbeta\n\n");
        assert_eq!(paragraphs, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_length_boundary_is_inclusive() {
        let exactly_twenty = "a".repeat(20);
        let nineteen = "a".repeat(19);
        assert!(!is_noise(&exactly_twenty, 20));
        assert!(is_noise(&nineteen, 20));
    }

    #[test]
    fn test_digit_only_paragraphs_are_noise() {
        assert!(is_noise("2", 20));
        assert!(is_noise("12 / 34 -- 56 ......... 7890", 20));
        assert!(!is_noise("Page counts are not the whole story", 20));
    }

    #[test]
    fn test_select_takes_first_n_in_order() {
        let paragraphs: Vec<String> = (0..8)
            .map(|i| format!("paragraph number {i} with padding text"))
            .collect();
        let kept = select_paragraphs(paragraphs.clone(), 5, 20);
        assert_eq!(kept.len(), 5);
        assert_eq!(kept[0].text, paragraphs[0]);
        assert_eq!(kept[4].text, paragraphs[4]);
    }

    #[test]
    fn test_select_assigns_running_ordinals() {
        let paragraphs = vec![
            "the first paragraph that clears the bar".to_string(),
            "17".to_string(),
            "the second paragraph that clears the bar".to_string(),
        ];
        let kept = select_paragraphs(paragraphs, 5, 20);
        let ordinals: Vec<usize> = kept.iter().map(|p| p.ordinal).collect();
        // Ordinals run over the survivors, not the raw paragraph positions.
        assert_eq!(ordinals, vec![1, 2]);
        assert_eq!(kept[1].text, "the second paragraph that clears the bar");
    }

    #[test]
    fn test_select_filters_noise_before_counting() {
        let paragraphs = vec![
            "3".to_string(),
            "short".to_string(),
            "a real paragraph that clears the bar".to_string(),
        ];
        let kept = select_paragraphs(paragraphs, 5, 20);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].ordinal, 1);
        assert_eq!(kept[0].text, "a real paragraph that clears the bar");
    }
}
