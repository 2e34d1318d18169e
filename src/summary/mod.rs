//! Summarization: cleaning, paragraph selection, and field tagging.
//!
//! Both sub-steps are pure functions of their input: no I/O, deterministic
//! apart from the `extracted_at` timestamp stamped onto the final record.

mod clean;
mod fields;
mod options;
mod paragraphs;
mod record;

pub use clean::{clean, CleanOptions, Cleaner};
pub use fields::{FieldTagger, SummaryFields};
pub use options::{SummarizeOptions, DEFAULT_MAX_PARAGRAPHS, DEFAULT_MIN_PARAGRAPH_LEN};
pub use paragraphs::{is_noise, select_paragraphs, split_paragraphs, KeptParagraph};
pub use record::{JsonFormat, SummaryRecord};

use chrono::Utc;

use crate::error::{Error, Result};
use crate::extract::Extraction;

/// Summarize an extraction with default options.
pub fn summarize(extraction: &Extraction) -> Result<SummaryRecord> {
    summarize_with_options(extraction, &SummarizeOptions::default())
}

/// Summarize an extraction: clean, split, filter, select, tag.
///
/// # Errors
///
/// Fails with [`Error::EmptyInput`] when no paragraph survives noise
/// filtering — unusable input is surfaced to the caller rather than
/// returned as a record with every field absent.
pub fn summarize_with_options(
    extraction: &Extraction,
    options: &SummarizeOptions,
) -> Result<SummaryRecord> {
    let cleaned = Cleaner::new(options.clean.clone()).process(&extraction.joined());

    let kept = select_paragraphs(
        split_paragraphs(&cleaned),
        options.max_paragraphs,
        options.min_paragraph_len,
    );
    if kept.is_empty() {
        return Err(Error::EmptyInput);
    }
    log::debug!("kept {} paragraphs for summary", kept.len());

    let fields = if options.tag_fields {
        FieldTagger::new().tag(&kept)
    } else {
        SummaryFields::default()
    };

    let raw_summary = kept
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(SummaryRecord {
        fields,
        paragraphs: kept,
        pages_processed: extraction.pages_processed,
        pages_failed: extraction.pages_failed,
        text_extracted_chars: extraction.char_count,
        extracted_at: Utc::now(),
        raw_summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::PageText;

    fn extraction_of(pages: &[&str]) -> Extraction {
        let pages: Vec<PageText> = pages
            .iter()
            .enumerate()
            .map(|(i, text)| PageText {
                index: i as u32,
                text: text.to_string(),
            })
            .collect();
        let char_count = pages.iter().map(|p| p.text.chars().count()).sum();
        Extraction {
            pages_processed: pages.len() as u32,
            pages_failed: 0,
            char_count,
            pages,
        }
    }

    #[test]
    fn test_summarize_tags_fields() {
        let extraction = extraction_of(&[
            "Problem: deploys take a full day at most mid-size companies.",
            "Solution: a build cache that actually survives CI restarts.",
        ]);
        let record = summarize(&extraction).unwrap();
        assert!(record.fields.problem.is_some());
        assert!(record.fields.solution.is_some());
        assert_eq!(record.pages_processed, 2);
    }

    #[test]
    fn test_summarize_empty_input_is_fatal() {
        let extraction = extraction_of(&["short", "7", "...."]);
        let result = summarize(&extraction);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_summarize_respects_max_paragraphs() {
        let pages: Vec<String> = (0..8)
            .map(|i| format!("Slide {i} body text long enough to pass the filter."))
            .collect();
        let refs: Vec<&str> = pages.iter().map(String::as_str).collect();
        let record = summarize(&extraction_of(&refs)).unwrap();
        assert_eq!(record.raw_summary.split("\n\n").count(), 5);
    }

    #[test]
    fn test_summarize_labels_kept_paragraphs() {
        let extraction = extraction_of(&[
            "Opening paragraph long enough to survive the filter.",
            "9",
            "Closing paragraph long enough to survive the filter.",
        ]);
        let record = summarize(&extraction).unwrap();
        let ordinals: Vec<usize> = record.paragraphs.iter().map(|p| p.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2]);
        assert!(record.paragraphs[1].text.starts_with("Closing"));
    }

    #[test]
    fn test_summarize_without_tagging() {
        let extraction = extraction_of(&["Problem: everything here is on fire, constantly."]);
        let options = SummarizeOptions::new().without_field_tagging();
        let record = summarize_with_options(&extraction, &options).unwrap();
        assert!(record.fields.is_empty());
        assert!(!record.raw_summary.is_empty());
    }

    #[test]
    fn test_raw_summary_keeps_document_order() {
        let extraction = extraction_of(&[
            "Alpha paragraph, the one that opens the deck.",
            "Beta paragraph, the one that follows directly.",
        ]);
        let record = summarize(&extraction).unwrap();
        let alpha = record.raw_summary.find("Alpha").unwrap();
        let beta = record.raw_summary.find("Beta").unwrap();
        assert!(alpha < beta);
    }
}
