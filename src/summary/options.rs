//! Summarization options.

use crate::summary::clean::CleanOptions;

/// Default number of paragraphs kept for the summary.
pub const DEFAULT_MAX_PARAGRAPHS: usize = 5;

/// Default minimum paragraph length, in characters.
pub const DEFAULT_MIN_PARAGRAPH_LEN: usize = 20;

/// Options for the summarization stage.
///
/// Configuration is passed explicitly per invocation; there is no global
/// state. Defaults match the documented heuristics: first five surviving
/// paragraphs, twenty-character noise threshold, field tagging on.
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    /// Maximum number of paragraphs kept, in document order.
    pub max_paragraphs: usize,

    /// Minimum paragraph length in characters (inclusive).
    pub min_paragraph_len: usize,

    /// Whether to run the keyword field-tagging pass.
    pub tag_fields: bool,

    /// Options for the cleaning pass that precedes paragraph splitting.
    pub clean: CleanOptions,
}

impl SummarizeOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of kept paragraphs.
    pub fn with_max_paragraphs(mut self, max: usize) -> Self {
        self.max_paragraphs = max;
        self
    }

    /// Set the minimum paragraph length in characters.
    pub fn with_min_paragraph_len(mut self, min: usize) -> Self {
        self.min_paragraph_len = min;
        self
    }

    /// Skip the field-tagging pass; the record will carry only the
    /// concatenated summary and metadata.
    pub fn without_field_tagging(mut self) -> Self {
        self.tag_fields = false;
        self
    }

    /// Set the cleaning options.
    pub fn with_clean_options(mut self, clean: CleanOptions) -> Self {
        self.clean = clean;
        self
    }
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            max_paragraphs: DEFAULT_MAX_PARAGRAPHS,
            min_paragraph_len: DEFAULT_MIN_PARAGRAPH_LEN,
            tag_fields: true,
            clean: CleanOptions::default(),
        }
    }
}
