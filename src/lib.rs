//! # deckbrief
//!
//! Heuristic business summaries from PDF pitch decks.
//!
//! The pipeline has three stages, run strictly in order:
//!
//! 1. **Load** — open a PDF from a path, byte buffer, or reader; validate
//!    the signature; expose the page count ([`DeckDocument`]).
//! 2. **Extract** — walk every page in document order, recovering
//!    per-page failures locally ([`extract_all`], [`Extraction`]).
//! 3. **Summarize** — clean the text, keep the first few meaningful
//!    paragraphs, and tag them to business fields by keyword
//!    ([`summarize`], [`SummaryRecord`]).
//!
//! ## Quick Start
//!
//! ```no_run
//! use deckbrief::summarize_file;
//!
//! fn main() -> deckbrief::Result<()> {
//!     let record = summarize_file("pitch_deck.pdf")?;
//!     println!("{}", record.report());
//!     Ok(())
//! }
//! ```
//!
//! Each run owns its document handle and derived data; independent
//! documents can be processed on independent threads with no shared state.
//! The handle is released by `Drop` on every path, including errors and
//! caller aborts.

pub mod detect;
pub mod error;
pub mod extract;
pub mod loader;
pub mod summary;

pub use detect::{detect_pdf_version, detect_pdf_version_from_bytes, is_pdf, is_pdf_bytes};
pub use error::{Error, Result};
pub use extract::{extract_all, Extraction, PageSource, PageText};
pub use loader::DeckDocument;
pub use summary::{
    clean, summarize, summarize_with_options, CleanOptions, Cleaner, FieldTagger, JsonFormat,
    KeptParagraph, SummarizeOptions, SummaryFields, SummaryRecord,
};

use std::io::Read;
use std::path::Path;

/// Run the full pipeline over a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// let record = deckbrief::summarize_file("deck.pdf").unwrap();
/// println!("pages: {}", record.pages_processed);
/// ```
pub fn summarize_file<P: AsRef<Path>>(path: P) -> Result<SummaryRecord> {
    let doc = DeckDocument::open(path)?;
    let extraction = extract_all(&doc)?;
    summarize(&extraction)
}

/// Run the full pipeline over an in-memory PDF with default options.
pub fn summarize_bytes(data: &[u8]) -> Result<SummaryRecord> {
    let doc = DeckDocument::from_bytes(data)?;
    let extraction = extract_all(&doc)?;
    summarize(&extraction)
}

/// Run the full pipeline over any reader with default options.
pub fn summarize_reader<R: Read>(reader: R) -> Result<SummaryRecord> {
    let doc = DeckDocument::from_reader(reader)?;
    let extraction = extract_all(&doc)?;
    summarize(&extraction)
}

/// Extract the raw page-delimited text of a PDF file without summarizing.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = DeckDocument::open(path)?;
    let extraction = extract_all(&doc)?;
    Ok(extraction.joined())
}

/// Builder for configuring and running the pipeline.
///
/// # Example
///
/// ```no_run
/// use deckbrief::DeckBrief;
///
/// let brief = DeckBrief::new()
///     .with_max_paragraphs(3)
///     .without_field_tagging()
///     .process("deck.pdf")?;
/// println!("{}", brief.report());
/// # Ok::<(), deckbrief::Error>(())
/// ```
pub struct DeckBrief {
    options: SummarizeOptions,
}

impl DeckBrief {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self {
            options: SummarizeOptions::default(),
        }
    }

    /// Set the maximum number of kept paragraphs.
    pub fn with_max_paragraphs(mut self, max: usize) -> Self {
        self.options = self.options.with_max_paragraphs(max);
        self
    }

    /// Set the minimum paragraph length in characters.
    pub fn with_min_paragraph_len(mut self, min: usize) -> Self {
        self.options = self.options.with_min_paragraph_len(min);
        self
    }

    /// Skip the keyword field-tagging pass.
    pub fn without_field_tagging(mut self) -> Self {
        self.options = self.options.without_field_tagging();
        self
    }

    /// Set the cleaning options.
    pub fn with_clean_options(mut self, clean: CleanOptions) -> Self {
        self.options = self.options.with_clean_options(clean);
        self
    }

    /// Run the pipeline over a PDF file.
    pub fn process<P: AsRef<Path>>(self, path: P) -> Result<DeckBriefResult> {
        let doc = DeckDocument::open(path)?;
        self.run(&doc)
    }

    /// Run the pipeline over an in-memory PDF.
    pub fn process_bytes(self, data: &[u8]) -> Result<DeckBriefResult> {
        let doc = DeckDocument::from_bytes(data)?;
        self.run(&doc)
    }

    /// Run the pipeline over any [`PageSource`].
    pub fn process_source<S: PageSource>(self, source: &S) -> Result<DeckBriefResult> {
        self.run(source)
    }

    fn run<S: PageSource>(self, source: &S) -> Result<DeckBriefResult> {
        let extraction = extract_all(source)?;
        let record = summarize_with_options(&extraction, &self.options)?;
        Ok(DeckBriefResult { extraction, record })
    }
}

impl Default for DeckBrief {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one pipeline run: the extraction and the summary record.
pub struct DeckBriefResult {
    extraction: Extraction,
    record: SummaryRecord,
}

impl DeckBriefResult {
    /// The summary record.
    pub fn record(&self) -> &SummaryRecord {
        &self.record
    }

    /// The page-level extraction behind the record.
    pub fn extraction(&self) -> &Extraction {
        &self.extraction
    }

    /// Serialize the record to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        self.record.to_json(format)
    }

    /// Render the record as a plain-text report.
    pub fn report(&self) -> String {
        self.record.report()
    }

    /// Consume the result, returning the record.
    pub fn into_record(self) -> SummaryRecord {
        self.record
    }
}
