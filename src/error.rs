//! Error types for the deckbrief pipeline.

use std::io;
use thiserror::Error;

/// Result type alias for deckbrief operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while loading, extracting, or summarizing a pitch deck.
///
/// Every variant is fatal to the pipeline run that raised it. Per-page
/// extraction failures are not errors; they are recovered locally and
/// reported through [`crate::Extraction::pages_failed`].
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the source document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The document is encrypted beyond basic support.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The document opened cleanly but contains zero pages.
    #[error("Document contains no pages")]
    EmptyDocument,

    /// Text extraction failed on every page of the document.
    #[error("No text could be extracted: all {0} pages failed")]
    NoTextExtracted(u32),

    /// No paragraph survived noise filtering; the input is unusable.
    #[error("Content insufficient: no qualifying paragraphs after filtering")]
    EmptyInput,

    /// Error rendering the summary (JSON or report output).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::NoTextExtracted(12);
        assert_eq!(
            err.to_string(),
            "No text could be extracted: all 12 pages failed"
        );

        let err = Error::EmptyInput;
        assert!(err.to_string().contains("no qualifying paragraphs"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
