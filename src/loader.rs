//! Document loading over the lopdf backend.

use std::io::Read;
use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect::{detect_pdf_version, detect_pdf_version_from_bytes};
use crate::error::{Error, Result};
use crate::extract::PageSource;

/// An opened pitch-deck document.
///
/// Owns the parsed PDF; the underlying resources are released exactly once
/// when the handle is dropped, on every exit path. The handle is
/// single-owner and not shared between threads — concurrent documents are
/// independent `DeckDocument` instances.
pub struct DeckDocument {
    doc: LopdfDocument,
    version: String,
}

impl DeckDocument {
    /// Open a PDF file from a path.
    ///
    /// Validates the PDF signature before loading, and rejects encrypted
    /// documents (decryption is beyond basic support).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let version = detect_pdf_version(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Self::from_parsed(doc, version)
    }

    /// Open a PDF from an in-memory byte buffer.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let version = detect_pdf_version_from_bytes(data)?;

        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Self::from_parsed(doc, version)
    }

    /// Open a PDF from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    fn from_parsed(doc: LopdfDocument, version: String) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }

        let handle = Self { doc, version };
        log::debug!(
            "opened PDF {} with {} pages",
            handle.version,
            handle.page_count()
        );
        Ok(handle)
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// PDF header version, e.g. "1.7".
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl PageSource for DeckDocument {
    fn page_count(&self) -> u32 {
        DeckDocument::page_count(self)
    }

    fn page_text(&self, index: u32) -> Result<String> {
        // lopdf numbers pages from 1; the pipeline indexes from 0.
        let text = self
            .doc
            .extract_text(&[index + 1])
            .map_err(|e| Error::PdfParse(format!("page {index}: {e}")))?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_missing_file() {
        let result = DeckDocument::open("no-such-deck.pdf");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_open_non_pdf_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"just some text, long enough for a header read")
            .unwrap();
        let result = DeckDocument::open(file.path());
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_from_bytes_invalid_signature() {
        let result = DeckDocument::from_bytes(b"<!DOCTYPE html><html></html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_from_bytes_truncated_pdf() {
        // Valid signature, no body: lopdf must fail structurally.
        let result = DeckDocument::from_bytes(b"%PDF-1.7\n%broken");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_reader_invalid() {
        let data: &[u8] = b"not a pdf at all, promise";
        let result = DeckDocument::from_reader(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }
}
