//! PDF signature detection and validation.
//!
//! The loader calls into this module before handing bytes to the PDF
//! backend, so that a plain text file or an HTML error page downloaded in
//! place of a deck fails with [`Error::UnknownFormat`] instead of a
//! backend parse error.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PDF signature magic bytes: `%PDF-`.
const PDF_MAGIC: &[u8] = b"%PDF-";
/// Length of the version token following the magic, e.g. "1.7".
const VERSION_LEN: usize = 3;

/// Validate the PDF signature of a file and return its header version.
///
/// # Errors
///
/// * [`Error::Io`] if the file cannot be opened or is shorter than a header
/// * [`Error::UnknownFormat`] if the signature is missing
/// * [`Error::UnsupportedVersion`] if the version token is malformed
pub fn detect_pdf_version<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 16];
    reader.read_exact(&mut header)?;
    detect_pdf_version_from_bytes(&header)
}

/// Validate the PDF signature of a byte buffer and return its header version.
///
/// `data` must contain at least the first 8 bytes of the file.
pub fn detect_pdf_version_from_bytes(data: &[u8]) -> Result<String> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN {
        return Err(Error::UnknownFormat);
    }

    if !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    // Header versions run "1.0" through "2.0"; anything else is suspect.
    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(version)
}

fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Check whether a file carries a valid PDF signature.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    detect_pdf_version(path).is_ok()
}

/// Check whether a byte buffer carries a valid PDF signature.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_pdf_version_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_pdf() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        assert_eq!(detect_pdf_version_from_bytes(data).unwrap(), "1.7");
    }

    #[test]
    fn test_detect_pdf_2_0() {
        let data = b"%PDF-2.0\n%\xe2\xe3\xcf\xd3";
        assert_eq!(detect_pdf_version_from_bytes(data).unwrap(), "2.0");
    }

    #[test]
    fn test_detect_invalid_format() {
        let result = detect_pdf_version_from_bytes(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_too_short() {
        let result = detect_pdf_version_from_bytes(b"%PDF");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_bad_version() {
        let result = detect_pdf_version_from_bytes(b"%PDF-x.y\n%junk");
        assert!(matches!(result, Err(Error::UnsupportedVersion(_))));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\ntest"));
        assert!(!is_pdf_bytes(b"Not a PDF file"));
        assert!(!is_pdf_bytes(b""));
    }
}
