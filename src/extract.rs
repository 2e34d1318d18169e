//! Page-ordered text extraction with per-page failure recovery.
//!
//! Pages are walked strictly in ascending index order. Field tagging
//! downstream assumes document order reflects narrative order (the company
//! name and problem statement sit near the front of a deck), so there is no
//! reordering and no parallel extraction here.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Abstract source of per-page text.
///
/// This is the seam between the pipeline and the concrete PDF library:
/// [`crate::DeckDocument`] implements it over lopdf, and tests implement it
/// with scripted pages to exercise the recovery paths without crafting
/// corrupt PDF files.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract the raw text of a single page (0-based index).
    fn page_text(&self, index: u32) -> Result<String>;
}

/// Raw text of a single page, keyed by its 0-based index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// 0-based page index, contiguous across the extraction.
    pub index: u32,

    /// Raw extracted text; empty when extraction failed on this page.
    pub text: String,
}

/// The result of walking every page of a document.
///
/// Immutable once produced. `pages_processed` counts pages attempted,
/// `pages_failed` counts pages recovered with an empty string, and
/// `char_count` sums per-page text lengths (failed pages contribute zero).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    /// Per-page text in ascending index order.
    pub pages: Vec<PageText>,

    /// Pages attempted (equals the loader's page count).
    pub pages_processed: u32,

    /// Pages whose extraction failed and was recovered as empty.
    pub pages_failed: u32,

    /// Total extracted characters across all pages.
    pub char_count: usize,
}

impl Extraction {
    /// Concatenate page texts with a page-boundary banner between pages.
    ///
    /// Empty (failed or blank) pages are skipped so the banner never
    /// introduces phantom paragraphs. The cleaner strips these banners
    /// again before summarization.
    pub fn joined(&self) -> String {
        let mut parts = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let trimmed = page.text.trim();
            if trimmed.is_empty() {
                continue;
            }
            parts.push(format!("--- Page {} ---\n{}\n", page.index + 1, trimmed));
        }
        parts.join("\n")
    }
}

/// Extract text from every page of `source` in document order.
///
/// Extraction failures on individual pages are recovered locally: the page
/// is recorded as empty, `pages_failed` is incremented, and the walk
/// continues. The whole extraction fails only when the document has zero
/// pages ([`Error::EmptyDocument`]) or when *every* page fails
/// ([`Error::NoTextExtracted`]).
pub fn extract_all<S: PageSource>(source: &S) -> Result<Extraction> {
    let page_count = source.page_count();
    if page_count == 0 {
        return Err(Error::EmptyDocument);
    }

    let mut pages = Vec::with_capacity(page_count as usize);
    let mut pages_failed = 0u32;
    let mut char_count = 0usize;

    for index in 0..page_count {
        let text = match source.page_text(index) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("page {index}: extraction failed, recording empty page: {err}");
                pages_failed += 1;
                String::new()
            }
        };
        char_count += text.chars().count();
        pages.push(PageText { index, text });
    }

    if pages_failed == page_count {
        return Err(Error::NoTextExtracted(page_count));
    }

    log::debug!(
        "extracted {} pages ({} failed), {} chars",
        page_count,
        pages_failed,
        char_count
    );

    Ok(Extraction {
        pages,
        pages_processed: page_count,
        pages_failed,
        char_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedSource {
        pages: Vec<Result<String>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<Result<String>>) -> Self {
            Self { pages }
        }
    }

    impl PageSource for ScriptedSource {
        fn page_count(&self) -> u32 {
            self.pages.len() as u32
        }

        fn page_text(&self, index: u32) -> Result<String> {
            match &self.pages[index as usize] {
                Ok(text) => Ok(text.clone()),
                Err(_) => Err(Error::PdfParse("bad content stream".into())),
            }
        }
    }

    #[test]
    fn test_extract_all_in_order() {
        let source = ScriptedSource::new(vec![
            Ok("first".to_string()),
            Ok("second".to_string()),
            Ok("third".to_string()),
        ]);
        let extraction = extract_all(&source).unwrap();
        assert_eq!(extraction.pages_processed, 3);
        assert_eq!(extraction.pages_failed, 0);
        let indices: Vec<u32> = extraction.pages.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(extraction.pages[1].text, "second");
    }

    #[test]
    fn test_char_count_includes_failed_pages_as_zero() {
        let source = ScriptedSource::new(vec![
            Ok("abcde".to_string()),
            Err(Error::PdfParse("x".into())),
            Ok("fgh".to_string()),
        ]);
        let extraction = extract_all(&source).unwrap();
        assert_eq!(extraction.pages_processed, 3);
        assert_eq!(extraction.pages_failed, 1);
        assert_eq!(extraction.char_count, 8);
        assert_eq!(extraction.pages[1].text, "");
    }

    #[test]
    fn test_char_count_counts_chars_not_bytes() {
        // "résumé•" is 7 characters but 11 UTF-8 bytes.
        let source = ScriptedSource::new(vec![Ok("résumé•".to_string())]);
        let extraction = extract_all(&source).unwrap();
        assert_eq!(extraction.char_count, 7);
    }

    #[test]
    fn test_all_pages_failing_is_fatal() {
        let source = ScriptedSource::new(vec![
            Err(Error::PdfParse("x".into())),
            Err(Error::PdfParse("y".into())),
        ]);
        let result = extract_all(&source);
        assert!(matches!(result, Err(Error::NoTextExtracted(2))));
    }

    #[test]
    fn test_zero_pages_is_fatal() {
        let source = ScriptedSource::new(vec![]);
        assert!(matches!(extract_all(&source), Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_joined_banners_and_skips_empty_pages() {
        let source = ScriptedSource::new(vec![
            Ok("Intro slide".to_string()),
            Ok("   ".to_string()),
            Ok("Closing slide".to_string()),
        ]);
        let extraction = extract_all(&source).unwrap();
        let joined = extraction.joined();
        assert!(joined.contains("--- Page 1 ---\nIntro slide"));
        assert!(!joined.contains("--- Page 2 ---"));
        assert!(joined.contains("--- Page 3 ---\nClosing slide"));
    }
}
