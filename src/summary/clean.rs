//! Text cleaning pass that runs between extraction and summarization.
//!
//! Every stage is deterministic and idempotent, so the pass as a whole is
//! idempotent: `clean(clean(x)) == clean(x)`. Tests rely on that.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Options for the cleaning pass.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Normalize Unicode to NFC form.
    pub normalize_unicode: bool,

    /// Replace typographic ligatures (ﬁ, ﬂ, ...) with their ASCII letters.
    pub fix_ligatures: bool,

    /// Remove `--- Page N ---` boundary banners left by extraction.
    pub strip_page_banners: bool,

    /// Strip leading bullet glyphs and numeric list prefixes at line starts.
    pub strip_list_markers: bool,

    /// Collapse runs of horizontal whitespace to a single space.
    pub collapse_whitespace: bool,

    /// Collapse runs of 2+ newlines to exactly two (one blank line).
    pub limit_blank_lines: bool,
}

impl CleanOptions {
    /// Create options with all stages enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable page-banner stripping (for text that never went through
    /// [`crate::Extraction::joined`]).
    pub fn keep_page_banners(mut self) -> Self {
        self.strip_page_banners = false;
        self
    }

    /// Disable list-marker stripping.
    pub fn keep_list_markers(mut self) -> Self {
        self.strip_list_markers = false;
        self
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            strip_page_banners: true,
            strip_list_markers: true,
            collapse_whitespace: true,
            limit_blank_lines: true,
        }
    }
}

/// The cleaning pass, with its regexes compiled once.
pub struct Cleaner {
    options: CleanOptions,
    page_banner_regex: Regex,
    blank_run_regex: Regex,
    hspace_regex: Regex,
    numeric_marker_regex: Regex,
    ligature_map: Vec<(&'static str, &'static str)>,
}

/// Bullet glyphs stripped from line starts. `-` and `*` are handled
/// separately because they are list markers only when followed by a space.
const BULLET_GLYPHS: &[char] = &[
    '•', '●', '○', '◆', '◇', '■', '□', '▪', '▫', '‣', '◦', '►', '▸',
];

impl Cleaner {
    /// Create a cleaner with the given options.
    pub fn new(options: CleanOptions) -> Self {
        Self {
            options,
            page_banner_regex: Regex::new(r"^--- Page \d+ ---$").unwrap(),
            blank_run_regex: Regex::new(r"\n{2,}").unwrap(),
            hspace_regex: Regex::new(r"[ \t\u{00A0}]+").unwrap(),
            numeric_marker_regex: Regex::new(r"^\d{1,3}[.)][ \t\u{00A0}]+").unwrap(),
            ligature_map: vec![
                ("\u{FB00}", "ff"),
                ("\u{FB01}", "fi"),
                ("\u{FB02}", "fl"),
                ("\u{FB03}", "ffi"),
                ("\u{FB04}", "ffl"),
                ("\u{FB05}", "st"),
                ("\u{FB06}", "st"),
            ],
        }
    }

    /// Run the full cleaning pass over `text`.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.fix_ligatures {
            for (ligature, replacement) in &self.ligature_map {
                result = result.replace(ligature, replacement);
            }
        }

        // Line-level stages: whitespace normalization first, so banners and
        // markers hidden behind indentation or odd spacing are recognized in
        // the same pass that exposes them.
        result = result
            .lines()
            .map(|line| self.clean_line(line))
            .collect::<Vec<_>>()
            .join("\n");

        if self.options.limit_blank_lines {
            result = self.blank_run_regex.replace_all(&result, "\n\n").to_string();
        }

        result.trim().to_string()
    }

    fn clean_line(&self, line: &str) -> String {
        let collapsed = if self.options.collapse_whitespace {
            self.hspace_regex.replace_all(line, " ").to_string()
        } else {
            line.to_string()
        };
        let mut line = collapsed.trim();

        // Banner and marker checks interleave: stripping a marker may expose
        // a banner (or another marker), and both must be gone after a single
        // pass for the pass to be idempotent.
        loop {
            if self.options.strip_page_banners && self.page_banner_regex.is_match(line) {
                return String::new();
            }
            if !self.options.strip_list_markers {
                return line.to_string();
            }
            let stripped = self.strip_marker(line);
            if stripped == line {
                return line.to_string();
            }
            line = stripped;
        }
    }

    /// Strip a single leading list marker, if any.
    fn strip_marker<'a>(&self, line: &'a str) -> &'a str {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(BULLET_GLYPHS) {
            return rest.trim_start();
        }
        if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            return rest.trim_start();
        }
        if let Some(m) = self.numeric_marker_regex.find(trimmed) {
            return &trimmed[m.end()..];
        }
        trimmed
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleanOptions::default())
    }
}

/// Clean `text` with default options.
pub fn clean(text: &str) -> String {
    Cleaner::default().process(text)
}
