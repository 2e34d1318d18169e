//! Keyword-based field tagging.
//!
//! Heuristic and order-dependent by contract: paragraphs are scanned in
//! document order, the first paragraph matching a field's anchors wins
//! that field, and untagged fields stay absent. Callers distinguish
//! "not found" (`None`) from "found but empty", so absent fields must
//! never be collapsed into empty strings.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::summary::paragraphs::KeptParagraph;

/// Business fields extracted from the kept paragraphs.
///
/// Serialized field names are an external contract; storage schemas key
/// on them. Absent fields are omitted from JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryFields {
    /// Company name, taken from a `Company:` label when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// What the company does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The problem being addressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,

    /// The proposed solution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,

    /// Funding ask or round details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_info: Option<String>,

    /// Industry or market sectors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_sectors: Option<String>,
}

impl SummaryFields {
    /// Whether no field was tagged at all.
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.description.is_none()
            && self.problem.is_none()
            && self.solution.is_none()
            && self.funding_info.is_none()
            && self.industry_sectors.is_none()
    }
}

/// Case-insensitive anchor vocabularies per field. A paragraph containing
/// any anchor is a candidate for that field.
const DESCRIPTION_ANCHORS: &[&str] = &[
    "about",
    "description",
    "overview",
    "what we do",
    "our mission",
    "we are",
];
const PROBLEM_ANCHORS: &[&str] = &["problem", "challenge"];
const SOLUTION_ANCHORS: &[&str] = &["solution", "how it works", "we enable"];
const FUNDING_ANCHORS: &[&str] = &[
    "funding",
    "raise",
    "raising",
    "seed round",
    "series ",
    "investment",
];
const INDUSTRY_ANCHORS: &[&str] = &["industry", "sector", "market:"];

/// Tags paragraphs to business fields.
pub struct FieldTagger {
    company_regex: Regex,
}

impl FieldTagger {
    /// Create a tagger with the default anchor vocabularies.
    pub fn new() -> Self {
        Self {
            // Company name comes from an explicit label, value up to end of
            // line, e.g. "Company: Acme" or "Company Name: Acme Corp".
            company_regex: Regex::new(r"(?im)^company(?: name)?:[ \t]*(\S[^\n]*)$").unwrap(),
        }
    }

    /// Scan the kept paragraphs in ordinal order and assign each field the
    /// first matching paragraph. Later matches for an already-assigned
    /// field are ignored.
    pub fn tag(&self, paragraphs: &[KeptParagraph]) -> SummaryFields {
        let mut fields = SummaryFields::default();

        for paragraph in paragraphs {
            let text = paragraph.text.as_str();
            let lower = text.to_lowercase();

            if fields.company_name.is_none() {
                if let Some(caps) = self.company_regex.captures(text) {
                    fields.company_name = Some(caps[1].trim().to_string());
                }
            }
            if fields.description.is_none() && contains_any(&lower, DESCRIPTION_ANCHORS) {
                fields.description = Some(text.to_string());
            }
            if fields.problem.is_none() && contains_any(&lower, PROBLEM_ANCHORS) {
                fields.problem = Some(text.to_string());
            }
            if fields.solution.is_none() && contains_any(&lower, SOLUTION_ANCHORS) {
                fields.solution = Some(text.to_string());
            }
            if fields.funding_info.is_none() && contains_any(&lower, FUNDING_ANCHORS) {
                fields.funding_info = Some(text.to_string());
            }
            if fields.industry_sectors.is_none() && contains_any(&lower, INDUSTRY_ANCHORS) {
                fields.industry_sectors = Some(text.to_string());
            }
        }

        fields
    }
}

impl Default for FieldTagger {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_any(haystack: &str, anchors: &[&str]) -> bool {
    anchors.iter().any(|anchor| haystack.contains(anchor))
}
