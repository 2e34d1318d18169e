//! The summary record produced by a pipeline run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::summary::fields::SummaryFields;
use crate::summary::paragraphs::KeptParagraph;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Human-readable, indented.
    #[default]
    Pretty,
    /// Single line, no extra whitespace.
    Compact,
}

/// The structured output of one pipeline run over one document.
///
/// Created once per run and never mutated; a re-run produces a new record.
/// The serialized field names (`company_name`, `description`, `problem`,
/// `solution`, `funding_info`, `industry_sectors`, `paragraphs`,
/// `pages_processed`, `pages_failed`, `text_extracted_chars`,
/// `extracted_at`, `raw_summary`) are a stable contract with external
/// storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Tagged business fields; absent fields are omitted from JSON.
    #[serde(flatten)]
    pub fields: SummaryFields,

    /// The kept paragraphs with their running ordinal labels.
    pub paragraphs: Vec<KeptParagraph>,

    /// Pages attempted by the extractor.
    pub pages_processed: u32,

    /// Pages whose extraction failed and was recovered as empty.
    pub pages_failed: u32,

    /// Total characters extracted across all pages.
    pub text_extracted_chars: usize,

    /// When this record was produced (ISO-8601 on the wire).
    pub extracted_at: DateTime<Utc>,

    /// The kept paragraphs joined by blank lines.
    pub raw_summary: String,
}

impl SummaryRecord {
    /// Serialize the record to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let json = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self)?,
            JsonFormat::Compact => serde_json::to_string(self)?,
        };
        Ok(json)
    }

    /// Render the record as a plain-text business summary report.
    pub fn report(&self) -> String {
        let mut out = String::from("PITCH DECK BUSINESS SUMMARY\n");
        out.push_str(&"=".repeat(50));
        out.push_str("\n\n");

        push_field(&mut out, "Company Name", self.fields.company_name.as_deref());
        push_field(&mut out, "Description", self.fields.description.as_deref());
        push_field(&mut out, "Problem", self.fields.problem.as_deref());
        push_field(&mut out, "Solution", self.fields.solution.as_deref());
        push_field(&mut out, "Funding Info", self.fields.funding_info.as_deref());
        push_field(
            &mut out,
            "Industry Sectors",
            self.fields.industry_sectors.as_deref(),
        );

        out.push_str(&format!("Total pages processed: {}\n", self.pages_processed));
        if self.pages_failed > 0 {
            out.push_str(&format!("Pages failed: {}\n", self.pages_failed));
        }
        out.push_str(&format!(
            "Total text extracted: {} characters\n",
            self.text_extracted_chars
        ));
        out
    }
}

fn push_field(out: &mut String, label: &str, value: Option<&str>) {
    out.push_str(&format!("{}: {}\n\n", label, value.unwrap_or("Not specified")));
}
