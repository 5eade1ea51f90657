//! Output types: the JSON manifest and the values returned to callers.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One entry of the manifest, describing a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// 1-indexed page number in document order.
    pub index: usize,
    /// Image path relative to the output root, e.g. `pages/page-01.jpg`.
    pub image: String,
    /// Plain text of the page, trimmed.
    pub text: String,
}

/// The JSON document written to `data/pages.json`.
///
/// `page_count` always equals `pages.len()` and page indices run `1..=N`
/// in document order; [`Manifest::new`] is the only constructor used by the
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Input filename without extension.
    pub title: String,
    pub page_count: usize,
    pub pages: Vec<PageRecord>,
}

impl Manifest {
    pub fn new(title: impl Into<String>, pages: Vec<PageRecord>) -> Self {
        Self {
            title: title.into(),
            page_count: pages.len(),
            pages,
        }
    }

    /// Serialise with two-space indentation, keeping non-ASCII text as-is.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Timing and volume figures for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionStats {
    pub total_pages: usize,
    /// Sum of extracted text lengths, in characters.
    pub text_chars: usize,
    /// Time spent in text extraction, rasterisation and JPEG encoding.
    pub render_duration_ms: u64,
    pub total_duration_ms: u64,
}

/// Result of a successful [`crate::build_site`] run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteOutput {
    pub manifest: Manifest,
    /// Where the manifest was written, i.e. `<root>/data/pages.json`.
    pub manifest_path: PathBuf,
    pub stats: ExtractionStats,
}

impl SiteOutput {
    /// The one-line completion summary printed by the CLI.
    pub fn summary(&self) -> String {
        format!(
            "Wrote {} pages to {}",
            self.manifest.pages.len(),
            self.manifest_path.display()
        )
    }
}

/// PDF metadata, as reported by inspect-only mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Input filename without extension; the manifest title.
    pub file_title: String,
    /// `/Title` from the document information dictionary.
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub page_count: usize,
    pub pdf_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize, text: &str) -> PageRecord {
        PageRecord {
            index,
            image: format!("pages/page-{index:02}.jpg"),
            text: text.to_string(),
        }
    }

    #[test]
    fn page_count_tracks_pages() {
        let m = Manifest::new("Deck", vec![record(1, "a"), record(2, "b")]);
        assert_eq!(m.page_count, 2);
        assert_eq!(m.pages.len(), m.page_count);
    }

    #[test]
    fn json_uses_camel_case_page_count() {
        let m = Manifest::new("Deck", vec![record(1, "Intro")]);
        let json: serde_json::Value = serde_json::from_str(&m.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["title"], "Deck");
        assert_eq!(json["pageCount"], 1);
        assert!(json.get("page_count").is_none());
        assert_eq!(json["pages"][0]["index"], 1);
        assert_eq!(json["pages"][0]["image"], "pages/page-01.jpg");
        assert_eq!(json["pages"][0]["text"], "Intro");
    }

    #[test]
    fn json_preserves_non_ascii_and_indents_two_spaces() {
        let m = Manifest::new("Präsentation", vec![record(1, "مرحبا — café")]);
        let json = m.to_json_pretty().unwrap();
        assert!(json.contains("Präsentation"));
        assert!(json.contains("مرحبا — café"));
        assert!(!json.contains("\\u"));
        assert!(json.contains("\n  \"title\""));
    }

    #[test]
    fn empty_document_serialises() {
        let m = Manifest::new("Blank", Vec::new());
        let json: serde_json::Value = serde_json::from_str(&m.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["pageCount"], 0);
        assert_eq!(json["pages"], serde_json::json!([]));
    }

    #[test]
    fn summary_line_reports_page_count() {
        let out = SiteOutput {
            manifest: Manifest::new("Deck", vec![record(1, ""), record(2, ""), record(3, "")]),
            manifest_path: PathBuf::from("presentation_site/data/pages.json"),
            stats: ExtractionStats::default(),
        };
        assert_eq!(
            out.summary(),
            "Wrote 3 pages to presentation_site/data/pages.json"
        );
    }
}
