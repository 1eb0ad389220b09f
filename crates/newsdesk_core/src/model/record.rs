//! Article record model.
//!
//! # Responsibility
//! - Define the five-field record carried by every list node.
//! - Provide label/category normalization helpers shared by reporting.
//!
//! # Invariants
//! - Field values are never mutated after ingestion; core code only relinks
//!   the nodes that own records.
//! - `date` is kept as raw text; ordering keys are derived on demand.

use serde::{Deserialize, Serialize};

/// Classification label attached during source merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    True,
    Fake,
}

impl Label {
    /// Parses a raw label column, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything other than `true`/`fake`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" => Some(Self::True),
            "fake" => Some(Self::Fake),
            _ => None,
        }
    }

    /// Column text written by source merging.
    pub fn as_column(self) -> &'static str {
        match self {
            Self::True => "True",
            Self::Fake => "Fake",
        }
    }
}

/// One news article as ingested from the merged CSV.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub category: String,
    /// Raw date text, e.g. `January 15, 2016` or `8-Dec-17`.
    pub date: String,
    /// Raw label text, normally `True` or `Fake`.
    pub label: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: category.into(),
            date: date.into(),
            label: label.into(),
        }
    }

    /// Parsed label, or `None` when the column holds something unexpected.
    pub fn label_kind(&self) -> Option<Label> {
        Label::parse(&self.label)
    }

    /// Whether the label column reads `fake` (case-insensitive).
    pub fn is_fake(&self) -> bool {
        self.label_kind() == Some(Label::Fake)
    }

    /// Category with all whitespace removed and lowercased.
    ///
    /// `politics News` and `politicsNews` both normalize to `politicsnews`.
    pub fn normalized_category(&self) -> String {
        self.category
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// Whether this article belongs to one of the political categories.
    pub fn is_political(&self) -> bool {
        matches!(
            self.normalized_category().as_str(),
            "politics" | "politicsnews"
        )
    }
}
