use std::fmt;

/// One page of extracted document text
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Page {
    pub page_index: u32,  // 0-based
    pub page_number: u32, // 1-based, always page_index + 1
    pub text: String,     // Normalized extraction
    pub raw_text: String, // Whitespace-preserving extraction
}

impl Page {
    /// Build a page, falling back to `text` when the backend produced no raw text
    pub fn new(page_index: u32, text: impl Into<String>, raw_text: Option<String>) -> Self {
        let text = text.into();
        let raw_text = match raw_text {
            Some(raw) if !raw.is_empty() => raw,
            _ => text.clone(),
        };
        Self {
            page_index,
            page_number: page_index + 1,
            text,
            raw_text,
        }
    }

    /// Build an ordered page batch from (text, raw_text) pairs
    pub fn sequence<I, S>(pages: I) -> Vec<Page>
    where
        I: IntoIterator<Item = (S, Option<String>)>,
        S: Into<String>,
    {
        pages
            .into_iter()
            .zip(0u32..)
            .map(|((text, raw), index)| Page::new(index, text, raw))
            .collect()
    }

    /// Text the spacing checks run against
    pub fn scan_text(&self) -> &str {
        if self.raw_text.is_empty() {
            &self.text
        } else {
            &self.raw_text
        }
    }
}

/// Finding category. Known tags get their own variant, anything else the
/// AI reviewer invents is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FindingKind {
    Spacing,
    Brand,
    BrandInconsistency,
    Other(String),
}

impl FindingKind {
    pub fn as_str(&self) -> &str {
        match self {
            FindingKind::Spacing => "spacing",
            FindingKind::Brand => "brand",
            FindingKind::BrandInconsistency => "brand_inconsistency",
            FindingKind::Other(tag) => tag,
        }
    }
}

impl From<String> for FindingKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "spacing" => FindingKind::Spacing,
            "brand" => FindingKind::Brand,
            "brand_inconsistency" => FindingKind::BrandInconsistency,
            _ => FindingKind::Other(tag),
        }
    }
}

impl From<&str> for FindingKind {
    fn from(tag: &str) -> Self {
        FindingKind::from(tag.to_string())
    }
}

impl From<FindingKind> for String {
    fn from(kind: FindingKind) -> Self {
        match kind {
            FindingKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A located mechanical text defect ("issue" on the wire)
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub page: u32, // 1-based; not range-checked here
    pub sentence_or_excerpt: String,
    pub problem: String,
    pub suggestion: String,
}

impl Finding {
    pub fn spacing(
        page: u32,
        excerpt: impl Into<String>,
        problem: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            kind: FindingKind::Spacing,
            page,
            sentence_or_excerpt: excerpt.into(),
            problem: problem.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// Brand naming rule rendered into reviewer instructions
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BrandRule {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<String>,
    #[serde(default)]
    pub abbreviations: Vec<String>,
    #[serde(default)]
    pub legal_names: Vec<String>,
    #[serde(default)]
    pub disallow: Vec<String>,
}
