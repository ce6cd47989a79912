use std::fmt;

/// Narrows results to a category on the server side. Sent verbatim as the
/// `type` query parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    All,
    News,
    Research,
    Reports,
    Articles,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::All,
        ContentType::News,
        ContentType::Research,
        ContentType::Reports,
        ContentType::Articles,
    ];

    /// Wire value for the `type` query parameter.
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            ContentType::All => "all",
            ContentType::News => "news",
            ContentType::Research => "research",
            ContentType::Reports => "reports",
            ContentType::Articles => "articles",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContentType::All => "All",
            ContentType::News => "News",
            ContentType::Research => "Research",
            ContentType::Reports => "Reports",
            ContentType::Articles => "Articles",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// User-entered search text plus the selected content-type filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    pub text: String,
    pub content_type: ContentType,
}

impl Query {
    #[must_use]
    pub fn new(text: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            text: text.into(),
            content_type,
        }
    }

    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trimmed().is_empty()
    }
}

/// The backend owns the result shape; we pass it through unchanged and only
/// require JSON-parseability. Components extract known fields best-effort.
pub type SearchResult = serde_json::Value;
