/// Free-text search typed by the user, split on commas
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    raw: String,
    terms: Vec<SearchTerm>,
}

/// One trimmed search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    lowered: String,
}

impl SearchTerm {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            lowered: raw.to_lowercase(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }
}

impl SearchQuery {
    /// Split `raw` on commas and trim every term. Only an empty string yields
    /// no terms; a blank term such as the tail of `"chrome,"` is kept and
    /// matches every record.
    pub fn parse(raw: &str) -> Self {
        let terms = if raw.is_empty() {
            Vec::new()
        } else {
            raw.split(',').map(str::trim).map(SearchTerm::new).collect()
        };

        Self {
            raw: raw.to_string(),
            terms,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn terms(&self) -> &[SearchTerm] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        SearchQuery::parse(raw)
    }
}
