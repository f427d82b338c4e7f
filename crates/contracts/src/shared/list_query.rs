use std::collections::BTreeMap;
use std::fmt;

/// Sort descriptor in the backend's wire form: a field name, optionally
/// prefixed with `-` for descending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortSpec {
    pub field: String,
    pub descending: bool,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    /// Default ordering for every list screen: most recently created first.
    pub fn newest_first() -> Self {
        Self::desc("createdAt")
    }

    pub fn parse(s: &str) -> Self {
        match s.strip_prefix('-') {
            Some(field) => Self::desc(field),
            None => Self::asc(s),
        }
    }

    /// Header-click semantics: same field flips direction, a new field
    /// starts ascending.
    pub fn toggled(&self, field: &str) -> Self {
        if self.field == field {
            Self {
                field: self.field.clone(),
                descending: !self.descending,
            }
        } else {
            Self::asc(field)
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            write!(f, "{}", self.field)
        }
    }
}

/// Parameters of one list request. Equality of the whole tuple (plus the
/// resource name, added by the cache layer) is cache-entry identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListQuery {
    pub page: u64,
    pub limit: u64,
    pub sort: Option<SortSpec>,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page,
            limit,
            sort: None,
            filters: BTreeMap::new(),
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Add a filter. Blank values are omitted entirely; the backend
    /// treats `?status=` as a literal empty-string match.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.filters.insert(key.into(), value);
        }
        self
    }
}

/// Clamp a requested page into `[1, total_pages]`. A zero-page result set
/// still has one (empty) valid page.
pub fn clamp_page(requested: u64, total_pages: u64) -> u64 {
    requested.max(1).min(total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec_parse_and_display() {
        assert_eq!(SortSpec::parse("-createdAt"), SortSpec::desc("createdAt"));
        assert_eq!(SortSpec::parse("title"), SortSpec::asc("title"));
        assert_eq!(SortSpec::desc("createdAt").to_string(), "-createdAt");
        assert_eq!(SortSpec::asc("title").to_string(), "title");
    }

    #[test]
    fn test_sort_spec_toggle() {
        let s = SortSpec::asc("title");
        assert_eq!(s.toggled("title"), SortSpec::desc("title"));
        assert_eq!(s.toggled("price"), SortSpec::asc("price"));
    }

    #[test]
    fn test_blank_filters_are_omitted() {
        let q = ListQuery::new(1, 10)
            .with_filter("status", "Pending")
            .with_filter("category", "")
            .with_filter("search", "   ");
        assert_eq!(q.filters.len(), 1);
        assert_eq!(q.filters.get("status").map(String::as_str), Some("Pending"));
    }

    #[test]
    fn test_query_identity() {
        let a = ListQuery::new(1, 10).with_filter("q", "silk");
        let b = ListQuery::new(1, 10).with_filter("q", "silk");
        assert_eq!(a, b);
        assert_ne!(a, ListQuery::new(2, 10).with_filter("q", "silk"));
    }

    #[test]
    fn test_clamp_page_bounds() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(1, 0), 1);
    }
}
