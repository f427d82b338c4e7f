use serde::{Deserialize, Serialize};

/// Normalized page of records as every list screen consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl<T> PageEnvelope<T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            total_pages: 0,
        }
    }

    /// Convert every record, failing on the first bad one.
    pub fn try_map<U, E>(
        self,
        f: impl FnMut(T) -> Result<U, E>,
    ) -> Result<PageEnvelope<U>, E> {
        Ok(PageEnvelope {
            data: self
                .data
                .into_iter()
                .map(f)
                .collect::<Result<Vec<_>, E>>()?,
            total: self.total,
            total_pages: self.total_pages,
        })
    }
}

/// Wire shape of a list response. The backend is inconsistent: newer
/// endpoints nest totals under `pagination`, older ones return a bare
/// `total` (and sometimes `totalPages`). Both must be tolerated.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default, rename = "totalPages")]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub pagination: Option<RawPagination>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPagination {
    pub total: u64,
    #[serde(default)]
    pub pages: Option<u64>,
}

/// `ceil(total / limit)`, with a zero limit treated as "no pages".
pub fn pages_for(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        0
    } else {
        total.div_ceil(limit)
    }
}

impl<T> RawListResponse<T> {
    /// Collapse the two observed envelope variants into one shape,
    /// computing `total_pages` when the backend omitted it.
    pub fn normalize(self, limit: u64) -> PageEnvelope<T> {
        let total = self
            .pagination
            .as_ref()
            .map(|p| p.total)
            .or(self.total)
            .unwrap_or(self.data.len() as u64);
        let total_pages = self
            .pagination
            .as_ref()
            .and_then(|p| p.pages)
            .or(self.total_pages)
            .unwrap_or_else(|| pages_for(total, limit));
        PageEnvelope {
            data: self.data,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_for_ceil() {
        assert_eq!(pages_for(0, 10), 0);
        assert_eq!(pages_for(1, 10), 1);
        assert_eq!(pages_for(10, 10), 1);
        assert_eq!(pages_for(11, 10), 2);
        assert_eq!(pages_for(95, 10), 10);
        assert_eq!(pages_for(5, 0), 0);
    }

    #[test]
    fn test_normalize_bare_total() {
        let raw: RawListResponse<u32> = serde_json::from_value(serde_json::json!({
            "data": [1, 2, 3],
            "total": 23
        }))
        .unwrap();
        let page = raw.normalize(10);
        assert_eq!(page.total, 23);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_normalize_nested_pagination() {
        let raw: RawListResponse<u32> = serde_json::from_value(serde_json::json!({
            "data": [1],
            "pagination": { "total": 41, "pages": 5 }
        }))
        .unwrap();
        let page = raw.normalize(10);
        assert_eq!(page.total, 41);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn test_normalize_pagination_without_pages_computes_ceil() {
        let raw: RawListResponse<u32> = serde_json::from_value(serde_json::json!({
            "data": [],
            "pagination": { "total": 41 }
        }))
        .unwrap();
        assert_eq!(raw.normalize(10).total_pages, 5);
    }

    #[test]
    fn test_normalize_missing_totals_falls_back_to_len() {
        let raw: RawListResponse<u32> =
            serde_json::from_value(serde_json::json!({ "data": [1, 2] })).unwrap();
        let page = raw.normalize(10);
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 1);
    }
}
