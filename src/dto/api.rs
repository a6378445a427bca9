//! Envelope types shared by all JSON list and error responses.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

/// Common query parameters accepted by every list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub search: Option<String>,
}

impl ListParams {
    /// Effective `(page, limit)` after defaults and the per-request cap.
    #[must_use]
    pub fn bounds(&self) -> (usize, usize) {
        page_bounds(self.page, self.limit)
    }
}

/// Applies the page/limit defaults and the per-request cap.
#[must_use]
pub fn page_bounds(page: Option<usize>, limit: Option<usize>) -> (usize, usize) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    (page, limit)
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
    pub limit: usize,
}

impl PaginationInfo {
    #[must_use]
    pub fn new(total: usize, page: usize, limit: usize) -> Self {
        Self {
            total,
            total_pages: total.div_ceil(limit.max(1)),
            page,
            limit,
        }
    }
}

/// `{ data, pagination }` wrapper returned by list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T> ListResponse<T> {
    #[must_use]
    pub fn new(data: Vec<T>, total: usize, page: usize, limit: usize) -> Self {
        Self {
            data,
            pagination: PaginationInfo::new(total, page, limit),
        }
    }
}

/// `{ "error": ... }` body used for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_apply_defaults_and_cap() {
        let params = ListParams::default();
        assert_eq!(params.bounds(), (1, DEFAULT_PAGE_SIZE));

        let params = ListParams {
            page: Some(0),
            limit: Some(1000),
            search: None,
        };
        assert_eq!(params.bounds(), (1, MAX_PAGE_SIZE));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PaginationInfo::new(41, 1, 20).total_pages, 3);
        assert_eq!(PaginationInfo::new(40, 1, 20).total_pages, 2);
        assert_eq!(PaginationInfo::new(0, 1, 20).total_pages, 0);
    }
}
