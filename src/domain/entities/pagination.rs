//! Offset pagination input and output.

use serde_json::json;

use crate::error::AppError;

/// Largest page size accepted from clients.
pub const MAX_LIMIT: u32 = 100;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Builds a page request, applying `default_limit` when `limit` is absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `page` or `limit` is zero or
    /// `limit` exceeds [`MAX_LIMIT`].
    pub fn new(page: Option<u32>, limit: Option<u32>, default_limit: u32) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(default_limit);

        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "page": page }),
            ));
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::bad_request(
                format!("Limit must be between 1 and {MAX_LIMIT}"),
                json!({ "limit": limit }),
            ));
        }

        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Index of the first row on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Slices one page out of an in-memory sequence.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        items
            .into_iter()
            .skip(start)
            .take(self.limit as usize)
            .collect()
    }
}

/// One page of results plus the full matching count.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page(),
            limit: request.limit(),
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.limit.max(1)))
    }
}
