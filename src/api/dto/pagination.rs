//! Pagination query parameters and the list response envelope.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::{PageRequest, PaginatedResult};
use crate::error::AppError;

/// Default page size for destination and business listings.
pub const DEFAULT_LIST_LIMIT: u32 = 12;

/// Default page size for blog posts.
pub const DEFAULT_POST_LIMIT: u32 = 10;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Validates the parameters into a [`PageRequest`].
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: `default_limit`
    pub fn to_page_request(&self, default_limit: u32) -> Result<PageRequest, AppError> {
        PageRequest::new(self.page, self.limit, default_limit)
    }
}

#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

/// `{ "items": [...], "pagination": {...} }`
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> ListResponse<T> {
    pub fn from_page<U>(page: PaginatedResult<U>, f: impl FnMut(U) -> T) -> Self {
        let pagination = PaginationMeta {
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages(),
        };

        Self {
            items: page.items.into_iter().map(f).collect(),
            pagination,
        }
    }
}
