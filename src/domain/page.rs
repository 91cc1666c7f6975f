//! Page arithmetic shared by every paginated listing.
//!
//! A [`PageRequest`] is the validated `(page, per_page)` pair a repository is
//! asked for; a [`Page`] is what it returns, together with the total row count
//! so navigation can be derived.

use serde_json::json;

use crate::error::AppError;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Largest page size a client can get. Larger requests are clamped.
pub const MAX_PER_PAGE: i64 = 100;

/// A validated request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    /// Validates and clamps the requested page.
    ///
    /// `per_page` is silently clamped to [`MAX_PER_PAGE`]. A `per_page` of zero
    /// is accepted and yields an empty first page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `page` is less than 1, `per_page` is
    /// negative, or the row offset of the page does not fit in an `i64`.
    pub fn new(page: i64, per_page: i64) -> Result<Self, AppError> {
        let per_page = per_page.min(MAX_PER_PAGE);

        if page < 1 || per_page < 0 || (page - 1).checked_mul(per_page).is_none() {
            return Err(AppError::not_found(
                "Page not found",
                json!({ "page": page, "per_page": per_page }),
            ));
        }

        Ok(Self { page, per_page })
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        (self.page - 1)
            .checked_mul(self.per_page)
            .unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: i64) -> Self {
        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            total,
        }
    }

    /// Total number of pages; zero when there are no rows.
    pub fn pages(&self) -> i64 {
        if self.per_page <= 0 {
            return 0;
        }
        (self.total + self.per_page - 1) / self.per_page
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages()
    }

    pub fn prev_num(&self) -> Option<i64> {
        self.has_prev().then(|| self.page - 1)
    }

    pub fn next_num(&self) -> Option<i64> {
        self.has_next().then(|| self.page + 1)
    }

    /// Rejects pages past the end of the result set. The first page is always
    /// valid, even when empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page is empty and not the first one.
    pub fn ensure_exists(self) -> Result<Self, AppError> {
        if self.items.is_empty() && self.page != 1 {
            return Err(AppError::not_found(
                "Page not found",
                json!({ "page": self.page, "pages": self.pages() }),
            ));
        }
        Ok(self)
    }

    /// Converts the items while keeping the page metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}
