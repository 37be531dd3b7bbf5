//! Pagination primitives
//!
//! [`PageRequest`] is what a caller asks for, [`Page`] is what comes back.
//! Page numbers are 1-based.

use serde::{Deserialize, Serialize};

/// Per-page size used when the client does not send one
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Raw query-string parameters before normalization
///
/// Both members are kept as strings so that `?page=abc` falls back to the
/// default instead of rejecting the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl PageQuery {
    pub fn into_request(self, default_per_page: u32) -> PageRequest {
        PageRequest::new(
            parse_positive(self.page.as_deref()).unwrap_or(1),
            parse_positive(self.per_page.as_deref()).unwrap_or(default_per_page),
        )
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|n| *n >= 1)
}

/// Normalized page request (both members ≥ 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Values below 1 are clamped to 1
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Number of items to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// One page of results plus the metadata the client needs to navigate
///
/// `from` and `to` are the 1-based positions of the first and last item on
/// this page, `null` when the page is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub current_page: u32,
    pub data: Vec<T>,
    pub from: Option<u64>,
    pub last_page: u64,
    pub per_page: u32,
    pub to: Option<u64>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        let per_page = u64::from(request.per_page());
        let last_page = total.div_ceil(per_page).max(1);
        let (from, to) = if items.is_empty() {
            (None, None)
        } else {
            let from = request.offset() + 1;
            (Some(from), Some(from + items.len() as u64 - 1))
        };

        Self {
            current_page: request.page(),
            data: items,
            from,
            last_page,
            per_page: request.per_page(),
            to,
            total,
        }
    }

    /// Transform every item, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            current_page: self.current_page,
            data: self.data.into_iter().map(f).collect(),
            from: self.from,
            last_page: self.last_page,
            per_page: self.per_page,
            to: self.to,
            total: self.total,
        }
    }
}
