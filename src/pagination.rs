//! Page arithmetic and navigation links shared by every listing endpoint.

use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;
pub const MAX_ITEMS_PER_PAGE: usize = 300;

/// Derived pagination facts for one request.
///
/// The requested page is never clamped: a page past the end keeps its number
/// and simply yields an empty item window, while `total_pages` and the
/// navigation booleans are still derived from the real total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl PageInfo {
    /// Computes the page count for `total` matches. `per_page` must already
    /// be validated to be positive.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        Self {
            page,
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page number the `last` link points at. With no pages at all the link
    /// still has to resolve somewhere; it points at page 1, same as `first`.
    fn last_page(&self) -> usize {
        if self.total_pages == 0 {
            1
        } else {
            self.total_pages
        }
    }
}

/// Navigation references for one endpoint identity: the request path with all
/// fixed segments echoed unchanged, varying only `page`.
///
/// Serializes to the wire pagination object:
/// `{page, per_page, pages, total, current, first, last, prev, next}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageLinks {
    pub page: usize,
    pub per_page: usize,
    pub pages: usize,
    pub total: usize,
    pub current: String,
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

impl PageLinks {
    pub fn new(path: &str, info: PageInfo) -> Self {
        let page_url = |page: usize| format!("{path}?page={page}&per_page={}", info.per_page);

        Self {
            page: info.page,
            per_page: info.per_page,
            pages: info.total_pages,
            total: info.total,
            current: page_url(info.page),
            first: page_url(1),
            last: page_url(info.last_page()),
            prev: info.has_prev().then(|| page_url(info.page - 1)),
            next: info.has_next().then(|| page_url(info.page + 1)),
        }
    }
}
