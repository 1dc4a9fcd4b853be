//! Pagination Math
//!
//! Page count and button states derived from the latest response.

/// `ceil(total / size)`; zero rows means zero pages.
pub fn total_pages(total: u64, size: u32) -> u32 {
    if size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Where the current page sits among all pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Zero-based current page
    pub page: u32,
    pub total_pages: u32,
}

impl PageWindow {
    pub fn new(page: u32, total: u64, size: u32) -> Self {
        Self {
            page,
            total_pages: total_pages(total, size),
        }
    }

    /// Controls are only useful with more than one page
    pub fn is_hidden(&self) -> bool {
        self.total_pages <= 1
    }

    pub fn prev_disabled(&self) -> bool {
        self.page == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.page + 1 >= self.total_pages
    }

    pub fn prev(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    /// Next page, clamped to the last one
    pub fn next(&self) -> u32 {
        (self.page + 1).min(self.last())
    }

    pub fn last(&self) -> u32 {
        self.total_pages.saturating_sub(1)
    }

    /// "Page 2 of 3"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages)
    }
}
