//! Stateless pagination over a client-held result set.

#[cfg(test)]
#[path = "paging_test.rs"]
mod paging_test;

/// 5 columns x 2 rows.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A 1-indexed page cursor over a list of known length.
///
/// `prev`/`next` clamp at the boundaries, and an empty list still has one
/// (empty) page so the controls always have a valid current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self { current_page: 1, page_size }
    }

    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.current_page < self.total_pages(count)
    }

    /// Step back one page; no-op at page 1.
    pub fn prev(self) -> Self {
        Self {
            current_page: self.current_page.max(2) - 1,
            ..self
        }
    }

    /// Step forward one page; no-op at the last page.
    pub fn next(self, count: usize) -> Self {
        Self {
            current_page: (self.current_page + 1).min(self.total_pages(count)),
            ..self
        }
    }

    /// The slice of `items` belonging to the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}
