//! Pagination window over the displayed records.
//!
//! Pages are 1-based. There is always at least one page, even when nothing
//! is displayed, and navigation never wraps around.

use std::ops::Range;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A page navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    /// Go to page 1.
    First,
    /// Go back one page. Disabled on page 1.
    Previous,
    /// Go to a specific 1-based page. Out-of-range pages are ignored.
    Goto(usize),
    /// Go forward one page. Disabled on the last page.
    Next,
    /// Go to the last page.
    Last,
}

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Start on page 1. A page size of 0 is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
        }
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current 1-based page.
    pub fn current(&self) -> usize {
        self.current
    }

    /// `ceil(len / page_size)`, never less than 1.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Index range of the current page within a list of `len` items.
    ///
    /// Empty when the current page lies past the end.
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = (self.current - 1).saturating_mul(self.page_size).min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    /// The current page's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.window(items.len())]
    }

    /// Whether "previous" is enabled.
    pub fn can_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether "next" is enabled for a list of `len` items.
    pub fn can_next(&self, len: usize) -> bool {
        self.current < self.total_pages(len)
    }

    /// Apply a navigation request. Returns true if the page changed.
    pub fn navigate(&mut self, nav: PageNav, len: usize) -> bool {
        let total = self.total_pages(len);
        let target = match nav {
            PageNav::First => 1,
            PageNav::Previous => self.current.saturating_sub(1).max(1),
            PageNav::Goto(page) if (1..=total).contains(&page) => page,
            PageNav::Goto(_) => self.current,
            PageNav::Next => (self.current + 1).min(total),
            PageNav::Last => total,
        };
        let changed = target != self.current;
        self.current = target;
        changed
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Pull the current page back inside `1..=total_pages(len)`.
    ///
    /// Returns true if the page had to move.
    pub fn clamp(&mut self, len: usize) -> bool {
        let clamped = self.current.clamp(1, self.total_pages(len));
        let changed = clamped != self.current;
        self.current = clamped;
        changed
    }
}
