//! Page position tracking for GitHub list endpoints.

/// Largest page size GitHub accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Position of a fetched page within a paginated listing.
///
/// # Example
///
/// ```
/// use gleaner::github::pagination::PageInfo;
///
/// let info = PageInfo::new(2).with_has_next(true);
/// assert_eq!(info.next_page(), Some(3));
/// assert_eq!(PageInfo::new(3).next_page(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    current_page: u32,
    has_next: bool,
}

impl PageInfo {
    /// Creates page info for the given 1-based page, with no page after it.
    #[must_use]
    pub const fn new(current_page: u32) -> Self {
        Self {
            current_page,
            has_next: false,
        }
    }

    /// Sets whether there is a next page.
    #[must_use]
    pub const fn with_has_next(mut self, has_next: bool) -> Self {
        self.has_next = has_next;
        self
    }

    /// Number of the following page, if there is one.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_next {
            self.current_page.checked_add(1)
        } else {
            None
        }
    }
}
