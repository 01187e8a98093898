//! Pagination request and result types.

/// A zero-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub const DEFAULT_PER_PAGE: u64 = 10;
    pub const MAX_PER_PAGE: u64 = 100;

    /// Creates a page request, clamping `per_page` to `1..=MAX_PER_PAGE`.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page,
            per_page: per_page.clamp(1, Self::MAX_PER_PAGE),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_PER_PAGE)
    }
}

/// One page of a larger result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based page index.
    pub number: u64,
    /// Requested page size.
    pub size: u64,
    pub total_elements: u64,
    /// Descriptor of the filter that produced the page, e.g. `owner=alice`.
    pub query: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, number: u64, size: u64, total_elements: u64) -> Self {
        Self {
            items,
            number,
            size,
            total_elements,
            query: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.size)
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        self.number.saturating_add(1) >= self.total_pages()
    }

    /// Converts every item while keeping the page position.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            query: self.query,
        }
    }

    /// Fallible variant of [`Page::map`]; stops at the first error.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<Vec<_>, _>>()?,
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            query: self.query,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_per_page() {
        assert_eq!(PageRequest::new(0, 0).per_page, 1);
        assert_eq!(PageRequest::new(0, 500).per_page, PageRequest::MAX_PER_PAGE);
        assert_eq!(PageRequest::default().per_page, 10);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Page::<u8>::new(vec![], 0, 10, 0).total_pages(), 0);
        assert_eq!(Page::<u8>::new(vec![], 0, 10, 10).total_pages(), 1);
        assert_eq!(Page::<u8>::new(vec![], 0, 10, 11).total_pages(), 2);
        assert_eq!(Page::<u8>::new(vec![], 0, 0, 11).total_pages(), 0);
    }

    #[test]
    fn empty_result_is_first_and_last() {
        let page = Page::<u8>::new(vec![], 0, 10, 0);

        assert!(page.is_first());
        assert!(page.is_last());
    }

    #[test]
    fn middle_page_is_neither_first_nor_last() {
        let page = Page::new(vec![1, 2], 1, 2, 6);

        assert!(!page.is_first());
        assert!(!page.is_last());
    }

    #[test]
    fn map_keeps_position_and_query() {
        let page = Page::new(vec![1, 2, 3], 2, 3, 9).with_query("owner=bob");

        let mapped = page.map(|n| n * 10);

        assert_eq!(mapped.items, vec![10, 20, 30]);
        assert_eq!(mapped.number, 2);
        assert_eq!(mapped.total_elements, 9);
        assert_eq!(mapped.query.as_deref(), Some("owner=bob"));
        assert!(mapped.is_last());
    }
}
