//! Client-side pagination arithmetic for the all-causes grid.

/// 1-based pagination over a list of `total` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl Pagination {
    pub fn new(per_page: usize, total: usize) -> Self {
        Self {
            page: 1,
            per_page,
            total,
        }
    }

    /// Number of pages (ceiling division). Zero items means zero pages.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Move to `page` if it is a valid page number; otherwise stay put.
    pub fn go_to(self, page: usize) -> Self {
        if page >= 1 && page <= self.total_pages() {
            Self { page, ..self }
        } else {
            self
        }
    }

    /// Index range of the items on the current page.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = (self.page - 1).saturating_mul(self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    /// Page numbers for the pager controls: `1..=total_pages`.
    pub fn pages(&self) -> impl Iterator<Item = usize> {
        1..=self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(Pagination::new(15, 0).total_pages(), 0);
        assert_eq!(Pagination::new(15, 15).total_pages(), 1);
        assert_eq!(Pagination::new(15, 16).total_pages(), 2);
        assert_eq!(Pagination::new(15, 45).total_pages(), 3);
    }

    #[test]
    fn test_go_to_clamps_to_valid_pages() {
        let pager = Pagination::new(15, 45);
        assert_eq!(pager.go_to(2).page, 2);
        assert_eq!(pager.go_to(0).page, 1);
        assert_eq!(pager.go_to(4).page, 1);
    }

    #[test]
    fn test_range_slices_each_page() {
        let pager = Pagination::new(15, 40);
        assert_eq!(pager.range(), 0..15);
        assert_eq!(pager.go_to(2).range(), 15..30);
        // Last page is partial.
        assert_eq!(pager.go_to(3).range(), 30..40);
    }

    #[test]
    fn test_empty_list() {
        let pager = Pagination::new(15, 0);
        assert_eq!(pager.range(), 0..0);
        assert!(!pager.has_prev());
        assert!(!pager.has_next());
        assert_eq!(pager.pages().count(), 0);
    }

    #[test]
    fn test_prev_next_at_bounds() {
        let pager = Pagination::new(15, 45);
        assert!(!pager.has_prev());
        assert!(pager.has_next());
        let last = pager.go_to(3);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }
}
