//! Pagination arithmetic.

use std::ops::Range;

/// Number of pages needed for `count` rows. Never less than 1.
pub fn total_pages(count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    count.div_ceil(per_page).max(1)
}

/// Clamps a requested page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of the rows shown on `page` (1-based).
///
/// The range is cut at `count`, so the last page may be short and a page
/// past the end is empty.
pub fn page_bounds(page: usize, per_page: usize, count: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(count);
    let end = start.saturating_add(per_page).min(count);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(5, 50), 1);
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(101, 10), 11);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(53, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(1, 2, 5), 0..2);
        assert_eq!(page_bounds(3, 2, 5), 4..5);
        assert_eq!(page_bounds(4, 2, 5), 5..5);
        assert_eq!(page_bounds(1, 50, 0), 0..0);
    }
}
