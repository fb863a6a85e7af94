//! # Pagination
//!
//! Offset-based paging over an already ordered result set. Page numbers are
//! 1-based and unbounded; anything past the end yields an empty page rather
//! than an error. Deciding whether an empty page is a failure is the caller's
//! job (listing treats it as not found, search does not).
//!
//! Page `p` covers `[(p-1)*size, p*size)`. Both bounds are clamped at zero, so
//! `p <= 0` produces an empty page instead of wrapping around.

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index range of `page` within a sequence of `len` items.
    pub fn bounds(&self, page: i64, len: usize) -> (usize, usize) {
        let size = i64::try_from(self.page_size).unwrap_or(i64::MAX);
        let start = page.saturating_sub(1).saturating_mul(size).max(0);
        let end = page.saturating_mul(size).max(0);

        let clamp = |v: i64| usize::try_from(v).unwrap_or(usize::MAX).min(len);
        let (start, end) = (clamp(start), clamp(end));
        (start, end.max(start))
    }

    pub fn paginate<T: Clone>(&self, page: i64, items: &[T]) -> Vec<T> {
        let (start, end) = self.bounds(page, items.len());
        items[start..end].to_vec()
    }
}

/// Reads a `page` query value; absent or non-integer input means page 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_holds_page_size_items() {
        let p = Paginator::default();
        assert_eq!(p.paginate(1, &items(25)), items(10));
    }

    #[test]
    fn last_page_is_partial() {
        let p = Paginator::default();
        assert_eq!(p.paginate(3, &items(25)), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn consecutive_pages_are_disjoint_and_cover_everything() {
        let p = Paginator::new(4);
        let all = items(10);
        let mut seen = Vec::new();
        for page in 1..=3 {
            let slice = p.paginate(page, &all);
            assert!(slice.len() <= 4);
            assert!(slice.iter().all(|i| !seen.contains(i)));
            seen.extend(slice);
        }
        assert_eq!(seen, all);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let p = Paginator::default();
        assert!(p.paginate(1000, &items(19)).is_empty());
        assert!(p.paginate(3, &items(20)).is_empty());
    }

    #[test]
    fn non_positive_pages_are_empty() {
        let p = Paginator::default();
        assert!(p.paginate(0, &items(19)).is_empty());
        assert!(p.paginate(-4, &items(19)).is_empty());
        assert!(p.paginate(i64::MIN, &items(19)).is_empty());
    }

    #[test]
    fn huge_pages_saturate() {
        let p = Paginator::default();
        assert!(p.paginate(i64::MAX, &items(19)).is_empty());
    }

    #[test]
    fn custom_page_size_is_respected() {
        let p = Paginator::new(3);
        assert_eq!(p.page_size(), 3);
        assert_eq!(p.paginate(2, &items(7)), vec![4, 5, 6]);
    }

    #[test]
    fn parse_page_falls_back_to_one() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("4")), 4);
        assert_eq!(parse_page(Some("-2")), -2);
    }
}
