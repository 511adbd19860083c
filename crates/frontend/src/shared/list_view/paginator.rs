//! Fixed-size page slicing over the filtered collection. Pages are 1-based.

use std::ops::RangeInclusive;

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Clamps `page` into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// `rows[(page-1)*page_size .. page*page_size]`, truncated at the end.
/// Out-of-range pages yield an empty slice.
pub fn page_slice<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(rows.len());
    rows.get(start..end).unwrap_or(&[])
}

/// Everything the pagination controls need to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerModel {
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub page_size: usize,
}

impl PagerModel {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn pages(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    /// "11-20 of 42" style window, or `None` for an empty list.
    pub fn window(&self) -> Option<(usize, usize)> {
        if self.total_count == 0 {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        let last = (self.page * self.page_size).min(self.total_count);
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(12, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_twelve_rows_page_size_ten() {
        let rows: Vec<u32> = (1..=12).collect();
        assert_eq!(total_pages(rows.len(), 10), 2);
        assert_eq!(page_slice(&rows, 1, 10).len(), 10);
        assert_eq!(page_slice(&rows, 2, 10), &[11, 12]);
        assert!(page_slice(&rows, 3, 10).is_empty());
        assert!(page_slice(&rows, 0, 10).is_empty());
    }

    #[test]
    fn test_pages_reconstruct_collection_exactly_once() {
        for len in [0usize, 1, 9, 10, 11, 37] {
            for size in [1usize, 5, 10] {
                let rows: Vec<usize> = (0..len).collect();
                let pages = total_pages(len, size);
                let joined: Vec<usize> = (1..=pages)
                    .flat_map(|p| page_slice(&rows, p, size).to_vec())
                    .collect();
                assert_eq!(joined, rows, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_pager_model() {
        let pager = PagerModel { page: 2, total_pages: 3, total_count: 25, page_size: 10 };
        assert!(pager.has_prev());
        assert!(pager.has_next());
        assert_eq!(pager.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(pager.window(), Some((11, 20)));

        let last = PagerModel { page: 3, ..pager };
        assert!(!last.has_next());
        assert_eq!(last.window(), Some((21, 25)));

        let empty = PagerModel { page: 1, total_pages: 0, total_count: 0, page_size: 10 };
        assert!(!empty.has_prev());
        assert!(!empty.has_next());
        assert_eq!(empty.window(), None);
    }
}
