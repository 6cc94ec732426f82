//! Query pipeline
//!
//! Three pure stages, always applied in the same order: [`filter`], then
//! [`sort`], then [`paginate`]. [`run_pipeline`] composes them over the full
//! record set for a given [`ViewState`].

use crate::book::{Book, SortKey};
use crate::state::ViewState;

/// Number of books shown per page
pub const PAGE_SIZE: usize = 10;

/// Keep the books whose title or author contains `query`, ignoring case
///
/// An empty query keeps everything. The year is never matched.
pub fn filter<'a>(records: &'a [Book], query: &str) -> Vec<&'a Book> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Order books ascending by `key`
///
/// There is no secondary key. The sort is stable, so books with equal keys
/// keep the order they had after filtering.
pub fn sort(mut books: Vec<&Book>, key: SortKey) -> Vec<&Book> {
    books.sort_by(|a, b| a.cmp_by(b, key));
    books
}

/// Calculate the slice bounds for a 1-indexed page
///
/// Returns `(start, end)` clipped to `total_items`. Pages past the end, and
/// page 0, yield an empty range.
pub fn page_bounds(total_items: usize, page: usize) -> (usize, usize) {
    if page == 0 {
        return (0, 0);
    }

    let start = (page - 1).saturating_mul(PAGE_SIZE).min(total_items);
    let end = start.saturating_add(PAGE_SIZE).min(total_items);
    (start, end)
}

/// Take the `page`-th window of [`PAGE_SIZE`] books
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    let (start, end) = page_bounds(items.len(), page);
    items[start..end].to_vec()
}

/// Number of pages needed to show `total_items`
pub fn total_pages(total_items: usize) -> usize {
    total_items.div_ceil(PAGE_SIZE)
}

/// Run filter, sort and paginate for the given view state
///
/// Total and deterministic: the same records and state always produce the
/// same page.
pub fn run_pipeline(records: &[Book], state: &ViewState) -> Vec<Book> {
    let filtered = filter(records, &state.query);
    let sorted = sort(filtered, state.sort_key);
    paginate(&sorted, state.page)
        .into_iter()
        .cloned()
        .collect()
}
