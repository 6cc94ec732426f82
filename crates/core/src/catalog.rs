//! Application state
//!
//! [`Catalog`] owns everything the view depends on: the record set, the
//! [`ViewState`], and the two status surfaces (loading flag and error
//! message). Nothing here performs I/O; the shell calls
//! [`Catalog::begin_load`], awaits the fetch, and hands the result to
//! [`Catalog::finish_load`].

use crate::book::Book;
use crate::render::{render, PageView};
use crate::source::FetchError;
use crate::state::{ViewEvent, ViewState};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Book>,
    state: ViewState,
    loading: bool,
    error: Option<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as in flight
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Complete a fetch
    ///
    /// The loading flag is cleared whatever the outcome. On success the record
    /// set is replaced and the initial page is returned. On failure the error
    /// message is stored, the record set is left empty and nothing is
    /// rendered.
    pub fn finish_load(&mut self, result: Result<Vec<Book>, FetchError>) -> Option<PageView> {
        self.loading = false;

        match result {
            Ok(records) => {
                self.records = records;
                Some(self.view())
            }
            Err(err) => {
                self.records = Vec::new();
                self.error = Some(err.user_message());
                None
            }
        }
    }

    /// Apply a user event, returning the new page if the view changed
    pub fn dispatch(&mut self, event: ViewEvent) -> Option<PageView> {
        if self.state.apply(event, self.records.len()) {
            Some(self.view())
        } else {
            None
        }
    }

    /// Render the current page
    pub fn view(&self) -> PageView {
        render(&self.state, &self.records)
    }

    pub fn records(&self) -> &[Book] {
        &self.records
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::SortKey;

    fn loaded(records: Vec<Book>) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.begin_load();
        catalog.finish_load(Ok(records));
        catalog
    }

    fn numbered(count: usize) -> Vec<Book> {
        (0..count)
            .map(|i| Book::new(format!("Book {i:02}"), "Someone", i as i64))
            .collect()
    }

    #[test]
    fn test_begin_load_sets_loading() {
        let mut catalog = Catalog::new();
        catalog.begin_load();
        assert!(catalog.is_loading());
        assert_eq!(catalog.error(), None);
    }

    #[test]
    fn test_finish_load_success_renders_first_page() {
        let mut catalog = Catalog::new();
        catalog.begin_load();

        let view = catalog.finish_load(Ok(numbered(12))).unwrap();

        assert!(!catalog.is_loading());
        assert_eq!(catalog.records().len(), 12);
        assert_eq!(view.books.len(), 10);
        assert_eq!(view.page_info, "Page 1 of 2");
    }

    #[test]
    fn test_finish_load_failure() {
        let mut catalog = Catalog::new();
        catalog.begin_load();

        let view = catalog.finish_load(Err(FetchError::Status(500)));

        assert!(view.is_none());
        assert!(!catalog.is_loading());
        assert!(catalog.records().is_empty());
        assert_eq!(
            catalog.error(),
            Some("Error fetching books: Network response was not ok: HTTP 500")
        );
        assert!(catalog.view().books.is_empty());
    }

    #[test]
    fn test_begin_load_clears_previous_error() {
        let mut catalog = Catalog::new();
        catalog.begin_load();
        catalog.finish_load(Err(FetchError::Parse("bad".to_string())));
        assert!(catalog.error().is_some());

        catalog.begin_load();
        assert_eq!(catalog.error(), None);
    }

    #[test]
    fn test_dispatch_paging_scenario() {
        let mut catalog = loaded(numbered(25));

        catalog.dispatch(ViewEvent::NextPage).unwrap();
        let view = catalog.dispatch(ViewEvent::NextPage).unwrap();

        assert_eq!(view.books, numbered(25)[20..25].to_vec());
        assert!(view.next_disabled);
        assert!(!view.prev_disabled);

        assert!(catalog.dispatch(ViewEvent::NextPage).is_none());
        assert_eq!(catalog.state().page, 3);
    }

    #[test]
    fn test_dispatch_prev_on_first_page_is_noop() {
        let mut catalog = loaded(numbered(25));
        assert!(catalog.dispatch(ViewEvent::PrevPage).is_none());
    }

    #[test]
    fn test_dispatch_query_does_not_reset_page() {
        let mut catalog = loaded(numbered(25));
        catalog.dispatch(ViewEvent::NextPage);

        let view = catalog
            .dispatch(ViewEvent::Query("book 0".to_string()))
            .unwrap();

        // Ten matches fit on page 1, so page 2 is empty
        assert_eq!(view.page, 2);
        assert!(view.books.is_empty());
    }

    #[test]
    fn test_dispatch_sort_rerenders() {
        let mut catalog = loaded(vec![
            Book::new("Dune", "Herbert", 1965),
            Book::new("1984", "Orwell", 1949),
            Book::new("Emma", "Austen", 1815),
        ]);

        let view = catalog.dispatch(ViewEvent::Sort(SortKey::Author)).unwrap();
        let authors: Vec<&str> = view.books.iter().map(|b| b.author.as_str()).collect();
        assert_eq!(authors, vec!["Austen", "Herbert", "Orwell"]);
    }

    #[test]
    fn test_view_is_idempotent() {
        let catalog = loaded(numbered(25));
        assert_eq!(catalog.view(), catalog.view());
    }
}
