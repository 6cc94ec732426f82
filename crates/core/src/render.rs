//! Render step
//!
//! Turns the pipeline output into a [`PageView`]: the books to display plus
//! the state of the pager controls. The shell decides how to draw it.

use crate::book::Book;
use crate::pipeline::{run_pipeline, total_pages};
use crate::state::ViewState;
use serde::Serialize;

/// One rendered page of the catalog
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PageView {
    pub books: Vec<Book>,
    pub page: usize,
    /// Computed from the full record set, not the filtered one
    pub total_pages: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub page_info: String,
}

/// Run the pipeline and compute the pager affordances
pub fn render(state: &ViewState, records: &[Book]) -> PageView {
    let books = run_pipeline(records, state);
    let total = total_pages(records.len());

    PageView {
        books,
        page: state.page,
        total_pages: total,
        prev_disabled: state.page == 1,
        // `>=` so an empty record set (0 pages) also disables next
        next_disabled: state.page >= total,
        page_info: format_page_info(state.page, total),
    }
}

/// Format the pager label
pub fn format_page_info(page: usize, total_pages: usize) -> String {
    format!("Page {page} of {total_pages}")
}

impl PageView {
    /// Markup for the display region, one block per book
    pub fn to_html(&self) -> String {
        self.books.iter().map(book_to_html).collect()
    }
}

fn book_to_html(book: &Book) -> String {
    format!(
        "<div class=\"book\"><h2>{}</h2><p>Author: {}</p><p>Year: {}</p></div>",
        html_escape::encode_text(&book.title),
        html_escape::encode_text(&book.author),
        book.year
    )
}
