use crate::output::{format_json, format_text};
use crate::prelude::{println, *};
use crate::source::{load_catalog, report_error, SourceConfig};
use bookshelf_core::book::SortKey;
use bookshelf_core::catalog::Catalog;
use bookshelf_core::render::PageView;
use bookshelf_core::state::ViewEvent;

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Only show books whose title or author contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Sort field: title, author, year
    #[arg(short, long, default_value = "title")]
    pub sort: SortKey,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output as JSON
    #[arg(long, conflicts_with = "html")]
    pub json: bool,

    /// Output the page as HTML markup
    #[arg(long)]
    pub html: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Loading books from {}...", global.source);
    }

    let config = SourceConfig::from_global(&global);
    let mut catalog = Catalog::new();
    load_catalog(&mut catalog, &config).await;
    report_error(&catalog);

    let view = apply_options(&mut catalog, &options);

    if options.json {
        println!("{}", format_json(&view, catalog.state(), catalog.error())?);
    } else if options.html {
        println!("{}", view.to_html());
    } else {
        print!("{}", format_text(&view, catalog.state()));
    }

    Ok(())
}

/// Replay the command-line options as view events
///
/// The requested page is reached by pressing "next" from page 1, so it is
/// bounded the same way the pager is.
pub fn apply_options(catalog: &mut Catalog, options: &ListOptions) -> PageView {
    catalog.dispatch(ViewEvent::Query(options.query.clone()));
    catalog.dispatch(ViewEvent::Sort(options.sort));

    while catalog.state().page < options.page {
        if catalog.dispatch(ViewEvent::NextPage).is_none() {
            log::warn!(
                "page {} requested, stopped at page {}",
                options.page,
                catalog.state().page
            );
            break;
        }
    }

    catalog.view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::book::Book;

    fn create_test_options(query: &str, sort: SortKey, page: usize) -> ListOptions {
        ListOptions {
            query: query.to_string(),
            sort,
            page,
            json: false,
            html: false,
        }
    }

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
    fn test_apply_options_sort_by_year() {
        let mut catalog = loaded(vec![
            Book::new("Dune", "Herbert", 1965),
            Book::new("1984", "Orwell", 1949),
            Book::new("Emma", "Austen", 1815),
        ]);

        let view = apply_options(&mut catalog, &create_test_options("", SortKey::Year, 1));

        let titles: Vec<&str> = view.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Emma", "1984", "Dune"]);
    }

    #[test]
    fn test_apply_options_page_three() {
        let records = numbered(25);
        let mut catalog = loaded(records.clone());

        let view = apply_options(&mut catalog, &create_test_options("", SortKey::Title, 3));

        assert_eq!(view.books, records[20..25].to_vec());
        assert!(view.next_disabled);
        assert!(!view.prev_disabled);
    }

    #[test]
    fn test_apply_options_page_is_clamped() {
        let mut catalog = loaded(numbered(25));

        let view = apply_options(&mut catalog, &create_test_options("", SortKey::Title, 9));

        assert_eq!(view.page, 3);
        assert_eq!(view.page_info, "Page 3 of 3");
    }

    #[test]
    fn test_apply_options_on_failed_load() {
        let mut catalog = Catalog::new();
        catalog.begin_load();
        catalog.finish_load(Err(bookshelf_core::source::FetchError::Status(503)));

        let view = apply_options(&mut catalog, &create_test_options("dune", SortKey::Title, 2));

        assert!(view.books.is_empty());
        assert_eq!(view.page, 1);
        assert!(view.prev_disabled);
        assert!(view.next_disabled);
    }
}
