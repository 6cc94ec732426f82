//! Core library for bookshelf
//!
//! This crate implements the **Functional Core** of the bookshelf application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`bookshelf_core`** (this crate): Pure transformation functions with zero I/O
//! - **`bookshelf`**: Fetching the catalog, terminal output and the interactive
//!   session (the Imperative Shell)
//!
//! The shell fetches the raw catalog document and hands the bytes to
//! [`source::parse_books`]. From there on everything is a pure function of the
//! record set and the [`state::ViewState`]:
//!
//! ```text
//! event -> ViewState -> filter -> sort -> paginate -> PageView
//! ```
//!
//! # Module Organization
//!
//! - [`book`]: The `Book` record and the `SortKey` domain
//! - [`pipeline`]: `filter`, `sort` and `paginate`, composed by `run_pipeline`
//! - [`state`]: View state and the events that mutate it
//! - [`render`]: The rendered page plus pager affordances
//! - [`catalog`]: The explicit application state object
//! - [`source`]: Catalog location handling, parsing and `FetchError`
//!
//! # Example Usage
//!
//! ```rust
//! use bookshelf_core::book::{Book, SortKey};
//! use bookshelf_core::catalog::Catalog;
//! use bookshelf_core::state::ViewEvent;
//!
//! let mut catalog = Catalog::new();
//! catalog.begin_load();
//! catalog.finish_load(Ok(vec![
//!     Book::new("Dune", "Herbert", 1965),
//!     Book::new("1984", "Orwell", 1949),
//!     Book::new("Emma", "Austen", 1815),
//! ]));
//!
//! let view = catalog.dispatch(ViewEvent::Sort(SortKey::Year)).unwrap();
//! assert_eq!(view.books[0].title, "Emma");
//! assert_eq!(view.page_info, "Page 1 of 1");
//! ```

pub mod book;
pub mod catalog;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod state;
