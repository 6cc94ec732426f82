use crate::book::SortKey;
use crate::pipeline::total_pages;
use serde::{Deserialize, Serialize};

/// The user-controlled inputs that drive the pipeline
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub sort_key: SortKey,
    /// 1-indexed
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort_key: SortKey::default(),
            page: 1,
        }
    }
}

/// A user input that changes the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The search text changed
    Query(String),
    /// A different sort field was selected
    Sort(SortKey),
    PrevPage,
    NextPage,
}

impl ViewState {
    /// Apply an event and report whether the view needs to be rendered again
    ///
    /// `record_count` is the size of the full, unfiltered record set. The
    /// next-page bound is computed from it rather than from the filtered
    /// result, so paging can land on an empty page while a query is active.
    /// Query and sort changes leave the page untouched.
    pub fn apply(&mut self, event: ViewEvent, record_count: usize) -> bool {
        match event {
            ViewEvent::Query(query) => {
                self.query = query;
                true
            }
            ViewEvent::Sort(key) => {
                self.sort_key = key;
                true
            }
            ViewEvent::PrevPage => {
                if self.page > 1 {
                    self.page -= 1;
                    true
                } else {
                    false
                }
            }
            ViewEvent::NextPage => {
                if self.page < total_pages(record_count) {
                    self.page += 1;
                    true
                } else {
                    false
                }
            }
        }
    }
}
