use crate::prelude::*;
use bookshelf_core::render::PageView;
use bookshelf_core::state::ViewState;
use colored::Colorize;
use serde::Serialize;

/// JSON document printed by `list --json`
#[derive(Debug, Serialize)]
pub struct ListOutput<'a> {
    pub query: &'a str,
    pub sort: String,
    pub error: Option<&'a str>,
    #[serde(flatten)]
    pub view: &'a PageView,
}

/// Convert a page to a JSON string
pub fn format_json(view: &PageView, state: &ViewState, error: Option<&str>) -> Result<String> {
    let output = ListOutput {
        query: &state.query,
        sort: state.sort_key.to_string(),
        error,
        view,
    };

    serde_json::to_string_pretty(&output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert a page to formatted text with colors
pub fn format_text(view: &PageView, state: &ViewState) -> String {
    let mut result = String::new();

    // Header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", "BOOKSHELF".bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    let query = if state.query.is_empty() {
        "(none)".bright_black().to_string()
    } else {
        format!("\"{}\"", state.query).bright_white().to_string()
    };
    result.push_str(&format!(
        "{}: {} | {}: {}\n",
        "Search".green(),
        query,
        "Sort".green(),
        state.sort_key.as_str().bright_white()
    ));

    if view.books.is_empty() {
        result.push_str(&format!("\n{}\n", "No books on this page.".yellow()));
    } else {
        let mut table = new_table();
        table.set_titles(prettytable::row![
            "#".bold().cyan(),
            "Title".bold().cyan(),
            "Author".bold().cyan(),
            "Year".bold().cyan()
        ]);

        let offset = view.page.saturating_sub(1) * bookshelf_core::pipeline::PAGE_SIZE;
        for (idx, book) in view.books.iter().enumerate() {
            table.add_row(prettytable::row![
                format!("[{}]", offset + idx + 1).yellow(),
                book.title.bright_white().bold(),
                book.author.bright_magenta(),
                book.year.to_string().bright_yellow()
            ]);
        }

        result.push('\n');
        result.push_str(&table.to_string());
    }

    result.push_str(&format!("\n{}\n", format_pager(view)));
    result
}

/// Render the prev/next controls and the page label on one line
pub fn format_pager(view: &PageView) -> String {
    let prev = if view.prev_disabled {
        "< prev".bright_black().to_string()
    } else {
        "< prev".green().bold().to_string()
    };

    let next = if view.next_disabled {
        "next >".bright_black().to_string()
    } else {
        "next >".green().bold().to_string()
    };

    format!("{}   {}   {}", prev, view.page_info.bright_cyan(), next)
}
