use crate::prelude::{eprintln, *};
use bookshelf_core::book::Book;
use bookshelf_core::catalog::Catalog;
use bookshelf_core::render::PageView;
use bookshelf_core::source::{classify_location, parse_books, FetchError, SourceLocation};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Where and how to load the catalog
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub location: SourceLocation,
    pub show_spinner: bool,
}

impl SourceConfig {
    /// Build the configuration from the global CLI options
    pub fn from_global(global: &crate::Global) -> Self {
        Self {
            location: classify_location(&global.source),
            show_spinner: true,
        }
    }
}

/// Spinner shown while the catalog is being fetched
///
/// Cleared on drop, so it disappears on success, on failure and on early
/// returns alike.
struct LoadingIndicator(ProgressBar);

impl LoadingIndicator {
    fn new(visible: bool, location: &SourceLocation) -> Self {
        if !visible {
            return Self(ProgressBar::hidden());
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Loading books from {}...", describe(location)));
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        Self(spinner)
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.0.finish_and_clear();
    }
}

fn describe(location: &SourceLocation) -> String {
    match location {
        SourceLocation::Url(url) => url.clone(),
        SourceLocation::Path(path) => path.display().to_string(),
    }
}

/// Fetch and parse the catalog document
pub async fn fetch_books(location: &SourceLocation) -> Result<Vec<Book>, FetchError> {
    let body = match location {
        SourceLocation::Url(url) => fetch_url(url).await?,
        SourceLocation::Path(path) => read_file(path).await?,
    };

    parse_books(&body)
}

async fn fetch_url(url: &str) -> Result<String, FetchError> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))
}

async fn read_file(path: &Path) -> Result<String, FetchError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FetchError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

/// Load the catalog once, with the loading indicator up while in flight
///
/// Failures never leave this function: they end up in the catalog's error
/// surface and the record set stays empty.
pub async fn load_catalog(catalog: &mut Catalog, config: &SourceConfig) -> Option<PageView> {
    log::debug!("loading catalog from {:?}", config.location);
    catalog.begin_load();

    let result = {
        let _indicator = LoadingIndicator::new(config.show_spinner, &config.location);
        fetch_books(&config.location).await
    };

    match &result {
        Ok(books) => log::info!("loaded {} books", books.len()),
        Err(err) => log::warn!("failed to load catalog: {err}"),
    }

    catalog.finish_load(result)
}

/// Print the catalog's error surface, if anything is on it
pub fn report_error(catalog: &Catalog) {
    if let Some(message) = catalog.error() {
        eprintln!("{}", message.red());
    }
}
