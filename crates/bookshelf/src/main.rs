use crate::prelude::*;
use clap::Parser;

mod browse;
mod error;
mod list;
mod output;
mod prelude;
mod source;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Search, sort and page through a static catalog of books"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Catalog location: a path to a JSON file or an http(s) URL
    #[clap(
        long,
        env = "BOOKSHELF_SOURCE",
        global = true,
        default_value = "books.json"
    )]
    source: String,

    /// Whether to display additional information.
    #[clap(long, env = "BOOKSHELF_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Print a single page of the catalog
    List(crate::list::ListOptions),

    /// Browse the catalog interactively
    Browse(crate::browse::BrowseOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => crate::list::run(options, app.global).await,
        SubCommands::Browse(options) => crate::browse::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
