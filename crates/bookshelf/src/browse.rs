use crate::output::format_text;
use crate::prelude::{eprintln, *};
use crate::source::{load_catalog, report_error, SourceConfig};
use bookshelf_core::book::SortKey;
use bookshelf_core::catalog::Catalog;
use bookshelf_core::state::ViewEvent;
use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Debug, clap::Args, Clone)]
pub struct BrowseOptions {
    /// Initial sort field: title, author, year
    #[arg(short, long, default_value = "title")]
    pub sort: SortKey,
}

/// A line typed in the interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(ViewEvent),
    /// Print the current page again
    Show,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  /<text>, search <text>   Filter by title or author (a bare '/' clears it)
  sort <title|author|year> Change the sort field
  n, next                  Next page
  p, prev                  Previous page
  <enter>                  Show the current page again
  h, help                  Show this help
  q, quit                  Exit
";

/// Parse one line of input into a command
pub fn parse_command(line: &str) -> Result<Command, Error> {
    let trimmed = line.trim();

    if let Some(query) = trimmed.strip_prefix('/') {
        return Ok(Command::Event(ViewEvent::Query(query.to_string())));
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Ok(Command::Show),
        "search" => Ok(Command::Event(ViewEvent::Query(rest.to_string()))),
        "sort" => rest
            .parse::<SortKey>()
            .map(|key| Command::Event(ViewEvent::Sort(key)))
            .map_err(Error::InvalidArgument),
        "n" | "next" => Ok(Command::Event(ViewEvent::NextPage)),
        "p" | "prev" => Ok(Command::Event(ViewEvent::PrevPage)),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        _ => Err(Error::UnknownCommand(trimmed.to_string())),
    }
}

pub async fn run(options: BrowseOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Loading books from {}...", global.source);
    }

    let config = SourceConfig::from_global(&global);
    let mut catalog = Catalog::new();
    load_catalog(&mut catalog, &config).await;
    report_error(&catalog);

    catalog.dispatch(ViewEvent::Sort(options.sort));

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    run_session(&mut catalog, stdin, &mut stdout).await
}

/// Drive the catalog from line-oriented input until EOF or `quit`
///
/// Every command that changes the view is followed by a full re-render.
pub async fn run_session<R, W>(catalog: &mut Catalog, mut reader: R, writer: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_page(catalog, writer).await?;
    write_prompt(writer).await?;

    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            break; // EOF
        }

        match parse_command(&line) {
            Ok(Command::Event(event)) => {
                log::debug!("dispatching {event:?}");
                if catalog.dispatch(event).is_some() {
                    write_page(catalog, writer).await?;
                }
            }
            Ok(Command::Show) => write_page(catalog, writer).await?,
            Ok(Command::Help) => writer.write_all(HELP.as_bytes()).await?,
            Ok(Command::Quit) => break,
            Err(err) => {
                let message = format!("{}\n", err.to_string().yellow());
                writer.write_all(message.as_bytes()).await?;
            }
        }

        write_prompt(writer).await?;
    }

    writer.flush().await?;
    Ok(())
}

async fn write_page<W: AsyncWrite + Unpin>(catalog: &Catalog, writer: &mut W) -> Result<()> {
    let text = format_text(&catalog.view(), catalog.state());
    writer.write_all(text.as_bytes()).await?;
    Ok(())
}

async fn write_prompt<W: AsyncWrite + Unpin>(writer: &mut W) -> Result<()> {
    writer.write_all(b"> ").await?;
    writer.flush().await?;
    Ok(())
}
