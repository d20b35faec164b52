use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod error;
mod events;
mod geometry;
mod page;
mod report;
mod source;

use app::App;
use config::{Overrides, Settings, ThemeName};
use error::AppError;
use events::Events;
use report::Destination;

const DEFAULT_LOG_FILTER: &str = "typeclip=info,stenograph=info";

/// Practice typing any text, file or piped output in your terminal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Texts to type, one attempt each
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// More texts to type, after the positional ones
    #[arg(long = "text", value_name = "TEXT", num_args = 1..)]
    text: Vec<String>,

    /// Files to type, one attempt each. Takes precedence over texts
    #[arg(long = "file", value_name = "PATH", num_args = 1..)]
    files: Vec<PathBuf>,

    /// Don't show results between attempts
    #[arg(long)]
    minimal: bool,

    /// Color theme
    #[arg(long, value_parser = parse_theme)]
    theme: Option<ThemeName>,

    /// Append a report of every finished attempt to this file. `-` prints to stdout
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Configuration directory
    #[arg(long, value_name = "DIR")]
    config: Option<PathBuf>,

    /// Jump over the indentation after a line break
    #[arg(long)]
    skip_indentation: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            theme: self.theme,
            skip_indentation: self.skip_indentation.then_some(true),
            output: self.output.clone(),
        }
    }
}

fn parse_theme(value: &str) -> Result<ThemeName, String> {
    value.parse().map_err(|_| {
        let names: &[&str] = <ThemeName as strum::VariantNames>::VARIANTS;
        format!("expected one of: {}", names.join(", "))
    })
}

/// Opens `path` for appending, creating missing parent directories
fn open_log_file(path: &Path) -> std::io::Result<File> {
    path.parent()
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|()| OpenOptions::new().create(true).append(true).open(path))
}

/// Log to a file, since the terminal belongs to the UI
///
/// Logging stays disabled if the file can't be opened.
fn init_logging(settings: &Settings) {
    let Some(path) = settings.log_file() else {
        return;
    };

    let Ok(file) = open_log_file(&path) else {
        return;
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = Settings::get(cli.config.clone(), cli.overrides())?;
    init_logging(&settings);

    let stdin = std::io::stdin();
    let piped = if stdin.is_terminal() {
        None
    } else {
        Some(source::read_piped(stdin.lock())?)
    };

    let mut literals = cli.texts;
    literals.extend(cli.text);
    let texts = source::collect_texts(literals, &cli.files, piped)?;

    let destination = settings.output.clone().map(Destination::from);
    let app = App::new(settings, texts, cli.minimal);

    let mut terminal = ratatui::try_init()?;
    let events = Events::crossterm();
    let result = app.run(&mut terminal, &events);
    ratatui::restore();

    let reports = result?;

    if let Some(destination) = destination {
        destination.write(&reports).inspect_err(|error| {
            tracing::error!(%error, ?destination, "failed to write reports");
        })?;
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error);
            eprintln!("typeclip: {error}");
            ExitCode::FAILURE
        }
    }
}
