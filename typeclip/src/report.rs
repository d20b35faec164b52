use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use stenograph::Statistics;
use thiserror::Error;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to open {}: {error}", path.display())]
    Open {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Write(std::io::Error),
}

/// The result of one finished attempt
#[derive(Debug, Clone)]
pub struct Report {
    pub finished_at: DateTime<Local>,
    pub statistics: Statistics,
}

impl Report {
    pub fn new(statistics: Statistics) -> Self {
        Self {
            finished_at: Local::now(),
            statistics,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = &self.statistics;
        writeln!(f, "{}", self.finished_at.format(TIMESTAMP_FORMAT))?;
        writeln!(f, "WPM: {}", stats.wpm.map_or(0, |wpm| wpm.0))?;
        writeln!(f, "Time: {}", stats.elapsed)?;
        writeln!(f, "Accuracy: {}", stats.accuracy_text())
    }
}

/// Where reports go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    /// Appended to
    File(PathBuf),
}

impl From<PathBuf> for Destination {
    fn from(value: PathBuf) -> Self {
        if value == Path::new("-") {
            Self::Stdout
        } else {
            Self::File(value)
        }
    }
}

impl Destination {
    /// Write every report, in order
    pub fn write(&self, reports: &[Report]) -> Result<(), ReportError> {
        match self {
            Self::Stdout => write_all(&mut std::io::stdout().lock(), reports),
            Self::File(path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|error| ReportError::Open {
                        path: path.clone(),
                        error,
                    })?;
                write_all(&mut file, reports)
            }
        }
    }
}

fn write_all(writer: &mut impl Write, reports: &[Report]) -> Result<(), ReportError> {
    for report in reports {
        write!(writer, "{report}").map_err(ReportError::Write)?;
    }
    writer.flush().map_err(ReportError::Write)
}
