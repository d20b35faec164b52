use derive_more::From;
use thiserror::Error;

use crate::{config::ConfigError, report::ReportError, source::SourceError};

#[derive(Debug, From, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(ConfigError),

    #[error("{0}")]
    Source(SourceError),

    #[error("{0}")]
    Report(ReportError),

    #[error("Terminal error: {0}")]
    Terminal(std::io::Error),
}
