//! Load errors raised while collecting inputs for a check run.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid structure dump {}: {source}", path.display())]
    Structure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid interface file {}: {source}", path.display())]
    Markup {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("bad glob pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl Error {
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::SourceNotFound { path }
            | Error::Read { path, .. }
            | Error::Structure { path, .. }
            | Error::Markup { path, .. }
            | Error::Config { path, .. } => Some(path.as_path()),
            Error::Glob { .. } => None,
        }
    }
}
