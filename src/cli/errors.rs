use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unable to open file {}: {source}", .path.display())]
    UnableToOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: romanwords::Error,
    },

    #[error(transparent)]
    Library(#[from] romanwords::Error),
}
