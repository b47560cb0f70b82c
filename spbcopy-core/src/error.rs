use std::path::PathBuf;
use thiserror::Error;

/// The main result type for spbcopy-core operations.
pub type SpbcopyResult<T> = Result<T, SpbcopyError>;

/// Every failure the tool can hit. All of them are terminal for the process.
#[derive(Error, Debug)]
pub enum SpbcopyError {
    #[error("Failed to load config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("Config file has no [{0}] section")]
    ConfigSection(&'static str),

    #[error("Failed to use config file {key}: {reason}")]
    ConfigKey { key: &'static str, reason: String },

    #[error("Failed to get stdin: {0}")]
    Input(#[from] std::io::Error),

    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("bad status code: {0}")]
    Status(u16),
}

impl SpbcopyError {
    /// Short name of the stage that produced the error.
    pub fn phase(&self) -> &'static str {
        match self {
            SpbcopyError::ConfigRead { .. }
            | SpbcopyError::ConfigSection(_)
            | SpbcopyError::ConfigKey { .. } => "config",
            SpbcopyError::Input(_) => "input",
            SpbcopyError::Transport(_) => "transport",
            SpbcopyError::Status(_) => "status",
        }
    }
}
