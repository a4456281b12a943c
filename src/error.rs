use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReminderError {
    /// A command or stored line that could not be understood. Recoverable.
    #[error("Invalid command format :: {0}")]
    InvalidCommandFormat(String),

    /// The store file or its directory could not be opened, created or written.
    #[error("Unable to access {} :: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Can't find current user information")]
    HomeDirUnavailable,

    /// Standard input reached end of stream (`None`) or failed to read.
    #[error("Error in reading command")]
    InputClosed(#[source] Option<io::Error>),
}

impl ReminderError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ReminderError::InvalidCommandFormat(reason.into())
    }

    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ReminderError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Whether the dispatcher may report this error and keep accepting commands.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ReminderError::InvalidCommandFormat(_))
    }
}

pub type Result<T> = std::result::Result<T, ReminderError>;
