use snafu::prelude::*;
use std::sync::LazyLock;

pub mod command;
pub mod extract;
pub mod finder;
pub mod parser;
pub mod query;
pub mod table;

pub use command::{dispatch, Command, Reply};
pub use extract::{extract, SourceFile, Todo};
pub use finder::Snapshot;

static CHAN: LazyLock<(
    async_channel::Sender<Message>,
    async_channel::Receiver<Message>,
)> = LazyLock::new(async_channel::unbounded);

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not walk {path:?}: {source}"))]
    Walk {
        path: std::path::PathBuf,
        source: walkdir::Error,
    },

    #[snafu(display("Could not relativize path {path:?}: {source}"))]
    Prefix {
        path: std::path::PathBuf,
        source: std::path::StripPrefixError,
    },

    #[snafu(display("Invalid date format. Use YYYY[-MM[-DD]]"))]
    InvalidFilter { input: String },

    #[snafu(display("Invalid sorting criteria. Use: importance, user, or date."))]
    InvalidCriteria { input: String },

    #[snafu(display("wrong command"))]
    UnknownCommand { input: String },

    #[snafu(display("Please specify a {what}."))]
    MissingArgument { what: &'static str },
}

pub(crate) type Result<T, E = Error> = core::result::Result<T, E>;

/// An external progress message sent while a snapshot is being taken.
pub enum Message {
    Error(Error),

    ScanningFiles {
        root: std::path::PathBuf,
    },
    ReadFile {
        path: std::path::PathBuf,
    },
    SkippedFile {
        path: std::path::PathBuf,
        reason: String,
    },
    ScannedFiles {
        count: usize,
    },
}

impl Message {
    /// Send a status message to the outside world.
    pub fn send(self) {
        // UNWRAP: safe because this channel is unbounded.
        CHAN.0.try_send(self).unwrap();
    }

    /// Get a clone of the status message receiver.
    pub fn receiver() -> async_channel::Receiver<Message> {
        CHAN.1.clone()
    }
}
