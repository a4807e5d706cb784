use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for aggregation steps.
pub type Result<T> = std::result::Result<T, AggregateError>;

/// Every way an aggregation run can fail. All of them are fatal.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// A pallet's types file is missing or unreadable.
    #[error("reading pallet types {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A pallet's types file is not valid JSON.
    #[error("parsing pallet types {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A pallet's types file parsed, but not to a JSON object.
    #[error("pallet types {} must be a JSON object, found {found}", .path.display())]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("serializing aggregated types")]
    Serialize(#[source] serde_json::Error),

    /// The consolidated output could not be created or replaced.
    #[error("writing aggregated types {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AggregateError {
    /// True for failures caused by a pallet file's contents rather than its presence.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::NotAnObject { .. })
    }
}
