// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

use crate::core::net::FetchError;
use crate::specs::facility::ExtractError;

/// Fatal run errors. Anything here stops the whole run.
///
/// Per-record sink failures are not in this list: the driver reports them
/// and keeps going (see [`crate::sheet::SinkError`]).
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read facility codes from {}: {source}", path.display())]
    ReadCodes {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Client(FetchError),

    #[error("facility {code}: {source}")]
    Fetch {
        code: String,
        #[source]
        source: FetchError,
    },

    #[error("facility {code}: {source}")]
    Extract {
        code: String,
        #[source]
        source: ExtractError,
    },

    #[error("could not save table to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
