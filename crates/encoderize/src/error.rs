use std::path::PathBuf;

use thiserror::Error;

use crate::{ConfigError, EncodeError, Encoding, Theme};

/// Errors that stop a batch run
#[derive(Debug, Error)]
pub enum Error {
    /// Creating an output directory or writing a file failed
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An encoder rejected the input
    #[error("{encoding} ({theme} mode): {source}")]
    Encode {
        encoding: Encoding,
        theme: Theme,
        #[source]
        source: EncodeError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
