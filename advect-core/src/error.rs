use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or running a simulation.
///
/// None of these are recoverable inside the core: they abort the current run
/// and are handed back to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// A mode string did not name any known variant.
    #[error("invalid {kind} '{value}', expected one of: {expected}")]
    UnknownMode {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    /// An output file could not be opened or written.
    #[error("cannot write snapshot file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `run` was called on a particle set that was never initialized.
    #[error("particle set has not been initialized")]
    Uninitialized,

    /// The worker pool for the parallel path could not be started.
    #[error("failed to start worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
