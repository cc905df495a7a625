use thiserror::Error;

use crate::targeting::TargetMode;

/// Convenient result alias for the index administration library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an invocation names no targets and does not request `--all`.
    #[error("at least one {mode} or --all must be specified")]
    NoTargets { mode: TargetMode },

    /// Raised when a target mode string is not a recognized granularity.
    #[error("unknown target mode '{value}'; expected 'index' or 'version'")]
    InvalidMode { value: String },

    /// Wrapper for failures raised inside an invoked subcommand.
    #[error(transparent)]
    Subcommand(#[from] Box<dyn std::error::Error + Send + Sync>),
}
