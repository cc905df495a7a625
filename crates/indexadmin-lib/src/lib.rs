//! Index administration library entry points.
//!
//! This crate exposes the shared core of the index administration tool:
//! resolving which indexes or index versions an invocation targets
//! ([`targeting`]) and routing parsed action flags to the requested
//! subcommand(s) ([`dispatch`]). The subcommand effects themselves live
//! behind the [`SubcommandRunner`] seam, so higher-level consumers (the CLI
//! binary, embedding applications) should only depend on the items exported
//! here instead of reimplementing validation or dispatch rules.
//!

#![deny(warnings)]

pub mod dispatch;
pub mod error;
pub mod targeting;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use dispatch::{
    handle, Action, ActionFlags, CommandOptions, SubcommandRunner, ACTION_PRIORITY,
};
pub use error::{Error, Result};
pub use targeting::{
    describe_options, resolve_targets, Diagnostics, HelpMessages, IndexName, TargetMode,
    TargetOptions, TargetSelection, TargetWarning, TracingDiagnostics,
};
