//! Top-level dispatch from parsed action flags to subcommands.
//!
//! This module provides:
//! - [`Action`] - The five administrative subcommands
//! - [`ActionFlags`] - Presence state of the five action flags
//! - [`CommandOptions`] - Full option set forwarded to subcommands
//! - [`SubcommandRunner`] - Seam behind which subcommand effects live
//! - [`handle`] - Main entry point routing one invocation
//!
//! The tool exposes independent action flags rather than positional
//! subcommands, so several can appear in one invocation. `--list-available`
//! runs whenever present; the remaining four are mutually prioritized and
//! only the first present flag in [`ACTION_PRIORITY`] order runs.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::targeting::TargetOptions;

/// The five administrative subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// List the available named indexes and their versions.
    List,
    /// Create the named indexes.
    Create,
    /// Update the documents in the named indexes or versions.
    Update,
    /// Activate the latest version of the named indexes.
    Activate,
    /// Drop the named indexes or versions.
    Drop,
}

impl Action {
    /// Stable subcommand name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Create => "create",
            Action::Update => "update",
            Action::Activate => "activate",
            Action::Drop => "drop",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Priority order for the mutually prioritized action flags.
///
/// When several of these flags appear in one invocation the first present
/// entry wins and the rest are not invoked. `list` sits outside this order;
/// it runs whenever its flag is present.
pub const ACTION_PRIORITY: [Action; 4] = [
    Action::Create,
    Action::Update,
    Action::Activate,
    Action::Drop,
];

/// Presence state of the five action flags for one invocation.
///
/// Each flag is `None` when it was absent and `Some(_)` when it appeared.
/// Presence alone selects the action; the carried boolean is not consulted,
/// so a flag explicitly set to `false` still dispatches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionFlags {
    /// `--list-available`: report the available indexes.
    pub list_available: Option<bool>,
    /// `--create`: create the named indexes.
    pub create: Option<bool>,
    /// `--update`: update documents in the named targets.
    pub update: Option<bool>,
    /// `--drop`: drop the named targets.
    pub drop: Option<bool>,
    /// `--activate`: activate the latest version of the named indexes.
    pub activate: Option<bool>,
}

impl ActionFlags {
    /// Whether the flag selecting `action` appeared in the invocation.
    pub fn is_present(&self, action: Action) -> bool {
        match action {
            Action::List => self.list_available.is_some(),
            Action::Create => self.create.is_some(),
            Action::Update => self.update.is_some(),
            Action::Activate => self.activate.is_some(),
            Action::Drop => self.drop.is_some(),
        }
    }
}

/// Full option set forwarded, unmodified, to every invoked subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    /// The action flags that select which subcommand(s) run.
    pub actions: ActionFlags,
    /// The shared targeting flags each subcommand resolves for itself.
    pub targets: TargetOptions,
}

/// Uniform interface to the subcommand implementations.
///
/// The dispatcher never interprets targeting flags itself; it hands the
/// complete option set to the runner, which re-validates through
/// [`crate::targeting::resolve_targets`] and performs the operation.
/// Failures surface unchanged; foreign error types travel through
/// [`crate::error::Error::Subcommand`].
pub trait SubcommandRunner {
    /// Invoke the subcommand selected by `action` with the full option set.
    fn invoke(&mut self, action: Action, options: &CommandOptions) -> Result<()>;
}

/// Route one parsed invocation to the subcommand(s) it requests.
///
/// `--list-available` is handled first whenever present and does not
/// suppress the prioritized flags. Of those, the first present entry in
/// [`ACTION_PRIORITY`] runs and the function returns; an invocation with
/// no action flags at all is an accepted no-op. The first failing
/// subcommand aborts the invocation with its error intact.
pub fn handle(options: &CommandOptions, runner: &mut dyn SubcommandRunner) -> Result<()> {
    if options.actions.is_present(Action::List) {
        tracing::debug!(action = Action::List.name(), "dispatching subcommand");
        runner.invoke(Action::List, options)?;
    }

    for action in ACTION_PRIORITY {
        if options.actions.is_present(action) {
            tracing::debug!(action = action.name(), "dispatching subcommand");
            return runner.invoke(action, options);
        }
    }

    Ok(())
}
