//! Shared fakes for the unit tests.

use crate::dispatch::{Action, CommandOptions, SubcommandRunner};
use crate::error::{Error, Result};
use crate::targeting::{Diagnostics, TargetWarning};

/// Diagnostics sink that records every warning it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingDiagnostics {
    pub(crate) warnings: Vec<TargetWarning>,
}

impl Diagnostics for RecordingDiagnostics {
    fn warning(&mut self, warning: TargetWarning) {
        self.warnings.push(warning);
    }
}

/// Runner that records invocations instead of performing them.
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    /// Actions invoked so far, in order.
    pub(crate) invoked: Vec<Action>,
    /// Actions that fail with a `<name> failed` error when invoked.
    pub(crate) fail_on: Vec<Action>,
}

impl SubcommandRunner for RecordingRunner {
    fn invoke(&mut self, action: Action, _options: &CommandOptions) -> Result<()> {
        self.invoked.push(action);
        if self.fail_on.contains(&action) {
            return Err(Error::Subcommand(format!("{action} failed").into()));
        }
        Ok(())
    }
}
