//! Shared fakes for the integration tests.

use indexadmin_lib::{
    Action, CommandOptions, Diagnostics, Error, Result, SubcommandRunner, TargetWarning,
};

/// Diagnostics sink that records every warning it receives.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingDiagnostics {
    pub warnings: Vec<TargetWarning>,
}

impl Diagnostics for RecordingDiagnostics {
    fn warning(&mut self, warning: TargetWarning) {
        self.warnings.push(warning);
    }
}

/// Runner that records invocations instead of performing them.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingRunner {
    pub invoked: Vec<Action>,
    pub fail_on: Vec<Action>,
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
