//! Subcommand handlers behind the dispatcher seam.
//!
//! Each module handles one administrative action. Handlers receive the full
//! option set, re-validate the targeting flags through the shared resolver,
//! and report the resolved operation on stdout; warnings raised during
//! resolution go to the diagnostics sink the [`Registry`] carries.

pub mod activate;
pub mod create;
pub mod drop;
pub mod list;
pub mod update;

use indexadmin_lib::{
    Action, CommandOptions, Result, SubcommandRunner, TargetSelection, TracingDiagnostics,
};

/// Connects dispatched [`Action`]s to their handler modules.
#[derive(Debug, Default)]
pub struct Registry {
    diagnostics: TracingDiagnostics,
}

impl Registry {
    /// Build a registry that reports resolution warnings through `tracing`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubcommandRunner for Registry {
    fn invoke(&mut self, action: Action, options: &CommandOptions) -> Result<()> {
        match action {
            Action::List => list::handle_list(options, &mut self.diagnostics),
            Action::Create => create::handle_create(options, &mut self.diagnostics),
            Action::Update => update::handle_update(options, &mut self.diagnostics),
            Action::Activate => activate::handle_activate(options, &mut self.diagnostics),
            Action::Drop => drop::handle_drop(options, &mut self.diagnostics),
        }
    }
}

/// Print the resolved operation in the uniform report format.
pub(crate) fn report(action: &str, selection: &TargetSelection) {
    if selection.apply_all {
        println!("{action}: all {}", selection.mode.plural());
        return;
    }

    let noun = if selection.names.len() == 1 {
        selection.mode.as_str()
    } else {
        selection.mode.plural()
    };
    println!("{action}: {} {noun}", selection.names.len());
    for name in &selection.names {
        println!("  - {name}");
    }
}
