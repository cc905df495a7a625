//! Drop command handler.

use indexadmin_lib::{resolve_targets, CommandOptions, Diagnostics, Result};

use super::report;

/// Handle the drop subcommand.
pub fn handle_drop(options: &CommandOptions, diagnostics: &mut dyn Diagnostics) -> Result<()> {
    let selection = resolve_targets(&options.targets, diagnostics)?;
    tracing::info!(
        mode = %selection.mode,
        all = selection.apply_all,
        "dropping the selected targets"
    );
    report("drop", &selection);
    Ok(())
}
