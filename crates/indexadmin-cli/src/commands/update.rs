//! Update command handler.

use indexadmin_lib::{resolve_targets, CommandOptions, Diagnostics, Result};

use super::report;

/// Handle the update subcommand.
pub fn handle_update(options: &CommandOptions, diagnostics: &mut dyn Diagnostics) -> Result<()> {
    let selection = resolve_targets(&options.targets, diagnostics)?;
    tracing::info!(
        mode = %selection.mode,
        all = selection.apply_all,
        "updating documents in the selected targets"
    );
    report("update", &selection);
    Ok(())
}
