//! Activate command handler.

use indexadmin_lib::{resolve_targets, CommandOptions, Diagnostics, Result};

use super::report;

/// Handle the activate subcommand.
///
/// Activation promotes the latest version of each selected index.
pub fn handle_activate(options: &CommandOptions, diagnostics: &mut dyn Diagnostics) -> Result<()> {
    let selection = resolve_targets(&options.targets, diagnostics)?;
    tracing::info!(
        mode = %selection.mode,
        all = selection.apply_all,
        "activating the latest versions"
    );
    report("activate", &selection);
    Ok(())
}
