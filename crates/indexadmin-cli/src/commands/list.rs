//! List command handler.

use indexadmin_lib::{resolve_targets, CommandOptions, Diagnostics, Result, TargetSelection};

use super::report;

/// Handle the list subcommand.
///
/// Listing is meaningful without any explicit target: an invocation that
/// names nothing and does not pass `--all` falls back to every index
/// instead of failing the presence check the other subcommands enforce.
pub fn handle_list(options: &CommandOptions, diagnostics: &mut dyn Diagnostics) -> Result<()> {
    let targets = &options.targets;
    let selection = if targets.names.is_empty() && !targets.all {
        TargetSelection {
            names: Vec::new(),
            mode: targets.mode.unwrap_or_default(),
            apply_all: true,
        }
    } else {
        resolve_targets(targets, diagnostics)?
    };

    tracing::info!(all = selection.apply_all, "listing available indexes");
    report("list", &selection);
    Ok(())
}
