//! Create command handler.

use indexadmin_lib::{resolve_targets, CommandOptions, Diagnostics, Result, TargetOptions};

use super::report;

/// Handle the create subcommand.
///
/// Creation always applies to whole indexes, so its flag family never
/// declares `--mode`; any mode carried in the forwarded options is cleared
/// before resolution and the selection falls back to index granularity.
pub fn handle_create(options: &CommandOptions, diagnostics: &mut dyn Diagnostics) -> Result<()> {
    if options.targets.mode.is_some() {
        tracing::debug!("create always operates on whole indexes; ignoring --mode");
    }
    let targets = TargetOptions {
        mode: None,
        ..options.targets.clone()
    };

    let selection = resolve_targets(&targets, diagnostics)?;
    tracing::info!(
        count = selection.names.len(),
        all = selection.apply_all,
        "creating indexes"
    );
    report("create", &selection);
    Ok(())
}
