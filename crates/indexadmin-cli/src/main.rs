use anyhow::{Context, Result};

use indexadmin_cli::args;
use indexadmin_cli::commands::Registry;

fn main() -> Result<()> {
    init_tracing()?;

    let matches = args::build_cli().get_matches();
    let options = args::command_options_from_matches(&matches)?;

    let mut registry = Registry::new();
    indexadmin_lib::handle(&options, &mut registry)?;
    Ok(())
}

/// Configure tracing to write only to stderr, keeping stdout for reports.
fn init_tracing() -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;
    Ok(())
}
