//! Flag declaration and extraction for the administration CLI.
//!
//! The tool exposes one flat surface: five action flags that select which
//! subcommand(s) run, plus the shared targeting flags every subcommand
//! re-validates for itself. Flags are declared with the clap builder API
//! because the targeting surface is conditional; subcommand families that
//! cannot act on versions never declare `--mode`.

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};

use indexadmin_lib::{
    describe_options, ActionFlags, CommandOptions, HelpMessages, Result, TargetMode, TargetOptions,
};

/// Build the complete top-level command.
pub fn build_cli() -> Command {
    let messages = describe_options(true);
    let cmd = Command::new("indexadmin-cli")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Administer named, versioned search indexes");
    declare_target_args(declare_action_flags(cmd), &messages, true)
}

/// Register the five independent action flags.
///
/// They are deliberately not a mutually exclusive group: several may appear
/// in one invocation and the dispatcher applies its documented priority.
pub fn declare_action_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("list_available")
            .short('l')
            .long("list-available")
            .alias("ls")
            .action(ArgAction::SetTrue)
            .help("List the available named indexes; calls the list subcommand"),
    )
    .arg(
        Arg::new("create")
            .long("create")
            .action(ArgAction::SetTrue)
            .help("Create the named index; calls the create subcommand"),
    )
    .arg(
        Arg::new("update")
            .long("update")
            .action(ArgAction::SetTrue)
            .help("Update the named index; calls the update subcommand"),
    )
    .arg(
        Arg::new("activate")
            .long("activate")
            .action(ArgAction::SetTrue)
            .help("Activate the latest version of the named index; calls the activate subcommand"),
    )
    .arg(
        Arg::new("drop")
            .long("drop")
            .action(ArgAction::SetTrue)
            .help("Drop the named index; calls the drop subcommand"),
    )
}

/// Register the shared targeting arguments for a subcommand family.
///
/// The variadic name positional and `--all` are always declared; `--mode`
/// only when `include_versions` is set. Help text comes from `messages` so
/// families can override individual entries before declaring their surface.
pub fn declare_target_args(
    cmd: Command,
    messages: &HelpMessages,
    include_versions: bool,
) -> Command {
    let mut cmd = cmd.arg(
        Arg::new("index")
            .value_name("INDEX")
            .num_args(0..)
            .help(messages.index.clone()),
    );

    if include_versions {
        cmd = cmd.arg(
            Arg::new("mode")
                .long("mode")
                .value_name("MODE")
                .value_parser(["index", "version"])
                .help(messages.mode.clone()),
        );
    }

    cmd.arg(
        Arg::new("all")
            .long("all")
            .action(ArgAction::SetTrue)
            .help(messages.all.clone()),
    )
}

/// Convert parsed matches into the typed option set the dispatcher and
/// subcommands consume. The matches must come from a command declared
/// through [`declare_action_flags`] and [`declare_target_args`].
pub fn command_options_from_matches(matches: &ArgMatches) -> Result<CommandOptions> {
    Ok(CommandOptions {
        actions: action_flags_from_matches(matches),
        targets: target_options_from_matches(matches)?,
    })
}

/// Extract the presence state of the five action flags.
pub fn action_flags_from_matches(matches: &ArgMatches) -> ActionFlags {
    ActionFlags {
        list_available: flag_presence(matches, "list_available"),
        create: flag_presence(matches, "create"),
        update: flag_presence(matches, "update"),
        drop: flag_presence(matches, "drop"),
        activate: flag_presence(matches, "activate"),
    }
}

/// Extract the shared targeting flags.
pub fn target_options_from_matches(matches: &ArgMatches) -> Result<TargetOptions> {
    let names = matches
        .get_many::<String>("index")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    // Families without version support never declare `--mode`; treat the
    // missing argument the same as an absent flag.
    let mode = match matches.try_get_one::<String>("mode") {
        Ok(Some(raw)) => Some(raw.parse::<TargetMode>()?),
        _ => None,
    };

    Ok(TargetOptions {
        names,
        mode,
        all: matches.get_flag("all"),
    })
}

/// A flag is `Some(true)` exactly when it was given on the command line;
/// clap's `SetTrue` default would otherwise report every flag as present.
fn flag_presence(matches: &ArgMatches, id: &str) -> Option<bool> {
    match matches.value_source(id) {
        Some(ValueSource::CommandLine) => Some(matches.get_flag(id)),
        _ => None,
    }
}
