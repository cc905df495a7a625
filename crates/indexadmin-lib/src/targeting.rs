//! Shared target resolution for index administration commands.
//!
//! This module provides:
//! - [`TargetMode`] - Granularity an operation acts on (indexes or versions)
//! - [`TargetOptions`] - Raw targeting flags as parsed from an invocation
//! - [`TargetSelection`] - Validated, normalized targeting intent
//! - [`HelpMessages`] / [`describe_options`] - Help text for the shared flags
//! - [`resolve_targets`] - Main entry point for validating an invocation
//!
//! Every subcommand accepts the same trio of targeting flags (names, `--mode`,
//! `--all`) and funnels them through [`resolve_targets`] so that validation
//! rules and warning wording stay identical across the whole tool. Non-fatal
//! findings go through the [`Diagnostics`] sink the caller supplies instead of
//! a process-global logger.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Name of a logical search index, stable across its versions.
pub type IndexName = String;

/// Granularity a command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TargetMode {
    /// Operate on whole indexes; each resolves to its active version.
    #[default]
    Index,
    /// Operate on concrete index versions.
    Version,
}

impl TargetMode {
    /// Singular noun used on the flag surface and in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetMode::Index => "index",
            TargetMode::Version => "version",
        }
    }

    /// Plural noun for reports and warnings.
    pub fn plural(&self) -> &'static str {
        match self {
            TargetMode::Index => "indexes",
            TargetMode::Version => "versions",
        }
    }
}

impl fmt::Display for TargetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetMode {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "index" => Ok(TargetMode::Index),
            "version" => Ok(TargetMode::Version),
            _ => Err(Error::InvalidMode {
                value: raw.to_string(),
            }),
        }
    }
}

/// Raw targeting flags exactly as one invocation supplied them.
///
/// `mode` is `None` when `--mode` was absent or the subcommand family never
/// declares it; resolution then falls back to [`TargetMode::Index`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetOptions {
    /// Explicit index or version names, in the order supplied.
    pub names: Vec<IndexName>,
    /// Requested granularity, if `--mode` was given.
    pub mode: Option<TargetMode>,
    /// Whether `--all` was set.
    pub all: bool,
}

/// Validated targeting intent of one invocation.
///
/// When `apply_all` is set the operation covers every available target and
/// `names` is retained only for reporting; the resolver has already warned
/// that the names will not be honored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSelection {
    /// Explicit target names in input order.
    pub names: Vec<IndexName>,
    /// Granularity the operation acts on.
    pub mode: TargetMode,
    /// Operate on every available index or version instead of named ones.
    pub apply_all: bool,
}

/// Help text for the shared targeting flags.
///
/// Subcommand families that need different wording start from
/// [`describe_options`] and overwrite individual fields before declaring
/// their flag surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpMessages {
    /// Text for the `--mode` choice flag.
    pub mode: String,
    /// Text for the variadic name positional.
    pub index: String,
    /// Text for the `--all` switch.
    pub all: String,
}

/// Build the default help text for the shared targeting flags.
///
/// `include_versions` selects between the wording for subcommand families
/// that accept `--mode` and the index-only wording for families that always
/// operate on whole indexes.
pub fn describe_options(include_versions: bool) -> HelpMessages {
    if include_versions {
        HelpMessages {
            mode: "Specify whether to operate on indexes or index versions".to_string(),
            index: format!(
                "Depending on --mode, the name of the index(es) or index version(s) to \
                 operate on. With `--mode {}` (the default) the active version is \
                 operated upon, and indexes without an active version are ignored",
                TargetMode::Index
            ),
            all: format!(
                "Operate on all of the active indexes or index versions, depending on \
                 whether `--mode {}` or `--mode {}` is supplied",
                TargetMode::Index,
                TargetMode::Version
            ),
        }
    } else {
        HelpMessages {
            mode: "Unused: this subcommand always operates on whole indexes".to_string(),
            index: "The name of the index(es) to operate on".to_string(),
            all: "Operate on all of the available indexes".to_string(),
        }
    }
}

/// Non-fatal finding raised while resolving a target selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetWarning {
    /// Named targets were supplied together with `--all`.
    NamesIgnored {
        /// Granularity of the ignored names.
        mode: TargetMode,
        /// The names that will not be honored.
        names: Vec<IndexName>,
    },
}

impl fmt::Display for TargetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetWarning::NamesIgnored { mode, names } => write!(
                f,
                "received named {} '{}'; these names will be ignored because --all \
                 requests every {}",
                mode.plural(),
                names.join("', '"),
                mode
            ),
        }
    }
}

/// Sink for non-fatal resolution findings.
///
/// Callers decide where warnings go: the CLI forwards them to `tracing`,
/// tests record them for assertions.
pub trait Diagnostics {
    /// Report a warning. Must not abort resolution.
    fn warning(&mut self, warning: TargetWarning);
}

/// Default sink that forwards warnings to the active `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warning(&mut self, warning: TargetWarning) {
        tracing::warn!("{warning}");
    }
}

/// Validate and normalize the targeting flags of one invocation.
///
/// Resolution is deterministic and side-effect free apart from at most one
/// warning pushed into `diagnostics`:
///
/// - `--all` together with explicit names keeps `--all` and warns that the
///   names are ignored;
/// - neither names nor `--all` fails with [`Error::NoTargets`] naming the
///   expected granularity;
/// - an absent mode falls back to [`TargetMode::Index`].
pub fn resolve_targets(
    options: &TargetOptions,
    diagnostics: &mut dyn Diagnostics,
) -> Result<TargetSelection> {
    let mode = options.mode.unwrap_or_default();

    if options.all && !options.names.is_empty() {
        diagnostics.warning(TargetWarning::NamesIgnored {
            mode,
            names: options.names.clone(),
        });
    }

    if !options.all && options.names.is_empty() {
        return Err(Error::NoTargets { mode });
    }

    Ok(TargetSelection {
        names: options.names.clone(),
        mode,
        apply_all: options.all,
    })
}
