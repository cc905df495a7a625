//! Index administration CLI library.
//!
//! This crate provides the command-line surface for the index administration
//! tool: declaring and extracting the flag set ([`args`]) and the subcommand
//! handlers invoked through the dispatcher ([`commands`]).

pub mod args;
pub mod commands;
