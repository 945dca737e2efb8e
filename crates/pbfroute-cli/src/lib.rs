//! pbfroute CLI library.
//!
//! Output formatting shared by the `pbfroute-cli` subcommands.

pub mod output;
