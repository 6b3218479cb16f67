//! # tessera-cli: Command-Line Front End
//!
//! Provides the `tessera` binary, an external caller of the value-object
//! contract: it builds values and typed collections from JSON natives by
//! type name and reports what came out.
//!
//! ## Subcommands
//!
//! - `tessera check <TYPE> [JSON]`: build, render, and round-trip one value.
//! - `tessera types`: list known type names and configured aliases.
//!
//! ```bash
//! tessera check date '"2020-01-01"'
//! echo '["2020-01-01","2030-01-01"]' | tessera check 'list<date>' --format json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers return exit codes.
//! - No value semantics here: everything goes through `tessera-core` and
//!   `tessera-collections`.

pub mod check;
pub mod config;
pub mod kinds;
pub mod types;
