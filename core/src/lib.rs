//! Flag model and argument scanning for the cmdtree dispatcher.
//!
//! This crate defines the foundational pieces of the cmdtree workspace:
//!
//! - [`Flag`] — a named, typed command-line parameter with an optional
//!   parsed value.
//! - [`FlagKind`] / [`FlagValue`] — the kind fixed at construction and the
//!   shape-tagged value filled in by parsing.
//! - [`parse_flags`] — the single-pass scanner that turns a token sequence
//!   into matched flag values, unknown tokens, and unconsumed remainder.
//! - [`Error`] — every failure mode of parsing and dispatch.
//!
//! The command tree, dispatch engine, and help rendering live in the
//! `cmdtree` crate, which re-exports everything here.
//!
//! # Example
//!
//! ```
//! use cmdtree_core::{parse_flags, Flag, FlagValue};
//!
//! let mut verbose = Flag::boolean("v", "verbose");
//! let mut inputs = Flag::multi("i", "inputs");
//!
//! let args: Vec<String> = ["-i", "a.txt", "b.txt", "-v", "compile"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let parsed = parse_flags(&args, &mut [&mut verbose, &mut inputs]).unwrap();
//! assert_eq!(parsed.remaining, ["compile".to_string()]);
//! assert!(verbose.is_set());
//! assert_eq!(
//!     inputs.value(),
//!     Some(&FlagValue::Multi(vec!["a.txt".to_string(), "b.txt".to_string()]))
//! );
//! ```

mod error;
mod flag;
mod parser;

pub use error::{Error, Result};
pub use flag::{Flag, FlagKind, FlagValue};
pub use parser::{Parsed, parse_flags};
