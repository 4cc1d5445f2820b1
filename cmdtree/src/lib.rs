//! Declarative command trees for command-line programs.
//!
//! Build a tree of [`Command`] nodes, each owning typed [`Flag`]s,
//! optional flag-triggered actions, child commands, and an optional
//! default action. [`Command::run`] parses a token sequence against the
//! tree and dispatches to exactly one action; [`Command::help`] renders
//! an indented, soft-wrapped help block for the node and all its
//! descendants.
//!
//! This crate deliberately stays small: flags are `-short`/`--long` with
//! boolean, single-value, or multi-value payloads, and positional tokens
//! select subcommands. Programs that need `=`-joined values, clustered
//! short flags, or completion generation want a full argument-parsing
//! framework instead.
//!
//! # Dispatch model
//!
//! Each tree level consumes one token segment: parse the node's own
//! flags, reject unknown flag tokens, run the first set flag that has an
//! action, otherwise descend into the child named by the next positional
//! token, otherwise run the node's default action. Actions receive a
//! [`Context`] — a read-only view of the node's parsed flags plus
//! process-environment accessors.
//!
//! The tree is built once and driven by one dispatch at a time; parsing
//! mutates flag values in place, so reuse across threads needs external
//! synchronization, and reuse across runs wants [`Command::reset`].
//!
//! # Example
//!
//! ```
//! use cmdtree::{Command, Flag, FlagValue};
//!
//! let mut app = Command::new("app", "An example application.")
//!     .with_subcommand(
//!         Command::without_help("greet", "Print a greeting.")
//!             .with_flag(Flag::single("n", "name").with_description("Name to greet."))
//!             .with_action(|ctx| {
//!                 if let Some(FlagValue::Single(name)) = ctx.value_by_long("name") {
//!                     println!("hello, {name}");
//!                 }
//!                 Ok(())
//!             }),
//!     );
//!
//! let args: Vec<String> = ["greet", "-n", "world"].iter().map(|s| s.to_string()).collect();
//! app.run(&args).unwrap();
//! ```

mod command;
mod context;
mod help;
mod validate;

pub use cmdtree_core::{Error, Flag, FlagKind, FlagValue, Parsed, Result, parse_flags};
pub use command::{Action, Command, FlagAction};
pub use context::Context;
pub use validate::{ValidationError, validate};
