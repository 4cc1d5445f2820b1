//! Error types shared by flag parsing and command dispatch.
//!
//! A single enum covers every failure mode the engine can surface:
//! value-less flags, unmatched flag tokens, unmatched subcommand names,
//! nodes with nothing to run, OS lookups, and failures raised by user
//! actions. Nothing is recovered or retried; every error propagates to the
//! caller of `run`/`parse_flags` unchanged.

use thiserror::Error;

/// Errors produced by flag parsing, dispatch, and actions.
#[derive(Debug, Error)]
pub enum Error {
    /// A value-taking flag was given with no following non-flag token.
    ///
    /// Fatal to the parse call that hit it; later tokens are not processed.
    #[error("no value given for flag: {0}")]
    MissingFlagValue(String),

    /// Flag-shaped tokens that matched no registered flag.
    ///
    /// Collected during parsing, escalated by dispatch once parsing
    /// completes, listing all offenders together.
    #[error("unknown flag(s): {}", .0.join(", "))]
    UnknownFlags(Vec<String>),

    /// A positional token matched no child command name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command had no fired flag action, no matching child, and no
    /// default action.
    #[error("no defined operation for '{0}'")]
    NoOperation(String),

    /// Executable-path or working-directory lookup failed.
    ///
    /// Treated as an environment precondition failure: dispatch propagates
    /// it verbatim and never retries.
    #[error("cannot resolve {what}")]
    OsAccess {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Failure raised by a user-provided action.
    #[error("{0}")]
    Action(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps any error or message as an action failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdtree_core::Error;
    ///
    /// let err = Error::action("input file does not exist");
    /// assert_eq!(err.to_string(), "input file does not exist");
    /// ```
    pub fn action(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Action(err.into())
    }
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
