//! Read-only dispatch context handed to actions.

use std::path::PathBuf;

use cmdtree_core::{Error, FlagValue, Result};

use crate::command::FlagEntry;

/// Read-only view over the flag set of the command currently dispatching,
/// plus accessors for the process environment.
///
/// A context is built fresh for each action invocation and never outlives
/// it. It sees exactly the flags of the node whose action is running —
/// not those of parents or children.
pub struct Context<'a> {
    flags: &'a [FlagEntry],
}

impl<'a> Context<'a> {
    pub(crate) fn new(flags: &'a [FlagEntry]) -> Self {
        Self { flags }
    }

    /// Looks up a flag by its short name and returns its parsed value.
    ///
    /// `None` when no flag has that short name or the flag is not set.
    pub fn value_by_short(&self, name: &str) -> Option<&FlagValue> {
        self.flags
            .iter()
            .find(|entry| entry.flag.short() == name)
            .and_then(|entry| entry.flag.value())
    }

    /// Looks up a flag by its long name and returns its parsed value.
    pub fn value_by_long(&self, name: &str) -> Option<&FlagValue> {
        self.flags
            .iter()
            .find(|entry| entry.flag.long() == name)
            .and_then(|entry| entry.flag.value())
    }

    /// Path of the running executable.
    ///
    /// Failure here is an environment precondition problem; it surfaces as
    /// [`Error::OsAccess`] and dispatch propagates it without retrying.
    pub fn executable_path(&self) -> Result<PathBuf> {
        std::env::current_exe().map_err(|source| Error::OsAccess {
            what: "executable path",
            source,
        })
    }

    /// Current working directory of the process.
    pub fn working_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().map_err(|source| Error::OsAccess {
            what: "working directory",
            source,
        })
    }
}
