//! Opt-in structural linting for command trees.
//!
//! Parsing and dispatch never validate: a name registered twice simply
//! resolves to the first-registered flag or child, which is documented
//! behavior. [`validate`] exists for tree authors who want shadowed or
//! malformed names surfaced before shipping, e.g. from a test.

use std::collections::HashSet;

use thiserror::Error;

use crate::command::Command;

/// Structural problems found in a command tree.
///
/// Every variant carries the space-joined command path from the root to
/// the offending node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Command name is empty or whitespace-only.
    #[error("empty command name at '{path}'")]
    EmptyCommandName { path: String },

    /// A flag has an empty short or long name.
    #[error("empty flag name in '{path}'")]
    EmptyFlagName { path: String },

    /// A flag name was registered with a leading dash or embedded
    /// whitespace; such a flag can never match a token.
    #[error("malformed flag name '{name}' in '{path}'")]
    MalformedFlagName { name: String, path: String },

    /// A later flag repeats an earlier flag's short or long name and can
    /// never be matched.
    #[error("shadowed flag name '{name}' in '{path}'")]
    ShadowedFlag { name: String, path: String },

    /// A later child repeats an earlier child's name and can never be
    /// selected.
    #[error("shadowed subcommand '{name}' in '{path}'")]
    ShadowedSubcommand { name: String, path: String },
}

/// Walks the tree and reports every structural problem found.
///
/// An empty result means the tree is clean. Validation is read-only and
/// safe to run at any point, including between dispatches.
///
/// # Examples
///
/// ```
/// use cmdtree::{validate, Command, Flag, ValidationError};
///
/// let clean = Command::without_help("app", "A tool.")
///     .with_flag(Flag::boolean("v", "verbose"));
/// assert!(validate(&clean).is_empty());
///
/// let shadowed = Command::without_help("app", "A tool.")
///     .with_flag(Flag::boolean("v", "verbose"))
///     .with_flag(Flag::single("v", "value"));
/// assert!(validate(&shadowed)
///     .iter()
///     .any(|e| matches!(e, ValidationError::ShadowedFlag { .. })));
/// ```
pub fn validate(command: &Command) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut path = Vec::new();
    walk(command, &mut path, &mut errors);
    errors
}

fn walk(command: &Command, path: &mut Vec<String>, errors: &mut Vec<ValidationError>) {
    path.push(command.name().to_string());
    let here = path.join(" ");

    if command.name().trim().is_empty() {
        errors.push(ValidationError::EmptyCommandName { path: here.clone() });
    }

    let mut seen_short = HashSet::new();
    let mut seen_long = HashSet::new();
    for entry in &command.flags {
        check_flag_name(entry.flag.short(), "-", &mut seen_short, &here, errors);
        check_flag_name(entry.flag.long(), "--", &mut seen_long, &here, errors);
    }

    let mut seen_subs = HashSet::new();
    for sub in &command.subcommands {
        if !seen_subs.insert(sub.name().to_string()) {
            errors.push(ValidationError::ShadowedSubcommand {
                name: sub.name().to_string(),
                path: here.clone(),
            });
        }
        walk(sub, path, errors);
    }

    path.pop();
}

fn check_flag_name(
    name: &str,
    dashes: &str,
    seen: &mut HashSet<String>,
    path: &str,
    errors: &mut Vec<ValidationError>,
) {
    if name.is_empty() {
        errors.push(ValidationError::EmptyFlagName {
            path: path.to_string(),
        });
        return;
    }
    if name.starts_with('-') || name.contains(char::is_whitespace) {
        errors.push(ValidationError::MalformedFlagName {
            name: name.to_string(),
            path: path.to_string(),
        });
        return;
    }
    if !seen.insert(name.to_string()) {
        errors.push(ValidationError::ShadowedFlag {
            name: format!("{dashes}{name}"),
            path: path.to_string(),
        });
    }
}
