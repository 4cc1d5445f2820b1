//! Flag descriptors and parsed flag values.
//!
//! A [`Flag`] pairs a short and a long name with a [`FlagKind`] fixed at
//! construction. Parsing fills the value slot with a [`FlagValue`] whose
//! shape matches the kind; [`Flag::is_set`] and [`Flag::value`] expose the
//! slot only while that consistency holds, so a value of the wrong shape
//! reads as "not set" rather than as garbage.

/// How many value tokens a flag consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Consumes no value tokens; presence sets the flag to `true`.
    Boolean,
    /// Consumes exactly one following value token.
    SingleValue,
    /// Consumes one or more following value tokens, up to the next
    /// flag-shaped token or the end of input.
    MultiValue,
}

/// A parsed flag value, tagged by shape.
///
/// The tag always agrees with the owning flag's [`FlagKind`]: the parser
/// only ever stores the matching shape, and the accessors on [`Flag`]
/// refuse to hand out a mismatched value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Single(String),
    Multi(Vec<String>),
}

impl FlagValue {
    fn matches_kind(&self, kind: FlagKind) -> bool {
        matches!(
            (self, kind),
            (FlagValue::Bool(_), FlagKind::Boolean)
                | (FlagValue::Single(_), FlagKind::SingleValue)
                | (FlagValue::Multi(_), FlagKind::MultiValue)
        )
    }
}

/// A named, typed command-line parameter.
///
/// Flags are recognized as `-short` or `--long`; names are stored without
/// the dashes. Use the constructor for the kind you need, then chain
/// [`with_description`](Flag::with_description) for help rendering.
///
/// # Examples
///
/// ```
/// use cmdtree_core::{Flag, FlagKind};
///
/// let verbose = Flag::boolean("v", "verbose").with_description("Enable verbose output.");
/// assert_eq!(verbose.kind(), FlagKind::Boolean);
/// assert_eq!(verbose.short(), "v");
/// assert_eq!(verbose.long(), "verbose");
/// assert!(!verbose.is_set());
/// ```
#[derive(Debug, Clone)]
pub struct Flag {
    short: String,
    long: String,
    kind: FlagKind,
    description: String,
    value: Option<FlagValue>,
}

impl Flag {
    /// Creates a boolean flag: giving it on the command line sets `true`.
    pub fn boolean(short: &str, long: &str) -> Self {
        Self::with_kind(FlagKind::Boolean, short, long)
    }

    /// Creates a flag that reads exactly one value token.
    pub fn single(short: &str, long: &str) -> Self {
        Self::with_kind(FlagKind::SingleValue, short, long)
    }

    /// Creates a flag that reads every following non-flag token as a value.
    pub fn multi(short: &str, long: &str) -> Self {
        Self::with_kind(FlagKind::MultiValue, short, long)
    }

    fn with_kind(kind: FlagKind, short: &str, long: &str) -> Self {
        Self {
            short: short.to_string(),
            long: long.to_string(),
            kind,
            description: String::new(),
            value: None,
        }
    }

    /// Adds the description shown in help output.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Short name, without the leading dash.
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Long name, without the leading dashes.
    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn kind(&self) -> FlagKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Checks whether `name` matches this flag in the requested form:
    /// the long name for `--`-prefixed tokens, the short name otherwise.
    pub fn matches(&self, name: &str, long_form: bool) -> bool {
        if long_form {
            self.long == name
        } else {
            self.short == name
        }
    }

    /// True only when a value is present and its shape agrees with the
    /// flag's kind.
    pub fn is_set(&self) -> bool {
        self.value.as_ref().is_some_and(|v| v.matches_kind(self.kind))
    }

    /// Returns the parsed value, or `None` when [`is_set`](Flag::is_set)
    /// is false.
    pub fn value(&self) -> Option<&FlagValue> {
        self.value.as_ref().filter(|v| v.matches_kind(self.kind))
    }

    /// Stores a parsed value. A later parse pass overwrites an earlier one;
    /// there is no merge.
    pub(crate) fn assign(&mut self, value: FlagValue) {
        self.value = Some(value);
    }

    /// Clears the value slot, returning the flag to its unset state.
    pub fn clear(&mut self) {
        self.value = None;
    }
}
