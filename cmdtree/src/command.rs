//! Command nodes: construction builders and the dispatch engine.

use std::fmt;

use tracing::debug;

use cmdtree_core::{Error, Flag, FlagValue, Result, parse_flags};

use crate::context::Context;
use crate::help;

/// Default action run when dispatch lands on a node with no fired flag
/// action and no matching child.
pub type Action = Box<dyn Fn(&Context) -> Result<()>>;

/// Action bound to a flag, invoked with the dispatch context and the
/// flag's parsed value.
pub type FlagAction = Box<dyn Fn(&Context, &FlagValue) -> Result<()>>;

/// Handler bound to a flag entry.
enum FlagHandler {
    /// Built-in: render this node's help to stdout and succeed.
    ShowHelp,
    Run(FlagAction),
}

/// Handler run when nothing else matched.
enum DefaultHandler {
    ShowHelp,
    Run(Action),
}

pub(crate) struct FlagEntry {
    pub(crate) flag: Flag,
    handler: Option<FlagHandler>,
}

/// A named unit of functionality owning typed flags, child commands, and
/// an optional default action.
///
/// A command tree is built once, up front, through the consuming `with_*`
/// builders, then driven by [`run`](Command::run). Flag and child lists
/// keep their insertion order: it decides help-column layout, candidate
/// matching, and which of several fired flag actions runs.
///
/// # Examples
///
/// ```
/// use cmdtree::{Command, Flag, FlagValue};
///
/// let mut app = Command::new("app", "An example application.")
///     .with_subcommand(
///         Command::without_help("greet", "Print a greeting.")
///             .with_flag(Flag::single("n", "name").with_description("Name to greet."))
///             .with_action(|ctx| {
///                 if let Some(FlagValue::Single(name)) = ctx.value_by_long("name") {
///                     println!("hello, {name}");
///                 }
///                 Ok(())
///             }),
///     );
///
/// let args: Vec<String> = ["greet", "-n", "world"].iter().map(|s| s.to_string()).collect();
/// app.run(&args).unwrap();
/// ```
pub struct Command {
    pub(crate) name: String,
    pub(crate) usage: String,
    pub(crate) flags: Vec<FlagEntry>,
    pub(crate) subcommands: Vec<Command>,
    default: Option<DefaultHandler>,
}

impl Command {
    /// Creates a command with the standard help wiring: a `-h/--help`
    /// boolean flag that prints the node's help text, and a default action
    /// doing the same when dispatch reaches the node with nothing to do.
    pub fn new(name: &str, usage: &str) -> Self {
        let help_text = format!("Print help message for command '{name}'.");
        Self {
            name: name.to_string(),
            usage: usage.to_string(),
            flags: vec![FlagEntry {
                flag: Flag::boolean("h", "help").with_description(&help_text),
                handler: Some(FlagHandler::ShowHelp),
            }],
            subcommands: Vec::new(),
            default: Some(DefaultHandler::ShowHelp),
        }
    }

    /// Creates a command with no help flag and no default action.
    ///
    /// Dispatch on such a node fails with [`Error::NoOperation`] when no
    /// flag action fires and no positional token matches a child.
    pub fn without_help(name: &str, usage: &str) -> Self {
        Self {
            name: name.to_string(),
            usage: usage.to_string(),
            flags: Vec::new(),
            subcommands: Vec::new(),
            default: None,
        }
    }

    /// Name matched verbatim against positional tokens during dispatch.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description text rendered under the name in help output.
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Adds a flag with no action.
    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flags.push(FlagEntry { flag, handler: None });
        self
    }

    /// Adds a flag whose action runs when the flag is found set after
    /// parsing. The action receives the dispatch [`Context`] and the
    /// flag's parsed value, whose shape always matches the flag's kind.
    ///
    /// When several registered flags with actions are set in one parse,
    /// the first-registered one runs and the rest are ignored.
    pub fn with_flag_action(
        mut self,
        flag: Flag,
        action: impl Fn(&Context, &FlagValue) -> Result<()> + 'static,
    ) -> Self {
        self.flags.push(FlagEntry {
            flag,
            handler: Some(FlagHandler::Run(Box::new(action))),
        });
        self
    }

    /// Appends a child command. Children are matched in insertion order;
    /// the first name match wins.
    pub fn with_subcommand(mut self, child: Command) -> Self {
        self.subcommands.push(child);
        self
    }

    /// Sets (or replaces) the default action, run when no flag action
    /// fires and no positional token selects a child.
    pub fn with_action(mut self, action: impl Fn(&Context) -> Result<()> + 'static) -> Self {
        self.default = Some(DefaultHandler::Run(Box::new(action)));
        self
    }

    /// Runs the command against a token sequence, conventionally the
    /// process argument list with the program name already stripped.
    ///
    /// Each level of the tree consumes one segment of tokens:
    ///
    /// 1. parse the node's own flags; a parse error propagates unchanged;
    /// 2. fail with [`Error::UnknownFlags`] if any flag-shaped token
    ///    matched nothing — no action or child runs in that case;
    /// 3. run the first registered set flag with an action and return;
    /// 4. otherwise match `remaining[0]` against the children and recurse
    ///    with the rest of the tokens, or fail with
    ///    [`Error::UnknownCommand`];
    /// 5. with no tokens left, run the default action if there is one;
    /// 6. otherwise fail with [`Error::NoOperation`].
    ///
    /// Parsed flag values stay in place after `run` returns; call
    /// [`reset`](Command::reset) before dispatching the same tree again.
    pub fn run(&mut self, args: &[String]) -> Result<()> {
        debug!(command = %self.name, ?args, "dispatching");

        let parsed = {
            let mut candidates: Vec<&mut Flag> =
                self.flags.iter_mut().map(|entry| &mut entry.flag).collect();
            parse_flags(args, &mut candidates)?
        };

        if !parsed.unknown.is_empty() {
            return Err(Error::UnknownFlags(parsed.unknown));
        }

        for entry in &self.flags {
            let Some(handler) = entry.handler.as_ref() else {
                continue;
            };
            let Some(value) = entry.flag.value() else {
                continue;
            };
            debug!(command = %self.name, flag = %entry.flag.long(), "flag action fired");
            let context = Context::new(&self.flags);
            return match handler {
                FlagHandler::ShowHelp => {
                    print!("{}", self.help());
                    Ok(())
                }
                FlagHandler::Run(action) => action(&context, value),
            };
        }

        if let Some((first, rest)) = parsed.remaining.split_first() {
            debug!(command = %self.name, child = %first, "descending into subcommand");
            return match self.subcommands.iter_mut().find(|sub| sub.name == *first) {
                Some(sub) => sub.run(rest),
                None => Err(Error::UnknownCommand(first.clone())),
            };
        }

        match self.default.as_ref() {
            Some(DefaultHandler::ShowHelp) => {
                print!("{}", self.help());
                Ok(())
            }
            Some(DefaultHandler::Run(action)) => action(&Context::new(&self.flags)),
            None => Err(Error::NoOperation(self.name.clone())),
        }
    }

    /// Runs the command with the process argument list, program name
    /// stripped.
    pub fn run_from_env(&mut self) -> Result<()> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        self.run(&args)
    }

    /// Clears every parsed flag value in this command and all descendants,
    /// returning the tree to its pre-parse state for another dispatch.
    pub fn reset(&mut self) {
        for entry in &mut self.flags {
            entry.flag.clear();
        }
        for sub in &mut self.subcommands {
            sub.reset();
        }
    }

    /// Renders the help text for this command and all descendants.
    ///
    /// The output depends only on the tree structure, never on parsed
    /// values, so repeated calls on an unmodified tree are byte-identical.
    pub fn help(&self) -> String {
        help::render(self)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field(
                "flags",
                &self.flags.iter().map(|e| e.flag.long()).collect::<Vec<_>>(),
            )
            .field("subcommands", &self.subcommands)
            .finish_non_exhaustive()
    }
}
