//! Demonstration binary for the cmdtree dispatcher.
//!
//! Wires a small application out of nested commands, flag actions, and
//! default actions, then hands the process argument list to the tree.
//! Errors print to stderr and set a non-zero exit code; the library core
//! never terminates the process itself.

use std::process;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use cmdtree::{Command, Error, Flag, FlagValue};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    debug!(version = PACKAGE_VERSION, "starting cmdtree-demo");

    let mut app = build_app();
    if let Err(err) = app.run_from_env() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn build_app() -> Command {
    Command::new("cmdtree-demo", "Showcase for the cmdtree command dispatcher.")
        .with_flag_action(
            Flag::boolean("V", "version").with_description("Print the demo version."),
            |_, _| {
                println!("cmdtree-demo {PACKAGE_VERSION}");
                Ok(())
            },
        )
        .with_subcommand(echo_command())
        .with_subcommand(env_command())
}

/// `echo` prints its words, joined and optionally transformed, through the
/// node's default action; all three flag kinds show up here.
fn echo_command() -> Command {
    Command::new("echo", "Print the given words, optionally transformed.")
        .with_flag(Flag::boolean("u", "upper").with_description("Uppercase the output."))
        .with_flag(
            Flag::single("s", "sep")
                .with_description("Separator placed between words instead of a space."),
        )
        .with_flag(Flag::multi("w", "words").with_description("Words to print."))
        .with_action(|ctx| {
            let Some(FlagValue::Multi(words)) = ctx.value_by_long("words") else {
                return Err(Error::action("echo needs at least one word, try --words"));
            };
            let sep = match ctx.value_by_long("sep") {
                Some(FlagValue::Single(sep)) => sep.as_str(),
                _ => " ",
            };
            let mut line = words.join(sep);
            if matches!(ctx.value_by_long("upper"), Some(FlagValue::Bool(true))) {
                line = line.to_uppercase();
            }
            println!("{line}");
            Ok(())
        })
}

/// `env` reports what the dispatch context sees of the process
/// environment.
fn env_command() -> Command {
    Command::new("env", "Inspect the process environment seen by the demo.").with_action(
        |ctx| {
            println!("executable: {}", ctx.executable_path()?.display());
            println!("workdir:    {}", ctx.working_dir()?.display());
            Ok(())
        },
    )
}
