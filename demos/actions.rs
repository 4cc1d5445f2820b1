//! Dispatches flag actions and a default action, then resets and re-runs.
//!
//! Run with: `cargo run --example actions`

use cmdtree::{Command, Flag, FlagValue};

fn main() {
    let mut app = Command::without_help("greeter", "Toy dispatcher demo.")
        .with_flag_action(
            Flag::single("n", "name").with_description("Name to greet."),
            |ctx, value| {
                if let FlagValue::Single(name) = value {
                    println!("hello, {name}");
                }
                if ctx.value_by_long("loud").is_some() {
                    println!("(loudly)");
                }
                Ok(())
            },
        )
        .with_flag(Flag::boolean("l", "loud").with_description("Greet loudly."))
        .with_action(|_| {
            println!("nothing to do; try -n <name>");
            Ok(())
        });

    let args: Vec<String> = ["-l", "-n", "world"].iter().map(|s| s.to_string()).collect();
    if let Err(err) = app.run(&args) {
        eprintln!("error: {err}");
    }

    // Parsed values survive a dispatch; reset before driving the tree again.
    app.reset();
    if let Err(err) = app.run(&[]) {
        eprintln!("error: {err}");
    }
}
