//! Runs the raw flag scanner without building a command tree.
//!
//! Run with: `cargo run --example scan -- -v --output out.txt build src`

use cmdtree_core::{Flag, parse_flags};

fn main() {
    let mut verbose = Flag::boolean("v", "verbose");
    let mut output = Flag::single("o", "output");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_flags(&args, &mut [&mut verbose, &mut output]) {
        Ok(parsed) => {
            println!("verbose:   {:?}", verbose.value());
            println!("output:    {:?}", output.value());
            println!("unknown:   {:?}", parsed.unknown);
            println!("remaining: {:?}", parsed.remaining);
        }
        Err(err) => eprintln!("error: {err}"),
    }
}
