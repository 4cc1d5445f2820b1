//! Renders help for a nested command tree.
//!
//! Run with: `cargo run --example nested`

use cmdtree::{Command, Flag};

fn main() {
    let app = Command::new("pkgr", "A fictional package manager built on cmdtree.")
        .with_flag(Flag::boolean("q", "quiet").with_description("Suppress progress output."))
        .with_subcommand(
            Command::new("install", "Download and install packages.")
                .with_flag(
                    Flag::multi("p", "packages").with_description("Packages to install."),
                )
                .with_subcommand(
                    Command::new("local", "Install from a directory on disk.").with_flag(
                        Flag::single("d", "dir")
                            .with_description("Directory containing the unpacked package."),
                    ),
                ),
        )
        .with_subcommand(Command::new("remove", "Uninstall packages."));

    print!("{}", app.help());
}
