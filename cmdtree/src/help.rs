//! Recursive help-text layout.
//!
//! Renders a command tree as one indented text block: each nesting level
//! adds two spaces of indent, description text soft-wraps at whitespace
//! inside a fixed overall width, and flag descriptions align to a
//! per-node column computed from the widest flag label. Widths are
//! terminal display columns, not byte counts.

use unicode_width::UnicodeWidthStr;

use cmdtree_core::{Flag, FlagKind};

use crate::command::Command;

/// Overall line-width budget for rendered help.
const MAX_WIDTH: usize = 75;

/// Indent added per nesting level.
const INDENT: &str = "  ";

/// Gap between the flag-label column and the description column.
const COLUMN_GAP: usize = 2;

pub(crate) fn render(root: &Command) -> String {
    let mut out = String::new();
    write_command(&mut out, root, 0);
    out
}

fn write_command(out: &mut String, command: &Command, level: usize) {
    write_wrapped(out, level, &command.name);
    let level = level + 1;
    write_wrapped(out, level, &command.usage);
    out.push('\n');

    let labels: Vec<String> = command.flags.iter().map(|entry| label(&entry.flag)).collect();
    let column = labels.iter().map(|l| l.width()).max().unwrap_or(0) + COLUMN_GAP;
    for (entry, label) in command.flags.iter().zip(&labels) {
        write_columns(out, level, label, column, entry.flag.description());
    }

    for sub in &command.subcommands {
        out.push('\n');
        write_command(out, sub, level);
    }
}

/// Left-column label for a flag: `-s/--long`, with a value placeholder for
/// value-taking kinds.
fn label(flag: &Flag) -> String {
    let mut label = format!("-{}/--{}", flag.short(), flag.long());
    match flag.kind() {
        FlagKind::Boolean => {}
        FlagKind::SingleValue => label.push_str(" <arg>"),
        FlagKind::MultiValue => label.push_str(" <arg ...>"),
    }
    label
}

/// Writes `text` soft-wrapped to the width left at `level`, one physical
/// line per wrapped segment, each segment indented.
fn write_wrapped(out: &mut String, level: usize, text: &str) {
    let width = MAX_WIDTH.saturating_sub(INDENT.len() * level);
    for line in wrap_soft(text, width) {
        for _ in 0..level {
            out.push_str(INDENT);
        }
        out.push_str(&line);
        out.push('\n');
    }
}

/// Writes a two-column row: `left` padded to `column`, `right` wrapped to
/// the width that remains, continuation lines aligned under the start of
/// the right column.
fn write_columns(out: &mut String, level: usize, left: &str, column: usize, right: &str) {
    let width = MAX_WIDTH.saturating_sub(INDENT.len() * level);
    let mut lines = wrap_soft(right, width.saturating_sub(column)).into_iter();

    for _ in 0..level {
        out.push_str(INDENT);
    }
    out.push_str(left);
    for _ in 0..column.saturating_sub(left.width()) {
        out.push(' ');
    }
    if let Some(first) = lines.next() {
        out.push_str(&first);
    }
    out.push('\n');

    for line in lines {
        for _ in 0..(INDENT.len() * level + column) {
            out.push(' ');
        }
        out.push_str(&line);
        out.push('\n');
    }
}

/// Breaks `text` at whitespace so each line fits `width` display columns.
/// A single word wider than `width` stays intact and overflows the nominal
/// width. Empty input yields one empty line.
fn wrap_soft(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_at_whitespace() {
        assert_eq!(wrap_soft("aaa bbb ccc", 7), ["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_wrap_keeps_overlong_word_intact() {
        assert_eq!(wrap_soft("supercalifragilistic", 5), ["supercalifragilistic"]);
        assert_eq!(wrap_soft("a supercalifragilistic b", 5), [
            "a",
            "supercalifragilistic",
            "b"
        ]);
    }

    #[test]
    fn test_wrap_empty_text_is_one_empty_line() {
        assert_eq!(wrap_soft("", 10), [""]);
    }

    #[test]
    fn test_wrap_fills_lines_exactly() {
        // "ab cd" is exactly five columns wide.
        assert_eq!(wrap_soft("ab cd ef", 5), ["ab cd", "ef"]);
    }

    #[test]
    fn test_label_appends_value_placeholders() {
        assert_eq!(label(&Flag::boolean("v", "verbose")), "-v/--verbose");
        assert_eq!(label(&Flag::single("o", "output")), "-o/--output <arg>");
        assert_eq!(label(&Flag::multi("i", "input")), "-i/--input <arg ...>");
    }
}
