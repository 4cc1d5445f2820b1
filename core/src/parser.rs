//! Single-pass flag scanning.
//!
//! [`parse_flags`] walks a token sequence left to right, consuming
//! flag-shaped tokens and their values until it reaches the first token
//! that is neither a flag nor a flag value. Candidate matching is
//! first-registered-wins; unmatched flag tokens accumulate as unknown
//! instead of aborting the scan. The only fatal condition is a
//! value-taking flag with nothing to read.

use tracing::debug;

use crate::{Error, Flag, FlagKind, FlagValue, Result};

/// Outcome of a successful flag scan.
#[derive(Debug)]
pub struct Parsed<'t> {
    /// Unconsumed tokens, from the first non-flag token onward.
    pub remaining: &'t [String],
    /// Flag-shaped tokens that matched no candidate, verbatim and in
    /// encounter order.
    pub unknown: Vec<String>,
}

/// Classifies a token as a long (`--name`) or short (`-name`) flag and
/// strips the prefix. Non-flag tokens yield `None`.
fn classify(token: &str) -> Option<(bool, &str)> {
    if let Some(name) = token.strip_prefix("--") {
        Some((true, name))
    } else if let Some(name) = token.strip_prefix('-') {
        Some((false, name))
    } else {
        None
    }
}

/// Scans `args` against `candidates`, storing values into matched flags.
///
/// Tokens starting with `--` are matched against long names, tokens
/// starting with `-` against short names, scanning `candidates` in order
/// and taking the first match. A matched flag reads values per its kind:
///
/// - [`FlagKind::Boolean`] stores `true` and consumes nothing further;
/// - [`FlagKind::SingleValue`] consumes the next token unless it is
///   missing or flag-shaped, which is a [`Error::MissingFlagValue`];
/// - [`FlagKind::MultiValue`] consumes every following non-flag token and
///   requires at least one.
///
/// The scan stops without error at the first token that is neither a flag
/// nor a flag value; that token and everything after it come back in
/// [`Parsed::remaining`] unconsumed, which is what lets subcommand names
/// and positional arguments follow flags unambiguously.
///
/// There is no `=`-joined syntax and no short-flag clustering: `-abc` is
/// one short name `abc`, and `--flag=value` is a single token.
///
/// # Examples
///
/// ```
/// use cmdtree_core::{parse_flags, Flag, FlagValue};
///
/// let mut verbose = Flag::boolean("v", "verbose");
/// let mut output = Flag::single("o", "output");
///
/// let args: Vec<String> = ["-v", "--output", "out.txt", "build", "src"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let parsed = parse_flags(&args, &mut [&mut verbose, &mut output]).unwrap();
/// assert_eq!(parsed.remaining, ["build".to_string(), "src".to_string()]);
/// assert!(parsed.unknown.is_empty());
/// assert_eq!(verbose.value(), Some(&FlagValue::Bool(true)));
/// assert_eq!(output.value(), Some(&FlagValue::Single("out.txt".to_string())));
/// ```
pub fn parse_flags<'t>(args: &'t [String], candidates: &mut [&mut Flag]) -> Result<Parsed<'t>> {
    let mut rest = args;
    let mut unknown = Vec::new();

    while let Some(token) = rest.first() {
        let Some((long_form, name)) = classify(token) else {
            break;
        };
        rest = &rest[1..];

        let Some(flag) = candidates.iter_mut().find(|f| f.matches(name, long_form)) else {
            debug!(%token, "unmatched flag token");
            unknown.push(token.clone());
            continue;
        };
        debug!(%token, kind = ?flag.kind(), "matched flag");

        match flag.kind() {
            FlagKind::Boolean => flag.assign(FlagValue::Bool(true)),
            FlagKind::SingleValue => match rest.first().filter(|t| !t.starts_with('-')) {
                Some(value) => {
                    flag.assign(FlagValue::Single(value.clone()));
                    rest = &rest[1..];
                }
                None => return Err(Error::MissingFlagValue(token.clone())),
            },
            FlagKind::MultiValue => {
                let mut values = Vec::new();
                while let Some(value) = rest.first().filter(|t| !t.starts_with('-')) {
                    values.push(value.clone());
                    rest = &rest[1..];
                }
                if values.is_empty() {
                    return Err(Error::MissingFlagValue(token.clone()));
                }
                flag.assign(FlagValue::Multi(values));
            }
        }
    }

    Ok(Parsed { remaining: rest, unknown })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &str) -> Vec<String> {
        raw.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_no_flags_passes_tokens_through() {
        let tokens = args("a");
        let parsed = parse_flags(&tokens, &mut []).unwrap();
        assert_eq!(parsed.remaining, tokens.as_slice());
        assert!(parsed.unknown.is_empty());
    }

    #[test]
    fn test_long_and_short_forms_set_flags() {
        let mut long = Flag::boolean("l", "long");
        let mut short = Flag::boolean("s", "short");
        let tokens = args("--long -s");
        parse_flags(&tokens, &mut [&mut long, &mut short]).unwrap();
        assert!(long.is_set());
        assert!(short.is_set());
    }

    #[test]
    fn test_unknown_and_remaining_split() {
        let tokens = args("-b --c - -- foo");
        let parsed = parse_flags(&tokens, &mut []).unwrap();
        assert_eq!(parsed.remaining, ["foo".to_string()]);
        assert_eq!(parsed.unknown, ["-b", "--c", "-", "--"]);
    }

    #[test]
    fn test_boolean_consumes_no_value_token() {
        let mut flag = Flag::boolean("b", "bool");
        let tokens = args("-b foo");
        let parsed = parse_flags(&tokens, &mut [&mut flag]).unwrap();
        assert_eq!(flag.value(), Some(&FlagValue::Bool(true)));
        assert_eq!(parsed.remaining, ["foo".to_string()]);
    }

    #[test]
    fn test_single_value_reads_next_token() {
        let mut flag = Flag::single("v", "value");
        let tokens = args("-v value1 value2");
        let parsed = parse_flags(&tokens, &mut [&mut flag]).unwrap();
        assert_eq!(flag.value(), Some(&FlagValue::Single("value1".to_string())));
        assert_eq!(parsed.remaining, ["value2".to_string()]);
    }

    #[test]
    fn test_single_value_without_token_fails() {
        let mut flag = Flag::single("v", "value");
        let tokens = args("-v");
        let err = parse_flags(&tokens, &mut [&mut flag]).unwrap_err();
        assert!(matches!(err, Error::MissingFlagValue(t) if t == "-v"));
    }

    #[test]
    fn test_single_value_followed_by_flag_fails() {
        let mut flag = Flag::single("v", "value");
        let tokens = args("-v -v2 foo");
        let err = parse_flags(&tokens, &mut [&mut flag]).unwrap_err();
        assert!(matches!(err, Error::MissingFlagValue(t) if t == "-v"));
    }

    #[test]
    fn test_multi_value_reads_until_flag_token() {
        let mut flag = Flag::multi("m", "multi");
        let tokens = args("-m a b --x");
        let parsed = parse_flags(&tokens, &mut [&mut flag]).unwrap();
        assert_eq!(
            flag.value(),
            Some(&FlagValue::Multi(vec!["a".to_string(), "b".to_string()]))
        );
        // "--x" is not consumed as a value; it is an unmatched flag token.
        assert_eq!(parsed.unknown, ["--x"]);
        assert!(parsed.remaining.is_empty());
    }

    #[test]
    fn test_multi_value_without_tokens_fails() {
        let mut flag = Flag::multi("m", "multi");
        let tokens = args("-m");
        let err = parse_flags(&tokens, &mut [&mut flag]).unwrap_err();
        assert!(matches!(err, Error::MissingFlagValue(t) if t == "-m"));
    }

    #[test]
    fn test_multi_value_followed_by_flag_fails() {
        let mut flag = Flag::multi("m", "multi");
        let tokens = args("-m --m2 foo");
        let err = parse_flags(&tokens, &mut [&mut flag]).unwrap_err();
        assert!(matches!(err, Error::MissingFlagValue(t) if t == "-m"));
    }

    #[test]
    fn test_full_scan_mixed() {
        let mut b1 = Flag::boolean("b1", "bool1");
        let mut b2 = Flag::boolean("b2", "bool2");
        let mut b3 = Flag::boolean("b3", "bool3");
        let mut v1 = Flag::single("v1", "value1");
        let mut v2 = Flag::single("v2", "value2");
        let mut v3 = Flag::single("v3", "value3");
        let mut m1 = Flag::multi("m1", "multi1");
        let mut m2 = Flag::multi("m2", "multi2");
        let mut m3 = Flag::multi("m3", "multi3");

        let tokens =
            args("-b1 -v1 foo1 -u1 --bool2 -m1 foo2 foo3 foo4 --value2 foo5 --multi2 foo6 --u2 r1 r2");
        let parsed = parse_flags(
            &tokens,
            &mut [
                &mut b1, &mut b2, &mut b3, &mut v1, &mut v2, &mut v3, &mut m1, &mut m2, &mut m3,
            ],
        )
        .unwrap();

        assert_eq!(parsed.remaining, ["r1".to_string(), "r2".to_string()]);
        assert_eq!(parsed.unknown, ["-u1", "--u2"]);
        assert_eq!(b1.value(), Some(&FlagValue::Bool(true)));
        assert_eq!(b2.value(), Some(&FlagValue::Bool(true)));
        assert!(!b3.is_set());
        assert_eq!(v1.value(), Some(&FlagValue::Single("foo1".to_string())));
        assert_eq!(v2.value(), Some(&FlagValue::Single("foo5".to_string())));
        assert!(!v3.is_set());
        assert_eq!(
            m1.value(),
            Some(&FlagValue::Multi(vec![
                "foo2".to_string(),
                "foo3".to_string(),
                "foo4".to_string()
            ]))
        );
        assert_eq!(m2.value(), Some(&FlagValue::Multi(vec!["foo6".to_string()])));
        assert!(!m3.is_set());
    }

    #[test]
    fn test_reparse_overwrites_previous_value() {
        let mut flag = Flag::single("v", "value");
        let first = args("-v one");
        parse_flags(&first, &mut [&mut flag]).unwrap();
        let second = args("--value two");
        parse_flags(&second, &mut [&mut flag]).unwrap();
        assert_eq!(flag.value(), Some(&FlagValue::Single("two".to_string())));
    }

    #[test]
    fn test_first_registered_candidate_wins() {
        let mut first = Flag::single("x", "same");
        let mut second = Flag::single("x", "same");
        let tokens = args("-x hit");
        parse_flags(&tokens, &mut [&mut first, &mut second]).unwrap();
        assert_eq!(first.value(), Some(&FlagValue::Single("hit".to_string())));
        assert!(!second.is_set());
    }
}
