//! Line parser: splits an input line into a program name, options and
//! parameters.
//!
//! The grammar is deliberately flat. Trailing whitespace is trimmed, tokens
//! are separated by spaces, and every token after the program name that
//! starts with `-` is an option. Everything else is a parameter. Order is
//! preserved within each group.
//!
//! ```text
//! ls -l        -> program "ls", options ["-l"], params []
//! mkdir a b    -> program "mkdir", options [], params ["a", "b"]
//! chmod 5 f -v -> program "chmod", options ["-v"], params ["5", "f"]
//! ```

use crate::tools::ToolArgs;

/// Split a line into tokens.
///
/// Runs of spaces never produce empty tokens, so `"ls  -l"` and `"ls -l"`
/// tokenize the same way. Tabs are not separators.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.trim_end()
        .split(' ')
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse tokens into [`ToolArgs`]. Returns `None` for an empty token list.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> Option<ToolArgs> {
    let (program, rest) = tokens.split_first()?;
    let mut args = ToolArgs::new(program.as_ref());
    for token in rest {
        let token = token.as_ref();
        if token.starts_with('-') {
            args.options.push(token.to_string());
        } else {
            args.params.push(token.to_string());
        }
    }
    Some(args)
}

/// Tokenize and parse in one step. Blank lines give `None`.
pub fn parse_line(line: &str) -> Option<ToolArgs> {
    parse_args(&tokenize(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn tokenize_trims_trailing_whitespace() {
        assert_eq!(tokenize("ls -l   \n"), ["ls", "-l"]);
    }

    #[test]
    fn tokenize_collapses_repeated_spaces() {
        assert_eq!(tokenize("  mkdir  a   b"), ["mkdir", "a", "b"]);
    }

    #[test]
    fn tokenize_keeps_tabs_inside_tokens() {
        assert_eq!(tokenize("rm a\tb"), ["rm", "a\tb"]);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n")]
    fn blank_lines_parse_to_none(#[case] line: &str) {
        assert!(parse_line(line).is_none());
    }

    #[test]
    fn options_and_params_keep_order() {
        let args = parse_line("chmod -v 5 -R file.txt").unwrap();
        assert_eq!(args.program, "chmod");
        assert_eq!(args.options, ["-v", "-R"]);
        assert_eq!(args.params, ["5", "file.txt"]);
    }

    #[test]
    fn program_name_is_never_an_option() {
        let args = parse_line("-l x").unwrap();
        assert_eq!(args.program, "-l");
        assert!(args.options.is_empty());
        assert_eq!(args.params, ["x"]);
    }

    #[test]
    fn double_dash_is_an_option() {
        let args = parse_line("ls --long").unwrap();
        assert!(args.has_option("--long"));
    }
}
