//! Input line tokenizer.

/// Split a raw input line into a command word and positional arguments.
///
/// The first whitespace-separated token, lowercased, is the command;
/// the remaining tokens are arguments and keep their case (names are
/// case-sensitive). Returns `None` for an empty or all-whitespace line.
pub fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_and_args() {
        let (command, args) = parse_line("add Bob 0123456789").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, ["Bob", "0123456789"]);
    }

    #[test]
    fn test_parse_command_is_lowercased() {
        let (command, _) = parse_line("ADD Bob 0123456789").unwrap();
        assert_eq!(command, "add");
    }

    #[test]
    fn test_parse_arguments_keep_case() {
        let (_, args) = parse_line("phone Bob").unwrap();
        assert_eq!(args, ["Bob"]);
    }

    #[test]
    fn test_parse_collapses_extra_whitespace() {
        let (command, args) = parse_line("  add   Bob\t0123456789  ").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, ["Bob", "0123456789"]);
    }

    #[test]
    fn test_parse_empty_line() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \t ").is_none());
    }

    #[test]
    fn test_parse_bare_command() {
        let (command, args) = parse_line("all").unwrap();
        assert_eq!(command, "all");
        assert!(args.is_empty());
    }
}
