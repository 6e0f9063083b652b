//! Argument-string editing for agent launchers.
//!
//! Launcher forms let the user compose a process's CLI arguments through
//! structured controls (flag checkboxes, a subcommand toggle, directory
//! chips) and a free-text field, all backed by a single opaque string that
//! is stored verbatim and handed to the launcher on start.
//!
//! Every operation here is a pure function: the string is parsed into a
//! token list, the edit happens structurally on that list, and the list is
//! serialized back with single-space separators. Callers hold the string in
//! form state and re-render from the returned value. Checkbox and chip state
//! is re-derived each frame through the projections ([`has_flag`],
//! [`has_mode_prefix`], [`list_values`]), so the string is the only source
//! of truth.
//!
//! Tokens are split on whitespace, except that a double-quoted span counts
//! as a single token and keeps its quotes verbatim. That way a quoted path
//! containing spaces survives add/list/remove round trips.

/// Parsed token list behind the string-level operations.
///
/// Keeping the edits structural (instead of splicing text) guarantees that
/// an operation never rewrites tokens it does not own.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ArgList {
    tokens: Vec<String>,
}

impl ArgList {
    fn parse(input: &str) -> Self {
        Self {
            tokens: tokenize(input),
        }
    }

    fn join(&self) -> String {
        self.tokens.join(" ")
    }

    fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Locates `flag` and its contiguous value run.
    ///
    /// Returns `(flag_index, end_index)` where the values occupy
    /// `flag_index + 1 .. end_index`. The run extends up to the next token
    /// starting with `--`, or the end of the list.
    ///
    /// Boundary heuristic: a value belonging to some *other* flag that
    /// itself starts with `--` terminates the run early. The scan never
    /// mutates or reorders tokens, so a mis-scan only affects which tokens
    /// are considered part of the run.
    fn flag_run(&self, flag: &str) -> Option<(usize, usize)> {
        let start = self.tokens.iter().position(|t| t == flag)?;
        let end = self.tokens[start + 1..]
            .iter()
            .position(|t| t.starts_with("--"))
            .map(|offset| start + 1 + offset)
            .unwrap_or(self.tokens.len());
        Some((start, end))
    }
}

/// Splits on whitespace, keeping double-quoted spans together.
///
/// Quotes are preserved in the token text. An unterminated quote extends to
/// the end of the input rather than erroring; malformed input degrades to a
/// still-valid token list.
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Strips one pair of surrounding double quotes, if present.
fn unquote(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(token)
}

fn value_matches(token: &str, path: &str) -> bool {
    unquote(token) == unquote(path)
}

/// Wraps `path` in double quotes when it contains a space, so the assembled
/// string stays shell-safe when the launcher later splits it.
pub fn quote_if_needed(path: &str) -> String {
    if path.contains(' ') {
        format!("\"{path}\"")
    } else {
        path.to_string()
    }
}

/// Whether `flag` is present as a whole token.
pub fn has_flag(args: &str, flag: &str) -> bool {
    ArgList::parse(args).contains(flag)
}

/// Adds or removes a boolean flag token.
///
/// Enabling prepends the flag when absent; disabling removes every
/// occurrence of the exact token. Either direction is a no-op on content
/// when the flag is already in the desired state (whitespace gets
/// normalized to single spaces on reassembly). Matching is whole-token, so
/// `--chrome` never touches `--chrome-profile`.
pub fn toggle_flag(args: &str, flag: &str, enabled: bool) -> String {
    let mut list = ArgList::parse(args);
    if enabled {
        if !list.contains(flag) {
            list.tokens.insert(0, flag.to_string());
        }
    } else {
        list.tokens.retain(|t| t != flag);
    }
    list.join()
}

/// Whether the trimmed string starts with `prefix` as a whole token.
pub fn has_mode_prefix(args: &str, prefix: &str) -> bool {
    let trimmed = args.trim_start();
    match trimmed.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

/// Adds or removes a leading subcommand token (e.g. a `web` mode).
///
/// Only the start of the trimmed string is inspected; everything after the
/// prefix token stays byte-for-byte identical. Disabling strips the token
/// plus the single run of whitespace that follows it.
pub fn toggle_mode_prefix(args: &str, prefix: &str, enabled: bool) -> String {
    let trimmed = args.trim_start();
    if enabled {
        if has_mode_prefix(args, prefix) {
            return args.to_string();
        }
        if trimmed.is_empty() {
            prefix.to_string()
        } else {
            format!("{prefix} {trimmed}")
        }
    } else {
        match trimmed.strip_prefix(prefix) {
            Some(rest) if rest.is_empty() => String::new(),
            Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start().to_string(),
            _ => args.to_string(),
        }
    }
}

/// The ordered values currently attached to a multi-value flag.
///
/// Values are returned without surrounding quotes (display form). Empty when
/// the flag is absent or has no values before the next `--` token.
pub fn list_values(args: &str, flag: &str) -> Vec<String> {
    let list = ArgList::parse(args);
    match list.flag_run(flag) {
        Some((start, end)) => list.tokens[start + 1..end]
            .iter()
            .map(|t| unquote(t).to_string())
            .collect(),
        None => Vec::new(),
    }
}

/// Appends `path` to a multi-value flag's run.
///
/// No-op if the path is already listed. When the flag is present the path
/// lands at the end of its contiguous run (directly after the flag when the
/// run is empty); when absent, flag and path are appended to the end of the
/// string. Paths containing spaces are quoted on insertion.
pub fn add_value(args: &str, flag: &str, path: &str) -> String {
    let mut list = ArgList::parse(args);
    match list.flag_run(flag) {
        Some((start, end)) => {
            if list.tokens[start + 1..end]
                .iter()
                .any(|t| value_matches(t, path))
            {
                return list.join();
            }
            list.tokens.insert(end, quote_if_needed(path));
        }
        None => {
            list.tokens.push(flag.to_string());
            list.tokens.push(quote_if_needed(path));
        }
    }
    list.join()
}

/// Removes `path` from a multi-value flag's run.
///
/// Remaining values keep their order. Removing the last value removes the
/// flag token as well, so the string is never left with a dangling flag.
pub fn remove_value(args: &str, flag: &str, path: &str) -> String {
    let mut list = ArgList::parse(args);
    let Some((start, end)) = list.flag_run(flag) else {
        return list.join();
    };

    let remaining: Vec<String> = list.tokens[start + 1..end]
        .iter()
        .filter(|t| !value_matches(t, path))
        .cloned()
        .collect();

    if remaining.is_empty() {
        list.tokens.splice(start..end, std::iter::empty());
    } else {
        list.tokens.splice(start + 1..end, remaining);
    }
    list.join()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIR_FLAG: &str = "--add-dir";

    fn tokens(s: &str) -> Vec<String> {
        tokenize(s)
    }

    #[test]
    fn test_toggle_flag_on_empty_string() {
        assert_eq!(toggle_flag("", "--chrome", true), "--chrome");
    }

    #[test]
    fn test_toggle_flag_off_keeps_other_tokens() {
        assert_eq!(toggle_flag("--chrome extra", "--chrome", false), "extra");
    }

    #[test]
    fn test_toggle_flag_round_trip_is_token_equivalent() {
        let original = "run --fast  input.txt";
        let enabled = toggle_flag(original, "--chrome", true);
        let restored = toggle_flag(&enabled, "--chrome", false);
        assert_eq!(tokens(&restored), tokens(original));
    }

    #[test]
    fn test_toggle_flag_enable_is_idempotent() {
        let once = toggle_flag("--verbose", "--chrome", true);
        let twice = toggle_flag(&once, "--chrome", true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_toggle_flag_disable_when_absent_is_noop() {
        assert_eq!(toggle_flag("run input.txt", "--chrome", false), "run input.txt");
    }

    #[test]
    fn test_toggle_flag_matches_whole_tokens_only() {
        let args = "--chrome-profile work";
        assert!(!has_flag(args, "--chrome"));
        assert_eq!(toggle_flag(args, "--chrome", false), args);
    }

    #[test]
    fn test_toggle_flag_removes_duplicates() {
        assert_eq!(toggle_flag("--chrome x --chrome", "--chrome", false), "x");
    }

    #[test]
    fn test_has_flag_projection() {
        assert!(has_flag("web --chrome --add-dir /a", "--chrome"));
        assert!(!has_flag("web --add-dir /a", "--chrome"));
    }

    #[test]
    fn test_mode_prefix_enable_on_empty() {
        assert_eq!(toggle_mode_prefix("", "web", true), "web");
    }

    #[test]
    fn test_mode_prefix_disable_leading_token() {
        assert_eq!(toggle_mode_prefix("web --flag", "web", false), "--flag");
    }

    #[test]
    fn test_mode_prefix_enable_prepends_with_space() {
        assert_eq!(toggle_mode_prefix("--flag", "web", true), "web --flag");
    }

    #[test]
    fn test_mode_prefix_disable_only_token() {
        assert_eq!(toggle_mode_prefix("web", "web", false), "");
    }

    #[test]
    fn test_mode_prefix_leaves_rest_byte_identical() {
        // Interior spacing after the prefix run must not be normalized.
        let args = "web --flag   x  y";
        assert_eq!(toggle_mode_prefix(args, "web", false), "--flag   x  y");
    }

    #[test]
    fn test_mode_prefix_does_not_match_longer_token() {
        assert!(!has_mode_prefix("website --flag", "web"));
        assert_eq!(
            toggle_mode_prefix("website --flag", "web", false),
            "website --flag"
        );
    }

    #[test]
    fn test_mode_prefix_enable_is_idempotent() {
        let once = toggle_mode_prefix("--flag", "web", true);
        assert_eq!(toggle_mode_prefix(&once, "web", true), once);
    }

    #[test]
    fn test_add_value_to_empty_string() {
        assert_eq!(add_value("", DIR_FLAG, "/a"), "--add-dir /a");
    }

    #[test]
    fn test_add_value_appends_to_run_in_order() {
        let args = add_value("--add-dir /a", DIR_FLAG, "/b");
        assert_eq!(list_values(&args, DIR_FLAG), vec!["/a", "/b"]);
    }

    #[test]
    fn test_add_value_keeps_run_before_next_flag() {
        let args = add_value("--add-dir /a --chrome", DIR_FLAG, "/b");
        assert_eq!(args, "--add-dir /a /b --chrome");
    }

    #[test]
    fn test_add_value_after_bare_flag() {
        let args = add_value("--add-dir --chrome", DIR_FLAG, "/a");
        assert_eq!(args, "--add-dir /a --chrome");
    }

    #[test]
    fn test_add_value_is_idempotent() {
        let once = add_value("--add-dir /a", DIR_FLAG, "/a");
        assert_eq!(once, add_value(&once, DIR_FLAG, "/a"));
        assert_eq!(list_values(&once, DIR_FLAG), vec!["/a"]);
    }

    #[test]
    fn test_remove_value_keeps_flag_when_values_remain() {
        let args = remove_value("--add-dir /a /b", DIR_FLAG, "/b");
        assert_eq!(list_values(&args, DIR_FLAG), vec!["/a"]);
        assert!(has_flag(&args, DIR_FLAG));
    }

    #[test]
    fn test_remove_last_value_removes_flag_token() {
        let args = remove_value("--add-dir /a", DIR_FLAG, "/a");
        assert!(!has_flag(&args, DIR_FLAG));
        assert_eq!(args, "");
    }

    #[test]
    fn test_remove_value_does_not_touch_surrounding_tokens() {
        let args = remove_value("web --add-dir /a /b --chrome", DIR_FLAG, "/a");
        assert_eq!(args, "web --add-dir /b --chrome");
    }

    #[test]
    fn test_remove_value_when_flag_absent_is_noop() {
        assert_eq!(remove_value("--chrome", DIR_FLAG, "/a"), "--chrome");
    }

    #[test]
    fn test_list_values_empty_when_flag_absent() {
        assert!(list_values("--chrome x", DIR_FLAG).is_empty());
    }

    #[test]
    fn test_quoted_value_round_trip() {
        let args = add_value("", DIR_FLAG, "/home/user/my docs");
        assert_eq!(args, "--add-dir \"/home/user/my docs\"");
        assert_eq!(list_values(&args, DIR_FLAG), vec!["/home/user/my docs"]);
        let removed = remove_value(&args, DIR_FLAG, "/home/user/my docs");
        assert!(!has_flag(&removed, DIR_FLAG));
    }

    #[test]
    fn test_quoted_value_counts_as_one_token() {
        let args = "--add-dir \"/a b\" /c";
        assert_eq!(list_values(args, DIR_FLAG), vec!["/a b", "/c"]);
    }

    #[test]
    fn test_run_terminated_by_next_flag_token() {
        // Boundary heuristic: the run ends at the next `--` token even when
        // that token is an unrelated flag's value.
        assert_eq!(
            list_values("--add-dir /a /b --verbose /c", DIR_FLAG),
            vec!["/a", "/b"]
        );
    }

    #[test]
    fn test_manual_edits_survive_toggles() {
        // Free-text edits elsewhere in the string are never reordered.
        let args = "claude-extra --model sonnet positional";
        let toggled = toggle_flag(args, "--chrome", true);
        assert_eq!(toggled, "--chrome claude-extra --model sonnet positional");
        assert_eq!(tokens(&toggle_flag(&toggled, "--chrome", false)), tokens(args));
    }

    #[test]
    fn test_full_form_scenario() {
        let mut args = String::new();
        args = toggle_flag(&args, "--chrome", true);
        assert_eq!(args, "--chrome");

        args = add_value(&args, DIR_FLAG, "/home/user/a");
        assert_eq!(args, "--chrome --add-dir /home/user/a");

        args = add_value(&args, DIR_FLAG, "/home/user/b");
        assert_eq!(args, "--chrome --add-dir /home/user/a /home/user/b");

        args = remove_value(&args, DIR_FLAG, "/home/user/a");
        assert_eq!(args, "--chrome --add-dir /home/user/b");

        args = toggle_flag(&args, "--chrome", false);
        assert_eq!(args, "--add-dir /home/user/b");
    }
}
