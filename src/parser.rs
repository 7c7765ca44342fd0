use crate::error::Result;

/// Build a pattern capturing one catalog token under `group`, followed by
/// `suffix`. Tokens are matched ASCII case-insensitively.
pub(crate) fn token_pattern(group: &str, tokens: &str, suffix: &str) -> String {
    format!("(?P<{}>(?i-u:{})){}", group, tokens, suffix)
}

/// Compile with the `regex` crate (Thompson NFA, no look-around).
pub(crate) fn compile_regex(pattern: &str) -> Result<regex::Regex> {
    Ok(regex::Regex::new(pattern)?)
}

/// Compile with `fancy_regex`, needed for patterns with look-ahead.
pub(crate) fn compile_fancy(pattern: &str) -> Result<fancy_regex::Regex> {
    Ok(fancy_regex::Regex::new(pattern)?)
}

/// [`compile_regex`] with ASCII-only case-insensitive matching.
pub(crate) fn compile_ascii_insensitive(pattern: &str) -> Result<regex::Regex> {
    compile_regex(&format!("(?i-u:{})", pattern))
}
