use aho_corasick::AhoCorasick;

use super::error::Result;
use super::literal::extract_literals;

/// Cheap gate applied before running the browser catalog regex.
///
/// Built from the prefix literals of the token alternation: when none of
/// them occurs in the agent string (ASCII case-insensitively), the regex
/// cannot match either.
pub(crate) enum TokenPrefilter {
    /// No usable literals — always run the regex.
    None,
    Literals(AhoCorasick),
}

impl TokenPrefilter {
    pub fn build(tokens: &str) -> Result<TokenPrefilter> {
        let literals = extract_literals(tokens, 3);
        if literals.is_empty() {
            return Ok(TokenPrefilter::None);
        }
        let ac = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&literals)?;
        Ok(TokenPrefilter::Literals(ac))
    }

    pub fn matches(&self, ua: &str) -> bool {
        match self {
            Self::None => true,
            Self::Literals(ac) => ac.is_match(ua),
        }
    }
}
