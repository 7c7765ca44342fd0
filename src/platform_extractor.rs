use std::borrow::Cow;

use indexmap::IndexSet;

use super::catalog::{COMMENT_BLOCK, PLATFORM_PRIORITY, PLATFORM_SUFFIX, PLATFORM_TOKENS};
use super::error::Result;
use super::parser::{compile_regex, token_pattern};
use super::types::platform;

/// Finds the platform named in the first parenthesized comment block.
pub(crate) struct PlatformExtractor {
    comment: regex::Regex,
    tokens: regex::Regex,
}

impl PlatformExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            comment: compile_regex(COMMENT_BLOCK)?,
            tokens: compile_regex(&format!(
                "(?m){}",
                token_pattern("platform", PLATFORM_TOKENS, PLATFORM_SUFFIX)
            ))?,
        })
    }

    pub fn extract<'a>(&self, ua: &'a str) -> Option<Cow<'a, str>> {
        let block = self.comment.captures(ua)?.get(1)?.as_str();

        let found: IndexSet<&'a str> = self
            .tokens
            .captures_iter(block)
            .filter_map(|c| c.name("platform"))
            .map(|m| m.as_str())
            .collect();

        resolve(&found).map(normalize)
    }
}

/// Pick one platform out of the distinct tokens, in first-seen order.
fn resolve<'a>(found: &IndexSet<&'a str>) -> Option<&'a str> {
    if found.len() > 1 {
        if let Some(p) = PLATFORM_PRIORITY.iter().find_map(|&p| found.get(p)) {
            return Some(*p);
        }
    }
    found.first().copied()
}

fn normalize(token: &str) -> Cow<'_, str> {
    match token {
        "linux-gnu" | "X11" => Cow::Borrowed(platform::LINUX),
        "CrOS" => Cow::Borrowed(platform::CHROME_OS),
        other => Cow::Borrowed(other),
    }
}
