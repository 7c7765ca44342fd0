use super::candidates::{Candidate, CandidateSet};
use super::catalog::{BROWSER_SUFFIX, BROWSER_TOKENS, FALLBACK, REVISION};
use super::error::Result;
use super::parser::{compile_ascii_insensitive, compile_fancy, compile_regex, token_pattern};
use super::prefilter::TokenPrefilter;

/// Scans the whole agent string for client tokens and their versions.
pub(crate) struct BrowserExtractor {
    tokens: regex::Regex,
    revision: regex::Regex,
    /// Needs look-ahead, hence fancy_regex.
    fallback: fancy_regex::Regex,
    prefilter: TokenPrefilter,
}

impl BrowserExtractor {
    pub fn new(use_prefilter: bool) -> Result<Self> {
        let prefilter = if use_prefilter {
            TokenPrefilter::build(BROWSER_TOKENS)?
        } else {
            TokenPrefilter::None
        };
        Ok(Self {
            tokens: compile_regex(&token_pattern("browser", BROWSER_TOKENS, BROWSER_SUFFIX))?,
            revision: compile_ascii_insensitive(REVISION)?,
            fallback: compile_fancy(FALLBACK)?,
            prefilter,
        })
    }

    /// Every catalog token with its adjacent version, in order of appearance.
    pub fn candidates<'a>(&self, ua: &'a str) -> CandidateSet<'a> {
        if !self.prefilter.matches(ua) {
            tracing::trace!("no catalog literal in agent, skipping token scan");
            return CandidateSet::default();
        }

        self.tokens
            .captures_iter(ua)
            .filter_map(|caps| {
                let token = caps.name("browser")?.as_str();
                let version = caps.name("version").map_or("", |m| m.as_str());
                Some(Candidate { token, version })
            })
            .collect()
    }

    /// Value of the first `rv:` marker.
    pub fn revision<'a>(&self, ua: &'a str) -> Option<&'a str> {
        self.revision
            .captures(ua)
            .and_then(|caps| caps.name("version"))
            .map(|m| m.as_str())
    }

    /// Leading `Token[/Version]` of agents that do not claim to be Mozilla.
    pub fn fallback<'a>(&self, ua: &'a str) -> Option<(&'a str, Option<&'a str>)> {
        let caps = match self.fallback.captures(ua) {
            Ok(Some(caps)) => caps,
            _ => return None,
        };
        let browser = caps.name("browser")?.as_str();
        let version = caps.name("version").map(|m| m.as_str());
        Some((browser, version))
    }
}
