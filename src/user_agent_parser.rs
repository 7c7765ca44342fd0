use std::borrow::Cow;
use std::sync::OnceLock;

use super::browser_extractor::BrowserExtractor;
use super::disambiguation::{resolve, Context};
use super::error::{Error, Result};
use super::helpers::is_unset;
use super::platform_extractor::PlatformExtractor;
use super::types::*;

static SHARED: OnceLock<UserAgentParser> = OnceLock::new();

/// Classifies User-Agent strings into platform, browser and version.
///
/// Holds only read-only compiled catalogs, so one instance can be shared
/// freely between threads.
pub struct UserAgentParser {
    config: ParserConfig,
    platforms: PlatformExtractor,
    browsers: BrowserExtractor,
}

impl UserAgentParser {
    pub fn new() -> Result<Self> {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Result<Self> {
        let platforms = PlatformExtractor::new()?;
        let browsers = BrowserExtractor::new(config.prefilter)?;
        tracing::debug!(
            prefilter = config.prefilter,
            ambient_var = %config.ambient_var,
            "user agent parser ready"
        );
        Ok(Self {
            config,
            platforms,
            browsers,
        })
    }

    /// Process-wide parser with the default configuration, built on first use.
    ///
    /// The built-in catalogs are constant; `parser::tests::catalogs_compile`
    /// keeps them compiling, so construction here cannot fail.
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(|| Self::new().expect("built-in token catalogs compile"))
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a User-Agent string.
    ///
    /// Never fails: anything that cannot be classified comes back as `None`.
    /// The result borrows from `ua` wherever a field is reported verbatim.
    pub fn parse<'a>(&self, ua: &'a str) -> ParseResult<'a> {
        if is_unset(ua) {
            return ParseResult::default();
        }

        let platform = self.platforms.extract(ua);
        let candidates = self.browsers.candidates(ua);

        if candidates.is_empty() {
            return match self.browsers.fallback(ua) {
                Some((browser, version)) => ParseResult {
                    platform: platform.filter(|p| !is_unset(p)),
                    browser: Some(Cow::Borrowed(browser)),
                    version: version.filter(|v| !is_unset(v)).map(Cow::Borrowed),
                },
                None => ParseResult::default(),
            };
        }

        let cx = Context {
            platform,
            candidates,
            revision: self.browsers.revision(ua),
        };
        let resolution = resolve(&cx);

        let browser = Some(resolution.browser).filter(|b| !is_unset(b));
        let version = browser
            .as_ref()
            .and(Some(resolution.version))
            .filter(|v| !is_unset(v))
            .map(Cow::Borrowed);
        ParseResult {
            platform: resolution.platform.filter(|p| !is_unset(p)),
            browser,
            version,
        }
    }

    /// Parse `ua`, or `ambient` when no agent string was given.
    ///
    /// Fails with [`Error::MissingInput`] only when both are absent; an empty
    /// string is a valid (unclassifiable) agent.
    pub fn parse_or<'a>(
        &self,
        ua: Option<&'a str>,
        ambient: Option<&'a str>,
    ) -> Result<ParseResult<'a>> {
        let ua = ua.or(ambient).ok_or(Error::MissingInput)?;
        Ok(self.parse(ua))
    }

    /// Parse `ua`, falling back to the environment variable named by
    /// [`ParserConfig::ambient_var`] (`HTTP_USER_AGENT` by default).
    pub fn parse_or_env(&self, ua: Option<&str>) -> Result<ParseResult<'static>> {
        if let Some(ua) = ua {
            return Ok(self.parse(ua).into_owned());
        }
        let ambient = std::env::var_os(&self.config.ambient_var).ok_or(Error::MissingInput)?;
        tracing::trace!(var = %self.config.ambient_var, "using ambient user agent");
        Ok(self.parse(&ambient.to_string_lossy()).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple<'r>(r: &'r ParseResult<'_>) -> (Option<&'r str>, Option<&'r str>, Option<&'r str>) {
        (r.platform(), r.browser(), r.version())
    }

    #[test]
    fn empty_input_is_all_null() {
        let p = UserAgentParser::new().unwrap();
        assert!(p.parse("").is_empty());
        assert!(p.parse_or(Some(""), Some("curl/8.0")).unwrap().is_empty());
    }

    #[test]
    fn missing_input_without_ambient() {
        let p = UserAgentParser::new().unwrap();
        assert!(matches!(p.parse_or(None, None), Err(Error::MissingInput)));
    }

    #[test]
    fn ambient_value_used_when_input_absent() {
        let p = UserAgentParser::new().unwrap();
        let r = p.parse_or(None, Some("Wget/1.21.4")).unwrap();
        assert_eq!(triple(&r), (None, Some("Wget"), Some("1.21.4")));
    }

    #[test]
    fn env_fallback_reads_configured_variable() {
        let var = "USER_AGENT_PARSER_TEST_AMBIENT";
        let p = UserAgentParser::with_config(ParserConfig::default().ambient_var(var)).unwrap();

        std::env::remove_var(var);
        assert!(matches!(p.parse_or_env(None), Err(Error::MissingInput)));

        std::env::set_var(var, "curl/8.4.0");
        let r = p.parse_or_env(None).unwrap();
        assert_eq!(triple(&r), (None, Some("curl"), Some("8.4.0")));

        let r = p.parse_or_env(Some("Lynx/2.8.9rel.1")).unwrap();
        assert_eq!(r.browser(), Some("Lynx"));
        std::env::remove_var(var);
    }

    #[test]
    fn chrome_on_linux() {
        let p = UserAgentParser::new().unwrap();
        let r = p.parse(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/58.0.3029.110 Safari/537.36",
        );
        assert_eq!(triple(&r), (Some("Linux"), Some("Chrome"), Some("58.0.3029.110")));
    }

    #[test]
    fn mozilla_without_catalog_token_is_all_null() {
        let p = UserAgentParser::new().unwrap();
        assert!(p.parse("Mozilla/5.0 (Windows NT 10.0; Win64; x64)").is_empty());
    }

    #[test]
    fn zero_version_is_dropped() {
        let p = UserAgentParser::new().unwrap();
        let r = p.parse("SomeAgent/0");
        assert_eq!(triple(&r), (None, Some("SomeAgent"), None));
    }

    #[test]
    fn prefilter_off_gives_same_results() {
        let on = UserAgentParser::new().unwrap();
        let off = UserAgentParser::with_config(ParserConfig::default().prefilter(false)).unwrap();
        for ua in [
            "Mozilla/5.0 (Windows NT 10.0; Trident/7.0; rv:11.0) like Gecko",
            "MyCustomBot/3.1",
            "Mozilla/5.0 (compatible)",
        ] {
            assert_eq!(on.parse(ua), off.parse(ua), "{ua}");
        }
    }

    #[test]
    fn non_ascii_look_alikes_are_not_tokens() {
        let on = UserAgentParser::new().unwrap();
        let off = UserAgentParser::with_config(ParserConfig::default().prefilter(false)).unwrap();

        let lookalikes = [
            "Mozilla/5.0 (X11) \u{17f}afari/1",
            "(\u{212a}indle) \u{212a}indle/3.0",
        ];
        for ua in lookalikes {
            assert!(on.parse(ua).is_empty(), "{ua}");
            assert!(off.parse(ua).is_empty(), "{ua}");
        }

        let ua = "Mozilla/5.0 (X11; Linux x86_64) Firefox/1\u{17f}\u{212a}";
        for p in [&on, &off] {
            assert_eq!(triple(&p.parse(ua)), (Some("Linux"), Some("Firefox"), Some("1")));
        }
    }

    #[test]
    fn shared_instance_is_reused() {
        assert!(std::ptr::eq(UserAgentParser::shared(), UserAgentParser::shared()));
    }
}
