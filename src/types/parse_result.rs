use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Classification of a single User-Agent string.
///
/// Every field is independently nullable. A `version` is only ever reported
/// alongside a `browser`.
///
/// The classification is lossy: rebuilding an agent string from these fields
/// and parsing it again is not guaranteed to produce the same result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult<'a> {
    pub platform: Option<Cow<'a, str>>,
    pub browser: Option<Cow<'a, str>>,
    pub version: Option<Cow<'a, str>>,
}

impl<'a> ParseResult<'a> {
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }
    pub fn browser(&self) -> Option<&str> {
        self.browser.as_deref()
    }
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// `true` when nothing at all could be classified.
    pub fn is_empty(&self) -> bool {
        self.platform.is_none() && self.browser.is_none() && self.version.is_none()
    }

    /// Detach the result from the input string it borrows from.
    pub fn into_owned(self) -> ParseResult<'static> {
        ParseResult {
            platform: self.platform.map(|p| Cow::Owned(p.into_owned())),
            browser: self.browser.map(|b| Cow::Owned(b.into_owned())),
            version: self.version.map(|v| Cow::Owned(v.into_owned())),
        }
    }
}

impl fmt::Display for ParseResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.browser, &self.version) {
            (Some(b), Some(v)) => write!(f, "{b} {v}")?,
            (Some(b), None) => write!(f, "{b}")?,
            _ => write!(f, "unknown")?,
        }
        if let Some(p) = &self.platform {
            write!(f, " ({p})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_skips_missing_fields() {
        let r = ParseResult {
            platform: Some("Linux".into()),
            browser: Some("Firefox".into()),
            version: Some("115.0".into()),
        };
        assert_eq!(r.to_string(), "Firefox 115.0 (Linux)");

        let r = ParseResult {
            platform: None,
            browser: Some("curl".into()),
            version: None,
        };
        assert_eq!(r.to_string(), "curl");
        assert_eq!(ParseResult::default().to_string(), "unknown");
    }

    #[test]
    fn serializes_with_null_fields() {
        let r = ParseResult {
            platform: Some("Windows".into()),
            browser: None,
            version: None,
        };
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"platform":"Windows","browser":null,"version":null}"#);
    }

    #[test]
    fn into_owned_keeps_values() {
        let ua = String::from("Wget/1.21");
        let r = ParseResult {
            platform: None,
            browser: Some(Cow::Borrowed(&ua[..4])),
            version: Some(Cow::Borrowed(&ua[5..])),
        };
        let owned = r.into_owned();
        drop(ua);
        assert_eq!(owned.browser(), Some("Wget"));
        assert_eq!(owned.version(), Some("1.21"));
        assert!(!owned.is_empty());
    }
}
