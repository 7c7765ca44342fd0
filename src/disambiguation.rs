//! Ordered rule chain turning raw candidates into one classification.
//!
//! Rules are tried top to bottom and the first one that applies decides the
//! browser and version (and sometimes overrides the platform). Order matters:
//! `AppleWebKit`, `Safari`, `Chrome` and `Version` routinely co-occur.

use std::borrow::Cow;

use super::candidates::CandidateSet;
use super::catalog::{puffin_device, PLAIN_BROWSERS};
use super::helpers::*;
use super::types::{browser, platform};

/// Inputs shared by every rule.
pub(crate) struct Context<'a> {
    pub platform: Option<Cow<'a, str>>,
    pub candidates: CandidateSet<'a>,
    pub revision: Option<&'a str>,
}

/// Outcome of the chain, before unset values are nulled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolution<'a> {
    pub platform: Option<Cow<'a, str>>,
    pub browser: Cow<'a, str>,
    pub version: &'a str,
}

type Rule = for<'a> fn(&Context<'a>) -> Option<Resolution<'a>>;

const RULES: &[(&str, Rule)] = &[
    ("firefox-rebrand", firefox_rebrand),
    ("playstation-vita", playstation_vita),
    ("kindle-fire", kindle_fire),
    ("nintendo", nintendo),
    ("kindle", kindle),
    ("opera-next", opera_next),
    ("opera", opera),
    ("puffin", puffin),
    ("yandex", yandex),
    ("plain", plain),
    ("trident-revision", trident_revision),
    ("uc-browser", uc_browser),
    ("chrome-ios", chrome_ios),
    ("webkit", webkit),
    ("playstation", playstation),
];

/// Run the chain. With no applicable rule the first candidate stands as is.
pub(crate) fn resolve<'a>(cx: &Context<'a>) -> Resolution<'a> {
    for (name, rule) in RULES {
        if let Some(resolution) = rule(cx) {
            tracing::trace!(
                rule = *name,
                browser = %resolution.browser,
                "disambiguation rule applied"
            );
            return resolution;
        }
    }
    Resolution {
        platform: cx.platform.clone(),
        browser: Cow::Borrowed(cx.candidates.token(0)),
        version: cx.candidates.version(0),
    }
}

impl<'a> Context<'a> {
    fn keep_platform(&self, browser: impl Into<Cow<'a, str>>, version: &'a str) -> Resolution<'a> {
        Resolution {
            platform: self.platform.clone(),
            browser: browser.into(),
            version,
        }
    }

    fn first_token(&self) -> &'a str {
        self.candidates.token(0)
    }

    /// `browser` renamed, with the version of the `token` candidate.
    fn renamed(&self, token: &'static str, browser: &'static str) -> Option<Resolution<'a>> {
        let found = self.candidates.find(&[token])?;
        Some(self.keep_platform(browser, self.candidates.version(found.index)))
    }
}

fn firefox_rebrand<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    let first = cx.first_token();
    (first == "Iceweasel" || first.eq_ignore_ascii_case("IceCat"))
        .then(|| cx.keep_platform(browser::FIREFOX, cx.candidates.version(0)))
}

fn playstation_vita<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    cx.candidates.find(&["Playstation Vita"])?;
    Some(Resolution {
        platform: Some(Cow::Borrowed(platform::PLAYSTATION_VITA)),
        browser: Cow::Borrowed(browser::BROWSER),
        version: cx.candidates.version(0),
    })
}

fn kindle_fire<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    let found = cx.candidates.find(&["Kindle Fire", "Silk"])?;
    let name = if found.name == "Silk" {
        browser::SILK
    } else {
        browser::KINDLE
    };
    let mut version = cx.candidates.version(found.index);
    if is_unset(version) || !starts_with_digit(version) {
        version = cx
            .candidates
            .version(cx.candidates.position("Version").unwrap_or(0));
    }
    Some(Resolution {
        platform: Some(Cow::Borrowed(platform::KINDLE_FIRE)),
        browser: Cow::Borrowed(name),
        version,
    })
}

fn nintendo<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    let found = cx.candidates.find(&["NintendoBrowser"]);
    if found.is_none() && cx.platform.as_deref() != Some(platform::NINTENDO_3DS) {
        return None;
    }
    let index = found.map_or(0, |f| f.index);
    Some(cx.keep_platform(browser::NINTENDO_BROWSER, cx.candidates.version(index)))
}

fn kindle<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    let found = cx.candidates.find(&["Kindle"])?;
    Some(Resolution {
        platform: Some(Cow::Borrowed(platform::KINDLE)),
        browser: Cow::Borrowed(cx.candidates.token(found.index)),
        version: cx.candidates.version(found.index),
    })
}

fn opera_next<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    cx.renamed("OPR", browser::OPERA_NEXT)
}

fn opera<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    let found = cx.candidates.find(&[browser::OPERA])?;
    let index = cx.candidates.find(&["Version"]).map_or(found.index, |v| v.index);
    Some(cx.keep_platform(browser::OPERA, cx.candidates.version(index)))
}

fn puffin<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    let found = cx.candidates.find(&[browser::PUFFIN])?;
    let (version, code) = split_device_code(cx.candidates.version(found.index));
    let device = match code.and_then(puffin_device) {
        Some(device) => Some(Cow::Borrowed(device)),
        None => cx.platform.clone(),
    };
    Some(Resolution {
        platform: device,
        browser: Cow::Borrowed(browser::PUFFIN),
        version,
    })
}

fn yandex<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    cx.renamed("YaBrowser", browser::YANDEX)
}

fn plain<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    let found = cx.candidates.find(&PLAIN_BROWSERS)?;
    Some(cx.keep_platform(found.name, cx.candidates.version(found.index)))
}

fn trident_revision<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    let revision = cx.revision.filter(|rv| !is_unset(rv))?;
    cx.candidates.find(&["Trident"])?;
    Some(cx.keep_platform(browser::MSIE, revision))
}

fn uc_browser<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    cx.renamed("UCBrowser", browser::UC_BROWSER)
}

fn chrome_ios<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    cx.renamed("CriOS", browser::CHROME)
}

fn webkit<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    if cx.first_token() != "AppleWebKit" {
        return None;
    }

    let current = cx.platform.as_deref();
    let mut device = cx.platform.clone();
    // Version source when no `Version` token exists.
    let mut index = 0;

    let name: Cow<'a, str> = if current == Some(platform::ANDROID) {
        Cow::Borrowed(browser::ANDROID_BROWSER)
    } else if current.is_some_and(|p| p.starts_with("BB")) {
        device = Some(Cow::Borrowed(platform::BLACKBERRY));
        Cow::Borrowed(browser::BLACKBERRY_BROWSER)
    } else if matches!(current, Some(platform::BLACKBERRY | platform::PLAYBOOK)) {
        Cow::Borrowed(browser::BLACKBERRY_BROWSER)
    } else if let Some(found) = cx
        .candidates
        .find(&[browser::SAFARI, browser::TIZEN_BROWSER])
    {
        index = found.index;
        Cow::Borrowed(found.name)
    } else {
        Cow::Borrowed(cx.first_token())
    };

    let index = cx.candidates.find(&["Version"]).map_or(index, |v| v.index);
    Some(Resolution {
        platform: device,
        browser: name,
        version: cx.candidates.version(index),
    })
}

fn playstation<'a>(cx: &Context<'a>) -> Option<Resolution<'a>> {
    let token = cx
        .candidates
        .iter()
        .map(|c| c.token)
        .find(|t| is_numbered_playstation(t))?;
    Some(Resolution {
        platform: Some(Cow::Owned(format!("PlayStation {}", ascii_digits(token)))),
        browser: Cow::Borrowed(browser::NETFRONT),
        version: cx.candidates.version(0),
    })
}
