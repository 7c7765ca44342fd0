//! Token catalogs and lookup tables shared by the extractors and the
//! disambiguation rules. Token lists and versions are matched
//! case-insensitively over ASCII only; `ſ` or the Kelvin sign never stand in
//! for `s` / `k`.

use crate::types::{browser, platform};

/// First parenthesized group of the agent string (the "comment" section).
pub(crate) const COMMENT_BLOCK: &str = r"\((.*?)\)";

/// OS / device tokens looked for inside the comment block.
pub(crate) const PLATFORM_TOKENS: &str = concat!(
    r"BB[0-9]+;|Android|CrOS|Tizen|iPhone|iPad|iPod|Linux|(?:Open|Net|Free)BSD|Macintosh|",
    r"Windows(?: Phone)?|Silk|linux-gnu|BlackBerry|PlayBook|X11|",
    r"(?:New )?Nintendo (?:WiiU?|3?DS|Switch)|Xbox(?: One)?",
);

/// Trailing description after a platform token, up to the next `;`.
pub(crate) const PLATFORM_SUFFIX: &str = r"(?: [^;]*)?(?:;|$)";

/// Client tokens looked for anywhere in the agent string.
pub(crate) const BROWSER_TOKENS: &str = concat!(
    r"Camino|Kindle(?: Fire)?|Firefox|Iceweasel|IceCat|Safari|MSIE|Trident|AppleWebKit|",
    r"TizenBrowser|(?:Headless)?Chrome|YaBrowser|Vivaldi|IEMobile|Opera|OPR|Silk|Midori|Edge|",
    r"CriOS|UCBrowser|Puffin|OculusBrowser|SamsungBrowser|",
    r"Baiduspider|Googlebot|YandexBot|bingbot|Lynx|Version|Wget|curl|",
    r"Valve Steam Tenfoot|",
    r"NintendoBrowser|PLAYSTATION (?:[0-9]|Vita)+",
);

/// Version adjacent to a client token. The second branch accepts a bare
/// `Token/` with no usable version.
pub(crate) const BROWSER_SUFFIX: &str =
    r"(?i-u:(?:\)?;?)(?:[:/ ](?P<version>[0-9A-Z.]+)|/(?:[A-Z]*)))";

/// Revision marker used by Gecko and Trident.
pub(crate) const REVISION: &str = r"rv:(?P<version>[0-9A-Z.]+)";

/// Bespoke agents outside the catalog: `Token[/Version]` not starting with Mozilla.
/// Letter classes are spelled out so only ASCII letters match.
pub(crate) const FALLBACK: &str =
    r"^(?![Mm][Oo][Zz][Ii][Ll][Ll][Aa])(?P<browser>[A-Za-z0-9\-]+)(?:/(?P<version>[0-9A-Za-z.]+))?";

/// Tie-break when the comment block names several platforms, highest first.
pub(crate) const PLATFORM_PRIORITY: [&str; 10] = [
    platform::XBOX_ONE,
    platform::XBOX,
    platform::WINDOWS_PHONE,
    platform::TIZEN,
    platform::ANDROID,
    platform::FREEBSD,
    platform::NETBSD,
    platform::OPENBSD,
    "CrOS",
    "X11",
];

/// Puffin appends a two-letter device code to its version.
pub(crate) const PUFFIN_DEVICES: [(&str, &str); 6] = [
    ("IP", platform::IPHONE),
    ("IT", platform::IPAD),
    ("AP", platform::ANDROID),
    ("AT", platform::ANDROID),
    ("WP", platform::WINDOWS_PHONE),
    ("WT", platform::WINDOWS),
];

/// Clients reported verbatim with their own version, most specific first.
pub(crate) const PLAIN_BROWSERS: [&str; 9] = [
    browser::IEMOBILE,
    browser::EDGE,
    browser::MIDORI,
    browser::VIVALDI,
    browser::OCULUS_BROWSER,
    browser::SAMSUNG_BROWSER,
    browser::VALVE_STEAM_TENFOOT,
    browser::CHROME,
    browser::HEADLESS_CHROME,
];

pub(crate) fn puffin_device(code: &str) -> Option<&'static str> {
    PUFFIN_DEVICES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
