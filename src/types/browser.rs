//! Canonical browser / client names.

pub const ANDROID_BROWSER: &str = "Android Browser";
pub const BLACKBERRY_BROWSER: &str = "BlackBerry Browser";
/// Generic label for consoles whose built-in browser has no brand.
pub const BROWSER: &str = "Browser";
pub const CHROME: &str = "Chrome";
pub const EDGE: &str = "Edge";
pub const FIREFOX: &str = "Firefox";
pub const HEADLESS_CHROME: &str = "HeadlessChrome";
pub const IEMOBILE: &str = "IEMobile";
pub const KINDLE: &str = "Kindle";
pub const MIDORI: &str = "Midori";
pub const MSIE: &str = "MSIE";
pub const NETFRONT: &str = "NetFront";
pub const NINTENDO_BROWSER: &str = "NintendoBrowser";
pub const OCULUS_BROWSER: &str = "OculusBrowser";
pub const OPERA: &str = "Opera";
pub const OPERA_NEXT: &str = "Opera Next";
pub const PUFFIN: &str = "Puffin";
pub const SAFARI: &str = "Safari";
pub const SAMSUNG_BROWSER: &str = "SamsungBrowser";
pub const SILK: &str = "Silk";
pub const TIZEN_BROWSER: &str = "TizenBrowser";
pub const UC_BROWSER: &str = "UC Browser";
pub const VALVE_STEAM_TENFOOT: &str = "Valve Steam Tenfoot";
pub const VIVALDI: &str = "Vivaldi";
pub const YANDEX: &str = "Yandex";
