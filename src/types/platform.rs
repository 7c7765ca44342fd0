//! Canonical platform names.
//!
//! Tokens matched in the comment block pass through with their original
//! casing; these constants are the names the parser substitutes when it
//! normalizes or overrides a platform.

pub const ANDROID: &str = "Android";
pub const BLACKBERRY: &str = "BlackBerry";
pub const CHROME_OS: &str = "Chrome OS";
pub const FREEBSD: &str = "FreeBSD";
pub const IPAD: &str = "iPad";
pub const IPHONE: &str = "iPhone";
pub const IPOD: &str = "iPod";
pub const KINDLE: &str = "Kindle";
pub const KINDLE_FIRE: &str = "Kindle Fire";
pub const LINUX: &str = "Linux";
pub const MACINTOSH: &str = "Macintosh";
pub const NETBSD: &str = "NetBSD";
pub const NEW_NINTENDO_3DS: &str = "New Nintendo 3DS";
pub const NINTENDO_3DS: &str = "Nintendo 3DS";
pub const NINTENDO_DS: &str = "Nintendo DS";
pub const NINTENDO_SWITCH: &str = "Nintendo Switch";
pub const NINTENDO_WII: &str = "Nintendo Wii";
pub const NINTENDO_WIIU: &str = "Nintendo WiiU";
pub const OPENBSD: &str = "OpenBSD";
pub const PLAYBOOK: &str = "PlayBook";
pub const PLAYSTATION_VITA: &str = "PlayStation Vita";
pub const TIZEN: &str = "Tizen";
pub const WINDOWS: &str = "Windows";
pub const WINDOWS_PHONE: &str = "Windows Phone";
pub const XBOX: &str = "Xbox";
pub const XBOX_ONE: &str = "Xbox One";
