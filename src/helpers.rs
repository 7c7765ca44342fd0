/// Empty strings and a lone `"0"` count as "no value".
pub(crate) fn is_unset(s: &str) -> bool {
    s.is_empty() || s == "0"
}

pub(crate) fn starts_with_digit(s: &str) -> bool {
    s.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

/// Split a trailing two-letter uppercase code off a version longer than
/// three characters, e.g. `"4.8.0.2965AP"` → `("4.8.0.2965", Some("AP"))`.
pub(crate) fn split_device_code(version: &str) -> (&str, Option<&str>) {
    if version.len() > 3 {
        let cut = version.len() - 2;
        if let (Some(head), Some(code)) = (version.get(..cut), version.get(cut..)) {
            if code.bytes().all(|b| b.is_ascii_uppercase()) {
                return (head, Some(code));
            }
        }
    }
    (version, None)
}

/// `true` when `token` contains `playstation ` (any case) directly followed
/// by a digit.
pub(crate) fn is_numbered_playstation(token: &str) -> bool {
    const MARKER: &str = "playstation ";
    let lower = token.to_ascii_lowercase();
    lower
        .match_indices(MARKER)
        .any(|(i, _)| starts_with_digit(&lower[i + MARKER.len()..]))
}

pub(crate) fn ascii_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}
