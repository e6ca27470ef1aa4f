//! Free-form input cleanup and WiFi credential padding.

use regex::Regex;
use std::sync::OnceLock;

/// Passwords shorter than this are right-padded with `'0'`.
pub const MIN_PASSWORD_LEN: usize = 8;

static DISALLOWED: OnceLock<Regex> = OnceLock::new();

fn disallowed() -> &'static Regex {
    DISALLOWED.get_or_init(|| {
        Regex::new(r"[^\w\s.\-@#]+").expect("static sanitizer pattern is valid")
    })
}

/// Whether a character renders as visible output on a card.
///
/// Control, format, separator and private-use characters are dropped. The
/// ASCII space is the only whitespace kept.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c,
        '\u{00AD}'
            | '\u{061C}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{E000}'..='\u{F8FF}'
    )
}

/// Strip everything except word characters, spaces, `.`, `-`, `@` and `#`.
///
/// Pure and idempotent: `sanitize(&sanitize(x)) == sanitize(x)`.
pub fn sanitize(text: &str) -> String {
    let printable: String = text.chars().filter(|&c| is_printable(c)).collect();
    disallowed().replace_all(&printable, "").into_owned()
}

/// Pad a short password with `'0'` up to [`MIN_PASSWORD_LEN`] characters.
///
/// The SSID passes through unchanged.
pub fn normalize_credentials(ssid: String, mut password: String) -> (String, String) {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        password.extend(std::iter::repeat_n('0', MIN_PASSWORD_LEN - len));
    }
    (ssid, password)
}
