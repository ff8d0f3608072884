/// Inline link `[text](url)`.
///
/// Link text may not contain brackets; the url may not contain `)`. Neither
/// part may cross a line break.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: &'static [u8; 2] = b"](";
    pub const CLOSE: u8 = b')';

    /// Schemes rendered as live links. Urls without a scheme are relative.
    pub const SAFE_SCHEMES: [&'static str; 3] = ["http", "https", "mailto"];

    /// Whether `b` may appear inside the link text.
    pub fn is_text_byte(b: u8) -> bool {
        b != Self::OPEN && b != Self::TEXT_CLOSE && b != b'\n'
    }

    /// Whether `b` may appear inside the url.
    pub fn is_url_byte(b: u8) -> bool {
        b != Self::CLOSE && b != b'\n'
    }

    /// Whether `url` may be emitted as an `href`.
    ///
    /// Browsers drop tabs and line breaks and skip leading control
    /// characters before reading the scheme, so the check does the same.
    pub fn is_safe_url(url: &str) -> bool {
        let cleaned: String = url
            .chars()
            .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
            .collect();
        let cleaned = cleaned.trim_start_matches(|c: char| c <= ' ');

        let Some(colon) = cleaned.find(':') else {
            return true;
        };
        // a colon after the first path, query or fragment delimiter is not a scheme
        if cleaned[..colon].contains(['/', '?', '#']) {
            return true;
        }
        let scheme = &cleaned[..colon];
        Self::SAFE_SCHEMES
            .iter()
            .any(|safe| safe.eq_ignore_ascii_case(scheme))
    }
}
