/// Citation token `[^id]` referencing an entry in the article's reference list.
pub struct Citation;

impl Citation {
    pub const OPEN: &'static [u8; 2] = b"[^";
    pub const CLOSE: u8 = b']';

    /// Whether `b` may appear in a citation id.
    pub fn is_id_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_bytes() {
        for b in b"azAZ09_-" {
            assert!(Citation::is_id_byte(*b), "{}", *b as char);
        }
        for b in b" ]^.:" {
            assert!(!Citation::is_id_byte(*b), "{}", *b as char);
        }
    }
}
