// src/core/normalizer.rs

/// Canonicalizes raw input: trims and collapses whitespace runs to a single
/// ASCII space. Idempotent; empty input stays empty and callers treat it as
/// "no input".
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The stricter form used for dictionary keys: `normalize` plus lowercasing.
pub fn normalize_key(raw: &str) -> String {
    normalize(raw).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(normalize("  Dark   Magician \t"), "Dark Magician");
        assert_eq!(normalize("one\n\ttwo"), "one two");
    }

    #[test]
    fn is_idempotent() {
        for s in ["", "  a  b ", "Dark Magician", " \t\n "] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn empty_and_blank_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn key_form_lowercases() {
        assert_eq!(normalize_key("  Dark  MAGICIAN"), "dark magician");
    }
}
