//! Local input checks that run before anything reaches the remote model.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]{3,50}$").expect("name pattern is a valid regex"));

/// Letters and spaces only, 3 to 50 characters, surrounding whitespace ignored.
pub fn is_valid_name(input: &str) -> bool {
    NAME_PATTERN.is_match(input.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_names() {
        assert!(is_valid_name("Aarav Sharma"));
        assert!(is_valid_name("Ira"));
        assert!(is_valid_name("  Meera Nair  "));
    }

    #[test]
    fn test_rejects_symbols_and_digits() {
        assert!(!is_valid_name("R2-D2"));
        assert!(!is_valid_name("john_doe"));
        assert!(!is_valid_name("Ana!"));
    }

    #[test]
    fn test_rejects_bad_lengths() {
        assert!(!is_valid_name("Al"));
        assert!(!is_valid_name(""));
        assert!(is_valid_name(&"a".repeat(50)));
        assert!(!is_valid_name(&"a".repeat(51)));
    }
}
