//! Text normalization for directory names and user input.
//!
//! One normalization policy is applied uniformly to both sides of every
//! comparison: trim, Unicode lowercase, collapse inner whitespace. No
//! stopword stripping; substring containment already lets "адыгея" find
//! "Республика Адыгея" without it.

/// Normalize raw text into a comparison key.
///
/// Trims leading/trailing whitespace, lowercases, and collapses runs of
/// inner whitespace to a single space. Pure and idempotent:
/// `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize("  Москва  "), "москва");
        assert_eq!(normalize("САНКТ-ПЕТЕРБУРГ"), "санкт-петербург");
    }

    #[test]
    fn test_collapses_inner_whitespace() {
        assert_eq!(normalize("Московская   область"), "московская область");
        assert_eq!(normalize("а\tб\nв"), "а б в");
    }

    #[test]
    fn test_digits_pass_through() {
        assert_eq!(normalize(" 77 "), "77");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_idempotent() {
        for input in ["  Москва  ", "Ханты-Мансийский автономный округ — Югра", "77", ""] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
