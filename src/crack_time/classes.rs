//! Character class detection.
//!
//! The predicates overlap: every lowercase-only string is also a letters-only
//! string, and so on. Classification walks them in a fixed order and the
//! first match wins.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::table::{
    ALPHANUMERIC, ALPHANUMERIC_SYMBOL, CrackTimeTable, LOWERCASE_ONLY, NUMERIC,
    UPPERCASE_OR_MIXED_LETTERS,
};

// `\x{80}-\x{10FFFF}` counts every non-ASCII code point as a letter.
static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static LOWERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z\x{80}-\x{10FFFF}]*$").unwrap());
static LETTERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\x{80}-\x{10FFFF}]*$").unwrap());
static ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\x{80}-\x{10FFFF}]*$").unwrap());
static ALPHANUMERIC_SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}\p{S}\p{P}]+$").unwrap());

/// Composition category of a password, as chosen by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Numeric,
    LowercaseOnly,
    UpperCaseOrMixedLetters,
    AlphaNumeric,
    AlphaNumericSymbol,
    Unclassified,
}

impl CharacterClass {
    /// Evaluation order. `Unclassified` is the fallthrough and has no predicate.
    pub const ORDERED: [CharacterClass; 5] = [
        CharacterClass::Numeric,
        CharacterClass::LowercaseOnly,
        CharacterClass::UpperCaseOrMixedLetters,
        CharacterClass::AlphaNumeric,
        CharacterClass::AlphaNumericSymbol,
    ];

    /// Returns `true` if the whole password satisfies this class's pattern,
    /// regardless of whether an earlier class would have claimed it.
    pub fn matches(self, password: &str) -> bool {
        match self.pattern() {
            Some(re) => re.is_match(password),
            None => false,
        }
    }

    /// Crack time table for this class, `None` for `Unclassified`.
    pub fn table(self) -> Option<&'static CrackTimeTable> {
        match self {
            CharacterClass::Numeric => Some(&NUMERIC),
            CharacterClass::LowercaseOnly => Some(&LOWERCASE_ONLY),
            CharacterClass::UpperCaseOrMixedLetters => Some(&UPPERCASE_OR_MIXED_LETTERS),
            CharacterClass::AlphaNumeric => Some(&ALPHANUMERIC),
            CharacterClass::AlphaNumericSymbol => Some(&ALPHANUMERIC_SYMBOL),
            CharacterClass::Unclassified => None,
        }
    }

    fn pattern(self) -> Option<&'static Regex> {
        match self {
            CharacterClass::Numeric => Some(&NUMERIC_RE),
            CharacterClass::LowercaseOnly => Some(&LOWERCASE_RE),
            CharacterClass::UpperCaseOrMixedLetters => Some(&LETTERS_RE),
            CharacterClass::AlphaNumeric => Some(&ALPHANUMERIC_RE),
            CharacterClass::AlphaNumericSymbol => Some(&ALPHANUMERIC_SYMBOL_RE),
            CharacterClass::Unclassified => None,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Numeric => "numeric",
            CharacterClass::LowercaseOnly => "lowercase",
            CharacterClass::UpperCaseOrMixedLetters => "letters",
            CharacterClass::AlphaNumeric => "alphanumeric",
            CharacterClass::AlphaNumericSymbol => "alphanumeric+symbol",
            CharacterClass::Unclassified => "unclassified",
        };
        f.write_str(name)
    }
}

/// Picks the first class in [`CharacterClass::ORDERED`] whose pattern matches.
///
/// The empty string is `LowercaseOnly`: `Numeric` needs at least one digit,
/// the lowercase pattern accepts zero characters.
pub fn classify(password: &str) -> CharacterClass {
    CharacterClass::ORDERED
        .into_iter()
        .find(|class| class.matches(password))
        .unwrap_or(CharacterClass::Unclassified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_digits() {
        assert_eq!(classify("0"), CharacterClass::Numeric);
        assert_eq!(classify("123456789012"), CharacterClass::Numeric);
    }

    #[test]
    fn test_classify_empty_is_lowercase() {
        // Quirk kept on purpose: zero-or-more lowercase accepts "".
        assert!(!CharacterClass::Numeric.matches(""));
        assert!(CharacterClass::LowercaseOnly.matches(""));
        assert_eq!(classify(""), CharacterClass::LowercaseOnly);
    }

    #[test]
    fn test_classify_non_ascii_counts_as_lowercase() {
        assert_eq!(classify("ÄÖÜ"), CharacterClass::LowercaseOnly);
        assert_eq!(classify("пароль"), CharacterClass::LowercaseOnly);
        assert_eq!(classify("密码"), CharacterClass::LowercaseOnly);
        // Non-ASCII digits are not `Numeric`.
        assert_eq!(classify("١٢٣"), CharacterClass::LowercaseOnly);
    }

    #[test]
    fn test_classify_letters() {
        assert_eq!(classify("ABCDEFGH"), CharacterClass::UpperCaseOrMixedLetters);
        assert_eq!(classify("HelloWorld"), CharacterClass::UpperCaseOrMixedLetters);
        assert_eq!(classify("Straße"), CharacterClass::UpperCaseOrMixedLetters);
    }

    #[test]
    fn test_classify_alphanumeric() {
        assert_eq!(classify("abc123"), CharacterClass::AlphaNumeric);
        assert_eq!(classify("Pass1234"), CharacterClass::AlphaNumeric);
    }

    #[test]
    fn test_classify_symbols() {
        assert_eq!(classify("P@ssw0rd!"), CharacterClass::AlphaNumericSymbol);
        assert_eq!(classify("!!!"), CharacterClass::AlphaNumericSymbol);
        assert_eq!(classify("snake_case"), CharacterClass::AlphaNumericSymbol);
        assert_eq!(classify("-"), CharacterClass::AlphaNumericSymbol);
    }

    #[test]
    fn test_classify_whitespace_is_unclassified() {
        assert_eq!(classify("pass word"), CharacterClass::Unclassified);
        assert_eq!(classify(" "), CharacterClass::Unclassified);
        assert_eq!(classify("abc\t"), CharacterClass::Unclassified);
        assert_eq!(classify("line\nbreak"), CharacterClass::Unclassified);
    }

    #[test]
    fn test_first_match_wins_over_broader_classes() {
        let pwd = "lowercase";
        assert!(CharacterClass::AlphaNumericSymbol.matches(pwd));
        assert!(CharacterClass::AlphaNumeric.matches(pwd));
        assert_eq!(classify(pwd), CharacterClass::LowercaseOnly);

        let digits = "4242";
        assert!(CharacterClass::AlphaNumeric.matches(digits));
        assert_eq!(classify(digits), CharacterClass::Numeric);
    }

    #[test]
    fn test_unclassified_has_no_table() {
        assert!(CharacterClass::Unclassified.table().is_none());
        assert!(!CharacterClass::Unclassified.matches("anything"));
        for class in CharacterClass::ORDERED {
            assert!(class.table().is_some());
        }
    }
}
