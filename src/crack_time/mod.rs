//! Brute-force crack time estimation.
//!
//! A password is bucketed into a [`CharacterClass`] by composition, then its
//! length in code points selects a literal from that class's
//! [`CrackTimeTable`]. No dictionary or repetition analysis is involved.

mod classes;
mod table;

pub use classes::{CharacterClass, classify};
pub use table::{A_LOT_OF_TIME, CrackTimeTable, INSTANTLY, MAX_TABLE_LENGTH};

/// Returned for passwords no character class accepts.
pub const UNKNOWN: &str = "unknown";

/// Estimates how long a brute-force attack needs to guess `password`.
///
/// Always returns one of the table literals, [`INSTANTLY`],
/// [`A_LOT_OF_TIME`] or [`UNKNOWN`]. Pure and total over all strings.
///
/// # Example
///
/// ```rust
/// use pwd_crack_time::estimate_crack_time;
///
/// assert_eq!(estimate_crack_time("12345678901234"), "3 minutes");
/// assert_eq!(estimate_crack_time("short"), "instantly");
/// ```
pub fn estimate_crack_time(password: &str) -> &'static str {
    let length = password.chars().count();
    let class = classify(password);

    #[cfg(feature = "tracing")]
    tracing::debug!(%class, length, "estimating crack time");

    match class.table() {
        Some(table) => table.lookup(length),
        None => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(n: usize) -> String {
        (0..n).map(|i| char::from(b'0' + (i % 10) as u8)).collect()
    }

    #[test]
    fn test_numeric_below_threshold_is_instant() {
        for n in 1..12 {
            assert_eq!(estimate_crack_time(&digits(n)), INSTANTLY, "length {}", n);
        }
    }

    #[test]
    fn test_numeric_table() {
        let expected = [
            (12, "2 seconds"),
            (13, "19 seconds"),
            (14, "3 minutes"),
            (15, "32 minutes"),
            (16, "5 hours"),
            (17, "2 days"),
            (18, "3 weeks"),
        ];
        for (n, literal) in expected {
            assert_eq!(estimate_crack_time(&digits(n)), literal, "length {}", n);
        }
    }

    #[test]
    fn test_numeric_above_table_is_a_lot_of_time() {
        for n in [19, 20, 64, 500] {
            assert_eq!(estimate_crack_time(&digits(n)), A_LOT_OF_TIME);
        }
    }

    #[test]
    fn test_empty_password_is_instant() {
        assert_eq!(classify(""), CharacterClass::LowercaseOnly);
        assert_eq!(estimate_crack_time(""), INSTANTLY);
    }

    #[test]
    fn test_uppercase_letters() {
        assert_eq!(estimate_crack_time("ABCDEFGH"), "2 minutes");
        assert_eq!(estimate_crack_time("ABCDEF"), INSTANTLY);
    }

    #[test]
    fn test_mixed_with_symbol() {
        let pwd = "abc12345XY!";
        assert_eq!(pwd.chars().count(), 11);
        assert_eq!(estimate_crack_time(pwd), "34 years");
    }

    #[test]
    fn test_lowercase_uses_its_own_table() {
        // Also matches the symbol class, whose table would say "5 months".
        assert_eq!(estimate_crack_time("abcdefghij"), "4 minutes");
        assert_eq!(estimate_crack_time("abcdefghi"), "10 seconds");
        assert_eq!(estimate_crack_time("abcdefghijklmnopqr"), "2m years");
        assert_eq!(estimate_crack_time("abcdefghijklmnopqrs"), A_LOT_OF_TIME);
    }

    #[test]
    fn test_alphanumeric() {
        assert_eq!(estimate_crack_time("abc1234"), "7 seconds");
        assert_eq!(estimate_crack_time("Abcdef123456789012"), "11tn years");
    }

    #[test]
    fn test_length_counts_code_points() {
        // 9 code points, 18 UTF-8 bytes.
        let pwd = "ééééééééé";
        assert_eq!(pwd.len(), 18);
        assert_eq!(estimate_crack_time(pwd), "10 seconds");

        // Astral characters count once each.
        let emoji = "🔑🔑🔑🔑🔑🔑🔑🔑🔑";
        assert_eq!(estimate_crack_time(emoji), "10 seconds");
    }

    #[test]
    fn test_unclassified_is_unknown() {
        assert_eq!(estimate_crack_time("correct horse battery staple"), UNKNOWN);
        assert_eq!(estimate_crack_time("\u{0007}"), UNKNOWN);
    }

    #[test]
    fn test_idempotent() {
        for pwd in ["", "1234567890123", "Tr0ub4dor&3", "pass word", "ÄÖÜäöü"] {
            assert_eq!(estimate_crack_time(pwd), estimate_crack_time(pwd));
        }
    }

    #[test]
    fn test_concurrent_callers_agree() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| estimate_crack_time("P@ssw0rd1234")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "3k years");
        }
    }
}
