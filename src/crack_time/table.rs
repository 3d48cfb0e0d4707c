//! Length-indexed crack time tables, one per character class.

/// Returned for lengths below a table's minimum.
pub const INSTANTLY: &str = "instantly";

/// Returned for lengths past the last explicit entry.
pub const A_LOT_OF_TIME: &str = "a lot of time";

/// Longest length with an explicit entry in every table.
pub const MAX_TABLE_LENGTH: usize = 18;

/// Crack time literals for one character class.
///
/// `entries[i]` is the estimate for a password of `min_length + i` code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrackTimeTable {
    pub min_length: usize,
    pub entries: &'static [&'static str],
}

impl CrackTimeTable {
    /// Returns the estimate for a password of `length` code points.
    ///
    /// Total over `usize`: below the minimum yields [`INSTANTLY`], anything
    /// without an explicit entry above it yields [`A_LOT_OF_TIME`].
    pub fn lookup(&self, length: usize) -> &'static str {
        if length < self.min_length {
            return INSTANTLY;
        }
        self.entries
            .get(length - self.min_length)
            .copied()
            .unwrap_or(A_LOT_OF_TIME)
    }

    /// Last length that maps to an explicit entry, `None` for an empty table.
    pub fn max_length(&self) -> Option<usize> {
        self.entries.len().checked_sub(1).map(|n| self.min_length + n)
    }
}

pub static NUMERIC: CrackTimeTable = CrackTimeTable {
    min_length: 12,
    entries: &[
        "2 seconds",  // 12
        "19 seconds", // 13
        "3 minutes",  // 14
        "32 minutes", // 15
        "5 hours",    // 16
        "2 days",     // 17
        "3 weeks",    // 18
    ],
};

pub static LOWERCASE_ONLY: CrackTimeTable = CrackTimeTable {
    min_length: 9,
    entries: &[
        "10 seconds", // 9
        "4 minutes",  // 10
        "2 hours",    // 11
        "2 days",     // 12
        "2 months",   // 13
        "4 years",    // 14
        "100 years",  // 15
        "3k years",   // 16
        "69k years",  // 17
        "2m years",   // 18
    ],
};

pub static UPPERCASE_OR_MIXED_LETTERS: CrackTimeTable = CrackTimeTable {
    min_length: 7,
    entries: &[
        "2 seconds",   // 7
        "2 minutes",   // 8
        "1 hour",      // 9
        "3 days",      // 10
        "5 months",    // 11
        "24 years",    // 12
        "1k years",    // 13
        "64k years",   // 14
        "3m years",    // 15
        "173m years",  // 16
        "9bn years",   // 17
        "467bn years", // 18
    ],
};

pub static ALPHANUMERIC: CrackTimeTable = CrackTimeTable {
    min_length: 7,
    entries: &[
        "7 seconds",   // 7
        "7 minutes",   // 8
        "7 hours",     // 9
        "3 weeks",     // 10
        "3 years",     // 11
        "200 years",   // 12
        "12k years",   // 13
        "750k years",  // 14
        "46m years",   // 15
        "3bn years",   // 16
        "179bn years", // 17
        "11tn years",  // 18
    ],
};

pub static ALPHANUMERIC_SYMBOL: CrackTimeTable = CrackTimeTable {
    min_length: 7,
    entries: &[
        "31 seconds",  // 7
        "39 minutes",  // 8
        "2 days",      // 9
        "5 months",    // 10
        "34 years",    // 11
        "3k years",    // 12
        "202k years",  // 13
        "16m years",   // 14
        "1bn years",   // 15
        "92bn years",  // 16
        "7tn years",   // 17
        "438tn years", // 18
    ],
};
