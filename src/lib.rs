//! Password crack time estimation library
//!
//! This library estimates how long a brute-force attack needs to guess a
//! password from its character composition and length, and wires that
//! estimate into the generator, hasher and analyzer panels of a password
//! utility whose heavy lifting is done by an external backend.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_RANDOM_LENGTH`: Default random password length (default: 20)
//! - `PWD_PIN_LENGTH`: Default PIN length (default: 6)
//! - `PWD_BCRYPT_ROUNDS`: Default bcrypt cost (default: 10)
//!
//! # Example
//!
//! ```rust
//! use pwd_crack_time::{CharacterClass, classify, estimate_crack_time};
//!
//! assert_eq!(classify("hunter"), CharacterClass::LowercaseOnly);
//! assert_eq!(estimate_crack_time("hunterhunter"), "2 days");
//! assert_eq!(estimate_crack_time("P@ssw0rd"), "39 minutes");
//! assert_eq!(estimate_crack_time("two words"), "unknown");
//! ```

// Internal modules
mod backend;
mod config;
mod crack_time;
mod panels;
mod strength;

// Public API
pub use backend::{AnalyzedResult, BackendError, Complexity, HashAlgorithm, PasswordBackend};
pub use config::{
    BCRYPT_ROUNDS_RANGE, ConfigError, HashOptions, MemorableOptions, PIN_LENGTH_RANGE,
    RANDOM_LENGTH_RANGE, Settings, ShaVariant, WORD_COUNT_RANGE, WordCase,
};
pub use crack_time::{
    A_LOT_OF_TIME, CharacterClass, CrackTimeTable, INSTANTLY, MAX_TABLE_LENGTH, UNKNOWN,
    classify, estimate_crack_time,
};
pub use panels::{
    AnalysisReport, GeneratedPassword, HashDigests, PanelError, analyze_password,
    apply_word_case, generate_memorable, generate_pin, generate_random, hash_all,
};
pub use strength::{StrengthColor, StrengthLabel};

#[cfg(feature = "async")]
pub use panels::analyze_password_tx;
