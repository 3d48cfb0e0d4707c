//! Application defaults and environment overrides.

use std::ops::RangeInclusive;
use thiserror::Error;

use crate::backend::Complexity;

pub const RANDOM_LENGTH_RANGE: RangeInclusive<usize> = 4..=128;
pub const WORD_COUNT_RANGE: RangeInclusive<usize> = 3..=20;
pub const PIN_LENGTH_RANGE: RangeInclusive<usize> = 3..=12;
pub const BCRYPT_ROUNDS_RANGE: RangeInclusive<u32> = 4..=12;

pub const RANDOM_LENGTH_ENV: &str = "PWD_RANDOM_LENGTH";
pub const PIN_LENGTH_ENV: &str = "PWD_PIN_LENGTH";
pub const BCRYPT_ROUNDS_ENV: &str = "PWD_BCRYPT_ROUNDS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

/// Checks `value` against `range`, reporting it under `key`.
pub fn check_range<T>(
    key: &'static str,
    value: T,
    range: &RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    T: PartialOrd + Copy + TryInto<u64>,
{
    if range.contains(&value) {
        return Ok(value);
    }
    let wide = |v: T| v.try_into().unwrap_or(u64::MAX);
    Err(ConfigError::OutOfRange {
        key,
        value: wide(value),
        min: wide(*range.start()),
        max: wide(*range.end()),
    })
}

/// How each word of a memorable password is cased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordCase {
    #[default]
    AsIs,
    Capitalize,
    Uppercase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorableOptions {
    pub words: usize,
    pub full_words: bool,
    pub case: WordCase,
    pub separator: String,
}

impl Default for MemorableOptions {
    fn default() -> Self {
        Self {
            words: 4,
            full_words: true,
            case: WordCase::AsIs,
            separator: "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShaVariant {
    Sha1,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashOptions {
    pub bcrypt_rounds: u32,
    pub md5_uppercase: bool,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            bcrypt_rounds: 10,
            md5_uppercase: false,
        }
    }
}

/// Defaults for every panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub random: Complexity,
    pub memorable: MemorableOptions,
    pub pin_length: usize,
    pub hash: HashOptions,
    pub sha_variant: ShaVariant,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            random: Complexity {
                length: 20,
                symbols: false,
                numbers: true,
                uppercase: true,
                lowercase: true,
                spaces: false,
                exclude_similar_characters: false,
                strict: true,
            },
            memorable: MemorableOptions::default(),
            pin_length: 6,
            hash: HashOptions::default(),
            sha_variant: ShaVariant::default(),
        }
    }
}

impl Settings {
    /// Builds settings from defaults, overridden by environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_RANDOM_LENGTH`: random password length (4-128, default 20)
    /// - `PWD_PIN_LENGTH`: PIN length (3-12, default 6)
    /// - `PWD_BCRYPT_ROUNDS`: bcrypt cost (4-12, default 10)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but not a number, or out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(length) = read_env::<usize>(RANDOM_LENGTH_ENV)? {
            settings.random.length = check_range(RANDOM_LENGTH_ENV, length, &RANDOM_LENGTH_RANGE)?;
        }
        if let Some(length) = read_env::<usize>(PIN_LENGTH_ENV)? {
            settings.pin_length = check_range(PIN_LENGTH_ENV, length, &PIN_LENGTH_RANGE)?;
        }
        if let Some(rounds) = read_env::<u32>(BCRYPT_ROUNDS_ENV)? {
            settings.hash.bcrypt_rounds =
                check_range(BCRYPT_ROUNDS_ENV, rounds, &BCRYPT_ROUNDS_RANGE)?;
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Settings loaded: {:?}", settings);

        Ok(settings)
    }
}

fn read_env<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        Err(_) => Ok(None),
    }
}
