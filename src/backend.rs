//! Boundary to the native backend.
//!
//! Generation, scoring, structural analysis, hashing and the common-password
//! lookup live behind [`PasswordBackend`]. This crate only calls them.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    #[error("Backend command `{command}` failed: {message}")]
    Invocation { command: &'static str, message: String },
    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
    #[error("Backend is not available")]
    Unavailable,
}

/// Options for random password generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complexity {
    pub length: usize,
    pub symbols: bool,
    pub numbers: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub spaces: bool,
    pub exclude_similar_characters: bool,
    pub strict: bool,
}

/// Structural breakdown of a password as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzedResult {
    pub length: usize,
    pub spaces_count: usize,
    pub numbers_count: usize,
    pub lowercase_letters_count: usize,
    pub uppercase_letters_count: usize,
    pub symbols_count: usize,
    pub other_characters_count: usize,
    pub consecutive_count: usize,
    pub non_consecutive_count: usize,
    pub progressive_count: usize,
    pub is_common: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Base64,
    Bcrypt { rounds: u32 },
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Backend command name.
    pub fn command(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Base64 => "base64",
            HashAlgorithm::Bcrypt { .. } => "bcrypt",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }
}

/// Remote operations provided by the native backend.
///
/// Scores are expected in `[0, 100]`; values outside that range are passed
/// through and simply get no [`StrengthLabel`](crate::StrengthLabel).
pub trait PasswordBackend: Send + Sync {
    fn generate_password(&self, options: &Complexity) -> Result<String, BackendError>;

    fn generate_words(&self, count: usize, full_words: bool) -> Result<Vec<String>, BackendError>;

    fn generate_pin(&self, length: usize) -> Result<String, BackendError>;

    fn score(&self, password: &str) -> Result<f64, BackendError>;

    fn analyze(&self, password: &str) -> Result<AnalyzedResult, BackendError>;

    fn is_common_password(&self, password: &str) -> Result<bool, BackendError>;

    fn hash(&self, algorithm: HashAlgorithm, password: &str) -> Result<String, BackendError>;
}
