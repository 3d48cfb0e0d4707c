//! Hasher panel - every digest of one password.

use secrecy::{ExposeSecret, SecretString};

use super::PanelError;
use crate::backend::{HashAlgorithm, PasswordBackend};
use crate::config::{BCRYPT_ROUNDS_RANGE, HashOptions, ShaVariant, check_range};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashDigests {
    pub md5: String,
    pub base64: String,
    pub bcrypt: String,
    pub sha1: String,
    pub sha224: String,
    pub sha256: String,
    pub sha384: String,
    pub sha512: String,
}

impl HashDigests {
    pub fn sha(&self, variant: ShaVariant) -> &str {
        match variant {
            ShaVariant::Sha1 => &self.sha1,
            ShaVariant::Sha224 => &self.sha224,
            ShaVariant::Sha256 => &self.sha256,
            ShaVariant::Sha384 => &self.sha384,
            ShaVariant::Sha512 => &self.sha512,
        }
    }
}

/// Hashes `password` with every supported algorithm.
///
/// An empty password yields empty digests and never reaches the backend.
pub fn hash_all(
    backend: &dyn PasswordBackend,
    password: &SecretString,
    options: &HashOptions,
) -> Result<HashDigests, PanelError> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Ok(HashDigests::default());
    }
    let rounds = check_range("bcrypt_rounds", options.bcrypt_rounds, &BCRYPT_ROUNDS_RANGE)?;

    let hash = |algorithm: HashAlgorithm| backend.hash(algorithm, pwd);

    let mut md5 = hash(HashAlgorithm::Md5)?;
    if options.md5_uppercase {
        md5 = md5.to_uppercase();
    }

    let digests = HashDigests {
        md5,
        base64: hash(HashAlgorithm::Base64)?,
        bcrypt: hash(HashAlgorithm::Bcrypt { rounds })?,
        sha1: hash(HashAlgorithm::Sha1)?,
        sha224: hash(HashAlgorithm::Sha224)?,
        sha256: hash(HashAlgorithm::Sha256)?,
        sha384: hash(HashAlgorithm::Sha384)?,
        sha512: hash(HashAlgorithm::Sha512)?,
    };

    #[cfg(feature = "tracing")]
    tracing::info!("Computed digests with bcrypt cost {}", rounds);

    Ok(digests)
}
