//! Generator panel - random, memorable and PIN passwords.

use secrecy::SecretString;

use super::PanelError;
use crate::backend::{Complexity, PasswordBackend};
use crate::config::{
    MemorableOptions, PIN_LENGTH_RANGE, RANDOM_LENGTH_RANGE, WORD_COUNT_RANGE, WordCase,
    check_range,
};
use crate::crack_time::estimate_crack_time;
use crate::strength::{StrengthColor, StrengthLabel};

/// A random password together with how it rates.
#[derive(Debug)]
pub struct GeneratedPassword {
    pub password: SecretString,
    pub score: f64,
    pub label: Option<StrengthLabel>,
    pub color: Option<StrengthColor>,
    pub crack_time: &'static str,
}

/// Generates a random password and rates it.
///
/// The score and label come from the backend; the crack time is estimated
/// locally. The two are reported side by side and may disagree.
pub fn generate_random(
    backend: &dyn PasswordBackend,
    options: &Complexity,
) -> Result<GeneratedPassword, PanelError> {
    check_range("length", options.length, &RANDOM_LENGTH_RANGE)?;

    let password = backend.generate_password(options)?;
    let score = backend.score(&password)?;
    let crack_time = estimate_crack_time(&password);

    #[cfg(feature = "tracing")]
    tracing::info!(length = options.length, score, crack_time, "random password generated");

    Ok(GeneratedPassword {
        password: SecretString::new(password.into()),
        score,
        label: StrengthLabel::from_score(score),
        color: StrengthColor::from_score(score),
        crack_time,
    })
}

/// Generates a passphrase from backend words.
///
/// An empty separator joins words with a single space. Whitespace is outside
/// every character class, so such a phrase estimates as
/// [`UNKNOWN`](crate::UNKNOWN) crack time.
pub fn generate_memorable(
    backend: &dyn PasswordBackend,
    options: &MemorableOptions,
) -> Result<SecretString, PanelError> {
    check_range("words", options.words, &WORD_COUNT_RANGE)?;

    let words = backend.generate_words(options.words, options.full_words)?;
    let separator = if options.separator.is_empty() {
        " "
    } else {
        options.separator.as_str()
    };

    let phrase = words
        .iter()
        .map(|w| apply_word_case(w, options.case))
        .collect::<Vec<_>>()
        .join(separator);

    Ok(SecretString::new(phrase.into()))
}

pub fn generate_pin(
    backend: &dyn PasswordBackend,
    length: usize,
) -> Result<SecretString, PanelError> {
    check_range("length", length, &PIN_LENGTH_RANGE)?;
    Ok(SecretString::new(backend.generate_pin(length)?.into()))
}

pub fn apply_word_case(word: &str, case: WordCase) -> String {
    match case {
        WordCase::AsIs => word.to_string(),
        WordCase::Uppercase => word.to_uppercase(),
        WordCase::Capitalize => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
