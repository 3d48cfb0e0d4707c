//! Panel workflows
//!
//! Each panel strings together backend calls and the local crack time
//! estimate for one screen of the application.

mod analyzer;
mod generator;
mod hasher;

use thiserror::Error;

use crate::backend::BackendError;
use crate::config::ConfigError;

pub use analyzer::{AnalysisReport, analyze_password};
pub use generator::{
    GeneratedPassword, apply_word_case, generate_memorable, generate_pin, generate_random,
};
pub use hasher::{HashDigests, hash_all};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PanelError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Operation cancelled")]
    Cancelled,
}
