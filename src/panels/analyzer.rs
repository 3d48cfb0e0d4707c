//! Analyzer panel - structural breakdown, score and crack time for one password.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use super::PanelError;
use crate::backend::{AnalyzedResult, PasswordBackend};
use crate::crack_time::estimate_crack_time;
use crate::strength::{StrengthColor, StrengthLabel};

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub analysis: AnalyzedResult,
    pub score: f64,
    pub label: Option<StrengthLabel>,
    pub color: Option<StrengthColor>,
    pub crack_time: &'static str,
}

/// Analyzes a password. Returns `Ok(None)` for an empty password.
pub fn analyze_password(
    backend: &dyn PasswordBackend,
    password: &SecretString,
) -> Result<Option<AnalysisReport>, PanelError> {
    #[cfg(feature = "async")]
    let report = run_analysis(backend, password, None);

    #[cfg(not(feature = "async"))]
    let report = run_analysis(backend, password);

    report
}

fn run_analysis(
    backend: &dyn PasswordBackend,
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<&CancellationToken>,
) -> Result<Option<AnalysisReport>, PanelError> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Ok(None);
    }

    // Orchestrator: each backend step is checked for cancellation first
    let check_cancelled = || -> Result<(), PanelError> {
        #[cfg(feature = "async")]
        {
            if let Some(t) = token {
                if t.is_cancelled() {
                    return Err(PanelError::Cancelled);
                }
            }
        }
        Ok(())
    };

    check_cancelled()?;
    let analysis = backend.analyze(pwd)?;
    check_cancelled()?;
    let score = backend.score(pwd)?;

    Ok(Some(AnalysisReport {
        analysis,
        score,
        label: StrengthLabel::from_score(score),
        color: StrengthColor::from_score(score),
        crack_time: estimate_crack_time(pwd),
    }))
}

/// Async version that sends the report via channel.
///
/// Nothing is sent when the token is cancelled, when the password is empty
/// or when the backend fails.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    backend: &dyn PasswordBackend,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    let report = match run_analysis(backend, password, Some(&token)) {
        Ok(Some(report)) => report,
        Ok(None) => return,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Password analysis failed: {}", _e);
            return;
        }
    };

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
    }
}
