//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{detect_traits, SECTIONS};
use crate::types::PasswordAnalysis;

/// Delay before a debounced evaluation runs, letting newer keystrokes supersede it.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Analyzes a password and returns score, strength and suggestions.
///
/// Pure and infallible: every input, including the empty string and
/// non-ASCII text, yields a complete analysis.
pub fn analyze(password: &str) -> PasswordAnalysis {
    let traits = detect_traits(password);

    let mut points = 0;
    let mut suggestions = Vec::new();

    // Orchestrator: execute sections in sequence
    for section_fn in SECTIONS {
        let outcome = section_fn(&traits);
        points += outcome.points;
        suggestions.extend(outcome.suggestions);
    }

    PasswordAnalysis::new(traits, points, suggestions)
}

/// Evaluates password strength without copying the secret out.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordAnalysis` with the detected traits, score and suggestions.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordAnalysis {
    analyze(password.expose_secret())
}

/// Debounced evaluation that sends the result via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled before the wait ends the
/// evaluation is stale and nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordAnalysis>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded before it started");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let analysis = evaluate_password_strength(password);

    if let Err(_e) = tx.send(analysis).await {
        #[cfg(feature = "tracing")]
        tracing::warn!("Failed to send password analysis: {}", _e);
    }
}
