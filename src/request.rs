//! JSON request/response boundary.
//!
//! Transport-agnostic: callers hand over the raw request body and get back a
//! response value or a [`RequestError`] carrying the status to answer with.

use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::evaluator::evaluate_password_strength;
use crate::types::{PasswordAnalysis, PasswordStrength, StrengthColor, Suggestion};

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("Password is required")]
    MissingPassword,
}

impl RequestError {
    /// HTTP status code to answer with. Both variants are client errors.
    pub fn status_code(&self) -> u16 {
        400
    }

    /// Renders `{"error": "<message>"}`.
    pub fn to_error_body(&self) -> String {
        serde_json::json!({ "error": self.to_string() }).to_string()
    }
}

/// Body of an analyze request: `{ "password": "..." }`.
#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default, deserialize_with = "deserialize_secret")]
    password: Option<SecretString>,
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|pwd| SecretString::new(pwd.into())))
}

impl fmt::Debug for AnalyzeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzeRequest")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AnalyzeRequest {
    /// Decodes a body that must be a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, RequestError> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(RequestError::MalformedBody(serde::de::Error::custom(
                "expected a JSON object",
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Returns the password, rejecting absent or empty values.
    pub fn password(&self) -> Result<&SecretString, RequestError> {
        use secrecy::ExposeSecret;

        match &self.password {
            Some(pwd) if !pwd.expose_secret().is_empty() => Ok(pwd),
            _ => Err(RequestError::MissingPassword),
        }
    }
}

/// Response body carrying the same values as [`PasswordAnalysis`] under the
/// boundary's snake_case names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeResponse {
    pub score: u8,
    pub strength: String,
    pub color: String,
    pub suggestions: Vec<String>,
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub no_repeating: bool,
    pub no_sequential: bool,
}

impl From<&PasswordAnalysis> for AnalyzeResponse {
    fn from(analysis: &PasswordAnalysis) -> Self {
        Self {
            score: analysis.score().value(),
            strength: analysis.strength().label().to_string(),
            color: analysis.color().as_str().to_string(),
            suggestions: analysis
                .suggestions()
                .iter()
                .map(Suggestion::to_string)
                .collect(),
            length: analysis.length(),
            has_uppercase: analysis.has_uppercase(),
            has_lowercase: analysis.has_lowercase(),
            has_digits: analysis.has_numbers(),
            has_special: analysis.has_special_chars(),
            no_repeating: !analysis.consecutive_chars(),
            no_sequential: !analysis.sequential_chars(),
        }
    }
}

impl AnalyzeResponse {
    pub fn strength(&self) -> Option<PasswordStrength> {
        [
            PasswordStrength::Weak,
            PasswordStrength::Moderate,
            PasswordStrength::Strong,
            PasswordStrength::Excellent,
        ]
        .into_iter()
        .find(|s| s.label() == self.strength)
    }

    pub fn color(&self) -> Option<StrengthColor> {
        self.strength().map(PasswordStrength::color)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Decodes a request body, analyzes the password and builds the response.
///
/// # Errors
///
/// Returns error if:
/// - Body is not a JSON object with an optional string `password`
/// - Password is missing or empty
pub fn handle_analyze_request(body: &[u8]) -> Result<AnalyzeResponse, RequestError> {
    let request = AnalyzeRequest::from_slice(body).inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected analyze request: {}", _e);
    })?;
    let password = request.password()?;

    let analysis = evaluate_password_strength(password);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Analyzed password: score {}, strength {}",
        analysis.score(),
        analysis.strength()
    );

    Ok(AnalyzeResponse::from(&analysis))
}
