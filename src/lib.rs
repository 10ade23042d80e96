//! Password strength analysis library
//!
//! This library scores a password with a fixed set of local heuristics and
//! returns a 0-9 score, a strength label with a color token, and an ordered
//! list of improvement suggestions.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: JSON request/response boundary and `Serialize` for the result types
//! - `cli`: The `pwd-analyzer` command-line tool
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{analyze, PasswordStrength};
//!
//! let analysis = analyze("Tr0ub4dor&9xyz");
//!
//! assert_eq!(analysis.score().value(), 8);
//! assert_eq!(analysis.strength(), PasswordStrength::Excellent);
//! assert_eq!(analysis.suggestion_messages(), vec!["Avoid sequential characters."]);
//! ```

// Internal modules
mod batch;
mod evaluator;
mod sections;
mod types;

#[cfg(feature = "serde")]
mod request;

#[cfg(feature = "cli")]
pub mod cli;

// Public API
pub use batch::{analyze_file, analyze_reader, BatchError};
pub use evaluator::{analyze, evaluate_password_strength};
pub use types::{
    PasswordAnalysis, PasswordScore, PasswordStrength, PasswordTraits, StrengthColor, Suggestion,
};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, DEBOUNCE};

#[cfg(feature = "serde")]
pub use request::{handle_analyze_request, AnalyzeRequest, AnalyzeResponse, RequestError};
