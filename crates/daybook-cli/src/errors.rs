//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes. Core errors reaching `main`
//! through `anyhow` are classified by [`exit_code_for`].

use std::fmt;

use daybook_core::DaybookError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Entry or record not found
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// The health assistant is unreachable or not configured
    AdviceUnavailable(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) | CliError::AdviceUnavailable(message) => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::AdviceUnavailable(_) => exit_codes::ADVICE_UNAVAILABLE,
        }
    }
}

/// Exit code for any error returned by a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<DaybookError>() {
        Some(DaybookError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(DaybookError::InvalidInput(_)) | Some(DaybookError::Validation(_)) => {
            exit_codes::INVALID_INPUT
        }
        Some(DaybookError::Advice(_)) => exit_codes::ADVICE_UNAVAILABLE,
        _ => exit_codes::GENERAL,
    }
}
