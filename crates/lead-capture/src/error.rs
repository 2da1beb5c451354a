//! Lead Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, LeadError>;

/// Lead-related errors
#[derive(Error, Debug)]
pub enum LeadError {
    /// Form data failed validation; the text is visitor-facing
    #[error("Invalid lead: {0}")]
    Validation(String),

    /// Transport failure talking to the hosted table
    #[cfg(feature = "store")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Hosted table refused the insert
    #[error("Lead store rejected insert ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Insert succeeded but no row came back
    #[error("Lead store returned no row")]
    EmptyResponse,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LeadError {
    /// Message safe to show a visitor (pt-BR)
    pub fn user_message(&self) -> String {
        match self {
            LeadError::Validation(reason) => reason.clone(),
            LeadError::Config(_) => "O formulário está indisponível no momento.".into(),
            _ => "Não foi possível enviar seu contato. Tente novamente.".into(),
        }
    }
}
