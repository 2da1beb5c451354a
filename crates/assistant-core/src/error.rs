//! Error Types

use thiserror::Error;

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;

/// Assistant error types
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Tool not found in registry
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool validation failed
    #[error("Tool validation error: {0}")]
    ToolValidation(String),

    /// Tool execution failed
    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    /// Malformed message or stream payload
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl AssistantError {
    /// Message safe to show a visitor (pt-BR)
    pub fn user_message(&self) -> String {
        match self {
            AssistantError::ToolNotFound(name) => format!("A ferramenta '{name}' não está disponível."),
            AssistantError::ToolValidation(msg) => format!("Dados inválidos para a ferramenta: {msg}"),
            AssistantError::ToolExecution(_) => "Não foi possível concluir esta ação agora.".into(),
            AssistantError::Parse(_) | AssistantError::Json(_) => {
                "Não conseguimos ler a resposta do assistente.".into()
            }
            AssistantError::Other(_) => "Ocorreu um erro inesperado. Tente novamente.".into(),
        }
    }
}

impl From<anyhow::Error> for AssistantError {
    fn from(err: anyhow::Error) -> Self {
        AssistantError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_internals() {
        let err = AssistantError::Other("socket closed at 0x1f".into());
        assert_eq!(err.user_message(), "Ocorreu um erro inesperado. Tente novamente.");

        let err = AssistantError::ToolNotFound("sendInvoice".into());
        assert_eq!(err.user_message(), "A ferramenta 'sendInvoice' não está disponível.");

        let err = AssistantError::ToolExecution("calendar API timeout".into());
        assert!(!err.user_message().contains("timeout"));
    }
}
