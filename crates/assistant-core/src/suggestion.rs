//! Prompt Suggestions
//!
//! Static chips shown in an empty conversation.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSuggestion {
    pub id: String,

    /// Chip text
    pub label: String,

    /// Message sent when the chip is selected
    pub message: String,
}

impl PromptSuggestion {
    pub fn new(id: &str, label: &str, message: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            message: message.into(),
        }
    }
}

pub fn default_suggestions() -> Vec<PromptSuggestion> {
    vec![
        PromptSuggestion::new(
            "how-it-works",
            "Como funciona?",
            "Como funciona o atendimento automatizado de vocês?",
        ),
        PromptSuggestion::new(
            "pricing",
            "Quanto custa?",
            "Quais são os planos e quanto custa para a minha empresa?",
        ),
        PromptSuggestion::new(
            "book-demo",
            "Agendar demonstração",
            "Quero agendar uma demonstração na próxima terça-feira.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_ids_are_unique() {
        let suggestions = default_suggestions();
        let mut ids: Vec<_> = suggestions.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), suggestions.len());
        assert!(suggestions.iter().all(|s| !s.message.trim().is_empty()));
    }
}
