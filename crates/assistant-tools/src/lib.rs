//! # assistant-tools
//!
//! Date and meeting-booking functions the hosted assistant calls while
//! talking to a visitor, plus the `Tool` wrappers that expose them.
//!
//! Every date is computed in São Paulo local time ([`locale::REFERENCE_TZ`]),
//! whatever the server's own timezone is.
//!
//! ```text
//! "próxima terça"  ──▶ calculateNextWeekdayDate ──▶ 2026-10-20
//! 2026-10-20       ──▶ checkAvailability        ──▶ 09:00, 10:00, …
//! 10:00 + contacts ──▶ bookMeeting              ──▶ "Reunião confirmada para …"
//! ```

pub mod availability;
pub mod calendar;
pub mod error;
pub mod locale;
pub mod meeting;
pub mod svckit;

pub use calendar::{WeekdayDate, calculate_next_weekday_date};
pub use error::{Result, SchedulingError};
pub use meeting::{format_meeting_confirmation, validate_time_range};

use assistant_core::ToolRegistry;

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::svckit::{BookMeetingTool, CheckAvailabilityTool, NextWeekdayDateTool};
}

/// Register every scheduling tool with default settings.
pub fn register_all(registry: &mut ToolRegistry) {
    registry.register(tools::NextWeekdayDateTool);
    registry.register(tools::CheckAvailabilityTool::default());
    registry.register(tools::BookMeetingTool);
}

/// System prompt handed to the hosted assistant runtime
pub const ASSISTANT_PROMPT: &str = r#"Você é o assistente virtual do site. Responda em português do Brasil, de forma breve e cordial.

## Objetivo

Tirar dúvidas sobre o produto e, quando o visitante demonstrar interesse, agendar uma demonstração.

## Agendamento

1. Quando o visitante citar um dia da semana ("terça que vem"), use `calculateNextWeekdayDate` para obter a data exata. Nunca calcule datas de cabeça.
2. Use `checkAvailability` com a data para listar horários livres.
3. Depois que o visitante escolher um horário e informar nome e e-mail, use `bookMeeting`.
4. Repita ao visitante exatamente a mensagem de confirmação retornada.

Todos os horários estão no horário de Brasília."#;

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_core::tool::names;

    #[test]
    fn test_register_all() {
        let mut registry = ToolRegistry::new();
        register_all(&mut registry);

        assert_eq!(
            registry.names(),
            vec![names::BOOK_MEETING, names::CALCULATE_NEXT_WEEKDAY_DATE, names::CHECK_AVAILABILITY]
        );
    }

    #[test]
    fn test_prompt_mentions_every_tool() {
        for name in [names::BOOK_MEETING, names::CALCULATE_NEXT_WEEKDAY_DATE, names::CHECK_AVAILABILITY] {
            assert!(ASSISTANT_PROMPT.contains(name));
        }
    }
}
