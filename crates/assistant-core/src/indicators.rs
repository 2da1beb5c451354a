//! Widget Indicators
//!
//! Pure lookups the widget runs over the message list to decide between the
//! "thinking" shimmer, a tool-specific loading line and rendered text.

use std::collections::HashMap;

use crate::message::ConversationMessage;
use crate::tool::names;

/// Default loading copy for the tools the site registers.
pub fn default_tool_copy(tool_name: &str) -> Option<&'static str> {
    match tool_name {
        names::CALCULATE_NEXT_WEEKDAY_DATE => Some("Calculando a data..."),
        names::CHECK_AVAILABILITY => Some("Verificando horários disponíveis..."),
        names::BOOK_MEETING => Some("Agendando sua reunião..."),
        _ => None,
    }
}

/// The full default table, as served to the frontend.
pub fn default_tool_copy_table() -> HashMap<String, String> {
    [
        names::CALCULATE_NEXT_WEEKDAY_DATE,
        names::CHECK_AVAILABILITY,
        names::BOOK_MEETING,
    ]
    .into_iter()
    .filter_map(|name| default_tool_copy(name).map(|copy| (name.to_string(), copy.to_string())))
    .collect()
}

/// Loading copy for the most recent tool call on the last assistant message.
///
/// `copy` overrides the defaults; a tool known to neither yields `None`.
pub fn tool_loading_copy(
    messages: &[ConversationMessage],
    copy: &HashMap<String, String>,
) -> Option<String> {
    let last = messages.last()?;
    if !last.is_assistant() {
        return None;
    }

    let tool_name = last.last_tool_call()?;
    copy.get(tool_name)
        .cloned()
        .or_else(|| default_tool_copy(tool_name).map(str::to_string))
}

/// True iff the last message is from the assistant and already carries text.
pub fn is_assistant_text_streaming(messages: &[ConversationMessage]) -> bool {
    messages
        .last()
        .is_some_and(|m| m.is_assistant() && m.has_text())
}
