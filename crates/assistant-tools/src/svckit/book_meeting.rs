//! Book Meeting Tool
//!
//! Confirms a meeting the visitor agreed to. The calendar entry itself lives
//! with the hosted scheduling service; this tool checks the range and phrases
//! the confirmation.

use async_trait::async_trait;

use assistant_core::{
    Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
    tool::{ParameterSchema, names},
};

use crate::meeting::{format_meeting_confirmation, parse_time_range};

/// Tool for confirming a demo meeting
pub struct BookMeetingTool;

impl BookMeetingTool {
    fn attendees(call: &ToolCall) -> Vec<String> {
        match call.arguments.get("attendees") {
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            Some(serde_json::Value::String(list)) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[async_trait]
impl Tool for BookMeetingTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: names::BOOK_MEETING.into(),
            description: "Book a demo meeting once the visitor confirmed a slot. Returns the confirmation message to show.".into(),
            parameters: vec![
                ParameterSchema::required("start", "string", "Start as ISO-8601 (e.g. 2026-10-20T10:00:00-03:00)"),
                ParameterSchema::required("end", "string", "End as ISO-8601, after start"),
                ParameterSchema::required("attendees", "array", "Attendee names or emails"),
            ],
            category: Some("scheduling".into()),
            has_side_effects: true,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let start = call.str_arg("start").unwrap_or_default();
        let end = call.str_arg("end").unwrap_or_default();
        let attendees = Self::attendees(call);

        if attendees.is_empty() {
            return Ok(ToolResult::failure(names::BOOK_MEETING, "At least one attendee is required"));
        }

        let confirmation = parse_time_range(start, end)
            .and_then(|_| format_meeting_confirmation(start, &attendees));

        match confirmation {
            Ok(text) => {
                tracing::info!(%start, %end, attendees = attendees.len(), "meeting confirmed");
                Ok(ToolResult::success(names::BOOK_MEETING, text).with_data(serde_json::json!({
                    "start": start,
                    "end": end,
                    "attendees": attendees,
                })))
            }
            Err(e) => Ok(ToolResult::failure(names::BOOK_MEETING, e.to_string())),
        }
    }
}
