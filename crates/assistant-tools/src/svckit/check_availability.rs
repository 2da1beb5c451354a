//! Check Availability Tool
//!
//! Lists the demo-call slots still open on a given date.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use assistant_core::{
    Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
    tool::{ParameterSchema, names},
};

use crate::availability::{BusinessHours, available_slots};
use crate::locale::long_date;

/// Tool for listing open slots on a date
pub struct CheckAvailabilityTool {
    hours: BusinessHours,
}

impl CheckAvailabilityTool {
    pub fn new(hours: BusinessHours) -> Self {
        Self { hours }
    }
}

impl Default for CheckAvailabilityTool {
    fn default() -> Self {
        Self::new(BusinessHours::default())
    }
}

#[async_trait]
impl Tool for CheckAvailabilityTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: names::CHECK_AVAILABILITY.into(),
            description: "List available one-hour demo slots on a date (business days, São Paulo time).".into(),
            parameters: vec![ParameterSchema::required(
                "date",
                "string",
                "Date as YYYY-MM-DD",
            )],
            category: Some("scheduling".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let raw = call.str_arg("date").unwrap_or_default();
        let date = match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                return Ok(ToolResult::failure(
                    names::CHECK_AVAILABILITY,
                    format!("Invalid date '{raw}': {e}"),
                ));
            }
        };

        let slots = available_slots(date, Utc::now(), self.hours);
        let output = if slots.is_empty() {
            format!("Nenhum horário disponível em {}.", long_date(date))
        } else {
            let labels: Vec<_> = slots.iter().map(|s| s.label.as_str()).collect();
            format!("Horários disponíveis em {}: {}", long_date(date), labels.join(", "))
        };

        Ok(ToolResult::success(names::CHECK_AVAILABILITY, output)
            .with_data(serde_json::to_value(&slots)?))
    }
}
