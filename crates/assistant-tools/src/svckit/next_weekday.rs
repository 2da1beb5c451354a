//! Next Weekday Date Tool
//!
//! Resolves relative weekday mentions ("next Tuesday") to a calendar date.

use async_trait::async_trait;

use assistant_core::{
    Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
    tool::{ParameterSchema, names},
};
use serde_json::Value;

use crate::calendar::calculate_next_weekday_date;
use crate::error::{Result, SchedulingError};

/// Absent or null means 1. Runtimes send `"number"` params as floats or
/// strings, so `2`, `2.0` and `"2"` all read as 2. Anything else present
/// must fail.
fn parse_occurrence(value: Option<&Value>) -> Result<u32> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Ok(1);
    };

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.fract() == 0.0 && (1.0..=f64::from(u32::MAX)).contains(&n) => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let whole = n as u32;
            Ok(whole)
        }
        _ => Err(SchedulingError::InvalidOccurrence(value.to_string())),
    }
}

/// Tool for resolving the Nth upcoming weekday
pub struct NextWeekdayDateTool;

#[async_trait]
impl Tool for NextWeekdayDateTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: names::CALCULATE_NEXT_WEEKDAY_DATE.into(),
            description: "Calculate the date of an upcoming weekday in São Paulo time. Use it whenever the visitor mentions a weekday instead of a date.".into(),
            parameters: vec![
                ParameterSchema::required(
                    "weekday",
                    "string",
                    "Weekday in English, full or abbreviated (e.g. 'tuesday', 'tue')",
                ),
                ParameterSchema::optional(
                    "occurrence",
                    "number",
                    "1 for the next one, 2 for the one after, and so on",
                    serde_json::json!(1),
                ),
            ],
            category: Some("scheduling".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let weekday = call.str_arg("weekday").unwrap_or_default();
        let occurrence = match parse_occurrence(call.arguments.get("occurrence")) {
            Ok(n) => n,
            Err(e) => {
                tracing::debug!(%weekday, error = %e, "occurrence rejected");
                return Ok(ToolResult::failure(names::CALCULATE_NEXT_WEEKDAY_DATE, e.to_string()));
            }
        };

        match calculate_next_weekday_date(weekday, occurrence) {
            Ok(resolved) => {
                let data = serde_json::to_value(&resolved)?;
                Ok(ToolResult::success(names::CALCULATE_NEXT_WEEKDAY_DATE, resolved.formatted)
                    .with_data(data))
            }
            Err(e) => {
                tracing::debug!(%weekday, occurrence, error = %e, "weekday not resolved");
                Ok(ToolResult::failure(names::CALCULATE_NEXT_WEEKDAY_DATE, e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_weekday() {
        let call = ToolCall::new(names::CALCULATE_NEXT_WEEKDAY_DATE)
            .arg("weekday", serde_json::json!("Fri"))
            .arg("occurrence", serde_json::json!(2));
        let result = NextWeekdayDateTool.execute(&call).await.unwrap();

        assert!(result.success);
        assert!(result.output.starts_with("sexta-feira, "));
        let data = result.data.unwrap();
        assert_eq!(data["weekday"], 5);
    }

    #[tokio::test]
    async fn test_invalid_weekday_is_a_failed_result() {
        let call = ToolCall::new(names::CALCULATE_NEXT_WEEKDAY_DATE)
            .arg("weekday", serde_json::json!("blurgh"));
        let result = NextWeekdayDateTool.execute(&call).await.unwrap();

        assert!(!result.success);
        assert!(result.output.contains("Invalid weekday"));
    }

    async fn resolve(occurrence: Value) -> ToolResult {
        let call = ToolCall::new(names::CALCULATE_NEXT_WEEKDAY_DATE)
            .arg("weekday", serde_json::json!("friday"))
            .arg("occurrence", occurrence);
        NextWeekdayDateTool.execute(&call).await.unwrap()
    }

    #[tokio::test]
    async fn test_float_and_string_occurrences() {
        let first = resolve(serde_json::json!(1)).await;
        let second = resolve(serde_json::json!(2)).await;
        assert_ne!(first.output, second.output);

        for value in [serde_json::json!(2.0), serde_json::json!("2"), serde_json::json!(" 2 ")] {
            let result = resolve(value.clone()).await;
            assert!(result.success, "{value}");
            assert_eq!(result.output, second.output, "{value}");
        }
    }

    #[tokio::test]
    async fn test_bad_occurrence_is_a_failed_result() {
        for value in [
            serde_json::json!(-1),
            serde_json::json!(1.5),
            serde_json::json!(0),
            serde_json::json!("duas"),
            serde_json::json!(true),
        ] {
            let result = resolve(value.clone()).await;
            assert!(!result.success, "{value}");
            assert!(result.output.starts_with("Occurrence must be"), "{value}");
        }
    }

    #[test]
    fn test_absent_occurrence_defaults_to_one() {
        assert_eq!(parse_occurrence(None), Ok(1));
        assert_eq!(parse_occurrence(Some(&Value::Null)), Ok(1));
        assert_eq!(
            parse_occurrence(Some(&serde_json::json!(-1))),
            Err(SchedulingError::InvalidOccurrence("-1".into()))
        );
    }
}
