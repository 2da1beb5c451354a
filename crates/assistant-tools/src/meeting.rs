//! Meeting Confirmation
//!
//! Time-range validation and the confirmation sentence sent back to the
//! visitor once a meeting is booked.

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SchedulingError};
use crate::locale::{REFERENCE_TZ, month_name, weekday_name};

/// Fails unless `start` is strictly before `end`.
pub fn validate_time_range<T>(start: DateTime<T>, end: DateTime<T>) -> Result<()>
where
    T: TimeZone,
    T::Offset: std::fmt::Display,
{
    if start < end {
        Ok(())
    } else {
        Err(SchedulingError::InvalidTimeRange {
            start: start.to_rfc3339(),
            end: end.to_rfc3339(),
        })
    }
}

/// Parse an ISO-8601 datetime into the reference timezone.
///
/// Offsets are honored; a naive value is read as São Paulo local time.
pub fn parse_reference_datetime(iso: &str) -> Result<DateTime<Tz>> {
    let iso = iso.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Ok(dt.with_timezone(&REFERENCE_TZ));
    }

    let naive = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M"))
        .map_err(|e| SchedulingError::InvalidDateTime(format!("{iso}: {e}")))?;

    REFERENCE_TZ
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| SchedulingError::InvalidDateTime(format!("{iso}: not a local time")))
}

/// Parse both ends of a range and validate their order.
pub fn parse_time_range(start_iso: &str, end_iso: &str) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let start = parse_reference_datetime(start_iso)?.with_timezone(&Utc);
    let end = parse_reference_datetime(end_iso)?.with_timezone(&Utc);
    validate_time_range(start, end)?;
    Ok((start, end))
}

/// `a`, `a e b`, `a, b e c`
pub fn join_attendees(attendees: &[String]) -> String {
    match attendees {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} e {}", init.join(", "), last),
    }
}

/// Confirmation sentence for a meeting starting at `start_iso`.
pub fn format_meeting_confirmation(start_iso: &str, attendees: &[String]) -> Result<String> {
    let start = parse_reference_datetime(start_iso)?;

    Ok(format!(
        "Reunião confirmada para {}, {} de {} de {} às {:02}:{:02} (horário de Brasília) com {}.",
        weekday_name(start.weekday()),
        start.day(),
        month_name(start.month()),
        start.year(),
        start.hour(),
        start.minute(),
        join_attendees(attendees)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_time_range_ordering() {
        let t = Utc.with_ymd_and_hms(2026, 10, 20, 13, 0, 0).unwrap();
        let one = Duration::seconds(1);

        assert!(validate_time_range(t, t).is_err());
        assert!(validate_time_range(t + one, t).is_err());
        assert!(validate_time_range(t, t + one).is_ok());
    }

    #[test]
    fn test_confirmation_in_reference_time() {
        let attendees = vec!["Ana".to_string(), "ana@empresa.com.br".to_string()];
        let text = format_meeting_confirmation("2026-10-20T17:30:00Z", &attendees).unwrap();
        assert_eq!(
            text,
            "Reunião confirmada para terça-feira, 20 de outubro de 2026 às 14:30 \
             (horário de Brasília) com Ana e ana@empresa.com.br."
        );
    }

    #[test]
    fn test_naive_input_is_local_time() {
        let text = format_meeting_confirmation("2026-10-23T09:00", &["Bruno".to_string()]).unwrap();
        assert!(text.contains("sexta-feira, 23 de outubro de 2026 às 09:00"));
        assert!(text.ends_with("com Bruno."));
    }

    #[test]
    fn test_malformed_iso_fails() {
        let err = format_meeting_confirmation("amanhã às 10h", &[]).unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidDateTime(_)));
    }

    #[test]
    fn test_parse_time_range_rejects_reversed() {
        assert!(parse_time_range("2026-10-20T10:00", "2026-10-20T11:00").is_ok());
        let err = parse_time_range("2026-10-20T11:00", "2026-10-20T10:00").unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidTimeRange { .. }));
    }

    #[test]
    fn test_join_attendees() {
        let names: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(join_attendees(&names[..1]), "a");
        assert_eq!(join_attendees(&names[..2]), "a e b");
        assert_eq!(join_attendees(&names), "a, b e c");
    }
}
