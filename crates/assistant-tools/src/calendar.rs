//! Weekday Resolver
//!
//! Turns "next Tuesday" or "the second Friday from now" into a concrete date
//! in the reference timezone.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::Serialize;

use crate::error::{Result, SchedulingError};
use crate::locale::{REFERENCE_TZ, long_date};

/// Days scanned before giving up.
pub const SEARCH_HORIZON_DAYS: i64 = 90;

/// A resolved weekday occurrence
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WeekdayDate {
    pub date: NaiveDate,
    /// 1 = Monday … 7 = Sunday
    pub weekday: u32,
    /// Long pt-BR form, e.g. `terça-feira, 20 de outubro de 2026`
    pub formatted: String,
}

/// Parse an English weekday name or its 3-letter abbreviation, any case.
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    let weekday = match name.trim().to_lowercase().as_str() {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return Err(SchedulingError::InvalidWeekday(name.to_string())),
    };
    Ok(weekday)
}

/// Weekday index with Monday = 1.
pub fn weekday_index(name: &str) -> Result<u32> {
    parse_weekday(name).map(|w| w.number_from_monday())
}

/// Today in the reference timezone.
pub fn reference_today(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&REFERENCE_TZ).date_naive()
}

/// The `occurrence`-th future `weekday`, counted from now.
pub fn calculate_next_weekday_date(weekday: &str, occurrence: u32) -> Result<WeekdayDate> {
    calculate_next_weekday_date_from(Utc::now(), weekday, occurrence)
}

/// Same as [`calculate_next_weekday_date`] with an explicit clock.
///
/// Today never counts. The walk fails once more than
/// [`SEARCH_HORIZON_DAYS`] days were scanned without reaching `occurrence`.
pub fn calculate_next_weekday_date_from(
    now: DateTime<Utc>,
    weekday: &str,
    occurrence: u32,
) -> Result<WeekdayDate> {
    let target = parse_weekday(weekday)?;
    if occurrence == 0 {
        return Err(SchedulingError::InvalidOccurrence(occurrence.to_string()));
    }

    let mut date = reference_today(now);
    let mut scanned = 0;
    let mut seen = 0;

    while scanned <= SEARCH_HORIZON_DAYS {
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
        scanned += 1;

        if date.weekday() == target {
            seen += 1;
            if seen == occurrence {
                return Ok(WeekdayDate {
                    date,
                    weekday: target.number_from_monday(),
                    formatted: long_date(date),
                });
            }
        }
    }

    Err(SchedulingError::NotFoundWithinHorizon {
        weekday: weekday.to_string(),
        occurrence,
        horizon_days: SEARCH_HORIZON_DAYS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const NAMES: [&str; 14] = [
        "monday", "Tue", "WEDNESDAY", "thu", "Friday", "sat", "sunday", "Mon", "tuesday", "wed",
        "Thursday", "FRI", "Saturday", "Sun",
    ];

    /// 2026-10-19 13:00 UTC, a Monday morning in São Paulo
    fn monday_morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 13, 0, 0).unwrap()
    }

    #[test]
    fn test_every_weekday_and_occurrence_is_in_the_future() {
        let now = monday_morning();
        let today = reference_today(now);

        for name in NAMES {
            let expected = parse_weekday(name).unwrap();
            for n in 1..=13 {
                let resolved = calculate_next_weekday_date_from(now, name, n).unwrap();
                assert_eq!(resolved.date.weekday(), expected, "{name} #{n}");
                assert!(resolved.date > today, "{name} #{n}");
                assert_eq!(resolved.weekday, expected.number_from_monday());
            }
        }
    }

    #[test]
    fn test_same_weekday_skips_today() {
        let resolved = calculate_next_weekday_date_from(monday_morning(), "monday", 1).unwrap();
        assert_eq!(resolved.date, NaiveDate::from_ymd_opt(2026, 10, 26).unwrap());
        assert_eq!(resolved.formatted, "segunda-feira, 26 de outubro de 2026");

        let resolved = calculate_next_weekday_date_from(monday_morning(), "tue", 2).unwrap();
        assert_eq!(resolved.date, NaiveDate::from_ymd_opt(2026, 10, 27).unwrap());
    }

    #[test]
    fn test_reference_timezone_decides_today() {
        // 01:30 UTC on Tuesday is still Monday evening in São Paulo
        let now = Utc.with_ymd_and_hms(2026, 10, 20, 1, 30, 0).unwrap();
        assert_eq!(reference_today(now), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());

        let resolved = calculate_next_weekday_date_from(now, "tuesday", 1).unwrap();
        assert_eq!(resolved.date, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    }

    #[test]
    fn test_invalid_weekday() {
        let err = calculate_next_weekday_date_from(monday_morning(), "blurgh", 1).unwrap_err();
        assert_eq!(err, SchedulingError::InvalidWeekday("blurgh".into()));
        assert!(weekday_index("segundaa").is_err());
        assert_eq!(weekday_index(" Sun ").unwrap(), 7);
    }

    #[test]
    fn test_zero_occurrence_is_rejected() {
        let err = calculate_next_weekday_date_from(monday_morning(), "friday", 0).unwrap_err();
        assert_eq!(err, SchedulingError::InvalidOccurrence("0".into()));
    }

    #[test]
    fn test_horizon_exceeded() {
        for name in ["monday", "wednesday", "sunday"] {
            let err = calculate_next_weekday_date_from(monday_morning(), name, 14).unwrap_err();
            assert!(matches!(err, SchedulingError::NotFoundWithinHorizon { occurrence: 14, .. }));
        }
    }
}
