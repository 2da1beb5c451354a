//! Business-hour slots offered for a demo call.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use serde::Serialize;

use crate::locale::REFERENCE_TZ;

/// Opening window in reference local time, `[open, close)`.
#[derive(Clone, Copy, Debug)]
pub struct BusinessHours {
    pub open: u32,
    pub close: u32,
    pub slot_minutes: i64,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open: 9,
            close: 18,
            slot_minutes: 60,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// `HH:MM` in reference time
    pub label: String,
}

/// Slots on `date` that start strictly after `now`. Weekends have none.
pub fn available_slots(date: NaiveDate, now: DateTime<Utc>, hours: BusinessHours) -> Vec<Slot> {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) || hours.slot_minutes <= 0 {
        return Vec::new();
    }

    let (Some(open), Some(close)) = (
        NaiveTime::from_hms_opt(hours.open, 0, 0),
        NaiveTime::from_hms_opt(hours.close, 0, 0),
    ) else {
        return Vec::new();
    };

    let step = Duration::minutes(hours.slot_minutes);
    let mut slots = Vec::new();
    let mut cursor = date.and_time(open);
    let last_start = date.and_time(close) - step;

    while cursor <= last_start {
        if let Some(local) = REFERENCE_TZ.from_local_datetime(&cursor).earliest() {
            let start = local.with_timezone(&Utc);
            if start > now {
                slots.push(Slot {
                    start,
                    end: start + step,
                    label: cursor.format("%H:%M").to_string(),
                });
            }
        }
        cursor += step;
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_weekday() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let slots = available_slots(date(2026, 10, 20), now, BusinessHours::default());

        assert_eq!(slots.len(), 9);
        assert_eq!(slots[0].label, "09:00");
        assert_eq!(slots[8].label, "17:00");
        assert_eq!(slots[0].start, Utc.with_ymd_and_hms(2026, 10, 20, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_past_slots_are_dropped() {
        // 14:10 in São Paulo
        let now = Utc.with_ymd_and_hms(2026, 10, 20, 17, 10, 0).unwrap();
        let slots = available_slots(date(2026, 10, 20), now, BusinessHours::default());

        let labels: Vec<_> = slots.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["15:00", "16:00", "17:00"]);
    }

    #[test]
    fn test_weekend_is_closed() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        assert!(available_slots(date(2026, 10, 24), now, BusinessHours::default()).is_empty());
        assert!(available_slots(date(2026, 10, 25), now, BusinessHours::default()).is_empty());
    }
}
