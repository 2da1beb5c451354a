//! pt-BR date wording and the reference timezone.

use chrono::{Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;

/// All scheduling math happens in São Paulo local time.
pub const REFERENCE_TZ: Tz = chrono_tz::America::Sao_Paulo;

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

pub fn month_name(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
        "outubro", "novembro", "dezembro",
    ];
    MONTHS[(month.clamp(1, 12) - 1) as usize]
}

/// `segunda-feira, 20 de outubro de 2026`
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(long_date(date), "segunda-feira, 2 de março de 2026");
    }
}
