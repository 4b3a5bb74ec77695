//! Long-form Norwegian date rendering for shift details.

use chrono::{Datelike, NaiveDate, Weekday};

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "mandag",
        Weekday::Tue => "tirsdag",
        Weekday::Wed => "onsdag",
        Weekday::Thu => "torsdag",
        Weekday::Fri => "fredag",
        Weekday::Sat => "lørdag",
        Weekday::Sun => "søndag",
    }
}

const MONTH_NAMES: [&str; 12] = [
    "januar",
    "februar",
    "mars",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "desember",
];

/// Formats a date as "<weekday> <day>. <month> <year>" in Norwegian.
///
/// # Example
///
/// ```
/// use pay_engine::calculation::format_shift_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(format_shift_date(date), "lørdag 17. januar 2026");
/// ```
pub fn format_shift_date(date: NaiveDate) -> String {
    format!(
        "{} {}. {} {}",
        weekday_name(date.weekday()),
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}
