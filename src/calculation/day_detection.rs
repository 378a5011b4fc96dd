//! Day detection and month calendar logic.
//!
//! This module classifies calendar days as weekday, Saturday or Sunday. The
//! day type selects the required load for a day, and Sunday additionally
//! marks a day that does not accept time entries.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the type of day for required-load lookup.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// assert!(!day_type.is_exempt());
/// assert!(DayType::Sunday.is_exempt());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday - weekday load applies.
    Weekday,
    /// Saturday - weekend load applies.
    Saturday,
    /// Sunday - weekend load applies and no input is accepted.
    Sunday,
}

impl DayType {
    /// Returns true for days that take no time entries.
    pub fn is_exempt(&self) -> bool {
        matches!(self, DayType::Sunday)
    }

    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

impl From<Weekday> for DayType {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat => DayType::Saturday,
            Weekday::Sun => DayType::Sunday,
            _ => DayType::Weekday,
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    date.weekday().into()
}

/// Classifies a day-of-week name.
///
/// Accepts English names and abbreviations ("Sat", "sunday") as well as the
/// Portuguese abbreviations used by timesheet forms ("Dom", "Seg", "Sáb").
/// The serialized [`DayType`] names (`weekday`, `saturday`, `sunday`) are
/// accepted too. Matching ignores case and accents.
///
/// # Errors
///
/// Returns [`EngineError::UnknownDayName`] if the name is not recognised.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{day_type_from_name, DayType};
///
/// assert_eq!(day_type_from_name("Sáb").unwrap(), DayType::Saturday);
/// assert_eq!(day_type_from_name("DOM").unwrap(), DayType::Sunday);
/// assert_eq!(day_type_from_name("Tuesday").unwrap(), DayType::Weekday);
/// assert!(day_type_from_name("someday").is_err());
/// ```
pub fn day_type_from_name(name: &str) -> EngineResult<DayType> {
    let normalized = normalize_name(name);

    let weekday = match normalized.as_str() {
        "dom" | "domingo" => Some(Weekday::Sun),
        "seg" | "segunda" | "segunda-feira" => Some(Weekday::Mon),
        "ter" | "terca" | "terca-feira" => Some(Weekday::Tue),
        "qua" | "quarta" | "quarta-feira" => Some(Weekday::Wed),
        "qui" | "quinta" | "quinta-feira" => Some(Weekday::Thu),
        "sex" | "sexta" | "sexta-feira" => Some(Weekday::Fri),
        "sab" | "sabado" => Some(Weekday::Sat),
        "weekday" => return Ok(DayType::Weekday),
        other => Weekday::from_str(other).ok(),
    };

    weekday
        .map(DayType::from)
        .ok_or_else(|| EngineError::UnknownDayName {
            name: name.to_string(),
        })
}

/// Lowercases and strips the accents that occur in weekday names.
fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Returns the number of days in a month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] for a month outside 1-12 or a year
/// chrono cannot represent.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert_eq!(days_in_month(2025, 2).unwrap(), 28);
/// assert_eq!(days_in_month(2025, 12).unwrap(), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    let invalid = || EngineError::InvalidDate { year, month };

    let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;

    Ok(next_month.signed_duration_since(first_day).num_days() as u32)
}

/// Lists every day of a month together with its day type.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{month_days, DayType};
///
/// // February 2026 starts on a Sunday
/// let days = month_days(2026, 2).unwrap();
/// assert_eq!(days.len(), 28);
/// assert_eq!(days[0], (1, DayType::Sunday));
/// assert_eq!(days[6], (7, DayType::Saturday));
/// ```
pub fn month_days(year: i32, month: u32) -> EngineResult<Vec<(u32, DayType)>> {
    let count = days_in_month(year, month)?;

    (1..=count)
        .map(|day| {
            NaiveDate::from_ymd_opt(year, month, day)
                .map(|date| (day, get_day_type(date)))
                .ok_or(EngineError::InvalidDate { year, month })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_monday_is_weekday() {
        assert_eq!(get_day_type(make_date("2026-01-12")), DayType::Weekday);
    }

    #[test]
    fn test_friday_is_weekday() {
        assert_eq!(get_day_type(make_date("2026-01-16")), DayType::Weekday);
    }

    #[test]
    fn test_saturday_is_saturday() {
        assert_eq!(get_day_type(make_date("2026-01-17")), DayType::Saturday);
    }

    #[test]
    fn test_sunday_is_sunday() {
        assert_eq!(get_day_type(make_date("2026-01-18")), DayType::Sunday);
    }

    #[test]
    fn test_weekend_and_exempt_flags() {
        assert!(!DayType::Weekday.is_weekend());
        assert!(DayType::Saturday.is_weekend());
        assert!(DayType::Sunday.is_weekend());
        assert!(!DayType::Saturday.is_exempt());
    }

    #[test]
    fn test_portuguese_abbreviations() {
        assert_eq!(day_type_from_name("Dom").unwrap(), DayType::Sunday);
        assert_eq!(day_type_from_name("Seg").unwrap(), DayType::Weekday);
        assert_eq!(day_type_from_name("Sex").unwrap(), DayType::Weekday);
        assert_eq!(day_type_from_name("Sáb").unwrap(), DayType::Saturday);
        assert_eq!(day_type_from_name("sab").unwrap(), DayType::Saturday);
    }

    #[test]
    fn test_portuguese_full_names_ignore_accents() {
        assert_eq!(day_type_from_name("Sábado").unwrap(), DayType::Saturday);
        assert_eq!(day_type_from_name("Terça-feira").unwrap(), DayType::Weekday);
        assert_eq!(day_type_from_name("  domingo ").unwrap(), DayType::Sunday);
    }

    #[test]
    fn test_english_names() {
        assert_eq!(day_type_from_name("Sat").unwrap(), DayType::Saturday);
        assert_eq!(day_type_from_name("SUNDAY").unwrap(), DayType::Sunday);
        assert_eq!(day_type_from_name("wed").unwrap(), DayType::Weekday);
    }

    #[test]
    fn test_day_type_names() {
        assert_eq!(day_type_from_name("weekday").unwrap(), DayType::Weekday);
        assert_eq!(day_type_from_name("saturday").unwrap(), DayType::Saturday);
        assert_eq!(day_type_from_name("sunday").unwrap(), DayType::Sunday);
    }

    #[test]
    fn test_unknown_name_returns_error() {
        match day_type_from_name("Feriado") {
            Err(EngineError::UnknownDayName { name }) => assert_eq!(name, "Feriado"),
            other => panic!("Expected UnknownDayName, got {:?}", other),
        }
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2026, 4).unwrap(), 30);
    }

    #[test]
    fn test_days_in_month_rejects_invalid_month() {
        assert!(matches!(
            days_in_month(2026, 0),
            Err(EngineError::InvalidDate { year: 2026, month: 0 })
        ));
        assert!(matches!(
            days_in_month(2026, 13),
            Err(EngineError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_month_days_tags_weekends() {
        // March 2026: the 1st is a Sunday, the 7th a Saturday
        let days = month_days(2026, 3).unwrap();
        assert_eq!(days.len(), 31);
        assert_eq!(days[0], (1, DayType::Sunday));
        assert_eq!(days[1], (2, DayType::Weekday));
        assert_eq!(days[6], (7, DayType::Saturday));
        assert_eq!(days[30], (31, DayType::Weekday));

        let sundays = days.iter().filter(|(_, t)| *t == DayType::Sunday).count();
        assert_eq!(sundays, 5);
    }
}
