use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A reporting month, written `YYYY-MM`.
///
/// Ordering is chronological, which matches the lexical order of the
/// zero-padded text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a YYYY-MM reporting period")]
pub struct PeriodParseError {
    pub value: String,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (0..=9999).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(self) -> NaiveDate {
        self.plus_months(1)
            .first_day()
            .pred_opt()
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn minus_months(self, months: u32) -> Self {
        self.shift(-(months as i64))
    }

    pub fn plus_months(self, months: u32) -> Self {
        self.shift(months as i64)
    }

    fn shift(self, months: i64) -> Self {
        let index = self.year as i64 * 12 + (self.month as i64 - 1) + months;
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || PeriodParseError {
            value: raw.to_string(),
        };
        let trimmed = raw.trim();
        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        let digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|byte| byte.is_ascii_digit())
        };
        if !digits(year, 4) || !digits(month, 2) {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Period::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_zero_padded() {
        let period: Period = "2025-03".parse().expect("valid period");
        assert_eq!(period.to_string(), "2025-03");
        assert!("2025-3".parse::<Period>().is_err());
        assert!("2025-13".parse::<Period>().is_err());
        assert!("march".parse::<Period>().is_err());
    }

    #[test]
    fn signed_components_are_rejected() {
        assert!("+202-01".parse::<Period>().is_err());
        assert!("-202-01".parse::<Period>().is_err());
        assert!("2025-+1".parse::<Period>().is_err());
        assert_eq!(
            "0202-01".parse::<Period>().map(|period| period.to_string()),
            Ok("0202-01".to_string())
        );
    }

    #[test]
    fn month_arithmetic_crosses_years() {
        let period = Period::new(2025, 2).expect("valid period");
        assert_eq!(period.minus_months(3).to_string(), "2024-11");
        assert_eq!(period.plus_months(11).to_string(), "2026-01");
    }

    #[test]
    fn month_bounds() {
        let period = Period::new(2024, 2).expect("valid period");
        assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn ordering_matches_text_order() {
        let mut periods: Vec<Period> = ["2025-10", "2024-12", "2025-02"]
            .iter()
            .map(|raw| raw.parse().expect("valid period"))
            .collect();
        periods.sort();
        let text: Vec<String> = periods.iter().map(Period::to_string).collect();
        let mut sorted_text = text.clone();
        sorted_text.sort();
        assert_eq!(text, sorted_text);
    }
}
