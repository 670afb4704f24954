//! SOQL literal values.
//!
//! Values are inlined into the query text. Text is wrapped in single quotes
//! as given; callers are responsible for escaping quotes beforehand.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Error, Result};

/// A literal that can appear on the right-hand side of a predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text value, rendered as `'text'`.
    Text(String),
    /// Boolean value, rendered as `true` or `false`.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value, always rendered with a fractional part.
    Float(f64),
    /// Calendar date, rendered as `yyyy-MM-dd`.
    Date(NaiveDate),
    /// Instant, rendered as `yyyy-MM-ddTHH:mm:ss.SSS+0000`.
    DateTime(DateTime<Utc>),
    /// Relative date literal such as `TODAY` or `LAST_N_DAYS:7`.
    DateLiteral(DateLiteral),
}

impl Value {
    /// Creates a date value from the calendar day of an instant (UTC).
    #[must_use]
    pub fn date_of(instant: DateTime<Utc>) -> Self {
        Self::Date(instant.date_naive())
    }

    /// Returns the literal token for inline use.
    #[must_use]
    pub fn to_soql(&self) -> String {
        match self {
            Self::Text(s) => format!("'{s}'"),
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => float_literal(*f),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string(),
            Self::DateLiteral(literal) => literal.to_string(),
        }
    }
}

/// Plain decimal notation with a fractional part, never an exponent.
fn float_literal(f: f64) -> String {
    let text = f.to_string();
    if f.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Trait for types that can be converted to SOQL values.
pub trait ToSoqlValue {
    /// Converts the value to a `Value`.
    fn to_soql_value(self) -> Value;
}

impl ToSoqlValue for Value {
    fn to_soql_value(self) -> Value {
        self
    }
}

impl ToSoqlValue for bool {
    fn to_soql_value(self) -> Value {
        Value::Bool(self)
    }
}

impl ToSoqlValue for i64 {
    fn to_soql_value(self) -> Value {
        Value::Int(self)
    }
}

impl ToSoqlValue for i32 {
    fn to_soql_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToSoqlValue for i16 {
    fn to_soql_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToSoqlValue for i8 {
    fn to_soql_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToSoqlValue for u32 {
    fn to_soql_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToSoqlValue for u16 {
    fn to_soql_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToSoqlValue for u8 {
    fn to_soql_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToSoqlValue for f64 {
    fn to_soql_value(self) -> Value {
        Value::Float(self)
    }
}

impl ToSoqlValue for f32 {
    fn to_soql_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

impl ToSoqlValue for String {
    fn to_soql_value(self) -> Value {
        Value::Text(self)
    }
}

impl ToSoqlValue for &str {
    fn to_soql_value(self) -> Value {
        Value::Text(String::from(self))
    }
}

impl ToSoqlValue for NaiveDate {
    fn to_soql_value(self) -> Value {
        Value::Date(self)
    }
}

impl ToSoqlValue for DateTime<Utc> {
    fn to_soql_value(self) -> Value {
        Value::DateTime(self)
    }
}

impl ToSoqlValue for DateLiteral {
    fn to_soql_value(self) -> Value {
        Value::DateLiteral(self)
    }
}

/// Relative date literals understood by SOQL.
///
/// The `N` variants carry an unsigned count and render as `TOKEN:N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLiteral {
    Yesterday,
    Today,
    Tomorrow,
    LastWeek,
    ThisWeek,
    NextWeek,
    LastMonth,
    ThisMonth,
    NextMonth,
    Last90Days,
    Next90Days,
    LastNDays(u32),
    NextNDays(u32),
    NextNWeeks(u32),
    LastNWeeks(u32),
    NextNMonths(u32),
    LastNMonths(u32),
    ThisQuarter,
    LastQuarter,
    NextQuarter,
    NextNQuarters(u32),
    LastNQuarters(u32),
    ThisYear,
    LastYear,
    NextYear,
    NextNYears(u32),
    LastNYears(u32),
    ThisFiscalQuarter,
    LastFiscalQuarter,
    NextFiscalQuarter,
    NextNFiscalQuarters(u32),
    LastNFiscalQuarters(u32),
    ThisFiscalYear,
    LastFiscalYear,
    NextFiscalYear,
    NextNFiscalYears(u32),
    LastNFiscalYears(u32),
}

impl DateLiteral {
    /// Returns the keyword and, for parametrized literals, the count.
    const fn parts(self) -> (&'static str, Option<u32>) {
        match self {
            Self::Yesterday => ("YESTERDAY", None),
            Self::Today => ("TODAY", None),
            Self::Tomorrow => ("TOMORROW", None),
            Self::LastWeek => ("LAST_WEEK", None),
            Self::ThisWeek => ("THIS_WEEK", None),
            Self::NextWeek => ("NEXT_WEEK", None),
            Self::LastMonth => ("LAST_MONTH", None),
            Self::ThisMonth => ("THIS_MONTH", None),
            Self::NextMonth => ("NEXT_MONTH", None),
            Self::Last90Days => ("LAST_90_DAYS", None),
            Self::Next90Days => ("NEXT_90_DAYS", None),
            Self::LastNDays(n) => ("LAST_N_DAYS", Some(n)),
            Self::NextNDays(n) => ("NEXT_N_DAYS", Some(n)),
            Self::NextNWeeks(n) => ("NEXT_N_WEEKS", Some(n)),
            Self::LastNWeeks(n) => ("LAST_N_WEEKS", Some(n)),
            Self::NextNMonths(n) => ("NEXT_N_MONTHS", Some(n)),
            Self::LastNMonths(n) => ("LAST_N_MONTHS", Some(n)),
            Self::ThisQuarter => ("THIS_QUARTER", None),
            Self::LastQuarter => ("LAST_QUARTER", None),
            Self::NextQuarter => ("NEXT_QUARTER", None),
            Self::NextNQuarters(n) => ("NEXT_N_QUARTERS", Some(n)),
            Self::LastNQuarters(n) => ("LAST_N_QUARTERS", Some(n)),
            Self::ThisYear => ("THIS_YEAR", None),
            Self::LastYear => ("LAST_YEAR", None),
            Self::NextYear => ("NEXT_YEAR", None),
            Self::NextNYears(n) => ("NEXT_N_YEARS", Some(n)),
            Self::LastNYears(n) => ("LAST_N_YEARS", Some(n)),
            Self::ThisFiscalQuarter => ("THIS_FISCAL_QUARTER", None),
            Self::LastFiscalQuarter => ("LAST_FISCAL_QUARTER", None),
            Self::NextFiscalQuarter => ("NEXT_FISCAL_QUARTER", None),
            Self::NextNFiscalQuarters(n) => ("NEXT_N_FISCAL_QUARTERS", Some(n)),
            Self::LastNFiscalQuarters(n) => ("LAST_N_FISCAL_QUARTERS", Some(n)),
            Self::ThisFiscalYear => ("THIS_FISCAL_YEAR", None),
            Self::LastFiscalYear => ("LAST_FISCAL_YEAR", None),
            Self::NextFiscalYear => ("NEXT_FISCAL_YEAR", None),
            Self::NextNFiscalYears(n) => ("NEXT_N_FISCAL_YEARS", Some(n)),
            Self::LastNFiscalYears(n) => ("LAST_N_FISCAL_YEARS", Some(n)),
        }
    }
}

impl fmt::Display for DateLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parts() {
            (keyword, Some(n)) => write!(f, "{keyword}:{n}"),
            (keyword, None) => f.write_str(keyword),
        }
    }
}

/// Parses a count exactly as `Display` writes it: ASCII digits with no sign
/// and no leading zero.
fn parse_count(count: &str) -> Option<u32> {
    let canonical = !count.is_empty()
        && count.bytes().all(|b| b.is_ascii_digit())
        && (count == "0" || !count.starts_with('0'));
    if canonical {
        count.parse().ok()
    } else {
        None
    }
}

impl FromStr for DateLiteral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDateLiteral(s.to_string());
        let (keyword, count) = match s.split_once(':') {
            Some((keyword, count)) => (keyword, Some(parse_count(count).ok_or_else(invalid)?)),
            None => (s, None),
        };
        let literal = match (keyword, count) {
            ("YESTERDAY", None) => Self::Yesterday,
            ("TODAY", None) => Self::Today,
            ("TOMORROW", None) => Self::Tomorrow,
            ("LAST_WEEK", None) => Self::LastWeek,
            ("THIS_WEEK", None) => Self::ThisWeek,
            ("NEXT_WEEK", None) => Self::NextWeek,
            ("LAST_MONTH", None) => Self::LastMonth,
            ("THIS_MONTH", None) => Self::ThisMonth,
            ("NEXT_MONTH", None) => Self::NextMonth,
            ("LAST_90_DAYS", None) => Self::Last90Days,
            ("NEXT_90_DAYS", None) => Self::Next90Days,
            ("LAST_N_DAYS", Some(n)) => Self::LastNDays(n),
            ("NEXT_N_DAYS", Some(n)) => Self::NextNDays(n),
            ("NEXT_N_WEEKS", Some(n)) => Self::NextNWeeks(n),
            ("LAST_N_WEEKS", Some(n)) => Self::LastNWeeks(n),
            ("NEXT_N_MONTHS", Some(n)) => Self::NextNMonths(n),
            ("LAST_N_MONTHS", Some(n)) => Self::LastNMonths(n),
            ("THIS_QUARTER", None) => Self::ThisQuarter,
            ("LAST_QUARTER", None) => Self::LastQuarter,
            ("NEXT_QUARTER", None) => Self::NextQuarter,
            ("NEXT_N_QUARTERS", Some(n)) => Self::NextNQuarters(n),
            ("LAST_N_QUARTERS", Some(n)) => Self::LastNQuarters(n),
            ("THIS_YEAR", None) => Self::ThisYear,
            ("LAST_YEAR", None) => Self::LastYear,
            ("NEXT_YEAR", None) => Self::NextYear,
            ("NEXT_N_YEARS", Some(n)) => Self::NextNYears(n),
            ("LAST_N_YEARS", Some(n)) => Self::LastNYears(n),
            ("THIS_FISCAL_QUARTER", None) => Self::ThisFiscalQuarter,
            ("LAST_FISCAL_QUARTER", None) => Self::LastFiscalQuarter,
            ("NEXT_FISCAL_QUARTER", None) => Self::NextFiscalQuarter,
            ("NEXT_N_FISCAL_QUARTERS", Some(n)) => Self::NextNFiscalQuarters(n),
            ("LAST_N_FISCAL_QUARTERS", Some(n)) => Self::LastNFiscalQuarters(n),
            ("THIS_FISCAL_YEAR", None) => Self::ThisFiscalYear,
            ("LAST_FISCAL_YEAR", None) => Self::LastFiscalYear,
            ("NEXT_FISCAL_YEAR", None) => Self::NextFiscalYear,
            ("NEXT_N_FISCAL_YEARS", Some(n)) => Self::NextNFiscalYears(n),
            ("LAST_N_FISCAL_YEARS", Some(n)) => Self::LastNFiscalYears(n),
            _ => return Err(invalid()),
        };
        Ok(literal)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike};

    use super::*;

    fn epoch() -> DateTime<Utc> {
        Utc.timestamp_opt(0, 0).unwrap()
    }

    #[test]
    fn test_value_inline_text() {
        assert_eq!(Value::Text(String::from("hello")).to_soql(), "'hello'");
    }

    #[test]
    fn test_value_inline_text_is_not_escaped() {
        assert_eq!(Value::Text(String::from("it's")).to_soql(), "'it's'");
    }

    #[test]
    fn test_value_inline_scalars() {
        assert_eq!(Value::Bool(true).to_soql(), "true");
        assert_eq!(Value::Bool(false).to_soql(), "false");
        assert_eq!(Value::Int(-100).to_soql(), "-100");
        assert_eq!(Value::Float(1.0).to_soql(), "1.0");
        assert_eq!(Value::Float(0.25).to_soql(), "0.25");
    }

    #[test]
    fn test_epoch_date() {
        assert_eq!(Value::date_of(epoch()).to_soql(), "1970-01-01");
    }

    #[test]
    fn test_epoch_date_time() {
        assert_eq!(
            Value::DateTime(epoch()).to_soql(),
            "1970-01-01T00:00:00.000+0000"
        );
    }

    #[test]
    fn test_date_time_keeps_milliseconds() {
        let instant = Utc
            .with_ymd_and_hms(2021, 5, 28, 13, 4, 5)
            .unwrap()
            .with_nanosecond(123_000_000)
            .unwrap();
        assert_eq!(
            Value::DateTime(instant).to_soql(),
            "2021-05-28T13:04:05.123+0000"
        );
    }

    #[test]
    fn test_date_literal_tokens() {
        assert_eq!(DateLiteral::Today.to_string(), "TODAY");
        assert_eq!(DateLiteral::Last90Days.to_string(), "LAST_90_DAYS");
        assert_eq!(DateLiteral::LastNDays(7).to_string(), "LAST_N_DAYS:7");
        assert_eq!(
            DateLiteral::NextNFiscalYears(0).to_string(),
            "NEXT_N_FISCAL_YEARS:0"
        );
    }

    #[test]
    fn test_date_literal_parses_rendered_tokens() {
        for literal in [
            DateLiteral::Yesterday,
            DateLiteral::ThisFiscalQuarter,
            DateLiteral::LastNWeeks(3),
            DateLiteral::NextNQuarters(12),
        ] {
            assert_eq!(literal.to_string().parse::<DateLiteral>(), Ok(literal));
        }
    }

    #[test]
    fn test_date_literal_rejects_bad_tokens() {
        assert!("LAST_N_DAYS".parse::<DateLiteral>().is_err());
        assert!("TODAY:3".parse::<DateLiteral>().is_err());
        assert!("LAST_N_DAYS:-1".parse::<DateLiteral>().is_err());
        assert!("someday".parse::<DateLiteral>().is_err());
    }

    #[test]
    fn test_to_soql_value_conversions() {
        assert_eq!(true.to_soql_value(), Value::Bool(true));
        assert_eq!(42_i32.to_soql_value(), Value::Int(42));
        assert_eq!(2.5_f64.to_soql_value(), Value::Float(2.5));
        assert_eq!("hello".to_soql_value(), Value::Text(String::from("hello")));
        assert_eq!(
            DateLiteral::Today.to_soql_value(),
            Value::DateLiteral(DateLiteral::Today)
        );
    }

    #[test]
    fn test_float_never_uses_exponent() {
        assert_eq!(Value::Float(1.0).to_soql(), "1.0");
        assert_eq!(Value::Float(1e16).to_soql(), "10000000000000000.0");
        assert_eq!(Value::Float(1e-7).to_soql(), "0.0000001");
        assert_eq!(Value::Float(-2.5).to_soql(), "-2.5");
    }

    #[test]
    fn test_date_literal_count_must_be_canonical() {
        assert_eq!("LAST_N_DAYS:0".parse::<DateLiteral>(), Ok(DateLiteral::LastNDays(0)));
        assert_eq!("NEXT_N_WEEKS:12".parse::<DateLiteral>(), Ok(DateLiteral::NextNWeeks(12)));
        for token in ["LAST_N_DAYS:+5", "LAST_N_DAYS:007", "LAST_N_DAYS:", "LAST_N_DAYS: 5"] {
            assert_eq!(
                token.parse::<DateLiteral>(),
                Err(Error::InvalidDateLiteral(token.to_string()))
            );
        }
    }
}
