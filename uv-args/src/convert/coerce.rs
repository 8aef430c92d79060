//! String to typed value coercion table.

use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::lexer::split_quoted;
use crate::schema::ArgType;
use crate::value::ArgValue;

/// A string that cannot be read as the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value '{value}': expected {expected}")]
pub struct CoercionError {
    pub value: String,
    pub expected: ArgType,
}

/// Whether `text` can be converted to `ty`
pub fn can_convert(text: &str, ty: ArgType) -> bool {
    convert(text, ty).is_ok()
}

/// Convert `text` to a value of type `ty`
pub fn convert(text: &str, ty: ArgType) -> Result<ArgValue, CoercionError> {
    let invalid = || CoercionError {
        value: text.to_string(),
        expected: ty,
    };

    let value = match ty {
        ArgType::String => ArgValue::String(text.to_string()),
        ArgType::Bool => ArgValue::Bool(parse_bool(text).ok_or_else(invalid)?),
        ArgType::Integer => ArgValue::Integer(text.trim().parse().map_err(|_| invalid())?),
        ArgType::Decimal => ArgValue::Decimal(parse_decimal(text.trim()).ok_or_else(invalid)?),
        ArgType::Float => ArgValue::Float(text.trim().parse().map_err(|_| invalid())?),
        ArgType::StringList => ArgValue::List(split_list(text)),
        ArgType::Date => ArgValue::Date(
            NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| invalid())?,
        ),
        ArgType::DateTime => ArgValue::DateTime(parse_date_time(text.trim()).ok_or_else(invalid)?),
        ArgType::Duration => ArgValue::Duration(parse_duration(text.trim()).ok_or_else(invalid)?),
    };

    Ok(value)
}

/// Split a comma separated list, honoring double-quoted items
pub fn split_list(text: &str) -> Vec<String> {
    split_quoted(text, |c| c == ',')
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

/// Parse `[d.]hh:mm[:ss]` or a plain number of seconds
fn parse_duration(text: &str) -> Option<Duration> {
    if let Ok(seconds) = text.parse::<i64>() {
        return Duration::try_seconds(seconds);
    }

    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (days, clock) = match text.split_once('.') {
        Some((days, clock)) => (parse_digits(days)?, clock),
        None => (0, text),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let mut fields = [0i64; 3];
    for (field, part) in fields.iter_mut().zip(&parts) {
        *field = parse_digits(part)?;
    }
    let [hours, minutes, seconds] = fields;
    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }

    let total = days
        .checked_mul(86_400)?
        .checked_add(hours * 3_600 + minutes * 60 + seconds)?;
    Duration::try_seconds(if negative { -total } else { total })
}

/// An unsigned run of ASCII digits; signs are only allowed up front
fn parse_digits(text: &str) -> Option<i64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
