//! Typed argument values and the parsed argument mapping.

use std::collections::btree_map;
use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::format::format_duration;
use crate::schema::ArgType;

/// A converted argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// No value was supplied
    Null,
    Bool(bool),
    String(String),
    Integer(i64),
    Decimal(Decimal),
    Float(f64),
    List(Vec<String>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Duration(Duration),
}

impl ArgValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ArgValue::Null)
    }

    /// The type tag this value is an instance of, `None` for `Null`
    pub fn arg_type(&self) -> Option<ArgType> {
        let ty = match self {
            ArgValue::Null => return None,
            ArgValue::Bool(_) => ArgType::Bool,
            ArgValue::String(_) => ArgType::String,
            ArgValue::Integer(_) => ArgType::Integer,
            ArgValue::Decimal(_) => ArgType::Decimal,
            ArgValue::Float(_) => ArgType::Float,
            ArgValue::List(_) => ArgType::StringList,
            ArgValue::Date(_) => ArgType::Date,
            ArgValue::DateTime(_) => ArgType::DateTime,
            ArgValue::Duration(_) => ArgType::Duration,
        };
        Some(ty)
    }

    /// Whether the value may be stored in an argument declared as `ty`.
    ///
    /// `Null` is assignable to everything; whether it is acceptable is a
    /// question of the argument being optional.
    pub fn is_assignable_to(&self, ty: ArgType) -> bool {
        match self.arg_type() {
            None => true,
            Some(own) => own == ty,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ArgValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            ArgValue::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ArgValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ArgValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            ArgValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            ArgValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            ArgValue::Duration(d) => Some(*d),
            _ => None,
        }
    }
}

impl Serialize for ArgValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ArgValue::Null => serializer.serialize_none(),
            ArgValue::Bool(b) => serializer.serialize_bool(*b),
            ArgValue::String(s) => serializer.serialize_str(s),
            ArgValue::Integer(i) => serializer.serialize_i64(*i),
            ArgValue::Decimal(d) => serializer.serialize_str(&d.to_string()),
            ArgValue::Float(f) => serializer.serialize_f64(*f),
            ArgValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ArgValue::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
            ArgValue::DateTime(dt) => serializer.collect_str(&dt.format("%Y-%m-%dT%H:%M:%S")),
            ArgValue::Duration(d) => serializer.serialize_str(&format_duration(d)),
        }
    }
}

/// The successful result of parsing a command: argument name to value.
///
/// Entries are kept sorted by name so that printing and iteration are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedArgs {
    values: BTreeMap<String, ArgValue>,
}

impl ParsedArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: ArgValue) -> Option<ArgValue> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ArgValue> {
        self.values.iter()
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ArgValue::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ArgValue::as_bool)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ArgValue::as_i64)
    }

    pub fn get_decimal(&self, name: &str) -> Option<Decimal> {
        self.get(name).and_then(ArgValue::as_decimal)
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ArgValue::as_f64)
    }

    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(ArgValue::as_list)
    }

    /// True when a flag was given and is not explicitly false
    pub fn is_set(&self, name: &str) -> bool {
        self.get_bool(name).unwrap_or(false)
    }

    pub fn get_date(&self, name: &str) -> Option<NaiveDate> {
        self.get(name).and_then(ArgValue::as_date)
    }

    pub fn get_date_time(&self, name: &str) -> Option<NaiveDateTime> {
        self.get(name).and_then(ArgValue::as_date_time)
    }

    pub fn get_duration(&self, name: &str) -> Option<Duration> {
        self.get(name).and_then(ArgValue::as_duration)
    }

    /// Render the mapping as a JSON object
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
