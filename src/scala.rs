//! Pitch values in [Scala](http://www.huygens-fokker.org/scala/) notation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// A raw pitch value as it appears in a tuning file.
///
/// According to [http://www.huygens-fokker.org/scala/scl_format.html](http://www.huygens-fokker.org/scala/scl_format.html), a textual value containing a `.` is a cents value
/// and any other textual value (e.g. `2` or `5/4`) is a frequency ratio. Numbers are taken as cents values directly.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use retune::scala::ScalaValue;
/// assert_approx_eq!(ScalaValue::from("5/4").as_cents().unwrap(), 386.313_714);
/// assert_approx_eq!(ScalaValue::from("700.").as_cents().unwrap(), 700.0);
/// assert_approx_eq!(ScalaValue::from("2").as_cents().unwrap(), 1200.0);
/// assert_approx_eq!(ScalaValue::from(-50.0).as_cents().unwrap(), -50.0);
///
/// assert!(ScalaValue::from("abc").as_cents().is_err());
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalaValue {
    Number(f64),
    Text(String),
    /// Any other kind of value. It is accepted by the decoder but rejected by [`ScalaValue::as_cents`].
    Other(serde_json::Value),
}

impl ScalaValue {
    pub fn as_cents(&self) -> Result<f64, ScalaValueError> {
        match self {
            ScalaValue::Number(cents_value) => Ok(*cents_value),
            ScalaValue::Text(text) => parse_cents(text),
            ScalaValue::Other(value) => Err(ScalaValueError {
                value: value.to_string(),
                kind: ScalaValueErrorKind::UnsupportedType,
            }),
        }
    }
}

impl From<f64> for ScalaValue {
    fn from(v: f64) -> Self {
        ScalaValue::Number(v)
    }
}

impl From<&str> for ScalaValue {
    fn from(v: &str) -> Self {
        ScalaValue::Text(v.to_owned())
    }
}

impl From<String> for ScalaValue {
    fn from(v: String) -> Self {
        ScalaValue::Text(v)
    }
}

impl Display for ScalaValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ScalaValue::Number(cents_value) => write!(f, "{}", cents_value),
            ScalaValue::Text(text) => write!(f, "{}", text),
            ScalaValue::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Parses a textual Scala value into cents.
///
/// Only the first whitespace-separated item is evaluated s.t. annotations like in `5/4 major third` are ignored.
pub fn parse_cents(scala_value: &str) -> Result<f64, ScalaValueError> {
    let error = |kind| ScalaValueError {
        value: scala_value.to_owned(),
        kind,
    };

    let main_item = scala_value
        .split_ascii_whitespace()
        .next()
        .ok_or_else(|| error(ScalaValueErrorKind::EmptyValue))?;

    let cents_value = if main_item.contains('.') {
        main_item
            .parse::<f64>()
            .map_err(|_| error(ScalaValueErrorKind::CentsValue))?
    } else if let Some((numer, denom)) = main_item.split_once('/') {
        let numer = numer
            .parse::<u64>()
            .map_err(|_| error(ScalaValueErrorKind::Numer))?;
        let denom = denom
            .parse::<u64>()
            .map_err(|_| error(ScalaValueErrorKind::Denom))?;
        ratio_to_cents(numer as f64 / denom as f64)
    } else {
        let ratio = main_item
            .parse::<f64>()
            .map_err(|_| error(ScalaValueErrorKind::RatioValue))?;
        ratio_to_cents(ratio)
    };

    if cents_value.is_finite() {
        Ok(cents_value)
    } else {
        Err(error(ScalaValueErrorKind::NonFinite))
    }
}

fn ratio_to_cents(ratio: f64) -> f64 {
    1200.0 * ratio.log2()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScalaValueError {
    pub value: String,
    pub kind: ScalaValueErrorKind,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScalaValueErrorKind {
    /// The value is neither a number nor a string.
    UnsupportedType,
    EmptyValue,
    CentsValue,
    Numer,
    Denom,
    RatioValue,
    /// The value evaluates to an infinite or undefined pitch, e.g. `1/0` or `0`.
    NonFinite,
}

impl Display for ScalaValueError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let reason = match self.kind {
            ScalaValueErrorKind::UnsupportedType => "expected a number or a string",
            ScalaValueErrorKind::EmptyValue => "the value is empty",
            ScalaValueErrorKind::CentsValue => "invalid cents value",
            ScalaValueErrorKind::Numer => "invalid numerator",
            ScalaValueErrorKind::Denom => "invalid denominator",
            ScalaValueErrorKind::RatioValue => "invalid ratio",
            ScalaValueErrorKind::NonFinite => "the ratio must be finite and positive",
        };
        write!(f, "Bad scala value `{}`: {}", self.value, reason)
    }
}
