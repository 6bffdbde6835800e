//! Declared CSS values.
//!
//! Style functions emit either bare numbers (typically looked up from a
//! numeric theme scale) or CSS text. [`CssValue`] keeps that distinction so
//! the merged output echoes back exactly what the style function produced.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::unit::Measurement;

/// A single CSS declaration value.
///
/// Deserializes untagged: JSON/YAML numbers become [`CssValue::Number`],
/// strings become [`CssValue::Text`].
///
/// ```rust
/// use fluid_style::CssValue;
///
/// let size: CssValue = 16.into();
/// assert_eq!(size.to_string(), "16");
///
/// let family: CssValue = "sans-serif".into();
/// assert!(!family.is_measurement());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    /// A bare number; interpolates as `px`.
    Number(f64),
    /// CSS text such as `"1.5em"`, `"100%"` or `"sans-serif"`.
    Text(String),
}

impl CssValue {
    /// Parses this value as a measurement, if it is one.
    ///
    /// Bare numbers are treated as pixels.
    pub fn to_measurement(&self) -> Option<Measurement> {
        match self {
            CssValue::Number(n) => Some(Measurement::from_px(*n)),
            CssValue::Text(text) => Measurement::parse(text),
        }
    }

    /// Returns `true` if the value starts with a number.
    pub fn is_measurement(&self) -> bool {
        match self {
            CssValue::Number(n) => n.is_finite(),
            CssValue::Text(text) => crate::unit::strip_unit(text).is_some(),
        }
    }

    /// Extracts the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CssValue::Text(text) => Some(text),
            CssValue::Number(_) => None,
        }
    }

    /// Extracts the number, if this is a bare number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CssValue::Number(n) => Some(*n),
            CssValue::Text(_) => None,
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Number(n) => write!(f, "{}", n),
            CssValue::Text(text) => f.write_str(text),
        }
    }
}

// Whole numbers serialize as integers so `16` doesn't come back as `16.0`.
impl Serialize for CssValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CssValue::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            CssValue::Number(n) => serializer.serialize_f64(*n),
            CssValue::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl From<f64> for CssValue {
    fn from(n: f64) -> Self {
        CssValue::Number(n)
    }
}

impl From<i32> for CssValue {
    fn from(n: i32) -> Self {
        CssValue::Number(n as f64)
    }
}

impl From<u32> for CssValue {
    fn from(n: u32) -> Self {
        CssValue::Number(n as f64)
    }
}

impl From<&str> for CssValue {
    fn from(text: &str) -> Self {
        CssValue::Text(text.to_string())
    }
}

impl From<String> for CssValue {
    fn from(text: String) -> Self {
        CssValue::Text(text)
    }
}

impl From<Measurement> for CssValue {
    fn from(measurement: Measurement) -> Self {
        CssValue::Text(measurement.raw().to_string())
    }
}
