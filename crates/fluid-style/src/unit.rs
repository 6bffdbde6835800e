//! Measurement parsing and media query helpers.
//!
//! These are the only places that look inside CSS text. Everything
//! downstream works on [`Measurement`]s and canonical media query keys.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::CssValue;

/// Leading number, as read by a lenient float parser (`"2em"` reads `2`).
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid regex")
});

/// A whole measurement: number followed by an optional unit and nothing else.
static MEASUREMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?(?:\d+|\d*\.\d+))([a-z]*|%)$").expect("valid regex"));

static MEDIA_QUERY_WIDTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@media screen and \(min-width: (.*)\)$").expect("valid regex")
});

/// Prefix shared by every media query key.
pub const MEDIA_PREFIX: &str = "@media";

/// A number with a unit, e.g. `40em` or `100%`.
///
/// The original spelling is kept in [`raw`](Measurement::raw) and is what
/// gets rendered into media queries and `calc()` expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    value: f64,
    unit: String,
    raw: String,
}

impl Measurement {
    /// Parses a measurement such as `"16px"`, `"1.33em"`, `"-4px"` or `"50%"`.
    ///
    /// A bare numeric string parses with an empty (unitless) unit.
    /// Returns `None` for anything else, including keywords and `calc()`.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = MEASUREMENT.captures(text)?;
        let value = caps[1].parse::<f64>().ok()?;
        Some(Self {
            value,
            unit: caps[2].to_string(),
            raw: text.to_string(),
        })
    }

    /// Builds a pixel measurement from a bare number.
    pub fn from_px(value: f64) -> Self {
        Self {
            value,
            unit: "px".to_string(),
            raw: format!("{}px", value),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Reads the leading number of a measurement, ignoring any unit.
///
/// Returns `None` when the text does not start with a number.
///
/// ```rust
/// use fluid_style::strip_unit;
///
/// assert_eq!(strip_unit("1.33em"), Some(1.33));
/// assert_eq!(strip_unit("-4px"), Some(-4.0));
/// assert_eq!(strip_unit("auto"), None);
/// ```
pub fn strip_unit(text: &str) -> Option<f64> {
    LEADING_NUMBER
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}

/// Returns the unit of a value.
///
/// Bare numbers are `px`, unitless numeric text is `""`, and values that are
/// not measurements have no unit.
pub fn get_unit(value: &CssValue) -> Option<String> {
    value.to_measurement().map(|m| m.unit)
}

/// Returns `true` if the value starts with a number.
pub fn is_measurement(value: &CssValue) -> bool {
    value.is_measurement()
}

/// Builds the canonical min-width media query key for a breakpoint.
pub fn build_media_query(breakpoint: &str) -> String {
    format!("{} screen and (min-width: {})", MEDIA_PREFIX, breakpoint)
}

/// Returns `true` if a style object key is a media query rather than a property.
pub fn is_media_query(key: &str) -> bool {
    key.starts_with(MEDIA_PREFIX)
}

/// Reads the breakpoint width back out of a key built by [`build_media_query`].
pub fn parse_media_query_width(query: &str) -> Option<f64> {
    MEDIA_QUERY_WIDTH
        .captures(query)
        .and_then(|caps| strip_unit(&caps[1]))
}
