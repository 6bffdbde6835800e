//! Responsive props.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use fluid_style::CssValue;

/// A prop value: one value for every width, or one per breakpoint.
///
/// Responsive entry 0 applies below the first breakpoint; entry `i` applies
/// from breakpoint `i - 1`. `None` entries declare nothing at that
/// breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Responsive(Vec<Option<CssValue>>),
    Single(CssValue),
}

impl PropValue {
    /// Builds a responsive value from optional entries.
    ///
    /// ```rust
    /// use fluid_style_system::PropValue;
    ///
    /// let sizes = PropValue::responsive([Some("16px"), None, Some("21px")]);
    /// assert!(matches!(sizes, PropValue::Responsive(v) if v.len() == 3));
    /// ```
    pub fn responsive<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<V>>,
        V: Into<CssValue>,
    {
        PropValue::Responsive(values.into_iter().map(|v| v.map(Into::into)).collect())
    }
}

impl From<CssValue> for PropValue {
    fn from(value: CssValue) -> Self {
        PropValue::Single(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Single(value.into())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Single(value.into())
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Single(value.into())
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Single(value.into())
    }
}

impl From<Vec<Option<CssValue>>> for PropValue {
    fn from(values: Vec<Option<CssValue>>) -> Self {
        PropValue::Responsive(values)
    }
}

/// Props passed to a [`System`](crate::System), in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Props(IndexMap<String, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prop, returning `self` for chaining.
    pub fn with(mut self, prop: &str, value: impl Into<PropValue>) -> Self {
        self.0.insert(prop.to_string(), value.into());
        self
    }

    pub fn get(&self, prop: &str) -> Option<&PropValue> {
        self.0.get(prop)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
