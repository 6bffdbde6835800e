//! Theme struct holding breakpoints and value scales.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::value::CssValue;

/// Error type for theme and options loading failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The content could not be parsed.
    #[error("failed to parse theme{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the parser.
        message: String,
    },

    /// The file could not be read.
    #[error("failed to load theme: {message}")]
    Load { message: String },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// How a theme declares its breakpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BreakpointSpec {
    /// Ascending widths, e.g. `["40em", "52em", "64em"]`.
    List(Vec<CssValue>),
    /// Arbitrary keys to widths, plus an optional reserved `fluidStart` entry.
    ///
    /// Integer keys (`0: 40em` in YAML) are stored as their decimal text.
    Keyed(#[serde(deserialize_with = "keyed_breakpoints")] IndexMap<String, CssValue>),
}

#[derive(PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
enum BreakpointKey {
    Index(i64),
    Name(String),
}

fn keyed_breakpoints<'de, D>(deserializer: D) -> Result<IndexMap<String, CssValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = IndexMap::<BreakpointKey, CssValue>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|(key, value)| match key {
            BreakpointKey::Index(i) => (i.to_string(), value),
            BreakpointKey::Name(name) => (name, value),
        })
        .collect())
}

/// A lookup table style functions resolve prop values against.
///
/// List scales are indexed by number (`fontSize: 2` picks the third entry);
/// map scales are indexed by key (`color: "primary"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scale {
    List(Vec<CssValue>),
    Map(IndexMap<String, CssValue>),
}

impl Scale {
    /// Looks up a prop value in the scale.
    ///
    /// Returns `None` when the value is not a key or index of the scale, in
    /// which case callers use the value as-is.
    pub fn lookup(&self, key: &CssValue) -> Option<&CssValue> {
        match (self, key) {
            (Scale::List(values), CssValue::Number(n)) if n.fract() == 0.0 && *n >= 0.0 => {
                values.get(*n as usize)
            }
            (Scale::List(values), CssValue::Text(text)) => {
                text.parse::<usize>().ok().and_then(|i| values.get(i))
            }
            (Scale::Map(entries), key) => entries.get(&key.to_string()),
            _ => None,
        }
    }
}

/// Breakpoints and scales for responsive style computation.
///
/// Scales are stored under their theme key (`fontSizes`, `space`, ...) and
/// serialize flat alongside `breakpoints`, matching the usual theme shape:
///
/// ```rust
/// use fluid_style::Theme;
///
/// let theme = Theme::from_yaml(r#"
/// breakpoints: [40em, 52em]
/// fluidStart: 20em
/// fontSizes: [12, 14, 16, 20]
/// "#).unwrap();
///
/// assert!(theme.scale("fontSizes").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    breakpoints: Option<BreakpointSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fluid_start: Option<CssValue>,
    #[serde(flatten, deserialize_with = "scales_only")]
    scales: IndexMap<String, Scale>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeEntry {
    Scale(Scale),
    Other(IgnoredAny),
}

// Themes carry more than scales (colors, flags, ...); keep only what parses as one.
fn scales_only<'de, D>(deserializer: D) -> Result<IndexMap<String, Scale>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = IndexMap::<String, ThemeEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|(key, entry)| match entry {
            ThemeEntry::Scale(scale) => Some((key, scale)),
            ThemeEntry::Other(_) => None,
        })
        .collect())
}

impl Theme {
    /// Creates a theme with no breakpoints and no scales.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets list breakpoints, returning `self` for chaining.
    pub fn with_breakpoints<I, V>(mut self, breakpoints: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CssValue>,
    {
        self.breakpoints = Some(BreakpointSpec::List(
            breakpoints.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Sets keyed breakpoints, returning `self` for chaining.
    ///
    /// A `fluidStart` key sets the fluid start anchor.
    pub fn with_keyed_breakpoints<I, K, V>(mut self, breakpoints: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CssValue>,
    {
        self.breakpoints = Some(BreakpointSpec::Keyed(
            breakpoints
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ));
        self
    }

    /// Sets the fluid start anchor, returning `self` for chaining.
    ///
    /// A `fluidStart` entry inside keyed breakpoints takes precedence.
    pub fn with_fluid_start(mut self, fluid_start: impl Into<CssValue>) -> Self {
        self.fluid_start = Some(fluid_start.into());
        self
    }

    /// Adds a named scale, returning `self` for chaining.
    pub fn with_scale(mut self, name: &str, scale: Scale) -> Self {
        self.scales.insert(name.to_string(), scale);
        self
    }

    /// Loads a theme from a YAML or JSON file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| ThemeError::Parse {
            path: Some(path.to_path_buf()),
            message,
        })
    }

    /// Creates a theme from YAML content.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Creates a theme from JSON content.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(json).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Returns the breakpoint declaration, if any.
    pub fn breakpoints(&self) -> Option<&BreakpointSpec> {
        self.breakpoints.as_ref()
    }

    /// Returns the list-level fluid start, if set.
    pub fn fluid_start(&self) -> Option<&CssValue> {
        self.fluid_start.as_ref()
    }

    /// Returns a scale by theme key.
    pub fn scale(&self, name: &str) -> Option<&Scale> {
        self.scales.get(name)
    }
}
