//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::theme::ThemeError;

/// Breakpoints installed when a theme declares none.
pub const DEFAULT_BREAKPOINTS: [&str; 3] = ["40em", "52em", "64em"];

/// Options controlling how fluid styles are computed.
///
/// Options can be built in code or loaded from YAML:
///
/// ```rust
/// use fluid_style::FluidOptions;
///
/// let options = FluidOptions::from_yaml(r#"
/// requireBreakpointUnit: true
/// defaultBreakpoints: [30em, 60em]
/// "#).unwrap();
///
/// assert!(options.requires_breakpoint_unit());
/// assert_eq!(options.default_breakpoints(), ["30em", "60em"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FluidOptions {
    require_breakpoint_unit: bool,
    default_breakpoints: Vec<String>,
}

impl FluidOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only interpolate properties declared in the breakpoint unit.
    ///
    /// Off by default: `px` font sizes interpolate fine across `em`
    /// breakpoints since `calc()` mixes lengths freely.
    pub fn with_require_breakpoint_unit(mut self, require: bool) -> Self {
        self.require_breakpoint_unit = require;
        self
    }

    /// Replaces the breakpoints used when a theme declares none.
    pub fn with_default_breakpoints<I, S>(mut self, breakpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_breakpoints = breakpoints.into_iter().map(Into::into).collect();
        self
    }

    pub fn requires_breakpoint_unit(&self) -> bool {
        self.require_breakpoint_unit
    }

    pub fn default_breakpoints(&self) -> &[String] {
        &self.default_breakpoints
    }

    /// Loads options from YAML content. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })
    }
}

impl Default for FluidOptions {
    fn default() -> Self {
        Self {
            require_breakpoint_unit: false,
            default_breakpoints: DEFAULT_BREAKPOINTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
