//! Error types for fluid style computation.
//!
//! Only two situations abort a computation: units that cannot be
//! interpolated against each other, and a breakpoint unit with no default
//! fluid start. A malformed breakpoint entry is reported on its own so the
//! caller can see which theme value is wrong. Everything else (gaps,
//! keyword values, ineligible properties) falls back to literal output.

use thiserror::Error;

/// Errors that can occur while normalizing a theme or synthesizing fluid styles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FluidError {
    /// Two measurements that must share a unit do not.
    #[error(transparent)]
    UnitMismatch(#[from] UnitMismatch),

    /// No fluid start was given and the breakpoint unit has no default one.
    #[error(
        "cannot define a default fluid starting width for {} breakpoints; set `fluidStart` on the theme breakpoints instead",
        describe_unit(.unit)
    )]
    UnsupportedUnit { unit: String },

    /// A breakpoint entry is not a measurement.
    #[error("invalid breakpoint '{value}': expected a number with an optional unit")]
    InvalidBreakpoint { value: String },
}

impl FluidError {
    /// Returns `true` for any flavour of [`UnitMismatch`].
    pub fn is_unit_mismatch(&self) -> bool {
        matches!(self, FluidError::UnitMismatch(_))
    }

    /// Returns `true` if no default fluid start exists for the breakpoint unit.
    pub fn is_unsupported_unit(&self) -> bool {
        matches!(self, FluidError::UnsupportedUnit { .. })
    }
}

/// The check that found incompatible units.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitMismatch {
    /// Theme breakpoints are declared in more than one unit.
    #[error(
        "cannot interpolate between dissimilar units in the theme breakpoints: [{}]",
        quote_all(.breakpoints)
    )]
    Breakpoints { breakpoints: Vec<String> },

    /// The fluid start is not in the breakpoint unit.
    #[error(
        "the fluid starting width '{fluid_start}' must be defined in the same unit as the theme breakpoints ({unit})"
    )]
    FluidStart { fluid_start: String, unit: String },

    /// The two ends of a transition interval differ in unit.
    #[error("cannot interpolate between dissimilar units: '{min}' and '{max}'")]
    Interval { min: String, max: String },
}

fn quote_all(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{}\"", v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_unit(unit: &str) -> String {
    if unit.is_empty() {
        "unitless".to_string()
    } else {
        format!("\"{}\" unit", unit)
    }
}

/// Result type for fluid style operations.
pub type Result<T> = std::result::Result<T, FluidError>;
