//! Breakpoint normalization.
//!
//! Normalization runs as a chain of fallible steps, stopping at the first
//! error:
//!
//! 1. install default breakpoints when none are declared
//! 2. flatten keyed breakpoints into an ascending list
//! 3. parse every entry as a measurement
//! 4. require a single breakpoint unit
//! 5. derive a fluid start from that unit when none is declared
//! 6. require the fluid start to share the breakpoint unit

use std::cmp::Ordering;

use crate::error::{FluidError, Result, UnitMismatch};
use crate::options::FluidOptions;
use crate::unit::{build_media_query, strip_unit, Measurement};
use crate::value::CssValue;

use super::theme::{BreakpointSpec, Theme};

/// Reserved key naming the fluid start inside keyed breakpoints.
pub const FLUID_START_KEY: &str = "fluidStart";

/// Ascending breakpoints sharing one unit, plus the fluid start anchor.
///
/// The fluid start is always present when there is at least one breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    values: Vec<Measurement>,
    fluid_start: Option<Measurement>,
}

impl Breakpoints {
    /// Ascending breakpoints, excluding the fluid start.
    pub fn values(&self) -> &[Measurement] {
        &self.values
    }

    pub fn fluid_start(&self) -> Option<&Measurement> {
        self.fluid_start.as_ref()
    }

    /// The unit shared by all breakpoints.
    pub fn unit(&self) -> Option<&str> {
        self.values.first().map(Measurement::unit)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The fluid start followed by every breakpoint.
    ///
    /// Responsive value sequences are indexed against this list: position 0
    /// holds the base declaration. Empty when there is no fluid start.
    pub fn anchored(&self) -> Vec<&Measurement> {
        match &self.fluid_start {
            Some(start) => std::iter::once(start).chain(self.values.iter()).collect(),
            None => Vec::new(),
        }
    }

    /// Media query keys for each breakpoint, excluding the fluid start.
    pub fn media_queries(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|bp| build_media_query(bp.raw()))
            .collect()
    }
}

/// Normalizes a theme's breakpoint declaration.
///
/// The theme is only read; the normalized breakpoints are returned as a new
/// value.
///
/// # Errors
///
/// - [`FluidError::InvalidBreakpoint`] if an entry is not a measurement
/// - [`FluidError::UnitMismatch`] if breakpoints use several units, or the
///   fluid start uses a different one
/// - [`FluidError::UnsupportedUnit`] if no fluid start is declared and the
///   breakpoint unit is not `em`, `rem` or `px`
pub fn normalize_breakpoints(theme: &Theme, options: &FluidOptions) -> Result<Breakpoints> {
    let declared = with_default_breakpoints(theme, options);
    let listed = into_ascending_list(declared, theme.fluid_start());
    let parsed = parse_breakpoints(listed)?;
    let checked = check_breakpoint_units(parsed)?;
    let anchored = with_default_fluid_start(checked)?;
    let breakpoints = check_fluid_start_unit(anchored)?;

    tracing::debug!(
        breakpoints = ?breakpoints.values.iter().map(Measurement::raw).collect::<Vec<_>>(),
        fluid_start = breakpoints.fluid_start.as_ref().map(Measurement::raw),
        "normalized theme breakpoints"
    );

    Ok(breakpoints)
}

struct Listed {
    values: Vec<CssValue>,
    fluid_start: Option<CssValue>,
}

fn with_default_breakpoints(theme: &Theme, options: &FluidOptions) -> BreakpointSpec {
    match theme.breakpoints() {
        Some(spec) => spec.clone(),
        None => BreakpointSpec::List(
            options
                .default_breakpoints()
                .iter()
                .map(|bp| CssValue::from(bp.as_str()))
                .collect(),
        ),
    }
}

fn into_ascending_list(spec: BreakpointSpec, fluid_start: Option<&CssValue>) -> Listed {
    match spec {
        BreakpointSpec::List(values) => Listed {
            values,
            fluid_start: fluid_start.cloned(),
        },
        BreakpointSpec::Keyed(entries) => {
            let mut fluid_start = fluid_start.cloned();
            let mut values = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                if key == FLUID_START_KEY {
                    fluid_start = Some(value);
                } else {
                    values.push(value);
                }
            }
            values.sort_by(|a, b| {
                numeric(a)
                    .partial_cmp(&numeric(b))
                    .unwrap_or(Ordering::Equal)
            });
            Listed {
                values,
                fluid_start,
            }
        }
    }
}

// Non-numeric entries sort last; parsing rejects them right after.
fn numeric(value: &CssValue) -> f64 {
    match value {
        CssValue::Number(n) => *n,
        CssValue::Text(text) => strip_unit(text).unwrap_or(f64::INFINITY),
    }
}

struct Parsed {
    values: Vec<Measurement>,
    fluid_start: Option<Measurement>,
}

fn parse_breakpoint(value: &CssValue) -> Result<Measurement> {
    value
        .to_measurement()
        .ok_or_else(|| FluidError::InvalidBreakpoint {
            value: value.to_string(),
        })
}

fn parse_breakpoints(listed: Listed) -> Result<Parsed> {
    let values = listed
        .values
        .iter()
        .map(parse_breakpoint)
        .collect::<Result<Vec<_>>>()?;
    let fluid_start = listed.fluid_start.as_ref().map(parse_breakpoint).transpose()?;
    Ok(Parsed {
        values,
        fluid_start,
    })
}

fn check_breakpoint_units(parsed: Parsed) -> Result<Parsed> {
    let mut units = parsed.values.iter().map(Measurement::unit);
    if let Some(first) = units.next() {
        if units.any(|unit| unit != first) {
            return Err(UnitMismatch::Breakpoints {
                breakpoints: parsed
                    .values
                    .iter()
                    .map(|bp| bp.raw().to_string())
                    .collect(),
            }
            .into());
        }
    }
    Ok(parsed)
}

fn default_fluid_start(unit: &str) -> Option<&'static str> {
    match unit {
        "em" => Some("20em"),
        "rem" => Some("20rem"),
        "px" => Some("320px"),
        _ => None,
    }
}

fn with_default_fluid_start(parsed: Parsed) -> Result<Parsed> {
    if parsed.fluid_start.is_some() {
        return Ok(parsed);
    }
    let Some(first) = parsed.values.first() else {
        // Nothing to interpolate between, so no anchor is needed.
        return Ok(parsed);
    };

    let unit = first.unit();
    let fluid_start = default_fluid_start(unit)
        .and_then(Measurement::parse)
        .ok_or_else(|| FluidError::UnsupportedUnit {
            unit: unit.to_string(),
        })?;

    Ok(Parsed {
        fluid_start: Some(fluid_start),
        ..parsed
    })
}

fn check_fluid_start_unit(parsed: Parsed) -> Result<Breakpoints> {
    if let (Some(first), Some(fluid_start)) = (parsed.values.first(), &parsed.fluid_start) {
        if first.unit() != fluid_start.unit() {
            return Err(UnitMismatch::FluidStart {
                fluid_start: fluid_start.raw().to_string(),
                unit: first.unit().to_string(),
            }
            .into());
        }
    }
    Ok(Breakpoints {
        values: parsed.values,
        fluid_start: parsed.fluid_start,
    })
}
