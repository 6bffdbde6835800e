//! Transition interval construction.

use crate::theme::Breakpoints;
use crate::unit::Measurement;

use super::extract::ResponsiveValues;

/// One continuous fluid segment: from `min_value` at `min_breakpoint` to
/// `max_value` at `max_breakpoint`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionInterval {
    pub min_value: Measurement,
    pub min_breakpoint: Measurement,
    pub max_value: Measurement,
    pub max_breakpoint: Measurement,
}

/// The ordered, disjoint intervals of one property.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionGroup {
    property: String,
    intervals: Vec<TransitionInterval>,
}

impl TransitionGroup {
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn intervals(&self) -> &[TransitionInterval] {
        &self.intervals
    }
}

/// Pairs each property's consecutive declared values into intervals.
///
/// Missing values are stepped over: the interval spans the gap and uses the
/// widths of the breakpoints the two values actually sit at. The last value
/// starts no interval; it stays literal from its breakpoint onward.
///
/// Intervals whose two breakpoints have the same width (a fluid start equal
/// to the first breakpoint) are dropped.
pub fn build_transition_groups(
    values: &[ResponsiveValues],
    breakpoints: &Breakpoints,
) -> Vec<TransitionGroup> {
    let anchored = breakpoints.anchored();

    values
        .iter()
        .filter_map(|responsive| {
            let defined: Vec<(&Measurement, &Measurement)> = responsive
                .values()
                .iter()
                .zip(anchored.iter().copied())
                .filter_map(|(value, breakpoint)| value.as_ref().map(|v| (v, breakpoint)))
                .collect();

            let intervals: Vec<TransitionInterval> = defined
                .windows(2)
                .filter_map(|pair| {
                    let (min_value, min_breakpoint) = pair[0];
                    let (max_value, max_breakpoint) = pair[1];
                    if min_breakpoint.value() == max_breakpoint.value() {
                        tracing::debug!(
                            property = responsive.property(),
                            breakpoint = min_breakpoint.raw(),
                            "skipping zero-width interval"
                        );
                        return None;
                    }
                    Some(TransitionInterval {
                        min_value: min_value.clone(),
                        min_breakpoint: min_breakpoint.clone(),
                        max_value: max_value.clone(),
                        max_breakpoint: max_breakpoint.clone(),
                    })
                })
                .collect();

            (!intervals.is_empty()).then(|| TransitionGroup {
                property: responsive.property().to_string(),
                intervals,
            })
        })
        .collect()
}
