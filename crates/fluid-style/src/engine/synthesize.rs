//! Fluid `calc()` synthesis.

use crate::error::{Result, UnitMismatch};
use crate::style::StyleObject;
use crate::unit::build_media_query;

use super::transition::{TransitionGroup, TransitionInterval};

/// Builds the viewport-interpolated value for one interval.
///
/// ```text
/// calc(min + (max - min)*(100vw - minBp)/(maxBp - minBp))
/// ```
///
/// `min` keeps its unit so the result is a length; every other term is a
/// bare number. At `100vw == minBp` this is exactly `min`, at `maxBp`
/// exactly `max`.
pub fn lerp_calc(interval: &TransitionInterval) -> Result<String> {
    let TransitionInterval {
        min_value,
        min_breakpoint,
        max_value,
        max_breakpoint,
    } = interval;

    if min_value.unit() != max_value.unit() {
        return Err(UnitMismatch::Interval {
            min: min_value.raw().to_string(),
            max: max_value.raw().to_string(),
        }
        .into());
    }

    Ok(format!(
        "calc({} + ({} - {})*(100vw - {})/({} - {}))",
        min_value.raw(),
        max_value.value(),
        min_value.value(),
        min_breakpoint.raw(),
        max_breakpoint.value(),
        min_breakpoint.value(),
    ))
}

/// Turns every interval into a declaration under its lower breakpoint's
/// media query.
///
/// The result holds media blocks only.
pub fn synthesize_fluid_styles(groups: &[TransitionGroup]) -> Result<StyleObject> {
    let mut fluid = StyleObject::new();
    for group in groups {
        for interval in group.intervals() {
            let query = build_media_query(interval.min_breakpoint.raw());
            let calc = lerp_calc(interval)?;
            tracing::trace!(property = group.property(), %query, %calc, "fluid declaration");
            fluid.insert_media(&query, group.property(), calc);
        }
    }
    Ok(fluid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FluidError;
    use crate::unit::Measurement;

    fn interval(min: &str, min_bp: &str, max: &str, max_bp: &str) -> TransitionInterval {
        TransitionInterval {
            min_value: Measurement::parse(min).unwrap(),
            min_breakpoint: Measurement::parse(min_bp).unwrap(),
            max_value: Measurement::parse(max).unwrap(),
            max_breakpoint: Measurement::parse(max_bp).unwrap(),
        }
    }

    #[test]
    fn pixel_calc() {
        let calc = lerp_calc(&interval("16px", "20em", "21px", "40em")).unwrap();
        assert_eq!(calc, "calc(16px + (21 - 16)*(100vw - 20em)/(40 - 20))");
    }

    #[test]
    fn fractional_calc() {
        let calc = lerp_calc(&interval("1em", "20em", "1.33em", "40em")).unwrap();
        assert_eq!(calc, "calc(1em + (1.33 - 1)*(100vw - 20em)/(40 - 20))");
    }

    #[test]
    fn percentage_calc() {
        let calc = lerp_calc(&interval("100%", "20em", "150%", "40em")).unwrap();
        assert_eq!(calc, "calc(100% + (150 - 100)*(100vw - 20em)/(40 - 20))");
    }

    #[test]
    fn decreasing_values() {
        let calc = lerp_calc(&interval("32px", "320px", "-8px", "640px")).unwrap();
        assert_eq!(calc, "calc(32px + (-8 - 32)*(100vw - 320px)/(640 - 320))");
    }

    #[test]
    fn mismatched_interval_units() {
        let err = lerp_calc(&interval("16px", "20em", "2em", "40em")).unwrap_err();
        assert_eq!(
            err,
            FluidError::UnitMismatch(UnitMismatch::Interval {
                min: "16px".into(),
                max: "2em".into(),
            })
        );
    }
}
