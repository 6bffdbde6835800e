//! Responsive value extraction.
//!
//! Finds the base declarations that can be interpolated and lines up each
//! one's values with `[fluid start, breakpoint 0, breakpoint 1, ...]`.

use crate::options::FluidOptions;
use crate::style::StyleObject;
use crate::theme::Breakpoints;
use crate::unit::Measurement;

/// One property's values aligned with the anchored breakpoints.
///
/// Position 0 is the base declaration; position `i > 0` is the value in the
/// block of breakpoint `i - 1`, or `None` when that block doesn't declare it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiveValues {
    property: String,
    values: Vec<Option<Measurement>>,
}

impl ResponsiveValues {
    pub fn new(property: impl Into<String>, values: Vec<Option<Measurement>>) -> Self {
        Self {
            property: property.into(),
            values,
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn values(&self) -> &[Option<Measurement>] {
        &self.values
    }

    /// The single unit shared by every present value, if there is one.
    fn shared_unit(&self) -> Option<&str> {
        let mut units = self.values.iter().flatten().map(Measurement::unit);
        let first = units.next()?;
        units.all(|unit| unit == first).then_some(first)
    }
}

/// Collects the interpolatable properties of a style object.
///
/// A property qualifies when its base value is a measurement and every value
/// declared for it across the breakpoint blocks is a measurement in the same
/// unit. With [`FluidOptions::with_require_breakpoint_unit`] that unit must
/// also be the breakpoint unit. Anything else is left for literal output.
pub fn extract_responsive_values(
    style: &StyleObject,
    breakpoints: &Breakpoints,
    options: &FluidOptions,
) -> Vec<ResponsiveValues> {
    if breakpoints.anchored().is_empty() {
        return Vec::new();
    }

    let queries = breakpoints.media_queries();

    style
        .base()
        .iter()
        .filter(|(_, value)| value.is_measurement())
        .filter_map(|(property, base)| {
            let mut values = Vec::with_capacity(queries.len() + 1);
            values.push(Some(base.to_measurement()?));
            for query in &queries {
                match style.get_media(query, property) {
                    Some(value) => values.push(Some(value.to_measurement()?)),
                    None => values.push(None),
                }
            }
            Some(ResponsiveValues::new(property.as_str(), values))
        })
        .filter(|responsive| {
            let eligible = match (responsive.shared_unit(), options.requires_breakpoint_unit()) {
                (Some(unit), true) => breakpoints.unit().map_or(true, |bp_unit| bp_unit == unit),
                (Some(_), false) => true,
                (None, _) => false,
            };
            if !eligible {
                tracing::debug!(
                    property = responsive.property(),
                    "property values cannot be interpolated; keeping literal values"
                );
            }
            eligible
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{normalize_breakpoints, Theme};
    use crate::unit::build_media_query;

    fn bps(theme: Theme) -> Breakpoints {
        normalize_breakpoints(&theme, &FluidOptions::default()).unwrap()
    }

    fn mq(bp: &str) -> String {
        build_media_query(bp)
    }

    fn raws(values: &ResponsiveValues) -> Vec<Option<&str>> {
        values
            .values()
            .iter()
            .map(|v| v.as_ref().map(Measurement::raw))
            .collect()
    }

    #[test]
    fn aligns_values_with_breakpoints() {
        let breakpoints = bps(Theme::new().with_breakpoints(["40em", "52em"]));
        let style = StyleObject::new()
            .with("fontSize", "16px")
            .with_media(&mq("52em"), "fontSize", "21px");

        let extracted = extract_responsive_values(&style, &breakpoints, &FluidOptions::default());
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].property(), "fontSize");
        assert_eq!(raws(&extracted[0]), vec![Some("16px"), None, Some("21px")]);
    }

    #[test]
    fn skips_keyword_properties() {
        let breakpoints = bps(Theme::new().with_breakpoints(["40em"]));
        let style = StyleObject::new()
            .with("textAlign", "left")
            .with("fontFamily", "sans-serif")
            .with_media(&mq("40em"), "textAlign", "center");

        assert!(extract_responsive_values(&style, &breakpoints, &FluidOptions::default()).is_empty());
    }

    #[test]
    fn numbers_become_pixels() {
        let breakpoints = bps(Theme::new().with_breakpoints(["40em"]));
        let style = StyleObject::new()
            .with("fontSize", 16)
            .with_media(&mq("40em"), "fontSize", 21);

        let extracted = extract_responsive_values(&style, &breakpoints, &FluidOptions::default());
        assert_eq!(raws(&extracted[0]), vec![Some("16px"), Some("21px")]);
    }

    #[test]
    fn mixed_value_units_are_excluded() {
        let breakpoints = bps(Theme::new().with_breakpoints(["40em"]));
        let style = StyleObject::new()
            .with("fontSize", "16px")
            .with_media(&mq("40em"), "fontSize", "2em");

        assert!(extract_responsive_values(&style, &breakpoints, &FluidOptions::default()).is_empty());
    }

    #[test]
    fn keyword_override_excludes_property() {
        let breakpoints = bps(Theme::new().with_breakpoints(["40em"]));
        let style = StyleObject::new()
            .with("width", "100%")
            .with_media(&mq("40em"), "width", "auto");

        assert!(extract_responsive_values(&style, &breakpoints, &FluidOptions::default()).is_empty());
    }

    #[test]
    fn strict_mode_requires_breakpoint_unit() {
        let breakpoints = bps(Theme::new().with_breakpoints(["40em"]));
        let style = StyleObject::new()
            .with("fontSize", "16px")
            .with("letterSpacing", "0.1em")
            .with_media(&mq("40em"), "fontSize", "21px")
            .with_media(&mq("40em"), "letterSpacing", "0.2em");

        let strict = FluidOptions::new().with_require_breakpoint_unit(true);
        let extracted = extract_responsive_values(&style, &breakpoints, &strict);
        let props: Vec<_> = extracted.iter().map(ResponsiveValues::property).collect();
        assert_eq!(props, vec!["letterSpacing"]);

        let lenient = extract_responsive_values(&style, &breakpoints, &FluidOptions::default());
        assert_eq!(lenient.len(), 2);
    }

    #[test]
    fn no_fluid_start_means_nothing_to_extract() {
        let breakpoints = bps(Theme::new().with_breakpoints(Vec::<&str>::new()));
        let style = StyleObject::new().with("fontSize", "16px");
        assert!(extract_responsive_values(&style, &breakpoints, &FluidOptions::default()).is_empty());
    }
}
