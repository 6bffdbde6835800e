//! # Fluid Style - viewport-interpolated CSS from responsive values
//!
//! Responsive style systems switch a property's value at each breakpoint:
//! `fontSize: [16px, 21px]` is 16px below `40em` and 21px from there on.
//! `fluid-style` replaces the jump with a `calc()` that scales the value
//! linearly with the viewport width between two breakpoints.
//!
//! ```rust
//! use fluid_style::{fluid, build_media_query, StyleContext, StyleObject, Theme};
//!
//! // Any style function works; this one handles a single property.
//! let font_size = fluid(|sizes: &Vec<&str>, ctx: &StyleContext<'_>| {
//!     let mut style = StyleObject::new().with("fontSize", sizes[0]);
//!     for (bp, size) in ctx.breakpoints().values().iter().zip(&sizes[1..]) {
//!         style.insert_media(&build_media_query(bp.raw()), "fontSize", *size);
//!     }
//!     style
//! });
//!
//! let theme = Theme::from_yaml(r#"
//! breakpoints:
//!   sm: 40em
//!   fluidStart: 20em
//! "#).unwrap();
//!
//! let style = font_size.apply(&theme, &vec!["16px", "21px"]).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&style).unwrap(),
//!     concat!(
//!         r#"{"fontSize":"16px","#,
//!         r#""@media screen and (min-width: 20em)":{"fontSize":"calc(16px + (21 - 16)*(100vw - 20em)/(40 - 20))"},"#,
//!         r#""@media screen and (min-width: 40em)":{"fontSize":"21px"}}"#,
//!     )
//! );
//! ```
//!
//! ## Concepts
//!
//! - [`Theme`]: breakpoints (list or keyed, with a `fluidStart` anchor) and value scales
//! - [`Breakpoints`]: the normalized, single-unit breakpoint list
//! - [`StyleObject`]: base declarations plus media query blocks
//! - [`StyleFunction`]: the caller's props-to-style mapping
//! - [`Fluid`]: a style function wrapped to emit fluid declarations
//!
//! ## Which properties become fluid
//!
//! A property is interpolated when its base value is a measurement and every
//! value declared for it across breakpoints is a measurement in one unit.
//! Keywords (`sans-serif`, `center`), mixed units and `calc()` values pass
//! through untouched. Missing values are skipped: `[16px, null, 21px]`
//! scales straight from the fluid start to the second breakpoint.
//!
//! ## Errors
//!
//! Only theme problems are errors: breakpoints in several units, a fluid
//! start in a different unit, or a breakpoint unit with no default fluid
//! start (anything but `em`, `rem` and `px`). See [`FluidError`].

mod engine;
mod error;
mod options;
mod style;
mod theme;
mod unit;
mod value;

pub use engine::{
    build_transition_groups, extract_responsive_values, fluid, interpolate, lerp_calc,
    merge_styles, synthesize_fluid_styles, Fluid, ResponsiveValues, StyleContext, StyleFunction,
    TransitionGroup, TransitionInterval,
};
pub use error::{FluidError, Result, UnitMismatch};
pub use options::{FluidOptions, DEFAULT_BREAKPOINTS};
pub use style::{Declarations, StyleObject};
pub use theme::{
    normalize_breakpoints, BreakpointSpec, Breakpoints, Scale, Theme, ThemeError,
    FLUID_START_KEY,
};
pub use unit::{
    build_media_query, get_unit, is_media_query, is_measurement, parse_media_query_width,
    strip_unit, Measurement, MEDIA_PREFIX,
};
pub use value::CssValue;
