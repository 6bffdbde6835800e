//! The fluid style pipeline.
//!
//! [`Fluid::apply`] runs each stage in order, every stage producing a new
//! value from the previous one:
//!
//! 1. [`normalize_breakpoints`]: validate and default the theme breakpoints
//! 2. the caller's [`StyleFunction`]: props to a literal [`StyleObject`]
//! 3. [`extract_responsive_values`]: interpolatable properties and their
//!    per-breakpoint values
//! 4. [`build_transition_groups`]: pair declared values into intervals
//! 5. [`synthesize_fluid_styles`]: one `calc()` per interval
//! 6. [`merge_styles`]: overlay onto the literal style object
//!
//! Stages 3 to 6 are also available together as [`interpolate`] for callers
//! that already hold a style object.

mod extract;
mod merge;
mod synthesize;
mod transition;

pub use extract::{extract_responsive_values, ResponsiveValues};
pub use merge::merge_styles;
pub use synthesize::{lerp_calc, synthesize_fluid_styles};
pub use transition::{build_transition_groups, TransitionGroup, TransitionInterval};

use crate::error::Result;
use crate::options::FluidOptions;
use crate::style::StyleObject;
use crate::theme::{normalize_breakpoints, Breakpoints, Theme};

/// What a style function sees besides its props.
#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    theme: &'a Theme,
    breakpoints: &'a Breakpoints,
}

impl<'a> StyleContext<'a> {
    pub fn new(theme: &'a Theme, breakpoints: &'a Breakpoints) -> Self {
        Self { theme, breakpoints }
    }

    /// The caller's theme, for scale lookups.
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// The normalized breakpoints; media blocks should be keyed by
    /// [`build_media_query`](crate::build_media_query) of these.
    pub fn breakpoints(&self) -> &'a Breakpoints {
        self.breakpoints
    }
}

/// Maps responsive props to a literal style object.
///
/// Implemented for any `Fn(&P, &StyleContext) -> StyleObject`.
pub trait StyleFunction<P: ?Sized> {
    fn style(&self, props: &P, ctx: &StyleContext<'_>) -> StyleObject;
}

impl<P, F> StyleFunction<P> for F
where
    P: ?Sized,
    F: Fn(&P, &StyleContext<'_>) -> StyleObject,
{
    fn style(&self, props: &P, ctx: &StyleContext<'_>) -> StyleObject {
        self(props, ctx)
    }
}

/// A style function wrapped to emit fluid declarations.
///
/// # Example
///
/// ```rust
/// use fluid_style::{fluid, StyleContext, StyleObject, Theme, build_media_query};
///
/// let font_size = fluid(|sizes: &[&str], ctx: &StyleContext<'_>| {
///     let mut style = StyleObject::new().with("fontSize", sizes[0]);
///     for (bp, size) in ctx.breakpoints().values().iter().zip(&sizes[1..]) {
///         style.insert_media(&build_media_query(bp.raw()), "fontSize", *size);
///     }
///     style
/// });
///
/// let theme = Theme::new()
///     .with_keyed_breakpoints([("0", "40em"), ("fluidStart", "20em")]);
/// let style = font_size.apply(&theme, &["16px", "21px"][..]).unwrap();
///
/// assert_eq!(
///     style.get_media("@media screen and (min-width: 20em)", "fontSize").unwrap().to_string(),
///     "calc(16px + (21 - 16)*(100vw - 20em)/(40 - 20))"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Fluid<F> {
    style_fn: F,
    options: FluidOptions,
}

/// Wraps a style function with default options.
pub fn fluid<F>(style_fn: F) -> Fluid<F> {
    Fluid::new(style_fn)
}

impl<F> Fluid<F> {
    pub fn new(style_fn: F) -> Self {
        Self {
            style_fn,
            options: FluidOptions::default(),
        }
    }

    /// Replaces the options, returning `self` for chaining.
    pub fn with_options(mut self, options: FluidOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &FluidOptions {
        &self.options
    }

    /// Computes the fluid style object for `props` under `theme`.
    ///
    /// # Errors
    ///
    /// Fails on theme breakpoints that cannot be normalized, and on an
    /// interval whose endpoints differ in unit. No partial output is
    /// produced.
    pub fn apply<P>(&self, theme: &Theme, props: &P) -> Result<StyleObject>
    where
        P: ?Sized,
        F: StyleFunction<P>,
    {
        let breakpoints = normalize_breakpoints(theme, &self.options)?;
        let style = self
            .style_fn
            .style(props, &StyleContext::new(theme, &breakpoints));
        interpolate(&style, &breakpoints, &self.options)
    }
}

/// Adds fluid declarations to an existing literal style object.
pub fn interpolate(
    style: &StyleObject,
    breakpoints: &Breakpoints,
    options: &FluidOptions,
) -> Result<StyleObject> {
    let values = extract_responsive_values(style, breakpoints, options);
    let groups = build_transition_groups(&values, breakpoints);
    tracing::debug!(
        properties = ?groups.iter().map(TransitionGroup::property).collect::<Vec<_>>(),
        "interpolating properties"
    );
    let fluid_styles = synthesize_fluid_styles(&groups)?;
    Ok(merge_styles(style, &fluid_styles))
}
