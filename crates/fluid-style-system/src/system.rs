//! Scale-aware style functions.
//!
//! A [`System`] is a set of [`StyleProp`]s. Given [`Props`], it resolves each
//! known prop's values through the theme scale and writes them to the prop's
//! CSS properties, placing responsive entries in their breakpoint's media
//! block. Unknown props are ignored.

use std::fmt;

use indexmap::IndexMap;

use fluid_style::{build_media_query, CssValue, Scale, StyleContext, StyleFunction, StyleObject};

use crate::props::{PropValue, Props};

/// Resolves a raw prop value against an optional scale.
pub type Transform = fn(&CssValue, Option<&Scale>) -> CssValue;

/// Looks the value up in the scale, falling back to the value itself.
pub fn scale_lookup(value: &CssValue, scale: Option<&Scale>) -> CssValue {
    scale
        .and_then(|scale| scale.lookup(value))
        .cloned()
        .unwrap_or_else(|| value.clone())
}

/// Describes how one prop maps to CSS.
#[derive(Clone)]
pub struct StyleProp {
    properties: Vec<String>,
    scale: Option<String>,
    default_scale: Option<Scale>,
    transform: Transform,
}

impl StyleProp {
    /// A prop writing to a single CSS property.
    pub fn new(property: &str) -> Self {
        Self {
            properties: vec![property.to_string()],
            scale: None,
            default_scale: None,
            transform: scale_lookup,
        }
    }

    /// A prop writing the same value to several CSS properties (`mx`, `py`, ...).
    pub fn multi<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
            ..Self::new("")
        }
    }

    /// Sets the theme key of the scale values resolve against.
    pub fn scale(mut self, key: &str) -> Self {
        self.scale = Some(key.to_string());
        self
    }

    /// Sets the scale used when the theme doesn't define one.
    pub fn default_scale(mut self, scale: Scale) -> Self {
        self.default_scale = Some(scale);
        self
    }

    /// Replaces the value transform.
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    fn resolve(&self, value: &CssValue, ctx: &StyleContext<'_>) -> CssValue {
        let scale = self
            .scale
            .as_deref()
            .and_then(|key| ctx.theme().scale(key))
            .or(self.default_scale.as_ref());
        (self.transform)(value, scale)
    }
}

impl fmt::Debug for StyleProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleProp")
            .field("properties", &self.properties)
            .field("scale", &self.scale)
            .field("default_scale", &self.default_scale)
            .finish_non_exhaustive()
    }
}

/// An ordered set of style props, usable as a [`StyleFunction`].
///
/// ```rust
/// use fluid_style::{fluid, Theme};
/// use fluid_style_system::{PropValue, Props, StyleProp, System};
///
/// let system = System::new().prop("size", StyleProp::new("fontSize").scale("fontSizes"));
/// let theme = Theme::new()
///     .with_breakpoints(["40em"])
///     .with_fluid_start("20em");
/// let props = Props::new().with("size", PropValue::responsive([Some("1em"), Some("2em")]));
///
/// let style = fluid(system).apply(&theme, &props).unwrap();
/// assert!(style.get_media("@media screen and (min-width: 20em)", "fontSize").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct System {
    props: IndexMap<String, StyleProp>,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a prop, returning `self` for chaining.
    pub fn prop(mut self, name: &str, config: StyleProp) -> Self {
        self.props.insert(name.to_string(), config);
        self
    }

    /// Combines two systems; props from `other` replace same-named ones.
    pub fn compose(mut self, other: System) -> Self {
        self.props.extend(other.props);
        self
    }

    /// Returns `true` if the system knows the prop.
    pub fn handles(&self, prop: &str) -> bool {
        self.props.contains_key(prop)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl StyleFunction<Props> for System {
    fn style(&self, props: &Props, ctx: &StyleContext<'_>) -> StyleObject {
        let queries: Vec<String> = ctx
            .breakpoints()
            .values()
            .iter()
            .map(|bp| build_media_query(bp.raw()))
            .collect();

        let mut style = StyleObject::new();
        for (name, value) in props.iter() {
            let Some(config) = self.props.get(name) else {
                continue;
            };
            match value {
                PropValue::Single(value) => {
                    let resolved = config.resolve(value, ctx);
                    for property in config.properties() {
                        style.insert(property, resolved.clone());
                    }
                }
                PropValue::Responsive(values) => {
                    // Entries past the last breakpoint have nowhere to go.
                    for (i, value) in values.iter().take(queries.len() + 1).enumerate() {
                        let Some(value) = value else { continue };
                        let resolved = config.resolve(value, ctx);
                        for property in config.properties() {
                            match i {
                                0 => style.insert(property, resolved.clone()),
                                _ => style.insert_media(&queries[i - 1], property, resolved.clone()),
                            }
                        }
                    }
                }
            }
        }
        style
    }
}
