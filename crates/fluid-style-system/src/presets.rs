//! Built-in style prop sets.

use fluid_style::{CssValue, Scale};

use crate::system::{scale_lookup, StyleProp, System};

/// Default `fontSizes` scale, in pixels.
pub const FONT_SIZES: [u32; 9] = [12, 14, 16, 20, 24, 32, 48, 64, 72];

/// Default `space` scale, in pixels.
pub const SPACE: [u32; 9] = [0, 4, 8, 16, 32, 64, 128, 256, 512];

fn list_scale(values: &[u32]) -> Scale {
    Scale::List(values.iter().map(|&v| CssValue::from(v)).collect())
}

/// Typography props: `fontFamily`, `fontSize`, `fontWeight`, `lineHeight`,
/// `letterSpacing`, `textAlign` and `fontStyle`.
///
/// `fontSize` resolves against the theme's `fontSizes` scale, falling back
/// to [`FONT_SIZES`].
pub fn typography() -> System {
    System::new()
        .prop("fontFamily", StyleProp::new("fontFamily").scale("fonts"))
        .prop(
            "fontSize",
            StyleProp::new("fontSize")
                .scale("fontSizes")
                .default_scale(list_scale(&FONT_SIZES)),
        )
        .prop(
            "fontWeight",
            StyleProp::new("fontWeight").scale("fontWeights"),
        )
        .prop(
            "lineHeight",
            StyleProp::new("lineHeight").scale("lineHeights"),
        )
        .prop(
            "letterSpacing",
            StyleProp::new("letterSpacing").scale("letterSpacings"),
        )
        .prop("textAlign", StyleProp::new("textAlign"))
        .prop("fontStyle", StyleProp::new("fontStyle"))
}

/// Scale lookup that also accepts negated scale steps (`-2` is the negative
/// of step 2).
pub fn negative_scale_lookup(value: &CssValue, scale: Option<&Scale>) -> CssValue {
    let CssValue::Number(n) = value else {
        return scale_lookup(value, scale);
    };
    if *n >= 0.0 {
        return scale_lookup(value, scale);
    }

    let step = CssValue::Number(-n);
    match scale.and_then(|scale| scale.lookup(&step)) {
        Some(CssValue::Number(m)) => CssValue::Number(-m),
        Some(CssValue::Text(text)) => CssValue::Text(format!("-{}", text)),
        None => value.clone(),
    }
}

fn space_prop(properties: &[&str]) -> StyleProp {
    StyleProp::multi(properties.iter().copied())
        .scale("space")
        .default_scale(list_scale(&SPACE))
        .transform(negative_scale_lookup)
}

/// Margin and padding props, with the usual short aliases.
///
/// All resolve against the theme's `space` scale, falling back to [`SPACE`].
pub fn space() -> System {
    const SIDES: [(&str, &str, &[&str]); 7] = [
        ("", "", &[""]),
        ("t", "Top", &["Top"]),
        ("r", "Right", &["Right"]),
        ("b", "Bottom", &["Bottom"]),
        ("l", "Left", &["Left"]),
        ("x", "X", &["Left", "Right"]),
        ("y", "Y", &["Top", "Bottom"]),
    ];

    let mut system = System::new();
    for (short, base) in [("m", "margin"), ("p", "padding")] {
        for (side, long_side, sides) in SIDES {
            let properties: Vec<String> = sides.iter().map(|s| format!("{}{}", base, s)).collect();
            let properties: Vec<&str> = properties.iter().map(String::as_str).collect();
            let prop = space_prop(&properties);
            system = system
                .prop(&format!("{}{}", short, side), prop.clone())
                .prop(&format!("{}{}", base, long_side), prop);
        }
    }
    system
}
