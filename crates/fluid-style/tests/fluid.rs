//! End-to-end behaviour of the fluid pipeline.

use fluid_style::{
    build_media_query, fluid, CssValue, FluidError, FluidOptions, StyleContext, StyleObject,
    Theme, UnitMismatch,
};

// ============================================================================
// Test helpers
// ============================================================================

type Props = Vec<(&'static str, Vec<Option<CssValue>>)>;

/// Minimal responsive style function: entry 0 is the base value, entry i is
/// the value at breakpoint i - 1.
fn responsive(props: &Props, ctx: &StyleContext<'_>) -> StyleObject {
    let queries = ctx.breakpoints().media_queries();
    let mut style = StyleObject::new();
    for (property, values) in props {
        for (i, value) in values.iter().enumerate() {
            let Some(value) = value else { continue };
            if i == 0 {
                style.insert(property, value.clone());
            } else if let Some(query) = queries.get(i - 1) {
                style.insert_media(query, property, value.clone());
            }
        }
    }
    style
}

fn values<const N: usize>(values: [Option<&str>; N]) -> Vec<Option<CssValue>> {
    values.into_iter().map(|v| v.map(CssValue::from)).collect()
}

fn mq(breakpoint: &str) -> String {
    build_media_query(breakpoint)
}

fn fluid_start_20() -> Theme {
    Theme::new().with_keyed_breakpoints([("0", "40em"), ("fluidStart", "20em")])
}

fn media_keys(style: &StyleObject) -> Vec<&str> {
    style.media_queries().collect()
}

// ============================================================================
// Literal pass-through
// ============================================================================

#[test]
fn preserves_non_responsive_styles() {
    let props: Props = vec![("fontFamily", values([Some("sans-serif")]))];
    let style = fluid(responsive)
        .apply(&Theme::new().with_breakpoints(["40em", "52em", "64em"]), &props)
        .unwrap();

    assert_eq!(style, StyleObject::new().with("fontFamily", "sans-serif"));
}

#[test]
fn preserves_non_interpolatable_styles() {
    let props: Props = vec![("textAlign", values([Some("left"), Some("center")]))];
    let style = fluid(responsive)
        .apply(&Theme::new().with_breakpoints(["40em"]), &props)
        .unwrap();

    assert_eq!(
        style,
        StyleObject::new()
            .with("textAlign", "left")
            .with_media(&mq("40em"), "textAlign", "center")
    );
    assert_eq!(media_keys(&style), vec![mq("40em")]);
}

// ============================================================================
// Fluid output
// ============================================================================

#[test]
fn generates_fluid_styles_for_px_units() {
    let props: Props = vec![("fontSize", values([Some("16px"), Some("21px")]))];
    let style = fluid(responsive).apply(&fluid_start_20(), &props).unwrap();

    assert_eq!(
        style,
        StyleObject::new()
            .with("fontSize", "16px")
            .with_media(
                &mq("20em"),
                "fontSize",
                "calc(16px + (21 - 16)*(100vw - 20em)/(40 - 20))"
            )
            .with_media(&mq("40em"), "fontSize", "21px")
    );
    assert_eq!(media_keys(&style), vec![mq("20em"), mq("40em")]);
}

#[test]
fn generates_fluid_styles_for_em_units() {
    let props: Props = vec![("fontSize", values([Some("1em"), Some("1.33em")]))];
    let style = fluid(responsive).apply(&fluid_start_20(), &props).unwrap();

    assert_eq!(
        style.get_media(&mq("20em"), "fontSize"),
        Some(&"calc(1em + (1.33 - 1)*(100vw - 20em)/(40 - 20))".into())
    );
    assert_eq!(style.get_media(&mq("40em"), "fontSize"), Some(&"1.33em".into()));
}

#[test]
fn generates_fluid_styles_for_percent_units() {
    let props: Props = vec![("lineHeight", values([Some("100%"), Some("150%")]))];
    let style = fluid(responsive).apply(&fluid_start_20(), &props).unwrap();

    assert_eq!(style.get("lineHeight"), Some(&"100%".into()));
    assert_eq!(
        style.get_media(&mq("20em"), "lineHeight"),
        Some(&"calc(100% + (150 - 100)*(100vw - 20em)/(40 - 20))".into())
    );
    assert_eq!(style.get_media(&mq("40em"), "lineHeight"), Some(&"150%".into()));
}

#[test]
fn generates_fluid_styles_and_preserves_other_styles() {
    let props: Props = vec![
        ("fontSize", values([Some("16px"), Some("21px")])),
        ("fontFamily", values([Some("sans-serif")])),
        ("textAlign", values([Some("left"), Some("center")])),
    ];
    let style = fluid(responsive).apply(&fluid_start_20(), &props).unwrap();

    insta::assert_json_snapshot!(style, @r###"
    {
      "fontSize": "16px",
      "fontFamily": "sans-serif",
      "textAlign": "left",
      "@media screen and (min-width: 20em)": {
        "fontSize": "calc(16px + (21 - 16)*(100vw - 20em)/(40 - 20))"
      },
      "@media screen and (min-width: 40em)": {
        "fontSize": "21px",
        "textAlign": "center"
      }
    }
    "###);
}

#[test]
fn bare_numbers_interpolate_as_pixels() {
    let props: Props = vec![(
        "fontSize",
        vec![Some(CssValue::from(16)), Some(CssValue::from(21))],
    )];
    let style = fluid(responsive).apply(&fluid_start_20(), &props).unwrap();

    assert_eq!(style.get("fontSize"), Some(&CssValue::Number(16.0)));
    assert_eq!(
        style.get_media(&mq("20em"), "fontSize"),
        Some(&"calc(16px + (21 - 16)*(100vw - 20em)/(40 - 20))".into())
    );
    assert_eq!(
        style.get_media(&mq("40em"), "fontSize"),
        Some(&CssValue::Number(21.0))
    );
}

#[test]
fn accepts_a_custom_fluid_start() {
    let theme = Theme::new().with_keyed_breakpoints([("0", "40em"), ("fluidStart", "27em")]);
    let props: Props = vec![("fontSize", values([Some("16px"), Some("21px")]))];
    let style = fluid(responsive).apply(&theme, &props).unwrap();

    let first = style.media_queries().next().unwrap();
    assert!(first.contains("27em"));
}

#[test]
fn skips_breakpoints_for_missing_values() {
    let theme = Theme::new().with_keyed_breakpoints([
        ("0", "40em"),
        ("1", "52em"),
        ("fluidStart", "20em"),
    ]);
    let props: Props = vec![("fontSize", values([Some("16px"), None, Some("21px")]))];
    let style = fluid(responsive).apply(&theme, &props).unwrap();

    assert_eq!(
        style,
        StyleObject::new()
            .with("fontSize", "16px")
            .with_media(
                &mq("20em"),
                "fontSize",
                "calc(16px + (21 - 16)*(100vw - 20em)/(52 - 20))"
            )
            .with_media(&mq("52em"), "fontSize", "21px")
    );
    assert!(style.block(&mq("40em")).is_none());
}

#[test]
fn middle_values_become_fluid_too() {
    let theme = Theme::new()
        .with_breakpoints(["40em", "52em"])
        .with_fluid_start("20em");
    let props: Props = vec![(
        "fontSize",
        values([Some("16px"), Some("18px"), Some("21px")]),
    )];
    let style = fluid(responsive).apply(&theme, &props).unwrap();

    assert_eq!(media_keys(&style), vec![mq("20em"), mq("40em"), mq("52em")]);
    assert_eq!(
        style.get_media(&mq("40em"), "fontSize"),
        Some(&"calc(18px + (21 - 18)*(100vw - 40em)/(52 - 40))".into())
    );
    assert_eq!(style.get_media(&mq("52em"), "fontSize"), Some(&"21px".into()));
}

#[test]
fn strict_breakpoint_unit_keeps_pixels_literal() {
    let props: Props = vec![("fontSize", values([Some("16px"), Some("21px")]))];
    let strict = fluid(responsive)
        .with_options(FluidOptions::new().with_require_breakpoint_unit(true));
    let style = strict.apply(&fluid_start_20(), &props).unwrap();

    assert_eq!(
        style,
        StyleObject::new()
            .with("fontSize", "16px")
            .with_media(&mq("40em"), "fontSize", "21px")
    );
}

#[test]
fn repeated_runs_are_identical() {
    let theme = fluid_start_20();
    let before = theme.clone();
    let props: Props = vec![
        ("fontSize", values([Some("16px"), Some("21px")])),
        ("textAlign", values([Some("left"), Some("center")])),
    ];
    let engine = fluid(responsive);

    let first = engine.apply(&theme, &props).unwrap();
    let second = engine.apply(&theme, &props).unwrap();

    assert_eq!(first, second);
    assert_eq!(media_keys(&first), media_keys(&second));
    assert_eq!(theme, before);
}

// ============================================================================
// Theme checks
// ============================================================================

#[test]
fn sets_default_breakpoints_when_none_are_given() {
    let props: Props = vec![("fontSize", values([Some("16px"), Some("21px")]))];
    let style = fluid(responsive).apply(&Theme::new(), &props).unwrap();

    assert!(style.media_queries().next().is_some());
    assert_eq!(media_keys(&style), vec![mq("20em"), mq("40em")]);
}

#[test]
fn handles_keyed_breakpoints() {
    let theme = Theme::new().with_keyed_breakpoints([("sm", "40em"), ("fluidStart", "20em")]);
    let props: Props = vec![("fontSize", values([Some("16px"), Some("21px")]))];
    let style = fluid(responsive).apply(&theme, &props).unwrap();

    assert!(style.media_queries().any(|q| q.contains("20em")));
    assert!(style.media_queries().any(|q| q.contains("40em")));
}

#[test]
fn fails_on_breakpoints_in_different_units() {
    let theme = Theme::new().with_breakpoints(["640px", "52em", "64rem"]);
    let err = fluid(responsive).apply(&theme, &Props::new()).unwrap_err();

    assert!(err.is_unit_mismatch());
    assert!(matches!(
        err,
        FluidError::UnitMismatch(UnitMismatch::Breakpoints { .. })
    ));
}

#[test]
fn default_fluid_start_follows_breakpoint_unit() {
    let props: Props = vec![("fontSize", values([Some("16px"), Some("21px")]))];
    for (breakpoint, unit) in [("40em", "em"), ("40rem", "rem"), ("640px", "px")] {
        let theme = Theme::new().with_breakpoints([breakpoint]);
        let style = fluid(responsive).apply(&theme, &props).unwrap();

        let fluid_start = style
            .media_queries()
            .find(|q| !q.contains(breakpoint))
            .unwrap();
        assert!(fluid_start.ends_with(&format!("{})", unit)), "{}", fluid_start);
    }
}

#[test]
fn fails_without_fluid_start_for_other_units() {
    let props: Props = vec![("fontSize", values([Some("16px"), Some("21px")]))];
    let err = fluid(responsive)
        .apply(&Theme::new().with_breakpoints(["640pt"]), &props)
        .unwrap_err();

    assert!(err.is_unsupported_unit());
}

#[test]
fn fails_on_fluid_start_in_another_unit() {
    let theme = Theme::new()
        .with_breakpoints(["40em", "52em"])
        .with_fluid_start("320px");
    let err = fluid(responsive).apply(&theme, &Props::new()).unwrap_err();

    assert!(matches!(
        err,
        FluidError::UnitMismatch(UnitMismatch::FluidStart { .. })
    ));
}

#[test]
fn empty_breakpoints_pass_literals_through() {
    let theme = Theme::new().with_breakpoints(Vec::<&str>::new());
    let props: Props = vec![("fontSize", values([Some("16px"), Some("21px")]))];
    let style = fluid(responsive).apply(&theme, &props).unwrap();

    assert_eq!(style, StyleObject::new().with("fontSize", "16px"));
}

#[test]
fn theme_loaded_from_yaml() {
    let theme = Theme::from_yaml(
        r#"
        breakpoints: [640px, 960px]
        fluidStart: 320px
        "#,
    )
    .unwrap();
    let props: Props = vec![(
        "padding",
        values([Some("8px"), Some("16px"), Some("32px")]),
    )];
    let style = fluid(responsive).apply(&theme, &props).unwrap();

    assert_eq!(
        style.get_media(&mq("320px"), "padding"),
        Some(&"calc(8px + (16 - 8)*(100vw - 320px)/(640 - 320))".into())
    );
    assert_eq!(
        style.get_media(&mq("640px"), "padding"),
        Some(&"calc(16px + (32 - 16)*(100vw - 640px)/(960 - 640))".into())
    );
    assert_eq!(style.get_media(&mq("960px"), "padding"), Some(&"32px".into()));
}
