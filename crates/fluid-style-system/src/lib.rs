//! # Fluid Style System - responsive style props for fluid-style
//!
//! Style functions that turn responsive props into a
//! [`StyleObject`](fluid_style::StyleObject), resolving values through theme
//! scales. Wrap one with [`fluid_style::fluid`] to get fluid output:
//!
//! ```rust
//! use fluid_style::{fluid, Theme};
//! use fluid_style_system::{typography, PropValue, Props};
//!
//! let theme = Theme::new()
//!     .with_breakpoints(["40em", "52em", "64em"])
//!     .with_fluid_start("20em");
//!
//! // Steps 2 and 4 of the default font size scale: 16 and 24.
//! let props = Props::new()
//!     .with("fontSize", PropValue::responsive([Some(2), None, Some(4)]))
//!     .with("fontFamily", "serif");
//!
//! let style = fluid(typography()).apply(&theme, &props).unwrap();
//! assert_eq!(
//!     style.get_media("@media screen and (min-width: 20em)", "fontSize").unwrap().to_string(),
//!     "calc(16px + (24 - 16)*(100vw - 20em)/(52 - 20))"
//! );
//! ```

mod presets;
mod props;
mod system;

pub use presets::{negative_scale_lookup, space, typography, FONT_SIZES, SPACE};
pub use props::{PropValue, Props};
pub use system::{scale_lookup, StyleProp, System, Transform};
