//! Themes and breakpoint normalization.
//!
//! A [`Theme`] carries the caller's breakpoint declaration and the value
//! scales style functions resolve against. It is never modified by the
//! engine: [`normalize_breakpoints`] reads it and returns a fresh
//! [`Breakpoints`] value.
//!
//! Breakpoints may be declared as an ascending list:
//!
//! ```yaml
//! breakpoints: [40em, 52em, 64em]
//! fluidStart: 20em
//! ```
//!
//! or as a keyed map, where the reserved `fluidStart` key names the anchor:
//!
//! ```yaml
//! breakpoints:
//!   sm: 40em
//!   md: 52em
//!   fluidStart: 20em
//! ```
//!
//! Keyed declarations are sorted by width. When no breakpoints are declared
//! the defaults from [`FluidOptions`](crate::FluidOptions) apply, and when no
//! fluid start is declared one is derived from the breakpoint unit
//! (`20em`, `20rem` or `320px`).

mod breakpoints;
#[allow(clippy::module_inception)]
mod theme;

pub use breakpoints::{normalize_breakpoints, Breakpoints, FLUID_START_KEY};
pub use theme::{BreakpointSpec, Scale, Theme, ThemeError};
