//! Color palettes.
//!
//! A [`Palette`] assigns a CSS value to each of the [`ColorRole`]s the page
//! styles with. A [`PaletteSet`] holds one palette per
//! [`Scheme`](crate::scheme::Scheme); the built-in set reproduces the page's
//! shipped colors and never fails to load.
//!
//! Alternate sets can be loaded from YAML (`base`/`light`/`dark` maps of
//! camelCase keys) or from CSS custom properties, mirroring how adaptive
//! themes are usually written for the web.

mod builtin;
mod css;
mod error;
#[allow(clippy::module_inception)]
mod palette;
mod role;
mod set;

pub use error::PaletteError;
pub use palette::{Palette, PaletteBuilder};
pub use role::ColorRole;
pub use set::{PaletteSet, PALETTE_EXTENSIONS};
