//! Inline styles.
//!
//! Every page element is styled inline. [`create_styles`] derives a
//! [`StyleSheet`] from a [`Palette`](crate::palette::Palette): one
//! [`StyleDecl`] per [`StyleKey`]. Declarations use camelCase property names
//! and serialize the way inline styles do in the browser:
//!
//! - `minHeight` becomes `min-height`
//! - numbers get `px`, except for unitless properties and zero
//! - declarations are joined with `;`
//!
//! [`StyleCache`] keeps the sheet for the current palette so that repeated
//! renders with the same scheme do not rebuild it.

mod cache;
mod decl;
mod sheet;
mod value;

pub use cache::{StyleCache, StyleCacheStats};
pub use decl::{is_unitless, kebab_case, StyleDecl};
pub use sheet::{create_styles, StyleKey, StyleSheet};
pub use value::CssValue;
