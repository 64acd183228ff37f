//! Style attributes and the values they carry.
//!
//! This module provides the styling primitives:
//!
//! - [`Attribute`]: A visual property with a statically known value type
//! - [`Color`], [`FontDescriptor`], [`LineLimit`]: Attribute values
//! - [`ColorParseError`]: Errors from parsing color text
//!
//! The attribute markers ([`BackgroundColor`], [`TitleColor`], [`Font`],
//! [`LineCount`]) select which value a [`StyleTable`](crate::StyleTable)
//! lookup returns.

mod attribute;
mod color;
mod error;
mod font;

pub use attribute::{Attribute, AttributeKind, BackgroundColor, Font, LineCount, TitleColor};
pub use color::Color;
pub use error::ColorParseError;
pub use font::{FontDescriptor, FontWeight, LineLimit, DEFAULT_FONT_SIZE, SYSTEM_FONT_FAMILY};
