//! Style attributes and their value types.
//!
//! Each attribute is a unit type implementing [`Attribute`], which ties it to
//! its value type and to its storage in a [`StyleTable`]. Passing the unit
//! value selects the attribute:
//!
//! ```rust
//! use statestyle::{BackgroundColor, Color, InteractionState, LineCount, LineLimit, StyleTable};
//!
//! let table = StyleTable::new()
//!     .with(BackgroundColor, InteractionState::Normal, Color::rgb(0, 0, 255))
//!     .with(LineCount, InteractionState::Selected, LineLimit(2));
//!
//! assert_eq!(table.get(LineCount, InteractionState::Selected), Some(&LineLimit(2)));
//! ```

use std::fmt;

use super::color::Color;
use super::font::{FontDescriptor, LineLimit};
use crate::table::{StateSlots, StyleTable};

/// Runtime name of an attribute, used in diffs, logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    BackgroundColor,
    TitleColor,
    Font,
    LineCount,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 4] = [
        AttributeKind::BackgroundColor,
        AttributeKind::TitleColor,
        AttributeKind::Font,
        AttributeKind::LineCount,
    ];

    /// Slot index used by per-attribute storage.
    pub(crate) fn index(self) -> usize {
        match self {
            AttributeKind::BackgroundColor => 0,
            AttributeKind::TitleColor => 1,
            AttributeKind::Font => 2,
            AttributeKind::LineCount => 3,
        }
    }

    /// The snake_case key used in style sheets.
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKind::BackgroundColor => "background_color",
            AttributeKind::TitleColor => "title_color",
            AttributeKind::Font => "font",
            AttributeKind::LineCount => "line_count",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

mod private {
    pub trait Sealed {}
}

/// A visual property whose value can vary per interaction state.
///
/// This trait is sealed; the set of attributes is fixed by [`StyleTable`].
pub trait Attribute: private::Sealed + Copy + fmt::Debug {
    /// The value type stored for this attribute.
    type Value: Clone + PartialEq + fmt::Debug;

    const KIND: AttributeKind;

    /// Built-in global default.
    fn builtin_default() -> Self::Value;

    /// Scales the opacity of `value` by `factor`.
    ///
    /// Values without an opacity are returned unchanged.
    fn dimmed(value: Self::Value, factor: f32) -> Self::Value;

    #[doc(hidden)]
    fn slots(table: &StyleTable) -> &StateSlots<Self::Value>;

    #[doc(hidden)]
    fn slots_mut(table: &mut StyleTable) -> &mut StateSlots<Self::Value>;
}

/// Fill color behind the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColor;

/// Color of the control's title text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleColor;

/// Font of the control's title text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font;

/// Maximum number of title lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCount;

macro_rules! attribute {
    ($marker:ident, $value:ty, $field:ident, $default:expr, |$v:ident, $f:ident| $dim:expr) => {
        impl private::Sealed for $marker {}

        impl Attribute for $marker {
            type Value = $value;

            const KIND: AttributeKind = AttributeKind::$marker;

            fn builtin_default() -> Self::Value {
                $default
            }

            fn dimmed($v: Self::Value, $f: f32) -> Self::Value {
                $dim
            }

            fn slots(table: &StyleTable) -> &StateSlots<Self::Value> {
                &table.$field
            }

            fn slots_mut(table: &mut StyleTable) -> &mut StateSlots<Self::Value> {
                &mut table.$field
            }
        }
    };
}

attribute!(BackgroundColor, Color, background_color, Color::TRANSPARENT, |value, factor| {
    value.with_alpha(factor)
});
attribute!(TitleColor, Color, title_color, Color::BLACK, |value, factor| {
    value.with_alpha(factor)
});
attribute!(Font, FontDescriptor, font, FontDescriptor::default(), |value, _factor| value);
attribute!(LineCount, LineLimit, line_count, LineLimit::default(), |value, _factor| value);
