//! Per-state style overrides.
//!
//! A [`StyleTable`] maps each (state, attribute) pair to an optional value.
//! A missing value means "inherit through the fallback chain"; it never means
//! "reset to the default". Every attribute also carries a global default, so
//! a chain always ends in a value.

use crate::state::InteractionState;
use crate::style::{
    Attribute, BackgroundColor, Color, Font, FontDescriptor, LineCount, LineLimit, TitleColor,
};

/// Storage for one attribute: an optional override per state plus the default.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSlots<T> {
    overrides: [Option<T>; 4],
    default: T,
}

impl<T> StateSlots<T> {
    pub(crate) fn new(default: T) -> Self {
        Self {
            overrides: [None, None, None, None],
            default,
        }
    }

    pub fn get(&self, state: InteractionState) -> Option<&T> {
        self.overrides[state.index()].as_ref()
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub(crate) fn set(&mut self, state: InteractionState, value: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.overrides[state.index()], value)
    }

    pub(crate) fn set_default(&mut self, value: T) -> T {
        std::mem::replace(&mut self.default, value)
    }

    fn override_count(&self) -> usize {
        self.overrides.iter().filter(|v| v.is_some()).count()
    }
}

/// Style overrides for every attribute and interaction state.
///
/// Tables are built with a fluent API and mutated in place with the setters.
/// They hold no interaction state of their own; use a
/// [`StateStyleResolver`](crate::StateStyleResolver) to read the effective
/// value for a state.
///
/// # Example
///
/// ```rust
/// use statestyle::{BackgroundColor, Color, InteractionState, StyleTable};
///
/// let table = StyleTable::new()
///     .with_default(BackgroundColor, Color::BLACK)
///     .with(BackgroundColor, InteractionState::Normal, Color::rgb(0, 0, 255))
///     .with(BackgroundColor, InteractionState::Disabled, Color::rgb(128, 128, 128));
///
/// assert_eq!(table.default_value(BackgroundColor), &Color::BLACK);
/// assert!(table.get(BackgroundColor, InteractionState::Highlighted).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    pub(crate) background_color: StateSlots<Color>,
    pub(crate) title_color: StateSlots<Color>,
    pub(crate) font: StateSlots<FontDescriptor>,
    pub(crate) line_count: StateSlots<LineLimit>,
}

impl StyleTable {
    /// Creates a table with no overrides and the built-in defaults.
    pub fn new() -> Self {
        Self {
            background_color: StateSlots::new(BackgroundColor::builtin_default()),
            title_color: StateSlots::new(TitleColor::builtin_default()),
            font: StateSlots::new(Font::builtin_default()),
            line_count: StateSlots::new(LineCount::builtin_default()),
        }
    }

    /// Adds an override, returning the updated table for chaining.
    pub fn with<A: Attribute>(
        mut self,
        attribute: A,
        state: InteractionState,
        value: impl Into<A::Value>,
    ) -> Self {
        self.set(attribute, state, value);
        self
    }

    /// Replaces the global default, returning the updated table for chaining.
    pub fn with_default<A: Attribute>(mut self, attribute: A, value: impl Into<A::Value>) -> Self {
        self.set_default(attribute, value);
        self
    }

    /// The override stored for `state`, if any.
    pub fn get<A: Attribute>(&self, _attribute: A, state: InteractionState) -> Option<&A::Value> {
        A::slots(self).get(state)
    }

    pub fn default_value<A: Attribute>(&self, _attribute: A) -> &A::Value {
        A::slots(self).default_value()
    }

    /// Stores an override and returns the one it replaced.
    pub fn set<A: Attribute>(
        &mut self,
        _attribute: A,
        state: InteractionState,
        value: impl Into<A::Value>,
    ) -> Option<A::Value> {
        A::slots_mut(self).set(state, Some(value.into()))
    }

    /// Removes an override so the state inherits again.
    pub fn clear<A: Attribute>(
        &mut self,
        _attribute: A,
        state: InteractionState,
    ) -> Option<A::Value> {
        A::slots_mut(self).set(state, None)
    }

    /// Replaces the global default and returns the previous one.
    pub fn set_default<A: Attribute>(
        &mut self,
        _attribute: A,
        value: impl Into<A::Value>,
    ) -> A::Value {
        A::slots_mut(self).set_default(value.into())
    }

    /// Number of (state, attribute) overrides present.
    pub fn override_count(&self) -> usize {
        self.background_color.override_count()
            + self.title_color.override_count()
            + self.font.override_count()
            + self.line_count.override_count()
    }

    /// Returns `true` when no state has any override.
    pub fn is_empty(&self) -> bool {
        self.override_count() == 0
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}
