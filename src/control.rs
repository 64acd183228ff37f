//! A stateful control that keeps its appearance in sync with its state.
//!
//! [`StatefulControl`] ties the pieces together: it owns a [`StyleTable`],
//! the [`ControlState`] flags, and a [`StateStyleResolver`]. Whenever an
//! interaction event changes the active state, or the table is reconfigured,
//! the control re-resolves its [`Appearance`] before returning and hands the
//! result to every registered listener.
//!
//! # Example
//!
//! ```rust
//! use statestyle::{
//!     BackgroundColor, Color, InteractionEvent, InteractionState, StatefulControl, StyleTable,
//! };
//!
//! let table = StyleTable::new()
//!     .with(BackgroundColor, InteractionState::Normal, Color::rgb(0, 0, 255))
//!     .with(BackgroundColor, InteractionState::Highlighted, Color::rgb(0, 0, 128));
//!
//! let mut button = StatefulControl::new(table);
//! button.on_appearance_change(|appearance, _changed| {
//!     // hand `appearance` to the renderer
//!     let _ = appearance.background_color;
//! });
//!
//! let changed = button.handle(InteractionEvent::PressDown);
//! assert_eq!(changed.len(), 1);
//! assert_eq!(button.appearance().background_color, Color::rgb(0, 0, 128));
//! ```

use std::fmt;

use log::debug;

use crate::appearance::Appearance;
use crate::resolver::{FallbackPolicy, StateStyleResolver};
use crate::state::{ControlState, InteractionEvent, InteractionState};
use crate::style::AttributeKind;
use crate::table::StyleTable;

type Listener = Box<dyn FnMut(&Appearance, &[AttributeKind])>;

/// A control's style table, interaction flags and current appearance.
pub struct StatefulControl {
    table: StyleTable,
    state: ControlState,
    resolver: StateStyleResolver,
    appearance: Appearance,
    listeners: Vec<Listener>,
}

impl StatefulControl {
    /// Creates an enabled control in the normal state using the strict policy.
    pub fn new(table: StyleTable) -> Self {
        Self::with_resolver(table, StateStyleResolver::new())
    }

    pub fn with_policy(table: StyleTable, policy: FallbackPolicy) -> Self {
        Self::with_resolver(table, StateStyleResolver::with_policy(policy))
    }

    pub fn with_resolver(table: StyleTable, resolver: StateStyleResolver) -> Self {
        let state = ControlState::new();
        let appearance = resolver.resolve_all(state.active(), &table);
        Self {
            table,
            state,
            resolver,
            appearance,
            listeners: Vec::new(),
        }
    }

    pub fn table(&self) -> &StyleTable {
        &self.table
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn active_state(&self) -> InteractionState {
        self.state.active()
    }

    pub fn resolver(&self) -> &StateStyleResolver {
        &self.resolver
    }

    /// The appearance resolved for the current state and table.
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Registers a callback run after every appearance change.
    ///
    /// Listeners receive the new appearance and the attributes that changed.
    /// They are not called when an event leaves the appearance untouched.
    pub fn on_appearance_change<F>(&mut self, listener: F)
    where
        F: FnMut(&Appearance, &[AttributeKind]) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Applies an interaction event and returns the attributes that changed.
    pub fn handle(&mut self, event: InteractionEvent) -> Vec<AttributeKind> {
        let before = self.state.active();
        if !self.state.apply(event) {
            return Vec::new();
        }
        debug!(
            "{:?}: active state {} -> {}",
            event,
            before,
            self.state.active()
        );
        self.refresh()
    }

    /// Mutates the style table, then re-resolves.
    pub fn configure<F>(&mut self, update: F) -> Vec<AttributeKind>
    where
        F: FnOnce(&mut StyleTable),
    {
        update(&mut self.table);
        debug!(
            "style table reconfigured ({} overrides)",
            self.table.override_count()
        );
        self.refresh()
    }

    /// Replaces the whole style table, then re-resolves.
    pub fn set_table(&mut self, table: StyleTable) -> Vec<AttributeKind> {
        self.configure(|current| *current = table)
    }

    /// Switches fallback policy, then re-resolves.
    ///
    /// Attributes with their own disabled rule keep it.
    pub fn set_policy(&mut self, policy: FallbackPolicy) -> Vec<AttributeKind> {
        self.resolver.set_policy(policy);
        self.refresh()
    }

    fn refresh(&mut self) -> Vec<AttributeKind> {
        let next = self.resolver.resolve_all(self.state.active(), &self.table);
        let changed = next.changes(&self.appearance);
        self.appearance = next;
        if !changed.is_empty() {
            for listener in &mut self.listeners {
                listener(&self.appearance, &changed);
            }
        }
        changed
    }
}

impl fmt::Debug for StatefulControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatefulControl")
            .field("table", &self.table)
            .field("state", &self.state)
            .field("resolver", &self.resolver)
            .field("appearance", &self.appearance)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
