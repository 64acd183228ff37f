//! Interaction states and the control flags that select them.
//!
//! A control is always in exactly one [`InteractionState`]. The crate does
//! not watch input devices; the owning control reports what happened through
//! [`InteractionEvent`]s, and [`ControlState`] folds those events into the
//! active state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The mutually exclusive mode a control is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    #[default]
    Normal,
    Highlighted,
    Selected,
    Disabled,
}

impl InteractionState {
    /// Every state, in table order.
    pub const ALL: [InteractionState; 4] = [
        InteractionState::Normal,
        InteractionState::Highlighted,
        InteractionState::Selected,
        InteractionState::Disabled,
    ];

    /// Slot index used by per-state storage.
    pub(crate) fn index(self) -> usize {
        match self {
            InteractionState::Normal => 0,
            InteractionState::Highlighted => 1,
            InteractionState::Selected => 2,
            InteractionState::Disabled => 3,
        }
    }

    /// Returns the lowercase name used in style sheets.
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionState::Normal => "normal",
            InteractionState::Highlighted => "highlighted",
            InteractionState::Selected => "selected",
            InteractionState::Disabled => "disabled",
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InteractionState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown interaction state '{}' (expected normal, highlighted, selected or disabled)",
                    s
                )
            })
    }
}

/// Something the interaction source reports to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    /// A press began inside the control.
    PressDown,
    /// The press was released inside the control.
    PressUp,
    /// The press was released outside the control or cancelled.
    PressCancel,
    /// Flip the selection flag.
    ToggleSelected,
    /// Set the selection flag.
    SetSelected(bool),
    /// Enable or disable the control.
    SetEnabled(bool),
}

/// Interaction flags owned by a single control.
///
/// The active state is derived with the precedence
/// disabled > highlighted > selected > normal.
///
/// # Example
///
/// ```rust
/// use statestyle::{ControlState, InteractionEvent, InteractionState};
///
/// let mut state = ControlState::new();
/// assert!(state.apply(InteractionEvent::PressDown));
/// assert_eq!(state.active(), InteractionState::Highlighted);
///
/// state.apply(InteractionEvent::PressUp);
/// assert_eq!(state.active(), InteractionState::Normal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    highlighted: bool,
    selected: bool,
    enabled: bool,
}

impl ControlState {
    /// An enabled control with nothing pressed or selected.
    pub fn new() -> Self {
        Self {
            highlighted: false,
            selected: false,
            enabled: true,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The single state used for style resolution.
    pub fn active(&self) -> InteractionState {
        if !self.enabled {
            InteractionState::Disabled
        } else if self.highlighted {
            InteractionState::Highlighted
        } else if self.selected {
            InteractionState::Selected
        } else {
            InteractionState::Normal
        }
    }

    /// Applies an event and reports whether the active state changed.
    ///
    /// Presses are ignored while the control is disabled, and disabling a
    /// control drops any highlight in progress.
    pub fn apply(&mut self, event: InteractionEvent) -> bool {
        let before = self.active();
        match event {
            InteractionEvent::PressDown => {
                if self.enabled {
                    self.highlighted = true;
                }
            }
            InteractionEvent::PressUp | InteractionEvent::PressCancel => {
                self.highlighted = false;
            }
            InteractionEvent::ToggleSelected => self.selected = !self.selected,
            InteractionEvent::SetSelected(selected) => self.selected = selected,
            InteractionEvent::SetEnabled(enabled) => {
                self.enabled = enabled;
                if !enabled {
                    self.highlighted = false;
                }
            }
        }
        self.active() != before
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}
