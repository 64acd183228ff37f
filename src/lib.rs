//! # statestyle - per-state styles for stateful controls
//!
//! A control such as a button looks different when it is pressed, selected or
//! disabled. `statestyle` keeps those per-state overrides in a
//! [`StyleTable`] and resolves the effective value for the active state by
//! walking a fixed fallback chain:
//!
//! - highlighted → highlighted, normal, default
//! - selected → selected, normal, default
//! - disabled → disabled, default (never highlighted or selected)
//! - normal → normal, default
//!
//! The chain always ends at the attribute's global default, so resolution
//! never fails. Whether a disabled control may borrow the normal override is
//! a [`FallbackPolicy`]; single attributes can carry their own
//! [`DisabledRule`], including one that dims the default instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use statestyle::{BackgroundColor, Color, InteractionState, StateStyleResolver, StyleTable};
//!
//! let table = StyleTable::new()
//!     .with_default(BackgroundColor, Color::BLACK)
//!     .with(BackgroundColor, InteractionState::Normal, Color::rgb(0, 0, 255))
//!     .with(BackgroundColor, InteractionState::Disabled, Color::rgb(128, 128, 128));
//!
//! let resolver = StateStyleResolver::new();
//! assert_eq!(
//!     resolver.resolve(BackgroundColor, InteractionState::Highlighted, &table),
//!     Color::rgb(0, 0, 255)
//! );
//! assert_eq!(
//!     resolver.resolve(BackgroundColor, InteractionState::Disabled, &table),
//!     Color::rgb(128, 128, 128)
//! );
//! ```
//!
//! ## Controls
//!
//! [`StatefulControl`] owns a table and the interaction flags, folds
//! [`InteractionEvent`]s into the active state, and re-resolves its
//! [`Appearance`] synchronously, notifying registered listeners of what
//! changed. Nothing is rendered here; the appearance is handed to whatever
//! draws the control.
//!
//! ## Style sheets
//!
//! Tables can be declared in YAML or JSON with [`StyleSheet`]; values are
//! validated when the table is built. [`AdaptiveStyle`] pairs a light and a
//! dark table and picks one from the OS color mode.

pub mod appearance;
pub mod control;
pub mod preview;
pub mod resolver;
pub mod sheet;
pub mod state;
pub mod style;
pub mod table;
pub mod theme;
pub mod util;

pub use appearance::Appearance;
pub use control::StatefulControl;
pub use resolver::{DisabledRule, FallbackPolicy, StateStyleResolver, DEFAULT_DIM_FACTOR};
pub use sheet::{DisabledFallbacks, FontSpec, StateStyles, StyleSheet, StyleSheetError};
pub use state::{ControlState, InteractionEvent, InteractionState};
pub use style::{
    Attribute, AttributeKind, BackgroundColor, Color, ColorParseError, Font, FontDescriptor,
    FontWeight, LineCount, LineLimit, TitleColor,
};
pub use table::{StateSlots, StyleTable};
pub use theme::{detect_color_mode, set_color_mode_detector, AdaptiveStyle, ColorMode};
