//! Fallback resolution of per-state styles.
//!
//! Resolution walks a fixed chain of states and returns the first override
//! found, ending at the attribute's global default:
//!
//! | Active state | Chain                                         |
//! |--------------|-----------------------------------------------|
//! | Normal       | normal, default                               |
//! | Highlighted  | highlighted, normal, default                  |
//! | Selected     | selected, normal, default                     |
//! | Disabled     | disabled, then per [`DisabledRule`]           |
//!
//! The disabled tail is the only configurable part:
//!
//! | Rule            | Disabled chain                          |
//! |-----------------|-----------------------------------------|
//! | `Strict`        | disabled, default                       |
//! | `InheritNormal` | disabled, normal, default               |
//! | `DimDefault(f)` | disabled, default with opacity scaled by `f` |
//!
//! A [`FallbackPolicy`] picks the rule for every attribute; single attributes
//! can be given their own rule with
//! [`StateStyleResolver::with_disabled_rule`]. Disabled never inherits from
//! highlighted or selected under any rule.

use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::appearance::Appearance;
use crate::state::InteractionState;
use crate::style::{Attribute, AttributeKind, BackgroundColor, Font, LineCount, TitleColor};
use crate::table::StyleTable;

use InteractionState::{Disabled, Highlighted, Normal, Selected};

/// Opacity factor used by `dim-default` when none is given.
pub const DEFAULT_DIM_FACTOR: f32 = 0.5;

/// How a disabled control inherits styles, for every attribute at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Disabled falls straight to the global default.
    #[default]
    Strict,
    /// Disabled falls back to the normal override before the default.
    InheritNormal,
}

impl FallbackPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackPolicy::Strict => "strict",
            FallbackPolicy::InheritNormal => "inherit-normal",
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(FallbackPolicy::Strict),
            "inherit-normal" | "inherit_normal" => Ok(FallbackPolicy::InheritNormal),
            other => Err(format!(
                "unknown fallback policy '{}' (expected strict or inherit-normal)",
                other
            )),
        }
    }
}

/// How one attribute resolves while the control is disabled.
///
/// Parsed from `strict`, `inherit-normal`, `dim-default` or
/// `dim-default(<factor>)` with a factor in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum DisabledRule {
    /// Disabled override, else the global default.
    Strict,
    /// Disabled override, else the normal override, else the global default.
    InheritNormal,
    /// Disabled override, else the global default with its opacity scaled.
    ///
    /// Only colors carry an opacity; other attributes get the plain default.
    DimDefault(f32),
}

impl From<FallbackPolicy> for DisabledRule {
    fn from(policy: FallbackPolicy) -> Self {
        match policy {
            FallbackPolicy::Strict => DisabledRule::Strict,
            FallbackPolicy::InheritNormal => DisabledRule::InheritNormal,
        }
    }
}

impl fmt::Display for DisabledRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisabledRule::Strict => f.write_str("strict"),
            DisabledRule::InheritNormal => f.write_str("inherit-normal"),
            DisabledRule::DimDefault(factor) => write!(f, "dim-default({})", factor),
        }
    }
}

impl FromStr for DisabledRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        if let Ok(policy) = text.parse::<FallbackPolicy>() {
            return Ok(policy.into());
        }
        if text == "dim-default" {
            return Ok(DisabledRule::DimDefault(DEFAULT_DIM_FACTOR));
        }
        let factor = text
            .strip_prefix("dim-default(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| {
                format!(
                    "unknown disabled rule '{}' (expected strict, inherit-normal or dim-default)",
                    s.trim()
                )
            })?;
        match factor.trim().parse::<f32>() {
            Ok(f) if (0.0..=1.0).contains(&f) => Ok(DisabledRule::DimDefault(f)),
            _ => Err(format!(
                "dim-default factor must be a number between 0 and 1, got '{}'",
                factor.trim()
            )),
        }
    }
}

impl TryFrom<String> for DisabledRule {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Computes effective style values for an active state.
///
/// The resolver holds only its fallback rules. It keeps nothing between
/// calls, so callers re-resolve whenever the table or the active state
/// changes.
///
/// # Example
///
/// ```rust
/// use statestyle::{BackgroundColor, Color, InteractionState, StateStyleResolver, StyleTable};
///
/// let blue = Color::rgb(0, 0, 255);
/// let table = StyleTable::new()
///     .with_default(BackgroundColor, Color::BLACK)
///     .with(BackgroundColor, InteractionState::Normal, blue);
///
/// let resolver = StateStyleResolver::new();
/// assert_eq!(resolver.resolve(BackgroundColor, InteractionState::Highlighted, &table), blue);
/// assert_eq!(resolver.resolve(BackgroundColor, InteractionState::Disabled, &table), Color::BLACK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateStyleResolver {
    policy: FallbackPolicy,
    disabled: [Option<DisabledRule>; 4],
}

impl StateStyleResolver {
    /// A resolver using the strict policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: FallbackPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Gives one attribute its own disabled rule, overriding the policy.
    ///
    /// ```rust
    /// use statestyle::{
    ///     AttributeKind, BackgroundColor, Color, DisabledRule, InteractionState,
    ///     StateStyleResolver, StyleTable,
    /// };
    ///
    /// let resolver = StateStyleResolver::new()
    ///     .with_disabled_rule(AttributeKind::BackgroundColor, DisabledRule::DimDefault(0.5));
    /// let table = StyleTable::new().with_default(BackgroundColor, Color::WHITE);
    ///
    /// assert_eq!(
    ///     resolver.resolve(BackgroundColor, InteractionState::Disabled, &table),
    ///     Color::rgba(255, 255, 255, 128)
    /// );
    /// ```
    pub fn with_disabled_rule(mut self, attribute: AttributeKind, rule: DisabledRule) -> Self {
        self.disabled[attribute.index()] = Some(rule);
        self
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Replaces the policy; per-attribute rules stay in place.
    pub fn set_policy(&mut self, policy: FallbackPolicy) {
        self.policy = policy;
    }

    /// The rule applied to `attribute` while disabled.
    pub fn disabled_rule(&self, attribute: AttributeKind) -> DisabledRule {
        self.disabled[attribute.index()].unwrap_or_else(|| self.policy.into())
    }

    /// The states consulted for `state`, in order, before the global default.
    pub fn chain(
        &self,
        attribute: AttributeKind,
        state: InteractionState,
    ) -> &'static [InteractionState] {
        match state {
            Normal => &[Normal],
            Highlighted => &[Highlighted, Normal],
            Selected => &[Selected, Normal],
            Disabled => match self.disabled_rule(attribute) {
                DisabledRule::InheritNormal => &[Disabled, Normal],
                DisabledRule::Strict | DisabledRule::DimDefault(_) => &[Disabled],
            },
        }
    }

    /// Returns the effective value of `attribute` while `state` is active.
    pub fn resolve<A: Attribute>(
        &self,
        attribute: A,
        state: InteractionState,
        table: &StyleTable,
    ) -> A::Value {
        for &candidate in self.chain(A::KIND, state) {
            if let Some(value) = table.get(attribute, candidate) {
                trace!("{} for {} resolved from {}", A::KIND, state, candidate);
                return value.clone();
            }
        }
        let default = table.default_value(attribute).clone();
        match (state, self.disabled_rule(A::KIND)) {
            (Disabled, DisabledRule::DimDefault(factor)) => {
                trace!("{} for {} resolved from dimmed default", A::KIND, state);
                A::dimmed(default, factor)
            }
            _ => {
                trace!("{} for {} resolved from default", A::KIND, state);
                default
            }
        }
    }

    /// The state whose override `resolve` would return, or `None` when the
    /// global default applies.
    pub fn origin<A: Attribute>(
        &self,
        attribute: A,
        state: InteractionState,
        table: &StyleTable,
    ) -> Option<InteractionState> {
        self.chain(A::KIND, state)
            .iter()
            .copied()
            .find(|&candidate| table.get(attribute, candidate).is_some())
    }

    /// Resolves every attribute at once.
    pub fn resolve_all(&self, state: InteractionState, table: &StyleTable) -> Appearance {
        Appearance {
            background_color: self.resolve(BackgroundColor, state, table),
            title_color: self.resolve(TitleColor, state, table),
            font: self.resolve(Font, state, table),
            line_count: self.resolve(LineCount, state, table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, FontDescriptor, LineLimit};

    const BLUE: Color = Color::rgb(0, 0, 255);
    const GRAY: Color = Color::rgb(128, 128, 128);
    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);

    fn blue_table() -> StyleTable {
        StyleTable::new()
            .with_default(BackgroundColor, Color::BLACK)
            .with(BackgroundColor, Normal, BLUE)
    }

    #[test]
    fn test_normal_only_table() {
        let resolver = StateStyleResolver::new();
        let table = blue_table();

        assert_eq!(resolver.resolve(BackgroundColor, Normal, &table), BLUE);
        assert_eq!(resolver.resolve(BackgroundColor, Highlighted, &table), BLUE);
        assert_eq!(resolver.resolve(BackgroundColor, Selected, &table), BLUE);
        assert_eq!(resolver.resolve(BackgroundColor, Disabled, &table), Color::BLACK);
    }

    #[test]
    fn test_disabled_override() {
        let resolver = StateStyleResolver::new();
        let table = blue_table().with(BackgroundColor, Disabled, GRAY);
        assert_eq!(resolver.resolve(BackgroundColor, Disabled, &table), GRAY);
    }

    #[test]
    fn test_disabled_ignores_highlighted_and_selected() {
        let resolver = StateStyleResolver::new();
        let table = StyleTable::new()
            .with_default(BackgroundColor, Color::BLACK)
            .with(BackgroundColor, Highlighted, RED)
            .with(BackgroundColor, Selected, GREEN);

        assert_eq!(resolver.resolve(BackgroundColor, Disabled, &table), Color::BLACK);

        let inherit = StateStyleResolver::with_policy(FallbackPolicy::InheritNormal);
        assert_eq!(inherit.resolve(BackgroundColor, Disabled, &table), Color::BLACK);
    }

    #[test]
    fn test_own_override_wins() {
        let resolver = StateStyleResolver::new();
        let table = blue_table()
            .with(BackgroundColor, Highlighted, RED)
            .with(BackgroundColor, Selected, GREEN);

        assert_eq!(resolver.resolve(BackgroundColor, Highlighted, &table), RED);
        assert_eq!(resolver.resolve(BackgroundColor, Selected, &table), GREEN);
        assert_eq!(resolver.resolve(BackgroundColor, Normal, &table), BLUE);
    }

    #[test]
    fn test_empty_table_resolves_to_defaults() {
        let resolver = StateStyleResolver::new();
        let table = StyleTable::new();
        for state in InteractionState::ALL {
            assert_eq!(resolver.resolve(LineCount, state, &table), LineLimit(1));
            assert_eq!(resolver.resolve(Font, state, &table), FontDescriptor::default());
        }
    }

    #[test]
    fn test_inherit_normal_policy() {
        let resolver = StateStyleResolver::with_policy(FallbackPolicy::InheritNormal);
        let table = blue_table();
        assert_eq!(resolver.resolve(BackgroundColor, Disabled, &table), BLUE);

        let table = table.with(BackgroundColor, Disabled, GRAY);
        assert_eq!(resolver.resolve(BackgroundColor, Disabled, &table), GRAY);
    }

    #[test]
    fn test_chains() {
        use AttributeKind::{BackgroundColor as Bg, Font as F};

        let strict = StateStyleResolver::new();
        assert_eq!(strict.chain(Bg, Disabled), &[Disabled]);
        assert_eq!(strict.chain(Bg, Highlighted), &[Highlighted, Normal]);

        let inherit = StateStyleResolver::with_policy(FallbackPolicy::InheritNormal);
        assert_eq!(inherit.chain(Bg, Disabled), &[Disabled, Normal]);
        assert_eq!(inherit.chain(Bg, Selected), &[Selected, Normal]);

        let mixed = StateStyleResolver::new()
            .with_disabled_rule(Bg, DisabledRule::DimDefault(0.5))
            .with_disabled_rule(F, DisabledRule::InheritNormal);
        assert_eq!(mixed.chain(Bg, Disabled), &[Disabled]);
        assert_eq!(mixed.chain(F, Disabled), &[Disabled, Normal]);
        assert_eq!(mixed.chain(AttributeKind::TitleColor, Disabled), &[Disabled]);
    }

    /// A button whose background dims its default when disabled, whose title
    /// stays strict and whose font keeps the normal font.
    fn dimming_button() -> (StateStyleResolver, StyleTable) {
        let resolver = StateStyleResolver::new()
            .with_disabled_rule(AttributeKind::BackgroundColor, DisabledRule::DimDefault(0.5))
            .with_disabled_rule(AttributeKind::TitleColor, DisabledRule::Strict)
            .with_disabled_rule(AttributeKind::Font, DisabledRule::InheritNormal)
            .with_disabled_rule(AttributeKind::LineCount, DisabledRule::Strict);
        let table = StyleTable::new()
            .with_default(BackgroundColor, Color::WHITE)
            .with_default(TitleColor, Color::BLACK)
            .with(BackgroundColor, Normal, BLUE)
            .with(TitleColor, Normal, Color::WHITE)
            .with(Font, Normal, FontDescriptor::new("Avenir", 16.0))
            .with(LineCount, Normal, LineLimit(2));
        (resolver, table)
    }

    #[test]
    fn test_per_attribute_rules_row_by_row() {
        let (resolver, table) = dimming_button();
        let avenir = FontDescriptor::new("Avenir", 16.0);

        for state in [Normal, Highlighted, Selected] {
            let row = resolver.resolve_all(state, &table);
            assert_eq!(row.background_color, BLUE, "{}", state);
            assert_eq!(row.title_color, Color::WHITE, "{}", state);
            assert_eq!(row.font, avenir, "{}", state);
            assert_eq!(row.line_count, LineLimit(2), "{}", state);
        }

        let disabled = resolver.resolve_all(Disabled, &table);
        assert_eq!(disabled.background_color, Color::rgba(255, 255, 255, 128));
        assert_eq!(disabled.title_color, Color::BLACK);
        assert_eq!(disabled.font, avenir);
        assert_eq!(disabled.line_count, LineLimit(1));
    }

    #[test]
    fn test_dim_default_yields_to_disabled_override() {
        let (resolver, table) = dimming_button();
        let table = table.with(BackgroundColor, Disabled, GRAY);

        assert_eq!(resolver.resolve(BackgroundColor, Disabled, &table), GRAY);
        assert_eq!(resolver.origin(BackgroundColor, Disabled, &table), Some(Disabled));
    }

    #[test]
    fn test_dim_default_on_non_color_is_plain_default() {
        let resolver = StateStyleResolver::new()
            .with_disabled_rule(AttributeKind::LineCount, DisabledRule::DimDefault(0.25));
        let table = StyleTable::new().with(LineCount, Normal, LineLimit(4));
        assert_eq!(resolver.resolve(LineCount, Disabled, &table), LineLimit(1));
    }

    #[test]
    fn test_set_policy_keeps_attribute_rules() {
        let (mut resolver, table) = dimming_button();
        resolver.set_policy(FallbackPolicy::InheritNormal);

        assert_eq!(resolver.policy(), FallbackPolicy::InheritNormal);
        assert_eq!(
            resolver.disabled_rule(AttributeKind::BackgroundColor),
            DisabledRule::DimDefault(0.5)
        );
        assert_eq!(
            resolver.resolve(BackgroundColor, Disabled, &table),
            Color::rgba(255, 255, 255, 128)
        );
    }

    #[test]
    fn test_policy_fills_unset_rules() {
        let resolver = StateStyleResolver::with_policy(FallbackPolicy::InheritNormal)
            .with_disabled_rule(AttributeKind::TitleColor, DisabledRule::Strict);
        let table = blue_table().with(TitleColor, Normal, Color::WHITE);

        assert_eq!(resolver.resolve(BackgroundColor, Disabled, &table), BLUE);
        assert_eq!(resolver.resolve(TitleColor, Disabled, &table), Color::BLACK);
    }

    #[test]
    fn test_disabled_rule_parsing() {
        assert_eq!("strict".parse::<DisabledRule>().unwrap(), DisabledRule::Strict);
        assert_eq!(
            "inherit_normal".parse::<DisabledRule>().unwrap(),
            DisabledRule::InheritNormal
        );
        assert_eq!(
            "dim-default".parse::<DisabledRule>().unwrap(),
            DisabledRule::DimDefault(DEFAULT_DIM_FACTOR)
        );
        assert_eq!(
            " Dim-Default(0.3) ".parse::<DisabledRule>().unwrap(),
            DisabledRule::DimDefault(0.3)
        );
        assert!("dim-default(1.5)".parse::<DisabledRule>().is_err());
        assert!("dim-default(NaN)".parse::<DisabledRule>().is_err());
        assert!("dim-default(".parse::<DisabledRule>().is_err());
        assert!("fade".parse::<DisabledRule>().is_err());
    }

    #[test]
    fn test_disabled_rule_display_parses_back() {
        for rule in [
            DisabledRule::Strict,
            DisabledRule::InheritNormal,
            DisabledRule::DimDefault(0.75),
        ] {
            assert_eq!(rule.to_string().parse::<DisabledRule>().unwrap(), rule);
        }
    }

    #[test]
    fn test_origin() {
        let resolver = StateStyleResolver::new();
        let table = blue_table().with(BackgroundColor, Selected, GREEN);

        assert_eq!(resolver.origin(BackgroundColor, Selected, &table), Some(Selected));
        assert_eq!(resolver.origin(BackgroundColor, Highlighted, &table), Some(Normal));
        assert_eq!(resolver.origin(BackgroundColor, Disabled, &table), None);
        assert_eq!(resolver.origin(TitleColor, Normal, &table), None);
    }

    #[test]
    fn test_resolve_all() {
        let resolver = StateStyleResolver::new();
        let table = blue_table()
            .with(TitleColor, Normal, Color::WHITE)
            .with(LineCount, Highlighted, LineLimit::UNLIMITED);

        let appearance = resolver.resolve_all(Highlighted, &table);
        assert_eq!(appearance.background_color, BLUE);
        assert_eq!(appearance.title_color, Color::WHITE);
        assert_eq!(appearance.font, FontDescriptor::default());
        assert_eq!(appearance.line_count, LineLimit::UNLIMITED);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("strict".parse::<FallbackPolicy>().unwrap(), FallbackPolicy::Strict);
        assert_eq!(
            "Inherit-Normal".parse::<FallbackPolicy>().unwrap(),
            FallbackPolicy::InheritNormal
        );
        assert!("loose".parse::<FallbackPolicy>().is_err());
    }
}
