//! Prints the resolved appearance of a style sheet for each interaction state.
//!
//! ```text
//! statestyle button.yaml
//! statestyle button.yaml --state disabled --fallback inherit-normal
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::Term;
use statestyle::preview::{self, PreviewOptions};
use statestyle::{FallbackPolicy, InteractionState, StateStyleResolver, StyleSheet};

#[derive(Debug, Parser)]
#[command(name = "statestyle", version, about = "Preview per-state styles from a style sheet")]
struct Cli {
    /// Style sheet to load (.yaml, .yml or .json)
    sheet: PathBuf,

    /// Only show this state (normal, highlighted, selected, disabled)
    #[arg(long, value_parser = parse_state)]
    state: Option<InteractionState>,

    /// Override the sheet's fallback policy (strict, inherit-normal)
    #[arg(long, value_parser = parse_policy)]
    fallback: Option<FallbackPolicy>,

    /// Do not paint color swatches
    #[arg(long)]
    plain: bool,

    /// Truncate cells wider than this many columns
    #[arg(long, default_value_t = 32)]
    max_width: usize,
}

fn parse_state(s: &str) -> Result<InteractionState, String> {
    s.parse()
}

fn parse_policy(s: &str) -> Result<FallbackPolicy, String> {
    s.parse()
}

/// What to preview, derived from the command line and the loaded sheet.
#[derive(Debug, PartialEq)]
struct PreviewPlan {
    resolver: StateStyleResolver,
    states: Vec<InteractionState>,
    options: PreviewOptions,
}

/// `--fallback` replaces the sheet's policy but keeps its per-attribute
/// disabled rules.
fn plan(cli: &Cli, sheet: &StyleSheet, color_terminal: bool) -> PreviewPlan {
    let mut resolver = sheet.resolver();
    if let Some(policy) = cli.fallback {
        resolver.set_policy(policy);
    }

    let states = match cli.state {
        Some(state) => vec![state],
        None => InteractionState::ALL.to_vec(),
    };

    PreviewPlan {
        resolver,
        states,
        options: PreviewOptions {
            use_color: !cli.plain && color_terminal,
            max_cell_width: cli.max_width,
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let sheet = StyleSheet::from_path(&cli.sheet)
        .with_context(|| format!("loading {}", cli.sheet.display()))?;
    let table = sheet
        .table()
        .with_context(|| format!("validating {}", cli.sheet.display()))?;

    let stdout = Term::stdout();
    let color_terminal = stdout.features().colors_supported() && stdout.is_term();
    let plan = plan(&cli, &sheet, color_terminal);

    print!(
        "{}",
        preview::render(&table, &plan.resolver, &plan.states, plan.options)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use statestyle::{AttributeKind, DisabledRule};

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("statestyle").chain(args.iter().copied())).unwrap()
    }

    fn inherit_sheet() -> StyleSheet {
        StyleSheet::from_yaml_str(
            "fallback: inherit-normal\ndisabled_fallback:\n  background_color: dim-default\n",
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_follow_sheet() {
        let plan = plan(&cli(&["button.yaml"]), &inherit_sheet(), true);

        assert_eq!(plan.resolver.policy(), FallbackPolicy::InheritNormal);
        assert_eq!(plan.states, InteractionState::ALL.to_vec());
        assert!(plan.options.use_color);
        assert_eq!(plan.options.max_cell_width, 32);
    }

    #[test]
    fn test_fallback_flag_overrides_sheet_policy() {
        let plan = plan(
            &cli(&["button.yaml", "--fallback", "strict"]),
            &inherit_sheet(),
            true,
        );

        assert_eq!(plan.resolver.policy(), FallbackPolicy::Strict);
        assert_eq!(
            plan.resolver.disabled_rule(AttributeKind::BackgroundColor),
            DisabledRule::DimDefault(0.5)
        );
        assert_eq!(
            plan.resolver.disabled_rule(AttributeKind::TitleColor),
            DisabledRule::Strict
        );
    }

    #[test]
    fn test_single_state() {
        let plan = plan(
            &cli(&["button.yaml", "--state", "disabled"]),
            &StyleSheet::default(),
            true,
        );
        assert_eq!(plan.states, vec![InteractionState::Disabled]);
    }

    #[test]
    fn test_color_needs_terminal_and_no_plain_flag() {
        let sheet = StyleSheet::default();
        assert!(!plan(&cli(&["b.yaml", "--plain"]), &sheet, true).options.use_color);
        assert!(!plan(&cli(&["b.yaml"]), &sheet, false).options.use_color);
    }

    #[test]
    fn test_max_width_flag() {
        let plan = plan(
            &cli(&["button.yaml", "--max-width", "12"]),
            &StyleSheet::default(),
            false,
        );
        assert_eq!(plan.options.max_cell_width, 12);
    }

    #[test]
    fn test_bad_values_rejected() {
        let parse = |args: &[&str]| {
            Cli::try_parse_from(std::iter::once("statestyle").chain(args.iter().copied()))
        };
        assert!(parse(&["b.yaml", "--state", "pressed"]).is_err());
        assert!(parse(&["b.yaml", "--fallback", "loose"]).is_err());
        assert!(parse(&[]).is_err());
    }
}
