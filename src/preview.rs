//! Terminal preview of a style table.
//!
//! Renders one row per interaction state with the resolved value of every
//! attribute. Values inherited from another state are tagged with their
//! origin (`<normal`), values taken from the global default with
//! `<default`, so the effect of the fallback chain is visible at a glance.
//! A disabled default with its opacity scaled is tagged `<default dimmed`.
//!
//! ```text
//! state        background            title                 font                lines
//! normal       #3478f6ff             #ffffffff             Helvetica 17pt      1 <default
//! highlighted  #1f5fd1ff             #ffffffff <normal     Helvetica 17pt      1 <default
//! ```

use console::style;

use crate::resolver::{DisabledRule, StateStyleResolver};
use crate::state::InteractionState;
use crate::style::{Attribute, BackgroundColor, Color, Font, LineCount, TitleColor};
use crate::table::StyleTable;
use crate::util::{nearest_ansi256, pad_to_width, truncate_to_width};

const HEADERS: [&str; 5] = ["state", "background", "title", "font", "lines"];
const COLUMN_GAP: &str = "  ";
const SWATCH: &str = "  ";

/// Preview rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Prefix color cells with a painted swatch.
    pub use_color: bool,
    /// Cells wider than this are truncated.
    pub max_cell_width: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            use_color: false,
            max_cell_width: 32,
        }
    }
}

struct Cell {
    text: String,
    swatch: Option<Color>,
}

impl Cell {
    fn plain(text: String) -> Self {
        Self { text, swatch: None }
    }
}

fn describe<A: Attribute>(
    resolver: &StateStyleResolver,
    attribute: A,
    state: InteractionState,
    table: &StyleTable,
    value: impl std::fmt::Display,
) -> String {
    match resolver.origin(attribute, state, table) {
        Some(origin) if origin == state => value.to_string(),
        Some(origin) => format!("{} <{}", value, origin),
        None if is_dimmed(resolver, attribute, state, table) => {
            format!("{} <default dimmed", value)
        }
        None => format!("{} <default", value),
    }
}

fn is_dimmed<A: Attribute>(
    resolver: &StateStyleResolver,
    attribute: A,
    state: InteractionState,
    table: &StyleTable,
) -> bool {
    match (state, resolver.disabled_rule(A::KIND)) {
        (InteractionState::Disabled, DisabledRule::DimDefault(factor)) => {
            let default = table.default_value(attribute);
            A::dimmed(default.clone(), factor) != *default
        }
        _ => false,
    }
}

fn row(resolver: &StateStyleResolver, state: InteractionState, table: &StyleTable) -> Vec<Cell> {
    let appearance = resolver.resolve_all(state, table);
    vec![
        Cell::plain(state.to_string()),
        Cell {
            text: describe(resolver, BackgroundColor, state, table, appearance.background_color),
            swatch: Some(appearance.background_color),
        },
        Cell {
            text: describe(resolver, TitleColor, state, table, appearance.title_color),
            swatch: Some(appearance.title_color),
        },
        Cell::plain(describe(resolver, Font, state, table, &appearance.font)),
        Cell::plain(describe(resolver, LineCount, state, table, appearance.line_count)),
    ]
}

/// Renders the resolved appearance of `states` as an aligned text table.
pub fn render(
    table: &StyleTable,
    resolver: &StateStyleResolver,
    states: &[InteractionState],
    options: PreviewOptions,
) -> String {
    let mut rows: Vec<Vec<Cell>> = states.iter().map(|&s| row(resolver, s, table)).collect();
    for cells in &mut rows {
        for cell in cells.iter_mut() {
            cell.text = truncate_to_width(&cell.text, options.max_cell_width);
        }
    }

    let swatch_width = if options.use_color { SWATCH.len() + 1 } else { 0 };
    let widths: Vec<usize> = HEADERS
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|cells| {
                    let cell = &cells[i];
                    let extra = if cell.swatch.is_some() { swatch_width } else { 0 };
                    unicode_width::UnicodeWidthStr::width(cell.text.as_str()) + extra
                })
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(&widths)
        .map(|(h, &w)| pad_to_width(h, w))
        .collect();
    out.push_str(header.join(COLUMN_GAP).trim_end());
    out.push('\n');

    for cells in &rows {
        let rendered: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| match cell.swatch {
                Some(color) if options.use_color => {
                    let swatch = style(SWATCH)
                        .on_color256(nearest_ansi256(color))
                        .force_styling(true);
                    format!("{} {}", swatch, pad_to_width(&cell.text, w - swatch_width))
                }
                _ => pad_to_width(&cell.text, w),
            })
            .collect();
        out.push_str(rendered.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }
    out
}
