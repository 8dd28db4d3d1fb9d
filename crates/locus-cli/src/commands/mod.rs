//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function.

pub mod annotate;
pub mod classify;
pub mod resolve;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use locus_common::types::{AnnotationRecord, OUTPUT_COLUMNS};

/// Widest cell shown in terminal tables
const MAX_CELL_CHARS: usize = 48;

/// Render records as a terminal table; sentinel rows are highlighted
pub(crate) fn records_table(records: &[AnnotationRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(OUTPUT_COLUMNS);

    for record in records {
        let resolved = record.is_resolved();
        let row: Vec<Cell> = record
            .cells()
            .iter()
            .map(|cell| {
                let cell = Cell::new(truncate(cell, MAX_CELL_CHARS));
                if resolved {
                    cell
                } else {
                    cell.fg(Color::Yellow)
                }
            })
            .collect();
        table.add_row(row);
    }

    table
}

/// Shorten `value` to at most `max_chars` characters, marking the cut
pub(crate) fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }

    let mut short: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    short.push('…');
    short
}
