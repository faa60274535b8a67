//! Wrapping, padding, and final composition of a planned table.
//!
//! The pipeline after planning: wrap every cell at its final width, verify
//! the wrapped lines actually fit, pad cells into rectangular blocks, then
//! compose the blocks with the layout's rules and gutters.

use std::borrow::Cow;

use crate::layout::{Frame, Layout, RuleGlyphs, RuleLine};
use crate::table::Table;
use crate::wrap::{display_width, WrapSettings};
use crate::{Error, Result};

/// Wrap every cell of `table` at its column's final width.
pub fn wrap_table<'s>(
    table: &'s Table<String>,
    widths: &[usize],
    wrap: &mut WrapSettings<'_>,
) -> Table<Vec<Cow<'s, str>>> {
    let nrows = table.nrows();
    let mut wrapped = Vec::with_capacity(table.ncells());
    for row_idx in 0..nrows {
        let row = table.row(row_idx).expect("row index within table");
        for (cell, width) in row.iter().zip(widths) {
            wrapped.push(textwrap::wrap(cell, wrap.at_width(*width)));
        }
    }
    Table::from_cells(wrapped, nrows).expect("wrapped table keeps its shape")
}

/// Check that every wrapped line of `row` fits its column width.
///
/// Returns the first offending cell as [`Error::ColumnOverflow`]. This fires
/// for user-fixed columns too narrow for their content (the planner accepts
/// those) and for unbreakable tokens wider than their planned column.
pub fn check_row_widths(
    row_idx: usize,
    row: &[Vec<Cow<'_, str>>],
    widths: &[usize],
) -> Result<()> {
    for (col_idx, (cell, width)) in row.iter().zip(widths).enumerate() {
        if cell.iter().any(|line| display_width(line) > *width) {
            return Err(Error::ColumnOverflow {
                cell: Some((row_idx, col_idx)),
            });
        }
    }
    Ok(())
}

/// Pad every wrapped cell with trailing spaces into a rectangular block of
/// its column width and its row's height.
pub fn fill_table(table: &mut Table<Vec<Cow<'_, str>>>, widths: &[usize]) {
    for row_idx in 0..table.nrows() {
        let row = table.row_mut(row_idx).expect("row index within table");
        let height = row.iter().map(Vec::len).max().unwrap_or(0);
        for (cell, width) in row.iter_mut().zip(widths) {
            fill_cell(cell, *width, height);
        }
    }
}

/// Pad one wrapped cell to `width` columns and `height` lines.
fn fill_cell(cell: &mut Vec<Cow<'_, str>>, width: usize, height: usize) {
    for line in cell.iter_mut() {
        let shortfall = width.saturating_sub(display_width(line));
        if shortfall > 0 {
            line.to_mut().push_str(&" ".repeat(shortfall));
        }
    }
    while cell.len() < height {
        cell.push(Cow::from(" ".repeat(width)));
    }
}

/// Compose a filled table into its final text.
///
/// The table must already be padded with [`fill_table`]. The returned string
/// has no trailing newline.
pub fn render(layout: Layout, table: &Table<Vec<Cow<'_, str>>>, widths: &[usize]) -> String {
    let mut lines = Vec::new();
    match layout.frame() {
        Frame::Ruled(glyphs) => {
            lines.push(rule_line(&glyphs.top, widths));
            for row_idx in 0..table.nrows() {
                if row_idx > 0 {
                    lines.push(rule_line(&glyphs.middle, widths));
                }
                push_framed_row(&mut lines, table.row(row_idx).unwrap(), &glyphs);
            }
            lines.push(rule_line(&glyphs.bottom, widths));
        }
        Frame::Piped(glyphs) => {
            for row_idx in 0..table.nrows() {
                if row_idx == 1 {
                    lines.push(rule_line(&glyphs.middle, widths));
                }
                push_framed_row(&mut lines, table.row(row_idx).unwrap(), &glyphs);
            }
        }
        Frame::Open {
            top_bottom,
            between,
        } => {
            // Full table width: cells plus two-space gutters.
            let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
            if let Some(fill) = top_bottom {
                lines.push(fill.to_string().repeat(total));
            }
            for row_idx in 0..table.nrows() {
                if row_idx > 0 {
                    if let Some(fill) = between {
                        lines.push(fill.to_string().repeat(total));
                    }
                }
                push_open_row(&mut lines, table.row(row_idx).unwrap());
            }
            if let Some(fill) = top_bottom {
                lines.push(fill.to_string().repeat(total));
            }
        }
    }
    lines.join("\n")
}

/// One horizontal rule: caps, fills spanning each padded cell, junctions at
/// the column boundaries.
fn rule_line(rule: &RuleLine, widths: &[usize]) -> String {
    let mut line = String::new();
    line.push(rule.left);
    for (col_idx, width) in widths.iter().enumerate() {
        if col_idx > 0 {
            line.push(rule.junction);
        }
        for _ in 0..width + 2 {
            line.push(rule.fill);
        }
    }
    line.push(rule.right);
    line
}

/// Emit one table row framed with vertical bars, one output line per block
/// line.
fn push_framed_row(lines: &mut Vec<String>, row: &[Vec<Cow<'_, str>>], glyphs: &RuleGlyphs) {
    let height = row.iter().map(Vec::len).max().unwrap_or(0);
    for line_idx in 0..height {
        let mut line = String::new();
        line.push(glyphs.outer_vertical);
        for (col_idx, cell) in row.iter().enumerate() {
            if col_idx > 0 {
                line.push(glyphs.inner_vertical);
            }
            line.push(' ');
            line.push_str(&cell[line_idx]);
            line.push(' ');
        }
        line.push(glyphs.outer_vertical);
        lines.push(line);
    }
}

/// Emit one table row with two-space gutters. Trailing padding is trimmed.
fn push_open_row(lines: &mut Vec<String>, row: &[Vec<Cow<'_, str>>]) {
    let height = row.iter().map(Vec::len).max().unwrap_or(0);
    for line_idx in 0..height {
        let mut line = String::new();
        for (col_idx, cell) in row.iter().enumerate() {
            if col_idx > 0 {
                line.push_str("  ");
            }
            line.push_str(&cell[line_idx]);
        }
        lines.push(line.trim_end().to_string());
    }
}
