//! End-to-end scenarios: read delimited text, plan widths, wrap, fill, and
//! compose, checking the exact rendered output or the failure class.

use std::io::Cursor;

use tabfold::{
    check_row_widths, display_width, fill_table, plan_widths, render, wrap_table, Error, Layout,
    ReadOptions, Table, WrapSettings, WrapStyle,
};

fn read(input: &str) -> Table<String> {
    Table::from_reader(Cursor::new(input.to_string()), &ReadOptions::default()).unwrap()
}

/// Run the full pipeline with the given partial widths.
fn fold(
    input: &str,
    user_widths: &[Option<usize>],
    total_width: usize,
    layout: Layout,
) -> tabfold::Result<String> {
    let mut table = read(input);
    let ncols = table.ncols();
    let mut wrap = WrapSettings::new(WrapStyle::default());

    table.transpose();
    let widths = plan_widths(
        user_widths,
        total_width,
        &table,
        layout.overhead(ncols),
        &mut wrap,
    )?;
    table.transpose();

    let mut wrapped = wrap_table(&table, &widths, &mut wrap);
    for row_idx in 0..table.nrows() {
        check_row_widths(row_idx, wrapped.row(row_idx).unwrap(), &widths)?;
    }
    fill_table(&mut wrapped, &widths);
    Ok(render(layout, &wrapped, &widths))
}

#[test]
fn fixed_widths_render_a_minimal_grid() {
    let text = fold("a\tb", &[Some(3), Some(3)], 80, Layout::Grid).unwrap();
    assert_eq!(
        text,
        "+-----+-----+\n\
         | a   | b   |\n\
         +-----+-----+"
    );
}

#[test]
fn unwrapped_row_keeps_single_height() {
    let text = fold(
        "Usage\ttabfold [-h] [FILE]",
        &[Some(7), Some(19)],
        80,
        Layout::Grid,
    )
    .unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // Rule, one data line, rule: nothing needed wrapping.
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "| Usage   | tabfold [-h] [FILE] |");
}

#[test]
fn remaining_budget_goes_to_the_unset_column() {
    let input = "lhs\tLorem ipsum dolor sit amet, consectetur adipiscing elit, sed do\n\
                 rhs\teiusmod tempor incididunt ut labore et dolore magna aliqua tellus";
    let mut table = read(input);
    let mut wrap = WrapSettings::new(WrapStyle::default());
    table.transpose();
    let widths = plan_widths(
        &[Some(14), None],
        72,
        &table,
        Layout::Grid.overhead(2),
        &mut wrap,
    )
    .unwrap();
    // Budget: 72 total, minus grid overhead 7, minus the fixed 14.
    assert_eq!(widths, vec![14, 51]);
}

#[test]
fn all_unset_columns_fill_the_budget_exactly() {
    let input = "alpha beta gamma\tdelta epsilon\tzeta eta theta iota\n\
                 one two\tthree\tfour five six";
    let mut table = read(input);
    let mut wrap = WrapSettings::new(WrapStyle::default());
    table.transpose();
    let widths = plan_widths(
        &[None, None, None],
        40,
        &table,
        Layout::Grid.overhead(3),
        &mut wrap,
    )
    .unwrap();
    assert_eq!(widths.iter().sum::<usize>(), 30);
    assert!(widths.iter().all(|&w| w >= 2));
}

#[test]
fn strict_pipeline_fails_on_unbreakable_token() {
    let err = fold(
        "supercalifragilistic\tok",
        &[Some(8), Some(8)],
        80,
        Layout::Grid,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::ColumnOverflow {
            cell: Some((0, 0))
        }
    ));
}

#[test]
fn lenient_pipeline_renders_the_overflow_ragged() {
    // Same input, but skip the width check the way non-strict mode does.
    let table = read("supercalifragilistic\tok");
    let widths = vec![8, 8];
    let mut wrap = WrapSettings::new(WrapStyle::default());
    let mut wrapped = wrap_table(&table, &widths, &mut wrap);
    fill_table(&mut wrapped, &widths);
    let text = render(Layout::Grid, &wrapped, &widths);
    assert!(text.contains("supercalifragilistic"));
}

#[test]
fn empty_input_is_an_argument_class_error() {
    let opts = ReadOptions::default();
    let err = Table::from_reader(Cursor::new(Vec::new()), &opts).unwrap_err();
    assert!(matches!(err, Error::EmptyInput));
}

#[test]
fn grid_geometry_holds_for_wrapped_tables() {
    let input = "first column with several words\tsecond\n\
                 third cell\tfourth cell also has words";
    let text = fold(input, &[None, None], 36, Layout::Grid).unwrap();
    let widths = {
        let mut table = read(input);
        let mut wrap = WrapSettings::new(WrapStyle::default());
        table.transpose();
        plan_widths(&[None, None], 36, &table, Layout::Grid.overhead(2), &mut wrap).unwrap()
    };

    for line in text.lines() {
        if line.starts_with('+') {
            // Every rule carries one corner per column boundary.
            assert_eq!(line.matches('+').count(), 3);
            assert_eq!(display_width(line), 36);
        } else {
            assert!(line.starts_with('|') && line.ends_with('|'));
            let cells: Vec<&str> = line[1..line.len() - 1].split('|').collect();
            assert_eq!(cells.len(), 2);
            for (cell, width) in cells.iter().zip(&widths) {
                assert_eq!(display_width(cell), width + 2);
            }
        }
    }
}

#[test]
fn hline_layout_rules_and_gutters() {
    let text = fold("a\tb\nc\td", &[Some(3), Some(3)], 80, Layout::Hline).unwrap();
    assert_eq!(
        text,
        "========\n\
         a    b\n\
         --------\n\
         c    d\n\
         ========"
    );
}

#[test]
fn github_layout_separates_header_row() {
    let text = fold("k\tv\nname\ttabfold", &[None, None], 20, Layout::Github).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with('|'));
    assert!(lines[1].starts_with("|-"));
    assert_eq!(lines.len(), 3);
}

#[test]
fn planner_failure_reports_without_coordinates() {
    let err = fold(
        "antidisestablishmentarianism\tword",
        &[None, None],
        16,
        Layout::Plain,
    )
    .unwrap_err();
    assert!(matches!(err, Error::ColumnOverflow { cell: None }));
}
