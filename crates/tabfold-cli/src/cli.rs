//! Command-line surface of `tabfold`.

use clap::Parser;

/// Fold delimited text into a fixed-width plaintext table.
///
/// Reads delimiter-separated lines (TAB by default), word-wraps each field,
/// and prints a table that fits the requested total width using as few
/// output lines as possible.
#[derive(Debug, Parser)]
#[command(name = "tabfold", version, about)]
pub struct Cli {
    /// Column widths: comma-separated positive integers, `-` for columns
    /// the planner should size (e.g. `14,-,8`).
    #[arg(short = 'W', long = "widths", value_name = "LIST")]
    pub widths: Option<String>,

    /// Total table width in display columns; defaults to the terminal width.
    #[arg(short = 'T', long = "table-width", value_name = "N")]
    pub table_width: Option<usize>,

    /// Table layout.
    #[arg(short = 'L', long, default_value = "grid", value_name = "NAME")]
    pub layout: String,

    /// Fail on cells that cannot fit their column instead of warning.
    #[arg(short = 'S', long)]
    pub strict: bool,

    /// Field delimiter in the input (default: TAB).
    #[arg(short = 'd', long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Break words longer than their column width.
    #[arg(short = 'b', long, overrides_with = "no_break_long_words")]
    pub break_long_words: bool,

    /// Keep long words intact, overflowing the column instead (default).
    #[arg(short = 'B', long)]
    pub no_break_long_words: bool,

    /// Do not break words at their hyphens.
    #[arg(long)]
    pub no_break_on_hyphens: bool,

    /// Decode backslash escapes (\t, \n, \xHH, \0NNN) in input fields.
    #[arg(short = 'e', long)]
    pub escape: bool,

    /// Input file; `-` or absent reads standard input.
    #[arg(value_name = "FILE")]
    pub file: Option<String>,
}

/// A partial width assignment parsed from `-W`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidthSpec(Vec<Option<usize>>);

impl WidthSpec {
    /// Parse the `-W` list. Each item is a positive integer or `-`.
    pub fn parse(list: Option<&str>) -> Result<Self, String> {
        let mut widths = Vec::new();
        if let Some(list) = list {
            for item in list.split(',') {
                let width = match item.trim() {
                    "-" => None,
                    text => {
                        let value: usize = text.parse().map_err(|_| {
                            format!("width `{text}` is not a positive integer or `-`")
                        })?;
                        if value == 0 {
                            return Err(format!("width must be positive, got `{text}`"));
                        }
                        Some(value)
                    }
                };
                widths.push(width);
            }
        }
        Ok(Self(widths))
    }

    /// Normalize to `ncols` entries: missing entries become unset, surplus
    /// entries are dropped. Either adjustment warns on stderr.
    pub fn into_vec(self, ncols: usize) -> Vec<Option<usize>> {
        let mut widths = self.0;
        if widths.len() < ncols {
            if !widths.is_empty() {
                eprintln!("tabfold: warning: padding width list with `-` to {ncols} columns");
            }
            widths.resize(ncols, None);
        } else if widths.len() > ncols {
            eprintln!("tabfold: warning: truncating width list to {ncols} columns");
            widths.truncate(ncols);
        }
        widths
    }
}
