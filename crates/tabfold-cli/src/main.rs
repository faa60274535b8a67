//! `tabfold` binary: parse arguments, read the table, plan column widths,
//! wrap, fill, and print.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use clap::Parser;
use tabfold::{
    check_row_widths, fill_table, plan_widths, render, wrap_table, Error, Layout, ReadOptions,
    Table, WrapSettings, WrapStyle,
};

mod cli;
use cli::{Cli, WidthSpec};

/// Exit status for malformed arguments (including empty input).
const EXIT_ARGS: u8 = 1;
/// Exit status for input I/O failures.
const EXIT_INPUT: u8 = 2;
/// Exit status for planning or wrapping failures.
const EXIT_PLAN: u8 = 4;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and exit zero; real argument
            // errors report through the standard exit code.
            let failed = err.use_stderr();
            let _ = err.print();
            return if failed {
                ExitCode::from(EXIT_ARGS)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tabfold: {err}");
            ExitCode::from(exit_class(&err))
        }
    }
}

fn exit_class(err: &Error) -> u8 {
    match err {
        Error::EmptyInput | Error::InvalidArgument(_) => EXIT_ARGS,
        Error::Io(_) | Error::Encoding(_) => EXIT_INPUT,
        Error::TotalWidthTooSmall(_) | Error::ColumnOverflow { .. } => EXIT_PLAN,
    }
}

fn run(cli: Cli) -> tabfold::Result<()> {
    let width_spec = WidthSpec::parse(cli.widths.as_deref()).map_err(Error::InvalidArgument)?;
    let layout = Layout::from_name(&cli.layout).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "unknown layout `{}`; expected one of: {}",
            cli.layout,
            Layout::NAMES.join(", ")
        ))
    })?;
    if cli.table_width == Some(0) {
        return Err(Error::InvalidArgument(
            "table width must be positive".to_string(),
        ));
    }

    let read_opts = ReadOptions {
        delimiter: cli.delimiter.unwrap_or('\t'),
        decode_escapes: cli.escape,
    };
    let reader: Box<dyn BufRead> = match cli.file.as_deref() {
        None | Some("-") => Box::new(BufReader::new(io::stdin())),
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
    };
    let mut table = Table::from_reader(reader, &read_opts)?;
    let nrows = table.nrows();
    let ncols = table.ncols();

    let user_widths = width_spec.into_vec(ncols);
    let total_width = cli.table_width.unwrap_or_else(terminal_width);
    let mut wrap = WrapSettings::new(WrapStyle {
        break_long_words: cli.break_long_words,
        break_on_hyphens: !cli.no_break_on_hyphens,
    });

    table.transpose();
    let widths = plan_widths(
        &user_widths,
        total_width,
        &table,
        layout.overhead(ncols),
        &mut wrap,
    )?;
    table.transpose();

    let mut wrapped = wrap_table(&table, &widths, &mut wrap);
    for row_idx in 0..nrows {
        let row = wrapped.row(row_idx).expect("row index within table");
        if let Err(err) = check_row_widths(row_idx, row, &widths) {
            if cli.strict {
                return Err(err);
            }
            eprintln!("tabfold: warning: {err}");
        }
    }
    fill_table(&mut wrapped, &widths);

    write_output(&render(layout, &wrapped, &widths))
}

/// Width of the attached terminal, or 80 when there is none.
fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(80)
}

/// Print the table. A consumer closing the pipe early is not an error.
fn write_output(text: &str) -> tabfold::Result<()> {
    let mut stdout = io::stdout().lock();
    let outcome = stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.write_all(b"\n"))
        .and_then(|()| stdout.flush());
    match outcome {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(Error::from),
    }
}
