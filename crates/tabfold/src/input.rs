//! Reading delimited text into a table.
//!
//! Lines are split on a single-character delimiter; rows shorter than the
//! widest row are padded with empty cells so the table is rectangular.

use std::io::BufRead;
use std::iter::Peekable;
use std::str::Chars;

use crate::table::Table;
use crate::{Error, Result};

/// Options for reading a table from delimited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Field delimiter.
    pub delimiter: char,
    /// Decode backslash escapes inside fields.
    pub decode_escapes: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            decode_escapes: false,
        }
    }
}

impl Table<String> {
    /// Read a table from `reader`, one row per line.
    ///
    /// Lines end with LF; a trailing CR is stripped. Blank lines become
    /// empty rows. Every row is padded with empty cells to the widest row's
    /// field count. Input with no lines, or only blank lines, is
    /// [`Error::EmptyInput`].
    pub fn from_reader<R: BufRead>(reader: R, opts: &ReadOptions) -> Result<Self> {
        let mut rows: Vec<Vec<String>> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let row = if line.is_empty() {
                Vec::new()
            } else if opts.decode_escapes {
                line.split(opts.delimiter)
                    .map(decode_escapes)
                    .collect::<Result<_>>()?
            } else {
                line.split(opts.delimiter).map(str::to_owned).collect()
            };
            rows.push(row);
        }

        let ncols = rows.iter().map(Vec::len).max().ok_or(Error::EmptyInput)?;
        if ncols == 0 {
            return Err(Error::EmptyInput);
        }
        let nrows = rows.len();
        let mut cells = Vec::with_capacity(nrows * ncols);
        for mut row in rows {
            let missing = ncols - row.len();
            cells.append(&mut row);
            cells.extend(std::iter::repeat_with(String::new).take(missing));
        }
        Ok(Table::from_cells(cells, nrows).expect("rows were padded to equal length"))
    }
}

/// Decode `\\`, `\t`, `\n`, `\r`, `\xHH`, and `\0NNN` escapes in `field`.
///
/// Unknown escapes pass through verbatim, backslash included. Byte escapes
/// may compose multi-byte characters; the decoded field must be valid UTF-8.
fn decode_escapes(field: &str) -> Result<String> {
    let mut bytes = Vec::with_capacity(field.len());
    let mut chars = field.chars().peekable();
    let mut buf = [0u8; 4];
    while let Some(c) = chars.next() {
        if c != '\\' {
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next() {
            None => bytes.push(b'\\'),
            Some('\\') => bytes.push(b'\\'),
            Some('t') => bytes.push(b'\t'),
            Some('n') => bytes.push(b'\n'),
            Some('r') => bytes.push(b'\r'),
            Some('x') => match parse_code(&mut chars, 16, 2) {
                Some(byte) => bytes.push(byte),
                None => bytes.extend_from_slice(b"\\x"),
            },
            Some('0') => bytes.push(parse_code(&mut chars, 8, 3).unwrap_or(0)),
            Some(other) => {
                bytes.push(b'\\');
                bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    String::from_utf8(bytes).map_err(Error::from)
}

/// Consume up to `max_digits` digits in `radix` and fold them into a byte.
/// Returns `None` when no digit follows.
fn parse_code(chars: &mut Peekable<Chars<'_>>, radix: u32, max_digits: usize) -> Option<u8> {
    let mut value: u8 = 0;
    let mut digits = 0;
    while digits < max_digits {
        match chars.peek().and_then(|c| c.to_digit(radix)) {
            Some(digit) => {
                value = value.wrapping_mul(radix as u8).wrapping_add(digit as u8);
                chars.next();
                digits += 1;
            }
            None => break,
        }
    }
    (digits > 0).then_some(value)
}
