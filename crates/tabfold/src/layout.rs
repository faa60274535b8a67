//! Table layouts: separator overhead and rule glyphs.
//!
//! A layout is a pure description: how many display columns its separators
//! consume for a given column count, and which glyphs draw its rules. The
//! composition itself lives in [`crate::render`].

/// One horizontal rule: its end caps, fill, and column junction.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RuleLine {
    pub left: char,
    pub fill: char,
    pub junction: char,
    pub right: char,
}

impl RuleLine {
    const fn uniform(fill: char, caps: char) -> Self {
        Self {
            left: caps,
            fill,
            junction: caps,
            right: caps,
        }
    }

    const fn new(left: char, fill: char, junction: char, right: char) -> Self {
        Self {
            left,
            fill,
            junction,
            right,
        }
    }
}

/// Glyph set for a layout that frames cells with vertical bars.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RuleGlyphs {
    pub top: RuleLine,
    pub middle: RuleLine,
    pub bottom: RuleLine,
    pub outer_vertical: char,
    pub inner_vertical: char,
}

/// How a layout composes rules and gutters.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Frame {
    /// Vertical bars around every cell, rules around every row.
    Ruled(RuleGlyphs),
    /// Vertical bars around every cell, one rule after the first row, no
    /// outer horizontal border.
    Piped(RuleGlyphs),
    /// Two-space gutters; optional full-width rules.
    Open {
        top_bottom: Option<char>,
        between: Option<char>,
    },
}

const GRID: RuleGlyphs = RuleGlyphs {
    top: RuleLine::uniform('-', '+'),
    middle: RuleLine::uniform('-', '+'),
    bottom: RuleLine::uniform('-', '+'),
    outer_vertical: '|',
    inner_vertical: '|',
};

const ROUNDED: RuleGlyphs = RuleGlyphs {
    top: RuleLine::new('╭', '─', '┬', '╮'),
    middle: RuleLine::new('├', '─', '┼', '┤'),
    bottom: RuleLine::new('╰', '─', '┴', '╯'),
    outer_vertical: '│',
    inner_vertical: '│',
};

const HEAVY: RuleGlyphs = RuleGlyphs {
    top: RuleLine::new('┏', '━', '┳', '┓'),
    middle: RuleLine::new('┣', '━', '╋', '┫'),
    bottom: RuleLine::new('┗', '━', '┻', '┛'),
    outer_vertical: '┃',
    inner_vertical: '┃',
};

const DOUBLE: RuleGlyphs = RuleGlyphs {
    top: RuleLine::new('╔', '═', '╦', '╗'),
    middle: RuleLine::new('╠', '═', '╬', '╣'),
    bottom: RuleLine::new('╚', '═', '╩', '╝'),
    outer_vertical: '║',
    inner_vertical: '║',
};

const FANCY: RuleGlyphs = RuleGlyphs {
    top: RuleLine::new('┌', '─', '┬', '┐'),
    middle: RuleLine::new('├', '─', '┼', '┤'),
    bottom: RuleLine::new('└', '─', '┴', '┘'),
    outer_vertical: '│',
    inner_vertical: '│',
};

const MIXED: RuleGlyphs = RuleGlyphs {
    top: RuleLine::new('┏', '━', '┯', '┓'),
    middle: RuleLine::new('┠', '─', '┼', '┨'),
    bottom: RuleLine::new('┗', '━', '┷', '┛'),
    outer_vertical: '┃',
    inner_vertical: '│',
};

const GITHUB: RuleGlyphs = RuleGlyphs {
    top: RuleLine::uniform('-', '|'),
    middle: RuleLine::uniform('-', '|'),
    bottom: RuleLine::uniform('-', '|'),
    outer_vertical: '|',
    inner_vertical: '|',
};

/// A table layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// ASCII ruled grid: `+---+` rules, `| cell |` rows.
    Grid,
    /// Unicode light rules with rounded corners.
    Rounded,
    /// Unicode heavy rules.
    Heavy,
    /// Unicode double rules.
    Double,
    /// Unicode light rules with square corners.
    Fancy,
    /// Heavy outer border with light inner rules.
    Mixed,
    /// Pipe-delimited rows with a single rule after the first row.
    Github,
    /// Two-space gutters, `=` rules at top and bottom, `-` between rows.
    Hline,
    /// Two-space gutters, no rules.
    Plain,
}

impl Layout {
    /// Every accepted layout name, including aliases.
    pub const NAMES: &'static [&'static str] = &[
        "grid", "rounded", "heavy", "double", "fancy", "mixed", "github", "hline", "simple",
        "plain",
    ];

    /// Look up a layout by name. `simple` is an alias for `hline`.
    pub fn from_name(name: &str) -> Option<Layout> {
        match name {
            "grid" => Some(Layout::Grid),
            "rounded" => Some(Layout::Rounded),
            "heavy" => Some(Layout::Heavy),
            "double" => Some(Layout::Double),
            "fancy" => Some(Layout::Fancy),
            "mixed" => Some(Layout::Mixed),
            "github" => Some(Layout::Github),
            "hline" | "simple" => Some(Layout::Hline),
            "plain" => Some(Layout::Plain),
            _ => None,
        }
    }

    /// Display columns consumed by separators and cell padding, as a
    /// function of the column count only.
    ///
    /// Framed layouts spend one bar between and around columns plus one
    /// space of padding on each side of every cell; open layouts spend a
    /// two-space gutter between columns.
    pub fn overhead(&self, ncols: usize) -> usize {
        match self.frame() {
            Frame::Ruled(_) | Frame::Piped(_) => 3 * ncols + 1,
            Frame::Open { .. } => 2 * ncols.saturating_sub(1),
        }
    }

    pub(crate) fn frame(&self) -> Frame {
        match self {
            Layout::Grid => Frame::Ruled(GRID),
            Layout::Rounded => Frame::Ruled(ROUNDED),
            Layout::Heavy => Frame::Ruled(HEAVY),
            Layout::Double => Frame::Ruled(DOUBLE),
            Layout::Fancy => Frame::Ruled(FANCY),
            Layout::Mixed => Frame::Ruled(MIXED),
            Layout::Github => Frame::Piped(GITHUB),
            Layout::Hline => Frame::Open {
                top_bottom: Some('='),
                between: Some('-'),
            },
            Layout::Plain => Frame::Open {
                top_bottom: None,
                between: None,
            },
        }
    }
}
