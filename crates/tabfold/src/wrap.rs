//! Wrapping glue: re-targetable wrap options and dry-run measurement.
//!
//! The planner probes a column at hundreds of candidate widths. Probing with
//! the real wrapper would allocate every wrapped line just to count lines and
//! check widths, so [`measure_wrap`] runs the same word pipeline as
//! [`textwrap::wrap`] and reports only the display width each line would
//! have. The renderer later wraps for real at the final widths; because both
//! paths share one pipeline, measured and rendered output always agree.

use textwrap::core::{break_words, display_width as textwrap_display_width, Fragment, Word};
use textwrap::word_splitters::split_words;
use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Display width of `s` in terminal cells.
///
/// East-Asian wide characters occupy two cells; ANSI escape sequences are
/// not counted.
#[inline]
pub fn display_width(s: &str) -> usize {
    textwrap_display_width(s)
}

/// Wrapping behavior shared by the planner and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapStyle {
    /// Break words longer than the line width instead of overflowing.
    pub break_long_words: bool,
    /// Allow breaking words at their hyphens.
    pub break_on_hyphens: bool,
}

impl Default for WrapStyle {
    fn default() -> Self {
        Self {
            break_long_words: false,
            break_on_hyphens: true,
        }
    }
}

/// A [`textwrap::Options`] holder whose width is re-targeted per call.
///
/// The planner evaluates the same column at many widths; building a fresh
/// options value per probe would clone the word separator and splitter every
/// time. [`WrapSettings::at_width`] mutates the width field in place and
/// hands out a borrow.
pub struct WrapSettings<'a> {
    opts: Options<'a>,
}

impl<'a> WrapSettings<'a> {
    /// Build settings from a [`WrapStyle`].
    ///
    /// The wrap algorithm is pinned to first-fit: the planner requires line
    /// counts to be monotonically non-increasing in width, which the greedy
    /// algorithm guarantees and the optimal-fit algorithm does not.
    pub fn new(style: WrapStyle) -> Self {
        let splitter = if style.break_on_hyphens {
            WordSplitter::HyphenSplitter
        } else {
            WordSplitter::NoHyphenation
        };
        let opts = Options::new(80)
            .break_words(style.break_long_words)
            .word_separator(WordSeparator::UnicodeBreakProperties)
            .word_splitter(splitter)
            .wrap_algorithm(WrapAlgorithm::FirstFit);
        Self { opts }
    }

    /// Indent applied to every wrapped line after the first, e.g. for
    /// hanging bullet continuation.
    pub fn subsequent_indent(mut self, indent: &'a str) -> Self {
        self.opts.subsequent_indent = indent;
        self
    }

    /// The wrap options re-targeted to `width`.
    pub fn at_width(&mut self, width: usize) -> &Options<'a> {
        self.opts.width = width;
        &self.opts
    }
}

impl Default for WrapSettings<'_> {
    fn default() -> Self {
        Self::new(WrapStyle::default())
    }
}

/// Measure how `text` would wrap at `options.width` without building the
/// wrapped lines.
///
/// Returns the display width of each line the wrapper would produce,
/// indentation included. Non-empty input yields at least one entry. With
/// `break_words` disabled a single over-long token produces an entry wider
/// than `options.width`; callers treat that as the over-width condition.
pub fn measure_wrap(text: &str, options: &Options<'_>) -> Vec<usize> {
    let mut widths = Vec::new();
    for line in text.split('\n') {
        measure_line(line, options, &mut widths);
    }
    widths
}

/// Measure a single input line, pushing one entry per output line.
fn measure_line(line: &str, options: &Options<'_>, out: &mut Vec<usize>) {
    let initial_indent = display_width(options.initial_indent);
    let subsequent_indent = display_width(options.subsequent_indent);
    let initial_room = options.width.saturating_sub(initial_indent);
    let subsequent_room = options.width.saturating_sub(subsequent_indent);

    let words = options.word_separator.find_words(line);
    let words = split_words(words, &options.word_splitter);
    let words: Vec<Word<'_>> = if options.break_words {
        let mut broken = break_words(words, subsequent_room);
        if !options.initial_indent.is_empty() {
            // Keep parity with textwrap: words are broken against the
            // subsequent width, so the first line must be free to stay
            // empty when the first piece does not fit it.
            broken.insert(0, Word::from(""));
        }
        broken
    } else {
        words.collect()
    };

    let line_rooms = [initial_room, subsequent_room];
    for line_words in options.wrap_algorithm.wrap(&words, &line_rooms) {
        if line_words.is_empty() {
            // Empty input: the wrapper emits one empty line, no indent.
            out.push(0);
            continue;
        }
        // The wrapper indents by the position of the output line in the
        // whole text, not within the current input line.
        let indent = if out.is_empty() {
            initial_indent
        } else {
            subsequent_indent
        };
        let mut width = indent;
        for (word_idx, word) in line_words.iter().enumerate() {
            width += word.width() as usize;
            if word_idx + 1 < line_words.len() {
                width += word.whitespace_width() as usize;
            } else {
                width += word.penalty_width() as usize;
            }
        }
        out.push(width);
    }
}
