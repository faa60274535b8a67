//! # tabfold: fold delimited text into fixed-width tables
//!
//! `tabfold` renders delimited text as a plaintext table whose cells are
//! word-wrapped into multi-line blocks. Its centerpiece is the column-width
//! planner: given a total width budget and a partial, user-supplied width
//! assignment, it chooses the remaining column widths so the wrapped table
//! uses the minimum possible number of output lines.
//!
//! The objective is not separable per column: every row costs as many lines
//! as its tallest cell. The planner therefore runs a dynamic program over
//! the unspecified columns with a bisection-accelerated inner decision. See
//! [`planner`] for the details.
//!
//! ## Pipeline
//!
//! parse ([`input`]) → plan ([`planner`]) → wrap → fill → compose
//! ([`render`]), with layouts described by [`layout::Layout`].
//!
//! ## Quick start
//!
//! ```rust
//! use tabfold::{
//!     fill_table, plan_widths, render, wrap_table, Layout, Table, WrapSettings, WrapStyle,
//! };
//!
//! let mut table = Table::from_cells(
//!     vec![
//!         "name".to_string(),
//!         "folds delimited text into neat plaintext tables".to_string(),
//!     ],
//!     1,
//! )
//! .unwrap();
//!
//! let layout = Layout::Grid;
//! let mut wrap = WrapSettings::new(WrapStyle::default());
//!
//! // The planner reads columns; transpose, plan, transpose back.
//! table.transpose();
//! let widths = plan_widths(&[None, None], 40, &table, layout.overhead(2), &mut wrap).unwrap();
//! table.transpose();
//!
//! let mut wrapped = wrap_table(&table, &widths, &mut wrap);
//! fill_table(&mut wrapped, &widths);
//! let text = render(layout, &wrapped, &widths);
//!
//! assert!(text.starts_with('+'));
//! assert_eq!(widths.iter().sum::<usize>(), 40 - layout.overhead(2));
//! ```

mod error;
pub mod input;
pub mod layout;
pub mod planner;
pub mod render;
pub mod table;
pub mod wrap;

pub use error::{Error, Result};
pub use input::ReadOptions;
pub use layout::Layout;
pub use planner::{plan_widths, MIN_PLANNED_WIDTH};
pub use render::{check_row_widths, fill_table, render, wrap_table};
pub use table::Table;
pub use wrap::{display_width, measure_wrap, WrapSettings, WrapStyle};
