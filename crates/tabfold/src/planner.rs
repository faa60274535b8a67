//! Column-width planning.
//!
//! Given the cells of a table, a total width budget, and a partial width
//! assignment, [`plan_widths`] chooses the remaining column widths so that
//! the wrapped table occupies the minimum number of output lines. The
//! objective is not separable per column: a row costs as many lines as its
//! tallest cell, so the cost of one column depends on the widths chosen for
//! all the others.
//!
//! The search is a dynamic program over the unspecified columns in table
//! order. `dp(step, w)` holds, for every row, the best achievable line count
//! using the first `step + 1` unspecified columns within `w` display
//! columns; user-fixed columns contribute a constant base cost. Two
//! monotonicities collapse the inner decision from a linear scan to a
//! bisection: widening a column never increases its line counts, and
//! shrinking the residual width never decreases the cost of the columns
//! already placed. See `decide_bisect` for the search itself.

use std::fmt;

use crate::table::Table;
use crate::wrap::{measure_wrap, WrapSettings};
use crate::{Error, Result};

/// Minimum width the planner will assign to a column it chooses freely.
///
/// User-fixed widths may be smaller; only planned columns are clamped.
pub const MIN_PLANNED_WIDTH: usize = 2;

/// Sentinel line count for "does not fit at this width".
const INF: usize = usize::MAX;

/// Wrapped line counts for every row of one column, with an infinity
/// sentinel for widths the column cannot fit.
#[derive(Clone, PartialEq, Eq)]
struct LineCounts(Vec<usize>);

impl LineCounts {
    #[inline]
    fn zero(nrows: usize) -> Self {
        debug_assert!(nrows > 0);
        Self(vec![0; nrows])
    }

    #[inline]
    fn inf(nrows: usize) -> Self {
        debug_assert!(nrows > 0);
        Self(vec![INF; nrows])
    }

    #[inline]
    fn is_inf(&self) -> bool {
        self.0.iter().any(|&n| n == INF)
    }

    /// Elementwise maximum with `other`.
    #[inline]
    fn max_with(&mut self, other: &LineCounts) {
        debug_assert_eq!(self.0.len(), other.0.len());
        for (n, m) in self.0.iter_mut().zip(&other.0) {
            *n = (*n).max(*m);
        }
    }

    /// Total output lines across all rows; infinity absorbs the sum.
    #[inline]
    fn total(&self) -> usize {
        if self.is_inf() {
            INF
        } else {
            self.0.iter().sum()
        }
    }
}

impl fmt::Debug for LineCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inf() {
            write!(f, "LineCounts(inf)")
        } else {
            write!(f, "LineCounts({:?})", self.0)
        }
    }
}

/// Count the lines taken by every cell of `column` wrapped at
/// `options.width`.
///
/// An over-width line makes the whole column infeasible, unless the width
/// was fixed by the user: fixed columns accept over-width cells here and the
/// renderer reports them after the final wrap.
fn column_cost(
    column: &[String],
    options: &textwrap::Options<'_>,
    user_fixed: bool,
) -> LineCounts {
    let mut counts = Vec::with_capacity(column.len());
    for cell in column {
        let line_widths = measure_wrap(cell, options);
        if !user_fixed && line_widths.iter().any(|&lw| lw > options.width) {
            return LineCounts::inf(column.len());
        }
        counts.push(line_widths.len());
    }
    LineCounts(counts)
}

/// Lazily measured costs of one column over candidate widths.
///
/// One probe cache lives for one DP step and is shared by every budget cell
/// of that step, so a column is measured at most once per width no matter
/// how many cells the decision search touches.
struct ColumnProbe<'t> {
    column: &'t [String],
    costs: Vec<Option<LineCounts>>,
}

impl<'t> ColumnProbe<'t> {
    fn new(column: &'t [String], max_width: usize) -> Self {
        Self {
            column,
            costs: vec![None; max_width + 1],
        }
    }

    fn cost(&mut self, width: usize, wrap: &mut WrapSettings<'_>) -> &LineCounts {
        let column = self.column;
        self.costs[width]
            .get_or_insert_with(|| column_cost(column, wrap.at_width(width), false))
    }

    fn total(&mut self, width: usize, wrap: &mut WrapSettings<'_>) -> usize {
        self.cost(width, wrap).total()
    }
}

/// The width granted to the column decided at a DP cell.
type Decision = usize;

/// Signature shared by the two decision rules.
type DecideFn = fn(
    &mut ColumnProbe<'_>,
    &mut WrapSettings<'_>,
    usize,
    usize,
    usize,
    &[LineCounts],
) -> (LineCounts, Decision);

/// Feasible widths at DP step `step` (0-based) with cell budget `w`.
///
/// Every step before this one still has to receive at least
/// [`MIN_PLANNED_WIDTH`] columns out of the residual `w - i`.
fn feasible_range(step: usize, w: usize) -> Option<(usize, usize)> {
    let hi = w.checked_sub(MIN_PLANNED_WIDTH * step)?;
    if hi < MIN_PLANNED_WIDTH {
        return None;
    }
    Some((MIN_PLANNED_WIDTH, hi))
}

/// The true objective at width `i`: this column's cost combined with the
/// best cost of the earlier columns in the remaining `w - i`.
fn objective(
    probe: &mut ColumnProbe<'_>,
    wrap: &mut WrapSettings<'_>,
    nrows: usize,
    w: usize,
    i: usize,
    memo: &[LineCounts],
) -> LineCounts {
    let prev = &memo[w - i];
    if prev.is_inf() {
        return LineCounts::inf(nrows);
    }
    let mut cost = probe.cost(i, wrap).clone();
    cost.max_with(prev);
    cost
}

/// First DP step: the column is forced to take the whole cell budget.
fn decide_first(
    probe: &mut ColumnProbe<'_>,
    wrap: &mut WrapSettings<'_>,
    nrows: usize,
    w: usize,
    base: &LineCounts,
) -> (LineCounts, Decision) {
    if w < MIN_PLANNED_WIDTH || base.is_inf() {
        return (LineCounts::inf(nrows), w);
    }
    let mut cost = probe.cost(w, wrap).clone();
    cost.max_with(base);
    (cost, w)
}

/// Reference decision rule: scan every feasible width in ascending order.
///
/// `min_by_key` keeps the first minimum, so ties resolve to the smallest
/// width. The bisect rule below must reproduce this exactly.
#[cfg(test)]
fn decide_brute(
    probe: &mut ColumnProbe<'_>,
    wrap: &mut WrapSettings<'_>,
    nrows: usize,
    w: usize,
    step: usize,
    memo: &[LineCounts],
) -> (LineCounts, Decision) {
    let Some((lo, hi)) = feasible_range(step, w) else {
        return (LineCounts::inf(nrows), 0);
    };
    (lo..=hi)
        .map(|i| {
            let prev = &memo[w - i];
            if prev.is_inf() {
                (LineCounts::inf(nrows), i)
            } else {
                let mut cost = probe.cost(i, wrap).clone();
                cost.max_with(prev);
                (cost, i)
            }
        })
        .min_by_key(|(cost, _)| cost.total())
        .expect("feasible range is non-empty")
}

/// Bisection-accelerated decision rule.
///
/// Both components of the objective's lower bound are monotone in `i`: the
/// earlier columns' total `prev(w - i)` never decreases, this column's total
/// never increases. The search:
///
/// 1. bisects for the crossing point of the two totals and takes the true
///    objective there (and at its right neighbor) as an upper bound `B`;
/// 2. bisects each component for the interval where a candidate could still
///    reach `B`; outside it, one component alone already exceeds `B`, and
///    the objective dominates both components;
/// 3. scans that interval in ascending order, keeping the first minimum.
///
/// Step 3 mirrors the brute rule over a certified sub-range, so the result,
/// tie-break included, is identical to `decide_brute`.
fn decide_bisect(
    probe: &mut ColumnProbe<'_>,
    wrap: &mut WrapSettings<'_>,
    nrows: usize,
    w: usize,
    step: usize,
    memo: &[LineCounts],
) -> (LineCounts, Decision) {
    let Some((lo, hi)) = feasible_range(step, w) else {
        return (LineCounts::inf(nrows), 0);
    };

    // Phase 1: largest width where this column still costs at least as much
    // as the earlier columns. The minimum of the lower bound sits at the
    // crossing or immediately to its right.
    let mut a = lo;
    let mut b = hi;
    while a < b {
        let i = a + (b - a + 1) / 2;
        let prev = &memo[w - i];
        if prev.is_inf() {
            // Residual too small for the earlier columns: move left.
            b = i - 1;
        } else if probe.total(i, wrap) == INF {
            // This column cannot fit yet: move right.
            a = i;
        } else if prev.total() <= probe.total(i, wrap) {
            a = i;
        } else {
            b = i - 1;
        }
    }
    let crossing = a;

    // Phase 2: upper bound from the true objective around the crossing.
    let mut bound = objective(probe, wrap, nrows, w, crossing, memo).total();
    if crossing < hi {
        bound = bound.min(objective(probe, wrap, nrows, w, crossing + 1, memo).total());
    }

    // Phase 3: certify the interval that can still tie the bound. With an
    // infinite bound nothing near the crossing fits and the whole range is
    // scanned; the probe cache keeps that affordable.
    let (scan_lo, scan_hi) = if bound == INF {
        (lo, hi)
    } else {
        let mut a = lo;
        let mut b = crossing;
        while a < b {
            let i = a + (b - a) / 2;
            if probe.total(i, wrap) <= bound {
                b = i;
            } else {
                a = i + 1;
            }
        }
        let left = a;
        let mut a = crossing;
        let mut b = hi;
        while a < b {
            let i = a + (b - a + 1) / 2;
            if memo[w - i].total() <= bound {
                a = i;
            } else {
                b = i - 1;
            }
        }
        (left, a)
    };

    // Phase 4: ascending scan; first minimum wins, like the brute rule.
    let mut best = LineCounts::inf(nrows);
    let mut best_total = INF;
    let mut best_i = scan_lo;
    for i in scan_lo..=scan_hi {
        let prev = &memo[w - i];
        if prev.is_inf() || prev.total() >= best_total {
            // The earlier columns' cost only grows from here on; nothing to
            // the right can strictly improve on the current best.
            break;
        }
        let cost = probe.cost(i, wrap);
        if cost.is_inf() || cost.total() >= best_total {
            // This column's cost only shrinks to the right; keep going.
            continue;
        }
        let mut candidate = cost.clone();
        candidate.max_with(prev);
        let total = candidate.total();
        if total < best_total {
            best = candidate;
            best_total = total;
            best_i = i;
        }
    }
    (best, best_i)
}

/// Complete a partial width assignment so the wrapped table uses the fewest
/// output lines.
///
/// `columns` is the column-major view of the table: its `j`-th row holds the
/// cells of column `j`. `overhead` is the layout's separator cost for this
/// column count; it is subtracted from `total_width` together with the
/// user-fixed widths before the remainder is distributed.
///
/// When every width is user-fixed the assignment is returned unchanged and
/// `total_width` is ignored. Otherwise the returned widths sum to exactly
/// `total_width - overhead`, each planned entry is at least
/// [`MIN_PLANNED_WIDTH`], and ties between equally good assignments resolve
/// to the narrower width for the later column. The plan is deterministic.
///
/// # Errors
///
/// [`Error::TotalWidthTooSmall`] when the budget cannot cover the fixed
/// widths, the overhead, and the per-column minimum;
/// [`Error::ColumnOverflow`] (without a coordinate) when no assignment fits,
/// e.g. an unbreakable token wider than any feasible column.
pub fn plan_widths(
    user_widths: &[Option<usize>],
    total_width: usize,
    columns: &Table<String>,
    overhead: usize,
    wrap: &mut WrapSettings<'_>,
) -> Result<Vec<usize>> {
    plan_with(user_widths, total_width, columns, overhead, wrap, decide_bisect)
}

/// Reference planner driven by the brute decision rule. Test-only.
#[cfg(test)]
pub(crate) fn plan_widths_brute(
    user_widths: &[Option<usize>],
    total_width: usize,
    columns: &Table<String>,
    overhead: usize,
    wrap: &mut WrapSettings<'_>,
) -> Result<Vec<usize>> {
    plan_with(user_widths, total_width, columns, overhead, wrap, decide_brute)
}

fn plan_with(
    user_widths: &[Option<usize>],
    total_width: usize,
    columns: &Table<String>,
    overhead: usize,
    wrap: &mut WrapSettings<'_>,
    decide: DecideFn,
) -> Result<Vec<usize>> {
    // The column-major view: one row per table column.
    let ncols = columns.nrows();
    let nrows = columns.ncols();
    if user_widths.len() != ncols {
        return Err(Error::InvalidArgument(format!(
            "width list has {} entries but the table has {} columns",
            user_widths.len(),
            ncols
        )));
    }

    let unset: Vec<usize> = user_widths
        .iter()
        .enumerate()
        .filter_map(|(j, uw)| uw.is_none().then_some(j))
        .collect();
    if unset.is_empty() {
        // Fully specified: the total width plays no role.
        return Ok(user_widths.iter().copied().flatten().collect());
    }

    let fixed_total: usize = user_widths.iter().flatten().sum();
    let needed = fixed_total + overhead + MIN_PLANNED_WIDTH * unset.len();
    if total_width < needed {
        return Err(Error::TotalWidthTooSmall(total_width));
    }
    let budget = total_width - fixed_total - overhead;

    // Base cost: every row's line count over the user-fixed columns alone.
    let mut base = LineCounts::zero(nrows);
    for (j, user_width) in user_widths.iter().enumerate() {
        if let Some(width) = user_width {
            let column = columns.row(j).expect("column index within table");
            base.max_with(&column_cost(column, wrap.at_width(*width), true));
        }
    }

    // Rolling memo: dp(step, _) only reads dp(step - 1, _). Decisions are
    // kept for every step for the reverse walk.
    let mut memo: Vec<LineCounts> = Vec::with_capacity(budget + 1);
    let mut decisions: Vec<Decision> = Vec::with_capacity(unset.len() * (budget + 1));
    {
        let column = columns.row(unset[0]).expect("column index within table");
        let mut probe = ColumnProbe::new(column, budget);
        for w in 0..=budget {
            let (cost, decision) = decide_first(&mut probe, wrap, nrows, w, &base);
            memo.push(cost);
            decisions.push(decision);
        }
    }
    for (step, &col) in unset.iter().enumerate().skip(1) {
        let column = columns.row(col).expect("column index within table");
        let mut probe = ColumnProbe::new(column, budget);
        let mut next = Vec::with_capacity(budget + 1);
        for w in 0..=budget {
            let (cost, decision) = decide(&mut probe, wrap, nrows, w, step, &memo);
            next.push(cost);
            decisions.push(decision);
        }
        memo = next;
    }

    if memo.last().map(LineCounts::is_inf).unwrap_or(true) {
        return Err(Error::ColumnOverflow { cell: None });
    }

    // Walk the decision table backwards to recover the chosen widths.
    let decisions =
        Table::from_cells(decisions, unset.len()).expect("one decision row per step");
    let mut chosen = Vec::with_capacity(unset.len());
    let mut w = budget;
    for step in (0..unset.len()).rev() {
        let width = *decisions.get(step, w).expect("decision within budget");
        chosen.push(width);
        w -= width;
    }
    chosen.reverse();

    let mut chosen = chosen.into_iter();
    let widths = user_widths
        .iter()
        .map(|uw| match uw {
            Some(width) => *width,
            None => chosen.next().expect("one decision per unset column"),
        })
        .collect();
    Ok(widths)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::wrap::WrapStyle;

    /// Table rows for the planner tests; small so cases stay readable.
    const NROWS: usize = 3;
    /// Longest word the generators produce.
    const MAX_WORD_LEN: usize = 7;

    fn columns_table(cells: &[&str], nrows: usize) -> Table<String> {
        let mut table =
            Table::from_cells(cells.iter().map(|s| s.to_string()).collect(), nrows).unwrap();
        table.transpose();
        table
    }

    fn settings() -> WrapSettings<'static> {
        WrapSettings::new(WrapStyle::default())
    }

    /// Total lines of the table at `widths`, or `Err` if any column
    /// overflows. Used to cross-check the planner's objective.
    fn total_lines(
        columns: &Table<String>,
        widths: &[usize],
        wrap: &mut WrapSettings<'_>,
    ) -> std::result::Result<usize, ()> {
        let nrows = columns.ncols();
        let mut rows = LineCounts::zero(nrows);
        for (j, width) in widths.iter().enumerate() {
            let cost = column_cost(columns.row(j).unwrap(), wrap.at_width(*width), false);
            if cost.is_inf() {
                return Err(());
            }
            rows.max_with(&cost);
        }
        Ok(rows.total())
    }

    #[test]
    fn fully_fixed_widths_pass_through() {
        let columns = columns_table(&["alpha", "beta"], 1);
        let widths = plan_widths(
            &[Some(3), Some(9)],
            // Deliberately too small: ignored when nothing is planned.
            1,
            &columns,
            7,
            &mut settings(),
        )
        .unwrap();
        assert_eq!(widths, vec![3, 9]);
    }

    #[test]
    fn budget_too_small_is_rejected() {
        let columns = columns_table(&["alpha", "be"], 1);
        let err = plan_widths(&[Some(10), None], 18, &columns, 7, &mut settings()).unwrap_err();
        assert!(matches!(err, Error::TotalWidthTooSmall(18)));
        // One more column of room and the plan goes through.
        let widths = plan_widths(&[Some(10), None], 19, &columns, 7, &mut settings()).unwrap();
        assert_eq!(widths, vec![10, 2]);
    }

    #[test]
    fn width_list_length_must_match() {
        let columns = columns_table(&["alpha", "beta"], 1);
        let err = plan_widths(&[None], 40, &columns, 7, &mut settings()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn single_unset_column_takes_the_whole_budget() {
        let columns = columns_table(&["head", "a somewhat longer description cell"], 1);
        let widths = plan_widths(&[Some(14), None], 72, &columns, 7, &mut settings()).unwrap();
        assert_eq!(widths, vec![14, 72 - 7 - 14]);
    }

    #[test]
    fn all_unset_widths_sum_to_the_budget() {
        let columns = columns_table(
            &[
                "one two three four",
                "five six seven",
                "eight nine ten eleven",
                "a b",
                "c d e",
                "f",
            ],
            2,
        );
        let total_width = 40;
        let overhead = 10;
        let widths =
            plan_widths(&[None, None, None], total_width, &columns, overhead, &mut settings())
                .unwrap();
        assert_eq!(widths.iter().sum::<usize>(), total_width - overhead);
        assert!(widths.iter().all(|&w| w >= MIN_PLANNED_WIDTH));
    }

    #[test]
    fn unbreakable_token_makes_planning_infeasible() {
        // The token needs 16 columns; the budget leaves at most 8.
        let columns = columns_table(&["unbreakabletoken", "x"], 1);
        let err = plan_widths(&[None, None], 10, &columns, 0, &mut settings()).unwrap_err();
        assert!(matches!(err, Error::ColumnOverflow { cell: None }));
    }

    #[test]
    fn user_fixed_column_accepts_overflow() {
        // Fixed at 4, the 16-column token overflows, but fixed widths are
        // accepted at planning time; the renderer reports them later.
        let columns = columns_table(&["unbreakabletoken", "short words here"], 1);
        let widths = plan_widths(&[Some(4), None], 30, &columns, 0, &mut settings()).unwrap();
        assert_eq!(widths[0], 4);
        assert_eq!(widths.iter().sum::<usize>(), 30);
    }

    #[test]
    fn planning_is_deterministic() {
        let columns = columns_table(
            &[
                "lorem ipsum dolor sit amet",
                "consectetur adipiscing elit",
                "sed do eiusmod tempor",
                "incididunt ut labore",
            ],
            2,
        );
        let first = plan_widths(&[None, None], 32, &columns, 7, &mut settings()).unwrap();
        let second = plan_widths(&[None, None], 32, &columns, 7, &mut settings()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn matches_brute_on_a_known_case() {
        let columns = columns_table(
            &[
                "Lorem ipsum dolor sit amet, elitr sed diam nonumy eirmod tempor \
                 invidunt ut labore et dolore magna erat.",
                "Sed diam volupta. At vero eos et accusam et justo duo dolores et \
                 ea rebum.",
            ],
            1,
        );
        let fast = plan_widths(&[None, None], 20, &columns, 0, &mut settings());
        let brute = plan_widths_brute(&[None, None], 20, &columns, 0, &mut settings());
        match (fast, brute) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            (a, b) => panic!("planners disagree: {a:?} vs {b:?}"),
        }
    }

    /// Strategy: a column-major table plus a partial width assignment and a
    /// total width that is usually feasible. `squeeze` shrinks the total to
    /// push cases toward infeasibility.
    fn plan_cases(
        squeeze: usize,
    ) -> impl Strategy<Value = (usize, Vec<Option<usize>>, Table<String>)> {
        (1usize..=4)
            .prop_flat_map(move |ncols| {
                let total = (ncols * (MAX_WORD_LEN + 2))..(ncols * (MAX_WORD_LEN + 14));
                let fixed = proptest::collection::vec(
                    proptest::option::of(2usize..=MAX_WORD_LEN + 6),
                    ncols,
                );
                let cell = proptest::collection::vec("[a-z]{1,7}", 1..30)
                    .prop_map(|words| words.join(" "));
                let cells = proptest::collection::vec(cell, NROWS * ncols);
                (Just(ncols), total, fixed, cells)
            })
            .prop_map(move |(_ncols, total, fixed, cells)| {
                let mut table = Table::from_cells(cells, NROWS).unwrap();
                table.transpose();
                (total.saturating_sub(squeeze).max(1), fixed, table)
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(512))]

        /// Property: bisect and brute agree on the whole widths vector,
        /// tie-breaks included, and fail on the same inputs.
        #[test]
        fn bisect_matches_brute((total, user_widths, columns) in plan_cases(0)) {
            let fast = plan_widths(&user_widths, total, &columns, 0, &mut settings());
            let brute = plan_widths_brute(&user_widths, total, &columns, 0, &mut settings());
            match (fast, brute) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(Error::TotalWidthTooSmall(a)), Err(Error::TotalWidthTooSmall(b))) => {
                    prop_assert_eq!(a, b)
                }
                (Err(Error::ColumnOverflow { .. }), Err(Error::ColumnOverflow { .. })) => {}
                (a, b) => prop_assert!(false, "planners disagree: {:?} vs {:?}", a, b),
            }
        }

        /// Same equivalence on squeezed, frequently infeasible cases.
        #[test]
        fn bisect_matches_brute_when_squeezed((total, user_widths, columns) in plan_cases(9)) {
            let fast = plan_widths(&user_widths, total, &columns, 0, &mut settings());
            let brute = plan_widths_brute(&user_widths, total, &columns, 0, &mut settings());
            match (fast, brute) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(Error::TotalWidthTooSmall(a)), Err(Error::TotalWidthTooSmall(b))) => {
                    prop_assert_eq!(a, b)
                }
                (Err(Error::ColumnOverflow { .. }), Err(Error::ColumnOverflow { .. })) => {}
                (a, b) => prop_assert!(false, "planners disagree: {:?} vs {:?}", a, b),
            }
        }

        /// Property: planned widths respect the minimum, keep user-fixed
        /// entries verbatim, and sum to exactly the budget.
        #[test]
        fn planned_widths_are_feasible((total, user_widths, columns) in plan_cases(0)) {
            if let Ok(widths) = plan_widths(&user_widths, total, &columns, 0, &mut settings()) {
                prop_assert_eq!(widths.len(), user_widths.len());
                for (width, user) in widths.iter().zip(&user_widths) {
                    match user {
                        Some(fixed) => prop_assert_eq!(width, fixed),
                        None => prop_assert!(*width >= MIN_PLANNED_WIDTH),
                    }
                }
                if user_widths.iter().any(Option::is_none) {
                    prop_assert_eq!(widths.iter().sum::<usize>(), total);
                }
            }
        }

        /// Property: the optimum is no worse than an arbitrary feasible
        /// assignment of the same budget.
        #[test]
        fn plan_beats_even_split((total, _unused, columns) in plan_cases(0)) {
            let ncols = columns.nrows();
            let user_widths = vec![None; ncols];
            let mut wrap = settings();
            // An arbitrary competitor: spread the budget evenly.
            let mut even = vec![total / ncols; ncols];
            even[ncols - 1] += total - (total / ncols) * ncols;
            match plan_widths(&user_widths, total, &columns, 0, &mut wrap) {
                Ok(widths) => {
                    let planned = total_lines(&columns, &widths, &mut wrap)
                        .expect("planned widths never overflow");
                    if let Ok(competitor) = total_lines(&columns, &even, &mut wrap) {
                        prop_assert!(planned <= competitor);
                    }
                }
                Err(_) => {
                    // If planning failed, the even split must overflow too.
                    prop_assert!(total_lines(&columns, &even, &mut wrap).is_err());
                }
            }
        }

        /// Property: the column cost oracle is monotone in width, infinity
        /// ordered above every finite count.
        #[test]
        fn column_cost_is_monotone(
            cells in proptest::collection::vec(
                proptest::collection::vec("[a-z]{1,7}", 1..20).prop_map(|w| w.join(" ")),
                1..5,
            ),
            narrow in 1usize..30,
            extra in 0usize..30,
        ) {
            let mut wrap = settings();
            let at_narrow = column_cost(&cells, wrap.at_width(narrow), false);
            let at_wide = column_cost(&cells, wrap.at_width(narrow + extra), false);
            for (n, w) in at_narrow.0.iter().zip(&at_wide.0) {
                prop_assert!(n >= w);
            }
        }
    }
}
