// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Chunked, cooperatively-yielding insertion sort.
//!
//! This is the deliberately quadratic algorithm of the pair - it exists so
//! callers can contrast it against [`crate::quick_sort`] on real catalogs.
//! Because an O(n²) pass over a large catalog can run for seconds, the sort
//! suspends at two points so other tasks on the same scheduler keep running:
//!
//! - after [`YieldThresholds::shifts_per_chunk`] shift operations inside one
//!   outer iteration, which bounds the damage of a single key that has to
//!   travel far left;
//! - at every [`YieldThresholds::rows_per_tick`]th outer iteration (and the
//!   final one), which bounds the stretch between yields when every key
//!   shifts a little.
//!
//! Each suspension is a single scheduling tick (`tokio::task::yield_now`),
//! never a timed sleep. The future resolves only once the whole copy is
//! sorted; there is no cancellation. Callers wanting a timeout must race the
//! future externally.

use crate::normalize::normalize_key;
use crate::types::SortKey;

/// Default shift operations allowed inside one outer iteration before yielding.
pub const SHIFTS_PER_CHUNK: usize = 200_000;

/// Default outer iterations between unconditional yield/progress ticks.
pub const ROWS_PER_TICK: usize = 5_000;

/// Chunk-triggered progress reports only fire after advancing more than this
/// many percentage points.
const PROGRESS_STEP: u8 = 2;

/// Yield-frequency knobs for [`insertion_sort_configured`].
///
/// Lower values keep a shared scheduler more responsive at the cost of more
/// suspensions. Zero values are treated as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YieldThresholds {
    /// Shift operations per chunk before an in-iteration yield.
    pub shifts_per_chunk: usize,
    /// Outer iterations between unconditional yield/progress ticks.
    pub rows_per_tick: usize,
}

impl Default for YieldThresholds {
    fn default() -> Self {
        YieldThresholds {
            shifts_per_chunk: SHIFTS_PER_CHUNK,
            rows_per_tick: ROWS_PER_TICK,
        }
    }
}

/// Sort a copy of `records` by folded key. See [`insertion_sort_with_progress`]
/// for the progress-reporting variant; this one only yields.
pub async fn insertion_sort<T>(records: &[T]) -> Vec<T>
where
    T: SortKey + Clone,
{
    insertion_sort_configured(records, YieldThresholds::default(), |_| {}).await
}

/// Sort a copy of `records` by folded key, reporting progress percentages.
///
/// `on_progress` receives integer percentages in `[0, 100]`: 0 immediately,
/// 100 exactly once at completion, and a non-decreasing sequence capped at 99
/// in between. The cap means a caller can treat 100 as "the returned vector
/// is final" without racing the last few iterations.
pub async fn insertion_sort_with_progress<T, F>(records: &[T], on_progress: F) -> Vec<T>
where
    T: SortKey + Clone,
    F: FnMut(u8),
{
    insertion_sort_configured(records, YieldThresholds::default(), on_progress).await
}

/// Full-control variant: custom yield thresholds plus progress reporting.
///
/// The input is copied first; the original order is preserved for re-runs
/// under other algorithms. Output is deterministic for a given input order,
/// though ties on the folded key carry no stability guarantee.
pub async fn insertion_sort_configured<T, F>(
    records: &[T],
    thresholds: YieldThresholds,
    mut on_progress: F,
) -> Vec<T>
where
    T: SortKey + Clone,
    F: FnMut(u8),
{
    let shifts_per_chunk = thresholds.shifts_per_chunk.max(1);
    let rows_per_tick = thresholds.rows_per_tick.max(1);

    let mut sorted = records.to_vec();
    let n = sorted.len();
    let mut shifts_in_chunk = 0usize;
    let mut last_reported = 0u8;

    on_progress(0);

    for row in 1..n {
        let key = normalize_key(sorted[row].sort_key());
        let mut slot = row;

        while slot > 0 && normalize_key(sorted[slot - 1].sort_key()) > key {
            sorted.swap(slot, slot - 1);
            slot -= 1;
            shifts_in_chunk += 1;

            if shifts_in_chunk >= shifts_per_chunk {
                shifts_in_chunk = 0;
                tokio::task::yield_now().await;

                let percent = percent_done(row, n);
                if percent > last_reported + PROGRESS_STEP {
                    last_reported = percent;
                    on_progress(percent.min(99));
                }
            }
        }

        if row % rows_per_tick == 0 || row == n - 1 {
            // Skip the tick when the chunk counter shows a yield just happened.
            if shifts_in_chunk < shifts_per_chunk * 4 / 5 {
                tokio::task::yield_now().await;
            }
            let percent = percent_done(row, n);
            if percent > last_reported {
                last_reported = percent;
                on_progress(percent.min(99));
            }
        }
    }

    on_progress(100);
    sorted
}

fn percent_done(row: usize, total: usize) -> u8 {
    ((row * 100) / total) as u8
}
