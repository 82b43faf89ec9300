// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-place quicksort over folded record keys.
//!
//! Lomuto partitioning with the last element as pivot. That pivot choice is
//! part of the contract: already-sorted input degrades to O(n²) comparisons
//! and n-deep recursion, which is acceptable for the catalog sizes this crate
//! targets and is what the search benchmarks measure against.
//!
//! Ties on the folded key keep no particular relative order - this sort is
//! not stable. Callers that need the original ordering back must copy before
//! calling, or use [`quick_sorted`].

use crate::normalize::normalize_key;
use crate::types::SortKey;

/// Sort records in place by folded key, non-decreasing.
///
/// Empty and single-element slices are left untouched. Always terminates;
/// there are no error conditions.
///
/// # Examples
///
/// ```
/// use shelfsort::{quick_sort, Book};
///
/// let mut books = vec![
///     Book { id: "1".into(), title: "Zebra".into(), cover_img: None, rating: None, ratings_count: None },
///     Book { id: "2".into(), title: "Álvaro".into(), cover_img: None, rating: None, ratings_count: None },
///     Book { id: "3".into(), title: "apple".into(), cover_img: None, rating: None, ratings_count: None },
/// ];
/// quick_sort(&mut books);
///
/// let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
/// assert_eq!(titles, ["Álvaro", "apple", "Zebra"]);
/// ```
pub fn quick_sort<T: SortKey>(records: &mut [T]) {
    if records.len() < 2 {
        return;
    }
    let pivot = partition(records);
    quick_sort(&mut records[..pivot]);
    quick_sort(&mut records[pivot + 1..]);
}

/// Copy-returning variant of [`quick_sort`] for callers that must keep the
/// original order around (e.g. to re-sort under a different algorithm later).
pub fn quick_sorted<T: SortKey + Clone>(records: &[T]) -> Vec<T> {
    let mut sorted = records.to_vec();
    quick_sort(&mut sorted);
    sorted
}

/// Lomuto partition step: pivot on the last element's folded key, grow the
/// `<=` partition from the left, then swap the pivot onto the boundary.
/// Returns the pivot's final index.
fn partition<T: SortKey>(records: &mut [T]) -> usize {
    let last = records.len() - 1;
    let pivot_key = normalize_key(records[last].sort_key());
    let mut boundary = 0;

    for probe in 0..last {
        if normalize_key(records[probe].sort_key()) <= pivot_key {
            records.swap(boundary, probe);
            boundary += 1;
        }
    }
    records.swap(boundary, last);
    boundary
}
