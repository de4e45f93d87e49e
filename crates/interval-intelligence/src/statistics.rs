// ABOUTME: Discrete order statistics for lap classification
// ABOUTME: Lower median by stable total-order sort and floor(n/2) index selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Lower median of a sequence of values
///
/// Sorts ascending and returns the element at index `floor(n / 2)`. For even
/// counts this is the upper of the two middle elements of the sorted list; the
/// two are never averaged. Sorting uses [`f64::total_cmp`], so the result is
/// the same for any permutation of the input, NaN included (it sorts last).
///
/// Returns `None` for an empty input.
///
/// ```rust
/// use interval_intelligence::statistics::lower_median;
///
/// assert_eq!(lower_median([5.2, 5.0, 2.0, 5.1]), Some(5.1));
/// assert_eq!(lower_median(std::iter::empty::<f64>()), None);
/// ```
#[must_use]
pub fn lower_median(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sorted: Vec<f64> = values.into_iter().collect();
    sorted.sort_by(f64::total_cmp);
    sorted.get(sorted.len() / 2).copied()
}
