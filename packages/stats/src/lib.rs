// The MIT License (MIT)
// Copyright © 2026 AIE425 Assignment Group X
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Descriptive statistics computed with plain linear scans.
//!
//! Empty input never fails, but the sentinels differ between functions:
//! [`mean`], [`standard_deviation`] and [`median`] return `0.0`, while [`min`]
//! and [`max`] return `None`. Callers must not read a `None` minimum as zero.

mod percentile;

pub use percentile::{percentile_group, PercentileGroup};

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

pub fn mean<T: Copy + Into<f64>>(list: &[T]) -> f64 {
    let mut sum = 0.0_f64;
    let mut count = 0_usize;
    for &value in list {
        sum += value.into();
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    sum / (count as f64)
}

/// Population standard deviation (divides by n).
///
/// A precomputed `mean` may be supplied to skip the first pass.
pub fn standard_deviation<T: Copy + Into<f64>>(list: &[T], mean: Option<f64>) -> f64 {
    let m = match mean {
        Some(m) => m,
        None => self::mean(list),
    };
    let mut variance_sum = 0.0_f64;
    let mut count = 0_usize;
    for &value in list {
        variance_sum += (value.into() - m).powi(2);
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    (variance_sum / (count as f64)).sqrt()
}

/// Median over a sorted copy of `list`; the caller's ordering is untouched.
pub fn median<T: Copy + Into<f64>>(list: &[T]) -> f64 {
    let mut sorted: Vec<f64> = list.iter().map(|&v| v.into()).collect();
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

pub fn min<T: Copy + PartialOrd>(list: &[T]) -> Option<T> {
    let mut min_value: Option<T> = None;
    for &value in list {
        if min_value.map_or(true, |current| value < current) {
            min_value = Some(value);
        }
    }
    min_value
}

pub fn max<T: Copy + PartialOrd>(list: &[T]) -> Option<T> {
    let mut max_value: Option<T> = None;
    for &value in list {
        if max_value.map_or(true, |current| value > current) {
            max_value = Some(value);
        }
    }
    max_value
}

pub fn unique_count<T: Eq + Hash>(list: &[T]) -> usize {
    let mut unique: HashSet<&T> = HashSet::new();
    for value in list {
        unique.insert(value);
    }
    unique.len()
}

/// Occurrences of every distinct value. Counts always add up to `list.len()`.
pub fn value_counts<T: Eq + Hash + Clone>(list: &[T]) -> HashMap<T, usize> {
    let mut counts: HashMap<T, usize> = HashMap::new();
    for value in list {
        *counts.entry(value.clone()).or_insert(0) += 1;
    }
    counts
}

// Magnitude from which every f64 is already a whole number.
const INTEGRAL_BOUND: f64 = 4_503_599_627_370_496.0;

/// Rounds `value` to `decimals` places, ties to even.
///
/// Values with no fractional digits left at that scale come back unchanged.
pub fn round_values(value: f64, decimals: u32) -> f64 {
    if decimals > f64::MAX_10_EXP as u32 {
        return value;
    }
    let factor = 10_f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_BOUND {
        return value;
    }
    scaled.round_ties_even() / factor
}

/// Percentage of empty cells in a users x items rating matrix, rounded to 2 decimals.
///
/// An empty matrix has nothing to be sparse about and yields `0.0`.
pub fn compute_sparsity(n_users: usize, n_items: usize, n_ratings: usize) -> f64 {
    let total_possible = (n_users as f64) * (n_items as f64);
    if total_possible == 0.0 {
        return 0.0;
    }
    let sparsity = (1.0 - (n_ratings as f64 / total_possible)) * 100.0;
    round_values(sparsity, 2)
}
