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

/// Fixed activity buckets, by ratio of a value to the observed maximum.
///
/// Upper bounds are inclusive: a ratio of exactly 5% is `G2`, not `G3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PercentileGroup {
    G1,
    G2,
    G3,
    G4,
    G5,
    G6,
    G7,
    G8,
    G9,
    G10,
}

// Inclusive upper bound (in percent) for every group but the last one.
const THRESHOLDS: [(f64, PercentileGroup); 9] = [
    (1.0, PercentileGroup::G1),
    (5.0, PercentileGroup::G2),
    (10.0, PercentileGroup::G3),
    (20.0, PercentileGroup::G4),
    (30.0, PercentileGroup::G5),
    (40.0, PercentileGroup::G6),
    (50.0, PercentileGroup::G7),
    (60.0, PercentileGroup::G8),
    (70.0, PercentileGroup::G9),
];

impl PercentileGroup {
    pub fn all() -> [PercentileGroup; 10] {
        [
            Self::G1,
            Self::G2,
            Self::G3,
            Self::G4,
            Self::G5,
            Self::G6,
            Self::G7,
            Self::G8,
            Self::G9,
            Self::G10,
        ]
    }

    /// Human readable range covered by the group, e.g. `1% < x <= 5%`.
    pub fn range(&self) -> &'static str {
        match self {
            Self::G1 => "x <= 1%",
            Self::G2 => "1% < x <= 5%",
            Self::G3 => "5% < x <= 10%",
            Self::G4 => "10% < x <= 20%",
            Self::G5 => "20% < x <= 30%",
            Self::G6 => "30% < x <= 40%",
            Self::G7 => "40% < x <= 50%",
            Self::G8 => "50% < x <= 60%",
            Self::G9 => "60% < x <= 70%",
            Self::G10 => "70% < x",
        }
    }
}

impl std::fmt::Display for PercentileGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::G1 => write!(f, "G1"),
            Self::G2 => write!(f, "G2"),
            Self::G3 => write!(f, "G3"),
            Self::G4 => write!(f, "G4"),
            Self::G5 => write!(f, "G5"),
            Self::G6 => write!(f, "G6"),
            Self::G7 => write!(f, "G7"),
            Self::G8 => write!(f, "G8"),
            Self::G9 => write!(f, "G9"),
            Self::G10 => write!(f, "G10"),
        }
    }
}

/// Classifies `value` against `max_value` into one of ten groups.
///
/// `max_value` must be greater than zero; this is not checked. Ratios below
/// zero fall into `G1` and ratios above 100% into `G10` without complaint.
pub fn percentile_group(value: f64, max_value: f64) -> PercentileGroup {
    let percentage = (value / max_value) * 100.0;
    for (upper_bound, group) in THRESHOLDS {
        if percentage <= upper_bound {
            return group;
        }
    }
    PercentileGroup::G10
}
