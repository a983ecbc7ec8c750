//! Scale search: locate an input value on an ascending breakpoint sequence.
//!
//! A scale is a caller-owned, non-decreasing slice of calibration
//! breakpoints (engine speed, manifold pressure, ...). The search
//! classifies the input into one of four relations and returns the
//! bounding context the interpolators need.
//!
//! Sortedness is a precondition, not re-checked per call — validate once
//! at calibration load with [`is_ascending`].

/// Result of locating an input on a scale.
///
/// Variants carry only the bounds that exist for that relation: an
/// off-scale-high input has no upper neighbour, an off-scale-low input no
/// lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleLookup<T> {
    /// Input matches `scale[index]` exactly.
    Exact {
        /// Index of the matching entry.
        index: usize,
        /// The matched breakpoint value.
        value: T,
    },
    /// Input falls strictly between two adjacent entries.
    InBetween {
        /// Index of the largest entry below the input.
        low_index: usize,
        /// Breakpoint below the input.
        low: T,
        /// Breakpoint above the input.
        high: T,
    },
    /// Input exceeds the last (highest) entry.
    OffScaleHigh {
        /// Index of the last entry.
        index: usize,
        /// The last breakpoint value.
        low: T,
    },
    /// Input is below the first (lowest) entry. The clamped index is 0.
    OffScaleLow {
        /// The first breakpoint value.
        high: T,
    },
}

impl<T> ScaleLookup<T> {
    /// Index of the nearest table entry at or below the input, clamped to
    /// the scale — what table lookups index with when no interpolation
    /// applies.
    #[inline]
    pub fn low_index(&self) -> usize {
        match self {
            Self::Exact { index, .. } => *index,
            Self::InBetween { low_index, .. } => *low_index,
            Self::OffScaleHigh { index, .. } => *index,
            Self::OffScaleLow { .. } => 0,
        }
    }

    /// True if the input fell strictly between two entries.
    #[inline]
    pub fn is_in_between(&self) -> bool {
        matches!(self, Self::InBetween { .. })
    }
}

/// Find where `input` falls on an ascending `scale`.
///
/// The search starts at the LAST index and scans downward linearly. The
/// scale typically holds engine operating points and the engine spends
/// most of its runtime near the top of the range, so scanning from the
/// high end minimizes average comparisons on the hot path. Worst case is
/// O(n); a binary search would beat it only for workloads this system
/// does not have.
///
/// Preconditions (caller responsibility, unchecked in release builds):
/// `scale` is non-empty and sorted ascending.
#[inline]
pub fn find_on_scale<T: PartialOrd + Copy>(input: T, scale: &[T]) -> ScaleLookup<T> {
    debug_assert!(!scale.is_empty(), "scale must have at least one entry");

    let mut index = scale.len() - 1;
    let mut cur = scale[index];

    // Above the top entry: no scan needed.
    if input > cur {
        return ScaleLookup::OffScaleHigh { index, low: cur };
    }

    if input == cur {
        return ScaleLookup::Exact { index, value: cur };
    }

    // Walk down until an entry at or below the input appears.
    while index > 0 {
        let high = cur;

        index -= 1;
        cur = scale[index];

        if input == cur {
            return ScaleLookup::Exact { index, value: cur };
        }

        if cur < input {
            return ScaleLookup::InBetween {
                low_index: index,
                low: cur,
                high,
            };
        }
    }

    // Fell off the front: below the lowest entry.
    ScaleLookup::OffScaleLow { high: cur }
}

/// Check that a scale is sorted in non-decreasing order.
///
/// Intended for calibration-load time; the per-call search assumes this
/// holds and does not re-verify it.
pub fn is_ascending<T: PartialOrd + Copy>(scale: &[T]) -> bool {
    scale.windows(2).all(|pair| pair[0] <= pair[1])
}

// ─── Tests ──────────────────────────────────────────────────────────
