// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between item indices and normalized scroll positions.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Scaled positions this close to a whole step are treated as sitting on it.
///
/// Keeps `index / step_count * step_count` from landing just below `index`
/// (for example `1.0 / 49.0 * 49.0`), which would otherwise make an item that
/// is exactly in place look like it sits between two items.
const ON_ITEM_EPSILON: f64 = 1e-9;

/// Index ↔ normalized position mapping for a strip of `len` equally sized items.
///
/// Item `i` sits at normalized position `i / step_count`, where
/// `step_count = len - 1` is the number of gaps between items. Position `0.0`
/// is the first item and `1.0` the last.
///
/// Degenerate strips are handled explicitly:
/// - `len == 1`: the only item sits at `0.0` and every position maps to it.
/// - `len == 0`: there is no item; positions still map to `0.0`, and index
///   queries return `0`. Callers that need to distinguish this case should
///   check [`SnapSteps::is_empty`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SnapSteps {
    len: usize,
}

impl SnapSteps {
    /// Creates the mapping for a strip of `len` items.
    #[must_use]
    pub const fn from_len(len: usize) -> Self {
        Self { len }
    }

    /// Number of items in the strip.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the strip has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of gaps between items (`len - 1`, saturating at zero).
    #[must_use]
    pub const fn step_count(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Clamps `index` into `0..len` (or `0` for an empty strip).
    #[must_use]
    pub const fn clamp_index(&self, index: usize) -> usize {
        let last = self.step_count();
        if index > last { last } else { index }
    }

    /// Normalized position of item `index`.
    ///
    /// Out-of-range indices are clamped to the last item.
    #[must_use]
    pub fn position_of(&self, index: usize) -> f64 {
        let steps = self.step_count();
        if steps == 0 {
            return 0.0;
        }
        self.clamp_index(index) as f64 / steps as f64
    }

    /// Index of the item at or before `position`.
    ///
    /// This is `floor(position * step_count)`, clamped into range.
    #[must_use]
    pub fn index_at(&self, position: f64) -> usize {
        self.to_index(self.scaled(position).floor())
    }

    /// Index of the item nearest to `position`.
    #[must_use]
    pub fn nearest_index(&self, position: f64) -> usize {
        self.to_index(self.scaled(position).round())
    }

    /// Indices of the items immediately behind and ahead of `position`.
    ///
    /// When `position` sits exactly on an item both indices are equal.
    #[must_use]
    pub fn bracket_indices(&self, position: f64) -> (usize, usize) {
        let scaled = self.scaled(position);
        (self.to_index(scaled.floor()), self.to_index(scaled.ceil()))
    }

    /// Normalized positions of the items immediately behind and ahead of `position`.
    #[must_use]
    pub fn bracket(&self, position: f64) -> (f64, f64) {
        let (prev, next) = self.bracket_indices(position);
        (self.position_of(prev), self.position_of(next))
    }

    /// `position` expressed in steps, pulled onto a whole step when within
    /// [`ON_ITEM_EPSILON`] of it.
    fn scaled(&self, position: f64) -> f64 {
        debug_assert!(
            position.is_finite(),
            "scroll positions must be finite; got {position:?}"
        );
        let steps = self.step_count();
        if steps == 0 || !position.is_finite() {
            return 0.0;
        }
        let scaled = position * steps as f64;
        let whole = scaled.round();
        if (scaled - whole).abs() <= ON_ITEM_EPSILON {
            whole
        } else {
            scaled
        }
    }

    fn to_index(&self, whole_steps: f64) -> usize {
        if whole_steps <= 0.0 {
            return 0;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Value is a non-negative whole number and is clamped to bounds after the cast"
        )]
        let index = whole_steps as usize;
        self.clamp_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::SnapSteps;

    #[test]
    fn index_position_round_trip() {
        for len in 2..=200 {
            let steps = SnapSteps::from_len(len);
            for i in 0..len {
                let p = steps.position_of(i);
                assert!((0.0..=1.0).contains(&p), "position {p} out of range");
                assert_eq!(steps.nearest_index(p), i, "len={len} i={i}");
                assert_eq!(steps.index_at(p), i, "len={len} i={i}");
            }
        }
    }

    #[test]
    fn bracket_between_and_on_items() {
        let steps = SnapSteps::from_len(4);
        assert_eq!(steps.bracket_indices(0.5), (1, 2));
        assert_eq!(steps.bracket_indices(0.0), (0, 0));
        assert_eq!(steps.bracket_indices(1.0), (3, 3));

        let on_item = steps.position_of(2);
        let (prev, next) = steps.bracket(on_item);
        assert_eq!(prev, on_item);
        assert_eq!(next, on_item);
    }

    #[test]
    fn inexact_multiples_still_land_on_item() {
        // 1/49 * 49 is just below 1.0 in f64.
        let steps = SnapSteps::from_len(50);
        let p = steps.position_of(1);
        assert_eq!(steps.bracket_indices(p), (1, 1));
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let steps = SnapSteps::from_len(5);
        assert_eq!(steps.position_of(10), 1.0);
        assert_eq!(steps.index_at(1.5), 4);
        assert_eq!(steps.index_at(-0.3), 0);
        assert_eq!(steps.bracket_indices(-0.3), (0, 0));
    }

    #[test]
    fn degenerate_strips_map_to_start() {
        let single = SnapSteps::from_len(1);
        assert_eq!(single.step_count(), 0);
        assert_eq!(single.position_of(0), 0.0);
        assert_eq!(single.position_of(3), 0.0);
        assert_eq!(single.index_at(0.7), 0);
        assert_eq!(single.bracket(0.7), (0.0, 0.0));

        let empty = SnapSteps::from_len(0);
        assert!(empty.is_empty());
        assert_eq!(empty.position_of(0), 0.0);
        assert_eq!(empty.nearest_index(0.4), 0);
    }
}
