// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap decisions as pure functions of gesture data.
//!
//! Nothing here touches a host: [`decide`] classifies a finished gesture into a
//! [`SnapDirection`], and [`snap_target`] resolves that direction against the
//! current position into a concrete [`SnapTarget`].

use kurbo::{Point, Vec2};

use crate::{SnapConfig, SnapSteps};

/// The single axis a view scrolls along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items are laid out left to right.
    Horizontal,
    /// Items are laid out along the y axis.
    Vertical,
}

impl Axis {
    /// Coordinate of `point` along this axis.
    #[must_use]
    pub const fn coord(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Component of `delta` along this axis.
    #[must_use]
    pub const fn component(self, delta: Vec2) -> f64 {
        match self {
            Self::Horizontal => delta.x,
            Self::Vertical => delta.y,
        }
    }
}

/// Which item a snap should settle on, relative to the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnapDirection {
    /// The item at or ahead of the current position.
    Next,
    /// The item at or behind the current position.
    Previous,
    /// Whichever of the two bracketing items is nearer.
    ///
    /// An exact midpoint resolves to the previous item.
    Closest,
}

/// A finished input gesture, reduced to the data a snap decision needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// A drag was released.
    DragEnd {
        /// Milliseconds between drag begin and drag end.
        elapsed: u64,
        /// Pointer position where the drag started.
        press: Point,
        /// Pointer position where the drag was released.
        release: Point,
    },
    /// A wheel or trackpad scroll step.
    Scroll {
        /// Scroll delta as reported by the host.
        delta: Vec2,
    },
}

/// Classify a gesture into a snap direction.
///
/// - Drags shorter than [`SnapConfig::flick_threshold`] are flicks. Releasing
///   further along `axis` than the press retreats to the previous item,
///   anything else advances to the next one.
/// - Longer drags settle on the closest item.
/// - Negative scroll deltas along `axis` advance, anything else retreats.
#[must_use]
pub fn decide(gesture: Gesture, axis: Axis, config: &SnapConfig) -> SnapDirection {
    match gesture {
        Gesture::DragEnd {
            elapsed,
            press,
            release,
        } => {
            if elapsed < config.flick_threshold {
                if axis.coord(release) > axis.coord(press) {
                    SnapDirection::Previous
                } else {
                    SnapDirection::Next
                }
            } else {
                SnapDirection::Closest
            }
        }
        Gesture::Scroll { delta } => {
            if axis.component(delta) < 0.0 {
                SnapDirection::Next
            } else {
                SnapDirection::Previous
            }
        }
    }
}

/// An item a snap settles on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapTarget {
    /// Index of the item.
    pub index: usize,
    /// Normalized position of the item.
    pub position: f64,
}

impl SnapTarget {
    /// Target for item `index` in `steps`, with the index clamped into range.
    #[must_use]
    pub fn item(steps: &SnapSteps, index: usize) -> Self {
        let index = steps.clamp_index(index);
        Self {
            index,
            position: steps.position_of(index),
        }
    }
}

/// Resolve `direction` against `position` into the item to settle on.
///
/// Returns `None` for an empty strip.
#[must_use]
pub fn snap_target(
    position: f64,
    steps: &SnapSteps,
    direction: SnapDirection,
) -> Option<SnapTarget> {
    if steps.is_empty() {
        return None;
    }
    let (prev_index, next_index) = steps.bracket_indices(position);
    let prev = SnapTarget::item(steps, prev_index);
    let next = SnapTarget::item(steps, next_index);
    Some(match direction {
        SnapDirection::Next => next,
        SnapDirection::Previous => prev,
        // Strict comparison: a tie keeps `prev`.
        SnapDirection::Closest => {
            if position - prev.position > next.position - position {
                next
            } else {
                prev
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{Axis, Gesture, SnapDirection, decide, snap_target};
    use crate::{SnapConfig, SnapSteps};

    fn drag(elapsed: u64, press: (f64, f64), release: (f64, f64)) -> Gesture {
        Gesture::DragEnd {
            elapsed,
            press: Point::new(press.0, press.1),
            release: Point::new(release.0, release.1),
        }
    }

    #[test]
    fn quick_drag_is_a_flick_along_the_axis() {
        let config = SnapConfig::default();

        // Release to the right of the press: previous item.
        let g = drag(100, (50.0, 0.0), (80.0, 0.0));
        assert_eq!(decide(g, Axis::Horizontal, &config), SnapDirection::Previous);

        // Release to the left: next item.
        let g = drag(100, (50.0, 0.0), (20.0, 0.0));
        assert_eq!(decide(g, Axis::Horizontal, &config), SnapDirection::Next);

        // Only the scroll axis counts.
        let g = drag(100, (50.0, 10.0), (20.0, 90.0));
        assert_eq!(decide(g, Axis::Vertical, &config), SnapDirection::Previous);
    }

    #[test]
    fn flick_without_displacement_advances() {
        let config = SnapConfig::default();
        let g = drag(10, (5.0, 5.0), (5.0, 5.0));
        assert_eq!(decide(g, Axis::Horizontal, &config), SnapDirection::Next);
    }

    #[test]
    fn slow_drag_settles_on_closest() {
        let config = SnapConfig::default();
        // Exactly at the threshold is no longer a flick.
        let g = drag(200, (50.0, 0.0), (80.0, 0.0));
        assert_eq!(decide(g, Axis::Horizontal, &config), SnapDirection::Closest);

        let g = drag(5_000, (50.0, 0.0), (20.0, 0.0));
        assert_eq!(decide(g, Axis::Horizontal, &config), SnapDirection::Closest);
    }

    #[test]
    fn scroll_sign_picks_direction() {
        let config = SnapConfig::default();
        let down = Gesture::Scroll {
            delta: Vec2::new(0.0, -1.0),
        };
        let up = Gesture::Scroll {
            delta: Vec2::new(0.0, 1.0),
        };
        assert_eq!(decide(down, Axis::Vertical, &config), SnapDirection::Next);
        assert_eq!(decide(up, Axis::Vertical, &config), SnapDirection::Previous);

        // A vertical wheel on a horizontal view has no component along the axis.
        assert_eq!(
            decide(down, Axis::Horizontal, &config),
            SnapDirection::Previous
        );
    }

    #[test]
    fn directional_targets_bracket_position() {
        let steps = SnapSteps::from_len(4);
        let next = snap_target(0.5, &steps, SnapDirection::Next).unwrap();
        let prev = snap_target(0.5, &steps, SnapDirection::Previous).unwrap();
        assert_eq!(next.index, 2);
        assert_eq!(prev.index, 1);
        assert_eq!(next.position, 2.0 / 3.0);
        assert_eq!(prev.position, 1.0 / 3.0);
    }

    #[test]
    fn directional_snap_on_an_item_stays_put() {
        let steps = SnapSteps::from_len(5);
        let here = steps.position_of(3);
        for direction in [SnapDirection::Next, SnapDirection::Previous] {
            let target = snap_target(here, &steps, direction).unwrap();
            assert_eq!(target.index, 3);
            assert_eq!(target.position, here);
        }
    }

    #[test]
    fn closest_picks_the_nearer_item() {
        let steps = SnapSteps::from_len(4);
        assert_eq!(
            snap_target(0.4, &steps, SnapDirection::Closest).unwrap().index,
            1
        );
        assert_eq!(
            snap_target(0.6, &steps, SnapDirection::Closest).unwrap().index,
            2
        );
        // 0.5 is a hair closer to 2/3 than to 1/3 in f64.
        assert_eq!(
            snap_target(0.5, &steps, SnapDirection::Closest).unwrap().index,
            2
        );
    }

    #[test]
    fn closest_exact_midpoint_resolves_to_previous() {
        // Three items at 0.0, 0.5 and 1.0; 0.25 and 0.75 are exact midpoints.
        let steps = SnapSteps::from_len(3);
        assert_eq!(
            snap_target(0.25, &steps, SnapDirection::Closest).unwrap().index,
            0
        );
        assert_eq!(
            snap_target(0.75, &steps, SnapDirection::Closest).unwrap().index,
            1
        );
    }

    #[test]
    fn empty_strip_has_no_target() {
        let steps = SnapSteps::from_len(0);
        assert!(snap_target(0.3, &steps, SnapDirection::Closest).is_none());
    }

    #[test]
    fn single_item_always_targets_it() {
        let steps = SnapSteps::from_len(1);
        let target = snap_target(0.8, &steps, SnapDirection::Next).unwrap();
        assert_eq!(target.index, 0);
        assert_eq!(target.position, 0.0);
    }
}
