// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based snap interpolation.

use crate::SnapTarget;

/// State of the snap animation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SnapState {
    /// No snap in flight.
    #[default]
    Idle,
    /// Moving linearly from `origin` to `target`.
    Animating {
        /// Position the animation started from.
        origin: f64,
        /// Item being snapped to.
        target: SnapTarget,
        /// Timestamp the animation started at (milliseconds).
        start: u64,
        /// Total animation time (milliseconds).
        duration: u64,
    },
}

/// One interpolated frame of a snap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Position to write to the host.
    pub value: f64,
    /// Fraction of the animation elapsed, in `[0, 1]`.
    pub progress: f64,
}

impl Sample {
    /// Returns `true` once the animation has reached its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}

/// A single, restartable snap animation.
///
/// Progress is derived from elapsed time rather than from the number of
/// samples taken, so the animation takes the same time at any frame rate and
/// for any distance. Starting a new snap replaces the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SnapAnimation {
    state: SnapState,
}

impl SnapAnimation {
    /// Create an idle animation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SnapState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SnapState {
        self.state
    }

    /// Returns `true` while a snap is in flight.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, SnapState::Animating { .. })
    }

    /// Item the in-flight snap is heading to.
    #[must_use]
    pub const fn target(&self) -> Option<SnapTarget> {
        match self.state {
            SnapState::Animating { target, .. } => Some(target),
            SnapState::Idle => None,
        }
    }

    /// Start animating from `origin` toward `target`, replacing any snap in flight.
    pub fn start(&mut self, origin: f64, target: SnapTarget, now: u64, duration: u64) {
        debug_assert!(
            origin.is_finite(),
            "snap origin must be finite; got {origin:?}"
        );
        self.state = SnapState::Animating {
            origin,
            target,
            start: now,
            duration,
        };
    }

    /// Stop the in-flight snap, if any, and return its target.
    pub fn cancel(&mut self) -> Option<SnapTarget> {
        let target = self.target();
        self.state = SnapState::Idle;
        target
    }

    /// Interpolated position at `now`, or `None` when idle.
    ///
    /// Timestamps before the start are treated as the start. The finished
    /// sample carries the target position exactly.
    #[must_use]
    pub fn sample(&self, now: u64) -> Option<Sample> {
        let SnapState::Animating {
            origin,
            target,
            start,
            duration,
        } = self.state
        else {
            return None;
        };
        let elapsed = now.saturating_sub(start);
        let progress = if duration == 0 {
            1.0
        } else {
            (elapsed as f64 / duration as f64).min(1.0)
        };
        let value = if progress >= 1.0 {
            target.position
        } else {
            origin + progress * (target.position - origin)
        };
        Some(Sample { value, progress })
    }
}
