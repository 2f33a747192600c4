// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for gesture classification and snap timing.

/// Timing configuration for a [`SnapScrollView`](crate::SnapScrollView).
///
/// All durations are in milliseconds, in the same clock the host uses for the
/// `now` timestamps it passes to the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SnapConfig {
    /// Drags shorter than this are flicks and move one item in the drag direction.
    ///
    /// Longer drags settle on whichever item is closest.
    pub flick_threshold: u64,
    /// Time a snap animation takes to reach its target, independent of distance.
    pub duration: u64,
}

impl SnapConfig {
    /// Default flick threshold: 200ms.
    pub const DEFAULT_FLICK_THRESHOLD: u64 = 200;
    /// Default snap duration: 500ms.
    pub const DEFAULT_DURATION: u64 = 500;

    /// Create a configuration with custom timings.
    #[must_use]
    pub const fn with_timings(flick_threshold: u64, duration: u64) -> Self {
        Self {
            flick_threshold,
            duration,
        }
    }
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self::with_timings(Self::DEFAULT_FLICK_THRESHOLD, Self::DEFAULT_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::SnapConfig;

    #[test]
    fn defaults_match_half_second_snaps() {
        let config = SnapConfig::default();
        assert_eq!(config.flick_threshold, 200);
        assert_eq!(config.duration, 500);
    }
}
