// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A snap-to-item scroll controller driven by host input and frame ticks.

use kurbo::{Point, Vec2};

use crate::host::write_fresh;
use crate::{
    Axis, Gesture, ScrollHost, SnapAnimation, SnapConfig, SnapDirection, SnapState, SnapSteps,
    SnapTarget, decide, snap_target,
};

/// Notification that a snap animation reached its item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Snapped {
    /// Index of the item the view settled on.
    pub index: usize,
}

/// Controller that snaps a 1D strip of equally sized items to item boundaries.
///
/// This type:
/// - classifies drag and scroll input into a [`SnapDirection`],
/// - resolves it against the host's current position into a [`SnapTarget`],
/// - animates the host's normalized scroll value toward that target on each
///   [`update`](Self::update),
/// - reports [`Snapped`] exactly once when an animation settles.
///
/// It does not scroll in response to the drag itself; the host keeps doing
/// that and calls into the view at drag begin, drag end, and scroll events.
/// All timestamps are milliseconds on a single host clock.
#[derive(Clone, Debug)]
pub struct SnapScrollView {
    steps: SnapSteps,
    axis: Axis,
    config: SnapConfig,
    animation: SnapAnimation,
    drag_start: Option<u64>,
    last_snapped: Option<usize>,
}

impl SnapScrollView {
    /// Create a view over `len` items scrolling along `axis`, with default timings.
    #[must_use]
    pub fn new(len: usize, axis: Axis) -> Self {
        Self::with_config(len, axis, SnapConfig::default())
    }

    /// Create a view with custom timings.
    #[must_use]
    pub fn with_config(len: usize, axis: Axis, config: SnapConfig) -> Self {
        Self {
            steps: SnapSteps::from_len(len),
            axis,
            config,
            animation: SnapAnimation::new(),
            drag_start: None,
            last_snapped: None,
        }
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index ↔ position mapping for the current item count.
    #[must_use]
    pub const fn steps(&self) -> SnapSteps {
        self.steps
    }

    /// The scroll axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Current timing configuration.
    #[must_use]
    pub const fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Replace the timing configuration.
    ///
    /// A snap already in flight keeps the duration it started with.
    pub fn set_config(&mut self, config: SnapConfig) {
        self.config = config;
    }

    /// Current animation state.
    #[must_use]
    pub const fn state(&self) -> SnapState {
        self.animation.state()
    }

    /// Returns `true` while a snap is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    /// Index of the item the in-flight snap is heading to.
    #[must_use]
    pub fn target_index(&self) -> Option<usize> {
        self.animation.target().map(|t| t.index)
    }

    /// Index reported by the most recent [`Snapped`].
    #[must_use]
    pub const fn last_snapped(&self) -> Option<usize> {
        self.last_snapped
    }

    /// Update the number of items after the content changed.
    ///
    /// A snap in flight is retargeted to its item's new position, or canceled
    /// if that item no longer exists.
    pub fn set_len(&mut self, len: usize) {
        if len == self.steps.len() {
            return;
        }
        self.steps = SnapSteps::from_len(len);
        if let SnapState::Animating {
            origin,
            target,
            start,
            duration,
        } = self.animation.state()
        {
            if target.index < len {
                let target = SnapTarget::item(&self.steps, target.index);
                self.animation.start(origin, target, start, duration);
            } else {
                tracing::debug!(index = target.index, len, "snap target removed");
                self.animation.cancel();
            }
        }
    }

    /// Stop any snap in flight without touching the host.
    pub fn cancel(&mut self) {
        if let Some(target) = self.animation.cancel() {
            tracing::debug!(index = target.index, "snap canceled");
        }
    }

    /// The user started dragging.
    ///
    /// Stops any snap in flight so it does not fight the drag.
    pub fn on_drag_begin(&mut self, now: u64) {
        self.cancel();
        self.drag_start = Some(now);
    }

    /// The user released a drag that started at `press` and ended at `release`.
    ///
    /// Quick drags move one item in the drag direction; slower ones settle on
    /// the closest item. A release without a recorded drag begin is treated
    /// as a slow drag.
    pub fn on_drag_end<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        press: Point,
        release: Point,
        now: u64,
    ) -> Option<SnapTarget> {
        let elapsed = self
            .drag_start
            .take()
            .map_or(u64::MAX, |start| now.saturating_sub(start));
        let gesture = Gesture::DragEnd {
            elapsed,
            press,
            release,
        };
        let direction = decide(gesture, self.axis, &self.config);
        self.snap(host, direction, now)
    }

    /// The user scrolled by `delta` with a wheel or trackpad.
    pub fn on_scroll<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        delta: Vec2,
        now: u64,
    ) -> Option<SnapTarget> {
        let direction = decide(Gesture::Scroll { delta }, self.axis, &self.config);
        self.snap(host, direction, now)
    }

    /// Start snapping from the host's current position in `direction`.
    ///
    /// Replaces any snap in flight, starting from wherever it got to. Returns
    /// the chosen target, or `None` when there are no items.
    pub fn snap<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        direction: SnapDirection,
        now: u64,
    ) -> Option<SnapTarget> {
        let origin = host.value();
        let target = snap_target(origin, &self.steps, direction)?;
        self.begin(origin, target, now);
        Some(target)
    }

    /// Start snapping from the host's current position to item `index`.
    ///
    /// Out-of-range indices are clamped to the last item. Returns `None` when
    /// there are no items.
    pub fn snap_to_index<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        index: usize,
        now: u64,
    ) -> Option<SnapTarget> {
        if self.steps.is_empty() {
            return None;
        }
        let target = SnapTarget::item(&self.steps, index);
        self.begin(host.value(), target, now);
        Some(target)
    }

    /// Move to item `index` immediately, without animating or reporting [`Snapped`].
    ///
    /// Cancels any snap in flight.
    pub fn jump_to_index<H: ScrollHost + ?Sized>(&mut self, host: &mut H, index: usize) {
        self.animation.cancel();
        let position = self.steps.position_of(index);
        tracing::trace!(index, position, "jump");
        write_fresh(host, position);
    }

    /// Advance the snap animation to `now` and write the result to the host.
    ///
    /// Call once per frame. Returns [`Snapped`] on the frame the animation
    /// settles and `None` otherwise, including while idle.
    pub fn update<H: ScrollHost + ?Sized>(&mut self, host: &mut H, now: u64) -> Option<Snapped> {
        let sample = self.animation.sample(now)?;
        write_fresh(host, sample.value);
        if !sample.is_finished() {
            return None;
        }
        let target = self.animation.cancel()?;
        tracing::debug!(index = target.index, "snapped");
        self.last_snapped = Some(target.index);
        Some(Snapped {
            index: target.index,
        })
    }

    fn begin(&mut self, origin: f64, target: SnapTarget, now: u64) {
        tracing::trace!(
            origin,
            index = target.index,
            position = target.position,
            "snap started"
        );
        self.animation
            .start(origin, target, now, self.config.duration);
    }
}
