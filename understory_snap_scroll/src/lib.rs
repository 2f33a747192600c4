// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_snap_scroll --heading-base-level=0

//! Understory Snap Scroll: snap-to-item scrolling for uniform 1D strips.
//!
//! This crate provides a small, renderer-agnostic controller that makes a
//! scrolling strip of equally sized items (a carousel, a pager, a picker) come
//! to rest on an item instead of at an arbitrary offset.
//!
//! The core concepts are:
//!
//! - [`SnapSteps`]: the mapping between item indices and normalized scroll
//!   positions in `[0, 1]`. Item `i` of `len` sits at `i / (len - 1)`.
//! - [`decide`] and [`snap_target`]: pure functions that turn a finished
//!   [`Gesture`] into a [`SnapDirection`], and a direction plus the current
//!   position into a [`SnapTarget`].
//! - [`SnapAnimation`]: a time-based linear interpolation toward the target,
//!   with an explicit [`SnapState`].
//! - [`ScrollHost`]: the capability the host provides, a normalized scroll
//!   value plus a layout refresh.
//! - [`SnapScrollView`]: the controller that ties these together and reports
//!   [`Snapped`] when an animation settles.
//!
//! This crate deliberately does **not** scroll in response to drags, hit test,
//! or lay anything out. Host frameworks are responsible for:
//!
//! - Scrolling the content while the user drags.
//! - Forwarding drag begin, drag end, and scroll events to the view.
//! - Calling [`SnapScrollView::update`] once per frame and acting on the
//!   returned [`Snapped`].
//! - Calling [`SnapScrollView::set_len`] when the number of items changes.
//!
//! ## Gestures
//!
//! - A drag released within [`SnapConfig::flick_threshold`] of its start is a
//!   flick: it moves one item, backwards if the pointer was released further
//!   along the axis than it was pressed and forwards otherwise.
//! - A slower drag settles on the closest item. An exact midpoint settles on
//!   the previous item.
//! - A negative scroll delta along the axis moves to the next item, any other
//!   delta to the previous one.
//!
//! Every snap takes [`SnapConfig::duration`] regardless of distance. Starting
//! a snap while another is in flight replaces it, starting from wherever the
//! first one got to.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_snap_scroll::{Axis, SnapDirection, SnapScrollView, Snapped};
//!
//! // Four items at 0, 1/3, 2/3 and 1.
//! let mut view = SnapScrollView::new(4, Axis::Horizontal);
//!
//! // A bare `f64` works as a host without layout.
//! let mut scroll = 0.5_f64;
//!
//! // The user let go halfway between items 1 and 2.
//! let target = view.snap(&mut scroll, SnapDirection::Closest, 0).unwrap();
//! assert_eq!(target.index, 2);
//!
//! // Host frame loop.
//! assert_eq!(view.update(&mut scroll, 250), None);
//! assert_eq!(view.update(&mut scroll, 500), Some(Snapped { index: 2 }));
//! assert_eq!(scroll, 2.0 / 3.0);
//! ```
//!
//! ## Jumping
//!
//! [`SnapScrollView::jump_to_index`] moves straight to an item with no
//! animation and no [`Snapped`] notification:
//!
//! ```rust
//! use understory_snap_scroll::{Axis, SnapScrollView};
//!
//! let mut view = SnapScrollView::new(5, Axis::Vertical);
//! let mut scroll = 0.0_f64;
//! view.jump_to_index(&mut scroll, 3);
//! assert_eq!(scroll, 0.75);
//! assert_eq!(view.update(&mut scroll, 1_000), None);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod animation;
mod config;
mod decision;
mod host;
mod steps;
mod view;

pub use animation::{Sample, SnapAnimation, SnapState};
pub use config::SnapConfig;
pub use decision::{Axis, Gesture, SnapDirection, SnapTarget, decide, snap_target};
pub use host::ScrollHost;
pub use steps::SnapSteps;
pub use view::{SnapScrollView, Snapped};
