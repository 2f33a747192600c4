// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap scrolling for a horizontal carousel driven by a simulated host.
//!
//! This example shows how a host wires `understory_snap_scroll` into its own
//! scroll container:
//! - the host owns a pixel scroll offset and exposes it as a normalized value,
//! - layout recomputes the scrollable range, which the value is resolved against,
//! - drag, flick, and wheel input is forwarded to the view,
//! - a 60fps frame loop calls `update` and reacts to `Snapped`.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_snap_scroll_demos --example snap_carousel`

use std::io;

use kurbo::{Point, Vec2};
use understory_snap_scroll::{Axis, ScrollHost, SnapScrollView};

const FRAME_MS: u64 = 16;

/// A scroll container with one item per page.
#[derive(Debug)]
struct Carousel {
    items: usize,
    item_width: f64,
    offset_px: f64,
    /// Scrollable range as of the last layout pass.
    max_offset_px: f64,
}

impl Carousel {
    fn new(items: usize, item_width: f64) -> Self {
        let mut carousel = Self {
            items,
            item_width,
            offset_px: 0.0,
            max_offset_px: 0.0,
        };
        carousel.force_layout();
        carousel
    }

    /// What the host does while the pointer is down.
    fn drag_to(&mut self, offset_px: f64) {
        self.offset_px = offset_px.clamp(0.0, self.max_offset_px);
    }
}

impl ScrollHost for Carousel {
    fn value(&self) -> f64 {
        if self.max_offset_px > 0.0 {
            self.offset_px / self.max_offset_px
        } else {
            0.0
        }
    }

    fn set_value(&mut self, value: f64) {
        self.offset_px = value.clamp(0.0, 1.0) * self.max_offset_px;
    }

    fn force_layout(&mut self) {
        // The viewport shows exactly one item.
        let content = self.items as f64 * self.item_width;
        self.max_offset_px = (content - self.item_width).max(0.0);
    }
}

/// Run frames from `now` until the view settles, printing the offset as it goes.
fn settle(view: &mut SnapScrollView, host: &mut Carousel, mut now: u64) -> u64 {
    let mut frame = 0_u32;
    loop {
        let snapped = view.update(host, now);
        if frame % 6 == 0 || snapped.is_some() {
            println!("  t={now:>5}ms offset={:>7.1}px", host.offset_px);
        }
        if let Some(snapped) = snapped {
            println!("  snapped to item {}", snapped.index);
            return now;
        }
        if !view.is_animating() {
            return now;
        }
        now += FRAME_MS;
        frame += 1;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut host = Carousel::new(5, 300.0);
    let mut view = SnapScrollView::new(host.items, Axis::Horizontal);
    let mut now = 0;

    println!("== Slow drag to 260px: settle on the closest item ==");
    view.on_drag_begin(now);
    host.drag_to(260.0);
    now += 600;
    view.on_drag_end(&mut host, Point::new(400.0, 90.0), Point::new(140.0, 95.0), now);
    now = settle(&mut view, &mut host, now);

    println!("\n== Quick flick to the left: advance one item ==");
    now += 1_000;
    view.on_drag_begin(now);
    host.drag_to(host.offset_px + 40.0);
    now += 90;
    view.on_drag_end(&mut host, Point::new(300.0, 90.0), Point::new(260.0, 90.0), now);
    now = settle(&mut view, &mut host, now);

    println!("\n== Wheel: advance one item ==");
    now += 1_000;
    view.on_scroll(&mut host, Vec2::new(-1.0, 0.0), now);
    now = settle(&mut view, &mut host, now);

    println!("\n== Snap back to the first item, interrupted by a jump to the last ==");
    now += 1_000;
    view.snap_to_index(&mut host, 0, now);
    for _ in 0..10 {
        now += FRAME_MS;
        view.update(&mut host, now);
    }
    println!("  t={now:>5}ms offset={:>7.1}px (interrupted)", host.offset_px);
    view.jump_to_index(&mut host, 4);
    println!("  jumped: offset={:>7.1}px", host.offset_px);
    let _ = settle(&mut view, &mut host, now + FRAME_MS);

    println!(
        "\ndone: offset={:.1}px last snapped={:?}",
        host.offset_px,
        view.last_snapped()
    );
}
