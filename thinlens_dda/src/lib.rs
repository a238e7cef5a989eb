// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thinlens_dda --heading-base-level=0

//! Thinlens DDA: incremental line sampling.
//!
//! This crate samples a straight segment at unit resolution along its
//! dominant axis, the classic digital differential analyzer. It is a generic
//! utility with no knowledge of what the segment represents; renderers use it
//! to draw dotted or sampled lines, plotters to scatter points along a path.
//!
//! - [`rasterize`] samples the segment `(x1, y1) → (x2, y2)`.
//! - [`rasterize_line`] does the same for a [`kurbo::Line`].
//! - [`Dda`] is the returned iterator. It is lazy and reports an exact
//!   length; a clone taken before iteration replays the same samples.
//!
//! ## Sampling policy
//!
//! The step count is `floor(max(|dx|, |dy|))`. The iterator yields exactly
//! that many points, starting at the start point and advancing by
//! `(dx / steps, dy / steps)` each time. The end point itself is never
//! emitted. When the step count is zero (coincident endpoints, or a span
//! shorter than one unit) the iterator yields the start point alone.
//!
//! A span that is not finite is treated the same way as a sub-unit one.
//! A finite span too large for `usize` saturates to `usize::MAX` steps, so
//! callers sampling unbounded geometry should clip it to the region they
//! draw before rasterizing.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use thinlens_dda::rasterize;
//!
//! let pts: Vec<Point> = rasterize(0.0, 0.0, 4.0, 2.0).collect();
//! assert_eq!(
//!     pts,
//!     [
//!         Point::new(0.0, 0.0),
//!         Point::new(1.0, 0.5),
//!         Point::new(2.0, 1.0),
//!         Point::new(3.0, 1.5),
//!     ]
//! );
//!
//! // Sub-unit segments collapse to their start point.
//! assert_eq!(rasterize(5.0, 5.0, 5.4, 5.4).count(), 1);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Line, Point, Vec2};

use core::iter::FusedIterator;

/// Samples the segment `(x1, y1) → (x2, y2)`.
///
/// See the [crate docs](crate) for the sampling policy.
#[must_use]
pub fn rasterize(x1: f64, y1: f64, x2: f64, y2: f64) -> Dda {
    Dda::new(Point::new(x1, y1), Point::new(x2, y2))
}

/// Samples a [`Line`] from `line.p0` towards `line.p1`.
#[must_use]
pub fn rasterize_line(line: Line) -> Dda {
    Dda::new(line.p0, line.p1)
}

/// Number of samples [`rasterize`] produces for a segment with the given span.
///
/// This is `floor(max(|dx|, |dy|))` clamped to at least one.
#[must_use]
pub fn sample_count(dx: f64, dy: f64) -> usize {
    step_count(dx, dy).max(1)
}

fn step_count(dx: f64, dy: f64) -> usize {
    let span = dx.abs().max(dy.abs());
    if !span.is_finite() {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "truncation is the step policy; span is finite and non-negative, huge spans saturate"
    )]
    let steps = span.floor() as usize;
    steps
}

/// Iterator over the samples of one segment.
///
/// Created by [`rasterize`] and [`rasterize_line`].
#[derive(Clone, Debug, PartialEq)]
pub struct Dda {
    cursor: Point,
    increment: Vec2,
    remaining: usize,
}

impl Dda {
    /// Creates a sampler for the segment `start → end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let delta = end - start;
        let steps = step_count(delta.x, delta.y);
        if steps == 0 {
            return Self {
                cursor: start,
                increment: Vec2::ZERO,
                remaining: 1,
            };
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "step counts are bounded by the segment span, well within f64 precision"
        )]
        let steps_f = steps as f64;
        Self {
            cursor: start,
            increment: delta / steps_f,
            remaining: steps,
        }
    }

    /// Per-sample advance.
    ///
    /// Zero for a degenerate (single point) segment.
    #[must_use]
    pub fn increment(&self) -> Vec2 {
        self.increment
    }

    /// Returns `true` if this sampler yields only the start point because
    /// the segment spans less than one unit.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.increment == Vec2::ZERO
    }
}

impl Iterator for Dda {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let pt = self.cursor;
        self.cursor += self.increment;
        Some(pt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Dda {}

impl FusedIterator for Dda {}
