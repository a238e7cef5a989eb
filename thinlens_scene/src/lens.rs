// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bi-convex lens outline.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::{BezPath, Point, Rect};

/// Half the lens height in world units.
pub const LENS_HALF_HEIGHT: f64 = 200.0;
/// Maximum half-thickness of the lens outline at the axis.
pub const LENS_WIDTH: f64 = 14.0;
/// Number of points sampled along each face.
pub const LENS_PROFILE_SAMPLES: usize = 101;

/// A thin bi-convex profile made of two mirrored elliptical faces.
///
/// Each face solves `x = ±width * sqrt(1 - (y / half_height)^2)` for `y`
/// evenly spaced over `[-half_height, half_height]`, bottom to top. The faces
/// meet at `(0, ±half_height)`.
#[derive(Clone, Debug, PartialEq)]
pub struct LensOutline {
    /// Half of the lens height.
    pub half_height: f64,
    /// Half-thickness at the axis.
    pub width: f64,
    /// Face on the object side (`x <= 0`), bottom to top.
    pub left: Vec<Point>,
    /// Face on the transmission side (`x >= 0`), bottom to top.
    pub right: Vec<Point>,
}

impl LensOutline {
    /// Samples a profile with `samples` points per face.
    ///
    /// Fewer than two samples are raised to two so the faces still span the
    /// full height.
    #[must_use]
    pub fn new(half_height: f64, width: f64, samples: usize) -> Self {
        let samples = samples.max(2);
        #[allow(
            clippy::cast_precision_loss,
            reason = "sample counts are small"
        )]
        let last = (samples - 1) as f64;

        let mut left = Vec::with_capacity(samples);
        let mut right = Vec::with_capacity(samples);
        for i in 0..samples {
            #[allow(
                clippy::cast_precision_loss,
                reason = "sample counts are small"
            )]
            let t = i as f64 / last;
            let y = -half_height + 2.0 * half_height * t;
            let r = y / half_height;
            // Rounding can push r^2 just past 1 at the tips.
            let x = width * (1.0 - r * r).max(0.0).sqrt();
            left.push(Point::new(-x, y));
            right.push(Point::new(x, y));
        }
        Self {
            half_height,
            width,
            left,
            right,
        }
    }

    /// Closed outline: right face upwards, then left face back down.
    #[must_use]
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut pts = self.right.iter().chain(self.left.iter().rev());
        if let Some(first) = pts.next() {
            path.move_to(*first);
            for pt in pts {
                path.line_to(*pt);
            }
            path.close_path();
        }
        path
    }

    /// Axis-aligned bounds of the outline.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            -self.width,
            -self.half_height,
            self.width,
            self.half_height,
        )
    }
}

impl Default for LensOutline {
    fn default() -> Self {
        Self::new(LENS_HALF_HEIGHT, LENS_WIDTH, LENS_PROFILE_SAMPLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;

    #[test]
    fn faces_meet_at_the_tips_and_bulge_at_the_axis() {
        let lens = LensOutline::default();
        assert_eq!(lens.left.len(), LENS_PROFILE_SAMPLES);
        assert_eq!(lens.right.len(), LENS_PROFILE_SAMPLES);

        let bottom = lens.right[0];
        let top = lens.right[LENS_PROFILE_SAMPLES - 1];
        assert!((bottom.y + LENS_HALF_HEIGHT).abs() < 1e-9);
        assert!((top.y - LENS_HALF_HEIGHT).abs() < 1e-9);
        assert!(bottom.x.abs() < 1e-9 && top.x.abs() < 1e-9);

        // Odd sample count puts the middle sample on the axis.
        let mid = lens.right[LENS_PROFILE_SAMPLES / 2];
        assert!(mid.y.abs() < 1e-9);
        assert!((mid.x - LENS_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn faces_mirror_each_other() {
        let lens = LensOutline::new(100.0, 10.0, 17);
        for (l, r) in lens.left.iter().zip(&lens.right) {
            assert_eq!(l.x, -r.x);
            assert_eq!(l.y, r.y);
            assert!(r.x >= 0.0);
        }
    }

    #[test]
    fn path_stays_inside_bounds() {
        let lens = LensOutline::default();
        let path_bounds = lens.to_path().bounding_box();
        let bounds = lens.bounds();
        assert!(path_bounds.x0 >= bounds.x0 - 1e-9);
        assert!(path_bounds.x1 <= bounds.x1 + 1e-9);
        assert!((path_bounds.height() - bounds.height()).abs() < 1e-9);
    }

    #[test]
    fn too_few_samples_still_span_the_height() {
        let lens = LensOutline::new(50.0, 5.0, 0);
        assert_eq!(lens.left.len(), 2);
        assert_eq!(lens.left[0].y, -50.0);
        assert_eq!(lens.left[1].y, 50.0);
    }
}
