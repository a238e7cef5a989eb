// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three construction rays that locate an image.

use kurbo::{Line, Point};
use smallvec::SmallVec;
use thinlens_dda::{Dda, rasterize_line};

use crate::model::ImageResult;

/// One of the three canonical construction rays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RayKind {
    /// Leaves the object parallel to the axis and bends through the far focal point.
    Parallel,
    /// Passes straight through the lens center.
    Chief,
    /// Passes through the near focal point and leaves the lens parallel to the axis.
    Focal,
}

impl RayKind {
    /// All kinds, in legend order.
    pub const ALL: [Self; 3] = [Self::Parallel, Self::Chief, Self::Focal];

    /// One-based number used in legends ("Ray 1" is the parallel ray).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Parallel => 1,
            Self::Chief => 2,
            Self::Focal => 3,
        }
    }

    /// Legend label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Parallel => "Ray 1",
            Self::Chief => "Ray 2",
            Self::Focal => "Ray 3",
        }
    }

    /// Descriptive name of the ray.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parallel => "parallel ray",
            Self::Chief => "chief ray",
            Self::Focal => "focal ray",
        }
    }
}

/// Which part of a ray a segment covers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RayLeg {
    /// From the object tip to the lens plane.
    Incoming,
    /// From the lens plane to the image tip.
    Outgoing,
    /// The whole undeviated path from object tip to image tip.
    Through,
}

/// A straight piece of a construction ray.
///
/// This is the single canonical representation of ray geometry. Renderers
/// draw [`RaySegment::line`] directly for a solid or dashed style, or walk
/// [`RaySegment::samples`] for a dotted style.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RaySegment {
    /// Ray this segment belongs to.
    pub kind: RayKind,
    /// Part of the ray this segment covers.
    pub leg: RayLeg,
    /// Segment geometry in world coordinates.
    pub line: Line,
}

impl RaySegment {
    fn new(kind: RayKind, leg: RayLeg, p0: Point, p1: Point) -> Self {
        Self {
            kind,
            leg,
            line: Line::new(p0, p1),
        }
    }

    /// Start point.
    #[must_use]
    pub fn start(&self) -> Point {
        self.line.p0
    }

    /// End point.
    #[must_use]
    pub fn end(&self) -> Point {
        self.line.p1
    }

    /// Unit-step samples along the segment, end point excluded.
    #[must_use]
    pub fn samples(&self) -> Dda {
        rasterize_line(self.line)
    }
}

/// Segments produced by [`build_rays`].
pub type Rays = SmallVec<[RaySegment; 5]>;

/// Builds the construction rays for an object and its image.
///
/// The lens sits in the plane `x = 0`, the object tip at
/// `(-object_distance, object_size)` and the image tip at
/// `(image_distance, image_size)`. Segments come out in [`RayKind::ALL`]
/// order, incoming before outgoing:
///
/// 1. Parallel: `(-d_o, h) → (0, h)`, then `(0, h) → (d_i, h_i)`.
/// 2. Chief: `(-d_o, h) → (d_i, h_i)` as one segment.
/// 3. Focal: `(-d_o, h) → (0, h_i)`, then `(0, h_i) → (d_i, h_i)`.
///
/// Collinearity of the chief ray with the lens center is not checked; it
/// holds by construction for images from [`compute_image`](crate::compute_image).
///
/// Returns no segments when the image is undefined.
#[must_use]
pub fn build_rays(object_distance: f64, object_size: f64, image: &ImageResult) -> Rays {
    let mut rays = Rays::new();
    let Some(image) = image.formed() else {
        return rays;
    };

    let tip = Point::new(-object_distance, object_size);
    let image_tip = Point::new(image.distance, image.size);
    let lens_at_object_height = Point::new(0.0, object_size);
    let lens_at_image_height = Point::new(0.0, image.size);

    rays.push(RaySegment::new(
        RayKind::Parallel,
        RayLeg::Incoming,
        tip,
        lens_at_object_height,
    ));
    rays.push(RaySegment::new(
        RayKind::Parallel,
        RayLeg::Outgoing,
        lens_at_object_height,
        image_tip,
    ));
    rays.push(RaySegment::new(
        RayKind::Chief,
        RayLeg::Through,
        tip,
        image_tip,
    ));
    rays.push(RaySegment::new(
        RayKind::Focal,
        RayLeg::Incoming,
        tip,
        lens_at_image_height,
    ));
    rays.push(RaySegment::new(
        RayKind::Focal,
        RayLeg::Outgoing,
        lens_at_image_height,
        image_tip,
    ));
    rays
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_image;

    fn rays_for(d_o: f64, h: f64, f: f64) -> Rays {
        let image = compute_image(d_o, h, f).unwrap();
        build_rays(d_o, h, &image)
    }

    #[test]
    fn kinds_are_numbered_in_legend_order() {
        let numbered = RayKind::ALL.map(|k| (k.number(), k.label(), k.name()));
        assert_eq!(
            numbered,
            [
                (1, "Ray 1", "parallel ray"),
                (2, "Ray 2", "chief ray"),
                (3, "Ray 3", "focal ray"),
            ]
        );
    }

    #[test]
    fn builds_five_segments_in_legend_order() {
        let rays = rays_for(250.0, 100.0, 125.0);
        let tags: SmallVec<[(RayKind, RayLeg); 5]> =
            rays.iter().map(|r| (r.kind, r.leg)).collect();
        assert_eq!(
            tags.as_slice(),
            &[
                (RayKind::Parallel, RayLeg::Incoming),
                (RayKind::Parallel, RayLeg::Outgoing),
                (RayKind::Chief, RayLeg::Through),
                (RayKind::Focal, RayLeg::Incoming),
                (RayKind::Focal, RayLeg::Outgoing),
            ]
        );
    }

    #[test]
    fn halves_meet_at_the_lens_plane() {
        let rays = rays_for(300.0, 60.0, 100.0);
        for pair in rays.windows(2) {
            if pair[0].kind == pair[1].kind {
                assert_eq!(pair[0].end(), pair[1].start());
                assert_eq!(pair[0].end().x, 0.0);
            }
        }
    }

    #[test]
    fn parallel_ray_enters_horizontally_and_focal_ray_leaves_horizontally() {
        let rays = rays_for(300.0, 60.0, 100.0);
        let parallel_in = rays[0];
        assert_eq!(parallel_in.start().y, parallel_in.end().y);
        let focal_out = rays[4];
        assert_eq!(focal_out.start().y, focal_out.end().y);
    }

    #[test]
    fn outgoing_parallel_ray_crosses_far_focal_point() {
        let f = 100.0;
        let rays = rays_for(300.0, 60.0, f);
        let line = rays[1].line;
        // y at x = f along the outgoing leg.
        let t = (f - line.p0.x) / (line.p1.x - line.p0.x);
        let y = line.p0.y + t * (line.p1.y - line.p0.y);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn chief_ray_passes_through_lens_center() {
        for (d_o, f) in [(300.0, 100.0), (50.0, 125.0), (130.0, 120.0)] {
            let rays = rays_for(d_o, 40.0, f);
            let chief = rays[2].line;
            let t = (0.0 - chief.p0.x) / (chief.p1.x - chief.p0.x);
            let y = chief.p0.y + t * (chief.p1.y - chief.p0.y);
            assert!(y.abs() < 1e-6, "chief ray misses the center for d_o={d_o}");
        }
    }

    #[test]
    fn undefined_image_has_no_rays() {
        assert!(rays_for(80.0, 40.0, 80.0).is_empty());
        assert!(build_rays(80.0, 40.0, &ImageResult::Undefined).is_empty());
    }

    #[test]
    fn samples_walk_the_segment() {
        let rays = rays_for(250.0, 100.0, 125.0);
        let incoming = rays[0];
        let samples = incoming.samples();
        assert_eq!(samples.len(), 250);
        assert_eq!(samples.clone().next(), Some(incoming.start()));
    }

    #[test]
    fn kinds_number_in_legend_order() {
        let numbers = RayKind::ALL.map(RayKind::number);
        assert_eq!(numbers, [1, 2, 3]);
        assert_eq!(RayKind::Chief.label(), "Ray 2");
    }
}
