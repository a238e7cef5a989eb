// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference points on the optical axis.

use kurbo::Point;

/// Kind of axis marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// A focal point, at `±f`.
    FocalPoint,
    /// A radius point (center of curvature for a symmetric lens), at `±2f`.
    RadiusPoint,
}

impl MarkerKind {
    /// Legend label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FocalPoint => "Focal Point",
            Self::RadiusPoint => "Radius Point",
        }
    }
}

/// A labelled point on the optical axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Marker {
    /// What the point marks.
    pub kind: MarkerKind,
    /// Position in world coordinates; always on the axis (`y == 0`).
    pub position: Point,
}

/// Focal and radius points of a lens with the given focal length.
///
/// Returned as `[-f, +f, -2f, +2f]`, focal points first.
#[must_use]
pub fn lens_markers(focal_length: f64) -> [Marker; 4] {
    let at = |kind, x| Marker {
        kind,
        position: Point::new(x, 0.0),
    };
    let radius = 2.0 * focal_length;
    [
        at(MarkerKind::FocalPoint, -focal_length),
        at(MarkerKind::FocalPoint, focal_length),
        at(MarkerKind::RadiusPoint, -radius),
        at(MarkerKind::RadiusPoint, radius),
    ]
}
