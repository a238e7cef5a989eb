// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors for scene items.

use peniko::Color;
use thinlens_optics::{MarkerKind, RayKind};

use crate::legend::LegendItem;

/// Colors a renderer uses for each scene item category.
///
/// The default matches the classic diagram: red parallel ray, green chief ray,
/// magenta focal ray, red focal points, purple radius points, blue lens.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    /// Ray 1.
    pub parallel_ray: Color,
    /// Ray 2.
    pub chief_ray: Color,
    /// Ray 3.
    pub focal_ray: Color,
    /// Focal point markers.
    pub focal_point: Color,
    /// Radius point markers.
    pub radius_point: Color,
    /// Lens outline.
    pub lens: Color,
    /// Optical axis and lens plane.
    pub axis: Color,
    /// Background grid.
    pub grid: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            parallel_ray: Color::from_rgb8(255, 0, 0),
            chief_ray: Color::from_rgb8(0, 128, 0),
            focal_ray: Color::from_rgb8(191, 0, 191),
            focal_point: Color::from_rgb8(255, 0, 0),
            radius_point: Color::from_rgb8(128, 0, 128),
            lens: Color::from_rgb8(0, 0, 255),
            axis: Color::from_rgb8(0, 0, 0),
            grid: Color::from_rgb8(176, 176, 176),
        }
    }
}

impl Palette {
    /// Color of a construction ray.
    #[must_use]
    pub fn ray(&self, kind: RayKind) -> Color {
        match kind {
            RayKind::Parallel => self.parallel_ray,
            RayKind::Chief => self.chief_ray,
            RayKind::Focal => self.focal_ray,
        }
    }

    /// Color of an axis marker.
    #[must_use]
    pub fn marker(&self, kind: MarkerKind) -> Color {
        match kind {
            MarkerKind::FocalPoint => self.focal_point,
            MarkerKind::RadiusPoint => self.radius_point,
        }
    }

    /// Color of the swatch drawn next to a legend label.
    #[must_use]
    pub fn legend(&self, item: LegendItem) -> Color {
        match item {
            LegendItem::Marker(kind) => self.marker(kind),
            LegendItem::Lens => self.lens,
            LegendItem::Ray(kind) => self.ray(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rays_have_distinct_colors() {
        let palette = Palette::default();
        let [a, b, c] = RayKind::ALL.map(|k| palette.ray(k));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn legend_swatch_matches_item_color() {
        let palette = Palette::default();
        assert_eq!(
            palette.legend(LegendItem::Ray(RayKind::Focal)),
            palette.focal_ray
        );
        assert_eq!(
            palette.legend(LegendItem::Marker(MarkerKind::RadiusPoint)),
            palette.radius_point
        );
        assert_eq!(palette.legend(LegendItem::Lens), palette.lens);
    }
}
