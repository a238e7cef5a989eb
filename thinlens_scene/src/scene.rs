// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene assembly.

use kurbo::{Line, Rect};
use thinlens_optics::{
    ImageResult, InvalidParameter, Marker, ObjectSpec, RaySegment, Rays, lens_markers,
};

use crate::lens::LensOutline;
use crate::legend::{Legend, legend};
use crate::params::SceneParams;
use crate::placement::{Placement, PlacementRole};

/// Fixed world-space window every scene is framed in.
///
/// `x ∈ [-500, 500]`, `y ∈ [-200, 200]`. Scenes never autoscale; geometry
/// outside the window is left for the renderer to clip.
pub const VIEWPORT: Rect = Rect::new(-500.0, -200.0, 500.0, 200.0);

/// Everything needed to draw one frame of the lens diagram.
///
/// A scene is a plain value rebuilt from scratch on every parameter change.
/// Composing twice from the same inputs gives equal scenes.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// World-space window to frame; see [`VIEWPORT`].
    pub viewport: Rect,
    /// The optical axis, spanning the viewport horizontally.
    pub horizontal_axis: Line,
    /// The lens plane, spanning the viewport vertically.
    pub vertical_axis: Line,
    /// Lens outline centered on the origin.
    pub lens: LensOutline,
    /// Focal and radius points.
    pub markers: [Marker; 4],
    /// Where the object texture goes.
    pub object: Placement,
    /// Where the image texture goes; `None` when no image forms.
    pub image: Option<Placement>,
    /// Construction rays; empty when hidden or when no image forms.
    pub rays: Rays,
    /// Legend entries in display order.
    pub legend: Legend,
    /// The lens model's prediction this scene was composed from.
    pub image_result: ImageResult,
}

impl Scene {
    /// Runs the full pipeline for `params`.
    ///
    /// Same as [`SceneParams::compose`].
    pub fn from_params(params: &SceneParams) -> Result<Self, InvalidParameter> {
        params.compose()
    }

    /// Whether the scene contains an image.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// Assembles a scene from the lens model outputs.
///
/// - Axis lines, lens outline, markers at `±f` and `±2f`, and the object
///   placement are always present.
/// - The image placement is present when `image` is defined.
/// - `rays` are included when `show_rays` is set and `image` is defined.
///
/// Inputs are not validated here; out-of-window geometry is kept as is.
#[must_use]
pub fn compose_scene(
    object: &ObjectSpec,
    image: &ImageResult,
    focal_length: f64,
    rays: &[RaySegment],
    show_rays: bool,
) -> Scene {
    let image_placement = image.formed().map(|formed| {
        Placement::standing(
            PlacementRole::Image,
            formed.distance,
            formed.size,
            object.aspect_ratio,
        )
    });
    let rays: Rays = if show_rays && image.is_defined() {
        rays.iter().copied().collect()
    } else {
        Rays::new()
    };

    Scene {
        viewport: VIEWPORT,
        horizontal_axis: Line::new((VIEWPORT.x0, 0.0), (VIEWPORT.x1, 0.0)),
        vertical_axis: Line::new((0.0, VIEWPORT.y0), (0.0, VIEWPORT.y1)),
        lens: LensOutline::default(),
        markers: lens_markers(focal_length),
        object: Placement::standing(
            PlacementRole::Object,
            -object.distance,
            object.size,
            object.aspect_ratio,
        ),
        image: image_placement,
        legend: legend(!rays.is_empty()),
        rays,
        image_result: *image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thinlens_optics::{MarkerKind, build_rays, compute_image};

    use crate::legend::LegendItem;

    fn compose(d_o: f64, h: f64, f: f64, show_rays: bool) -> Scene {
        let object = ObjectSpec::new(d_o, h, 0.5).unwrap();
        let image = compute_image(d_o, h, f).unwrap();
        let rays = build_rays(d_o, h, &image);
        compose_scene(&object, &image, f, &rays, show_rays)
    }

    #[test]
    fn fixed_items_are_always_present() {
        let scene = compose(100.0, 50.0, 100.0, true);
        assert_eq!(scene.viewport, VIEWPORT);
        assert_eq!(scene.horizontal_axis.p0.x, -500.0);
        assert_eq!(scene.vertical_axis.p1.y, 200.0);
        assert_eq!(scene.lens, LensOutline::default());
        assert_eq!(scene.markers[0].kind, MarkerKind::FocalPoint);
        assert_eq!(scene.markers[3].position.x, 200.0);
        assert_eq!(scene.object.extent, Rect::new(-112.5, 0.0, -87.5, 50.0));
    }

    #[test]
    fn undefined_image_drops_image_and_rays() {
        let scene = compose(100.0, 50.0, 100.0, true);
        assert!(!scene.has_image());
        assert!(scene.rays.is_empty());
        assert_eq!(scene.legend.len(), 3);
        assert_eq!(scene.image_result, ImageResult::Undefined);
    }

    #[test]
    fn hidden_rays_keep_the_image() {
        let scene = compose(250.0, 100.0, 125.0, false);
        assert!(scene.has_image());
        assert!(scene.rays.is_empty());
        assert!(!scene.legend.contains(&LegendItem::Ray(thinlens_optics::RayKind::Parallel)));
    }

    #[test]
    fn image_is_translucent_and_centered_on_image_distance() {
        let scene = compose(250.0, 100.0, 125.0, true);
        let image = scene.image.unwrap();
        assert!(image.is_translucent());
        assert!(!scene.object.is_translucent());
        let center = (image.extent.x0 + image.extent.x1) / 2.0;
        assert!((center - 250.0).abs() < 1e-9);
        assert!(image.is_flipped());
        assert_eq!(scene.rays.len(), 5);
        assert_eq!(scene.legend.len(), 6);
    }

    #[test]
    fn virtual_image_stands_left_of_lens() {
        let scene = compose(50.0, 100.0, 125.0, true);
        let image = scene.image.unwrap();
        assert!(image.bounds().x1 < 0.0);
        assert!(!image.is_flipped());
    }

    #[test]
    fn out_of_window_geometry_is_kept() {
        // Object just outside the focal point: the image lands far off-screen.
        let scene = compose(101.0, 100.0, 100.0, true);
        let image = scene.image.unwrap();
        assert!(image.bounds().x0 > VIEWPORT.x1);
    }

    #[test]
    fn composing_is_idempotent() {
        assert_eq!(
            compose(175.0, 60.0, 80.0, true),
            compose(175.0, 60.0, 80.0, true)
        );
    }
}
