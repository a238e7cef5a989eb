// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame input parameters.

use core::ops::RangeInclusive;

use thinlens_optics::{InvalidParameter, ObjectSpec, compute_image};

use crate::scene::{Scene, compose_scene};

/// Slider range for the object size.
pub const OBJECT_SIZE_RANGE: RangeInclusive<f64> = 10.0..=200.0;
/// Slider range for the object distance.
pub const OBJECT_DISTANCE_RANGE: RangeInclusive<f64> = 10.0..=400.0;
/// Slider range for the focal length.
pub const FOCAL_LENGTH_RANGE: RangeInclusive<f64> = 50.0..=200.0;
/// Aspect ratio of the default tree texture (50 × 100).
pub const DEFAULT_ASPECT_RATIO: f64 = 0.5;

/// Everything the scene depends on, passed by value on every update.
///
/// A presentation shell keeps the only mutable copy (bound to its widgets)
/// and hands a snapshot to [`SceneParams::compose`] whenever a widget
/// changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneParams {
    /// Signed object height.
    pub object_size: f64,
    /// Distance from the lens to the object.
    pub object_distance: f64,
    /// Lens focal length.
    pub focal_length: f64,
    /// Width/height ratio of the object texture.
    pub aspect_ratio: f64,
    /// Whether construction rays are drawn.
    pub show_rays: bool,
}

impl Default for SceneParams {
    /// The reset state of the visualizer: a 100-unit tree 100 units from a
    /// lens with a 50-unit focal length, rays shown.
    fn default() -> Self {
        Self {
            object_size: 100.0,
            object_distance: 100.0,
            focal_length: 50.0,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            show_rays: true,
        }
    }
}

impl SceneParams {
    /// The object described by these parameters, validated.
    pub fn object(&self) -> Result<ObjectSpec, InvalidParameter> {
        ObjectSpec::new(self.object_distance, self.object_size, self.aspect_ratio)
    }

    /// Runs the full pipeline: lens model, ray builder, scene composer.
    ///
    /// Fails only if a parameter is outside the model's domain; see
    /// [`compute_image`].
    pub fn compose(&self) -> Result<Scene, InvalidParameter> {
        let object = self.object()?;
        let image = compute_image(object.distance, object.size, self.focal_length)?;
        let rays = thinlens_optics::build_rays(object.distance, object.size, &image);
        Ok(compose_scene(
            &object,
            &image,
            self.focal_length,
            &rays,
            self.show_rays,
        ))
    }

    /// Returns a copy with size, distance and focal length clamped into the
    /// slider ranges.
    ///
    /// NaN inputs are left alone so that [`SceneParams::compose`] still
    /// reports them.
    #[must_use]
    pub fn clamped_to_sliders(self) -> Self {
        Self {
            object_size: clamp(self.object_size, &OBJECT_SIZE_RANGE),
            object_distance: clamp(self.object_distance, &OBJECT_DISTANCE_RANGE),
            focal_length: clamp(self.focal_length, &FOCAL_LENGTH_RANGE),
            ..self
        }
    }
}

fn clamp(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}
