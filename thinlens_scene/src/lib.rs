// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thinlens_scene --heading-base-level=0

//! Thinlens Scene: a renderable description of a lens diagram.
//!
//! This crate turns the outputs of [`thinlens_optics`] into a [`Scene`]: plain
//! Kurbo geometry plus labels and styling hints that any front end can draw
//! (an immediate-mode plot, a GPU canvas, an SVG exporter, a terminal plot).
//!
//! - [`SceneParams`]: the per-frame input snapshot (object size and distance,
//!   focal length, texture aspect ratio, ray visibility).
//! - [`compose_scene`]: assembles axes, lens outline, markers, texture
//!   placements, rays and legend.
//! - [`Palette`]: default colors per item category.
//!
//! The scene does not own textures. The object and image are [`Placement`]s,
//! signed world-space extents over which the caller stretches its own
//! texture; the image placement is flagged translucent.
//!
//! ## Example
//!
//! ```rust
//! use thinlens_scene::SceneParams;
//!
//! let params = SceneParams {
//!     object_distance: 250.0,
//!     focal_length: 125.0,
//!     ..SceneParams::default()
//! };
//! let scene = params.compose()?;
//!
//! assert!(scene.has_image());
//! assert_eq!(scene.rays.len(), 5);
//! let labels: Vec<&str> = scene.legend.iter().map(|item| item.label()).collect();
//! assert_eq!(
//!     labels,
//!     ["Focal Point", "Radius Point", "Lens", "Ray 1", "Ray 2", "Ray 3"]
//! );
//! # Ok::<(), thinlens_optics::InvalidParameter>(())
//! ```
//!
//! ## Viewport
//!
//! Every scene is framed in the fixed window [`VIEWPORT`]
//! (`x ∈ [-500, 500]`, `y ∈ [-200, 200]`). Nothing is rejected or clipped
//! here; renderers clip to the viewport.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod legend;
mod lens;
mod palette;
mod params;
mod placement;
mod scene;

pub use legend::{Legend, LegendItem};
pub use lens::{LENS_HALF_HEIGHT, LENS_PROFILE_SAMPLES, LENS_WIDTH, LensOutline};
pub use palette::Palette;
pub use params::{
    DEFAULT_ASPECT_RATIO, FOCAL_LENGTH_RANGE, OBJECT_DISTANCE_RANGE, OBJECT_SIZE_RANGE,
    SceneParams,
};
pub use placement::{IMAGE_OPACITY, Placement, PlacementRole};
pub use scene::{Scene, VIEWPORT, compose_scene};
