// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where the object and image textures go.

use kurbo::Rect;

/// Opacity of the image texture relative to the object.
pub const IMAGE_OPACITY: f32 = 0.5;

/// Which texture placement this is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlacementRole {
    /// The object, drawn opaque.
    Object,
    /// The image, drawn translucent.
    Image,
}

/// A caller-supplied texture stretched over a world-space extent.
///
/// `extent` is *signed*: `x0..x1` and `y0..y1` run in the texture's own
/// left-to-right and bottom-to-top directions. The base edge is always
/// `y0 == 0` on the axis and the tip edge is `y1 == size`, so a negative
/// size gives `y1 < y0`, meaning the texture is drawn upside down. Width
/// scales with size, so the same flip applies horizontally. Use
/// [`Placement::bounds`] for the normalized rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Object or image.
    pub role: PlacementRole,
    /// Signed extent in world coordinates.
    pub extent: Rect,
    /// Texture opacity in `0.0..=1.0`.
    pub opacity: f32,
}

impl Placement {
    /// Places a texture of the given aspect ratio standing on the axis at
    /// `center_x` with signed height `size`.
    ///
    /// The footprint is `[center_x - w/2, center_x + w/2] × [0, size]` with
    /// `w = size * aspect_ratio`.
    #[must_use]
    pub fn standing(role: PlacementRole, center_x: f64, size: f64, aspect_ratio: f64) -> Self {
        let half_width = size * aspect_ratio / 2.0;
        Self {
            role,
            extent: Rect::new(center_x - half_width, 0.0, center_x + half_width, size),
            opacity: match role {
                PlacementRole::Object => 1.0,
                PlacementRole::Image => IMAGE_OPACITY,
            },
        }
    }

    /// Normalized bounds (`x0 <= x1`, `y0 <= y1`).
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.extent.abs()
    }

    /// Whether the texture is drawn upside down.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.extent.y1 < self.extent.y0
    }

    /// Whether this placement is drawn translucent.
    #[must_use]
    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0
    }
}
