// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend entries.

use smallvec::SmallVec;
use thinlens_optics::{MarkerKind, RayKind};

/// What a legend entry refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LegendItem {
    /// Focal or radius point markers.
    Marker(MarkerKind),
    /// The lens outline.
    Lens,
    /// One construction ray (both of its halves).
    Ray(RayKind),
}

impl LegendItem {
    /// Label shown in the legend.
    ///
    /// Labels are stable across calls so renderers can key on them.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Marker(kind) => kind.label(),
            Self::Lens => "Lens",
            Self::Ray(kind) => kind.label(),
        }
    }
}

/// Legend entries in display order.
pub type Legend = SmallVec<[LegendItem; 6]>;

/// Builds the legend for a scene.
///
/// Always "Focal Point", "Radius Point", "Lens"; followed by "Ray 1",
/// "Ray 2", "Ray 3" when rays are drawn.
pub(crate) fn legend(with_rays: bool) -> Legend {
    let mut items = Legend::new();
    items.push(LegendItem::Marker(MarkerKind::FocalPoint));
    items.push(LegendItem::Marker(MarkerKind::RadiusPoint));
    items.push(LegendItem::Lens);
    if with_rays {
        items.extend(RayKind::ALL.map(LegendItem::Ray));
    }
    items
}
