// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The default test object: a stylized tree.

use kurbo::Size;
use thinlens_svg::Texture;

const TRUNK: &str = "#8b4513";
const CROWN: &str = "#228b22";

/// Crown triangles, bottom tier first, as `(x0 y0, apex, x1 y1)` in a
/// 50 × 100 canvas with `y` pointing down.
const CROWNS: [[(u8, u8); 3]; 3] = [
    [(5, 75), (25, 40), (45, 75)],
    [(10, 55), (25, 20), (40, 55)],
    [(15, 35), (25, 5), (35, 35)],
];

/// A brown trunk under three stacked green crowns.
///
/// The texture is 50 × 100, so its aspect ratio is
/// [`thinlens_scene::DEFAULT_ASPECT_RATIO`].
pub(crate) fn tree() -> Texture {
    let mut markup = format!("<rect x=\"20\" y=\"75\" width=\"10\" height=\"25\" fill=\"{TRUNK}\"/>");
    for crown in CROWNS {
        let points = crown
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ");
        markup.push_str(&format!("<polygon points=\"{points}\" fill=\"{CROWN}\"/>"));
    }
    Texture {
        size: Size::new(50.0, 100.0),
        markup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thinlens_scene::DEFAULT_ASPECT_RATIO;

    #[test]
    fn tree_matches_default_aspect_ratio() {
        assert_eq!(tree().aspect_ratio(), DEFAULT_ASPECT_RATIO);
    }

    #[test]
    fn tree_has_trunk_and_three_crowns() {
        let tree = tree();
        assert_eq!(tree.markup.matches("<rect").count(), 1);
        assert_eq!(tree.markup.matches("<polygon").count(), 3);
        assert!(tree.markup.contains("points=\"15,35 25,5 35,35\""));
    }
}
