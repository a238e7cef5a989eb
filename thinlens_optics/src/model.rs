// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The thin-lens equation and the image it predicts.

use crate::error::{InvalidParameter, Parameter, finite, positive};

/// A thin convex lens.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LensParameters {
    focal_length: f64,
}

impl LensParameters {
    /// Creates a lens with the given focal length.
    ///
    /// The focal length must be finite and greater than zero.
    pub fn new(focal_length: f64) -> Result<Self, InvalidParameter> {
        Ok(Self {
            focal_length: positive(Parameter::FocalLength, focal_length)?,
        })
    }

    /// Distance from the lens center to either focal point.
    #[must_use]
    pub const fn focal_length(&self) -> f64 {
        self.focal_length
    }

    /// Distance from the lens center to either radius point (`2f`).
    #[must_use]
    pub fn radius(&self) -> f64 {
        2.0 * self.focal_length
    }

    /// Computes the image of `object` formed by this lens.
    pub fn image_of(&self, object: &ObjectSpec) -> Result<ImageResult, InvalidParameter> {
        compute_image(object.distance, object.size, self.focal_length)
    }
}

/// The object placed in front of the lens.
///
/// `distance` is a magnitude; the object sits at `x = -distance`, left of the
/// lens. `size` is signed: a negative size is an object standing upside down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObjectSpec {
    /// Distance from the lens along the optical axis.
    pub distance: f64,
    /// Signed height of the object.
    pub size: f64,
    /// Width/height ratio of the object's rendered footprint.
    pub aspect_ratio: f64,
}

impl ObjectSpec {
    /// Creates an object spec, validating every field.
    ///
    /// `distance` and `aspect_ratio` must be finite and positive; `size` must
    /// be finite.
    pub fn new(distance: f64, size: f64, aspect_ratio: f64) -> Result<Self, InvalidParameter> {
        Ok(Self {
            distance: positive(Parameter::ObjectDistance, distance)?,
            size: finite(Parameter::ObjectSize, size)?,
            aspect_ratio: positive(Parameter::AspectRatio, aspect_ratio)?,
        })
    }

    /// Re-checks the fields of a spec built with a struct literal.
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        Self::new(self.distance, self.size, self.aspect_ratio).map(|_| ())
    }
}

/// Which side of the lens the image forms on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Nature {
    /// Forms on the transmission side; light actually converges there.
    Real,
    /// Forms on the object side; light only appears to diverge from it.
    Virtual,
}

/// Orientation of the image relative to the object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Same orientation as the object.
    Upright,
    /// Flipped relative to the object.
    Inverted,
}

/// Size of the image relative to the object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// `|m| > 1`.
    Magnified,
    /// `|m| < 1`.
    Reduced,
    /// `|m| == 1`, the object sits at the radius point.
    SameSize,
}

/// Summary of a formed image, as a student would describe it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageClassification {
    /// Real or virtual.
    pub nature: Nature,
    /// Upright or inverted.
    pub orientation: Orientation,
    /// Magnified, reduced, or the same size.
    pub size: SizeClass,
}

/// An image predicted by the thin-lens equation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FormedImage {
    /// Signed image distance; positive on the transmission side.
    pub distance: f64,
    /// Signed image height.
    pub size: f64,
    /// Lateral magnification, `-distance / object_distance`.
    pub magnification: f64,
    object_size: f64,
}

impl FormedImage {
    /// Whether the image forms on the transmission side (`distance > 0`).
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.distance > 0.0
    }

    /// Whether the image's sign differs from the object's.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.size.is_sign_negative() != self.object_size.is_sign_negative()
    }

    /// Classifies this image.
    #[must_use]
    pub fn classify(&self) -> ImageClassification {
        let m = self.magnification.abs();
        ImageClassification {
            nature: if self.is_real() {
                Nature::Real
            } else {
                Nature::Virtual
            },
            orientation: if self.is_inverted() {
                Orientation::Inverted
            } else {
                Orientation::Upright
            },
            size: if m > 1.0 {
                SizeClass::Magnified
            } else if m < 1.0 {
                SizeClass::Reduced
            } else {
                SizeClass::SameSize
            },
        }
    }
}

/// Outcome of [`compute_image`].
///
/// An object placed exactly at the focal point sends parallel light out of the
/// lens and forms no image; that is a normal outcome, not an error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ImageResult {
    /// No image forms: the object sits at the focal point.
    Undefined,
    /// An image forms at the given position.
    Formed(FormedImage),
}

impl ImageResult {
    /// Returns `true` unless the object sits at the focal point.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Formed(_))
    }

    /// The formed image, if any.
    #[must_use]
    pub fn formed(&self) -> Option<&FormedImage> {
        match self {
            Self::Formed(image) => Some(image),
            Self::Undefined => None,
        }
    }

    /// Signed image distance.
    #[must_use]
    pub fn distance(&self) -> Option<f64> {
        self.formed().map(|i| i.distance)
    }

    /// Signed image height.
    #[must_use]
    pub fn size(&self) -> Option<f64> {
        self.formed().map(|i| i.size)
    }

    /// Lateral magnification.
    #[must_use]
    pub fn magnification(&self) -> Option<f64> {
        self.formed().map(|i| i.magnification)
    }

    /// See [`FormedImage::is_real`].
    #[must_use]
    pub fn is_real(&self) -> Option<bool> {
        self.formed().map(FormedImage::is_real)
    }

    /// See [`FormedImage::is_inverted`].
    #[must_use]
    pub fn is_inverted(&self) -> Option<bool> {
        self.formed().map(FormedImage::is_inverted)
    }

    /// See [`FormedImage::classify`].
    #[must_use]
    pub fn classify(&self) -> Option<ImageClassification> {
        self.formed().map(FormedImage::classify)
    }
}

/// Solves the Gaussian thin-lens equation `1/f = 1/d_o + 1/d_i` for the image.
///
/// - `object_distance` and `focal_length` must be finite and positive.
/// - `object_size` must be finite; its sign is the object's orientation.
///
/// The singular case is tested with exact equality: an object at
/// `object_distance == focal_length` yields [`ImageResult::Undefined`]. An
/// object a hair off the focal point yields a very distant, very large image.
///
/// ```rust
/// use thinlens_optics::compute_image;
///
/// let image = compute_image(250.0, 100.0, 125.0).unwrap();
/// let formed = image.formed().unwrap();
/// assert!((formed.distance - 250.0).abs() < 1e-9);
/// assert!((formed.size + 100.0).abs() < 1e-9);
/// assert!(formed.is_real() && formed.is_inverted());
///
/// assert!(!compute_image(50.0, 100.0, 50.0).unwrap().is_defined());
/// ```
pub fn compute_image(
    object_distance: f64,
    object_size: f64,
    focal_length: f64,
) -> Result<ImageResult, InvalidParameter> {
    let focal_length = positive(Parameter::FocalLength, focal_length)?;
    let object_distance = positive(Parameter::ObjectDistance, object_distance)?;
    let object_size = finite(Parameter::ObjectSize, object_size)?;

    if object_distance == focal_length {
        return Ok(ImageResult::Undefined);
    }

    let distance = 1.0 / (1.0 / focal_length - 1.0 / object_distance);
    // Distinct inputs whose reciprocals round together.
    if !distance.is_finite() {
        return Ok(ImageResult::Undefined);
    }
    let magnification = -distance / object_distance;

    Ok(ImageResult::Formed(FormedImage {
        distance,
        size: magnification * object_size,
        magnification,
        object_size,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Requirement;

    fn formed(d_o: f64, h: f64, f: f64) -> FormedImage {
        *compute_image(d_o, h, f).unwrap().formed().unwrap()
    }

    #[test]
    fn object_beyond_radius_gives_reduced_real_inverted_image() {
        let image = formed(400.0, 100.0, 100.0);
        assert!((image.distance - 400.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            image.classify(),
            ImageClassification {
                nature: Nature::Real,
                orientation: Orientation::Inverted,
                size: SizeClass::Reduced,
            }
        );
    }

    #[test]
    fn object_at_radius_gives_same_size_image() {
        // m = -1 exactly only if the reciprocals cancel exactly, so compare
        // the magnitude with a tolerance and classify a hand-built image.
        let image = formed(200.0, 80.0, 100.0);
        assert!((image.distance - 200.0).abs() < 1e-9);
        assert!((image.size + 80.0).abs() < 1e-9);
        let exact = FormedImage {
            distance: 200.0,
            size: -80.0,
            magnification: -1.0,
            object_size: 80.0,
        };
        assert_eq!(exact.classify().size, SizeClass::SameSize);
    }

    #[test]
    fn object_between_focus_and_radius_gives_magnified_real_image() {
        let image = formed(150.0, 50.0, 100.0);
        assert!((image.distance - 300.0).abs() < 1e-9);
        assert!((image.size + 100.0).abs() < 1e-9);
        assert_eq!(image.classify().size, SizeClass::Magnified);
        assert!(image.is_real());
    }

    #[test]
    fn inverted_object_keeps_sign_law() {
        // A real image of an upside-down object stands upright in world
        // coordinates but is still inverted relative to the object.
        let image = formed(250.0, -40.0, 125.0);
        assert!(image.size > 0.0);
        assert!(image.is_inverted());

        let image = formed(50.0, -40.0, 125.0);
        assert!(image.size < 0.0);
        assert!(!image.is_inverted());
    }

    #[test]
    fn zero_size_object_follows_sign_law() {
        assert!(formed(250.0, 0.0, 125.0).is_inverted());
        assert!(!formed(50.0, 0.0, 125.0).is_inverted());
    }

    #[test]
    fn undefined_result_has_no_geometry() {
        let image = compute_image(75.0, 20.0, 75.0).unwrap();
        assert_eq!(image, ImageResult::Undefined);
        assert_eq!(image.distance(), None);
        assert_eq!(image.size(), None);
        assert_eq!(image.magnification(), None);
        assert_eq!(image.is_real(), None);
        assert_eq!(image.is_inverted(), None);
        assert_eq!(image.classify(), None);
    }

    #[test]
    fn rejects_out_of_domain_inputs() {
        let err = compute_image(100.0, 10.0, 0.0).unwrap_err();
        assert_eq!(err.parameter, Parameter::FocalLength);
        let err = compute_image(-5.0, 10.0, 50.0).unwrap_err();
        assert_eq!(err.parameter, Parameter::ObjectDistance);
        assert_eq!(err.requirement, Requirement::Positive);
        let err = compute_image(100.0, f64::NAN, 50.0).unwrap_err();
        assert_eq!(err.parameter, Parameter::ObjectSize);
        assert_eq!(err.requirement, Requirement::Finite);
    }

    #[test]
    fn lens_and_object_constructors_validate() {
        assert!(LensParameters::new(-1.0).is_err());
        let lens = LensParameters::new(125.0).unwrap();
        assert_eq!(lens.radius(), 250.0);

        assert!(ObjectSpec::new(100.0, 50.0, 0.0).is_err());
        let object = ObjectSpec::new(250.0, 100.0, 0.5).unwrap();
        let distance = lens.image_of(&object).unwrap().distance().unwrap();
        assert!((distance - 250.0).abs() < 1e-9);

        let literal = ObjectSpec {
            distance: 0.0,
            size: 10.0,
            aspect_ratio: 1.0,
        };
        assert!(literal.validate().is_err());
    }
}
