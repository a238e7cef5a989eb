// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thinlens_optics --heading-base-level=0

//! Thinlens Optics: the idealized thin convex lens.
//!
//! This crate is the geometry engine behind the lens visualizer. Given an
//! object's distance and size and the lens focal length it predicts where the
//! image forms, how large it is, and what kind of image it is; then it lays out
//! the construction rays a textbook diagram would draw.
//!
//! - [`compute_image`]: the Gaussian thin-lens equation and magnification.
//! - [`ImageResult`] / [`FormedImage`]: the prediction, including the
//!   singular case where the object sits on the focal point.
//! - [`build_rays`]: parallel, chief and focal rays as [`RaySegment`]s.
//! - [`lens_markers`]: focal and radius points on the axis.
//!
//! Everything is a pure function of its inputs. There is no state to keep
//! between calls; callers rebuild on every parameter change.
//!
//! ## Coordinates
//!
//! The lens sits in the plane `x = 0` with the optical axis along `y = 0`.
//! The object stands at `x = -object_distance`; a positive image distance is
//! to the right of the lens (a real image), a negative one to the left (a
//! virtual image). Heights are signed with `+y` up.
//!
//! ## Example
//!
//! ```rust
//! use thinlens_optics::{Nature, Orientation, SizeClass, build_rays, compute_image};
//!
//! // Object inside the focal length: a magnifying glass.
//! let image = compute_image(50.0, 100.0, 125.0)?;
//! let class = image.classify().unwrap();
//! assert_eq!(class.nature, Nature::Virtual);
//! assert_eq!(class.orientation, Orientation::Upright);
//! assert_eq!(class.size, SizeClass::Magnified);
//!
//! let rays = build_rays(50.0, 100.0, &image);
//! assert_eq!(rays.len(), 5);
//! # Ok::<(), thinlens_optics::InvalidParameter>(())
//! ```
//!
//! ## Scope
//!
//! Only the ideal thin convex lens is modelled: no concave or compound
//! systems, no thickness, no aberrations and no refraction tracing.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod markers;
mod model;
mod rays;

pub use error::{InvalidParameter, Parameter, Requirement};
pub use markers::{Marker, MarkerKind, lens_markers};
pub use model::{
    FormedImage, ImageClassification, ImageResult, LensParameters, Nature, ObjectSpec,
    Orientation, SizeClass, compute_image,
};
pub use rays::{RayKind, RayLeg, RaySegment, Rays, build_rays};
