// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameter validation errors.

use core::fmt;

/// Names an input scalar of the lens model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Lens focal length.
    FocalLength,
    /// Distance from the lens to the object.
    ObjectDistance,
    /// Signed object height.
    ObjectSize,
    /// Width/height ratio of the object's rendered footprint.
    AspectRatio,
}

impl Parameter {
    /// Human readable name, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FocalLength => "focal length",
            Self::ObjectDistance => "object distance",
            Self::ObjectSize => "object size",
            Self::AspectRatio => "aspect ratio",
        }
    }
}

/// The constraint a rejected value failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// The value must be neither NaN nor infinite.
    Finite,
    /// The value must be strictly greater than zero.
    Positive,
}

/// An input scalar is outside the domain of the thin-lens model.
///
/// Returned before any computation happens, so that no NaN or infinity
/// produced by a bad input reaches a renderer. Callers decide whether to
/// clamp the input or surface the message.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InvalidParameter {
    /// Which input was rejected.
    pub parameter: Parameter,
    /// The rejected value.
    pub value: f64,
    /// The constraint it failed.
    pub requirement: Requirement,
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.requirement {
            Requirement::Finite => write!(
                f,
                "{} must be a finite number, got {}",
                self.parameter.name(),
                self.value
            ),
            Requirement::Positive => write!(
                f,
                "{} must be greater than zero, got {}",
                self.parameter.name(),
                self.value
            ),
        }
    }
}

impl core::error::Error for InvalidParameter {}

/// Checks that `value` is finite.
pub(crate) fn finite(parameter: Parameter, value: f64) -> Result<f64, InvalidParameter> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidParameter {
            parameter,
            value,
            requirement: Requirement::Finite,
        })
    }
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn positive(parameter: Parameter, value: f64) -> Result<f64, InvalidParameter> {
    let value = finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidParameter {
            parameter,
            value,
            requirement: Requirement::Positive,
        })
    }
}
