// Copyright (c) 2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The ellipsoid module contains functions for deriving the parameters of an
//! ellipsoid of revolution from its Semimajor axis (the equivalent of its
//! radius), Semiminor axis and flattening ratio.

#![allow(clippy::suboptimal_flops)]

pub mod coefficients;
pub mod wgs84;

use crate::Metres;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use geocalc::ellipsoid::{calculate_minor_axis, wgs84};
///
/// let b = calculate_minor_axis(wgs84::A, wgs84::F);
/// assert!((wgs84::B.0 - b.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the second Eccentricity of an ellipsoid from its
/// Semimajor and Semiminor axes.
/// * `a` - the Semimajor axis.
/// * `b` - the Semiminor axis.
/// # Examples
/// ```
/// use geocalc::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
///
/// let ep_2 = calculate_sq_2nd_eccentricity(wgs84::A, wgs84::B);
/// assert!((0.006739496742333464 - ep_2).abs() < 1e-15);
/// ```
#[must_use]
pub fn calculate_sq_2nd_eccentricity(a: Metres, b: Metres) -> f64 {
    let b_2 = b.0 * b.0;
    (a.0 * a.0 - b_2) / b_2
}

/// Convert a geodetic latitude to a reduced (parametric) latitude on the
/// auxiliary sphere.
/// * `lat` - the geodetic latitude in radians.
/// * `one_minus_f` - one minus the flattening ratio.
///
/// returns the reduced latitude in radians.
#[must_use]
pub fn calculate_reduced_latitude(lat: f64, one_minus_f: f64) -> f64 {
    libm::atan(one_minus_f * libm::tan(lat))
}
