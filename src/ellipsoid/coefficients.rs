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

//! This module contains the series coefficients used by Vincenty's inverse
//! method on the surface of an ellipsoid.
//!
//! It uses the equations given by T. Vincenty in
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with Application of Nested Equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf).

#![allow(clippy::suboptimal_flops)]

/// The longitude correction term `C`.
/// Vincenty, Eq. 10.
/// * `f` - the flattening of the ellipsoid.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the Equator.
/// # Examples
/// ```
/// use geocalc::ellipsoid::wgs84;
/// use geocalc::ellipsoid::coefficients::evaluate_c;
///
/// assert_eq!(0.0, evaluate_c(wgs84::F, 0.0));
/// ```
#[must_use]
pub fn evaluate_c(f: f64, sq_cos_alpha: f64) -> f64 {
    f / 16.0 * sq_cos_alpha * (4.0 + f * (4.0 - 3.0 * sq_cos_alpha))
}

/// The scale factor `A`.
/// Vincenty, Eq. 3.
/// * `u_2` - the square of the `u` parameter: cos² α · e'².
#[must_use]
pub fn evaluate_a(u_2: f64) -> f64 {
    1.0 + u_2 / 16384.0 * (4096.0 + u_2 * (-768.0 + u_2 * (320.0 - 175.0 * u_2)))
}

/// The coefficient `B`.
/// Vincenty, Eq. 4.
/// * `u_2` - the square of the `u` parameter: cos² α · e'².
#[must_use]
pub fn evaluate_b(u_2: f64) -> f64 {
    u_2 / 1024.0 * (256.0 + u_2 * (-128.0 + u_2 * (74.0 - 47.0 * u_2)))
}

/// The correction `Δσ` between the arc length on the auxiliary sphere
/// and the scaled geodesic length.
/// Vincenty, Eq. 6.
/// * `b` - the `B` coefficient, see `evaluate_b`.
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of the arc length.
/// * `cos_2sigma_m` - the cosine of twice the arc length from the Equator
///   to the mid point.
#[must_use]
pub fn calculate_delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let sq_cos_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * sq_cos_2sigma_m)
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * sq_cos_2sigma_m)))
}
