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

//! The geodesic module contains functions for calculating the length of the
//! geodesic between two points on the surface of an ellipsoid, using
//! Vincenty's iterative inverse method.

#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::calculate_reduced_latitude;
use crate::ellipsoid::coefficients::{calculate_delta_sigma, evaluate_a, evaluate_b, evaluate_c};
use crate::{Distance, Ellipsoid, Error, LatLng};
use angle_sc::Radians;

/// The maximum number of iterations to attempt.
pub const MAX_ITERATIONS: u32 = 100;

/// The change in longitude on the auxiliary sphere below which the
/// iteration has converged, in Radians.
pub const TOLERANCE: Radians = Radians(1.0e-12);

/// The successful outcomes of Vincenty's inverse method.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VincentyDistance {
    /// The positions are coincident, the distance between them is zero.
    Coincident,
    /// The iteration converged.
    Converged {
        /// The length of the geodesic.
        distance: Distance,
        /// The number of iterations taken to converge.
        iterations: u32,
    },
}

impl VincentyDistance {
    /// The length of the geodesic, zero if the positions are coincident.
    #[must_use]
    pub const fn distance(&self) -> Distance {
        match self {
            Self::Coincident => Distance::new(0.0),
            Self::Converged { distance, .. } => *distance,
        }
    }

    /// Whether the positions are coincident.
    #[must_use]
    pub const fn is_coincident(&self) -> bool {
        matches!(self, Self::Coincident)
    }
}

/// Calculate the length of the geodesic between a pair of positions on the
/// ellipsoid using Vincenty's inverse method.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
/// * `tolerance` - the change in longitude on the auxiliary sphere at which
///   the iteration has converged.
/// * `max_iterations` - the maximum number of iterations to attempt.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the `VincentyDistance` between the positions.
///
/// # Errors
///
/// `Error::NonFiniteInput` if a latitude or longitude is not finite.  
/// `Error::NonConvergent` if the iteration did not converge within
/// `max_iterations`, e.g. for nearly antipodal positions.
#[allow(clippy::similar_names)]
pub fn calculate_vincenty_distance(
    a: &LatLng,
    b: &LatLng,
    tolerance: Radians,
    max_iterations: u32,
    ellipsoid: &Ellipsoid,
) -> Result<VincentyDistance, Error> {
    if ![a.lat().0, a.lng().0, b.lat().0, b.lng().0]
        .iter()
        .all(|value| value.is_finite())
    {
        return Err(Error::NonFiniteInput);
    }

    let f = ellipsoid.f();
    let l = (b.lng().0 - a.lng().0).to_radians();

    // project latitudes onto the auxiliary sphere
    let u1 = calculate_reduced_latitude(a.lat().0.to_radians(), ellipsoid.one_minus_f());
    let u2 = calculate_reduced_latitude(b.lat().0.to_radians(), ellipsoid.one_minus_f());
    let (sin_u1, cos_u1) = (libm::sin(u1), libm::cos(u1));
    let (sin_u2, cos_u2) = (libm::sin(u2), libm::cos(u2));

    let mut lambda = l;
    for iteration in 1..=max_iterations {
        let (sin_lambda, cos_lambda) = (libm::sin(lambda), libm::cos(lambda));

        let t1 = cos_u2 * sin_lambda;
        let t2 = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        let sin_sigma = libm::sqrt(t1 * t1 + t2 * t2);
        if sin_sigma == 0.0 {
            tracing::debug!(iteration, "coincident positions");
            return Ok(VincentyDistance::Coincident);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = libm::atan2(sin_sigma, cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let sq_cos_alpha = 1.0 - sin_alpha * sin_alpha;

        // cos_2sigma_m is zero on an equatorial line
        let cos_2sigma_m = if sq_cos_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / sq_cos_alpha
        };

        let c = evaluate_c(f, sq_cos_alpha);
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if libm::fabs(lambda - lambda_prev) <= tolerance.0 {
            let u_2 = sq_cos_alpha * ellipsoid.ep_2();
            let delta_sigma =
                calculate_delta_sigma(evaluate_b(u_2), sin_sigma, cos_sigma, cos_2sigma_m);
            let distance =
                Distance::new(ellipsoid.b().0 * evaluate_a(u_2) * (sigma - delta_sigma));

            tracing::trace!(iteration, metres = distance.metres(), "converged");
            return Ok(VincentyDistance::Converged {
                distance,
                iterations: iteration,
            });
        }
    }

    tracing::warn!(max_iterations, "failed to converge");
    Err(Error::NonConvergent {
        iterations: max_iterations,
    })
}
