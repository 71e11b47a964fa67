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

//! The great_circle module contains functions for calculating distances,
//! headings and positions along great circles on the surface of a sphere.
//!
//! The sphere is an approximation of the Earth: its radius is normally the
//! Semimajor axis of the ellipsoid, i.e. the radius at the Equator.

#![allow(clippy::suboptimal_flops)]

use crate::{Distance, LatLng, Metres};
use angle_sc::Degrees;

/// Calculate the great circle distance between a pair of positions using
/// the Haversine formula.
/// * `a`, `b` - the start and finish positions.
/// * `radius` - the radius of the sphere.
///
/// returns the great circle distance between the positions.
#[must_use]
pub fn calculate_haversine_distance(a: &LatLng, b: &LatLng, radius: Metres) -> Distance {
    let lat1 = a.lat().0.to_radians();
    let lat2 = b.lat().0.to_radians();
    let half_delta_lat = 0.5 * (b.lat().0 - a.lat().0).to_radians();
    let half_delta_lng = 0.5 * (b.lng().0 - a.lng().0).to_radians();

    let sin_half_delta_lat = libm::sin(half_delta_lat);
    let sin_half_delta_lng = libm::sin(half_delta_lng);
    let h = sin_half_delta_lat * sin_half_delta_lat
        + libm::cos(lat1) * libm::cos(lat2) * sin_half_delta_lng * sin_half_delta_lng;
    // h may round above 1.0 for antipodal positions
    let c = 2.0 * libm::atan2(libm::sqrt(h), libm::sqrt((1.0 - h).max(0.0)));

    Distance::new(radius.0 * c)
}

/// Calculate the initial heading of the great circle from `a` to `b`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the heading in degrees clockwise from North, 0.0 <= heading < 360.0.
/// The heading between coincident positions is 0.0.
#[must_use]
pub fn calculate_heading(a: &LatLng, b: &LatLng) -> Degrees {
    let lat1 = a.lat().0.to_radians();
    let lat2 = b.lat().0.to_radians();
    let delta_lng = (b.lng().0 - a.lng().0).to_radians();

    let y = libm::sin(delta_lng) * libm::cos(lat2);
    let x = libm::cos(lat1) * libm::sin(lat2)
        - libm::sin(lat1) * libm::cos(lat2) * libm::cos(delta_lng);
    let heading = libm::atan2(y, x).to_degrees();

    // heading + 360.0 may round to exactly 360.0
    Degrees((heading + 360.0) % 360.0)
}

/// Calculate the position half way along the great circle between `a` and `b`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the mid point.
#[must_use]
pub fn calculate_midpoint(a: &LatLng, b: &LatLng) -> LatLng {
    let lat1 = a.lat().0.to_radians();
    let lat2 = b.lat().0.to_radians();
    let delta_lng = (b.lng().0 - a.lng().0).to_radians();

    let bx = libm::cos(lat2) * libm::cos(delta_lng);
    let by = libm::cos(lat2) * libm::sin(delta_lng);
    let cos_lat1_bx = libm::cos(lat1) + bx;

    let lat = libm::atan2(
        libm::sin(lat1) + libm::sin(lat2),
        libm::sqrt(cos_lat1_bx * cos_lat1_bx + by * by),
    );
    let lng = a.lng().0.to_radians() + libm::atan2(by, cos_lat1_bx);

    LatLng::new(Degrees(lat.to_degrees()), Degrees(lng.to_degrees()))
}

/// Calculate the position at a distance along a great circle from `a`.
/// * `a` - the start position.
/// * `heading` - the initial heading in degrees clockwise from North.
/// * `distance` - the distance along the great circle.
/// * `radius` - the radius of the sphere.
///
/// returns the destination. Its longitude is not normalized.
#[must_use]
pub fn calculate_endpoint(
    a: &LatLng,
    heading: Degrees,
    distance: Distance,
    radius: Metres,
) -> LatLng {
    let lat1 = a.lat().0.to_radians();
    let theta = heading.0.to_radians();
    let delta = distance.metres() / radius.0;

    let sin_lat1 = libm::sin(lat1);
    let cos_lat1 = libm::cos(lat1);
    let sin_delta = libm::sin(delta);
    let cos_delta = libm::cos(delta);

    let lat2 = libm::asin(sin_lat1 * cos_delta + cos_lat1 * sin_delta * libm::cos(theta));
    let lng2 = a.lng().0.to_radians()
        + libm::atan2(
            libm::sin(theta) * sin_delta * cos_lat1,
            cos_delta - sin_lat1 * libm::sin(lat2),
        );

    LatLng::new(Degrees(lat2.to_degrees()), Degrees(lng2.to_degrees()))
}
