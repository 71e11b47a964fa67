// Copyright (c) 2024-2026 Ken Barker

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

//! geocalc
//!
//! A library for calculating distances, headings, midpoints and destinations
//! between positions on the surface of the Earth.
//!
//! Positions are geodetic latitudes and longitudes in degrees, distances are
//! in metres. The Earth is modelled by the
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid, see the `ellipsoid::wgs84` module.
//!
//! ## Great circles
//!
//! The `great_circle` module approximates the Earth as a sphere with the
//! radius of the Equator. It calculates:
//!
//! - the great circle distance between two positions, using the
//!   [Haversine formula](https://en.wikipedia.org/wiki/Haversine_formula);
//! - the initial heading from one position to another;
//! - the mid point between two positions;
//! - and the destination given a start position, heading and distance.
//!
//! ## Geodesics
//!
//! The `geodesic` module calculates the length of the geodesic between two
//! positions on the ellipsoid, using
//! [Vincenty's inverse method](https://en.wikipedia.org/wiki/Vincenty%27s_formulae).
//!
//! Vincenty's method is iterative and does not converge for nearly antipodal
//! positions, so `distance_vincenty` returns a `Result`: coincident positions
//! are a distinct, successful `VincentyDistance::Coincident` outcome while
//! non-convergence is an `Error::NonConvergent`.
//!
//! ## Design
//!
//! The functions are pure and stateless. They are available as free
//! functions taking latitudes and longitudes in degrees on the WGS-84
//! ellipsoid, e.g.:
//!
//! ```
//! use geocalc::*;
//!
//! let distance = distance_haversine(51.5074, -0.1278, 48.8566, 2.3522);
//! println!("London-Paris distance: {:?} km", distance.kilometres());
//!
//! let heading = heading(51.5074, -0.1278, 48.8566, 2.3522);
//! println!("London-Paris heading: {:?}", heading);
//! ```
//!
//! Or as methods of a `GeoCalc`, which holds the `Ellipsoid` and
//! the parameters of Vincenty's iteration.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to convert
//!   `LatLng`s to and from `LatLong`s;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod distance;
pub mod ellipsoid;
pub mod error;
pub mod geodesic;
pub mod great_circle;
pub mod lat_lng;

pub use angle_sc::{Degrees, Radians, Validate};
pub use distance::Distance;
pub use error::Error;
pub use geodesic::VincentyDistance;
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use lat_lng::{normalize_lat, normalize_lng, LatLng};
pub use unit_sphere::LatLong;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,
}

impl Ellipsoid {
    /// The WGS-84 `Ellipsoid`.
    pub const WGS84: Self = Self::new(
        ellipsoid::wgs84::A,
        ellipsoid::wgs84::B,
        ellipsoid::wgs84::F,
    );

    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `b` - the Semiminor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub const fn new(a: Metres, b: Metres, f: f64) -> Self {
        Self { a, b, f }
    }

    /// Construct an `Ellipsoid` from its Semimajor axis and flattening,
    /// calculating the Semiminor axis.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub fn from_major_axis_and_flattening(a: Metres, f: f64) -> Self {
        Self::new(a, ellipsoid::calculate_minor_axis(a, f), f)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub fn one_minus_f(&self) -> f64 {
        1.0 - self.f
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub fn ep_2(&self) -> f64 {
        ellipsoid::calculate_sq_2nd_eccentricity(self.a, self.b)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

/// A geodetic calculator on an `Ellipsoid`.
///
/// It holds no state between calculations, only the `Ellipsoid` and the
/// parameters of Vincenty's iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoCalc {
    /// The `Ellipsoid`.
    ellipsoid: Ellipsoid,
    /// The tolerance of Vincenty's iteration.
    tolerance: Radians,
    /// The maximum number of iterations of Vincenty's method.
    max_iterations: u32,
}

impl GeoCalc {
    /// A `GeoCalc` on the WGS-84 `Ellipsoid`.
    pub const WGS84: Self = Self::new(Ellipsoid::WGS84);

    /// Constructor, with the default tolerance and maximum iterations.
    /// * `ellipsoid` - the `Ellipsoid`.
    #[must_use]
    pub const fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            tolerance: geodesic::TOLERANCE,
            max_iterations: geodesic::MAX_ITERATIONS,
        }
    }

    /// Set the tolerance of Vincenty's iteration.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: Radians) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum number of iterations of Vincenty's method.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Accessor for the `Ellipsoid`.
    #[must_use]
    pub const fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Accessor for the tolerance of Vincenty's iteration.
    #[must_use]
    pub const fn tolerance(&self) -> Radians {
        self.tolerance
    }

    /// Accessor for the maximum number of iterations of Vincenty's method.
    #[must_use]
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// The great circle distance between a pair of positions on a sphere
    /// with the radius of the Equator.
    #[must_use]
    pub fn distance_haversine(&self, a: &LatLng, b: &LatLng) -> Distance {
        great_circle::calculate_haversine_distance(a, b, self.ellipsoid.a())
    }

    /// The geodesic distance between a pair of positions on the `Ellipsoid`.
    ///
    /// # Errors
    ///
    /// See `geodesic::calculate_vincenty_distance`.
    pub fn distance_vincenty(&self, a: &LatLng, b: &LatLng) -> Result<VincentyDistance, Error> {
        geodesic::calculate_vincenty_distance(
            a,
            b,
            self.tolerance,
            self.max_iterations,
            &self.ellipsoid,
        )
    }

    /// The initial heading of the great circle from `a` to `b`,
    /// 0.0 <= heading < 360.0.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn heading(&self, a: &LatLng, b: &LatLng) -> Degrees {
        great_circle::calculate_heading(a, b)
    }

    /// The mid point of the great circle between `a` and `b`.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn midpoint(&self, a: &LatLng, b: &LatLng) -> LatLng {
        great_circle::calculate_midpoint(a, b)
    }

    /// The destination along the great circle from `a`.
    /// * `a` - the start position.
    /// * `heading` - the initial heading.
    /// * `distance` - a `Distance` or a value in metres.
    #[must_use]
    pub fn endpoint(&self, a: &LatLng, heading: Degrees, distance: impl Into<Distance>) -> LatLng {
        great_circle::calculate_endpoint(a, heading, distance.into(), self.ellipsoid.a())
    }
}

impl Default for GeoCalc {
    fn default() -> Self {
        Self::WGS84
    }
}

/// Calculate the great circle distance between a pair of positions using
/// the Haversine formula on a sphere with the WGS-84 equatorial radius.
/// * `lat1`, `lng1` - the start position in degrees.
/// * `lat2`, `lng2` - the finish position in degrees.
/// # Examples
/// ```
/// use geocalc::distance_haversine;
///
/// let distance = distance_haversine(0.0, 0.0, 0.0, 1.0);
/// assert!((111_319.490_793 - distance.metres()).abs() < 1e-3);
/// ```
#[must_use]
pub fn distance_haversine(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Distance {
    GeoCalc::WGS84.distance_haversine(
        &LatLng::new(Degrees(lat1), Degrees(lng1)),
        &LatLng::new(Degrees(lat2), Degrees(lng2)),
    )
}

/// Calculate the geodesic distance between a pair of positions on the
/// WGS-84 ellipsoid using Vincenty's inverse method.
/// * `lat1`, `lng1` - the start position in degrees.
/// * `lat2`, `lng2` - the finish position in degrees.
/// # Examples
/// ```
/// use geocalc::{distance_vincenty, Error, VincentyDistance};
///
/// let result = distance_vincenty(50.0, -5.0, 50.0, -5.0);
/// assert_eq!(Ok(VincentyDistance::Coincident), result);
///
/// let result = distance_vincenty(0.0, 0.0, 0.5, 179.7);
/// assert_eq!(Err(Error::NonConvergent { iterations: 100 }), result);
/// ```
///
/// # Errors
///
/// `Error::NonFiniteInput` if a latitude or longitude is not finite.  
/// `Error::NonConvergent` if the iteration did not converge.
pub fn distance_vincenty(
    lat1: f64,
    lng1: f64,
    lat2: f64,
    lng2: f64,
) -> Result<VincentyDistance, Error> {
    GeoCalc::WGS84.distance_vincenty(
        &LatLng::new(Degrees(lat1), Degrees(lng1)),
        &LatLng::new(Degrees(lat2), Degrees(lng2)),
    )
}

/// Calculate the initial heading of the great circle between a pair of
/// positions.
/// * `lat1`, `lng1` - the start position in degrees.
/// * `lat2`, `lng2` - the finish position in degrees.
///
/// returns the heading in degrees clockwise from North, 0.0 <= heading < 360.0.
#[must_use]
pub fn heading(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    GeoCalc::WGS84
        .heading(
            &LatLng::new(Degrees(lat1), Degrees(lng1)),
            &LatLng::new(Degrees(lat2), Degrees(lng2)),
        )
        .0
}

/// Calculate the mid point of the great circle between a pair of positions.
/// * `lat1`, `lng1` - the start position in degrees.
/// * `lat2`, `lng2` - the finish position in degrees.
#[must_use]
pub fn midpoint(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> LatLng {
    GeoCalc::WGS84.midpoint(
        &LatLng::new(Degrees(lat1), Degrees(lng1)),
        &LatLng::new(Degrees(lat2), Degrees(lng2)),
    )
}

/// Calculate the destination along a great circle on a sphere with the
/// WGS-84 equatorial radius.
/// * `lat`, `lng` - the start position in degrees.
/// * `heading` - the initial heading in degrees.
/// * `distance` - a `Distance` or a value in metres.
/// # Examples
/// ```
/// use geocalc::{endpoint, Distance};
///
/// let a = endpoint(50.0, -5.0, 45.0, 10_000.0);
/// let b = endpoint(50.0, -5.0, 45.0, Distance::from_kilometres(10.0));
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn endpoint(lat: f64, lng: f64, heading: f64, distance: impl Into<Distance>) -> LatLng {
    GeoCalc::WGS84.endpoint(
        &LatLng::new(Degrees(lat), Degrees(lng)),
        Degrees(heading),
        distance,
    )
}
