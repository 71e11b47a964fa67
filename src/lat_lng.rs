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

//! The lat_lng module contains the `LatLng` type: a geodetic latitude and
//! longitude pair in degrees, together with the functions to bring
//! latitudes and longitudes into their valid ranges.

#![allow(clippy::float_cmp)]

use angle_sc::{Degrees, Validate};
use unit_sphere::LatLong;

/// Clamp a latitude into the range: -90.0 <= value <= 90.0
///
/// Latitudes are capped, not wrapped.
/// # Examples
/// ```
/// use geocalc::normalize_lat;
///
/// assert_eq!(90.0, normalize_lat(91.0));
/// assert_eq!(-90.0, normalize_lat(-91.0));
/// assert_eq!(45.0, normalize_lat(45.0));
/// ```
#[must_use]
pub fn normalize_lat(lat: f64) -> f64 {
    lat.clamp(-90.0, 90.0)
}

/// Wrap a longitude into the range: -180.0 < value <= 180.0
///
/// Note: the remainder takes the sign of `lng`, so -180.0 is returned
/// unchanged while 180.0 is pinned to 180.0.
/// # Examples
/// ```
/// use geocalc::normalize_lng;
///
/// assert_eq!(-170.0, normalize_lng(190.0));
/// assert_eq!(170.0, normalize_lng(-190.0));
/// assert_eq!(180.0, normalize_lng(180.0));
/// assert_eq!(-180.0, normalize_lng(-180.0));
/// ```
#[must_use]
pub fn normalize_lng(lng: f64) -> f64 {
    let value = lng % 360.0;
    if value == 180.0 {
        180.0
    } else if value < -180.0 {
        value + 360.0
    } else if value > 180.0 {
        value - 360.0
    } else {
        value
    }
}

/// A position as a geodetic latitude and longitude in degrees.
///
/// The latitude and longitude are not validated on construction,
/// see `normalized` and `is_valid`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    lat: Degrees,
    lng: Degrees,
}

impl Validate for LatLng {
    /// Test whether a `LatLng` is valid.  
    /// I.e. whether -90.0 <= `lat` <= 90.0 and -180.0 <= `lng` <= 180.0
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat.0) && (-180.0..=180.0).contains(&self.lng.0)
    }
}

impl LatLng {
    /// Constructor.
    /// * `lat` - the latitude in degrees.
    /// * `lng` - the longitude in degrees.
    #[must_use]
    pub const fn new(lat: Degrees, lng: Degrees) -> Self {
        Self { lat, lng }
    }

    /// Accessor for the latitude.
    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    /// Accessor for the longitude.
    #[must_use]
    pub const fn lng(&self) -> Degrees {
        self.lng
    }

    /// A copy of the `LatLng` with the latitude clamped and the longitude
    /// wrapped into their valid ranges.
    /// # Examples
    /// ```
    /// use geocalc::{Degrees, LatLng, Validate};
    ///
    /// let position = LatLng::new(Degrees(95.0), Degrees(200.0)).normalized();
    /// assert_eq!(LatLng::new(Degrees(90.0), Degrees(-160.0)), position);
    /// assert!(position.is_valid());
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::new(
            Degrees(normalize_lat(self.lat.0)),
            Degrees(normalize_lng(self.lng.0)),
        )
    }
}

impl From<&LatLong> for LatLng {
    fn from(a: &LatLong) -> Self {
        Self::new(a.lat(), a.lon())
    }
}

impl From<LatLng> for LatLong {
    /// @pre the `LatLng` is valid, see `normalized`.
    fn from(a: LatLng) -> Self {
        Self::new(a.lat, a.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lat() {
        assert_eq!(90.0, normalize_lat(91.0));
        assert_eq!(-90.0, normalize_lat(-91.0));
        assert_eq!(45.0, normalize_lat(45.0));
        assert_eq!(90.0, normalize_lat(90.0));
        assert_eq!(-90.0, normalize_lat(-90.0));
        assert_eq!(90.0, normalize_lat(1000.0));
        assert!(normalize_lat(f64::NAN).is_nan());
    }

    #[test]
    fn test_normalize_lng() {
        assert_eq!(-170.0, normalize_lng(190.0));
        assert_eq!(170.0, normalize_lng(-190.0));
        assert_eq!(180.0, normalize_lng(180.0));
        assert_eq!(-180.0, normalize_lng(-180.0));

        assert_eq!(0.0, normalize_lng(0.0));
        assert_eq!(0.0, normalize_lng(360.0));
        assert_eq!(180.0, normalize_lng(540.0));
        assert_eq!(-180.0, normalize_lng(-540.0));
        assert_eq!(179.0, normalize_lng(-181.0));
        assert_eq!(-179.0, normalize_lng(181.0));
        assert_eq!(10.0, normalize_lng(730.0));
        assert_eq!(-45.0, normalize_lng(-45.0));
        assert!(normalize_lng(f64::NAN).is_nan());
        assert!(normalize_lng(f64::INFINITY).is_nan());
    }

    #[test]
    fn test_lat_lng_new() {
        let a = LatLng::new(Degrees(50.0), Degrees(-5.0));
        assert_eq!(Degrees(50.0), a.lat());
        assert_eq!(Degrees(-5.0), a.lng());
        assert!(a.is_valid());

        // Not validated on construction
        let b = LatLng::new(Degrees(91.0), Degrees(190.0));
        assert_eq!(Degrees(91.0), b.lat());
        assert!(!b.is_valid());

        let c = b.normalized();
        assert_eq!(LatLng::new(Degrees(90.0), Degrees(-170.0)), c);
        assert!(c.is_valid());
    }

    #[test]
    fn test_lat_lng_traits() {
        let a = LatLng::new(Degrees(50.0), Degrees(-5.0));

        let a_clone = a;
        assert!(a_clone == a);
        assert!(a != LatLng::new(Degrees(50.0), Degrees(5.0)));
        assert!(a != LatLng::new(Degrees(-50.0), Degrees(-5.0)));

        println!("LatLng: {:?}", a);
    }

    #[test]
    fn test_lat_lng_unit_sphere_conversion() {
        let a = LatLng::new(Degrees(42.0), Degrees(29.0));
        let lat_long = LatLong::from(a);
        assert_eq!(Degrees(42.0), lat_long.lat());
        assert_eq!(Degrees(29.0), lat_long.lon());
        assert_eq!(a, LatLng::from(&lat_long));
    }
}
