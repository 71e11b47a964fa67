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

//! The distance module contains the `Distance` type: a length on the surface
//! of the Earth in metres, with accessors in other units of length.

use crate::{Metres, NauticalMiles};
use core::ops::{Add, Sub};

/// The number of metres in a kilometre.
pub const METRES_PER_KILOMETRE: f64 = 1000.0;

/// The number of metres in an international foot.
pub const METRES_PER_FOOT: f64 = 0.3048;

/// The number of metres in an international statute mile.
pub const METRES_PER_MILE: f64 = 1609.344;

/// A length in metres.
///
/// Equality and ordering compare the length in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance {
    metres: f64,
}

impl Distance {
    /// Constructor.
    /// * `metres` - the length in metres.
    #[must_use]
    pub const fn new(metres: f64) -> Self {
        Self { metres }
    }

    /// Construct a `Distance` from a length in kilometres.
    /// # Examples
    /// ```
    /// use geocalc::Distance;
    ///
    /// assert_eq!(1500.0, Distance::from_kilometres(1.5).metres());
    /// ```
    #[must_use]
    pub fn from_kilometres(kilometres: f64) -> Self {
        Self::new(kilometres * METRES_PER_KILOMETRE)
    }

    /// Construct a `Distance` from a length in nautical miles.
    #[must_use]
    pub fn from_nautical_miles(nautical_miles: f64) -> Self {
        Self::from(Metres::from(NauticalMiles(nautical_miles)))
    }

    /// The length in metres.
    #[must_use]
    pub const fn metres(&self) -> f64 {
        self.metres
    }

    /// The length in kilometres.
    #[must_use]
    pub fn kilometres(&self) -> f64 {
        self.metres / METRES_PER_KILOMETRE
    }

    /// The length in feet.
    #[must_use]
    pub fn feet(&self) -> f64 {
        self.metres / METRES_PER_FOOT
    }

    /// The length in statute miles.
    #[must_use]
    pub fn miles(&self) -> f64 {
        self.metres / METRES_PER_MILE
    }

    /// The length in nautical miles.
    /// # Examples
    /// ```
    /// use geocalc::Distance;
    ///
    /// assert!((1.0 - Distance::new(1852.0).nautical_miles()).abs() < 1e-15);
    /// ```
    #[must_use]
    pub fn nautical_miles(&self) -> f64 {
        NauticalMiles::from(Metres(self.metres)).0
    }
}

impl From<f64> for Distance {
    /// A raw value is a length in metres.
    fn from(metres: f64) -> Self {
        Self::new(metres)
    }
}

impl From<Metres> for Distance {
    fn from(metres: Metres) -> Self {
        Self::new(metres.0)
    }
}

impl From<Distance> for Metres {
    fn from(distance: Distance) -> Self {
        Self(distance.metres)
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.metres + other.metres)
    }
}

impl Sub for Distance {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.metres - other.metres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_distance_conversions() {
        let distance = Distance::new(1852.0);
        assert_eq!(1852.0, distance.metres());
        assert_eq!(1.852, distance.kilometres());
        assert!(is_within_tolerance(
            6076.115485564304,
            distance.feet(),
            1e-9
        ));
        assert!(is_within_tolerance(
            1.1507794480235425,
            distance.miles(),
            1e-12
        ));
        assert!(is_within_tolerance(1.0, distance.nautical_miles(), 1e-15));

        assert_eq!(5280.0, Distance::new(METRES_PER_MILE).feet());
        assert!(is_within_tolerance(
            distance.metres(),
            Distance::from_nautical_miles(1.0).metres(),
            1e-9
        ));
        assert_eq!(Distance::new(2500.0), Distance::from_kilometres(2.5));
    }

    #[test]
    fn test_distance_from_and_into() {
        assert_eq!(Distance::new(42.0), Distance::from(42.0));
        assert_eq!(Distance::new(42.0), Distance::from(Metres(42.0)));
        assert_eq!(Metres(42.0), Metres::from(Distance::new(42.0)));
    }

    #[test]
    fn test_distance_traits() {
        let zero = Distance::default();
        assert_eq!(0.0, zero.metres());

        let a = Distance::new(100.0);
        let b = Distance::new(250.0);
        assert!(a < b);
        assert!(zero < a);
        assert_eq!(Distance::new(350.0), a + b);
        assert_eq!(Distance::new(150.0), b - a);

        let a_clone = a;
        assert!(a_clone == a);

        println!("Distance: {:?}", a);
    }
}
