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

// extern crate we're testing, same as any other code would do.
extern crate geocalc;

use angle_sc::is_within_tolerance;
use geocalc::*;

#[test]
fn test_haversine_symmetry() {
    let positions = [
        (50.0359, -5.4253),
        (58.3838, -3.0412),
        (-33.8688, 151.2093),
        (89.9, 0.0),
        (0.0, 180.0),
        (-60.0, -120.0),
    ];

    for a in positions {
        for b in positions {
            let ab = distance_haversine(a.0, a.1, b.0, b.1);
            let ba = distance_haversine(b.0, b.1, a.0, a.1);
            assert!(is_within_tolerance(ab.metres(), ba.metres(), 1e-6));
        }
    }
}

#[test]
fn test_vincenty_outcomes_are_distinct() {
    // Coincident
    let result = distance_vincenty(12.5, 45.0, 12.5, 45.0);
    assert_eq!(Ok(VincentyDistance::Coincident), result);
    assert_eq!(0.0, result.unwrap().distance().metres());

    // Nearly antipodal
    let result = distance_vincenty(0.0, 0.0, 0.5, 179.7);
    assert!(matches!(result, Err(Error::NonConvergent { .. })));

    // Non-finite
    let result = distance_vincenty(f64::NAN, 0.0, 0.5, 179.7);
    assert_eq!(Err(Error::NonFiniteInput), result);

    // Land's End to John o' Groats read as decimal degrees
    let result = distance_vincenty(50.0359, -5.4253, 58.3838, -3.0412).unwrap();
    assert!(!result.is_coincident());
    assert!(is_within_tolerance(
        941965.1681683181,
        result.distance().metres(),
        1e-4
    ));
}

#[test]
fn test_haversine_antipodal_is_finite() {
    for lat in [-87.5, -45.0, -0.1, 0.0, 12.3, 60.0, 90.0] {
        for i in 0..36 {
            let lng = f64::from(i) * 10.0;
            let result = distance_haversine(lat, lng, -lat, lng + 180.0).metres();
            assert!(result.is_finite());
            assert!(is_within_tolerance(
                core::f64::consts::PI * 6_378_137.0,
                result,
                1.0
            ));
        }
    }
}

#[test]
fn test_vincenty_haversine_agreement() {
    let pairs = [
        (51.5074, -0.1278, 48.8566, 2.3522),
        (55.7558, 37.6173, 59.9343, 30.3351),
        (-33.8688, 151.2093, -37.8136, 144.9631),
        (35.6762, 139.6503, 37.5665, 126.978),
    ];
    for (lat1, lng1, lat2, lng2) in pairs {
        let haversine = distance_haversine(lat1, lng1, lat2, lng2).metres();
        let vincenty = distance_vincenty(lat1, lng1, lat2, lng2)
            .unwrap()
            .distance()
            .metres();
        assert!((haversine - vincenty).abs() / haversine < 0.005);
    }
}

#[test]
fn test_heading_range() {
    for lat in [-80.0, -30.0, 0.0, 30.0, 80.0] {
        for i in 0..36 {
            let lng = f64::from(i) * 10.0 - 175.0;
            let result = heading(1.0, 2.0, lat, lng);
            assert!((0.0..360.0).contains(&result));
        }
    }
    assert_eq!(0.0, heading(1.0, 2.0, 1.0, 2.0));
}

#[test]
fn test_midpoint_and_endpoint() {
    let a = LatLng::new(Degrees(51.5074), Degrees(-0.1278));
    let b = LatLng::new(Degrees(48.8566), Degrees(2.3522));
    let calc = GeoCalc::default();

    // Half way along the great circle from a
    let mid = calc.midpoint(&a, &b);
    let half = Distance::new(0.5 * calc.distance_haversine(&a, &b).metres());
    let result = calc.endpoint(&a, calc.heading(&a, &b), half);
    assert!(is_within_tolerance(mid.lat().0, result.lat().0, 1e-9));
    assert!(is_within_tolerance(mid.lng().0, result.lng().0, 1e-9));

    let free = midpoint(51.5074, -0.1278, 48.8566, 2.3522);
    assert_eq!(mid, free);
}

#[test]
fn test_normalize() {
    assert_eq!(90.0, normalize_lat(91.0));
    assert_eq!(-90.0, normalize_lat(-91.0));
    assert_eq!(45.0, normalize_lat(45.0));

    assert_eq!(-170.0, normalize_lng(190.0));
    assert_eq!(170.0, normalize_lng(-190.0));
    assert_eq!(180.0, normalize_lng(180.0));
    assert_eq!(-180.0, normalize_lng(-180.0));
}

#[test]
fn test_distance_units() {
    let distance = distance_haversine(0.0, 0.0, 0.0, 1.0);
    assert!(is_within_tolerance(111.31949079327357, distance.kilometres(), 1e-9));
    assert!(is_within_tolerance(
        distance.metres() / 1852.0,
        distance.nautical_miles(),
        1e-9
    ));
    assert!(is_within_tolerance(
        distance.feet() / 5280.0,
        distance.miles(),
        1e-9
    ));
    assert_eq!(Metres(distance.metres()), Metres::from(distance));
}
