//! Provides the transformation between GCJ-02 and BD09.
//!
//! BD09 perturbs the polar form of a GCJ-02 point and shifts it
//! by a fixed offset. No region gate applies.
use std::f64::consts::PI;

use crate::GeoPoint;

/// The latitude shift \[deg\] of BD09.
pub const LATITUDE_SHIFT: f64 = 0.006;

/// The longitude shift \[deg\] of BD09.
pub const LONGITUDE_SHIFT: f64 = 0.0065;

/// Returns the BD09 point of the GCJ-02 `point`.
///
/// # Example
///
/// ```
/// # use marstrans::GeoPoint;
/// # use marstrans::bd09::gcj02_to_bd09;
/// #
/// let result = gcj02_to_bd09(&GeoPoint::new(30.593354, 114.304569));
/// assert!((result.latitude() - 30.599019).abs() < 1e-6);
/// assert!((result.longitude() - 114.311152).abs() < 1e-6);
/// ```
#[inline]
pub fn gcj02_to_bd09(point: &GeoPoint) -> GeoPoint {
    let (x, y) = (point.longitude, point.latitude);

    let z = (x * x + y * y).sqrt() + 0.00002 * (y * PI * 3000.0 / 180.0).sin();
    let theta = y.atan2(x) + 0.000003 * (x * PI * 3000.0 / 180.0).cos();

    GeoPoint::new(
        z * theta.sin() + LATITUDE_SHIFT,
        z * theta.cos() + LONGITUDE_SHIFT,
    )
}

/// Returns the GCJ-02 point of the BD09 `point`.
///
/// This removes the shift first, and then the perturbation with opposite signs.
/// The perturbation is evaluated at the shifted point,
/// hence the round trip differs by less than 1e-6 \[deg\] in China.
///
/// # Example
///
/// ```
/// # use marstrans::GeoPoint;
/// # use marstrans::bd09::bd09_to_gcj02;
/// #
/// let result = bd09_to_gcj02(&GeoPoint::new(30.599019, 114.311152));
/// assert!((result.latitude() - 30.593354).abs() < 1e-6);
/// assert!((result.longitude() - 114.304569).abs() < 1e-6);
/// ```
#[inline]
pub fn bd09_to_gcj02(point: &GeoPoint) -> GeoPoint {
    let x = point.longitude - LONGITUDE_SHIFT;
    let y = point.latitude - LATITUDE_SHIFT;

    let z = (x * x + y * y).sqrt() - 0.00002 * (y * PI * 3000.0 / 180.0).sin();
    let theta = y.atan2(x) - 0.000003 * (x * PI * 3000.0 / 180.0).cos();

    GeoPoint::new(z * theta.sin(), z * theta.cos())
}

#[cfg(test)]
mod test {
    use super::*;

    // (gcj02, bd09) in (latitude, longitude)
    const CASES: [((f64, f64), (f64, f64)); 2] = [
        ((30.593354, 114.304569), (30.599019, 114.311152)),
        ((39.904179, 116.407387), (39.910501, 116.413772)),
    ];

    #[test]
    fn test_forward() {
        for (origin, expected) in CASES {
            let actual = gcj02_to_bd09(&origin.into());
            assert!((actual.latitude - expected.0).abs() < 1e-6);
            assert!((actual.longitude - expected.1).abs() < 1e-6);
        }
    }

    #[test]
    fn test_backward() {
        for (expected, origin) in CASES {
            let actual = bd09_to_gcj02(&origin.into());
            assert!((actual.latitude - expected.0).abs() < 1e-6);
            assert!((actual.longitude - expected.1).abs() < 1e-6);
        }
    }

    #[test]
    fn test_round_trip() {
        for lat in (0..=20).map(|i| 18.0 + 1.6 * i as f64) {
            for lon in (0..=20).map(|i| 75.0 + 3.0 * i as f64) {
                let origin = GeoPoint::new(lat, lon);
                let actual = bd09_to_gcj02(&gcj02_to_bd09(&origin));
                assert!((actual.latitude - lat).abs() < 1e-6, "{lat} {lon}");
                assert!((actual.longitude - lon).abs() < 1e-6, "{lat} {lon}");
            }
        }
    }

    #[test]
    fn test_no_gate() {
        // applies everywhere, even where GCJ-02 is identity
        let origin = GeoPoint::new(0.0, 0.0);
        let actual = gcj02_to_bd09(&origin);
        assert_ne!(actual, origin);
        assert!((actual.latitude - LATITUDE_SHIFT).abs() < 1e-4);
        assert!((actual.longitude - LONGITUDE_SHIFT).abs() < 1e-4);
    }
}
