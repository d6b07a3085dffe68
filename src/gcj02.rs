//! Provides the transformation between WGS84 and GCJ-02.
//!
//! GCJ-02 equals to WGS84 outside of the [`BoundingBox`].
use crate::offset::delta;
use crate::region::BoundingBox;
use crate::{Error, GeoPoint, Result};

/// Max error \[deg\] of [`gcj02_to_wgs84_exact`].
pub const MAX_ERROR: f64 = 1e-12;

/// Max iteration of [`gcj02_to_wgs84_exact`].
pub const MAX_ITERATION: usize = 100;

/// Returns the GCJ-02 point of the WGS84 `point`.
///
/// This is identity when `region` says `point` is out of China.
///
/// # Example
///
/// ```
/// # use marstrans::GeoPoint;
/// # use marstrans::gcj02::wgs84_to_gcj02;
/// # use marstrans::region::BoundingBox;
/// #
/// let origin = GeoPoint::new(30.593354, 114.304569);
/// let result = wgs84_to_gcj02(&origin, &BoundingBox::INCLUSIVE);
/// assert!((result.latitude() - 30.590943).abs() < 1e-6);
/// assert!((result.longitude() - 114.310012).abs() < 1e-6);
///
/// let origin = GeoPoint::new(0.0, 0.0);
/// assert_eq!(wgs84_to_gcj02(&origin, &BoundingBox::INCLUSIVE), origin);
/// ```
#[inline]
pub fn wgs84_to_gcj02(point: &GeoPoint, region: &BoundingBox) -> GeoPoint {
    let (latitude, longitude) = (point.latitude, point.longitude);

    if region.is_out_of_china(latitude, longitude) {
        return *point;
    }

    let (d_lat, d_lon) = delta(latitude, longitude);
    GeoPoint::new(latitude + d_lat, longitude + d_lon)
}

/// Returns the approximate WGS84 point of the GCJ-02 `point`.
///
/// This assumes the offset at the WGS84 point equals to the one at `point`,
/// and extrapolates linearly, `2 * point - wgs84_to_gcj02(point)`.
/// The error is up to a few meters in China,
/// see [`gcj02_to_wgs84_exact`] for the refined one.
///
/// # Example
///
/// ```
/// # use marstrans::GeoPoint;
/// # use marstrans::gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};
/// # use marstrans::region::BoundingBox;
/// #
/// let origin = GeoPoint::new(39.90923, 116.39737);
/// let gcj02 = wgs84_to_gcj02(&origin, &BoundingBox::INCLUSIVE);
/// let result = gcj02_to_wgs84(&gcj02, &BoundingBox::INCLUSIVE);
/// assert!((result.latitude() - origin.latitude()).abs() < 5e-5);
/// assert!((result.longitude() - origin.longitude()).abs() < 5e-5);
/// ```
#[inline]
pub fn gcj02_to_wgs84(point: &GeoPoint, region: &BoundingBox) -> GeoPoint {
    let g = wgs84_to_gcj02(point, region);
    GeoPoint::new(
        point.latitude * 2.0 - g.latitude,
        point.longitude * 2.0 - g.longitude,
    )
}

/// Returns the WGS84 point of the GCJ-02 `point` by iteration.
///
/// This starts from `point` and corrects by the residual of
/// [`wgs84_to_gcj02`] until both residuals are less than [`MAX_ERROR`].
/// This is identity when `region` says `point` is out of China.
///
/// # Errors
///
/// If the residuals are still high after [`MAX_ITERATION`] steps,
/// it happens only on the edge of `region`.
///
/// # Example
///
/// ```
/// # use marstrans::*;
/// # use marstrans::gcj02::{gcj02_to_wgs84_exact, wgs84_to_gcj02};
/// # use marstrans::region::BoundingBox;
/// #
/// let origin = GeoPoint::new(39.90923, 116.39737);
/// let gcj02 = wgs84_to_gcj02(&origin, &BoundingBox::INCLUSIVE);
/// let result = gcj02_to_wgs84_exact(&gcj02, &BoundingBox::INCLUSIVE)?;
/// assert!((result.latitude() - origin.latitude()).abs() < 1e-9);
/// assert!((result.longitude() - origin.longitude()).abs() < 1e-9);
/// # Ok::<(), Error>(())
/// ```
pub fn gcj02_to_wgs84_exact(point: &GeoPoint, region: &BoundingBox) -> Result<GeoPoint> {
    if region.is_out_of_china(point.latitude, point.longitude) {
        return Ok(*point);
    }

    let mut latitude = point.latitude;
    let mut longitude = point.longitude;

    for _ in 0..MAX_ITERATION {
        let g = wgs84_to_gcj02(&GeoPoint::new(latitude, longitude), region);
        let d_lat = g.latitude - point.latitude;
        let d_lon = g.longitude - point.longitude;

        if d_lat.abs() < MAX_ERROR && d_lon.abs() < MAX_ERROR {
            return Ok(GeoPoint::new(latitude, longitude));
        }

        latitude -= d_lat;
        longitude -= d_lon;
    }

    Err(Error::new_not_convergent(
        latitude,
        longitude,
        MAX_ERROR,
        MAX_ITERATION,
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    const GATES: [BoundingBox; 2] = [BoundingBox::INCLUSIVE, BoundingBox::EXCLUSIVE];

    // (wgs84, gcj02) in (latitude, longitude)
    const CASES: [((f64, f64), (f64, f64)); 2] = [
        ((30.593354, 114.304569), (30.590943, 114.310012)),
        ((39.904179, 116.407387), (39.905582, 116.413629)),
    ];

    #[test]
    fn test_forward() {
        for gate in GATES {
            for (origin, expected) in CASES {
                let actual = wgs84_to_gcj02(&origin.into(), &gate);
                assert!((actual.latitude - expected.0).abs() < 1e-6);
                assert!((actual.longitude - expected.1).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_beijing() {
        let origin = GeoPoint::new(39.90923, 116.39737);
        let actual = wgs84_to_gcj02(&origin, &BoundingBox::default());

        assert_ne!(actual, origin);
        let distance = f64::hypot(
            actual.latitude - origin.latitude,
            actual.longitude - origin.longitude,
        );
        assert!(0.0015 < distance && distance < 0.01, "{}", distance);
    }

    #[test]
    fn test_out_of_china() {
        for gate in GATES {
            for origin in [
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(31.998164, 61.972426),
                GeoPoint::new(51.5074, -0.1278),
                GeoPoint::new(-33.8688, 151.2093),
            ] {
                assert_eq!(wgs84_to_gcj02(&origin, &gate), origin);
                assert_eq!(gcj02_to_wgs84(&origin, &gate), origin);
                assert_eq!(gcj02_to_wgs84_exact(&origin, &gate).unwrap(), origin);
            }
        }
    }

    #[test]
    fn test_backward() {
        for (expected, origin) in CASES {
            let actual = gcj02_to_wgs84(&origin.into(), &BoundingBox::INCLUSIVE);
            assert!((actual.latitude - expected.0).abs() < 5e-5);
            assert!((actual.longitude - expected.1).abs() < 5e-5);
        }
    }

    #[test]
    fn test_backward_formulas() {
        // `2 * p - g` and `p - (g - p)` agree up to rounding
        let origin = GeoPoint::new(31.2304, 121.4737);
        let g = wgs84_to_gcj02(&origin, &BoundingBox::INCLUSIVE);
        let other = GeoPoint::new(
            origin.latitude - (g.latitude - origin.latitude),
            origin.longitude - (g.longitude - origin.longitude),
        );
        let actual = gcj02_to_wgs84(&origin, &BoundingBox::INCLUSIVE);
        assert!((actual.latitude - other.latitude).abs() < 1e-12);
        assert!((actual.longitude - other.longitude).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_grid() {
        let gate = BoundingBox::INCLUSIVE;
        for lat in (0..=20).map(|i| 18.0 + 1.6 * i as f64) {
            for lon in (0..=20).map(|i| 75.0 + 3.0 * i as f64) {
                let origin = GeoPoint::new(lat, lon);
                let gcj02 = wgs84_to_gcj02(&origin, &gate);

                let approx = gcj02_to_wgs84(&gcj02, &gate);
                assert!((approx.latitude - lat).abs() < 1e-4, "{lat} {lon}");
                assert!((approx.longitude - lon).abs() < 1e-4, "{lat} {lon}");

                let exact = gcj02_to_wgs84_exact(&gcj02, &gate).unwrap();
                assert!((exact.latitude - lat).abs() < 1e-9, "{lat} {lon}");
                assert!((exact.longitude - lon).abs() < 1e-9, "{lat} {lon}");
            }
        }
    }

    #[test]
    fn test_determinism() {
        let origin = GeoPoint::new(22.5431, 114.0579);
        let a = wgs84_to_gcj02(&origin, &BoundingBox::INCLUSIVE);
        let b = wgs84_to_gcj02(&origin, &BoundingBox::INCLUSIVE);
        assert_eq!(a.latitude.to_bits(), b.latitude.to_bits());
        assert_eq!(a.longitude.to_bits(), b.longitude.to_bits());
    }
}
