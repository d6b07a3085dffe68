//! Provides the empirical offset series of GCJ-02.
//!
//! Both series take the recentered coordinate,
//! `x = longitude - 105.0` and `y = latitude - 35.0`,
//! and return a raw offset which [`delta`] scales into degree.
use std::f64::consts::PI;

/// The semi-major axis \[m\] of the Krasovsky 1940 ellipsoid.
pub const A: f64 = 6378245.0;

/// The eccentricity squared of the Krasovsky 1940 ellipsoid.
#[allow(clippy::excessive_precision)]
pub const EE: f64 = 0.00669342162296594323;

/// The longitude \[deg\] the series is centered on.
pub const CENTER_LONGITUDE: f64 = 105.0;

/// The latitude \[deg\] the series is centered on.
pub const CENTER_LATITUDE: f64 = 35.0;

/// Returns the raw latitude offset at the recentered coordinate (`x`, `y`).
///
/// # Example
///
/// ```
/// # use marstrans::offset::offset_latitude;
/// #
/// // at the center, only the constant term and sqrt(0) remain
/// assert_eq!(offset_latitude(0.0, 0.0), -100.0);
/// ```
#[inline]
pub fn offset_latitude(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Returns the raw longitude offset at the recentered coordinate (`x`, `y`).
///
/// # Example
///
/// ```
/// # use marstrans::offset::offset_longitude;
/// #
/// assert_eq!(offset_longitude(0.0, 0.0), 300.0);
/// ```
#[inline]
pub fn offset_longitude(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Returns the GCJ-02 offset (latitude, longitude) \[deg\] at a point.
///
/// The raw offsets are scaled by the meridian and the parallel radii
/// of curvature of the Krasovsky ellipsoid at `latitude`.
/// This applies no region gate.
#[inline]
pub fn delta(latitude: f64, longitude: f64) -> (f64, f64) {
    let x = longitude - CENTER_LONGITUDE;
    let y = latitude - CENTER_LATITUDE;

    let d_lat = offset_latitude(x, y);
    let d_lon = offset_longitude(x, y);

    let rad_lat = latitude / 180.0 * PI;
    let magic = rad_lat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    let d_lat = (d_lat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    let d_lon = (d_lon * 180.0) / (A / sqrt_magic * rad_lat.cos() * PI);

    (d_lat, d_lon)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_abs_in_sqrt() {
        // negative recentered longitude must stay finite
        assert!(offset_latitude(-33.0, 5.0).is_finite());
        assert!(offset_longitude(-33.0, 5.0).is_finite());
        assert!(offset_latitude(-0.0, 0.0).is_finite());
    }

    #[test]
    fn test_symmetric_sqrt() {
        // the sqrt(|x|) term does not distinguish the sign of x,
        // the remaining terms at x = ±1 are the odd sines (0 at integers) and linear parts
        let plus = offset_latitude(1.0, 0.0);
        let minus = offset_latitude(-1.0, 0.0);
        assert!((plus - minus - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_delta_magnitude() {
        // Beijing, a few hundred meters
        let (d_lat, d_lon) = delta(39.90923, 116.39737);
        assert!(d_lat.abs() < 0.01);
        assert!(d_lon.abs() < 0.01);
        assert!(d_lat != 0.0 && d_lon != 0.0);
    }
}
