//! Provides [`GeoPoint`].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dms::{Angle, Axis};
use crate::{Error, Result};

/// Returns the normalized latitude into -90.0 <= and <= 90.0.
#[inline]
fn normalize_latitude(t: &f64) -> f64 {
    if t.is_nan() || t.ge(&-90.) && t.le(&90.0) {
        *t
    } else {
        match t % 360.0 {
            s if s.lt(&-270.0) || s.gt(&270.0) => s - f64::copysign(360.0, s),
            s if s.lt(&-90.0) || s.gt(&90.0) => f64::copysign(180.0, s) - s,
            s => s,
        }
    }
}

/// Returns the normalize longitude -180.0 <= and <= 180.0.
#[inline]
fn normalize_longitude(t: &f64) -> f64 {
    if t.is_nan() || t.ge(&-180.0) && t.le(&180.0) {
        *t
    } else {
        match t % 360.0 {
            s if s.lt(&-180.0) || s.gt(&180.0) => s - f64::copysign(360.0, s),
            s => s,
        }
    }
}

/// Represents a position, a pair latitude and longitude in decimal degree.
///
/// The value range is not checked,
/// a transformation of a garbage point is garbage.
///
/// # Example
///
/// ```
/// # use marstrans::*;
/// #
/// let point = GeoPoint::new(39.90923, 116.39737);
/// assert_eq!(point.latitude(), &39.90923);
/// assert_eq!(point.longitude(), &116.39737);
///
/// // six decimal places by default
/// assert_eq!(point.to_string(), "39.909230, 116.397370");
/// assert_eq!(format!("{point:.2}"), "39.91, 116.40");
///
/// // parse
/// let point: GeoPoint = "39°54′33.23″N, 116°23′50.53″E".parse()?;
/// assert!((point.latitude() - 39.909230).abs() < 1e-6);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, PartialEq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    /// The latitude \[deg\] of the point
    pub(crate) latitude: f64,
    /// The longitude \[deg\] of the point
    pub(crate) longitude: f64,
}

impl From<(f64, f64)> for GeoPoint {
    /// see [`GeoPoint::new()`], in (latitude, longitude) order
    #[inline]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<[f64; 2]> for GeoPoint {
    /// see [`GeoPoint::new()`], in \[latitude, longitude\] order
    #[inline]
    fn from(rhs: [f64; 2]) -> Self {
        Self::new(rhs[0], rhs[1])
    }
}

impl From<GeoPoint> for (f64, f64) {
    #[inline]
    fn from(value: GeoPoint) -> Self {
        (value.latitude, value.longitude)
    }
}

impl GeoPoint {
    /// Makes a [`GeoPoint`].
    ///
    /// This does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use marstrans::*;
    /// #
    /// let point = GeoPoint::new(35.0, 145.0);
    /// assert_eq!(point.latitude(), &35.0);
    /// assert_eq!(point.longitude(), &145.0);
    /// ```
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude of `self`.
    #[inline]
    pub const fn latitude(&self) -> &f64 {
        &self.latitude
    }

    /// Returns the longitude of `self`.
    #[inline]
    pub const fn longitude(&self) -> &f64 {
        &self.longitude
    }

    /// Makes a [`GeoPoint`] from a `[longitude, latitude]` pair,
    /// the axis order of GeoJSON and KML.
    ///
    /// # Example
    ///
    /// ```
    /// # use marstrans::*;
    /// #
    /// let point = GeoPoint::from_lon_lat([116.39737, 39.90923]);
    /// assert_eq!(point, GeoPoint::new(39.90923, 116.39737));
    /// assert_eq!(point.to_lon_lat(), [116.39737, 39.90923]);
    /// ```
    #[inline]
    pub const fn from_lon_lat(lon_lat: [f64; 2]) -> Self {
        Self::new(lon_lat[1], lon_lat[0])
    }

    /// Returns a `[longitude, latitude]` pair, see [`GeoPoint::from_lon_lat`].
    #[inline]
    pub const fn to_lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Makes a normalized [`GeoPoint`] from `self`.
    ///
    /// The result has normalized [`latitude`](GeoPoint::latitude)
    /// and [`longitude`](GeoPoint::longitude) which value -90.0 <= and <= 90.0,
    /// and -180.0 <= and <= 180.0 respectively.
    /// Transformations never call this.
    ///
    /// # Example
    ///
    /// ```
    /// # use marstrans::*;
    /// #
    /// let point = GeoPoint::new(100.0, 200.0);
    ///
    /// assert_eq!(
    ///     point.normalize(),
    ///     GeoPoint::new(80.0, -160.0)
    /// );
    /// ```
    pub fn normalize(&self) -> Self {
        Self {
            latitude: normalize_latitude(&self.latitude),
            longitude: normalize_longitude(&self.longitude),
        }
    }
}

impl Display for GeoPoint {
    /// Formats as `"{latitude}, {longitude}"`, six decimal places unless
    /// a precision is given.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write!(
            f,
            "{:.*}, {:.*}",
            precision, self.latitude, precision, self.longitude
        )
    }
}

impl FromStr for GeoPoint {
    type Err = Error;

    /// Makes a [`GeoPoint`] from `"latitude, longitude"`.
    ///
    /// Each component is either decimal degree, DMS or DM notation,
    /// see [`Angle`]. Decimal components may be separated by whitespace only.
    /// When the components carry hemisphere letters, the letters decide
    /// which is the latitude.
    ///
    /// # Errors
    ///
    /// If `s` is not a pair of angles, or the hemisphere letters
    /// name the same axis twice.
    ///
    /// # Example
    ///
    /// ```
    /// # use marstrans::*;
    /// #
    /// assert_eq!("19.215401, -98.126154".parse::<GeoPoint>()?, GeoPoint::new(19.215401, -98.126154));
    /// assert_eq!("19.215401 -98.126154".parse::<GeoPoint>()?, GeoPoint::new(19.215401, -98.126154));
    ///
    /// let point: GeoPoint = "98°07.5′W, 19°12.9′N".parse()?;
    /// assert!((point.latitude() - 19.215).abs() < 1e-12);
    /// assert!((point.longitude() + 98.125).abs() < 1e-12);
    ///
    /// assert!("19.215401".parse::<GeoPoint>().is_err());
    /// assert!("19.2N, 98.1S".parse::<GeoPoint>().is_err());
    /// # Ok::<(), Error>(())
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let err = || Error::new_parse_geo_point(s);

        let (first, second) = split_pair(s).ok_or_else(err)?;
        let first: Angle = first.parse().map_err(|_| err())?;
        let second: Angle = second.parse().map_err(|_| err())?;

        match (first.axis(), second.axis()) {
            (Some(Axis::Longitude), Some(Axis::Latitude) | None)
            | (None, Some(Axis::Latitude)) => {
                Ok(Self::new(second.to_degree(), first.to_degree()))
            }
            (Some(a), Some(b)) if a == b => Err(err()),
            _ => Ok(Self::new(first.to_degree(), second.to_degree())),
        }
    }
}

/// Splits `"a, b"` or `"a b"` into a pair of trimmed components.
fn split_pair(s: &str) -> Option<(&str, &str)> {
    let s = s.trim();

    if let Some((a, b)) = s.split_once(',') {
        let (a, b) = (a.trim(), b.trim());
        return if a.is_empty() || b.is_empty() || b.contains(',') {
            None
        } else {
            Some((a, b))
        };
    }

    let mut parts = s.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Some((a, b)),
        _ => None,
    }
}
