//! Provides [`Polygon`] and [`map_polygon`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GeoPoint;

/// An ordered sequence of points.
///
/// A closed ring repeats the first point at the end,
/// this crate never checks nor repairs it.
pub type Ring = Vec<GeoPoint>;

/// An ordered sequence of [`Ring`]s, conventionally the outer boundary first.
///
/// # Example
///
/// ```
/// # use marstrans::*;
/// #
/// let polygon = Polygon::from_lon_lat([[
///     [116.39, 39.90],
///     [116.40, 39.90],
///     [116.40, 39.91],
///     [116.39, 39.90],
/// ]]);
/// assert_eq!(polygon.rings().len(), 1);
/// assert_eq!(polygon.rings()[0][1], GeoPoint::new(39.90, 116.40));
/// assert_eq!(polygon.len(), 4);
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl From<Vec<Ring>> for Polygon {
    #[inline]
    fn from(value: Vec<Ring>) -> Self {
        Self::new(value)
    }
}

impl From<Polygon> for Vec<Ring> {
    #[inline]
    fn from(value: Polygon) -> Self {
        value.rings
    }
}

impl Polygon {
    /// Makes a [`Polygon`].
    #[inline]
    pub const fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// Makes a [`Polygon`] from rings of `[longitude, latitude]` pairs,
    /// the axis order of GeoJSON and KML.
    pub fn from_lon_lat<R>(rings: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = [f64; 2]>,
    {
        Self::new(
            rings
                .into_iter()
                .map(|ring| ring.into_iter().map(GeoPoint::from_lon_lat).collect())
                .collect(),
        )
    }

    /// Returns rings of `[longitude, latitude]` pairs, see [`Polygon::from_lon_lat`].
    pub fn to_lon_lat(&self) -> Vec<Vec<[f64; 2]>> {
        self.rings
            .iter()
            .map(|ring| ring.iter().map(GeoPoint::to_lon_lat).collect())
            .collect()
    }

    /// Returns the rings of `self`.
    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Returns the total number of points in `self`.
    #[inline]
    pub fn len(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }

    /// Returns `true` if `self` has no point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Applies `transform` to every point of every ring of `polygon`.
///
/// The result has the same number of rings in the same order,
/// each has the same number of points in the same order.
/// Nothing is deduplicated, closed nor simplified.
///
/// # Example
///
/// ```
/// # use marstrans::*;
/// # use marstrans::bd09::gcj02_to_bd09;
/// # use marstrans::polygon::map_polygon;
/// #
/// let polygon = Polygon::new(vec![
///     vec![GeoPoint::new(39.9, 116.3), GeoPoint::new(39.9, 116.3)],
///     vec![],
/// ]);
/// let result = map_polygon(&polygon, gcj02_to_bd09);
///
/// assert_eq!(result.rings().len(), 2);
/// assert_eq!(result.rings()[0].len(), 2);
/// assert!(result.rings()[1].is_empty());
/// assert_eq!(result.rings()[0][0], gcj02_to_bd09(&GeoPoint::new(39.9, 116.3)));
/// ```
pub fn map_polygon<F>(polygon: &Polygon, transform: F) -> Polygon
where
    F: Fn(&GeoPoint) -> GeoPoint,
{
    Polygon::new(
        polygon
            .rings
            .iter()
            .map(|ring| ring.iter().map(&transform).collect())
            .collect(),
    )
}
