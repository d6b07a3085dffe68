//! Provides [`Converter`] and [`Conversion`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bd09::{bd09_to_gcj02, gcj02_to_bd09};
use crate::gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};
use crate::polygon::{map_polygon, Polygon};
use crate::region::BoundingBox;
use crate::system::{ConversionKey, ReferenceSystem};
use crate::{GeoPoint, Result};

/// A directed conversion among [`ReferenceSystem`]s.
///
/// # Example
///
/// ```
/// # use marstrans::{Conversion, ReferenceSystem};
/// #
/// assert_eq!(
///     Conversion::new(ReferenceSystem::BD09, ReferenceSystem::WGS84),
///     Conversion::Bd09ToWgs84
/// );
/// assert_eq!(
///     Conversion::new(ReferenceSystem::GCJ02, ReferenceSystem::GCJ02),
///     Conversion::Identity
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Conversion {
    /// The source equals to the target.
    Identity,
    Wgs84ToGcj02,
    Gcj02ToWgs84,
    Gcj02ToBd09,
    Bd09ToGcj02,
    /// WGS84 to GCJ-02, and then GCJ-02 to BD09.
    Wgs84ToBd09,
    /// BD09 to GCJ-02, and then GCJ-02 to WGS84.
    Bd09ToWgs84,
}

impl From<ConversionKey> for Conversion {
    #[inline]
    fn from(value: ConversionKey) -> Self {
        Self::new(value.source, value.target)
    }
}

impl Conversion {
    /// Returns the conversion from `source` to `target`.
    #[inline]
    pub const fn new(source: ReferenceSystem, target: ReferenceSystem) -> Self {
        use crate::system::ReferenceSystem::*;

        match (source, target) {
            (WGS84, WGS84) | (GCJ02, GCJ02) | (BD09, BD09) => Self::Identity,
            (WGS84, GCJ02) => Self::Wgs84ToGcj02,
            (GCJ02, WGS84) => Self::Gcj02ToWgs84,
            (GCJ02, BD09) => Self::Gcj02ToBd09,
            (BD09, GCJ02) => Self::Bd09ToGcj02,
            (WGS84, BD09) => Self::Wgs84ToBd09,
            (BD09, WGS84) => Self::Bd09ToWgs84,
        }
    }

    /// Returns the conversion of the opposite direction.
    ///
    /// # Example
    ///
    /// ```
    /// # use marstrans::Conversion;
    /// #
    /// assert_eq!(Conversion::Wgs84ToBd09.reverse(), Conversion::Bd09ToWgs84);
    /// assert_eq!(Conversion::Identity.reverse(), Conversion::Identity);
    /// ```
    #[inline]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::Identity => Self::Identity,
            Self::Wgs84ToGcj02 => Self::Gcj02ToWgs84,
            Self::Gcj02ToWgs84 => Self::Wgs84ToGcj02,
            Self::Gcj02ToBd09 => Self::Bd09ToGcj02,
            Self::Bd09ToGcj02 => Self::Gcj02ToBd09,
            Self::Wgs84ToBd09 => Self::Bd09ToWgs84,
            Self::Bd09ToWgs84 => Self::Wgs84ToBd09,
        }
    }
}

/// The conversion router among WGS84, GCJ-02 and BD09.
///
/// This holds the [`BoundingBox`] deciding where the GCJ-02 offset applies,
/// and nothing else; every conversion is a pure function of its input.
///
/// There is a builder, see [`ConverterBuilder`](crate::ConverterBuilder).
///
/// # Example
///
/// ```
/// # use marstrans::*;
/// #
/// let converter = Converter::default();
///
/// let origin = GeoPoint::new(39.90923, 116.39737);
/// let result = converter.convert(ReferenceSystem::WGS84, ReferenceSystem::BD09, &origin)?;
/// assert_ne!(result, origin);
///
/// // identity
/// let result = converter.convert(ReferenceSystem::BD09, ReferenceSystem::BD09, &origin)?;
/// assert_eq!(result, origin);
///
/// // by tag names
/// let result = converter.convert_tagged("WGS84", "GCJ-02", &origin)?;
/// assert_eq!(result, converter.convert(ReferenceSystem::WGS84, ReferenceSystem::GCJ02, &origin)?);
/// assert!(converter.convert_tagged("WGS84", "CGCS2000", &origin).is_err());
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, PartialEq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Converter {
    /// The gate of the GCJ-02 offset.
    pub region: BoundingBox,
}

impl Converter {
    /// Makes a [`Converter`].
    #[inline]
    pub const fn new(region: BoundingBox) -> Self {
        Self { region }
    }

    /// Returns the [`Conversion`] from `source` to `target`.
    ///
    /// Every pair of [`ReferenceSystem`]s has a [`Conversion`] today,
    /// hence this always returns [`Ok`].
    ///
    /// # Errors
    ///
    /// Reserved for a [`ReferenceSystem`] added without transforms,
    /// [`ErrorImpl::UnsupportedConversion`](crate::error::ErrorImpl::UnsupportedConversion).
    #[inline]
    pub fn conversion(
        &self,
        source: ReferenceSystem,
        target: ReferenceSystem,
    ) -> Result<Conversion> {
        Ok(Conversion::new(source, target))
    }

    /// Applies `conversion` on `point`.
    ///
    /// The composed conversions run the two steps,
    /// `convert(WGS84, BD09, p)` is bitwise `gcj02_to_bd09(wgs84_to_gcj02(p))`.
    #[inline]
    pub fn apply(&self, conversion: Conversion, point: &GeoPoint) -> GeoPoint {
        match conversion {
            Conversion::Identity => *point,
            Conversion::Wgs84ToGcj02 => wgs84_to_gcj02(point, &self.region),
            Conversion::Gcj02ToWgs84 => gcj02_to_wgs84(point, &self.region),
            Conversion::Gcj02ToBd09 => gcj02_to_bd09(point),
            Conversion::Bd09ToGcj02 => bd09_to_gcj02(point),
            Conversion::Wgs84ToBd09 => gcj02_to_bd09(&wgs84_to_gcj02(point, &self.region)),
            Conversion::Bd09ToWgs84 => gcj02_to_wgs84(&bd09_to_gcj02(point), &self.region),
        }
    }

    /// Converts `point` from `source` into `target`.
    ///
    /// This is identity when `source` equals to `target`,
    /// regardless of the region gate.
    ///
    /// # Errors
    ///
    /// If no transform is defined from `source` to `target`.
    #[inline]
    pub fn convert(
        &self,
        source: ReferenceSystem,
        target: ReferenceSystem,
        point: &GeoPoint,
    ) -> Result<GeoPoint> {
        let conversion = self.conversion(source, target)?;
        Ok(self.apply(conversion, point))
    }

    /// Converts `point` by reference system tag names, e.g. `"WGS84"`, `"GCJ-02"` and `"BD09"`.
    ///
    /// # Errors
    ///
    /// If either tag names no known [`ReferenceSystem`],
    /// it never falls back to identity.
    pub fn convert_tagged(&self, source: &str, target: &str, point: &GeoPoint) -> Result<GeoPoint> {
        let key = ConversionKey::from_tags(source, target).inspect_err(|e| {
            log::warn!("{e}");
        })?;
        self.convert(key.source, key.target, point)
    }

    /// Converts `points` from `source` into `target`, keeping the order.
    ///
    /// # Errors
    ///
    /// If no transform is defined from `source` to `target`.
    ///
    /// # Example
    ///
    /// ```
    /// # use marstrans::*;
    /// #
    /// let converter = Converter::default();
    /// let points = [GeoPoint::new(39.90923, 116.39737), GeoPoint::new(0.0, 0.0)];
    ///
    /// let result = converter.convert_points(ReferenceSystem::WGS84, ReferenceSystem::GCJ02, &points)?;
    /// assert_eq!(result.len(), 2);
    /// assert_eq!(result[1], points[1]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn convert_points(
        &self,
        source: ReferenceSystem,
        target: ReferenceSystem,
        points: &[GeoPoint],
    ) -> Result<Vec<GeoPoint>> {
        let conversion = self.conversion(source, target)?;
        Ok(points.iter().map(|p| self.apply(conversion, p)).collect())
    }

    /// Converts `points` in parallel, the result is in the order of `points`.
    ///
    /// # Errors
    ///
    /// If no transform is defined from `source` to `target`.
    #[cfg(feature = "rayon")]
    pub fn par_convert_points(
        &self,
        source: ReferenceSystem,
        target: ReferenceSystem,
        points: &[GeoPoint],
    ) -> Result<Vec<GeoPoint>> {
        use rayon::prelude::*;

        let conversion = self.conversion(source, target)?;
        Ok(points
            .par_iter()
            .map(|p| self.apply(conversion, p))
            .collect())
    }

    /// Converts every point of every ring of `polygon`.
    ///
    /// The result has the same rings in the same order,
    /// each of which has the same number of points in the same order.
    ///
    /// # Errors
    ///
    /// If no transform is defined from `source` to `target`.
    ///
    /// # Example
    ///
    /// ```
    /// # use marstrans::*;
    /// #
    /// let converter = Converter::default();
    /// let polygon = Polygon::new(vec![vec![
    ///     GeoPoint::new(39.90, 116.39),
    ///     GeoPoint::new(39.91, 116.39),
    ///     GeoPoint::new(39.91, 116.40),
    ///     GeoPoint::new(39.90, 116.39),
    /// ]]);
    ///
    /// let result = converter.convert_polygon(ReferenceSystem::WGS84, ReferenceSystem::BD09, &polygon)?;
    /// assert_eq!(result.rings().len(), 1);
    /// assert_eq!(result.rings()[0].len(), 4);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn convert_polygon(
        &self,
        source: ReferenceSystem,
        target: ReferenceSystem,
        polygon: &Polygon,
    ) -> Result<Polygon> {
        let conversion = self.conversion(source, target)?;
        log::trace!(
            "converting polygon of {} ring(s) from {source} to {target}",
            polygon.rings().len()
        );
        Ok(map_polygon(polygon, |p| self.apply(conversion, p)))
    }
}
