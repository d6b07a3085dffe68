use crate::region::{BoundingBox, Bounds};
use crate::Converter;

/// The builder of [`Converter`].
///
/// The region gate defaults to [`BoundingBox::INCLUSIVE`].
///
/// # Example
///
/// ```
/// # use marstrans::*;
/// # use marstrans::region::BoundingBox;
/// #
/// let converter: Converter = ConverterBuilder::new()
///     .region(BoundingBox::EXCLUSIVE)
///     .build();
///
/// assert_eq!(converter.region, BoundingBox::EXCLUSIVE);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConverterBuilder {
    region: Option<BoundingBox>,
}

impl ConverterBuilder {
    /// Makes a [`ConverterBuilder`].
    ///
    /// # Example
    ///
    /// ```
    /// # use marstrans::*;
    /// # use marstrans::region::BoundingBox;
    /// #
    /// let converter = ConverterBuilder::new().build();
    ///
    /// assert_eq!(converter.region, BoundingBox::INCLUSIVE);
    /// assert_eq!(converter, Converter::default());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { region: None }
    }

    /// Updates the region gate by a [`BoundingBox`].
    #[inline]
    pub const fn region(mut self, region: BoundingBox) -> Self {
        self.region = Some(region);
        self
    }

    /// Updates the region gate by its edges \[deg\].
    ///
    /// # Example
    ///
    /// ```
    /// # use marstrans::*;
    /// # use marstrans::region::{Bounds, BoundingBox};
    /// #
    /// let converter = ConverterBuilder::new()
    ///     .region_bounds(18.0, 54.0, 73.0, 135.0, Bounds::Inclusive)
    ///     .build();
    ///
    /// assert_eq!(
    ///     converter.region,
    ///     BoundingBox::new(18.0, 54.0, 73.0, 135.0, Bounds::Inclusive)
    /// );
    /// ```
    #[inline]
    pub const fn region_bounds(
        self,
        south: f64,
        north: f64,
        west: f64,
        east: f64,
        bounds: Bounds,
    ) -> Self {
        self.region(BoundingBox::new(south, north, west, east, bounds))
    }

    /// Builds [`Converter`].
    #[inline]
    pub fn build(self) -> Converter {
        let region = self.region.unwrap_or_default();
        log::debug!(
            "region gate: latitude {:?} to {:?}, longitude {:?} to {:?} ({:?})",
            region.south,
            region.north,
            region.west,
            region.east,
            region.bounds
        );
        Converter::new(region)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{GeoPoint, ReferenceSystem};

    #[test]
    fn test_default() {
        let converter = ConverterBuilder::new().build();
        assert_eq!(converter, Converter::default());
        assert_eq!(converter.region, BoundingBox::INCLUSIVE);
    }

    #[test]
    fn test_last_wins() {
        let converter = ConverterBuilder::new()
            .region(BoundingBox::EXCLUSIVE)
            .region(BoundingBox::INCLUSIVE)
            .build();
        assert_eq!(converter.region, BoundingBox::INCLUSIVE);
    }

    #[test]
    fn test_custom_region() {
        // a box that excludes Beijing
        let converter = ConverterBuilder::new()
            .region_bounds(18.0, 35.0, 73.0, 135.0, Bounds::Exclusive)
            .build();

        let origin = GeoPoint::new(39.90923, 116.39737);
        let actual = converter
            .convert(ReferenceSystem::WGS84, ReferenceSystem::GCJ02, &origin)
            .unwrap();
        assert_eq!(actual, origin);
    }
}
