//! Provides [`BoundingBox`], the gate deciding where the GCJ-02 offset applies.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether the edges of a [`BoundingBox`] belong to the box.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bounds {
    /// Edges are inside.
    Inclusive,
    /// Edges are outside.
    Exclusive,
}

/// The rectangle meaning "mainland China" for the GCJ-02 offset.
///
/// Points outside the box are left untouched by
/// [`wgs84_to_gcj02`](crate::gcj02::wgs84_to_gcj02).
///
/// Two boxes are in use and they are not interchangeable;
/// [`BoundingBox::INCLUSIVE`] is the default.
///
/// # Example
///
/// ```
/// # use marstrans::region::BoundingBox;
/// #
/// let gate = BoundingBox::INCLUSIVE;
/// assert!(!gate.is_out_of_china(39.90923, 116.39737));
/// assert!(gate.is_out_of_china(0.0, 0.0));
///
/// // on the west edge
/// assert!(!BoundingBox::INCLUSIVE.is_out_of_china(35.0, 72.004));
/// // the other box is narrower and open
/// assert!(BoundingBox::EXCLUSIVE.is_out_of_china(35.0, 73.66));
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    /// The southern latitude \[deg\]
    pub south: f64,
    /// The northern latitude \[deg\]
    pub north: f64,
    /// The western longitude \[deg\]
    pub west: f64,
    /// The eastern longitude \[deg\]
    pub east: f64,
    /// Whether the edges belong to the box
    pub bounds: Bounds,
}

impl Default for BoundingBox {
    #[inline]
    fn default() -> Self {
        Self::INCLUSIVE
    }
}

impl BoundingBox {
    /// Longitude in \[72.004, 137.8347\] and latitude in \[0.8293, 55.8271\].
    pub const INCLUSIVE: BoundingBox =
        BoundingBox::new(0.8293, 55.8271, 72.004, 137.8347, Bounds::Inclusive);

    /// Longitude in (73.66, 135.05) and latitude in (3.86, 53.55).
    pub const EXCLUSIVE: BoundingBox =
        BoundingBox::new(3.86, 53.55, 73.66, 135.05, Bounds::Exclusive);

    /// Makes a [`BoundingBox`].
    ///
    /// This does not check `south <= north` nor `west <= east`,
    /// an inverted box contains nothing.
    #[inline]
    pub const fn new(south: f64, north: f64, west: f64, east: f64, bounds: Bounds) -> Self {
        Self {
            south,
            north,
            west,
            east,
            bounds,
        }
    }

    /// Returns `true` if (`latitude`, `longitude`) lies in `self`.
    ///
    /// [`NAN`](f64::NAN) lies nowhere.
    #[inline]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        match self.bounds {
            Bounds::Inclusive => {
                (self.west..=self.east).contains(&longitude)
                    && (self.south..=self.north).contains(&latitude)
            }
            Bounds::Exclusive => {
                self.west < longitude
                    && longitude < self.east
                    && self.south < latitude
                    && latitude < self.north
            }
        }
    }

    /// Returns `true` if (`latitude`, `longitude`) lies outside of `self`.
    ///
    /// This is total, every input including [`NAN`](f64::NAN) answers.
    #[inline]
    pub fn is_out_of_china(&self, latitude: f64, longitude: f64) -> bool {
        !self.contains(latitude, longitude)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_inclusive_edges() {
        let gate = BoundingBox::INCLUSIVE;

        // corners
        assert!(!gate.is_out_of_china(0.8293, 72.004));
        assert!(!gate.is_out_of_china(55.8271, 137.8347));
        assert!(!gate.is_out_of_china(0.8293, 137.8347));
        assert!(!gate.is_out_of_china(55.8271, 72.004));

        // just across
        assert!(gate.is_out_of_china(0.8293_f64.next_down(), 100.0));
        assert!(gate.is_out_of_china(55.8271_f64.next_up(), 100.0));
        assert!(gate.is_out_of_china(30.0, 72.004_f64.next_down()));
        assert!(gate.is_out_of_china(30.0, 137.8347_f64.next_up()));
    }

    #[test]
    fn test_exclusive_edges() {
        let gate = BoundingBox::EXCLUSIVE;

        assert!(gate.is_out_of_china(3.86, 100.0));
        assert!(gate.is_out_of_china(53.55, 100.0));
        assert!(gate.is_out_of_china(30.0, 73.66));
        assert!(gate.is_out_of_china(30.0, 135.05));

        assert!(!gate.is_out_of_china(3.86_f64.next_up(), 100.0));
        assert!(!gate.is_out_of_china(53.55_f64.next_down(), 100.0));
        assert!(!gate.is_out_of_china(30.0, 73.66_f64.next_up()));
        assert!(!gate.is_out_of_china(30.0, 135.05_f64.next_down()));
    }

    #[test]
    fn test_variants_differ() {
        // Zengmu Ansha, inside A only
        assert!(!BoundingBox::INCLUSIVE.is_out_of_china(3.5, 112.0));
        assert!(BoundingBox::EXCLUSIVE.is_out_of_china(3.5, 112.0));
    }

    #[test]
    fn test_nan() {
        for gate in [BoundingBox::INCLUSIVE, BoundingBox::EXCLUSIVE] {
            assert!(gate.is_out_of_china(f64::NAN, 100.0));
            assert!(gate.is_out_of_china(30.0, f64::NAN));
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(BoundingBox::default(), BoundingBox::INCLUSIVE);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &BoundingBox::EXCLUSIVE,
            &[
                Token::Struct {
                    name: "BoundingBox",
                    len: 5,
                },
                Token::Str("south"),
                Token::F64(3.86),
                Token::Str("north"),
                Token::F64(53.55),
                Token::Str("west"),
                Token::F64(73.66),
                Token::Str("east"),
                Token::F64(135.05),
                Token::Str("bounds"),
                Token::UnitVariant {
                    name: "Bounds",
                    variant: "Exclusive",
                },
                Token::StructEnd,
            ],
        );
    }
}
