//! # marstrans
//!
//! Coordinate conversion among WGS84, GCJ-02 and BD09,
//! the reference systems used in and around mainland China.
//!
//! 提供 WGS84、GCJ-02（火星坐标）与 BD09（百度坐标）之间的坐标转换。
//!
//! ```
//! use marstrans::{Converter, GeoPoint, ReferenceSystem};
//!
//! fn main() -> marstrans::Result<()> {
//!     let converter = Converter::default();
//!
//!     // Makes the origin of conversion, Beijing in WGS84
//!     let origin = GeoPoint::new(39.90923, 116.39737);
//!
//!     // Perform WGS84 to GCJ-02
//!     let gcj02 = converter.convert(ReferenceSystem::WGS84, ReferenceSystem::GCJ02, &origin)?;
//!     assert_ne!(gcj02, origin);
//!
//!     // Perform GCJ-02 to BD09
//!     let bd09 = converter.convert(ReferenceSystem::GCJ02, ReferenceSystem::BD09, &gcj02)?;
//!     // which equals to WGS84 to BD09
//!     assert_eq!(bd09, converter.convert(ReferenceSystem::WGS84, ReferenceSystem::BD09, &origin)?);
//!
//!     // Back to WGS84, an approximation of a few meters
//!     let result = converter.convert(ReferenceSystem::BD09, ReferenceSystem::WGS84, &bd09)?;
//!     assert!((result.latitude() - origin.latitude()).abs() < 5e-5);
//!     assert!((result.longitude() - origin.longitude()).abs() < 5e-5);
//!
//!     // Prints 39.910633, 116.403614
//!     println!("{gcj02}");
//!
//!     Ok(())
//! }
//! ```
//!
//! Features:
//!
//! - All six directed conversions and identity, see [`Converter`]
//! - Both bounding boxes of "mainland China" in use, see [`region::BoundingBox`]
//! - Iterative GCJ-02 to WGS84, see [`gcj02::gcj02_to_wgs84_exact`]
//! - Polygons, see [`Polygon`]
//! - Parsing DD, DMS and DM notation, see [`dms`]
//! - Clean implementation, no I/O, no global state
//!   - It depends on [`log`][log] only,
//!     and on [`serde`][serde] and [`rayon`][rayon] only if the features on
//!
//! [log]: https://crates.io/crates/log
//! [serde]: https://crates.io/crates/serde
//! [rayon]: https://crates.io/crates/rayon
//!
//! We note that GCJ-02 and BD09 are not datums; the conversions are
//! empirical offsets, and no conversion among them is exactly invertible.
//!
//! # Serialization and Deserialization
//!
//! It supports (de)serialization by [`serde` crate](https://crates.io/crates/serde)
//! for all value types including [`Converter`]
//! only if the feature `serde` is enabled.
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # fn main() -> serde_json::Result<()> {
//! use marstrans::{Converter, ConverterBuilder};
//! use marstrans::region::BoundingBox;
//!
//! let converter = ConverterBuilder::new()
//!     .region(BoundingBox::EXCLUSIVE)
//!     .build();
//!
//! // Serialize to json
//! let json = serde_json::to_string(&converter)?;
//! assert_eq!(
//!     json,
//!     r#"{"region":{"south":3.86,"north":53.55,"west":73.66,"east":135.05,"bounds":"Exclusive"}}"#
//! );
//!
//! // Deserialize from json
//! let result: Converter = serde_json::from_str(&json)?;
//! assert_eq!(result, converter);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "serde"))]
//! # fn main() {}
//! ```

#[doc(inline)]
pub use builder::ConverterBuilder;
#[doc(inline)]
pub use converter::{Conversion, Converter};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use point::GeoPoint;
#[doc(inline)]
pub use polygon::{Polygon, Ring};
#[doc(inline)]
pub use system::{ConversionKey, ReferenceSystem};

pub mod bd09;
mod builder;
pub mod converter;
pub mod dms;
pub mod error;
pub mod gcj02;
pub mod offset;
pub mod point;
pub mod polygon;
pub mod region;
pub mod system;
