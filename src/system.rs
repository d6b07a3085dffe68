//! Provides [`ReferenceSystem`] and [`ConversionKey`].
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The planar reference systems this crate converts among.
///
/// Parsing is case-insensitive and accepts one `-`, `_` or space
/// between the letters and the digits, e.g. `"gcj_02"`.
///
/// # Example
///
/// ```
/// # use marstrans::ReferenceSystem;
/// #
/// assert_eq!(ReferenceSystem::GCJ02.to_string(), "GCJ-02");
/// assert_eq!("gcj02".parse(), Ok(ReferenceSystem::GCJ02));
/// assert_eq!("BD09".parse(), Ok(ReferenceSystem::BD09));
/// assert!("EPSG:4326".parse::<ReferenceSystem>().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ReferenceSystem {
    /// World Geodetic System 1984, as reported by GPS.
    WGS84,
    /// The offset system mandated for public maps of mainland China.
    GCJ02,
    /// Baidu's further-offset system on top of GCJ-02.
    BD09,
}

impl ReferenceSystem {
    /// All the reference systems.
    pub const ALL: [ReferenceSystem; 3] = [Self::WGS84, Self::GCJ02, Self::BD09];

    /// Returns the tag name.
    ///
    /// # Example
    ///
    /// ```
    /// # use marstrans::ReferenceSystem;
    /// #
    /// assert_eq!(ReferenceSystem::WGS84.name(), "WGS84");
    /// assert_eq!(ReferenceSystem::GCJ02.name(), "GCJ-02");
    /// assert_eq!(ReferenceSystem::BD09.name(), "BD09");
    /// ```
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::WGS84 => "WGS84",
            Self::GCJ02 => "GCJ-02",
            Self::BD09 => "BD09",
        }
    }
}

impl Display for ReferenceSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReferenceSystem {
    type Err = ParseReferenceSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseReferenceSystemError::with_empty());
        }

        // at most one separator between the letters and the digits
        let mid = s.find(|c: char| c.is_ascii_digit()).unwrap_or(s.len());
        let (letters, digits) = s.split_at(mid);
        let letters = letters
            .strip_suffix(|c: char| matches!(c, '-' | '_' | ' '))
            .unwrap_or(letters);

        match (letters.to_ascii_uppercase().as_str(), digits) {
            ("WGS", "84") => Ok(Self::WGS84),
            ("GCJ", "02") => Ok(Self::GCJ02),
            ("BD", "09") => Ok(Self::BD09),
            _ => Err(ParseReferenceSystemError::with_unknown()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ReferenceSystem {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ReferenceSystem {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<ReferenceSystem, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format_args!(
                "invalid value: string `{}`, expected WGS84, GCJ-02 or BD09",
                s,
            ))
        })
    }
}

/// The ordered pair of source and target [`ReferenceSystem`].
///
/// # Example
///
/// ```
/// # use marstrans::{ConversionKey, ReferenceSystem};
/// #
/// let key = ConversionKey::new(ReferenceSystem::WGS84, ReferenceSystem::BD09);
/// assert!(!key.is_identity());
/// assert_eq!(key.reverse(), ConversionKey::new(ReferenceSystem::BD09, ReferenceSystem::WGS84));
/// assert_eq!(key.to_string(), "WGS84 -> BD09");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionKey {
    /// The source system
    pub source: ReferenceSystem,
    /// The target system
    pub target: ReferenceSystem,
}

impl From<(ReferenceSystem, ReferenceSystem)> for ConversionKey {
    #[inline]
    fn from(value: (ReferenceSystem, ReferenceSystem)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl ConversionKey {
    /// Makes a [`ConversionKey`].
    #[inline]
    pub const fn new(source: ReferenceSystem, target: ReferenceSystem) -> Self {
        Self { source, target }
    }

    /// Makes a [`ConversionKey`] from tag names, e.g. `"WGS84"` and `"GCJ-02"`.
    ///
    /// # Errors
    ///
    /// If either tag names no known [`ReferenceSystem`].
    ///
    /// # Example
    ///
    /// ```
    /// # use marstrans::{ConversionKey, ReferenceSystem};
    /// #
    /// let key = ConversionKey::from_tags("WGS84", "GCJ-02").unwrap();
    /// assert_eq!(key.source, ReferenceSystem::WGS84);
    /// assert_eq!(key.target, ReferenceSystem::GCJ02);
    ///
    /// assert!(ConversionKey::from_tags("WGS84", "CGCS2000").is_err());
    /// ```
    pub fn from_tags(source: &str, target: &str) -> crate::Result<Self> {
        match (source.parse(), target.parse()) {
            (Ok(source), Ok(target)) => Ok(Self::new(source, target)),
            _ => Err(crate::Error::new_unsupported_conversion(source, target)),
        }
    }

    /// Returns `true` if the source equals to the target.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }

    /// Returns the key of the opposite direction.
    #[inline]
    pub const fn reverse(&self) -> Self {
        Self::new(self.target, self.source)
    }
}

impl Display for ConversionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

//
// Error
//

/// An error which can be returned on parsing [`ReferenceSystem`].
#[derive(Debug, PartialEq, Eq)]
pub struct ParseReferenceSystemError {
    kind: ParseReferenceSystemErrorKind,
}

/// An error kind of [`ParseReferenceSystemError`].
#[derive(Debug, PartialEq, Eq)]
pub enum ParseReferenceSystemErrorKind {
    Unknown,
    Empty,
}

impl ParseReferenceSystemError {
    #[cold]
    const fn with_unknown() -> Self {
        Self {
            kind: ParseReferenceSystemErrorKind::Unknown,
        }
    }

    #[cold]
    const fn with_empty() -> Self {
        Self {
            kind: ParseReferenceSystemErrorKind::Empty,
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &ParseReferenceSystemErrorKind {
        &self.kind
    }
}

impl Error for ParseReferenceSystemError {}

impl Display for ParseReferenceSystemError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.kind {
            ParseReferenceSystemErrorKind::Unknown => f.write_str("unknown reference system"),
            ParseReferenceSystemErrorKind::Empty => {
                f.write_str("cannot parse reference system from empty string")
            }
        }
    }
}
