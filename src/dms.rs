//! Provides utilities for DMS and DM notation degree.
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Returns a DMS notation [`String`] from a DD notation [`f64`].
///
/// The second is rounded to three decimal places.
///
/// # Errors
///
/// Returns [`None`] when `t` is not finite,
/// or its milli-second does not fit in [`u64`].
///
/// # Example
///
/// ```
/// # use marstrans::dms::to_dms;
/// #
/// assert_eq!(to_dms(&39.90923), Some("39°54′33.228″".to_string()));
/// assert_eq!(to_dms(&-98.125), Some("-98°07′30.000″".to_string()));
/// assert_eq!(to_dms(&f64::NAN), None);
/// assert_eq!(to_dms(&1e15), None);
/// ```
#[must_use]
pub fn to_dms(t: &f64) -> Option<String> {
    if !t.is_finite() {
        return None;
    }

    // in milli-second, avoids "60.000″"
    let total = (t.abs() * 3_600_000.0).round();
    if total >= u64::MAX as f64 {
        return None;
    }
    let total = total as u64;
    let (degree, rest) = (total / 3_600_000, total % 3_600_000);
    let (minute, rest) = (rest / 60_000, rest % 60_000);
    let (second, milli) = (rest / 1000, rest % 1000);

    let negative = t.is_sign_negative() && total != 0;
    let sign = if negative { "-" } else { "" };
    Some(format!("{sign}{degree}°{minute:02}′{second:02}.{milli:03}″"))
}

/// Returns a DD notation [`f64`] from a DD, DMS or DM notation [`str`].
///
/// # Errors
///
/// Returns [`None`] when the conversion fails.
///
/// # Example
///
/// ```
/// # use marstrans::dms::from_dms;
/// #
/// assert_eq!(from_dms("39.90923"), Some(39.90923));
/// assert_eq!(from_dms("98°07′30″W"), Some(-98.125));
/// assert_eq!(from_dms("98°07′60″W"), None);
/// ```
#[inline]
#[must_use]
pub fn from_dms(s: &str) -> Option<f64> {
    s.parse::<Angle>().ok().map(|x| x.to_degree())
}

/// Signature of an angle
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Sign {
    Positive,
    Negative,
}

/// The axis an [`Angle`] belongs to.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// The hemisphere letter of an [`Angle`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Returns the axis `self` names.
    #[inline]
    pub const fn axis(&self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Latitude,
            Self::East | Self::West => Axis::Longitude,
        }
    }

    /// Returns the sign `self` implies.
    #[inline]
    pub const fn sign(&self) -> Sign {
        match self {
            Self::North | Self::East => Sign::Positive,
            Self::South | Self::West => Sign::Negative,
        }
    }
}

/// Represents one coordinate component parsed from text.
///
/// This accepts
///
/// - decimal degree, `39.90923`, `-98.126154`
/// - degree, minute and second, `39°54′33.2″N`, `39 54 33.2 N`, `39d54'33.2"N`
/// - degree and decimal minute, `39°54.553'N`
///
/// A hemisphere letter may lead or trail, and excludes a sign.
/// Only the last field may have a fraction,
/// minute and second must be less than 60.
///
/// # Example
///
/// ```
/// # use marstrans::dms::*;
/// #
/// let angle: Angle = "39°54′33″N".parse().unwrap();
/// assert_eq!(angle.hemisphere(), Some(Hemisphere::North));
/// assert_eq!(angle.axis(), Some(Axis::Latitude));
/// assert_eq!(angle.degree(), &39.0);
/// assert_eq!(angle.minute(), &54.0);
/// assert_eq!(angle.second(), &33.0);
///
/// let angle: Angle = "S 33 52.128".parse().unwrap();
/// assert!((angle.to_degree() + 33.8688).abs() < 1e-12);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Angle {
    sign: Sign,
    degree: f64,
    minute: f64,
    second: f64,
    hemisphere: Option<Hemisphere>,
}

impl FromStr for Angle {
    type Err = ParseDMSError;

    /// Makes an [`Angle`] from DD, DMS or DM notation [`&str`].
    ///
    /// # Errors
    ///
    /// When `s` is invalid or out-of-range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Self::Err::with_empty());
        }

        let (s, hemisphere) = split_hemisphere(s);

        let (sign, s) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s.strip_prefix('+').unwrap_or(s)),
        };

        let sign = match (hemisphere, sign) {
            (Some(_), Sign::Negative) => return Err(Self::Err::with_hemisphere()),
            (Some(h), Sign::Positive) => h.sign(),
            (None, sign) => sign,
        };

        let fields = parse_fields(s)?;
        let (degree, minute, second) = match fields.as_slice() {
            [d] => (*d, 0.0, 0.0),
            [d, m] => (*d, *m, 0.0),
            [d, m, s] => (*d, *m, *s),
            _ => return Err(Self::Err::with_invalid_digit()),
        };

        if fields.len() > 1 && degree.fract() != 0.0 || fields.len() > 2 && minute.fract() != 0.0 {
            return Err(Self::Err::with_invalid_digit());
        }
        if minute >= 60.0 || second >= 60.0 {
            return Err(Self::Err::with_out_of_bounds());
        }

        Ok(Self {
            sign,
            degree,
            minute,
            second,
            hemisphere,
        })
    }
}

/// Takes off a leading or trailing hemisphere letter.
fn split_hemisphere(s: &str) -> (&str, Option<Hemisphere>) {
    let mut chars = s.chars();

    if let Some(h) = chars.next_back().and_then(Hemisphere::from_char) {
        return (chars.as_str().trim_end(), Some(h));
    }

    let mut chars = s.chars();
    if let Some(h) = chars.next().and_then(Hemisphere::from_char) {
        return (chars.as_str().trim_start(), Some(h));
    }

    (s, None)
}

/// Splits on the degree, minute and second marks and whitespace,
/// and parses each unsigned decimal field.
fn parse_fields(s: &str) -> Result<Vec<f64>, ParseDMSError> {
    let mut fields = Vec::with_capacity(3);

    for field in s
        .split(|c: char| {
            c.is_whitespace()
                || matches!(
                    c,
                    '°' | 'º' | 'd' | 'D' | '\'' | '′' | '’' | '"' | '″' | '”'
                )
        })
        .filter(|field| !field.is_empty())
    {
        let mut dot = false;
        for c in field.chars() {
            match c {
                '0'..='9' => {}
                '.' if !dot => dot = true,
                _ => return Err(ParseDMSError::with_invalid_digit()),
            }
        }
        if field == "." {
            return Err(ParseDMSError::with_invalid_digit());
        }

        let value = field
            .parse::<f64>()
            .map_err(|_| ParseDMSError::with_invalid_digit())?;
        fields.push(value);
    }

    Ok(fields)
}

impl Angle {
    /// Returns the sign of `self`, the hemisphere letter is taken in account.
    #[inline]
    #[must_use]
    pub const fn sign(&self) -> &Sign {
        &self.sign
    }

    /// Returns the degree of `self`.
    #[inline]
    #[must_use]
    pub const fn degree(&self) -> &f64 {
        &self.degree
    }

    /// Returns the minute of `self`.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> &f64 {
        &self.minute
    }

    /// Returns the second of `self`.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> &f64 {
        &self.second
    }

    /// Returns the hemisphere letter of `self` if given.
    #[inline]
    #[must_use]
    pub const fn hemisphere(&self) -> Option<Hemisphere> {
        self.hemisphere
    }

    /// Returns the axis the hemisphere letter names, [`None`] if not given.
    #[inline]
    #[must_use]
    pub const fn axis(&self) -> Option<Axis> {
        match self.hemisphere {
            Some(h) => Some(h.axis()),
            None => None,
        }
    }

    /// Returns a DD notation [`f64`] that `self` converts into.
    ///
    /// # Example
    ///
    /// ```
    /// # use marstrans::dms::*;
    /// #
    /// let angle: Angle = "116.39737".parse().unwrap();
    /// assert_eq!(angle.to_degree(), 116.39737);
    ///
    /// let angle: Angle = "98°07′30″W".parse().unwrap();
    /// assert_eq!(angle.to_degree(), -98.125);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_degree(&self) -> f64 {
        let temp = self.degree + self.minute / 60.0 + self.second / 3600.0;

        match self.sign {
            Sign::Positive => temp,
            Sign::Negative => -temp,
        }
    }
}

//
// Error
//

/// An error which can be returned on parsing DMS degree.
///
/// This error is used as the error type for the [`FromStr`] for [`Angle`].
#[derive(Debug, PartialEq, Eq)]
pub struct ParseDMSError {
    kind: ParseDMSErrorKind,
}

/// An error kind of [`ParseDMSError`].
#[derive(Debug, PartialEq, Eq)]
pub enum ParseDMSErrorKind {
    InvalidDigit,
    OutOfBounds,
    Empty,
    /// Both a sign and a hemisphere letter.
    Hemisphere,
}

impl ParseDMSError {
    #[cold]
    const fn with_invalid_digit() -> Self {
        Self {
            kind: ParseDMSErrorKind::InvalidDigit,
        }
    }

    #[cold]
    const fn with_out_of_bounds() -> Self {
        Self {
            kind: ParseDMSErrorKind::OutOfBounds,
        }
    }

    #[cold]
    const fn with_empty() -> Self {
        Self {
            kind: ParseDMSErrorKind::Empty,
        }
    }

    #[cold]
    const fn with_hemisphere() -> Self {
        Self {
            kind: ParseDMSErrorKind::Hemisphere,
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &ParseDMSErrorKind {
        &self.kind
    }
}

impl Error for ParseDMSError {}

impl Display for ParseDMSError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.kind {
            ParseDMSErrorKind::InvalidDigit => f.write_str("invalid digit found in string"),
            ParseDMSErrorKind::OutOfBounds => f.write_str("cannot parse out-of-bounds DMS"),
            ParseDMSErrorKind::Empty => f.write_str("cannot parse DMS from empty string"),
            ParseDMSErrorKind::Hemisphere => {
                f.write_str("cannot parse DMS with both sign and hemisphere")
            }
        }
    }
}
