//! Provides [`Error`] etc.

/// Alias for a `Result<T, marstrans::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by this crate.
#[derive(Debug)]
pub struct Error {
    pub err: Box<ErrorImpl>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Error {
    /// Returns a error kind.
    pub fn kind(&self) -> &ErrorImpl {
        &self.err
    }
}

impl Error {
    #[cold]
    pub(crate) fn new_unsupported_conversion(from: &str, to: &str) -> Self {
        Self {
            err: Box::new(ErrorImpl::UnsupportedConversion {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }

    #[cold]
    pub(crate) fn new_parse_geo_point(s: &str) -> Self {
        Self {
            err: Box::new(ErrorImpl::ParseGeoPoint { s: s.to_string() }),
        }
    }

    #[cold]
    pub(crate) fn new_not_convergent(
        latitude: f64,
        longitude: f64,
        criteria: f64,
        iteration: usize,
    ) -> Self {
        Self {
            err: Box::new(ErrorImpl::NotConvergent {
                latitude,
                longitude,
                criteria,
                iteration,
            }),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ErrorImpl {
    /// No transform is defined from `from` to `to`.
    UnsupportedConversion {
        /// The source reference system tag
        from: String,
        /// The target reference system tag
        to: String,
    },
    /// Invalid coordinate text.
    ParseGeoPoint {
        /// Invalid data
        s: String,
    },
    /// Error is still high even iteration exhausted
    NotConvergent {
        /// Resulting latitude
        latitude: f64,
        /// Resulting longitude
        longitude: f64,
        /// Error cirteria
        criteria: f64,
        /// Max iteration
        iteration: usize,
    },
}

impl std::fmt::Display for ErrorImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ErrorImpl::UnsupportedConversion { from, to } => {
                write!(f, "unsupported conversion: '{from}' to '{to}'")
            }
            ErrorImpl::ParseGeoPoint { s } => write!(f, "invalid coordinate: '{s}'"),
            ErrorImpl::NotConvergent {
                iteration,
                criteria,
                ..
            } => write!(
                f,
                "error is still higher than {criteria:?} even exhaust {iteration:?} iterations"
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::new_unsupported_conversion("WGS84", "CGCS2000");
        assert_eq!(
            e.to_string(),
            "unsupported conversion: 'WGS84' to 'CGCS2000'"
        );
        assert_eq!(
            e.kind(),
            &ErrorImpl::UnsupportedConversion {
                from: "WGS84".to_string(),
                to: "CGCS2000".to_string()
            }
        );

        let e = Error::new_parse_geo_point("abc");
        assert_eq!(e.to_string(), "invalid coordinate: 'abc'");

        let e = Error::new_not_convergent(1.0, 2.0, 1e-12, 100);
        assert_eq!(
            e.to_string(),
            "error is still higher than 1e-12 even exhaust 100 iterations"
        );
    }
}
