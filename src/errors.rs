use std::fmt;
use std::num::ParseFloatError;

use crate::vector3::Vec3;

/// Error type for parsing and converting vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum Vec3Error {
    /// Fewer than three components in the input
    MissingComponent {
        /// Number of components that were scanned
        found: usize,
        /// The scanned components, zero-filled after `found`
        partial: Vec3,
    },
    /// A component token is not a float
    InvalidComponent {
        /// Position of the bad token, 0 to 2
        index: usize,
        /// The bad token
        token: String,
        /// Components before `index`, zero-filled from `index` on
        partial: Vec3,
        /// Underlying float parse error
        source: ParseFloatError,
    },
    /// Generic vector dimension other than 2, 3 or 4
    UnsupportedSize(usize),
}

impl Vec3Error {
    /// Best-effort vector scanned before a parse failure.
    ///
    /// This is what was read up to the failing component. It must not be
    /// trusted as a complete value.
    pub fn partial(&self) -> Option<Vec3> {
        match self {
            Vec3Error::MissingComponent { partial, .. }
            | Vec3Error::InvalidComponent { partial, .. } => Some(*partial),
            Vec3Error::UnsupportedSize(_) => None,
        }
    }
}

impl fmt::Display for Vec3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vec3Error::MissingComponent { found, .. } => {
                write!(f, "Expected 3 vector components, found {found}")
            }
            Vec3Error::InvalidComponent {
                index, token, source, ..
            } => write!(f, "Invalid vector component {index} '{token}': {source}"),
            Vec3Error::UnsupportedSize(n) => write!(f, "Unsupported vector size: {n}"),
        }
    }
}

impl std::error::Error for Vec3Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Vec3Error::InvalidComponent { source, .. } => Some(source),
            _ => None,
        }
    }
}
