//! Text round-trip for [`Vec3`].
//!
//! The format is three whitespace-separated decimals, `x y z`. Output uses 6
//! fractional digits unless a precision is given to the formatter, so
//! `parse(format(v))` only recovers `v` up to that precision.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::errors::Vec3Error;
use crate::vector3::Vec3;

/// Default number of fractional digits when formatting.
pub const DEFAULT_PRECISION: usize = 6;

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "{:.p$} {:.p$} {:.p$}", self.x, self.y, self.z)
    }
}

impl FromStr for Vec3 {
    type Err = Vec3Error;

    /// Read the first three whitespace-separated floats. Anything after the
    /// third token is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut v = Vec3::ZERO;
        let mut tokens = s.split_whitespace();

        for index in 0..3 {
            let Some(token) = tokens.next() else {
                debug!("Vector '{s}' has only {index} components");
                return Err(Vec3Error::MissingComponent {
                    found: index,
                    partial: v,
                });
            };
            let c = token.parse::<f64>().map_err(|source| {
                debug!("Failed to parse component {index} of '{s}': {source}");
                Vec3Error::InvalidComponent {
                    index,
                    token: token.to_string(),
                    partial: v,
                    source,
                }
            })?;
            v[index] = c;
        }

        if tokens.next().is_some() {
            debug!("Ignoring trailing input after three components in '{s}'");
        }
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_default_precision() {
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0).to_string(),
            "1.000000 2.000000 3.000000"
        );
        assert_eq!(
            Vec3::new(-0.5, 1e-7, 1234.5678901).to_string(),
            "-0.500000 0.000000 1234.567890"
        );
    }

    #[test]
    fn format_explicit_precision() {
        let v = Vec3::new(1.0, -2.25, 3.14159);
        assert_eq!(format!("{v:.2}"), "1.00 -2.25 3.14");
        assert_eq!(format!("{v:.0}"), "1 -2 3");
    }

    #[test]
    fn parse_formatted() {
        let v: Vec3 = "1.000000 2.000000 3.000000".parse().unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn round_trip_within_precision() {
        let vs = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.123456789, 98765.4321, 1e-9),
            Vec3::new(std::f64::consts::PI, -std::f64::consts::E, 0.0),
        ];
        for v in vs {
            let back: Vec3 = v.to_string().parse().unwrap();
            for i in 0..3 {
                assert!(
                    (back[i] - v[i]).abs() <= 5e-7,
                    "Component {i} of {v:?} came back as {}",
                    back[i]
                );
            }
        }
    }

    #[test]
    fn parse_layouts() {
        let v: Vec3 = "  1\t-2.5e1\n +3.  ".parse().unwrap();
        assert_eq!(v, Vec3::new(1.0, -25.0, 3.0));
        let v: Vec3 = "1 2 3 4 five".parse().unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn parse_too_few_components() {
        let err = "1.0 2.0".parse::<Vec3>().unwrap_err();
        assert_eq!(
            err,
            Vec3Error::MissingComponent {
                found: 2,
                partial: Vec3::new(1.0, 2.0, 0.0),
            }
        );
        assert_eq!(err.to_string(), "Expected 3 vector components, found 2");

        let err = "".parse::<Vec3>().unwrap_err();
        assert_eq!(err.partial(), Some(Vec3::ZERO));
    }

    #[test]
    fn parse_invalid_component() {
        let err = "4 x 6".parse::<Vec3>().unwrap_err();
        match &err {
            Vec3Error::InvalidComponent {
                index,
                token,
                partial,
                ..
            } => {
                assert_eq!(*index, 1);
                assert_eq!(token, "x");
                assert_eq!(*partial, Vec3::new(4.0, 0.0, 0.0));
            }
            other => panic!("Expected InvalidComponent, got {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Invalid vector component 1 'x'"));
    }

    #[test]
    fn parse_rejects_comma_separated() {
        assert!("1,2,3".parse::<Vec3>().is_err());
    }
}
