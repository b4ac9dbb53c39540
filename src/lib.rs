#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # vec3d Library
//!
//! A double precision 3D vector, [`Vec3`], with the operations geometry and
//! graphics code reaches for: scaling, normalization, dot and cross products,
//! angles, component-wise bounds and a plain text format.
//!
//! Operations that have both forms come in pairs. The mutator works in place
//! and returns `&mut Vec3` for chaining, the pure form returns a new value:
//!
//! ```
//! use vec3d::{vector3, Vec3};
//!
//! let a = Vec3::new(1.0, 5.0, -3.0);
//! let b = Vec3::new(4.0, 2.0, -3.0);
//!
//! let mut c = a;
//! c.add_vec(&b).scale(0.5);
//! assert_eq!(c, vector3::add(&a, &b).scaled(0.5));
//! assert_eq!(vector3::min(&a, &b), Vec3::new(1.0, 2.0, -3.0));
//! ```

mod errors;
mod generic;
mod text;
pub mod vector3;

// Re-export key public types
pub use errors::Vec3Error;
pub use generic::GenericVector;
pub use text::DEFAULT_PRECISION;
pub use vector3::{angle, cross, dot, normal, Vec3};
