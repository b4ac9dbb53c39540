//! Conversion from any vector-like type into a [`Vec3`].

use crate::errors::Vec3Error;
use crate::vector3::Vec3;
use nalgebra as na;

/// Minimal read access shared by column vectors of any dimension.
///
/// `get` follows a column-then-row convention: the first argument picks the
/// column, the second the element within it. Column vectors only ever see
/// `col == 0`.
pub trait GenericVector {
    /// Number of elements.
    fn size(&self) -> usize;

    /// Element `row` of column `col`.
    fn get(&self, col: usize, row: usize) -> f64;
}

impl GenericVector for Vec3 {
    fn size(&self) -> usize {
        Vec3::size(self)
    }

    fn get(&self, col: usize, row: usize) -> f64 {
        Vec3::get(self, col, row)
    }
}

/// Every statically sized nalgebra column vector, `Vector2` to `Vector6` and
/// beyond.
impl<const D: usize> GenericVector for na::SVector<f64, D> {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, col: usize, row: usize) -> f64 {
        self[(row, col)]
    }
}

impl Vec3 {
    /// Copy from a generic vector.
    ///
    /// Two elements become `(a, b, 0)`; three or four elements keep the first
    /// three, dropping a homogeneous `w`.
    ///
    /// # Panics
    ///
    /// Panics if the source has any other size. Use
    /// [`Vec3::try_from_generic`] for a checked conversion.
    pub fn from_generic<V: GenericVector + ?Sized>(other: &V) -> Vec3 {
        match Self::try_from_generic(other) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`Vec3::from_generic`] but returns [`Vec3Error::UnsupportedSize`]
    /// instead of panicking.
    pub fn try_from_generic<V: GenericVector + ?Sized>(other: &V) -> Result<Vec3, Vec3Error> {
        match other.size() {
            2 => Ok(Vec3::new(other.get(0, 0), other.get(0, 1), 0.0)),
            3 | 4 => Ok(Vec3::new(
                other.get(0, 0),
                other.get(0, 1),
                other.get(0, 2),
            )),
            n => Err(Vec3Error::UnsupportedSize(n)),
        }
    }
}

impl From<na::Vector3<f64>> for Vec3 {
    fn from(v: na::Vector3<f64>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for na::Vector3<f64> {
    fn from(v: Vec3) -> Self {
        na::Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bare list of elements, nothing but the capability.
    struct Samples(Vec<f64>);

    impl GenericVector for Samples {
        fn size(&self) -> usize {
            self.0.len()
        }

        fn get(&self, _col: usize, row: usize) -> f64 {
            self.0[row]
        }
    }

    #[test]
    fn from_two_elements_pads_zero() {
        let v = Vec3::from_generic(&na::Vector2::new(1.5, -2.0));
        assert_eq!(v, Vec3::new(1.5, -2.0, 0.0));
    }

    #[test]
    fn from_three_elements() {
        let v = Vec3::from_generic(&na::Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::from_generic(&v), v);
    }

    #[test]
    fn from_four_elements_drops_w() {
        let v = Vec3::from_generic(&na::Vector4::new(1.0, 2.0, 3.0, 0.5));
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn from_trait_object() {
        let src: Box<dyn GenericVector> = Box::new(Samples(vec![4.0, 5.0, 6.0, 1.0]));
        assert_eq!(Vec3::from_generic(&*src), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    #[should_panic(expected = "Unsupported vector size: 5")]
    fn from_five_elements_panics() {
        Vec3::from_generic(&na::Vector5::new(1.0, 2.0, 3.0, 4.0, 5.0));
    }

    #[test]
    fn checked_conversion_rejects_bad_sizes() {
        for n in [0, 1, 5, 9] {
            match Vec3::try_from_generic(&Samples(vec![0.0; n])) {
                Err(Vec3Error::UnsupportedSize(size)) => assert_eq!(size, n),
                other => panic!("Expected UnsupportedSize({n}), got {other:?}"),
            }
        }
    }

    #[test]
    fn nalgebra_round_trip() {
        let v = Vec3::new(-1.0, 0.25, 8.0);
        let n: na::Vector3<f64> = v.into();
        assert_eq!(n.dot(&n), v.length_sqr());
        assert_eq!(Vec3::from(n.cross(&na::Vector3::z())), v.cross(&Vec3::UNIT_Z));
    }
}
