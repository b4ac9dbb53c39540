//! 3D vector geometry.
//!
//! [`Vec3`] is a plain `Copy` triple of `f64`. Operations that exist in two
//! forms keep both: the mutator changes the receiver in place and returns
//! `&mut Self` so calls can be chained, the pure form returns a new vector.
//!
//! ```
//! use vec3d::Vec3;
//!
//! let mut v = Vec3::new(3.0, 0.0, 4.0);
//! v.scale(2.0).normalize();
//! assert!((v.length() - 1.0).abs() < 1e-12);
//! ```

use std::ops::{
    Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use tracing::trace;

/// A 3D vector of `f64` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// Component 0
    pub x: f64,
    /// Component 1
    pub y: f64,
    /// Component 2
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// Unit vector along X.
    pub const UNIT_X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    /// Unit vector along Y.
    pub const UNIT_Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    /// Unit vector along Z.
    pub const UNIT_Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// The colour red.
    pub const RED: Vec3 = Vec3::UNIT_X;
    /// The colour green.
    pub const GREEN: Vec3 = Vec3::UNIT_Y;
    /// The colour blue.
    pub const BLUE: Vec3 = Vec3::UNIT_Z;
    /// The colour black.
    pub const BLACK: Vec3 = Vec3::ZERO;
    /// The colour white.
    pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    /// Smallest finite value in every component. Seed for a running [`max`].
    pub const MIN_VAL: Vec3 = Vec3::new(f64::MIN, f64::MIN, f64::MIN);
    /// Largest finite value in every component. Seed for a running [`min`].
    pub const MAX_VAL: Vec3 = Vec3::new(f64::MAX, f64::MAX, f64::MAX);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Number of rows when viewed as a column vector.
    pub const fn rows(&self) -> usize {
        3
    }

    /// Number of columns when viewed as a column vector.
    pub const fn cols(&self) -> usize {
        1
    }

    /// Number of components.
    pub const fn size(&self) -> usize {
        3
    }

    /// The components in order as an owned slice.
    pub fn slice(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }

    /// Component `row`. `col` is ignored since a `Vec3` has a single column.
    ///
    /// Panics if `row > 2`.
    pub fn get(&self, _col: usize, row: usize) -> f64 {
        self[row]
    }

    /// True iff every component is exactly `0.0`.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    pub fn length_sqr(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length. Very large components may overflow to infinity.
    pub fn length(&self) -> f64 {
        self.length_sqr().sqrt()
    }

    /// Multiply every component by `f`.
    pub fn scale(&mut self, f: f64) -> &mut Self {
        self.x *= f;
        self.y *= f;
        self.z *= f;
        self
    }

    pub fn scaled(&self, f: f64) -> Vec3 {
        Vec3::new(self.x * f, self.y * f, self.z * f)
    }

    /// Negate every component.
    pub fn invert(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    pub fn inverted(&self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }

    /// Scale to unit length.
    ///
    /// Left untouched when the squared length is exactly `0.0` or exactly
    /// `1.0`. There is no epsilon: a vector with a tiny but non-zero squared
    /// length is still divided through and may end up with huge components.
    pub fn normalize(&mut self) -> &mut Self {
        let sl = self.length_sqr();
        if sl == 0.0 || sl == 1.0 {
            return self;
        }
        self.scale(1.0 / sl.sqrt())
    }

    /// Unit length copy, same rules as [`Vec3::normalize`].
    pub fn normalized(&self) -> Vec3 {
        let mut v = *self;
        v.normalize();
        v
    }

    /// An arbitrary unit vector orthogonal to `self`. See [`normal`].
    pub fn normal(&self) -> Vec3 {
        normal(self)
    }

    /// Component-wise add `v`.
    pub fn add_vec(&mut self, v: &Vec3) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self
    }

    /// Component-wise subtract `v`.
    pub fn sub_vec(&mut self, v: &Vec3) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
        self
    }

    /// Component-wise multiply by `v`.
    pub fn mul_vec(&mut self, v: &Vec3) -> &mut Self {
        self.x *= v.x;
        self.y *= v.y;
        self.z *= v.z;
        self
    }

    pub fn dot(&self, other: &Vec3) -> f64 {
        dot(self, other)
    }

    pub fn cross(&self, other: &Vec3) -> Vec3 {
        cross(self, other)
    }

    /// Angle in radians to `other`. Both vectors must already be unit length.
    pub fn angle(&self, other: &Vec3) -> f64 {
        angle(self, other)
    }

    pub fn min(&self, other: &Vec3) -> Vec3 {
        min(self, other)
    }

    pub fn max(&self, other: &Vec3) -> Vec3 {
        max(self, other)
    }
}

/// Sum of two vectors.
pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

/// Difference of two vectors.
pub fn sub(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Component-wise product of two vectors.
pub fn mul(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x * b.x, a.y * b.y, a.z * b.z)
}

pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product `a × b`.
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Angle in radians between two unit vectors, `acos(dot(a, b))`.
///
/// The inputs are not normalized here. Non-unit inputs give a meaningless
/// angle, and a dot product outside `[-1, 1]` gives NaN.
pub fn angle(a: &Vec3, b: &Vec3) -> f64 {
    dot(a, b).acos()
}

/// An arbitrary unit vector orthogonal to `v`.
///
/// Computed as `cross(v, UNIT_Z)` normalized. When `v` is parallel to the Z
/// axis (or zero) that cross product vanishes and [`Vec3::UNIT_X`] is
/// returned instead.
pub fn normal(v: &Vec3) -> Vec3 {
    let n = cross(v, &Vec3::UNIT_Z);
    if n.is_zero() {
        trace!("{v:?} is parallel to the Z axis, falling back to UNIT_X");
        return Vec3::UNIT_X;
    }
    n.normalized()
}

/// Component-wise minimum. A component of `b` is only taken when it compares
/// strictly less than the one in `a`.
pub fn min(a: &Vec3, b: &Vec3) -> Vec3 {
    let mut m = *a;
    if b.x < m.x {
        m.x = b.x;
    }
    if b.y < m.y {
        m.y = b.y;
    }
    if b.z < m.z {
        m.z = b.z;
    }
    m
}

/// Component-wise maximum. A component of `b` is only taken when it compares
/// strictly greater than the one in `a`.
pub fn max(a: &Vec3, b: &Vec3) -> Vec3 {
    let mut m = *a;
    if b.x > m.x {
        m.x = b.x;
    }
    if b.y > m.y {
        m.y = b.y;
    }
    if b.z > m.z {
        m.z = b.z;
    }
    m
}

impl Index<usize> for Vec3 {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}
impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}
impl From<(f64, f64, f64)> for Vec3 {
    fn from(v: (f64, f64, f64)) -> Self {
        Vec3::new(v.0, v.1, v.2)
    }
}
impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        add(&self, &rhs)
    }
}
impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.add_vec(&rhs);
    }
}
impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        sub(&self, &rhs)
    }
}
impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.sub_vec(&rhs);
    }
}
impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        self.inverted()
    }
}
impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 {
        self.scaled(rhs)
    }
}
impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}
impl Mul<Vec3> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        mul(&self, &rhs)
    }
}
impl MulAssign<Vec3> for Vec3 {
    fn mul_assign(&mut self, rhs: Vec3) {
        self.mul_vec(&rhs);
    }
}
impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
