//! Vectors.

use crate::num::F32;
use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};
use thiserror::Error;

/// A 2-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    x: F32,
    y: F32,
}

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: F32,
    y: F32,
    z: F32,
}

/// A 4-dimensional vector.
///
/// The base address of every instance is 16-byte aligned, so all four
/// components can be moved in a single 128-bit transfer. This is what lets
/// the SIMD operation path in [`crate::simd`] load and store whole vectors
/// with aligned instructions.
#[repr(C, align(16))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    x: F32,
    y: F32,
    z: F32,
    w: F32,
}

/// Error returned when raw bytes cannot be reinterpreted as [`Vector4`]
/// data because they violate the 16-byte alignment invariant or do not hold
/// a whole number of vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("vector data must be 16-byte aligned and a whole number of vectors long")]
pub struct AlignmentError;

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: F32, y: F32) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: F32) -> Self {
        Self::new(value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> F32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> F32 {
        self.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut F32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut F32 {
        &mut self.y
    }

    /// Returns a vector with the square root of each component. A negative
    /// component yields NaN.
    #[inline]
    pub fn component_sqrt(&self) -> Self {
        Self::new(self.x.sqrt(), self.y.sqrt())
    }

    /// Computes the norm (length) of the vector. The zero vector has norm
    /// exactly zero.
    #[inline]
    pub fn norm(&self) -> F32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> F32 {
        self.dot(self)
    }

    /// Computes the normalized version of the vector.
    ///
    /// This divides by [`Self::norm`] through a single reciprocal
    /// multiplication, so normalizing the zero vector fills the result with
    /// NaN rather than returning an error. Callers that may hold zero-length
    /// vectors must check before normalizing.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the dot product of this vector with another. Commutative.
    #[inline]
    pub fn dot(&self, other: &Self) -> F32 {
        self.x * other.x + self.y * other.y
    }
}

impl From<[F32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [F32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [F32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x, vector.y]
    }
}

impl From<Vector3> for Vector2 {
    /// Drops the z-component. Lossy, no validation.
    #[inline]
    fn from(vector: Vector3) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl From<Vector4> for Vector2 {
    /// Drops the z- and w-components. Lossy, no validation.
    #[inline]
    fn from(vector: Vector4) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x + b.x, a.y + b.y)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x - b.x, a.y - b.y)
});

impl_binop!(Mul, mul, Vector2, F32, Vector2, |a, b| {
    Vector2::new(a.x * b, a.y * b)
});

impl_binop!(Mul, mul, F32, Vector2, Vector2, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector2, F32, Vector2, |a, b| { a.mul(b.recip()) });

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    a.x += b.x;
    a.y += b.y;
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, F32, |a, b| {
    a.x *= b;
    a.y *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector2, F32, |a, b| {
    a.mul_assign(b.recip());
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::new(-val.x, -val.y)
});

impl Index<usize> for Vector2 {
    type Output = F32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector2, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon) && a.y.abs_diff_eq(&b.y, epsilon)
});

impl_relative_eq!(Vector2, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative) && a.y.relative_eq(&b.y, epsilon, max_relative)
});

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: F32, y: F32, z: F32) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: F32) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> F32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> F32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> F32 {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut F32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut F32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut F32 {
        &mut self.z
    }

    /// Returns a vector with the square root of each component. A negative
    /// component yields NaN.
    #[inline]
    pub fn component_sqrt(&self) -> Self {
        Self::new(self.x.sqrt(), self.y.sqrt(), self.z.sqrt())
    }

    /// Computes the norm (length) of the vector. The zero vector has norm
    /// exactly zero.
    #[inline]
    pub fn norm(&self) -> F32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> F32 {
        self.dot(self)
    }

    /// Computes the normalized version of the vector.
    ///
    /// This divides by [`Self::norm`] through a single reciprocal
    /// multiplication, so normalizing the zero vector fills the result with
    /// NaN rather than returning an error. Callers that may hold zero-length
    /// vectors must check before normalizing.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the dot product of this vector with another. Commutative.
    #[inline]
    pub fn dot(&self, other: &Self) -> F32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the right-handed cross product of this vector with another.
    ///
    /// Anti-commutative: `a.cross(&b) == -b.cross(&a)`.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the norm of the cross product of this vector with another,
    /// which is the area of the parallelogram the two vectors span.
    #[inline]
    pub fn cross_norm(&self, other: &Self) -> F32 {
        self.cross(other).norm()
    }

    /// Computes the vector triple product `b * (self . c) - c * (self . b)`.
    ///
    /// With this exact operand order the result equals
    /// `self x (b x c)` by the BAC-CAB identity. Callers relying on a
    /// different association of the triple product must rearrange the
    /// arguments themselves.
    #[inline]
    pub fn triple_product(&self, b: &Self, c: &Self) -> Self {
        let dot_ac = self.dot(c);
        let dot_ab = self.dot(b);
        Self::new(
            b.x * dot_ac - c.x * dot_ab,
            b.y * dot_ac - c.y * dot_ab,
            b.z * dot_ac - c.z * dot_ab,
        )
    }

    /// Computes the scalar triple product `c . (self x b)`, the signed
    /// volume of the parallelepiped spanned by the three vectors. The sign
    /// flips under odd permutations of the arguments.
    #[inline]
    pub fn scalar_triple_product(&self, b: &Self, c: &Self) -> F32 {
        c.dot(&self.cross(b))
    }
}

impl From<[F32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [F32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [F32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl From<Vector2> for Vector3 {
    /// The z-component is initialized to zero.
    #[inline]
    fn from(vector: Vector2) -> Self {
        Self::new(vector.x, vector.y, 0.0)
    }
}

impl From<Vector4> for Vector3 {
    /// Drops the w-component. Lossy, no validation.
    #[inline]
    fn from(vector: Vector4) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, Vector3, F32, Vector3, |a, b| {
    Vector3::new(a.x * b, a.y * b, a.z * b)
});

impl_binop!(Mul, mul, F32, Vector3, Vector3, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector3, F32, Vector3, |a, b| { a.mul(b.recip()) });

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, F32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector3, F32, |a, b| {
    a.mul_assign(b.recip());
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl Index<usize> for Vector3 {
    type Output = F32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: F32, y: F32, z: F32, w: F32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: F32) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Reinterprets the given bytes as a reference to a single vector.
    ///
    /// This is the one place where the 16-byte alignment invariant can be
    /// violated by caller data rather than upheld by construction, so it is
    /// checked explicitly.
    ///
    /// # Errors
    /// Returns an [`AlignmentError`] if the data is not 16-byte aligned or
    /// is not exactly 16 bytes long.
    #[inline]
    pub fn ref_from_bytes(bytes: &[u8]) -> Result<&Self, AlignmentError> {
        bytemuck::try_from_bytes(bytes).map_err(|_| AlignmentError)
    }

    /// Reinterprets the given bytes as a slice of vectors.
    ///
    /// # Errors
    /// Returns an [`AlignmentError`] if the data is not 16-byte aligned or
    /// its length is not a multiple of 16 bytes.
    #[inline]
    pub fn slice_from_bytes(bytes: &[u8]) -> Result<&[Self], AlignmentError> {
        bytemuck::try_cast_slice(bytes).map_err(|_| AlignmentError)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> F32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> F32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> F32 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> F32 {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut F32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut F32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut F32 {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut F32 {
        &mut self.w
    }

    /// Returns a vector with the square root of each component. A negative
    /// component yields NaN.
    #[inline]
    pub fn component_sqrt(&self) -> Self {
        Self::new(self.x.sqrt(), self.y.sqrt(), self.z.sqrt(), self.w.sqrt())
    }

    /// Computes the norm (length) of the vector. The zero vector has norm
    /// exactly zero.
    #[inline]
    pub fn norm(&self) -> F32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> F32 {
        self.dot(self)
    }

    /// Computes the normalized version of the vector.
    ///
    /// This divides by [`Self::norm`] through a single reciprocal
    /// multiplication, so normalizing the zero vector fills the result with
    /// NaN rather than returning an error. Callers that may hold zero-length
    /// vectors must check before normalizing.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the dot product of this vector with another. Commutative.
    #[inline]
    pub fn dot(&self, other: &Self) -> F32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

impl From<[F32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [F32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [F32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl From<Vector2> for Vector4 {
    /// The z- and w-components are initialized to zero.
    #[inline]
    fn from(vector: Vector2) -> Self {
        Self::new(vector.x, vector.y, 0.0, 0.0)
    }
}

impl From<Vector3> for Vector4 {
    /// The w-component is initialized to zero.
    #[inline]
    fn from(vector: Vector3) -> Self {
        Self::new(vector.x, vector.y, vector.z, 0.0)
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, Vector4, F32, Vector4, |a, b| {
    Vector4::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_binop!(Mul, mul, F32, Vector4, Vector4, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector4, F32, Vector4, |a, b| { a.mul(b.recip()) });

impl_binop_assign!(AddAssign, add_assign, Vector4, Vector4, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
    a.w += b.w;
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, Vector4, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
    a.w -= b.w;
});

impl_binop_assign!(MulAssign, mul_assign, Vector4, F32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
    a.w *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector4, F32, |a, b| {
    a.mul_assign(b.recip());
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl Index<usize> for Vector4 {
    type Output = F32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector4, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
        && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(Vector4, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
        && a.w.relative_eq(&b.w, epsilon, max_relative)
});

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EPSILON: f32 = 1e-5;

    // === Vector2 tests ===

    #[test]
    fn creating_vector2_works() {
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);

        assert_eq!(Vector2::zeros(), Vector2::new(0.0, 0.0));
        assert_eq!(Vector2::same(3.0), Vector2::new(3.0, 3.0));
        assert_eq!(Vector2::unit_x(), Vector2::new(1.0, 0.0));
        assert_eq!(Vector2::unit_y(), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn vector2_arithmetic_works() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);

        assert_eq!(a + b, Vector2::new(4.0, -2.0));
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vector2::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
        c *= 2.0;
        assert_eq!(c, a * 2.0);
    }

    #[test]
    fn vector2_scalar_division_multiplies_by_reciprocal() {
        let v = Vector2::new(2.0, 4.0);
        assert_eq!(v / 2.0, v * (1.0 / 2.0));

        // Division by zero follows IEEE-754 reciprocal semantics.
        let d = v / 0.0;
        assert_eq!(d.x(), f32::INFINITY);
        assert_eq!(d.y(), f32::INFINITY);
    }

    #[test]
    fn vector2_norm_and_normalization_work() {
        let v = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(v.norm(), 5.0, epsilon = EPSILON);
        assert_eq!(v.norm_squared(), 25.0);
        assert_eq!(Vector2::zeros().norm(), 0.0);

        let n = v.normalized();
        assert_abs_diff_eq!(n.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(n, Vector2::new(0.6, 0.8), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector2_gives_nan() {
        let n = Vector2::zeros().normalized();
        assert!(n.x().is_nan());
        assert!(n.y().is_nan());
    }

    #[test]
    fn vector2_dot_product_is_commutative() {
        let a = Vector2::new(1.5, -2.5);
        let b = Vector2::new(-0.5, 4.0);
        assert_eq!(a.dot(&b), b.dot(&a));
        assert_abs_diff_eq!(a.dot(&b), -10.75, epsilon = EPSILON);
    }

    #[test]
    fn vector2_component_sqrt_works() {
        let v = Vector2::new(4.0, 9.0).component_sqrt();
        assert_eq!(v, Vector2::new(2.0, 3.0));
        assert!(Vector2::new(-1.0, 1.0).component_sqrt().x().is_nan());
    }

    #[test]
    fn converting_to_vector2_drops_trailing_components() {
        assert_eq!(
            Vector2::from(Vector3::new(3.0, 4.0, 5.0)),
            Vector2::new(3.0, 4.0)
        );
        assert_eq!(
            Vector2::from(Vector4::new(3.0, 4.0, 5.0, 6.0)),
            Vector2::new(3.0, 4.0)
        );
    }

    #[test]
    fn vector2_indexing_works() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        v[0] = 10.0;
        assert_eq!(v, Vector2::new(10.0, 2.0));
    }

    #[test]
    #[should_panic]
    fn indexing_vector2_out_of_bounds_panics() {
        let v = Vector2::zeros();
        let _ = v[2];
    }

    // === Vector3 tests ===

    #[test]
    fn creating_vector3_works() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);

        assert_eq!(Vector3::zeros(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(Vector3::same(2.0), Vector3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn vector3_arithmetic_works() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 5.0, 0.5);

        assert_eq!(a + b, Vector3::new(-3.0, 7.0, 3.5));
        assert_eq!(a - b, Vector3::new(5.0, -3.0, 2.5));
        assert_eq!(a * 3.0, Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(3.0 * a, a * 3.0);
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn vector3_scalar_division_multiplies_by_reciprocal() {
        let v = Vector3::new(2.0, 4.0, 8.0);
        assert_eq!(v / 4.0, v * (1.0 / 4.0));

        let d = Vector3::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(d.x(), f32::INFINITY);
        assert_eq!(d.y(), f32::NEG_INFINITY);
        assert!(d.z().is_nan());
    }

    #[test]
    fn vector3_norm_and_normalization_work() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_abs_diff_eq!(v.norm(), 7.0, epsilon = EPSILON);
        assert_eq!(Vector3::zeros().norm(), 0.0);

        let n = v.normalized();
        assert_abs_diff_eq!(n.norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector3_gives_nan() {
        let n = Vector3::zeros().normalized();
        assert!(n.x().is_nan());
        assert!(n.y().is_nan());
        assert!(n.z().is_nan());
    }

    #[test]
    fn vector3_dot_product_is_commutative() {
        let a = Vector3::new(1.0, -2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, -6.0);
        assert_eq!(a.dot(&b), b.dot(&a));
        assert_abs_diff_eq!(a.dot(&b), -24.0, epsilon = EPSILON);
    }

    #[test]
    fn vector3_cross_product_works() {
        let x = Vector3::unit_x();
        let y = Vector3::unit_y();
        assert_eq!(x.cross(&y), Vector3::unit_z());
        assert_eq!(y.cross(&x), -Vector3::unit_z());
    }

    #[test]
    fn vector3_cross_product_is_orthogonal_to_operands() {
        let a = Vector3::new(1.5, -2.0, 0.5);
        let b = Vector3::new(3.0, 1.0, -4.0);
        let c = a.cross(&b);
        assert_abs_diff_eq!(c.dot(&a), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(c.dot(&b), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn vector3_cross_product_is_anti_commutative() {
        let a = Vector3::new(0.3, 2.0, -1.1);
        let b = Vector3::new(-5.0, 0.25, 2.0);
        assert_eq!(a.cross(&b), -b.cross(&a));
    }

    #[test]
    fn vector3_cross_norm_gives_parallelogram_area() {
        let a = Vector3::new(2.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 3.0, 0.0);
        assert_abs_diff_eq!(a.cross_norm(&b), 6.0, epsilon = EPSILON);
        assert_eq!(a.cross_norm(&a), 0.0);
    }

    #[test]
    fn vector3_triple_product_matches_bac_cab_expansion() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-2.0, 0.5, 1.0);
        let c = Vector3::new(4.0, -1.0, 2.0);

        let expected = a.cross(&b.cross(&c));
        assert_abs_diff_eq!(a.triple_product(&b, &c), expected, epsilon = 1e-4);
    }

    #[test]
    fn vector3_scalar_triple_product_gives_signed_volume() {
        let a = Vector3::unit_x();
        let b = Vector3::unit_y();
        let c = Vector3::unit_z();
        assert_eq!(a.scalar_triple_product(&b, &c), 1.0);

        // Odd permutation flips the sign.
        assert_eq!(b.scalar_triple_product(&a, &c), -1.0);
    }

    #[test]
    fn converting_vector2_to_vector3_zero_fills() {
        assert_eq!(
            Vector3::from(Vector2::new(3.0, 4.0)),
            Vector3::new(3.0, 4.0, 0.0)
        );
    }

    #[test]
    fn converting_vector4_to_vector3_drops_w() {
        assert_eq!(
            Vector3::from(Vector4::new(3.0, 4.0, 5.0, 6.0)),
            Vector3::new(3.0, 4.0, 5.0)
        );
    }

    #[test]
    #[should_panic]
    fn indexing_vector3_out_of_bounds_panics() {
        let v = Vector3::zeros();
        let _ = v[3];
    }

    // === Vector4 tests ===

    #[test]
    fn creating_vector4_works() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.w(), 4.0);
    }

    #[test]
    fn vector4_is_16_byte_aligned() {
        assert_eq!(align_of::<Vector4>(), 16);
        assert_eq!(size_of::<Vector4>(), 16);

        let v = Vector4::same(1.0);
        assert_eq!((&raw const v).addr() % 16, 0);
    }

    #[test]
    fn vector4_arithmetic_works() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(0.5, -1.0, 2.0, -3.0);

        assert_eq!(a + b, Vector4::new(1.5, 1.0, 5.0, 1.0));
        assert_eq!(a - b, Vector4::new(0.5, 3.0, 1.0, 7.0));
        assert_eq!(a * 2.0, Vector4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(-a, Vector4::new(-1.0, -2.0, -3.0, -4.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn vector4_scalar_division_multiplies_by_reciprocal() {
        let v = Vector4::new(2.0, 4.0, 8.0, 16.0);
        assert_eq!(v / 8.0, v * (1.0 / 8.0));

        let d = v / 0.0;
        assert_eq!(d.x(), f32::INFINITY);
    }

    #[test]
    fn vector4_norm_and_normalization_work() {
        let v = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_abs_diff_eq!(v.norm(), 2.0, epsilon = EPSILON);
        assert_eq!(Vector4::zeros().norm(), 0.0);

        let n = Vector4::new(0.1, -7.3, 2.5, 100.0).normalized();
        assert_abs_diff_eq!(n.norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector4_gives_nan() {
        let n = Vector4::zeros().normalized();
        assert!(n.x().is_nan());
        assert!(n.w().is_nan());
    }

    #[test]
    fn vector4_dot_product_is_commutative() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(-4.0, 3.0, -2.0, 1.0);
        assert_eq!(a.dot(&b), b.dot(&a));
        assert_eq!(a.dot(&b), 0.0);
    }

    #[test]
    fn converting_vector2_to_vector4_zero_fills() {
        assert_eq!(
            Vector4::from(Vector2::new(3.0, 4.0)),
            Vector4::new(3.0, 4.0, 0.0, 0.0)
        );
    }

    #[test]
    fn converting_vector3_to_vector4_zero_fills() {
        assert_eq!(
            Vector4::from(Vector3::new(3.0, 4.0, 5.0)),
            Vector4::new(3.0, 4.0, 5.0, 0.0)
        );
    }

    #[test]
    fn vector4_round_trips_through_array() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let a: [f32; 4] = v.into();
        assert_eq!(a, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Vector4::from(a), v);
    }

    #[test]
    fn reinterpreting_aligned_bytes_as_vector4_works() {
        let vectors = [Vector4::new(1.0, 2.0, 3.0, 4.0), Vector4::same(5.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&vectors);

        let v = Vector4::ref_from_bytes(&bytes[..16]).unwrap();
        assert_eq!(*v, vectors[0]);

        let slice = Vector4::slice_from_bytes(bytes).unwrap();
        assert_eq!(slice, &vectors);
    }

    #[test]
    fn reinterpreting_misaligned_bytes_as_vector4_fails() {
        let vectors = [Vector4::zeros(); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&vectors);

        // Offsetting by 4 bytes keeps the length right but breaks alignment.
        assert_eq!(
            Vector4::ref_from_bytes(&bytes[4..20]),
            Err(AlignmentError)
        );
        assert_eq!(
            Vector4::slice_from_bytes(&bytes[4..36]),
            Err(AlignmentError)
        );

        // Wrong length fails as well.
        assert!(Vector4::ref_from_bytes(&bytes[..12]).is_err());
    }

    #[test]
    #[should_panic]
    fn indexing_vector4_out_of_bounds_panics() {
        let v = Vector4::zeros();
        let _ = v[4];
    }

    #[test]
    fn vector_relative_eq_works() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = a * (1.0 + 1e-7);
        assert_relative_eq!(a, b, max_relative = 1e-6);
    }
}
