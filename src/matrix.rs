//! Matrices.

use crate::num::F32;
use crate::vector::Vector4;
use bytemuck::{Pod, Zeroable};

/// A 4x4 matrix.
///
/// Each mathematical row is held contiguously as one [`Vector4`], so
/// [`Self::element`]`(i, j)` is the entry at row `i`, column `j` and
/// constructors take their input in row-major order without rearranging it.
/// The row storage inherits the 16-byte alignment of [`Vector4`].
#[repr(C)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    rows: [Vector4; 4],
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_rows(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::unit_w(),
        )
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_rows(
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
        )
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4) -> Self {
        Self::from_rows(
            Vector4::new(diagonal.x(), 0.0, 0.0, 0.0),
            Vector4::new(0.0, diagonal.y(), 0.0, 0.0),
            Vector4::new(0.0, 0.0, diagonal.z(), 0.0),
            Vector4::new(0.0, 0.0, 0.0, diagonal.w()),
        )
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(row_1: Vector4, row_2: Vector4, row_3: Vector4, row_4: Vector4) -> Self {
        Self {
            rows: [row_1, row_2, row_3, row_4],
        }
    }

    /// Creates a matrix from the given sixteen elements in row-major order:
    /// `m<i><j>` is the entry at row `i`, column `j`.
    #[inline]
    pub const fn from_elements(
        m11: F32,
        m12: F32,
        m13: F32,
        m14: F32,
        m21: F32,
        m22: F32,
        m23: F32,
        m24: F32,
        m31: F32,
        m32: F32,
        m33: F32,
        m34: F32,
        m41: F32,
        m42: F32,
        m43: F32,
        m44: F32,
    ) -> Self {
        Self::from_rows(
            Vector4::new(m11, m12, m13, m14),
            Vector4::new(m21, m22, m23, m24),
            Vector4::new(m31, m32, m33, m34),
            Vector4::new(m41, m42, m43, m44),
        )
    }

    /// Creates a matrix from the given first row and the remaining twelve
    /// elements in row-major order.
    #[inline]
    pub const fn from_one_row_and_elements(
        row_1: Vector4,
        m21: F32,
        m22: F32,
        m23: F32,
        m24: F32,
        m31: F32,
        m32: F32,
        m33: F32,
        m34: F32,
        m41: F32,
        m42: F32,
        m43: F32,
        m44: F32,
    ) -> Self {
        Self::from_rows(
            row_1,
            Vector4::new(m21, m22, m23, m24),
            Vector4::new(m31, m32, m33, m34),
            Vector4::new(m41, m42, m43, m44),
        )
    }

    /// Creates a matrix from the given first two rows and the remaining
    /// eight elements in row-major order.
    #[inline]
    pub const fn from_two_rows_and_elements(
        row_1: Vector4,
        row_2: Vector4,
        m31: F32,
        m32: F32,
        m33: F32,
        m34: F32,
        m41: F32,
        m42: F32,
        m43: F32,
        m44: F32,
    ) -> Self {
        Self::from_rows(
            row_1,
            row_2,
            Vector4::new(m31, m32, m33, m34),
            Vector4::new(m41, m42, m43, m44),
        )
    }

    /// Creates a matrix from the given first three rows and the four
    /// elements of the last row.
    #[inline]
    pub const fn from_three_rows_and_elements(
        row_1: Vector4,
        row_2: Vector4,
        row_3: Vector4,
        m41: F32,
        m42: F32,
        m43: F32,
        m44: F32,
    ) -> Self {
        Self::from_rows(row_1, row_2, row_3, Vector4::new(m41, m42, m43, m44))
    }

    /// Overwrites this matrix with the given rows.
    ///
    /// Identical in semantics to [`Self::from_rows`]; the only difference is
    /// that an existing instance is written through instead of a new value
    /// being produced.
    #[inline]
    pub const fn set_rows(
        &mut self,
        row_1: Vector4,
        row_2: Vector4,
        row_3: Vector4,
        row_4: Vector4,
    ) {
        self.rows = [row_1, row_2, row_3, row_4];
    }

    /// Overwrites this matrix with the given sixteen elements in row-major
    /// order. Identical in semantics to [`Self::from_elements`].
    #[inline]
    pub const fn set_elements(
        &mut self,
        m11: F32,
        m12: F32,
        m13: F32,
        m14: F32,
        m21: F32,
        m22: F32,
        m23: F32,
        m24: F32,
        m31: F32,
        m32: F32,
        m33: F32,
        m34: F32,
        m41: F32,
        m42: F32,
        m43: F32,
        m44: F32,
    ) {
        *self = Self::from_elements(
            m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44,
        );
    }

    /// Returns row `i` of the matrix.
    ///
    /// # Panics
    /// If `i` is not in `0..4`.
    #[inline]
    pub fn row(&self, i: usize) -> &Vector4 {
        &self.rows[i]
    }

    /// Returns column `j` of the matrix as a vector.
    ///
    /// # Panics
    /// If `j` is not in `0..4`.
    #[inline]
    pub fn column(&self, j: usize) -> Vector4 {
        Vector4::new(
            self.rows[0][j],
            self.rows[1][j],
            self.rows[2][j],
            self.rows[3][j],
        )
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> F32 {
        self.rows[i][j]
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut F32 {
        &mut self.rows[i][j]
    }
}

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    let mut m = Matrix4::zeros();
    for i in 0..4 {
        for j in 0..4 {
            *m.element_mut(i, j) = a.row(i).dot(&b.column(j));
        }
    }
    m
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |m, v| {
    Vector4::new(
        m.row(0).dot(v),
        m.row(1).dot(v),
        m.row(2).dot(v),
        m.row(3).dot(v),
    )
});

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.rows[0].abs_diff_eq(&b.rows[0], epsilon)
        && a.rows[1].abs_diff_eq(&b.rows[1], epsilon)
        && a.rows[2].abs_diff_eq(&b.rows[2], epsilon)
        && a.rows[3].abs_diff_eq(&b.rows[3], epsilon)
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.rows[0].relative_eq(&b.rows[0], epsilon, max_relative)
        && a.rows[1].relative_eq(&b.rows[1], epsilon, max_relative)
        && a.rows[2].relative_eq(&b.rows[2], epsilon, max_relative)
        && a.rows[3].relative_eq(&b.rows[3], epsilon, max_relative)
});
