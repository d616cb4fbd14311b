//! Vector and matrix algebra for graphics and physics code.
//!
//! This crate is a small arithmetic kernel: 2D, 3D and 4D vectors and a 4x4
//! matrix over `f32`, with construction, component-wise and scalar arithmetic,
//! norms and normalization, dot/cross/triple products and matrix products.
//!
//! Every 4D vector operation exists in two interchangeable forms behind the
//! [`Vector4Ops`](simd::Vector4Ops) trait: a portable scalar form and a
//! SIMD-accelerated form operating on all four components at once.
//! [`Vector4`](vector::Vector4) is 16-byte aligned so either form can be
//! applied to any instance.
//!
//! All operations are pure, allocation-free computations on `Copy` value
//! types. Numeric edge cases (division by zero, square root of a negative
//! number, overflow) propagate as IEEE-754 results rather than errors; the
//! only fallible operation is reinterpreting raw bytes as vectors, which can
//! violate the alignment invariant.

#[macro_use]
mod macros;

pub mod matrix;
pub mod num;
pub mod simd;
pub mod vector;

pub use matrix::Matrix4;
pub use simd::{ScalarOps, SimdOps, Vector4Ops};
pub use vector::{AlignmentError, Vector2, Vector3, Vector4};
