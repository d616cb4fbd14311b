//! Fixed-width scalar type aliases.
//!
//! The algebra modules spell their scalar type through these aliases so that
//! the numeric width is explicit at every signature. The assertions below pin
//! the sizes the rest of the crate relies on, in particular that four [`F32`]
//! components fit exactly in one 128-bit SIMD register.

/// 8-bit unsigned integer.
pub type U8 = u8;

/// 16-bit unsigned integer.
pub type U16 = u16;

/// 32-bit unsigned integer.
pub type U32 = u32;

/// 64-bit unsigned integer.
pub type U64 = u64;

/// 8-bit signed integer.
pub type I8 = i8;

/// 16-bit signed integer.
pub type I16 = i16;

/// 32-bit signed integer.
pub type I32 = i32;

/// 64-bit signed integer.
pub type I64 = i64;

/// 32-bit floating point number.
pub type F32 = f32;

/// 64-bit floating point number.
pub type F64 = f64;

const _: () = assert!(size_of::<U8>() == 1);
const _: () = assert!(size_of::<U16>() == 2);
const _: () = assert!(size_of::<U32>() == 4);
const _: () = assert!(size_of::<U64>() == 8);

const _: () = assert!(size_of::<I8>() == 1);
const _: () = assert!(size_of::<I16>() == 2);
const _: () = assert!(size_of::<I32>() == 4);
const _: () = assert!(size_of::<I64>() == 8);

const _: () = assert!(size_of::<F32>() == 4);
const _: () = assert!(size_of::<F64>() == 8);
