//! SIMD execution path for 4-component vector operations.
//!
//! Every [`Vector4`] operation exists in two interchangeable strategies
//! behind the [`Vector4Ops`] trait: [`ScalarOps`] computes one component at a
//! time and [`SimdOps`] moves all four components through a 128-bit register
//! at once. The 16-byte alignment of [`Vector4`] guarantees that the packed
//! loads and stores are valid for every instance.
//!
//! The two strategies are numerically equivalent: the lane-independent
//! operations (`add`, `sub`, `scalar_mul`, `scalar_div`, `component_sqrt`)
//! produce bit-identical results, while the horizontal reductions may sum in
//! a different order between the paths. `norm` and `normalized` agree within
//! a few ULP; `dot` agrees within an absolute tolerance proportional to the
//! product of the operand norms, since cancellation can leave its result
//! arbitrarily small relative to the summed terms.

use crate::num::F32;
use crate::vector::Vector4;

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    __m128, _mm_add_ps, _mm_add_ss, _mm_cvtss_f32, _mm_div_ps, _mm_load_ps, _mm_movehl_ps,
    _mm_mul_ps, _mm_set1_ps, _mm_shuffle_ps, _mm_sqrt_ps, _mm_sqrt_ss, _mm_store_ps, _mm_sub_ps,
};

/// The 4D vector operation set, implemented by one strategy per execution
/// path.
///
/// For any valid input, all implementing strategies compute the same
/// mathematical result. Lane-independent operations are bit-identical across
/// strategies. The order of the horizontal summation is strategy-specific:
/// `norm` and `normalized` agree within 4 ULP, and `dot` agrees within an
/// absolute tolerance scaled by the product of the operand norms, since its
/// summation can cancel to a result far smaller than the summed terms.
pub trait Vector4Ops {
    /// Adds the two vectors component-wise.
    fn add(v: &Vector4, v1: &Vector4) -> Vector4;

    /// Subtracts the second vector from the first component-wise.
    fn sub(v: &Vector4, v1: &Vector4) -> Vector4;

    /// Multiplies each component by the given scalar.
    fn scalar_mul(v: &Vector4, s: F32) -> Vector4;

    /// Divides each component by the given scalar.
    ///
    /// The reciprocal of the scalar is computed once and multiplied onto
    /// each component, so dividing by zero or by a value small enough for
    /// the reciprocal to overflow yields inf/NaN components per IEEE-754.
    fn scalar_div(v: &Vector4, s: F32) -> Vector4;

    /// Takes the square root of each component. A negative component yields
    /// NaN.
    fn component_sqrt(v: &Vector4) -> Vector4;

    /// Computes the norm (length) of the vector.
    fn norm(v: &Vector4) -> F32;

    /// Computes the normalized version of the vector. The zero vector
    /// normalizes to NaN components; callers must guard themselves.
    fn normalized(v: &Vector4) -> Vector4;

    /// Computes the dot product of the two vectors.
    fn dot(v: &Vector4, v1: &Vector4) -> F32;
}

/// The portable strategy: one scalar instruction per component.
#[derive(Clone, Copy, Debug)]
pub struct ScalarOps;

/// The packed strategy: all four components in one 128-bit register.
///
/// On `x86_64` this uses SSE instructions, which are part of the baseline
/// instruction set there. On other architectures the strategy falls back to
/// the scalar implementation, keeping the trait usable everywhere.
#[derive(Clone, Copy, Debug)]
pub struct SimdOps;

impl Vector4Ops for ScalarOps {
    #[inline]
    fn add(v: &Vector4, v1: &Vector4) -> Vector4 {
        v + v1
    }

    #[inline]
    fn sub(v: &Vector4, v1: &Vector4) -> Vector4 {
        v - v1
    }

    #[inline]
    fn scalar_mul(v: &Vector4, s: F32) -> Vector4 {
        v * s
    }

    #[inline]
    fn scalar_div(v: &Vector4, s: F32) -> Vector4 {
        v / s
    }

    #[inline]
    fn component_sqrt(v: &Vector4) -> Vector4 {
        v.component_sqrt()
    }

    #[inline]
    fn norm(v: &Vector4) -> F32 {
        v.norm()
    }

    #[inline]
    fn normalized(v: &Vector4) -> Vector4 {
        v.normalized()
    }

    #[inline]
    fn dot(v: &Vector4, v1: &Vector4) -> F32 {
        v.dot(v1)
    }
}

/// Loads the four components into a 128-bit register.
///
/// `Vector4` is `repr(C, align(16))` and exactly 16 bytes, so the aligned
/// packed load is in bounds and satisfies the alignment requirement of
/// `_mm_load_ps` for every instance.
#[cfg(target_arch = "x86_64")]
#[inline]
fn load(v: &Vector4) -> __m128 {
    unsafe { _mm_load_ps((v as *const Vector4).cast::<F32>()) }
}

/// Stores a 128-bit register into a new vector. Same layout argument as for
/// [`load`].
#[cfg(target_arch = "x86_64")]
#[inline]
fn store(lanes: __m128) -> Vector4 {
    let mut result = Vector4::zeros();
    unsafe { _mm_store_ps((&raw mut result).cast::<F32>(), lanes) };
    result
}

/// Sums all four lanes into lane 0: the high pair is folded onto the low
/// pair, then the two remaining partial sums are added.
#[cfg(target_arch = "x86_64")]
#[inline]
fn sum_lanes(lanes: __m128) -> __m128 {
    unsafe {
        let folded = _mm_add_ps(lanes, _mm_movehl_ps(lanes, lanes));
        _mm_add_ss(folded, _mm_shuffle_ps::<0b01_01_01_01>(folded, folded))
    }
}

#[cfg(target_arch = "x86_64")]
impl Vector4Ops for SimdOps {
    #[inline]
    fn add(v: &Vector4, v1: &Vector4) -> Vector4 {
        store(unsafe { _mm_add_ps(load(v), load(v1)) })
    }

    #[inline]
    fn sub(v: &Vector4, v1: &Vector4) -> Vector4 {
        store(unsafe { _mm_sub_ps(load(v), load(v1)) })
    }

    #[inline]
    fn scalar_mul(v: &Vector4, s: F32) -> Vector4 {
        store(unsafe { _mm_mul_ps(load(v), _mm_set1_ps(s)) })
    }

    #[inline]
    fn scalar_div(v: &Vector4, s: F32) -> Vector4 {
        // The scalar reciprocal is broadcast and multiplied, matching the
        // scalar strategy lane for lane.
        store(unsafe { _mm_mul_ps(load(v), _mm_set1_ps(s.recip())) })
    }

    #[inline]
    fn component_sqrt(v: &Vector4) -> Vector4 {
        store(unsafe { _mm_sqrt_ps(load(v)) })
    }

    #[inline]
    fn norm(v: &Vector4) -> F32 {
        let lanes = load(v);
        unsafe { _mm_cvtss_f32(_mm_sqrt_ss(sum_lanes(_mm_mul_ps(lanes, lanes)))) }
    }

    #[inline]
    fn normalized(v: &Vector4) -> Vector4 {
        let norm = Self::norm(v);
        store(unsafe { _mm_div_ps(load(v), _mm_set1_ps(norm)) })
    }

    #[inline]
    fn dot(v: &Vector4, v1: &Vector4) -> F32 {
        unsafe { _mm_cvtss_f32(sum_lanes(_mm_mul_ps(load(v), load(v1)))) }
    }
}

#[cfg(not(target_arch = "x86_64"))]
impl Vector4Ops for SimdOps {
    #[inline]
    fn add(v: &Vector4, v1: &Vector4) -> Vector4 {
        ScalarOps::add(v, v1)
    }

    #[inline]
    fn sub(v: &Vector4, v1: &Vector4) -> Vector4 {
        ScalarOps::sub(v, v1)
    }

    #[inline]
    fn scalar_mul(v: &Vector4, s: F32) -> Vector4 {
        ScalarOps::scalar_mul(v, s)
    }

    #[inline]
    fn scalar_div(v: &Vector4, s: F32) -> Vector4 {
        ScalarOps::scalar_div(v, s)
    }

    #[inline]
    fn component_sqrt(v: &Vector4) -> Vector4 {
        ScalarOps::component_sqrt(v)
    }

    #[inline]
    fn norm(v: &Vector4) -> F32 {
        ScalarOps::norm(v)
    }

    #[inline]
    fn normalized(v: &Vector4) -> Vector4 {
        ScalarOps::normalized(v)
    }

    #[inline]
    fn dot(v: &Vector4, v1: &Vector4) -> F32 {
        ScalarOps::dot(v, v1)
    }
}
