//! Element types supported by lacore
//!
//! The execution layer handles IEEE single and double precision reals only;
//! [`DType`] is the runtime tag and [`Element`] the compile-time bound
//! connecting Rust's `f32`/`f64` to it.

use bytemuck::{Pod, Zeroable};
use num_traits::Float;

/// Runtime element-type tag
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit IEEE float
    F32,
    /// 64-bit IEEE float
    F64,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            DType::F32 => 4,
            DType::F64 => 8,
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DType::F32 => write!(f, "f32"),
            DType::F64 => write!(f, "f64"),
        }
    }
}

/// Trait for types that can be elements of a vector or matrix
///
/// Implemented for `f32` and `f64` only. The `Pod` bound allows safe byte
/// staging across the host/device boundary; the `Float` bound provides the
/// arithmetic the kernels need.
pub trait Element:
    Float + Pod + Zeroable + Send + Sync + std::fmt::Debug + std::fmt::Display + 'static
{
    /// The corresponding runtime tag for this Rust type
    const DTYPE: DType;

    /// Number of mantissa digits, including the implicit bit
    ///
    /// Seeds the diagonal-loading factor of the Cholesky retry loop as
    /// `2^-digits`.
    const MANT_DIGITS: u32;

    /// Convert from f64 to this type
    fn from_f64(v: f64) -> Self;

    /// Convert to f64
    fn to_f64(self) -> f64;
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;
    const MANT_DIGITS: u32 = f32::MANTISSA_DIGITS;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;
    const MANT_DIGITS: u32 = f64::MANTISSA_DIGITS;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}
