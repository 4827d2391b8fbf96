//! Operation catalogue
//!
//! Per-category traits implemented by each backend client, all funneled
//! into one set of column-major slice kernels so the backends agree
//! bit-for-bit on scalar order of operations.

mod accel;
pub(crate) mod checks;
mod host;
pub mod kernels;
mod traits;

pub use traits::{
    BroadcastOps, FactorOps, FactorUpdateOps, Level1Ops, Level2Ops, Level3Ops, MatrixOps,
    ReduceOps,
};

/// Transpose flag for level-2/3 operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trans {
    /// Use the operand as stored.
    No,
    /// Use the transpose of the operand.
    Trans,
}

/// Which triangle of a symmetric or triangular operand is referenced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Uplo {
    /// Upper triangle.
    Upper,
    /// Lower triangle.
    Lower,
}

/// Side of a matrix product a special operand appears on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Operand multiplies from the left.
    Left,
    /// Operand multiplies from the right.
    Right,
}

/// Whether a triangular operand has an implicit unit diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diag {
    /// Diagonal elements are stored.
    NonUnit,
    /// Diagonal elements are taken as one and not referenced.
    Unit,
}

/// What to do when Cholesky decomposition reports numerical failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CholeskyStrategy {
    /// Surface the failure immediately.
    Fail,
    /// Retry with growing diagonal loading before surfacing failure.
    AdjustDiagonal,
}
