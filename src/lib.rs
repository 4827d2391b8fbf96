//! Dense linear algebra execution layer for state-space filtering
//! workloads.
//!
//! The crate provides column-major [`dense::Vector`] and
//! [`dense::Matrix`] containers over two interchangeable backends: a
//! synchronous host backend and an asynchronous accelerator backend
//! driven by a shared command queue. The full BLAS-style operation
//! catalogue, row/column broadcasts and reductions, and a Cholesky
//! engine with diagonal-loading retry and rank-1 update/downdate run
//! against either backend through the same per-category traits.
//!
//! # Example
//!
//! ```
//! use lacore::prelude::*;
//!
//! let client = HostRuntime::default_client(&HostRuntime::default_device());
//! let a = Matrix::<f64, HostRuntime>::from_slice(&[4.0, 2.0, 2.0, 3.0], 2, 2, &client);
//! let mut l = Matrix::zeros(2, 2, &client);
//! client
//!     .chol(&a, &mut l, Uplo::Lower, CholeskyStrategy::AdjustDiagonal)
//!     .unwrap();
//! assert_eq!(l.to_vec()[0], 2.0);
//! ```

#![warn(missing_docs)]

pub mod dense;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod stage;

pub use error::{Error, Result};

/// The runtime used when no placement decision is made explicitly.
pub type DefaultRuntime = runtime::host::HostRuntime;

/// Common imports for working with the crate.
pub mod prelude {
    pub use crate::dense::{Matrix, Storage, Vector};
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{
        BroadcastOps, CholeskyStrategy, Diag, FactorOps, FactorUpdateOps, Level1Ops, Level2Ops,
        Level3Ops, MatrixOps, ReduceOps, Side, Trans, Uplo,
    };
    pub use crate::runtime::accel::{AccelClient, AccelDevice, AccelRuntime};
    pub use crate::runtime::host::{HostClient, HostDevice, HostRuntime};
    pub use crate::runtime::{Device, Runtime, RuntimeClient};
    pub use crate::stage::{map_matrix, map_vector, matrix_to_runtime, vector_to_runtime};
    pub use crate::DefaultRuntime;
}
