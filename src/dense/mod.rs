//! Dense vector and matrix containers
//!
//! Column-major storage with explicit increments and leading
//! dimensions, shared between backends through reference-counted
//! [`Storage`].

mod matrix;
mod storage;
mod vector;

pub use matrix::Matrix;
pub use storage::Storage;
pub use vector::Vector;
