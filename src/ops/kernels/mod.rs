//! Column-major slice kernels shared by the backends
//!
//! Operands arrive as slices whose first element is the operand's
//! first element; increments and leading dimensions are in elements.
//! Both backends execute these exact loops, so scalar order of
//! operations, and therefore rounding, agrees between them.

pub mod broadcast;
pub mod factor;
pub mod level1;
pub mod level2;
pub mod level3;
pub mod matrix;
pub mod reduce;
