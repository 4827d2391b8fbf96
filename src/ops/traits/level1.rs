//! Level-1 operations

use crate::dense::Vector;
use crate::dtype::Element;
use crate::runtime::Runtime;

/// Vector-vector operations.
///
/// Implemented per backend client; the backend is selected by the
/// runtime parameter of the operands.
pub trait Level1Ops<R: Runtime> {
    /// Dot product `x . y`.
    ///
    /// Blocks until the result is available on asynchronous backends.
    fn dot<T: Element>(&self, x: &Vector<T, R>, y: &Vector<T, R>) -> T;

    /// Sum of squares `x . x`.
    ///
    /// Blocks until the result is available on asynchronous backends.
    fn dot_self<T: Element>(&self, x: &Vector<T, R>) -> T;

    /// Index of the element of largest magnitude.
    ///
    /// Blocks until the result is available on asynchronous backends.
    fn iamax<T: Element>(&self, x: &Vector<T, R>) -> usize;

    /// `y <- alpha * x + y`, or `alpha * x` when `clear` is set.
    fn axpy<T: Element>(&self, alpha: T, x: &Vector<T, R>, y: &mut Vector<T, R>, clear: bool);

    /// `x <- alpha * x`.
    fn scal<T: Element>(&self, alpha: T, x: &mut Vector<T, R>);
}
