use super::MatArgs;
use crate::dense::Matrix;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::traits::FactorOps;
use crate::ops::{checks, kernels, CholeskyStrategy, Uplo};
use crate::runtime::accel::{AccelClient, AccelRuntime};

impl FactorOps<AccelRuntime> for AccelClient {
    fn chol<T: Element>(
        &self,
        a: &Matrix<T, AccelRuntime>,
        l: &mut Matrix<T, AccelRuntime>,
        uplo: Uplo,
        strategy: CholeskyStrategy,
    ) -> Result<()> {
        checks::factor_pair(a, l);
        let (aa, la) = (MatArgs::of(a), MatArgs::of(l));
        // The status decides success, so the whole retry loop runs as
        // one blocking command.
        let info = self.run_blocking(move |arena| {
            let src = aa.slice::<T>(arena);
            let dst = la.slice_mut::<T>(arena);
            kernels::factor::chol_inplace(uplo, aa.rows, src, aa.lead, dst, la.lead, strategy)
        });
        if info != 0 {
            return Err(Error::Cholesky { info });
        }
        Ok(())
    }

    fn potrs<T: Element>(
        &self,
        uplo: Uplo,
        l: &Matrix<T, AccelRuntime>,
        b: &mut Matrix<T, AccelRuntime>,
    ) {
        checks::square(l);
        assert_eq!(l.rows(), b.rows(), "potrs: factor order must match B rows");
        let (la, ba) = (MatArgs::of(l), MatArgs::of(b));
        self.run(move |arena| {
            let l = la.slice::<T>(arena);
            let b = ba.slice_mut::<T>(arena);
            kernels::factor::potrs(uplo, la.rows, ba.cols, l, la.lead, b, ba.lead);
        });
    }
}
