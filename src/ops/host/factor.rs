use super::{mat_mut, mat_ref, vec_mut};
use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::traits::{FactorOps, FactorUpdateOps};
use crate::ops::{checks, kernels, CholeskyStrategy, Uplo};
use crate::runtime::host::{HostClient, HostRuntime};

impl FactorOps<HostRuntime> for HostClient {
    fn chol<T: Element>(
        &self,
        a: &Matrix<T, HostRuntime>,
        l: &mut Matrix<T, HostRuntime>,
        uplo: Uplo,
        strategy: CholeskyStrategy,
    ) -> Result<()> {
        checks::factor_pair(a, l);
        let (n, lda, ldl) = (a.rows(), a.lead(), l.lead());
        let info = kernels::factor::chol_inplace(uplo, n, mat_ref(a), lda, mat_mut(l), ldl, strategy);
        if info != 0 {
            return Err(Error::Cholesky { info });
        }
        Ok(())
    }

    fn potrs<T: Element>(
        &self,
        uplo: Uplo,
        l: &Matrix<T, HostRuntime>,
        b: &mut Matrix<T, HostRuntime>,
    ) {
        checks::square(l);
        assert_eq!(l.rows(), b.rows(), "potrs: factor order must match B rows");
        let (n, nrhs, lda, ldb) = (l.rows(), b.cols(), l.lead(), b.lead());
        kernels::factor::potrs(uplo, n, nrhs, mat_ref(l), lda, mat_mut(b), ldb);
    }
}

impl FactorUpdateOps<HostRuntime> for HostClient {
    fn ch1up<T: Element>(
        &self,
        u: &mut Matrix<T, HostRuntime>,
        a: &mut Vector<T, HostRuntime>,
        b: &mut Vector<T, HostRuntime>,
    ) {
        checks::factor_update(u, a, b);
        let (n, ldu) = (u.rows(), u.lead());
        let (inca, incb) = (a.inc(), b.inc());
        kernels::factor::ch1up(n, mat_mut(u), ldu, vec_mut(a), inca, vec_mut(b), incb);
    }

    fn ch1dn<T: Element>(
        &self,
        u: &mut Matrix<T, HostRuntime>,
        a: &mut Vector<T, HostRuntime>,
        b: &mut Vector<T, HostRuntime>,
    ) -> Result<()> {
        checks::factor_update(u, a, b);
        let (n, ldu) = (u.rows(), u.lead());
        let (inca, incb) = (a.inc(), b.inc());
        let info = kernels::factor::ch1dn(n, mat_mut(u), ldu, vec_mut(a), inca, vec_mut(b), incb);
        if info != 0 {
            return Err(Error::Downdate { info });
        }
        Ok(())
    }
}
