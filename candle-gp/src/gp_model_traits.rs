use crate::gp_call_options::CallOptions;
use crate::gp_distribution::MultivariateNormal;
use crate::gp_errors::Result;

use candle_core::Tensor;

/// The prior side of a GP model.
///
/// A concrete model supplies its mean and covariance function here; this
/// is the one operation every model must implement.
pub trait GpPrior {
    /// Evaluate the GP prior at a batch of input locations.
    ///
    /// # Arguments
    /// * `x_nd` - input locations (n x d)
    ///
    /// # Returns
    /// Prior mean and covariance evaluated at `x_nd`
    fn forward(&self, x_nd: &Tensor) -> Result<MultivariateNormal>;

    fn dim_input(&self) -> usize;
}

/// Capability of a variational strategy.
///
/// The strategy owns the approximation; it calls `prior.forward` whenever
/// it needs the GP prior. The model layer never does so on its behalf.
pub trait VariationalStrategy {
    /// Produce the approximate posterior at `x_nd`.
    ///
    /// # Arguments
    /// * `prior` - the model whose prior is being approximated
    /// * `x_nd` - input locations (n x d)
    /// * `opts` - options passed through from the model invocation, verbatim
    ///
    /// # Returns
    /// Approximate posterior at `x_nd`
    fn invoke(
        &self,
        prior: &dyn GpPrior,
        x_nd: &Tensor,
        opts: &CallOptions,
    ) -> Result<MultivariateNormal>;
}
