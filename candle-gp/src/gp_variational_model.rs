//! Variational Gaussian process model.
//!
//! A model is assembled from two borrowed collaborators: a prior
//! (`GpPrior`, the mean/covariance function) and a variational strategy
//! (`VariationalStrategy`, the posterior approximation). Invoking the
//! model is pure delegation: inputs and options go to the strategy as-is,
//! and the strategy calls back into the prior when it needs it.

use crate::gp_call_options::CallOptions;
use crate::gp_distribution::MultivariateNormal;
use crate::gp_errors::{GpError, Result};
use crate::gp_model_traits::{GpPrior, VariationalStrategy};

use candle_core::Tensor;
use log::debug;

/// Common core of every GP model.
///
/// Carries no state of its own; assembled models embed one and supply the
/// actual prior through `GpPrior`. Its own `forward` always fails.
#[derive(Debug, Default)]
pub struct Gp;

impl Gp {
    pub fn new() -> Self {
        Self
    }
}

impl GpPrior for Gp {
    fn forward(&self, _x_nd: &Tensor) -> Result<MultivariateNormal> {
        Err(GpError::Unimplemented("the base Gp type"))
    }

    fn dim_input(&self) -> usize {
        0
    }
}

pub struct VariationalGp<'a, M, S>
where
    M: GpPrior,
    S: VariationalStrategy,
{
    pub gp: Gp,
    pub prior: &'a M,
    pub strategy: &'a S,
}

pub trait VariationalGpT<'a, M, S>
where
    M: GpPrior,
    S: VariationalStrategy,
{
    /// Build a variational GP model
    /// * `prior` - mean/covariance function of the GP
    /// * `strategy` - posterior approximation bound for the model's lifetime
    fn build(prior: &'a M, strategy: &'a S) -> Self;

    /// Approximate posterior at `x_nd`.
    ///
    /// Inputs and options are forwarded to the strategy unchanged and its
    /// result is returned as-is. `forward` is never called here; that is
    /// the strategy's business.
    fn call(&self, x_nd: &Tensor, opts: &CallOptions) -> Result<MultivariateNormal>;
}

impl<'a, M, S> VariationalGpT<'a, M, S> for VariationalGp<'a, M, S>
where
    M: GpPrior,
    S: VariationalStrategy,
{
    fn build(prior: &'a M, strategy: &'a S) -> Self {
        let gp = Gp::new();

        Self {
            gp,
            prior,
            strategy,
        }
    }

    fn call(&self, x_nd: &Tensor, opts: &CallOptions) -> Result<MultivariateNormal> {
        debug!("delegating inputs {:?} to the variational strategy", x_nd.shape());
        self.strategy.invoke(self.prior, x_nd, opts)
    }
}
