use crate::gp_call_options::CallOptions;
use crate::gp_distribution::{Covariance, MultivariateNormal};
use crate::gp_errors::Result;
use crate::gp_model_traits::{GpPrior, VariationalStrategy};

use candle_core::Tensor;

/// Strategy that performs no approximation: the posterior is the prior.
///
/// Useful as a stand-in while wiring a model together. Unless `full_cov`
/// is requested, a full prior covariance is reduced to its marginal
/// variances before being returned.
#[derive(Debug, Default, Clone)]
pub struct PriorStrategy;

impl PriorStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl VariationalStrategy for PriorStrategy {
    fn invoke(
        &self,
        prior: &dyn GpPrior,
        x_nd: &Tensor,
        opts: &CallOptions,
    ) -> Result<MultivariateNormal> {
        let prior_x = prior.forward(x_nd)?;

        if opts.full_cov {
            return Ok(prior_x);
        }

        match prior_x.covariance() {
            Covariance::Diagonal(_) => Ok(prior_x),
            Covariance::Full(_) => {
                let var_n = prior_x.variance()?;
                MultivariateNormal::diagonal(prior_x.mean().clone(), var_n)
            }
        }
    }
}
