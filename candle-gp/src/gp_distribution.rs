use crate::gp_errors::{GpError, Result};

use candle_core::{DType, Device, Tensor};

/// Covariance of a multivariate normal over function values.
#[derive(Debug, Clone)]
pub enum Covariance {
    /// Full covariance matrix (n x n)
    Full(Tensor),
    /// Marginal variances only (n)
    Diagonal(Tensor),
}

/// A multivariate normal over function values at a batch of input points.
///
/// This is the value crossing both model seams: `forward` returns the GP
/// prior in this form and a variational strategy returns the approximate
/// posterior in this form.
#[derive(Debug, Clone)]
pub struct MultivariateNormal {
    mean_n: Tensor,
    cov: Covariance,
}

impl MultivariateNormal {
    /// Create a normal with a full covariance matrix.
    ///
    /// # Arguments
    /// * `mean_n` - mean function values (n)
    /// * `cov_nn` - covariance matrix (n x n)
    pub fn new(mean_n: Tensor, cov_nn: Tensor) -> Result<Self> {
        let n = mean_n.dims1()?;
        let (rows, cols) = cov_nn.dims2()?;
        if rows != n || cols != n {
            return Err(GpError::Shape {
                expected: format!("({}, {})", n, n),
                got: format!("({}, {})", rows, cols),
            });
        }
        Ok(Self {
            mean_n,
            cov: Covariance::Full(cov_nn),
        })
    }

    /// Create a normal with independent components.
    ///
    /// # Arguments
    /// * `mean_n` - mean function values (n)
    /// * `var_n` - marginal variances (n)
    pub fn diagonal(mean_n: Tensor, var_n: Tensor) -> Result<Self> {
        let n = mean_n.dims1()?;
        let n_var = var_n.dims1()?;
        if n_var != n {
            return Err(GpError::Shape {
                expected: format!("({})", n),
                got: format!("({})", n_var),
            });
        }
        Ok(Self {
            mean_n,
            cov: Covariance::Diagonal(var_n),
        })
    }

    /// Mean function values (n).
    pub fn mean(&self) -> &Tensor {
        &self.mean_n
    }

    pub fn covariance(&self) -> &Covariance {
        &self.cov
    }

    /// Marginal variances (n), the diagonal of either covariance form.
    pub fn variance(&self) -> Result<Tensor> {
        match &self.cov {
            Covariance::Diagonal(var_n) => Ok(var_n.clone()),
            Covariance::Full(k_nn) => {
                let n = self.num_points();
                let eye_nn = Tensor::eye(n, k_nn.dtype(), k_nn.device())?;
                Ok((k_nn * eye_nn)?.sum(1)?)
            }
        }
    }

    pub fn num_points(&self) -> usize {
        self.mean_n.dims()[0]
    }

    pub fn device(&self) -> &Device {
        self.mean_n.device()
    }

    pub fn dtype(&self) -> DType {
        self.mean_n.dtype()
    }
}
