pub mod gp_call_options;
pub mod gp_distribution;
pub mod gp_errors;
pub mod gp_model_traits;
pub mod gp_prior_strategy;
pub mod gp_variational_model;

pub use candle_core;
pub use candle_nn;
