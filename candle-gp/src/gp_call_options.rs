use std::collections::BTreeMap;

/// A single extension option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Options carried from a model invocation to its variational strategy.
///
/// `full_cov` asks the strategy for a full posterior covariance instead of
/// the marginal variances. Anything a particular strategy understands
/// beyond that rides in the extension map under its own key. The model
/// layer never reads either; options reach the strategy exactly as built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallOptions {
    pub full_cov: bool,
    extensions: BTreeMap<String, OptionValue>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_full_cov(mut self, full_cov: bool) -> Self {
        self.full_cov = full_cov;
        self
    }

    /// Attach a strategy-specific option under `key`.
    pub fn with_extension(mut self, key: impl Into<String>, value: OptionValue) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    pub fn extension(&self, key: &str) -> Option<&OptionValue> {
        self.extensions.get(key)
    }

    pub fn extensions(&self) -> &BTreeMap<String, OptionValue> {
        &self.extensions
    }
}
