// fedpart-core/src/partition/config.rs

use crate::error::{FedError, Result};
use std::fmt;
use std::str::FromStr;

/// Minimum number of samples every client must own after a heterogeneous split.
pub const DEFAULT_MIN_LEN: usize = 10;

/// Upper bound on heterogeneous split attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// How samples are distributed among clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionMethod {
    /// Uniformly random, near-equal chunks (IID).
    #[default]
    Homogeneous,
    /// Per-class Dirichlet proportions (non-IID).
    Heterogeneous,
}

impl PartitionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionMethod::Homogeneous => "homogeneous",
            PartitionMethod::Heterogeneous => "heterogeneous",
        }
    }
}

impl fmt::Display for PartitionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartitionMethod {
    type Err = FedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "homogeneous" | "homo" | "iid" => Ok(PartitionMethod::Homogeneous),
            "heterogeneous" | "hetero" | "noniid" => Ok(PartitionMethod::Heterogeneous),
            other => Err(FedError::invalid_config(format!(
                "unrecognized partition method '{}'",
                other
            ))),
        }
    }
}

/// Parameters of a single partitioning run.
///
/// Built with [`PartitionConfig::new`] and the `with_*` methods, then checked
/// with [`PartitionConfig::validate`]. Fields only meaningful for
/// [`PartitionMethod::Heterogeneous`] (`alpha`, `class_num`, `max_attempts`)
/// are ignored by the homogeneous split.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionConfig {
    /// Number of simulated clients.
    pub clients_num: usize,
    /// Split strategy.
    pub method: PartitionMethod,
    /// Dirichlet concentration.
    pub alpha: f64,
    /// Number of classes; labels outside `[0, class_num)` are left unassigned.
    pub class_num: usize,
    /// Minimum samples per client.
    pub min_len: usize,
    /// Seed of the stage RNG.
    pub seed: u64,
    /// Bound on heterogeneous retries.
    pub max_attempts: usize,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            clients_num: 1,
            method: PartitionMethod::Homogeneous,
            alpha: 0.5,
            class_num: 0,
            min_len: DEFAULT_MIN_LEN,
            seed: 0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl PartitionConfig {
    pub fn new(clients_num: usize, method: PartitionMethod) -> Self {
        Self {
            clients_num,
            method,
            ..Self::default()
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_class_num(mut self, class_num: usize) -> Self {
        self.class_num = class_num;
        self
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Checks the configuration without looking at any data.
    ///
    /// # Errors
    ///
    /// Returns `FedError::InvalidConfiguration` when `clients_num` is zero, or,
    /// for heterogeneous splits, when `class_num` is zero, `alpha` is not a
    /// finite positive number, or `max_attempts` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.clients_num < 1 {
            return Err(FedError::invalid_config("clients_num must be at least 1"));
        }
        if self.method == PartitionMethod::Heterogeneous {
            if self.class_num < 1 {
                return Err(FedError::invalid_config(
                    "class_num must be at least 1 for heterogeneous partitioning",
                ));
            }
            if !(self.alpha.is_finite() && self.alpha > 0.0) {
                return Err(FedError::invalid_config(format!(
                    "alpha must be a finite positive number, got {}",
                    self.alpha
                )));
            }
            if self.max_attempts < 1 {
                return Err(FedError::invalid_config("max_attempts must be at least 1"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
