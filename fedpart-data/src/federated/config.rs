// fedpart-data/src/federated/config.rs

use fedpart_core::{FedError, PartitionConfig, PartitionMethod};

/// Configuration of a federated experiment's data side.
///
/// Wraps the [`PartitionConfig`] together with the loader settings. Every
/// field is checked by [`FedConfig::validate`] before any data is touched.
#[derive(Debug, Clone, PartialEq)]
pub struct FedConfig {
    pub partition: PartitionConfig,
    /// Samples per mini-batch, for client and global loaders alike.
    pub batch_size: usize,
    /// Local iterations per round. `None` means one full client pass per round.
    pub inner_loop: Option<usize>,
}

impl FedConfig {
    /// Homogeneous split over `clients_num` clients, no inner loop, seed 0.
    pub fn new(clients_num: usize, batch_size: usize) -> Self {
        Self {
            partition: PartitionConfig::new(clients_num, PartitionMethod::Homogeneous),
            batch_size,
            inner_loop: None,
        }
    }

    pub fn with_inner_loop(mut self, inner_loop: usize) -> Self {
        self.inner_loop = Some(inner_loop);
        self
    }

    pub fn with_method(mut self, method: PartitionMethod) -> Self {
        self.partition.method = method;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.partition = self.partition.with_alpha(alpha);
        self
    }

    pub fn with_class_num(mut self, class_num: usize) -> Self {
        self.partition = self.partition.with_class_num(class_num);
        self
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.partition = self.partition.with_min_len(min_len);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.partition = self.partition.with_seed(seed);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.partition = self.partition.with_max_attempts(max_attempts);
        self
    }

    pub fn clients_num(&self) -> usize {
        self.partition.clients_num
    }

    /// # Errors
    ///
    /// Returns `FedError::InvalidConfiguration` for a zero `batch_size`, a
    /// zero `inner_loop`, a `batch_size * inner_loop` that overflows, or
    /// anything [`PartitionConfig::validate`] rejects.
    pub fn validate(&self) -> Result<(), FedError> {
        if self.batch_size < 1 {
            return Err(FedError::invalid_config("batch_size must be at least 1"));
        }
        if let Some(inner_loop) = self.inner_loop {
            if inner_loop == 0 {
                return Err(FedError::invalid_config("inner_loop must be at least 1"));
            }
            if self.batch_size.checked_mul(inner_loop).is_none() {
                return Err(FedError::invalid_config(format!(
                    "batch_size ({}) * inner_loop ({}) overflows the pass length",
                    self.batch_size, inner_loop
                )));
            }
        }
        self.partition.validate()
    }
}
