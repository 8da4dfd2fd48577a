//! # Partitioning
//!
//! Computes which client owns which sample of a centralized dataset.
//!
//! Two strategies are available through [`PartitionMethod`]:
//!
//! - `Homogeneous`: a seeded permutation of all indices cut into near-equal
//!   chunks. Every sample ends up with exactly one client.
//! - `Heterogeneous`: per-class Dirichlet proportions with a load-balancing
//!   guard, retried until every client holds at least `min_len` samples or
//!   `max_attempts` is exhausted.
//!
//! ## Example
//!
//! ```rust
//! use fedpart_core::partition::{partition, PartitionConfig, PartitionMethod};
//!
//! let labels: Vec<u8> = (0..10).map(|i| i % 2).collect();
//! let config = PartitionConfig::new(2, PartitionMethod::Homogeneous).with_seed(0);
//! let map = partition(&labels, &config).unwrap();
//! assert_eq!(map.sizes(), vec![5, 5]);
//! ```
//!
//! Randomness is never global: each call seeds its own `StdRng` from
//! `config.seed`, or uses the generator handed to
//! [`Partitioner::partition_with_rng`].

pub mod config;
pub mod heterogeneous;
pub mod homogeneous;
pub mod map;

pub use config::{PartitionConfig, PartitionMethod, DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_LEN};
pub use map::PartitionMap;

use crate::error::Result;
use heterogeneous::heterogeneous_split;
use homogeneous::homogeneous_split;
use log::info;
use num_traits::PrimInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Splits a label vector across clients according to a validated [`PartitionConfig`].
#[derive(Debug, Clone)]
pub struct Partitioner {
    config: PartitionConfig,
}

impl Partitioner {
    /// Creates a partitioner after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns `FedError::InvalidConfiguration` if the configuration is rejected by
    /// [`PartitionConfig::validate`].
    pub fn new(config: PartitionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Partitions `labels` with a generator freshly seeded from `config.seed`.
    ///
    /// Repeated calls with the same labels return the same map.
    pub fn partition<L: PrimInt>(&self, labels: &[L]) -> Result<PartitionMap> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.partition_with_rng(labels, &mut rng)
    }

    /// Partitions `labels`, drawing all randomness from `rng`.
    pub fn partition_with_rng<L, R>(&self, labels: &[L], rng: &mut R) -> Result<PartitionMap>
    where
        L: PrimInt,
        R: Rng + ?Sized,
    {
        let n_data = labels.len();
        let config = &self.config;

        let clients = match config.method {
            PartitionMethod::Homogeneous => {
                let clients = homogeneous_split(n_data, config.clients_num, rng);
                let (smallest, largest) = size_range(&clients);
                info!(
                    "partition data homogeneous: {} clients, {} samples, datasize {}..={}",
                    config.clients_num, n_data, smallest, largest
                );
                clients
            }
            PartitionMethod::Heterogeneous => {
                let clients = heterogeneous_split(labels, config, rng)?;
                for (client_id, indices) in clients.iter().enumerate() {
                    info!(
                        "partition data hetero alpha= {:.1}  CL={}: datasize= {} / {}",
                        config.alpha,
                        client_id,
                        indices.len(),
                        n_data
                    );
                }
                clients
            }
        };

        Ok(PartitionMap::new(clients, n_data))
    }
}

/// Validates `config` and partitions `labels` with a generator seeded from `config.seed`.
///
/// # Errors
///
/// - `FedError::InvalidConfiguration` for a rejected configuration.
/// - `FedError::PartitionNonConvergence` when a heterogeneous split cannot
///   satisfy `min_len` within `max_attempts`.
pub fn partition<L: PrimInt>(labels: &[L], config: &PartitionConfig) -> Result<PartitionMap> {
    Partitioner::new(config.clone())?.partition(labels)
}

/// Smallest and largest client size, `(0, 0)` without clients.
fn size_range(clients: &[Vec<usize>]) -> (usize, usize) {
    let smallest = clients.iter().map(Vec::len).min().unwrap_or(0);
    let largest = clients.iter().map(Vec::len).max().unwrap_or(0);
    (smallest, largest)
}

#[cfg(test)]
#[path = "partition_test.rs"]
mod tests;
