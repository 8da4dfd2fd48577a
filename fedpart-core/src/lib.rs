//! Core of the fedpart workspace: the error taxonomy and the partitioning
//! algorithms that assign samples of a labeled dataset to federated clients.

pub mod error;
pub mod partition;

pub use error::{FedError, Result};
pub use partition::{partition, PartitionConfig, PartitionMap, PartitionMethod, Partitioner};
