//! Per-client loaders over a partitioned dataset.
//!
//! [`build_client_loaders`] turns a [`PartitionMap`](fedpart_core::PartitionMap)
//! into one cyclic loader per client; [`FedDatasets`] does it for the training
//! and validation sets of an experiment and adds the global loaders.

pub mod builder;
pub mod config;
pub mod fed_datasets;

pub use builder::{build_client_loaders, ClientLoader};
pub use config::FedConfig;
pub use fed_datasets::{ClientDataset, FedDatasets};
