//! Datasets, samplers and loaders for federated learning simulations.
//!
//! A centralized [`LabeledDataset`] is split across clients by
//! `fedpart_core`'s partitioner; each client then reads its share through a
//! [`DataLoader`] driven by a [`CyclicInnerLoopSampler`], which never runs
//! dry and hands out `inner_loop` batches per round.

pub mod dataloader;
pub mod datasets;
pub mod federated;
pub mod samplers;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{Dataset, LabeledDataset, LabeledVecDataset, VecDataset};
pub use federated::{ClientDataset, FedConfig, FedDatasets};
pub use samplers::{CyclicInnerLoopSampler, RandomSampler, Sampler, SequentialSampler};
