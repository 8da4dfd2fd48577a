// fedpart-data/src/federated/fed_datasets.rs

use super::builder::{build_client_loaders, ClientLoader};
use super::config::FedConfig;
use crate::dataloader::DataLoader;
use crate::datasets::{Dataset, LabeledDataset};
use crate::samplers::{RandomSampler, SequentialSampler};
use fedpart_core::{FedError, PartitionMap, Partitioner};
use log::info;
use std::sync::Arc;

/// A client's share of the data: its loader and how many samples it owns.
pub struct ClientDataset<D: LabeledDataset> {
    pub loader: ClientLoader<D>,
    pub num: usize,
}

impl<D: LabeledDataset> std::fmt::Debug for ClientDataset<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientDataset")
            .field("loader", &self.loader)
            .field("num", &self.num)
            .finish()
    }
}

/// Training and validation data of a federated experiment, split across clients.
///
/// Both datasets are partitioned with the same [`FedConfig`]; the partition
/// generator is reseeded with the configured seed before each of the two
/// stages, so the result only depends on the inputs. After construction only
/// the loaders' sampler state changes.
pub struct FedDatasets<D: LabeledDataset> {
    config: FedConfig,
    train_data: Arc<D>,
    valid_data: Arc<D>,
    train_loader: DataLoader<Arc<D>, RandomSampler>,
    valid_loader: DataLoader<Arc<D>, SequentialSampler>,
    train_partition: PartitionMap,
    valid_partition: PartitionMap,
    fed_train: Vec<ClientDataset<D>>,
    fed_valid: Vec<ClientDataset<D>>,
}

impl<D: LabeledDataset> FedDatasets<D> {
    /// Validates `config`, partitions both datasets and builds every loader.
    ///
    /// # Errors
    ///
    /// - `FedError::InvalidConfiguration` for a rejected configuration, a
    ///   dataset whose `targets()` length differs from its `len()`, or a
    ///   client left without samples.
    /// - `FedError::PartitionNonConvergence` when a heterogeneous split gives up.
    pub fn new(config: FedConfig, train_data: D, valid_data: D) -> Result<Self, FedError> {
        config.validate()?;
        check_targets(&train_data, "train")?;
        check_targets(&valid_data, "valid")?;

        let train_data = Arc::new(train_data);
        let valid_data = Arc::new(valid_data);
        let partitioner = Partitioner::new(config.partition.clone())?;

        let train_partition = partitioner.partition(train_data.targets())?;
        let fed_train = client_datasets(&config, &train_data, &train_partition)?;

        let valid_partition = partitioner.partition(valid_data.targets())?;
        let fed_valid = client_datasets(&config, &valid_data, &valid_partition)?;

        let train_loader = DataLoader::new(
            Arc::clone(&train_data),
            config.batch_size,
            RandomSampler::with_seed(false, None, config.partition.seed),
            true,
            None,
        );
        let valid_loader = DataLoader::new(
            Arc::clone(&valid_data),
            config.batch_size,
            SequentialSampler::new(),
            true,
            None,
        );

        info!(
            "Federated datasets ready: {} clients, {} train / {} valid samples, method {}",
            config.clients_num(),
            train_data.len(),
            valid_data.len(),
            config.partition.method
        );

        Ok(Self {
            config,
            train_data,
            valid_data,
            train_loader,
            valid_loader,
            train_partition,
            valid_partition,
            fed_train,
            fed_valid,
        })
    }

    /// Training loader and sample count of `client_id`.
    ///
    /// # Errors
    ///
    /// Returns `FedError::UnknownClient` if `client_id >= clients_num()`.
    pub fn fed_dataset(&self, client_id: usize) -> Result<&ClientDataset<D>, FedError> {
        let clients_num = self.clients_num();
        self.fed_train
            .get(client_id)
            .ok_or(FedError::UnknownClient { client_id, clients_num })
    }

    /// Mutable access, needed to draw batches from the client's loader.
    pub fn fed_dataset_mut(&mut self, client_id: usize) -> Result<&mut ClientDataset<D>, FedError> {
        let clients_num = self.clients_num();
        self.fed_train
            .get_mut(client_id)
            .ok_or(FedError::UnknownClient { client_id, clients_num })
    }

    /// Validation loader and sample count of `client_id`.
    pub fn fed_valid_dataset(&self, client_id: usize) -> Result<&ClientDataset<D>, FedError> {
        let clients_num = self.clients_num();
        self.fed_valid
            .get(client_id)
            .ok_or(FedError::UnknownClient { client_id, clients_num })
    }

    pub fn fed_valid_dataset_mut(&mut self, client_id: usize) -> Result<&mut ClientDataset<D>, FedError> {
        let clients_num = self.clients_num();
        self.fed_valid
            .get_mut(client_id)
            .ok_or(FedError::UnknownClient { client_id, clients_num })
    }

    /// Global, shuffled training loader (drops the last incomplete batch).
    pub fn train_loader(&mut self) -> &mut DataLoader<Arc<D>, RandomSampler> {
        &mut self.train_loader
    }

    /// Global, sequential validation loader (drops the last incomplete batch).
    pub fn valid_loader(&mut self) -> &mut DataLoader<Arc<D>, SequentialSampler> {
        &mut self.valid_loader
    }

    pub fn train_partition(&self) -> &PartitionMap {
        &self.train_partition
    }

    pub fn valid_partition(&self) -> &PartitionMap {
        &self.valid_partition
    }

    pub fn class_num(&self) -> usize {
        self.config.partition.class_num
    }

    pub fn clients_num(&self) -> usize {
        self.config.clients_num()
    }

    pub fn train_data_num(&self) -> usize {
        self.train_data.len()
    }

    pub fn valid_data_num(&self) -> usize {
        self.valid_data.len()
    }

    pub fn config(&self) -> &FedConfig {
        &self.config
    }
}

fn check_targets<D: LabeledDataset>(dataset: &D, name: &str) -> Result<(), FedError> {
    if dataset.targets().len() != dataset.len() {
        return Err(FedError::invalid_config(format!(
            "{} dataset has {} samples but {} targets",
            name,
            dataset.len(),
            dataset.targets().len()
        )));
    }
    Ok(())
}

fn client_datasets<D: LabeledDataset>(
    config: &FedConfig,
    dataset: &Arc<D>,
    partition: &PartitionMap,
) -> Result<Vec<ClientDataset<D>>, FedError> {
    let (loaders, counts) = build_client_loaders(config.batch_size, config.inner_loop, dataset, partition)?;
    Ok(loaders
        .into_iter()
        .zip(counts)
        .map(|(loader, num)| ClientDataset { loader, num })
        .collect())
}

#[cfg(test)]
#[path = "fed_datasets_test.rs"]
mod tests;
