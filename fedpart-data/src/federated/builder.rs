// fedpart-data/src/federated/builder.rs

use crate::dataloader::DataLoader;
use crate::datasets::Dataset;
use crate::samplers::CyclicInnerLoopSampler;
use fedpart_core::{FedError, PartitionMap};
use std::sync::Arc;

/// Loader of one client: the shared dataset read through that client's cyclic sampler.
pub type ClientLoader<D> = DataLoader<Arc<D>, CyclicInnerLoopSampler>;

/// Builds one loader per client of `partition`, all reading from `dataset`.
///
/// Returns the loaders and the per-client sample counts, both indexed by
/// client id.
///
/// # Errors
///
/// Returns `FedError::InvalidConfiguration` if `batch_size` is zero, if
/// `inner_loop` is `Some(0)`, or if some client owns no sample. The error for
/// an empty client names it.
pub fn build_client_loaders<D: Dataset>(
    batch_size: usize,
    inner_loop: Option<usize>,
    dataset: &Arc<D>,
    partition: &PartitionMap,
) -> Result<(Vec<ClientLoader<D>>, Vec<usize>), FedError> {
    if batch_size < 1 {
        return Err(FedError::invalid_config("batch_size must be at least 1"));
    }

    let mut loaders = Vec::with_capacity(partition.clients_num());
    let mut counts = Vec::with_capacity(partition.clients_num());
    for (client_id, indices) in partition.iter() {
        let sampler = CyclicInnerLoopSampler::new(batch_size, inner_loop, indices.to_vec()).map_err(|e| match e {
            FedError::InvalidConfiguration { message } => {
                FedError::invalid_config(format!("client {}: {}", client_id, message))
            }
            other => other,
        })?;
        loaders.push(DataLoader::new(Arc::clone(dataset), batch_size, sampler, false, None));
        counts.push(indices.len());
    }
    Ok((loaders, counts))
}
