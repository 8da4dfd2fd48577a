// fedpart-data/src/samplers/cyclic_inner_loop_sampler.rs

use super::traits::Sampler;
use fedpart_core::FedError;
use log::debug;

/// Endless, order-preserving sampler over one client's indices.
///
/// Each pass yields `batch_size * inner_loop` indices (or the full client
/// size when `inner_loop` is `None`), continuing exactly where the previous
/// pass stopped. When the client's index list runs out, it starts over from
/// the beginning in the same order, so a pass may straddle two cycles but
/// no index is skipped or repeated within a cycle.
///
/// The state (`residual` buffer and `offset` cursor) belongs to this sampler
/// alone, so the type is not `Clone`: one consumer per stream.
///
/// ```compile_fail
/// use fedpart_data::CyclicInnerLoopSampler;
///
/// let sampler = CyclicInnerLoopSampler::new(2, Some(1), vec![0, 1]).unwrap();
/// let _fork = sampler.clone();
/// ```
#[derive(Debug)]
pub struct CyclicInnerLoopSampler {
    batch_size: usize,
    inner_loop: Option<usize>,
    data_indices: Vec<usize>,
    residual: Vec<usize>,
    offset: usize,
    n_data_batch: usize,
}

impl CyclicInnerLoopSampler {
    /// Creates a sampler over `indices`.
    ///
    /// # Errors
    ///
    /// Returns `FedError::InvalidConfiguration` if `indices` is empty, if
    /// `batch_size` is zero, if `inner_loop` is `Some(0)`, or if
    /// `batch_size * inner_loop` overflows `usize`.
    pub fn new(batch_size: usize, inner_loop: Option<usize>, indices: Vec<usize>) -> Result<Self, FedError> {
        if indices.is_empty() {
            return Err(FedError::invalid_config(
                "cannot build a cyclic sampler over an empty index list",
            ));
        }
        if batch_size == 0 {
            return Err(FedError::invalid_config("batch_size must be at least 1"));
        }
        if inner_loop == Some(0) {
            return Err(FedError::invalid_config("inner_loop must be at least 1"));
        }

        let n_data_batch = match inner_loop {
            Some(inner_loop) => batch_size.checked_mul(inner_loop).ok_or_else(|| {
                FedError::invalid_config(format!(
                    "batch_size ({}) * inner_loop ({}) overflows the pass length",
                    batch_size, inner_loop
                ))
            })?,
            None => indices.len(),
        };
        Ok(Self {
            batch_size,
            inner_loop,
            data_indices: indices,
            residual: Vec::new(),
            offset: 0,
            n_data_batch,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn inner_loop(&self) -> Option<usize> {
        self.inner_loop
    }

    /// The client's canonical index list.
    pub fn indices(&self) -> &[usize] {
        &self.data_indices
    }

    /// Number of indices produced per pass.
    pub fn pass_len(&self) -> usize {
        self.n_data_batch
    }

    /// Returns the indices of the next pass and advances the cursor.
    pub fn next_indices(&mut self) -> Vec<usize> {
        // Drop what previous passes consumed.
        self.residual.drain(..self.offset);
        self.offset = 0;

        let mut cycles_added = 0;
        while self.residual.len() <= self.n_data_batch {
            self.residual.extend_from_slice(&self.data_indices);
            cycles_added += 1;
        }
        if cycles_added > 0 {
            debug!(
                "CyclicInnerLoopSampler: appended {} cycle(s) of {} indices",
                cycles_added,
                self.data_indices.len()
            );
        }

        let end = self.offset + self.n_data_batch;
        let indices = self.residual[self.offset..end].to_vec();
        self.offset = end;
        indices
    }
}

impl Sampler for CyclicInnerLoopSampler {
    fn iter(&mut self, _dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        Box::new(self.next_indices().into_iter())
    }

    fn len(&self, _dataset_len: usize) -> usize {
        self.n_data_batch
    }
}

#[cfg(test)]
#[path = "cyclic_inner_loop_sampler_test.rs"]
mod tests;
