// fedpart-data/src/samplers/traits.rs

use std::fmt::Debug;

/// A Sampler trait that defines how to iterate over indices of a dataset.
///
/// Samplers are used by `DataLoader` to generate a sequence of indices
/// to fetch data from a `Dataset`. Every call to [`Sampler::iter`] starts a
/// new pass; stateful samplers (shuffling generators, cyclic cursors) advance
/// their state on each call, which is why it takes `&mut self`.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over the indices of one pass.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    fn iter(&mut self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Returns the total number of samples that one pass will yield.
    ///
    /// This might be different from `dataset_len`, especially for samplers
    /// restricted to a subset of indices or sized by a training schedule.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    fn len(&self, dataset_len: usize) -> usize;
}
