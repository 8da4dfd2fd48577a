use super::traits::{Dataset, LabeledDataset};
use fedpart_core::FedError;
use num_traits::PrimInt;

/// An in-memory classification dataset: one feature value and one label per sample.
///
/// Items are `(features, label)` pairs; `targets()` exposes the label vector
/// the partitioner works on.
#[derive(Debug, Clone)]
pub struct LabeledVecDataset<T, L>
where
    T: Clone + Send + 'static,
    L: PrimInt + Send + Sync + 'static,
{
    features: Vec<T>,
    targets: Vec<L>,
}

impl<T, L> LabeledVecDataset<T, L>
where
    T: Clone + Send + 'static,
    L: PrimInt + Send + Sync + 'static,
{
    /// Creates a dataset from parallel feature and label vectors.
    ///
    /// # Errors
    ///
    /// Returns `FedError::InvalidConfiguration` if the two vectors differ in length.
    pub fn new(features: Vec<T>, targets: Vec<L>) -> Result<Self, FedError> {
        if features.len() != targets.len() {
            return Err(FedError::invalid_config(format!(
                "features and targets must have the same length, got {} and {}",
                features.len(),
                targets.len()
            )));
        }
        Ok(Self { features, targets })
    }
}

impl<T, L> Dataset for LabeledVecDataset<T, L>
where
    T: Clone + Send + 'static,
    L: PrimInt + Send + Sync + 'static,
{
    type Item = (T, L);

    fn get(&self, index: usize) -> Result<Self::Item, FedError> {
        match (self.features.get(index), self.targets.get(index)) {
            (Some(x), Some(&y)) => Ok((x.clone(), y)),
            _ => Err(FedError::IndexOutOfBounds {
                index,
                len: self.features.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.features.len()
    }
}

impl<T, L> LabeledDataset for LabeledVecDataset<T, L>
where
    T: Clone + Send + 'static,
    L: PrimInt + Send + Sync + 'static,
{
    type Label = L;

    fn targets(&self) -> &[L] {
        &self.targets
    }
}
