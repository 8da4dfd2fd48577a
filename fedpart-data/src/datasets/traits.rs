// fedpart-data/src/datasets/traits.rs

use fedpart_core::FedError;
use num_traits::PrimInt;
use std::sync::Arc;

/// Represents a dataset that can be accessed by index.
///
/// A dataset is a collection of items, where each item can be a feature
/// vector, a `(features, label)` pair, or any other type that is
/// `Send + 'static`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `FedError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, FedError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A dataset whose samples carry an integer class label.
///
/// `targets()` holds one label per sample, in index order, so
/// `targets().len() == len()` for well-formed datasets.
pub trait LabeledDataset: Dataset {
    /// Integer type of the class labels.
    type Label: PrimInt + Send + Sync + 'static;

    /// The full label vector.
    fn targets(&self) -> &[Self::Label];
}

// Many loaders read the same samples; sharing goes through `Arc`.
impl<D: Dataset + ?Sized> Dataset for Arc<D> {
    type Item = D::Item;

    fn get(&self, index: usize) -> Result<Self::Item, FedError> {
        (**self).get(index)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<D: LabeledDataset + ?Sized> LabeledDataset for Arc<D> {
    type Label = D::Label;

    fn targets(&self) -> &[Self::Label] {
        (**self).targets()
    }
}
