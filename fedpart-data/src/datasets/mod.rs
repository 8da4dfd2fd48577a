pub mod labeled_vec_dataset;
pub mod traits;
pub mod vec_dataset;

pub use labeled_vec_dataset::LabeledVecDataset;
pub use traits::{Dataset, LabeledDataset};
pub use vec_dataset::VecDataset;
