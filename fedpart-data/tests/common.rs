use fedpart_data::LabeledVecDataset;
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

// Shared by several test crates; not every helper is used by each.
#[allow(dead_code)]
pub fn setup_logger() {
    LOGGER_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// `n` samples whose feature is their own index and whose label cycles through `class_num` classes.
#[allow(dead_code)]
pub fn indexed_dataset(n: usize, class_num: usize) -> LabeledVecDataset<usize, u16> {
    let features: Vec<usize> = (0..n).collect();
    let targets: Vec<u16> = (0..n).map(|i| (i % class_num) as u16).collect();
    LabeledVecDataset::new(features, targets).expect("Test dataset creation failed")
}
