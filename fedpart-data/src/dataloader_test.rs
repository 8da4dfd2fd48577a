use crate::dataloader::{CollateFn, DataLoader};
use crate::datasets::{Dataset, VecDataset};
use crate::samplers::{CyclicInnerLoopSampler, RandomSampler, SequentialSampler};
use fedpart_core::FedError;
use std::collections::HashSet;

#[test]
fn test_dataloader_sequential() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
    let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false, None);
    let batches: Vec<Vec<i32>> = loader.iter().map(|b| b.expect("Batch should not error")).collect();
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    assert_eq!(loader.len(), 3);
}

#[test]
fn test_dataloader_drop_last() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), true, None);
    let batches: Vec<Vec<i32>> = loader.iter().map(|b| b.expect("Batch should not error")).collect();
    assert_eq!(batches.len(), 2); // Le dernier batch de taille 1 est ignoré
    assert_eq!(batches[1], vec![3, 4]);
    assert_eq!(loader.len(), 2);
}

#[test]
fn test_dataloader_keeps_incomplete_batch_without_drop_last() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false, None);
    let batches: Vec<Vec<i32>> = loader.iter().map(|b| b.unwrap()).collect();
    assert_eq!(batches.last(), Some(&vec![5]));
    assert_eq!(loader.len(), 3);
}

#[test]
fn test_dataloader_every_pass_restarts_sampler() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    let mut loader = DataLoader::new(dataset, 3, SequentialSampler::new(), false, None);
    for _ in 0..3 {
        let mut passes = 0;
        for batch in &mut loader {
            assert_eq!(batch.unwrap(), vec![10, 20, 30]);
            passes += 1;
        }
        assert_eq!(passes, 1);
    }
}

#[test]
fn test_dataloader_random_pass_covers_dataset() {
    let dataset = VecDataset::new((0..12).collect::<Vec<i32>>());
    let mut loader = DataLoader::new(dataset, 4, RandomSampler::with_seed(false, None, 3), true, None);
    let seen: HashSet<i32> = loader.iter().flat_map(|b| b.unwrap()).collect();
    assert_eq!(seen, (0..12).collect::<HashSet<i32>>());
}

#[test]
fn test_dataloader_cyclic_pass_yields_inner_loop_batches() {
    let dataset = VecDataset::new(vec!['a', 'b', 'c', 'd', 'e', 'f', 'g']);
    let sampler = CyclicInnerLoopSampler::new(2, Some(3), vec![6, 0, 3]).unwrap();
    let mut loader = DataLoader::new(dataset, 2, sampler, false, None);

    let first: Vec<Vec<char>> = loader.iter().map(|b| b.unwrap()).collect();
    assert_eq!(first, vec![vec!['g', 'a'], vec!['d', 'g'], vec!['a', 'd']]);
    let second: Vec<Vec<char>> = loader.iter().map(|b| b.unwrap()).collect();
    assert_eq!(second, first); // 6 indices per pass over a 3-sample client realigns every pass
    assert_eq!(loader.num_samples(), 6);
}

#[test]
fn test_dataloader_collate_fn_applied() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4]);
    let collate: CollateFn<VecDataset<i32>> = Box::new(|batch: Vec<i32>| -> Result<Vec<i32>, FedError> { Ok(batch.into_iter().rev().collect()) });
    let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false, Some(collate));
    let batches: Vec<Vec<i32>> = loader.iter().map(|b| b.unwrap()).collect();
    assert_eq!(batches, vec![vec![2, 1], vec![4, 3]]);
}

#[test]
fn test_dataloader_collate_error_propagates() {
    let dataset = VecDataset::new(vec![1, 2]);
    let collate: CollateFn<VecDataset<i32>> = Box::new(|_: Vec<i32>| -> Result<Vec<i32>, FedError> { Err(FedError::CollateError("boom".to_string())) });
    let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false, Some(collate));
    assert_eq!(
        loader.iter().next(),
        Some(Err(FedError::CollateError("boom".to_string())))
    );
}

#[test]
fn test_dataloader_out_of_range_index_errors() {
    let dataset = VecDataset::new(vec![1, 2]);
    let sampler = CyclicInnerLoopSampler::new(1, Some(1), vec![5]).unwrap();
    let mut loader = DataLoader::new(dataset, 1, sampler, false, None);
    assert_eq!(
        loader.iter().next(),
        Some(Err(FedError::IndexOutOfBounds { index: 5, len: 2 }))
    );
    assert_eq!(loader.dataset.len(), 2);
}
