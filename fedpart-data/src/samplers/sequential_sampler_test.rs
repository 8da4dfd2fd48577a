// fedpart-data/src/samplers/sequential_sampler_test.rs

use super::*;

#[test]
fn test_sequential_sampler_len() {
    let sampler = SequentialSampler::new();
    assert_eq!(sampler.len(0), 0);
    assert_eq!(sampler.len(5), 5);
}

#[test]
fn test_sequential_sampler_iter_empty() {
    let mut sampler = SequentialSampler::new();
    let mut iter = sampler.iter(0);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_sequential_sampler_iter_repeats_same_order() {
    let mut sampler = SequentialSampler::new();
    let first: Vec<usize> = sampler.iter(5).collect();
    let second: Vec<usize> = sampler.iter(5).collect();
    assert_eq!(first, vec![0, 1, 2, 3, 4]);
    assert_eq!(first, second);
}
