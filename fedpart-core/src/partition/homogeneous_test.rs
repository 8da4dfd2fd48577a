// fedpart-core/src/partition/homogeneous_test.rs

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn test_homogeneous_split_sizes_differ_by_at_most_one() {
    let mut rng = StdRng::seed_from_u64(0);
    for (n_data, clients_num) in [(10, 2), (10, 3), (7, 7), (3, 5), (101, 4)] {
        let chunks = homogeneous_split(n_data, clients_num, &mut rng);
        assert_eq!(chunks.len(), clients_num);
        let sizes: Vec<usize> = chunks.iter().map(Vec::len).collect();
        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        assert!(max - min <= 1, "sizes {:?} for n={} c={}", sizes, n_data, clients_num);
        assert_eq!(sizes.iter().sum::<usize>(), n_data);
    }
}

#[test]
fn test_homogeneous_split_is_disjoint_cover() {
    let mut rng = StdRng::seed_from_u64(42);
    let chunks = homogeneous_split(57, 5, &mut rng);
    let mut seen = HashSet::new();
    for chunk in &chunks {
        for &idx in chunk {
            assert!(seen.insert(idx), "index {} assigned twice", idx);
        }
    }
    assert_eq!(seen, (0..57).collect::<HashSet<usize>>());
}

#[test]
fn test_homogeneous_split_extra_samples_go_first() {
    let mut rng = StdRng::seed_from_u64(1);
    let chunks = homogeneous_split(11, 4, &mut rng);
    let sizes: Vec<usize> = chunks.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![3, 3, 3, 2]);
}

#[test]
fn test_homogeneous_split_same_seed_same_result() {
    let a = homogeneous_split(30, 3, &mut StdRng::seed_from_u64(9));
    let b = homogeneous_split(30, 3, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn test_homogeneous_split_empty_dataset() {
    let mut rng = StdRng::seed_from_u64(0);
    let chunks = homogeneous_split(0, 3, &mut rng);
    assert_eq!(chunks, vec![Vec::<usize>::new(); 3]);
}
