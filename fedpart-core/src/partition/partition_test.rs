// fedpart-core/src/partition/partition_test.rs

use super::*;
use crate::error::FedError;
use std::collections::HashSet;
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

fn setup_logger() {
    LOGGER_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[test]
fn test_partition_two_clients_ten_samples() {
    setup_logger();
    let labels: Vec<u8> = vec![0; 10];
    let config = PartitionConfig::new(2, PartitionMethod::Homogeneous).with_seed(0);
    let map = partition(&labels, &config).unwrap();

    assert_eq!(map.sizes(), vec![5, 5]);
    let first: HashSet<usize> = map.get(0).unwrap().iter().copied().collect();
    let second: HashSet<usize> = map.get(1).unwrap().iter().copied().collect();
    assert!(first.is_disjoint(&second));
    let union: HashSet<usize> = first.union(&second).copied().collect();
    assert_eq!(union, (0..10).collect::<HashSet<usize>>());
}

#[test]
fn test_partition_rejects_invalid_config_before_work() {
    let labels: Vec<u8> = vec![0; 10];
    let config = PartitionConfig::new(0, PartitionMethod::Homogeneous);
    assert!(matches!(
        partition(&labels, &config),
        Err(FedError::InvalidConfiguration { .. })
    ));
    assert!(Partitioner::new(config).is_err());
}

#[test]
fn test_partitioner_is_reproducible() {
    setup_logger();
    let labels: Vec<u16> = (0..500).map(|i| (i % 5) as u16).collect();
    let config = PartitionConfig::new(6, PartitionMethod::Heterogeneous)
        .with_class_num(5)
        .with_alpha(0.5)
        .with_min_len(10)
        .with_seed(123);
    let partitioner = Partitioner::new(config).unwrap();
    let a = partitioner.partition(&labels).unwrap();
    let b = partitioner.partition(&labels).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.total(), 500);
    assert!(a.sizes().iter().all(|&size| size >= 10));
}

#[test]
fn test_partition_different_seeds_differ() {
    let labels: Vec<u8> = vec![0; 100];
    let a = partition(&labels, &PartitionConfig::new(4, PartitionMethod::Homogeneous).with_seed(1)).unwrap();
    let b = partition(&labels, &PartitionConfig::new(4, PartitionMethod::Homogeneous).with_seed(2)).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.sizes(), b.sizes());
}

#[test]
fn test_partition_with_rng_advances_caller_generator() {
    let labels: Vec<u8> = vec![0; 40];
    let partitioner = Partitioner::new(PartitionConfig::new(2, PartitionMethod::Homogeneous)).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let first = partitioner.partition_with_rng(&labels, &mut rng).unwrap();
    let second = partitioner.partition_with_rng(&labels, &mut rng).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_partition_heterogeneous_non_convergence_surfaces() {
    let labels: Vec<u8> = (0..12).map(|i| (i % 3) as u8).collect();
    let config = PartitionConfig::new(3, PartitionMethod::Heterogeneous)
        .with_class_num(3)
        .with_alpha(0.1)
        .with_min_len(5)
        .with_max_attempts(10);
    assert!(matches!(
        partition(&labels, &config),
        Err(FedError::PartitionNonConvergence { attempts: 10, min_len: 5, .. })
    ));
}

#[test]
fn test_size_range_reports_homogeneous_spread() {
    setup_logger();
    let labels: Vec<u8> = vec![0; 11];
    let map = partition(&labels, &PartitionConfig::new(3, PartitionMethod::Homogeneous)).unwrap();
    assert_eq!(size_range(&map.into_vec()), (3, 4));
    assert_eq!(size_range(&[]), (0, 0));
}
