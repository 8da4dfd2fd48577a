// fedpart-core/src/partition/heterogeneous.rs

use super::config::PartitionConfig;
use crate::error::{FedError, Result};
use log::{debug, warn};
use num_traits::PrimInt;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Dirichlet, Distribution};

/// Groups sample indices by label. Labels outside `[0, class_num)` are dropped.
pub(crate) fn class_indices<L: PrimInt>(labels: &[L], class_num: usize) -> Vec<Vec<usize>> {
    let mut by_class = vec![Vec::new(); class_num];
    for (idx, label) in labels.iter().enumerate() {
        if let Some(k) = label.to_usize().filter(|&k| k < class_num) {
            by_class[k].push(idx);
        }
    }
    by_class
}

/// Zeroes the proportion of every client that already holds its fair share,
/// then renormalizes the rest to sum to one.
///
/// Falls back to a uniform split over the clients still under fair share when
/// nothing is left after masking (all-zero or non-finite draws).
pub(crate) fn balance_proportions(
    proportions: &[f64],
    assigned: &[Vec<usize>],
    fair_share: f64,
) -> Vec<f64> {
    let open: Vec<bool> = assigned
        .iter()
        .map(|client| (client.len() as f64) < fair_share)
        .collect();

    let masked: Vec<f64> = proportions
        .iter()
        .zip(&open)
        .map(|(&p, &is_open)| if is_open && p.is_finite() { p } else { 0.0 })
        .collect();
    let total: f64 = masked.iter().sum();
    if total > 0.0 {
        return masked.into_iter().map(|p| p / total).collect();
    }

    let open_count = open.iter().filter(|&&is_open| is_open).count();
    warn!(
        "Dirichlet proportions vanished after balancing; splitting class uniformly over {} clients",
        open_count
    );
    if open_count == 0 {
        let uniform = 1.0 / proportions.len() as f64;
        return vec![uniform; proportions.len()];
    }
    open.into_iter()
        .map(|is_open| if is_open { 1.0 / open_count as f64 } else { 0.0 })
        .collect()
}

/// Converts proportions into split points over `len` items.
///
/// The last cumulative point is implicit (always `len`) and is not returned.
pub(crate) fn split_points(proportions: &[f64], len: usize) -> Vec<usize> {
    let mut points = Vec::with_capacity(proportions.len().saturating_sub(1));
    let mut cumulative = 0.0;
    let mut previous = 0;
    for p in proportions.iter().take(proportions.len().saturating_sub(1)) {
        cumulative += p;
        let point = ((cumulative * len as f64) as usize).clamp(previous, len);
        points.push(point);
        previous = point;
    }
    points
}

fn draw_proportions<R: Rng + ?Sized>(
    dirichlet: Option<&Dirichlet<f64>>,
    rng: &mut R,
) -> Vec<f64> {
    match dirichlet {
        Some(distribution) => distribution.sample(rng),
        // A single client takes every sample of every class.
        None => vec![1.0],
    }
}

/// Dirichlet (non-IID) split of `labels` across `config.clients_num` clients.
///
/// Each attempt walks the classes in order: shuffles the class indices, draws
/// client proportions from `Dir(alpha, ..., alpha)`, masks clients already at
/// their fair share and cuts the class accordingly. An attempt is accepted
/// once every client holds at least `config.min_len` samples. Rejected attempts
/// keep consuming `rng`, so retries never repeat.
///
/// # Errors
///
/// Returns `FedError::PartitionNonConvergence` after `config.max_attempts`
/// rejected attempts, and `FedError::InvalidConfiguration` if the Dirichlet
/// distribution cannot be built from `config.alpha`.
pub(crate) fn heterogeneous_split<L, R>(
    labels: &[L],
    config: &PartitionConfig,
    rng: &mut R,
) -> Result<Vec<Vec<usize>>>
where
    L: PrimInt,
    R: Rng + ?Sized,
{
    let clients_num = config.clients_num;
    let fair_share = labels.len() as f64 / clients_num as f64;
    let by_class = class_indices(labels, config.class_num);

    let dirichlet = if clients_num > 1 {
        Some(Dirichlet::new_with_size(config.alpha, clients_num).map_err(|e| {
            FedError::invalid_config(format!(
                "cannot build Dirichlet(alpha={}) over {} clients: {:?}",
                config.alpha, clients_num, e
            ))
        })?)
    } else {
        None
    };

    let mut smallest = 0;
    for attempt in 1..=config.max_attempts {
        let mut assigned: Vec<Vec<usize>> = vec![Vec::new(); clients_num];

        for class in &by_class {
            let mut idx_k = class.clone();
            idx_k.shuffle(rng);

            let proportions = draw_proportions(dirichlet.as_ref(), rng);
            let proportions = balance_proportions(&proportions, &assigned, fair_share);

            let mut start = 0;
            let ends = split_points(&proportions, idx_k.len())
                .into_iter()
                .chain(std::iter::once(idx_k.len()));
            for (client, end) in assigned.iter_mut().zip(ends) {
                client.extend_from_slice(&idx_k[start..end]);
                start = end;
            }
        }

        smallest = assigned.iter().map(Vec::len).min().unwrap_or(0);
        if smallest >= config.min_len {
            // Undo the per-class ordering.
            for client in assigned.iter_mut() {
                client.shuffle(rng);
            }
            return Ok(assigned);
        }
        debug!(
            "Heterogeneous split attempt {} rejected: smallest client has {} samples, need {}",
            attempt, smallest, config.min_len
        );
    }

    Err(FedError::PartitionNonConvergence {
        attempts: config.max_attempts,
        min_len: config.min_len,
        smallest,
    })
}

#[cfg(test)]
#[path = "heterogeneous_test.rs"]
mod tests;
