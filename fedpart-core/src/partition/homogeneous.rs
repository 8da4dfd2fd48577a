// fedpart-core/src/partition/homogeneous.rs

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffles `0..n_data` and cuts the permutation into `clients_num`
/// contiguous chunks whose sizes differ by at most one.
///
/// The first `n_data % clients_num` chunks get the extra sample.
pub(crate) fn homogeneous_split<R: Rng + ?Sized>(
    n_data: usize,
    clients_num: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let mut indices: Vec<usize> = (0..n_data).collect();
    indices.shuffle(rng);

    let base_size = n_data / clients_num;
    let remainder = n_data % clients_num;

    let mut chunks = Vec::with_capacity(clients_num);
    let mut start = 0;
    for client in 0..clients_num {
        let size = base_size + usize::from(client < remainder);
        chunks.push(indices[start..start + size].to_vec());
        start += size;
    }
    chunks
}

#[cfg(test)]
#[path = "homogeneous_test.rs"]
mod tests;
