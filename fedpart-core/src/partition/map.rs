// fedpart-core/src/partition/map.rs

/// Assignment of sample indices to clients.
///
/// Client ids are dense: client `i` owns `self.get(i)` for every
/// `i < self.clients_num()`. Index lists are disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionMap {
    clients: Vec<Vec<usize>>,
    total: usize,
}

impl PartitionMap {
    /// Wraps per-client index lists computed over a dataset of `total` samples.
    pub fn new(clients: Vec<Vec<usize>>, total: usize) -> Self {
        Self { clients, total }
    }

    pub fn clients_num(&self) -> usize {
        self.clients.len()
    }

    /// Size of the dataset the partition was computed over.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of samples actually handed to some client.
    pub fn assigned(&self) -> usize {
        self.clients.iter().map(Vec::len).sum()
    }

    /// Indices owned by `client_id`, or `None` if the id is out of range.
    pub fn get(&self, client_id: usize) -> Option<&[usize]> {
        self.clients.get(client_id).map(Vec::as_slice)
    }

    /// Per-client sample counts, in client id order.
    pub fn sizes(&self) -> Vec<usize> {
        self.clients.iter().map(Vec::len).collect()
    }

    /// Iterates over `(client_id, indices)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.clients.iter().map(Vec::as_slice).enumerate()
    }

    pub fn into_vec(self) -> Vec<Vec<usize>> {
        self.clients
    }
}
