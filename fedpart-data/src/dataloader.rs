// dataloader.rs
//! # DataLoader
//!
//! Le module `DataLoader` fournit une structure générique pour le batching et le sampling de données,
//! utilisée aussi bien pour les loaders globaux que pour les loaders par client.
//!
//! ## Exemple d'utilisation basique
//!
//! ```rust
//! use fedpart_data::dataloader::DataLoader;
//! use fedpart_data::datasets::VecDataset;
//! use fedpart_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false, None);
//! for batch in &mut loader {
//!     let batch = batch.expect("Pas d'erreur attendue");
//!     println!("Batch : {:?}", batch);
//! }
//! ```
//!
//! ## Passes
//!
//! Chaque passe (`loader.iter()` ou `for batch in &mut loader`) demande une nouvelle séquence
//! d'indices au sampler. Avec un [`CyclicInnerLoopSampler`](crate::samplers::CyclicInnerLoopSampler),
//! une passe correspond à un round d'entraînement local : `inner_loop` batches, puis la passe
//! suivante reprend là où la précédente s'est arrêtée.

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use fedpart_core::FedError;

/// Type pour la fonction de collation personnalisée.
///
/// Cette fonction prend un vecteur de samples (issus du dataset) et retourne un batch prêt à être utilisé.
pub type CollateFn<D> =
    Box<dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, FedError> + Send + Sync>;

/// DataLoader générique pour le batching et le sampling de données.
///
/// # Paramètres de type
/// - `D`: Le type du dataset, qui doit implémenter le trait [`Dataset`].
/// - `S`: Le type du sampler, qui doit implémenter le trait [`Sampler`].
pub struct DataLoader<D: Dataset, S: Sampler> {
    /// Le dataset source.
    pub dataset: D,
    /// La taille des batches.
    pub batch_size: usize,
    /// Le sampler utilisé pour générer les indices.
    pub sampler: S,
    /// Si vrai, le dernier batch est ignoré s'il est incomplet.
    pub drop_last: bool,
    /// Fonction de collation optionnelle pour assembler les samples en batch.
    pub collate_fn: Option<CollateFn<D>>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Crée un nouveau DataLoader.
    ///
    /// Aucun indice n'est tiré avant la première passe.
    ///
    /// # Arguments
    /// - `dataset`: Le dataset à utiliser.
    /// - `batch_size`: La taille des batches.
    /// - `sampler`: Le sampler pour générer les indices.
    /// - `drop_last`: Si vrai, le dernier batch est ignoré s'il est incomplet.
    /// - `collate_fn`: Fonction de collation personnalisée (optionnelle).
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool, collate_fn: Option<CollateFn<D>>) -> Self {
        Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
        }
    }

    /// Démarre une nouvelle passe sur le dataset.
    pub fn iter(&mut self) -> Batches<'_, D, S> {
        let indices = self.sampler.iter(self.dataset.len());
        Batches { loader: self, indices }
    }

    /// Nombre de samples produits par passe.
    pub fn num_samples(&self) -> usize {
        self.sampler.len(self.dataset.len())
    }

    /// Nombre de batches produits par passe.
    pub fn len(&self) -> usize {
        if self.batch_size == 0 {
            return 0;
        }
        let n = self.num_samples();
        if self.drop_last {
            n / self.batch_size
        } else {
            (n + self.batch_size - 1) / self.batch_size
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D: Dataset, S: Sampler> std::fmt::Debug for DataLoader<D, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataLoader")
            .field("dataset_len", &self.dataset.len())
            .field("batch_size", &self.batch_size)
            .field("sampler", &self.sampler)
            .field("drop_last", &self.drop_last)
            .field("collate_fn", &self.collate_fn.is_some())
            .finish()
    }
}

/// Une passe sur un [`DataLoader`].
pub struct Batches<'a, D: Dataset, S: Sampler> {
    loader: &'a mut DataLoader<D, S>,
    indices: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<'a, D: Dataset, S: Sampler> Iterator for Batches<'a, D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, FedError>;

    /// Renvoie le prochain batch de données.
    ///
    /// # Retour
    /// - `Some(Ok(batch))` : Un batch de données prêt à l'emploi.
    /// - `Some(Err(e))` : Une erreur lors de la récupération d'un item.
    /// - `None` : Fin de la passe.
    fn next(&mut self) -> Option<Self::Item> {
        let loader = &*self.loader;
        let mut batch = Vec::with_capacity(loader.batch_size);
        for _ in 0..loader.batch_size {
            if let Some(idx) = self.indices.next() {
                match loader.dataset.get(idx) {
                    Ok(item) => batch.push(item),
                    Err(e) => return Some(Err(e)),
                }
            } else {
                break;
            }
        }
        if batch.is_empty() || (loader.drop_last && batch.len() < loader.batch_size) {
            return None;
        }
        if let Some(ref collate_fn) = loader.collate_fn {
            Some(collate_fn(batch))
        } else {
            Some(Ok(batch))
        }
    }
}

impl<'a, D: Dataset, S: Sampler> IntoIterator for &'a mut DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, FedError>;
    type IntoIter = Batches<'a, D, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
