//! Exemple : partition d'un dataset étiqueté entre clients et rounds d'entraînement locaux simulés.
//!
//! Lancer avec `RUST_LOG=info cargo run -p fedpart-data --example federated_loading_example`.

use fedpart_core::{FedError, PartitionMethod};
use fedpart_data::{FedConfig, FedDatasets, LabeledVecDataset};

fn synthetic(n: usize, class_num: usize) -> Result<LabeledVecDataset<[f32; 2], u8>, FedError> {
    let features: Vec<[f32; 2]> = (0..n).map(|i| [i as f32 * 0.1, (i as f32).sin()]).collect();
    let targets: Vec<u8> = (0..n).map(|i| (i % class_num) as u8).collect();
    LabeledVecDataset::new(features, targets)
}

fn main() -> Result<(), FedError> {
    let _ = env_logger::builder().is_test(false).try_init();

    let config = FedConfig::new(4, 8)
        .with_inner_loop(5)
        .with_method(PartitionMethod::Heterogeneous)
        .with_alpha(0.5)
        .with_class_num(10)
        .with_seed(0);
    let mut fed = FedDatasets::new(config, synthetic(2000, 10)?, synthetic(500, 10)?)?;

    println!("\n--- Partition ---");
    for client_id in 0..fed.clients_num() {
        println!("Client {client_id} : {} samples", fed.fed_dataset(client_id)?.num);
    }

    println!("\n--- Rounds ---");
    for round in 0..3 {
        for client_id in 0..fed.clients_num() {
            let client = fed.fed_dataset_mut(client_id)?;
            let mut seen = 0;
            for batch in &mut client.loader {
                let batch = batch?;
                // Ici on appellerait model.forward(), loss, backward, etc.
                seen += batch.len();
            }
            println!("Round {round}, client {client_id} : {seen} samples");
        }
    }

    let valid_batches = fed.valid_loader().len();
    println!("\nValidation globale : {valid_batches} batches");
    Ok(())
}
