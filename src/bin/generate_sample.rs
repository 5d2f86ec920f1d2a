use std::path::Path;

use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use qm9_subset::config::{DEFAULT_INPUT_PATH, DEFAULT_SEED};
use qm9_subset::data::model::{Dataset, Record};
use qm9_subset::data::writer::save_file;

const ROWS: usize = 20_000;

const COLUMNS: [&str; 17] = [
    "mol_id", "smiles", "A", "B", "C", "mu", "alpha", "homo", "lumo", "gap", "r2", "zpve", "u0",
    "u298", "h298", "g298", "cv",
];

const FRAGMENTS: [&str; 8] = ["C", "N", "O", "F", "C=O", "C#N", "CC", "C(O)"];

/// Box-Muller transform for normal distribution
fn gauss(rng: &mut ChaCha8Rng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-15);
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

fn smiles(rng: &mut ChaCha8Rng) -> String {
    let atoms = rng.random_range(1..=9);
    (0..atoms)
        .map(|_| FRAGMENTS[rng.random_range(0..FRAGMENTS.len())])
        .collect()
}

fn molecule(index: usize, rng: &mut ChaCha8Rng) -> Record {
    let homo = gauss(rng, -0.24, 0.02);
    let lumo = gauss(rng, 0.01, 0.05);
    let u0 = gauss(rng, -411.5, 40.0);

    let mut fields = vec![format!("gdb_{}", index + 1), smiles(rng)];
    fields.extend(
        [
            gauss(rng, 3.4, 1.5).abs(),   // A
            gauss(rng, 1.4, 0.4).abs(),   // B
            gauss(rng, 1.1, 0.3).abs(),   // C
            gauss(rng, 2.7, 1.5).abs(),   // mu
            gauss(rng, 75.2, 8.2),        // alpha
            homo,
            lumo,
            lumo - homo,                  // gap
            gauss(rng, 1189.5, 280.0),    // r2
            gauss(rng, 0.148, 0.033),     // zpve
            u0,
            u0 + 0.009,                   // u298
            u0 + 0.010,                   // h298
            u0 - 0.033,                   // g298
            gauss(rng, 31.6, 4.1),        // cv
        ]
        .iter()
        .map(|v| format!("{v:.6}")),
    );
    Record::new(fields)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = ChaCha8Rng::seed_from_u64(DEFAULT_SEED);
    let rows = (0..ROWS).map(|i| molecule(i, &mut rng)).collect();
    let dataset = Dataset::new(COLUMNS.iter().map(|c| c.to_string()).collect(), rows);

    let output_path = Path::new(DEFAULT_INPUT_PATH);
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    save_file(&dataset, output_path).context("writing synthetic dataset")?;

    println!(
        "Wrote {} molecules ({} columns each) to {}",
        dataset.len(),
        dataset.columns.len(),
        output_path.display()
    );
    Ok(())
}
