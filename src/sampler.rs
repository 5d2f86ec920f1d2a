use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::data::model::Dataset;

/// Draw `n` rows uniformly at random, without replacement.
///
/// The generator is ChaCha8 seeded from `seed`, so the same dataset and seed
/// always select the same rows in the same order. When `n` exceeds the number
/// of rows the whole dataset is returned, shuffled.
pub fn sample_rows(dataset: &Dataset, n: usize, seed: u64) -> Dataset {
    let available = dataset.len();
    let amount = n.min(available);
    if amount < n {
        log::warn!("Requested {n} rows but only {available} are available; taking all of them");
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    log::debug!("Sampling {amount} of {available} rows with seed {seed}");

    let picked = index::sample(&mut rng, available, amount);
    dataset.take_rows(picked.into_iter())
}
