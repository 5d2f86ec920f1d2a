use anyhow::{Context, Result};
use qm9_subset::SamplerConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = SamplerConfig::default();
    let report = qm9_subset::run(&config).with_context(|| {
        format!(
            "sampling {} rows from {}",
            config.sample_size,
            config.input_path.display()
        )
    })?;

    log::info!(
        "Sampled {} of {} rows with seed {}",
        report.rows_written,
        report.rows_available,
        config.seed
    );
    println!("{report}");
    Ok(())
}
