//! Generate a mnemonic, check it and derive its seed.
//! Run with: cargo run --example wordseed_demo -- [path/to/wordseed.toml]

use std::path::PathBuf;

use anyhow::{Context, Result};
use wordseed_core::{mnemonic_to_seed, WordseedConfig};

fn main() -> Result<()> {
    let mut config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => WordseedConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => WordseedConfig::default(),
    };
    config.apply_env_overrides();
    config
        .validate()
        .context("Configuration validation failed")?;

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    let registry = config.build_registry()?;
    log::info!(
        "Generating {}-bit {} mnemonic",
        config.mnemonic.strength,
        config.mnemonic.language
    );

    let mnemonic = registry
        .generate_mnemonic(Some(config.mnemonic.strength), None)
        .context("Mnemonic generation failed")?;
    anyhow::ensure!(
        registry.validate_mnemonic(&mnemonic, None),
        "generated mnemonic failed validation"
    );
    let entropy = registry.mnemonic_to_entropy(&mnemonic, None)?;

    println!("=== DEMO ONLY, DO NOT USE FOR FUNDS ===\n");
    println!("Mnemonic: {}", mnemonic);
    println!("Entropy:  {}", entropy);
    println!("Seed:     {}", mnemonic_to_seed(&mnemonic, None).to_hex());
    Ok(())
}
