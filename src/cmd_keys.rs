//! Offline subcommand handlers: key translation and config checks.

use std::path::Path;

use tracing::debug;

use webhands_atoms::KeySequenceTranslator;
use webhands_config::{ConfigLoader, ConfigValidator};

use crate::cli::decode_escapes;

/// Translate sequences and print the batches.
pub(crate) fn keys(sequences: &[String], persist: bool) -> anyhow::Result<()> {
    let decoded = sequences
        .iter()
        .map(|s| decode_escapes(s))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let batches = KeySequenceTranslator::translate(&decoded, persist)?;
    debug!("Translated {} sequences into {} batches", decoded.len(), batches.len());

    println!("{}", serde_json::to_string_pretty(&batches)?);
    Ok(())
}

/// Load and validate the configuration, printing what was found.
pub(crate) fn check_config(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        println!("{} not found; using defaults", path.display());
    }
    let config = ConfigLoader::load_or_default(path)?;
    let result = ConfigValidator::validate(&config);

    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }

    result.ensure_valid()?;
    println!("Configuration OK");
    Ok(())
}
