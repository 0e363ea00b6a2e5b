//! Dataset CLI commands
//!
//! Provides commands for sealing a plain dataset, generating keys, and
//! checking that the configured dataset decrypts.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::crypto::{encrypt_columns, DatasetKey};
use crate::error::{HoldingsError, HoldingsResult};
use crate::reports::distinct_area_count;
use crate::storage::{CsvFileSource, DatasetSource};

use super::AppContext;

/// Dataset management commands
#[derive(Subcommand, Debug)]
pub enum DatasetCommands {
    /// Encrypt the configured columns of a plain CSV dataset
    Seal {
        /// Plain CSV input
        plain: PathBuf,
        /// Sealed CSV output
        output: PathBuf,
    },

    /// Generate a new base64 dataset key
    Keygen,

    /// Decrypt and load the configured dataset
    Verify,
}

/// Handle dataset commands
pub fn handle_dataset_command(ctx: &AppContext, cmd: DatasetCommands) -> HoldingsResult<()> {
    match cmd {
        DatasetCommands::Seal { plain, output } => seal_dataset(ctx, plain, output),
        DatasetCommands::Keygen => generate_key(ctx),
        DatasetCommands::Verify => verify_dataset(ctx),
    }
}

/// Encrypt a plain dataset with the configured key
fn seal_dataset(ctx: &AppContext, plain: PathBuf, output: PathBuf) -> HoldingsResult<()> {
    let key = ctx.key()?;
    let raw = CsvFileSource::new(&plain).fetch_raw()?;

    // Refuse to seal rows that would not load afterwards
    let holdings = raw.to_holdings()?;

    let sealed = encrypt_columns(&raw, &key, &ctx.settings.encrypted_columns)?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&output).map_err(|e| {
        HoldingsError::Io(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    sealed.write_csv(BufWriter::new(file))?;

    log::info!(
        "Sealed {} rows from {} into {}",
        holdings.len(),
        plain.display(),
        output.display()
    );
    println!(
        "Sealed {} holdings ({} encrypted columns) to: {}",
        holdings.len(),
        ctx.settings.encrypted_columns.len(),
        output.display()
    );
    Ok(())
}

/// Print a fresh key for the key environment variable
fn generate_key(ctx: &AppContext) -> HoldingsResult<()> {
    let key = DatasetKey::generate();
    println!("{}", key.to_base64());
    eprintln!();
    eprintln!(
        "Store this key in the {} environment variable. Datasets sealed with it \
         cannot be read without it.",
        ctx.settings.key_env_var
    );
    Ok(())
}

/// Load the dataset end to end and report what was found
fn verify_dataset(ctx: &AppContext) -> HoldingsResult<()> {
    let table = ctx.load_uncached()?;

    println!("Dataset OK: {}", ctx.dataset_path().display());
    println!("  Holdings: {}", table.len());
    println!("  Areas:    {}", distinct_area_count(&table));
    Ok(())
}
