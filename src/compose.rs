//! The compose module writes parsed records to a JSON file.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

use crate::catalog::Catalog;
use crate::record::Record;

/// Writes records to the output file as a JSON array.
///
/// # Arguments
///
/// * `records` - The records to write
/// * `output_path` - Path to the output file, created or truncated
///
/// # Errors
///
/// Returns an error if:
/// * The output file cannot be opened
/// * Serialization or writing fails
pub fn compose_records(records: &[Record], output_path: &str) -> Result<()> {
    write_json(records, output_path)?;
    info!("Composed {} records to {output_path}", records.len());
    Ok(())
}

/// Writes a classified catalog to the output file.
///
/// # Arguments
///
/// * `catalog` - The catalog to write
/// * `output_path` - Path to the output file, created or truncated
///
/// # Errors
///
/// Returns an error if:
/// * The output file cannot be opened
/// * Serialization or writing fails
pub fn compose_catalog(catalog: &Catalog, output_path: &str) -> Result<()> {
    write_json(catalog, output_path)?;
    info!(
        "Composed catalog of {} records to {output_path}",
        catalog.substances.len()
    );
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(value: &T, output_path: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(output_path)
        .context(format!("Failed to open output file: {output_path}"))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .context(format!("Failed to write JSON to {output_path}"))?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}
