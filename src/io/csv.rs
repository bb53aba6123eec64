//! CSV I/O for sensor logs and tally tables.
//!
//! Reading produces a [`SensorTable`] with raw cells; all numeric coercion
//! happens later, on access. Writing serializes the tally rows in their
//! fixed category order and creates the output directory on demand.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::analysis::direction::DirectionStats;
use crate::analysis::glazing::GlazingStats;
use crate::table::SensorTable;

/// Reads a sensor log CSV into a [`SensorTable`].
///
/// The first row is the header. Ragged rows are tolerated; short rows are
/// padded with empty cells by the table.
pub fn read_table(path: &Path) -> Result<SensorTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header row of: {}", path.display()))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to read record from: {}", path.display()))?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(SensorTable::new(headers, rows))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Writes a direction tally as `Direction,Times_Best,Times_Better_Than_North`.
pub fn write_direction_stats(path: &Path, stats: &DirectionStats) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    for count in &stats.counts {
        writer
            .serialize(count)
            .with_context(|| format!("Failed to write record to: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush: {}", path.display()))?;
    Ok(())
}

/// Writes a glazing tally as `category,times_best`.
pub fn write_glazing_stats(path: &Path, stats: &GlazingStats) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    for count in &stats.counts {
        writer
            .serialize(count)
            .with_context(|| format!("Failed to write record to: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush: {}", path.display()))?;
    Ok(())
}
