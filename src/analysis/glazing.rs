//! Best glazing tier per row, ranked by closeness to the environment.
//!
//! Unlike the orientation analysis, the glazing comparison has no
//! better/worse direction: the tier whose score has the smallest absolute
//! difference from the raw environment reading wins, on the grounds that the
//! best glazing tracks outdoor conditions least (the indices are compared,
//! not subtracted from comfort bounds). Rows without a defined environment
//! score are excluded; no difference exists for them.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::score::ScoringMethod;
use crate::table::SensorTable;

use super::select_min;

/// Glazing tiers under comparison.
pub const GLAZING_TIERS: &[&str] = &["double-glass", "triple-glass", "quad-glass"];

/// Baseline category: the unshielded outdoor sensor.
pub const BASELINE_CATEGORY: &str = "environment";

/// Temperature/humidity column names of a glazing-file category.
pub fn sensor_columns(category: &str) -> (String, String) {
    (format!("{category}-temp"), format!("{category}-humidity"))
}

/// Win counter of one glazing tier.
#[derive(Debug, Clone, Serialize)]
pub struct GlazingCount {
    pub category: String,
    /// Rows where this tier was closest to the environment score.
    pub times_best: u64,
}

/// Tally over all rows, in the fixed tier order.
#[derive(Debug, Clone)]
pub struct GlazingStats {
    pub counts: Vec<GlazingCount>,
    /// Rows that produced a selection.
    pub num_selected_rows: u64,
}

impl GlazingStats {
    pub fn log_summary(&self) {
        info!("glazing analysis over {} scored rows:", self.num_selected_rows);
        for count in &self.counts {
            info!("  {}: closest to environment {} times", count.category, count.times_best);
        }
    }
}

struct CategoryColumns {
    temp: usize,
    humidity: usize,
}

fn resolve_columns(table: &SensorTable, category: &str) -> Result<CategoryColumns> {
    let (temp_name, humidity_name) = sensor_columns(category);
    let temp = table
        .column_index(&temp_name)
        .with_context(|| format!("Missing column: {temp_name}"))?;
    let humidity = table
        .column_index(&humidity_name)
        .with_context(|| format!("Missing column: {humidity_name}"))?;
    Ok(CategoryColumns { temp, humidity })
}

/// Scores every row and tallies the tier closest to the environment.
///
/// Fails when the table lacks an expected column.
pub fn analyze_glazing(table: &SensorTable, method: ScoringMethod) -> Result<GlazingStats> {
    let columns: Vec<CategoryColumns> = GLAZING_TIERS
        .iter()
        .map(|c| resolve_columns(table, c))
        .collect::<Result<_>>()?;
    let environment = resolve_columns(table, BASELINE_CATEGORY)?;

    let mut times_best = vec![0u64; GLAZING_TIERS.len()];
    let mut num_selected_rows = 0u64;

    let mut differences = vec![None; GLAZING_TIERS.len()];
    for row in 0..table.num_rows() {
        let env_score = method.score(
            table.numeric(row, environment.temp),
            table.numeric(row, environment.humidity),
        );

        for (slot, cols) in differences.iter_mut().zip(&columns) {
            let score = method.score(
                table.numeric(row, cols.temp),
                table.numeric(row, cols.humidity),
            );
            *slot = match (score, env_score) {
                (Some(s), Some(env)) => Some((s - env).abs()),
                _ => None,
            };
        }

        let Some(winner) = select_min(&differences) else {
            continue;
        };
        num_selected_rows += 1;
        times_best[winner] += 1;
    }

    let counts = GLAZING_TIERS
        .iter()
        .zip(times_best)
        .map(|(category, best)| GlazingCount {
            category: category.to_string(),
            times_best: best,
        })
        .collect();

    Ok(GlazingStats {
        counts,
        num_selected_rows,
    })
}
