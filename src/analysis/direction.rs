//! Best facade orientation per row, tallied against the north baseline.
//!
//! Each orientation carries a temperature and a humidity column. Per row the
//! configured [`ScoringMethod`] scores every candidate orientation; the one
//! with the lowest score wins and is compared (strict less-than) against the
//! north reading. Rows where no orientation has a defined score are excluded
//! from the tally.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::score::ScoringMethod;
use crate::table::SensorTable;

use super::select_min;

/// Candidate orientations of the all-glass test cells.
pub const DIRECTIONS_GLASS_ONLY: &[&str] = &["south-glass", "west-glass", "east-glass"];

/// Candidate orientations including the concrete reference cell.
pub const DIRECTIONS_WITH_CONCRETE: &[&str] =
    &["south-glass", "south-con", "west-glass", "east-glass"];

/// Baseline orientation every winner is compared against.
pub const BASELINE_DIRECTION: &str = "north-glass";

/// Temperature/humidity column names of an orientation.
///
/// The concrete cell is wired to a different data logger and keeps its
/// original channel names.
pub fn sensor_columns(direction: &str) -> (String, String) {
    if direction == "south-con" {
        (
            "T1ENVIRO[C]-south-con".to_string(),
            "HUMD1ENVIRO[%rH]-south-con".to_string(),
        )
    } else {
        (
            format!("Temperature[C]-{direction}"),
            format!("Humidity[%rH]-{direction}"),
        )
    }
}

/// Win counters of one orientation.
#[derive(Debug, Clone, Serialize)]
pub struct DirectionCount {
    #[serde(rename = "Direction")]
    pub direction: String,
    /// Rows where this orientation had the lowest score.
    #[serde(rename = "Times_Best")]
    pub times_best: u64,
    /// Rows where it won and its score was strictly below the north score.
    #[serde(rename = "Times_Better_Than_North")]
    pub times_better_than_north: u64,
}

/// Tally over all rows, in the fixed orientation order.
#[derive(Debug, Clone)]
pub struct DirectionStats {
    pub counts: Vec<DirectionCount>,
    /// Rows that produced a selection (at least one defined score).
    pub num_selected_rows: u64,
}

impl DirectionStats {
    pub fn log_summary(&self) {
        info!("direction analysis over {} scored rows:", self.num_selected_rows);
        for count in &self.counts {
            info!(
                "  {}: best {} times, better than north {} times",
                count.direction, count.times_best, count.times_better_than_north
            );
        }
    }
}

/// Resolved column indices of one orientation.
struct DirectionColumns {
    temp: usize,
    humidity: usize,
}

fn resolve_columns(table: &SensorTable, direction: &str) -> Result<DirectionColumns> {
    let (temp_name, humidity_name) = sensor_columns(direction);
    let temp = table
        .column_index(&temp_name)
        .with_context(|| format!("Missing column: {temp_name}"))?;
    let humidity = table
        .column_index(&humidity_name)
        .with_context(|| format!("Missing column: {humidity_name}"))?;
    Ok(DirectionColumns { temp, humidity })
}

/// Scores every row and tallies the winning orientations.
///
/// `directions` is the fixed candidate list ([`DIRECTIONS_GLASS_ONLY`] or
/// [`DIRECTIONS_WITH_CONCRETE`]); the baseline is always
/// [`BASELINE_DIRECTION`]. Fails when the table lacks an expected column.
pub fn analyze_directions(
    table: &SensorTable,
    directions: &[&str],
    method: ScoringMethod,
) -> Result<DirectionStats> {
    let columns: Vec<DirectionColumns> = directions
        .iter()
        .map(|d| resolve_columns(table, d))
        .collect::<Result<_>>()?;
    let baseline = resolve_columns(table, BASELINE_DIRECTION)?;

    let mut times_best = vec![0u64; directions.len()];
    let mut times_better = vec![0u64; directions.len()];
    let mut num_selected_rows = 0u64;

    let mut scores = vec![None; directions.len()];
    for row in 0..table.num_rows() {
        for (slot, cols) in scores.iter_mut().zip(&columns) {
            *slot = method.score(
                table.numeric(row, cols.temp),
                table.numeric(row, cols.humidity),
            );
        }

        let Some(winner) = select_min(&scores) else {
            // Every candidate reading was missing; the row is not counted.
            continue;
        };
        num_selected_rows += 1;
        times_best[winner] += 1;

        let baseline_score = method.score(
            table.numeric(row, baseline.temp),
            table.numeric(row, baseline.humidity),
        );
        // A missing north reading cannot be beaten.
        let beats_north = match baseline_score {
            Some(north) => scores[winner].is_some_and(|s| s < north),
            None => false,
        };
        if beats_north {
            times_better[winner] += 1;
        }
    }

    let counts = directions
        .iter()
        .zip(times_best)
        .zip(times_better)
        .map(|((direction, best), better)| DirectionCount {
            direction: direction.to_string(),
            times_best: best,
            times_better_than_north: better,
        })
        .collect();

    Ok(DirectionStats {
        counts,
        num_selected_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direction_table(rows: Vec<Vec<&str>>) -> SensorTable {
        let headers = vec![
            "id".to_string(),
            "Temperature[C]-south-glass".to_string(),
            "Humidity[%rH]-south-glass".to_string(),
            "Temperature[C]-west-glass".to_string(),
            "Humidity[%rH]-west-glass".to_string(),
            "Temperature[C]-east-glass".to_string(),
            "Humidity[%rH]-east-glass".to_string(),
            "Temperature[C]-north-glass".to_string(),
            "Humidity[%rH]-north-glass".to_string(),
        ];
        let rows = rows
            .into_iter()
            .map(|r| r.into_iter().map(String::from).collect())
            .collect();
        SensorTable::new(headers, rows)
    }

    #[test]
    fn test_two_category_tally_scenario() {
        // Two candidates with mean scores A=[1,5,missing], B=[2,3,4]:
        // row 1 selects A, rows 2 and 3 select B.
        let headers = vec![
            "Temperature[C]-south-glass".to_string(),
            "Humidity[%rH]-south-glass".to_string(),
            "Temperature[C]-west-glass".to_string(),
            "Humidity[%rH]-west-glass".to_string(),
            "Temperature[C]-north-glass".to_string(),
            "Humidity[%rH]-north-glass".to_string(),
        ];
        let rows = vec![
            vec!["1", "1", "2", "2", "100", "100"],
            vec!["5", "5", "3", "3", "100", "100"],
            vec!["", "5", "4", "4", "100", "100"],
        ]
        .into_iter()
        .map(|r| r.into_iter().map(String::from).collect())
        .collect();
        let table = SensorTable::new(headers, rows);

        let stats = analyze_directions(
            &table,
            &["south-glass", "west-glass"],
            ScoringMethod::Mean,
        )
        .unwrap();

        assert_eq!(stats.counts[0].times_best, 1);
        assert_eq!(stats.counts[1].times_best, 2);
        assert_eq!(stats.num_selected_rows, 3);
        // All winners beat the hot north baseline.
        assert_eq!(stats.counts[0].times_better_than_north, 1);
        assert_eq!(stats.counts[1].times_better_than_north, 2);
    }

    #[test]
    fn test_tally_sums_to_valid_rows() {
        let table = direction_table(vec![
            vec!["1", "20", "50", "22", "55", "21", "52", "19", "48"],
            vec!["2", "25", "60", "18", "40", "30", "70", "20", "50"],
            vec!["3", "", "", "", "", "", "", "20", "50"],
        ]);
        let stats =
            analyze_directions(&table, DIRECTIONS_GLASS_ONLY, ScoringMethod::Mean).unwrap();

        let total: u64 = stats.counts.iter().map(|c| c.times_best).sum();
        // Row 3 has no candidate readings at all and is excluded.
        assert_eq!(total, 2);
        assert_eq!(stats.num_selected_rows, 2);
    }

    #[test]
    fn test_beats_north_uses_strict_less_than() {
        // Winner mean equals the north mean: not better.
        let table = direction_table(vec![vec![
            "1", "20", "50", "25", "60", "26", "61", "20", "50",
        ]]);
        let stats =
            analyze_directions(&table, DIRECTIONS_GLASS_ONLY, ScoringMethod::Mean).unwrap();
        assert_eq!(stats.counts[0].times_best, 1);
        assert_eq!(stats.counts[0].times_better_than_north, 0);
    }

    #[test]
    fn test_missing_north_never_beaten() {
        let table = direction_table(vec![vec![
            "1", "20", "50", "25", "60", "26", "61", "", "50",
        ]]);
        let stats =
            analyze_directions(&table, DIRECTIONS_GLASS_ONLY, ScoringMethod::Mean).unwrap();
        assert_eq!(stats.counts[0].times_best, 1);
        assert_eq!(stats.counts[0].times_better_than_north, 0);
    }

    #[test]
    fn test_nan_cell_cannot_win_a_row() {
        // A literal NaN temperature in a later column coerces to missing and
        // must not displace the real minimum (south, mean 25).
        let table = direction_table(vec![vec![
            "1", "10", "40", "22", "50", "NaN", "50", "30", "60",
        ]]);
        let stats =
            analyze_directions(&table, DIRECTIONS_GLASS_ONLY, ScoringMethod::Mean).unwrap();
        assert_eq!(stats.counts[0].direction, "south-glass");
        assert_eq!(stats.counts[0].times_best, 1);
        assert_eq!(stats.counts[2].times_best, 0);
        assert_eq!(stats.num_selected_rows, 1);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let table = SensorTable::new(vec!["id".to_string()], vec![]);
        let err =
            analyze_directions(&table, DIRECTIONS_GLASS_ONLY, ScoringMethod::Mean).unwrap_err();
        assert!(err.to_string().contains("Missing column"));
    }

    #[test]
    fn test_concrete_channel_names() {
        let (t, h) = sensor_columns("south-con");
        assert_eq!(t, "T1ENVIRO[C]-south-con");
        assert_eq!(h, "HUMD1ENVIRO[%rH]-south-con");
        let (t, h) = sensor_columns("east-glass");
        assert_eq!(t, "Temperature[C]-east-glass");
        assert_eq!(h, "Humidity[%rH]-east-glass");
    }
}
