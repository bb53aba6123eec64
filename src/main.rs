//! Batch runner for the glassbox sensor logs.
//!
//! Processes the fixed file set of the study: two orientation logs scored by
//! the arithmetic mean, and two glazing logs scored by both heat-index
//! variants. Each file is handled independently; a missing or malformed file
//! is logged and the rest of the batch continues. Results land in
//! `output/<method>/`, created on demand.

use anyhow::Result;
use log::{error, info};
use std::path::{Path, PathBuf};

use glassbox::{
    analyze_directions, analyze_glazing, read_table, write_direction_stats, write_glazing_stats,
    ScoringMethod, DIRECTIONS_GLASS_ONLY, DIRECTIONS_WITH_CONCRETE,
};

fn output_path(method: ScoringMethod, file_name: &str) -> PathBuf {
    Path::new("output").join(method.dir_name()).join(file_name)
}

fn run_direction_file(
    input: &Path,
    directions: &[&str],
    method: ScoringMethod,
    output_file: &str,
) -> Result<()> {
    let table = read_table(input)?;
    table.null_report().log();
    let stats = analyze_directions(&table, directions, method)?;
    stats.log_summary();
    let out = output_path(method, output_file);
    write_direction_stats(&out, &stats)?;
    info!("statistics saved to {}", out.display());
    Ok(())
}

fn run_glazing_file(input: &Path, method: ScoringMethod, output_file: &str) -> Result<()> {
    let table = read_table(input)?;
    table.null_report().log();
    let stats = analyze_glazing(&table, method)?;
    stats.log_summary();
    let out = output_path(method, output_file);
    write_glazing_stats(&out, &stats)?;
    info!("statistics saved to {}", out.display());
    Ok(())
}

fn main() {
    env_logger::init();

    let data = Path::new("data");

    // Orientation logs, scored by the study's mean method.
    let direction_runs: [(&str, &[&str], &str); 2] = [
        (
            "ICONALLDATA-no-concrete.csv",
            DIRECTIONS_GLASS_ONLY,
            "statistics_no_concrete.csv",
        ),
        (
            "ICONALLDATA-with-concrete.csv",
            DIRECTIONS_WITH_CONCRETE,
            "statistics_with_concrete.csv",
        ),
    ];
    for (input, directions, output) in direction_runs {
        let path = data.join(input);
        info!("=== direction analysis: {input} ===");
        if let Err(err) = run_direction_file(&path, directions, ScoringMethod::Mean, output) {
            error!("skipping {input}: {err:#}");
        }
    }

    // Glazing logs, scored by both heat-index variants.
    let glazing_runs = [
        ("GLASSBOX-T174H-north-winter.csv", "glassbox_analysis_north_winter.csv"),
        ("GLASSBOX-T174H-south-summer.csv", "glassbox_analysis_south_summer.csv"),
    ];
    for method in [ScoringMethod::HeatIndexFull, ScoringMethod::HeatIndexLinear] {
        for (input, output) in glazing_runs {
            let path = data.join(input);
            info!("=== glazing analysis ({}): {input} ===", method.dir_name());
            if let Err(err) = run_glazing_file(&path, method, output) {
                error!("skipping {input}: {err:#}");
            }
        }
    }
}
