//! File I/O for sensor logs and analysis results.

pub mod csv;

pub use csv::{read_table, write_direction_stats, write_glazing_stats};
