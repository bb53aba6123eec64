pub mod analysis;
pub mod io;
pub mod score;
pub mod table;

// Prelude
pub use analysis::direction::{
    analyze_directions, DirectionCount, DirectionStats, BASELINE_DIRECTION,
    DIRECTIONS_GLASS_ONLY, DIRECTIONS_WITH_CONCRETE,
};
pub use analysis::glazing::{
    analyze_glazing, GlazingCount, GlazingStats, BASELINE_CATEGORY, GLAZING_TIERS,
};
pub use io::{read_table, write_direction_stats, write_glazing_stats};
pub use score::ScoringMethod;
pub use table::SensorTable;
