// Ingestion limits for level and snapshot JSON

// Level size caps
pub const MAX_REGIONS: usize = 10_000;
pub const MAX_POINTS_PER_REGION: usize = 50_000;
pub const MAX_POINTS_TOTAL: usize = 2_000_000;
pub const MAX_NEIGHBORS_PER_REGION: usize = 1_000;

// Snapshot caps
pub const MAX_SNAPSHOT_HISTORY: usize = 10_000;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 =  10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }
