//! Machining defaults shared across crates.

/// Maximum 2D distance at which two endpoints are treated as coincident.
pub const DEFAULT_TOLERANCE: f64 = 0.01625;

/// Height the tool is raised to once every layer has been cut.
pub const DEFAULT_CLEARANCE_HEIGHT: f64 = 2.0;

/// Feed rate for cutting moves. Plunges run at half of this.
pub const DEFAULT_FEED_RATE: f64 = 1.0;

/// Total material depth, split evenly across the layers.
pub const DEFAULT_TOTAL_DEPTH: f64 = 0.4375;

/// Number of passes taken to reach the total depth.
pub const DEFAULT_LAYER_COUNT: u32 = 3;
