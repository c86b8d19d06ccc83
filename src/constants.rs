pub const DEFAULT_SEED: u64 = 0;
pub const DEFAULT_PRUNE_ATTEMPTS: usize = 10;
pub const DEFAULT_MAX_PRUNED_NODES: usize = 5;
pub const DEFAULT_LOG_ITERATIONS: usize = 0;
/// Indentation written once per tree level when rendering.
pub const LEVEL_BAR: &str = "| ";
