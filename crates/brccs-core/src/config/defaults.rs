use crate::constants;

// Storage
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

// Training
pub const DEFAULT_TERMINATOR_PADDING: usize = constants::DEFAULT_TERMINATOR_PADDING;

// Generation
pub const DEFAULT_LIMIT: usize = constants::DEFAULT_RESPONSE_LIMIT;
pub const DEFAULT_RECURSION_LIMIT: usize = constants::DEFAULT_RECURSION_LIMIT;

// NLP
pub const DEFAULT_STEM_CACHE_CAPACITY: u64 = 10_000;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
