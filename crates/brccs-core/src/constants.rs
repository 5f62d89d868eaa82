/// BRCCS system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of terminator labels appended after the real words of every target sentence.
pub const DEFAULT_TERMINATOR_PADDING: usize = 50;

/// Hard cap on the number of words in a generated response.
pub const DEFAULT_RESPONSE_LIMIT: usize = 1000;

/// Maximum consecutive repeats of one word before generation truncates and stops.
pub const DEFAULT_RECURSION_LIMIT: usize = 5;

/// Name of the extra feature carrying the output position being predicted.
pub const RESPONSE_INDEX_FEATURE: &str = "response_index";
