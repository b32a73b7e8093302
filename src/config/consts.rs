// src/config/consts.rs
use crate::sort::Column;

// Net config
pub const HOST: &str = "www.last.fm";
pub const PORT: u16 = 80;
pub const USER_AGENT: &str = "totalscrobbles/1.0";
pub const TIMEOUT_SECS: u64 = 15;

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Sorting
/// Last.fm serves tracklists already sorted by track position.
pub const INITIAL_SORTED_COLUMN: Column = Column::Track;

// Banding markers applied after every sort
pub const STRIPE_FIRST: &str = "first";
pub const STRIPE_LAST: &str = "last";
pub const STRIPE_ODD: &str = "odd";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
