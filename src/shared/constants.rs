/// Maximum size for a single uploaded image in bytes (5 MiB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Minimum title length after trimming
pub const TITLE_MIN_LEN: usize = 10;

/// Maximum title length (untrimmed)
pub const TITLE_MAX_LEN: usize = 100;

/// Minimum description length after trimming
pub const DESCRIPTION_MIN_LEN: usize = 10;

/// Maximum description length (untrimmed)
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// Forward tolerance for the event timestamp, in seconds.
/// Absorbs clock/timezone skew so "right now" is always selectable.
pub const EVENT_DATE_TOLERANCE_SECS: i64 = 60;
