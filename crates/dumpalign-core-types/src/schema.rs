//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Alignment context
pub const FIELD_FILE: &str = "file";
pub const FIELD_BLOCK_START: &str = "block_start";
pub const FIELD_PREVIEW: &str = "preview";

// Alignment counters
pub const FIELD_MATCHED_BLOCKS: &str = "matched_blocks";
pub const FIELD_UNPLACED_BLOCKS: &str = "unplaced_blocks";
pub const FIELD_DUPLICATES: &str = "duplicates";
pub const FIELD_OVERLAPS: &str = "overlaps";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_SKIP: &str = "skip";
pub const EVENT_DUPLICATE_KEY: &str = "duplicate_key";
pub const EVENT_BASELINE_COLLISION: &str = "baseline_collision";
pub const EVENT_CANVAS_OVERLAP: &str = "canvas_overlap";
