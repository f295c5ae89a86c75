//! dumpalign core - fuzzy block alignment of inspection dumps
//!
//! This crate holds the pure alignment engine and the facilities shared by
//! the rest of the workspace:
//! - fuzzy comparison keys that ignore addresses, hex ids and timestamps
//! - block segmentation with soft blank-line handling
//! - baseline block matching and line reordering
//! - canvas composition back into text
//! - the baseline provider seam, run configuration, errors and logging
//!
//! Nothing here touches the filesystem or spawns processes.

pub mod align;
pub mod baseline;
pub mod blocks;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod normalize;

pub use dumpalign_core_types as core_types;

// Re-export commonly used types
pub use align::{align_texts, Alignment, AlignmentReport};
pub use baseline::{BaselineProvider, MemoryBaselines, NoBaseline};
pub use blocks::{parse_blocks, Block};
pub use config::AlignConfig;
pub use errors::{DumpAlignError, ExError, ExErrorKind, Result};
pub use normalize::fuzzy_key;
