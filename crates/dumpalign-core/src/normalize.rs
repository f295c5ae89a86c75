//! Fuzzy comparison keys for dump lines.
//!
//! A fuzzy key strips the volatile parts of a line (addresses, hex ids,
//! timestamp values) and all whitespace, so two regenerations of the same
//! dump produce equal keys for lines that only differ in those parts.

use regex::Regex;
use std::sync::OnceLock;

/// Key returned for any line carrying a timestamp label.
pub const TIMESTAMP_SENTINEL: &str = "timedatestamp";

/// Label phrase that marks a timestamp line (matched case-insensitively).
const TIMESTAMP_LABEL: &str = "time date stamp";

static HEX_PREFIXED_RE: OnceLock<Regex> = OnceLock::new();
static ADDRESS_RANGE_RE: OnceLock<Regex> = OnceLock::new();
static HEX_TOKEN_RE: OnceLock<Regex> = OnceLock::new();

/// Compute the fuzzy comparison key of a single line.
///
/// - blank or whitespace-only lines map to `""`
/// - any line containing "time date stamp" maps to [`TIMESTAMP_SENTINEL`]
/// - otherwise `0x` runs, `(<hex> to <hex>)` ranges and standalone hex
///   tokens of 1 to 16 digits are removed, then all whitespace is dropped
///
/// The function is total and lossy: lines that differ only in something
/// that looks like a hex token collide.
///
/// # Example
///
/// ```
/// use dumpalign_core::normalize::fuzzy_key;
///
/// assert_eq!(fuzzy_key("Address: 0x1A2B3C"), fuzzy_key("Address: 0xFFFFFF"));
/// assert_eq!(fuzzy_key("   "), "");
/// ```
pub fn fuzzy_key(line: &str) -> String {
    if line.trim().is_empty() {
        return String::new();
    }
    if line.to_lowercase().contains(TIMESTAMP_LABEL) {
        return TIMESTAMP_SENTINEL.to_string();
    }

    let hex_prefixed = HEX_PREFIXED_RE
        .get_or_init(|| Regex::new(r"0x[0-9a-fA-F]+").expect("Invalid hex prefix regex"));
    let address_range = ADDRESS_RANGE_RE.get_or_init(|| {
        Regex::new(r"\([0-9a-fA-F\s]+to[0-9a-fA-F\s]+\)").expect("Invalid address range regex")
    });
    let hex_token = HEX_TOKEN_RE
        .get_or_init(|| Regex::new(r"\b[0-9a-fA-F]{1,16}\b").expect("Invalid hex token regex"));

    let stripped = hex_prefixed.replace_all(line, "");
    let stripped = address_range.replace_all(&stripped, "");
    let stripped = hex_token.replace_all(&stripped, "");

    stripped.chars().filter(|c| !c.is_whitespace()).collect()
}
