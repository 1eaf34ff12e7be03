//! Configuration for the sniffing heuristics.
//!
//! The text heuristics are tuned by a handful of thresholds. They are kept
//! as named constants so tests can probe their boundaries, and collected in
//! [`HeuristicConfig`] for callers that want to tune them.

use crate::io::IOLimits;
use serde::{Deserialize, Serialize};

/// Size of each window in a chunked scan.
pub const SCAN_WINDOW: usize = 1024;

/// Percentage of non-text bytes below which a source still counts as plain text.
pub const TEXT_TOLERANCE_PERCENT: u64 = 2;

/// Line length used to estimate the newline density of code page text.
pub const TEXT_COLUMNS: u64 = 80;

/// Number of CSI escape codes needed for a positive CSI result.
pub const MIN_CSI_CODES: usize = 3;

/// Master configuration for sniffing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SniffConfig {
    /// Limits applied when opening file-backed sources.
    pub io: IOLimits,
    /// Thresholds for the text heuristics.
    pub heuristics: HeuristicConfig,
}

impl SniffConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Render the configuration as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Thresholds for the text and escape-code heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Window size for chunked scans.
    pub window: usize,
    /// Tolerated percentage of non-text bytes in plain text.
    pub text_tolerance_percent: u64,
    /// Expected columns per line in code page text.
    pub columns: u64,
    /// Minimum number of CSI codes.
    pub min_csi_codes: usize,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            window: SCAN_WINDOW,
            text_tolerance_percent: TEXT_TOLERANCE_PERCENT,
            columns: TEXT_COLUMNS,
            min_csi_codes: MIN_CSI_CODES,
        }
    }
}
