//! Request parameters for the paper endpoint.

use serde::{Deserialize, Serialize};

use crate::crawler::CrawlLimits;
use crate::error::ApiError;

/// Optional per-request crawl overrides (`?depth=2&fanOut=4`).
///
/// Overrides may only narrow the configured limits.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlQuery {
    /// Maximum expansion depth.
    #[serde(default)]
    pub depth: Option<u32>,

    /// Maximum related papers per node.
    #[serde(default)]
    pub fan_out: Option<usize>,
}

impl CrawlQuery {
    /// Apply the overrides on top of the configured ceiling.
    ///
    /// # Errors
    ///
    /// Returns a validation error when an override exceeds the ceiling or
    /// the fan-out is zero.
    pub fn resolve(&self, ceiling: CrawlLimits) -> Result<CrawlLimits, ApiError> {
        let mut limits = ceiling;

        if let Some(depth) = self.depth {
            if depth > ceiling.max_depth {
                return Err(ApiError::validation(
                    "depth",
                    format!("must not exceed {}", ceiling.max_depth),
                ));
            }
            limits.max_depth = depth;
        }

        if let Some(fan_out) = self.fan_out {
            if fan_out == 0 {
                return Err(ApiError::validation("fanOut", "must be at least 1"));
            }
            if fan_out > ceiling.max_fan_out {
                return Err(ApiError::validation(
                    "fanOut",
                    format!("must not exceed {}", ceiling.max_fan_out),
                ));
            }
            limits.max_fan_out = fan_out;
        }

        Ok(limits)
    }
}
