//! Shared deterministic types for the catalog core.
//!
//! These types define stable contracts between core components and the
//! presentation layer. They must not depend on external state or I/O.

use serde::{Deserialize, Serialize};

/// Relative demand for a role, bucketed from its job-opening count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobOpeningsSize {
    Small,
    Medium,
    Large,
}

impl JobOpeningsSize {
    /// Bucket `openings` using strict `>` comparisons against the thresholds.
    pub fn classify(openings: u32, thresholds: &OpeningsThresholds) -> Self {
        if openings > thresholds.large_above {
            JobOpeningsSize::Large
        } else if openings > thresholds.medium_above {
            JobOpeningsSize::Medium
        } else {
            JobOpeningsSize::Small
        }
    }
}

/// Job-opening counts above which a role is `medium` or `large` demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningsThresholds {
    pub medium_above: u32,
    pub large_above: u32,
}

impl Default for OpeningsThresholds {
    fn default() -> Self {
        Self {
            medium_above: 1000,
            large_above: 2000,
        }
    }
}

/// Which listing the browser is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Courses,
    Pathways,
}
