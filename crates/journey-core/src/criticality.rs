//! # Criticality Registry
//!
//! Severity tiers used as a sort key by the recommendation engine.
//! Each level carries an explicit rank (`critical = 1 … low = 4`); sorting
//! always goes through [`CriticalityLevel::rank`], never through variant
//! declaration order.
//!
//! Criticality is used for ordering only. Filtering by criticality happens
//! only when a caller explicitly asks for it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JourneyError;

/// Severity tier of a tool or phase.
///
/// | Level | Rank |
/// |-------|------|
/// | Critical | 1 |
/// | High | 2 |
/// | Medium | 3 |
/// | Low | 4 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalityLevel {
    /// Must be addressed first.
    Critical,
    /// High priority.
    High,
    /// Medium priority.
    Medium,
    /// Low priority.
    Low,
}

/// Total number of criticality levels.
pub const CRITICALITY_LEVEL_COUNT: usize = 4;

impl CriticalityLevel {
    /// All levels in ascending rank order (most severe first).
    pub fn all_levels() -> &'static [CriticalityLevel] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    /// Sort rank. Lower is more severe.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::High => 2,
            Self::Medium => 3,
            Self::Low => 4,
        }
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for CriticalityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriticalityLevel {
    type Err = JourneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(JourneyError::UnknownRegistryValue {
                registry: "criticality",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_levels_count() {
        assert_eq!(CriticalityLevel::all_levels().len(), CRITICALITY_LEVEL_COUNT);
    }

    #[test]
    fn test_ranks_are_strictly_ascending() {
        let ranks: Vec<u8> = CriticalityLevel::all_levels().iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for level in CriticalityLevel::all_levels() {
            let parsed: CriticalityLevel = level.as_str().parse().unwrap();
            assert_eq!(*level, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("urgent".parse::<CriticalityLevel>().is_err());
        assert!("Critical".parse::<CriticalityLevel>().is_err()); // case-sensitive
        assert!("".parse::<CriticalityLevel>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for level in CriticalityLevel::all_levels() {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }
}
