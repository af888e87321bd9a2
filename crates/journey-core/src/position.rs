//! # Tool Position
//!
//! Intra-phase tie-break tag. Sorting goes through
//! [`ToolPosition::precedence`]: `emergency` always comes first, followed by
//! `primary`, `secondary`, `tertiary`, `quaternary`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JourneyError;

/// Position of a tool within its phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolPosition {
    /// Main tool of the phase.
    Primary,
    /// Second tool of the phase.
    Secondary,
    /// Third tool of the phase.
    Tertiary,
    /// Fourth tool of the phase.
    Quaternary,
    /// Incident-response tool; sorts ahead of every other position.
    Emergency,
}

impl ToolPosition {
    /// All positions in precedence order.
    pub fn all_positions() -> &'static [ToolPosition] {
        &[
            Self::Emergency,
            Self::Primary,
            Self::Secondary,
            Self::Tertiary,
            Self::Quaternary,
        ]
    }

    /// Sort key within a phase. Lower sorts first.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Emergency => 0,
            Self::Primary => 1,
            Self::Secondary => 2,
            Self::Tertiary => 3,
            Self::Quaternary => 4,
        }
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Quaternary => "quaternary",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for ToolPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolPosition {
    type Err = JourneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "tertiary" => Ok(Self::Tertiary),
            "quaternary" => Ok(Self::Quaternary),
            "emergency" => Ok(Self::Emergency),
            other => Err(JourneyError::UnknownRegistryValue {
                registry: "position",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emergency_sorts_first() {
        for p in ToolPosition::all_positions() {
            if *p != ToolPosition::Emergency {
                assert!(ToolPosition::Emergency.precedence() < p.precedence());
            }
        }
    }

    #[test]
    fn test_all_positions_in_precedence_order() {
        let keys: Vec<u8> = ToolPosition::all_positions().iter().map(|p| p.precedence()).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_parse_roundtrip() {
        for p in ToolPosition::all_positions() {
            assert_eq!(p.as_str().parse::<ToolPosition>().unwrap(), *p);
        }
        assert!("quinary".parse::<ToolPosition>().is_err());
    }
}
