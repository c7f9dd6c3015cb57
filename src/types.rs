// src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Named selection policy understood by the scoring service.
///
/// The crate never interprets a strategy; it only forwards the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Favours low-effort quick wins.
    FastestWins,
    /// Favours high-importance work.
    HighImpact,
    /// Favours deadlines above everything else.
    DeadlineDriven,
    /// Balanced across all dimensions.
    SmartBalance,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
        Strategy::SmartBalance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
            Strategy::SmartBalance => "smart_balance",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::SmartBalance
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "invalid strategy: {wanted} (expected one of fastest_wins, high_impact, deadline_driven, smart_balance)"
                )
            })
    }
}

/// Priority class assigned by the scoring service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PriorityLabel {
    High,
    Medium,
    Low,
}

impl PriorityLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            PriorityLabel::High => "High",
            PriorityLabel::Medium => "Medium",
            PriorityLabel::Low => "Low",
        }
    }

    /// Parse a label as sent over the wire. Unknown labels yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "High" => Some(PriorityLabel::High),
            "Medium" => Some(PriorityLabel::Medium),
            "Low" => Some(PriorityLabel::Low),
            _ => None,
        }
    }
}

impl fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treat an explicit JSON `null` the same as a missing key.
///
/// `#[serde(default)]` alone only covers the missing case.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lenient deserializer for `priority_label` fields: anything that is not one
/// of the three known labels becomes `None` instead of failing the response.
pub fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<PriorityLabel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(PriorityLabel::parse))
}
