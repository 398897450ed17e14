use serde::{Deserialize, Serialize};

/// Engine knobs that the rule tables leave open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub negative_durations: DurationPolicy,
}

/// Treatment of work intervals whose end month precedes their start month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationPolicy {
    /// Misordered intervals count as zero months.
    #[default]
    Clamp,
    /// Negative month counts are summed as-is and offset other intervals.
    Propagate,
}

impl DurationPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "clamp" => Some(Self::Clamp),
            "propagate" => Some(Self::Propagate),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DurationPolicy::Clamp => "clamp",
            DurationPolicy::Propagate => "propagate",
        }
    }
}
