//! Engine policy configuration types.

use serde::{Deserialize, Serialize};

fn default_lookback_days() -> u32 {
    30
}

fn default_forward_horizon_days() -> u32 {
    90
}

fn default_next_occurrence_horizon_days() -> u32 {
    730
}

fn default_streak_milestones() -> Vec<u32> {
    vec![7, 14, 30, 60, 90]
}

/// Tuning knobs for the scheduling engine.
///
/// Every field has a production default; a policy file only needs to name
/// the values it changes.
///
/// # Example
///
/// ```
/// use checkin_engine::config::EnginePolicy;
///
/// let policy: EnginePolicy = serde_yaml::from_str("lookback_days: 14").unwrap();
/// assert_eq!(policy.lookback_days, 14);
/// assert_eq!(policy.forward_horizon_days, 90);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnginePolicy {
    /// How many days the streak engine scans backward from today.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,

    /// How many days past today count toward total scheduled days.
    #[serde(default = "default_forward_horizon_days")]
    pub forward_horizon_days: u32,

    /// Upper bound, in days, for the next-occurrence forward scan.
    #[serde(default = "default_next_occurrence_horizon_days")]
    pub next_occurrence_horizon_days: u32,

    /// Streak milestones in ascending order; the next milestone is the
    /// first value strictly above the current streak.
    #[serde(default = "default_streak_milestones")]
    pub streak_milestones: Vec<u32>,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            lookback_days: default_lookback_days(),
            forward_horizon_days: default_forward_horizon_days(),
            next_occurrence_horizon_days: default_next_occurrence_horizon_days(),
            streak_milestones: default_streak_milestones(),
        }
    }
}
