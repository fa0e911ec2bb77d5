//! Check-in record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::clock_time::ClockTime;
use super::resolved_shift::ResolvedShift;

/// One daily wellness check-in.
///
/// At most one record exists per worker per calendar date; re-submission on
/// the same date overwrites the earlier record. The shift snapshot captures
/// the resolution that was in force at submission time, so later schedule
/// changes do not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInRecord {
    /// The worker who submitted the check-in.
    pub worker_id: String,
    /// The calendar date the check-in belongs to.
    pub date: NaiveDate,
    /// Wall-clock submission time.
    pub submitted_at: ClockTime,
    /// The shift resolved at submission time, if any schedule applied.
    #[serde(default)]
    pub shift_snapshot: Option<ResolvedShift>,
    /// Free-form check-in payload (readiness answers, notes, and so on).
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_round_trip() {
        let record = CheckInRecord {
            worker_id: "worker_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            submitted_at: ClockTime::new(7, 40),
            shift_snapshot: None,
            payload: serde_json::json!({ "feeling": "ready" }),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: CheckInRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_payload_defaults_to_null_when_absent() {
        let json = r#"{
            "worker_id": "worker_001",
            "date": "2025-06-02",
            "submitted_at": "07:40"
        }"#;

        let record: CheckInRecord = serde_json::from_str(json).unwrap();
        assert!(record.shift_snapshot.is_none());
        assert!(record.payload.is_null());
    }
}
