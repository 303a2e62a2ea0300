//! History domain model.
//!
//! A history record is a finalized snapshot of one entry session's working
//! activity list. Records are append-only and deletable only by clearing the
//! entire collection.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::activity::Activity;

/// A finalized activity session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Snapshot of the working activity list at commit time.
    ///
    /// This is a value copy: later changes to the working list must not
    /// retroactively affect stored history.
    pub activities: Vec<Activity>,
    /// Commit timestamp formatted as `YYYY/MM/DD HH:MM`
    pub date: String,
}

impl HistoryRecord {
    /// Creates a record by snapshotting the given working list at `at`.
    pub fn snapshot(activities: &[Activity], at: DateTime<Local>) -> Self {
        Self {
            activities: activities.to_vec(),
            date: at.format("%Y/%m/%d %H:%M").to_string(),
        }
    }

    /// Creates a record stamped with the current local time.
    pub fn snapshot_now(activities: &[Activity]) -> Self {
        Self::snapshot(activities, Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Category;
    use chrono::TimeZone;

    #[test]
    fn test_snapshot_date_format() {
        let at = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 0).unwrap();
        let record = HistoryRecord::snapshot(&[], at);
        assert_eq!(record.date, "2026/03/07 09:05");
    }

    #[test]
    fn test_snapshot_is_a_value_copy() {
        let mut working = vec![Activity::new("Work", 8, 0, Category::Work)];
        let record = HistoryRecord::snapshot(&working, Local::now());

        working[0].name = "changed".to_string();
        working.clear();

        assert_eq!(record.activities.len(), 1);
        assert_eq!(record.activities[0].name, "Work");
    }
}
