use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived average for one classroom, one document per classroom id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassroomAverage {
    pub classroom_id: String,
    pub average_score: f64,
    pub last_calculated: DateTime<Utc>,
}
