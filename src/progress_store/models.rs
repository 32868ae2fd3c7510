use serde::{Deserialize, Serialize};

/// One student's score for one subject within one classroom.
///
/// Owned by the records backend; this server only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub id: String,
    pub subject: String,
    pub score: f64,
    pub classroom_id: String,
    pub student_id: String,
    pub teacher_id: String,
}

/// The caller's profile row from the records backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub role: String,
    pub full_name: Option<String>,
}
