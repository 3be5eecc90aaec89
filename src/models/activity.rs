use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle of an activity. Records are created as `Pending`; no edit
/// operation exists, so the other variants only show up when the backing
/// store was populated elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ActivityStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

/// A task or assessment belonging to exactly one class.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityRecord {
    pub id: String,
    pub class_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Calendar date in `YYYY-MM-DD`, no time component.
    pub due_date: Option<String>,
    pub status: ActivityStatus,
    pub user_id: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivityRequest {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<ActivityStatus>,
}
