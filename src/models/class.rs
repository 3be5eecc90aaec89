use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A "turma": the top-level organizational unit a teacher owns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClassRecord {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub grade: String,
    pub students_count: i32,
    pub description: Option<String>,
    pub user_id: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClassRequest {
    pub name: String,
    pub subject: String,
    pub grade: String,
    pub students_count: i32,
    pub description: Option<String>,
}
