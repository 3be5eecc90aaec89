pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{ActivityRecord, ClassRecord, NewActivityRequest, NewClassRequest};

/// Backing store for the registry. Implementations assign identifiers and
/// creation timestamps on insert, enforce identifier uniqueness, and return
/// list results most-recently-created first.
///
/// Validation and referential checks live in the registry, not here; the
/// store only persists what it is handed.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_class(
        &self,
        req: NewClassRequest,
        user_id: &str,
    ) -> Result<ClassRecord, AppError>;

    async fn insert_activity(
        &self,
        class_id: &str,
        req: NewActivityRequest,
        user_id: &str,
    ) -> Result<ActivityRecord, AppError>;

    async fn list_classes(&self) -> Result<Vec<ClassRecord>, AppError>;

    async fn find_class(&self, id: &str) -> Result<Option<ClassRecord>, AppError>;

    async fn activities_for_class(&self, class_id: &str)
    -> Result<Vec<ActivityRecord>, AppError>;

    async fn list_activities(&self) -> Result<Vec<ActivityRecord>, AppError>;
}
