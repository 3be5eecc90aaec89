use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{ActivityRecord, ClassRecord, NewActivityRequest, NewClassRequest};
use crate::store::Store;

#[derive(Default)]
struct Collections {
    classes: Vec<ClassRecord>,
    activities: Vec<ActivityRecord>,
}

/// Ephemeral in-process store. State is gone on restart; useful for tests
/// and for running the service without a database file.
///
/// Lists are returned in reverse insertion order, which keeps
/// "most-recently-created first" stable even when two records land on the
/// same timestamp.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_class(
        &self,
        req: NewClassRequest,
        user_id: &str,
    ) -> Result<ClassRecord, AppError> {
        let class = ClassRecord {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            subject: req.subject,
            grade: req.grade,
            students_count: req.students_count,
            description: req.description,
            user_id: user_id.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };

        let mut inner = self.inner.lock().await;
        inner.classes.push(class.clone());
        Ok(class)
    }

    async fn insert_activity(
        &self,
        class_id: &str,
        req: NewActivityRequest,
        user_id: &str,
    ) -> Result<ActivityRecord, AppError> {
        let activity = ActivityRecord {
            id: Uuid::new_v4().to_string(),
            class_id: class_id.to_string(),
            title: req.title,
            description: req.description,
            due_date: req.due_date,
            status: req.status.unwrap_or_default(),
            user_id: user_id.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };

        let mut inner = self.inner.lock().await;
        inner.activities.push(activity.clone());
        Ok(activity)
    }

    async fn list_classes(&self) -> Result<Vec<ClassRecord>, AppError> {
        let inner = self.inner.lock().await;
        Ok(inner.classes.iter().rev().cloned().collect())
    }

    async fn find_class(&self, id: &str) -> Result<Option<ClassRecord>, AppError> {
        let inner = self.inner.lock().await;
        Ok(inner.classes.iter().find(|c| c.id == id).cloned())
    }

    async fn activities_for_class(
        &self,
        class_id: &str,
    ) -> Result<Vec<ActivityRecord>, AppError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .activities
            .iter()
            .rev()
            .filter(|a| a.class_id == class_id)
            .cloned()
            .collect())
    }

    async fn list_activities(&self) -> Result<Vec<ActivityRecord>, AppError> {
        let inner = self.inner.lock().await;
        Ok(inner.activities.iter().rev().cloned().collect())
    }
}
