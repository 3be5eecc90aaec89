use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::error::AppError;
use crate::models::{
    ActivityRecord, AggregateStats, ClassRecord, NewActivityRequest, NewClassRequest,
};
use crate::store::Store;

pub const MIN_STUDENTS: i32 = 1;
pub const MAX_STUDENTS: i32 = 50;

/// The authoritative view of a teacher's classes and activities.
///
/// Owns validation and the referential invariant (every activity belongs to
/// an existing class); persistence is delegated to an injected [`Store`].
/// Aggregates are always derived by traversing the collections, never kept
/// as separate counters.
#[derive(Clone)]
pub struct Registry {
    store: Arc<dyn Store>,
}

impl Registry {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Creates a class and returns it with store-assigned id and timestamp.
    /// The record is visible to subsequent reads as soon as this returns.
    pub async fn create_class(
        &self,
        user_id: &str,
        req: NewClassRequest,
    ) -> Result<ClassRecord, AppError> {
        let req = NewClassRequest {
            name: required_field(&req.name, "name")?,
            subject: required_field(&req.subject, "subject")?,
            grade: required_field(&req.grade, "grade")?,
            students_count: req.students_count,
            description: normalize_optional(req.description),
        };

        if !(MIN_STUDENTS..=MAX_STUDENTS).contains(&req.students_count) {
            return Err(AppError::Validation(format!(
                "students_count must be between {} and {}",
                MIN_STUDENTS, MAX_STUDENTS
            )));
        }

        let class = self.store.insert_class(req, user_id).await?;
        info!("created class {} ({})", class.name, class.id);
        Ok(class)
    }

    /// Creates an activity under an existing class. Fails with
    /// [`AppError::UnknownClass`] before anything is inserted when the class
    /// id does not resolve, so a failed call leaves the collections
    /// untouched. Status defaults to pending.
    pub async fn create_activity(
        &self,
        user_id: &str,
        class_id: &str,
        req: NewActivityRequest,
    ) -> Result<ActivityRecord, AppError> {
        let req = NewActivityRequest {
            title: required_field(&req.title, "title")?,
            description: normalize_optional(req.description),
            due_date: req.due_date.filter(|d| !d.trim().is_empty()),
            status: req.status,
        };

        if let Some(due_date) = &req.due_date {
            NaiveDate::parse_from_str(due_date, "%Y-%m-%d").map_err(|_| {
                AppError::Validation(format!("due_date must be YYYY-MM-DD, got '{}'", due_date))
            })?;
        }

        if self.store.find_class(class_id).await?.is_none() {
            return Err(AppError::UnknownClass(class_id.to_string()));
        }

        let activity = self.store.insert_activity(class_id, req, user_id).await?;
        info!("created activity {} in class {}", activity.id, class_id);
        Ok(activity)
    }

    /// All classes, most-recently-created first.
    pub async fn list_classes(&self) -> Result<Vec<ClassRecord>, AppError> {
        self.store.list_classes().await
    }

    /// Activities of one class, most-recently-created first. A class with no
    /// activities yields an empty list; an unknown class id is an error.
    pub async fn activities_for_class(
        &self,
        class_id: &str,
    ) -> Result<Vec<ActivityRecord>, AppError> {
        if self.store.find_class(class_id).await?.is_none() {
            return Err(AppError::UnknownClass(class_id.to_string()));
        }
        self.store.activities_for_class(class_id).await
    }

    /// Dashboard counters, recomputed by traversal on every call.
    pub async fn aggregate_stats(&self) -> Result<AggregateStats, AppError> {
        let classes = self.store.list_classes().await?;
        let activities = self.store.list_activities().await?;

        Ok(AggregateStats {
            classes: classes.len(),
            students: classes.iter().map(|c| i64::from(c.students_count)).sum(),
            activities: activities.len(),
        })
    }
}

fn required_field(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} must not be blank", field)));
    }
    Ok(trimmed.to_string())
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
