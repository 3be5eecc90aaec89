use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{ActivityRecord, ClassRecord, NewActivityRequest, NewClassRequest};
use crate::store::Store;

/// Durable store backed by SQLite. Rows carry a `created_at` RFC 3339
/// timestamp; the rowid breaks ordering ties for rows created within the
/// same millisecond.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn insert_class(
        &self,
        req: NewClassRequest,
        user_id: &str,
    ) -> Result<ClassRecord, AppError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO classes
                (id, name, subject, grade, students_count, description, user_id, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&id)
        .bind(&req.name)
        .bind(&req.subject)
        .bind(&req.grade)
        .bind(req.students_count)
        .bind(&req.description)
        .bind(user_id)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(ClassRecord {
            id,
            name: req.name,
            subject: req.subject,
            grade: req.grade,
            students_count: req.students_count,
            description: req.description,
            user_id: user_id.to_string(),
            created_at: now,
        })
    }

    async fn insert_activity(
        &self,
        class_id: &str,
        req: NewActivityRequest,
        user_id: &str,
    ) -> Result<ActivityRecord, AppError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let status = req.status.unwrap_or_default();

        sqlx::query(
            r#"
            INSERT INTO activities
                (id, class_id, title, description, due_date, status, user_id, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&id)
        .bind(class_id)
        .bind(&req.title)
        .bind(&req.description)
        .bind(&req.due_date)
        .bind(status)
        .bind(user_id)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(ActivityRecord {
            id,
            class_id: class_id.to_string(),
            title: req.title,
            description: req.description,
            due_date: req.due_date,
            status,
            user_id: user_id.to_string(),
            created_at: now,
        })
    }

    async fn list_classes(&self) -> Result<Vec<ClassRecord>, AppError> {
        let classes = sqlx::query_as::<_, ClassRecord>(
            r#"
            SELECT id, name, subject, grade, students_count, description, user_id, created_at
            FROM classes
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(classes)
    }

    async fn find_class(&self, id: &str) -> Result<Option<ClassRecord>, AppError> {
        let class = sqlx::query_as::<_, ClassRecord>(
            "SELECT id, name, subject, grade, students_count, description, user_id, created_at FROM classes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(class)
    }

    async fn activities_for_class(
        &self,
        class_id: &str,
    ) -> Result<Vec<ActivityRecord>, AppError> {
        let activities = sqlx::query_as::<_, ActivityRecord>(
            r#"
            SELECT id, class_id, title, description, due_date, status, user_id, created_at
            FROM activities
            WHERE class_id = ?
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(class_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }

    async fn list_activities(&self) -> Result<Vec<ActivityRecord>, AppError> {
        let activities = sqlx::query_as::<_, ActivityRecord>(
            r#"
            SELECT id, class_id, title, description, due_date, status, user_id, created_at
            FROM activities
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityStatus;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite://:memory:")
            .await
            .expect("Failed to create test db");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    fn class_req(name: &str) -> NewClassRequest {
        NewClassRequest {
            name: name.to_string(),
            subject: "Matemática".to_string(),
            grade: "5º Ano".to_string(),
            students_count: 25,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_class() {
        let store = SqliteStore::new(setup_test_db().await);

        let class = store
            .insert_class(class_req("5º Ano A"), "prof-1")
            .await
            .expect("Failed to insert class");
        assert_eq!(class.name, "5º Ano A");
        assert_eq!(class.students_count, 25);
        assert_eq!(class.user_id, "prof-1");

        let classes = store.list_classes().await.expect("Failed to list classes");
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].id, class.id);
    }

    #[tokio::test]
    async fn test_list_classes_newest_first() {
        let store = SqliteStore::new(setup_test_db().await);

        let first = store.insert_class(class_req("Turma 1"), "prof-1").await.unwrap();
        let second = store.insert_class(class_req("Turma 2"), "prof-1").await.unwrap();

        let classes = store.list_classes().await.unwrap();
        assert_eq!(classes[0].id, second.id);
        assert_eq!(classes[1].id, first.id);
    }

    #[tokio::test]
    async fn test_insert_and_fetch_activity() {
        let store = SqliteStore::new(setup_test_db().await);

        let class = store.insert_class(class_req("5º Ano A"), "prof-1").await.unwrap();

        let req = NewActivityRequest {
            title: "Prova de Matemática".to_string(),
            description: Some("Capítulos 1 a 3".to_string()),
            due_date: Some("2026-09-15".to_string()),
            status: None,
        };
        let activity = store
            .insert_activity(&class.id, req, "prof-1")
            .await
            .expect("Failed to insert activity");

        assert_eq!(activity.status, ActivityStatus::Pending);
        assert_eq!(activity.class_id, class.id);

        let activities = store.activities_for_class(&class.id).await.unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].title, "Prova de Matemática");
        assert_eq!(activities[0].status, ActivityStatus::Pending);
    }

    #[tokio::test]
    async fn test_activities_filtered_by_class() {
        let store = SqliteStore::new(setup_test_db().await);

        let a = store.insert_class(class_req("Turma A"), "prof-1").await.unwrap();
        let b = store.insert_class(class_req("Turma B"), "prof-1").await.unwrap();

        let req = NewActivityRequest {
            title: "Prova".to_string(),
            description: None,
            due_date: None,
            status: None,
        };
        store.insert_activity(&a.id, req.clone(), "prof-1").await.unwrap();

        assert_eq!(store.activities_for_class(&a.id).await.unwrap().len(), 1);
        assert!(store.activities_for_class(&b.id).await.unwrap().is_empty());
        assert_eq!(store.list_activities().await.unwrap().len(), 1);
    }
}
