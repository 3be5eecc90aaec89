use axum::Json;
use axum::extract::Path;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tracing::error;

use crate::auth::UserId;
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/classes", get(list_classes).post(create_class))
        .route(
            "/classes/{id}/activities",
            get(list_activities).post(create_activity),
        )
        .route("/stats", get(stats))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> StatusCode {
    match state.registry.list_classes().await {
        Ok(_) => StatusCode::OK,
        Err(err) => {
            error!("health check failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn list_classes(State(state): State<AppState>) -> Result<Json<Vec<ClassRecord>>, AppError> {
    let classes = state.registry.list_classes().await?;
    Ok(Json(classes))
}

async fn create_class(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(req): Json<NewClassRequest>,
) -> Result<Json<ClassRecord>, AppError> {
    let class = state.registry.create_class(&user_id, req).await?;
    Ok(Json(class))
}

async fn list_activities(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<Json<Vec<ActivityRecord>>, AppError> {
    let activities = state.registry.activities_for_class(&class_id).await?;
    Ok(Json(activities))
}

async fn create_activity(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
    UserId(user_id): UserId,
    Json(req): Json<NewActivityRequest>,
) -> Result<Json<ActivityRecord>, AppError> {
    let activity = state
        .registry
        .create_activity(&user_id, &class_id, req)
        .await?;
    Ok(Json(activity))
}

async fn stats(State(state): State<AppState>) -> Result<Json<AggregateStats>, AppError> {
    let stats = state.registry.aggregate_stats().await?;
    Ok(Json(stats))
}
