use crate::{
    db,
    error::AppError,
    models::Event,
    state::AppState,
    validation::{validate_changes, validate_new_event},
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};

#[derive(Debug, Default, Deserialize)]
pub struct CreateEventPayload {
    name: Option<String>,
    date: Option<String>,
    location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEventPayload {
    name: Option<String>,
    date: Option<String>,
    location: Option<String>,
}

/// An empty body reads as a payload with nothing set.
fn parse_payload<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|_| AppError::BadRequest("Request body must be a JSON object".to_string()))
}

// Only integer ids can name an event.
fn event_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id).map_err(|_| AppError::event_not_found())
}

pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "Event Management API is running! Use /events to manage events."
    }))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

pub async fn get_events(State(app_state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    db::list_events(&app_state.pool).await.map(Json)
}

pub async fn create_event_handler(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let payload: CreateEventPayload = parse_payload(&body)?;
    let new_event = validate_new_event(payload.name, payload.date, payload.location)?;

    let event = db::create_event(&app_state.pool, &new_event).await?;
    tracing::info!(id = event.id, "event created");
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn get_event_handler(
    State(app_state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Event>, AppError> {
    let id = event_id(path)?;
    db::find_event(&app_state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(AppError::event_not_found)
}

pub async fn update_event_handler(
    State(app_state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Json<Event>, AppError> {
    let id = event_id(path)?;
    db::find_event(&app_state.pool, id)
        .await?
        .ok_or_else(AppError::event_not_found)?;

    let payload: UpdateEventPayload = parse_payload(&body)?;
    let changes = validate_changes(payload.name, payload.date, payload.location)?;

    let event = db::update_event(&app_state.pool, id, &changes)
        .await?
        .ok_or_else(AppError::event_not_found)?;
    if !changes.is_empty() {
        tracing::info!(id, "event updated");
    }
    Ok(Json(event))
}

pub async fn delete_event_handler(
    State(app_state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let id = event_id(path)?;
    if !db::delete_event(&app_state.pool, id).await? {
        return Err(AppError::event_not_found());
    }
    tracing::info!(id, "event deleted");
    Ok(Json(json!({ "message": "Event deleted" })))
}
