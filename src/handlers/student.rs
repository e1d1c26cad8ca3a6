//! Student CRUD handlers: list, show, create, edit, delete.
//!
//! Every operation runs the same JSON preflight first: the content type must
//! indicate JSON (406 otherwise) and a non-empty body must parse as JSON
//! (400 otherwise). Show/edit/delete then look the record up (404 on a
//! missing id, regardless of body validity); create/edit validate before
//! touching the repository.

use crate::error::AppError;
use crate::response;
use crate::service::StudentValidator;
use crate::state::AppState;
use crate::translate::Translator;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    response::IntoResponse,
};
use serde_json::Value;

const ENTITY_NAME: &str = "Student";

fn check_json_request(headers: &HeaderMap, body: &[u8], translator: &Translator) -> Result<(), AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !content_type.contains("json") {
        return Err(AppError::NotAcceptable(translator.trans("message.json_content", &[])));
    }
    if !body.is_empty() && serde_json::from_slice::<Value>(body).is_err() {
        return Err(AppError::BadRequest(translator.trans("message.json", &[])));
    }
    Ok(())
}

/// Body bytes as a JSON value. The preflight already guaranteed a non-empty
/// body parses; an empty body binds as null and fails validation.
fn parse_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

fn not_found(translator: &Translator) -> AppError {
    AppError::NotFound(translator.trans("message.not_found", &[("%name%", ENTITY_NAME)]))
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    check_json_request(&headers, &body, &state.translator)?;
    let students = state.repository.find_all_desc().await?;
    Ok(response::success_many(students))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    check_json_request(&headers, &body, &state.translator)?;
    let student = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(&state.translator))?;
    Ok(response::success_one(student))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    check_json_request(&headers, &body, &state.translator)?;
    let data = parse_body(&body);
    let draft = StudentValidator::validate(&data, &state.translator).map_err(AppError::Validation)?;
    let student = state.repository.insert(&draft).await?;
    tracing::info!(id = student.id, "student created");
    let message = state.translator.trans("message.created", &[("%name%", ENTITY_NAME)]);
    Ok(response::success_created(message, student))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    check_json_request(&headers, &body, &state.translator)?;
    let mut student = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(&state.translator))?;
    let data = parse_body(&body);
    let draft = StudentValidator::validate(&data, &state.translator).map_err(AppError::Validation)?;
    student.apply(draft);
    state.repository.update(&student).await?;
    tracing::info!(id = student.id, "student updated");
    let message = state.translator.trans("message.updated", &[("%name%", ENTITY_NAME)]);
    Ok(response::success_updated(message, student))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    check_json_request(&headers, &body, &state.translator)?;
    let student = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(&state.translator))?;
    state.repository.delete(&student).await?;
    tracing::info!(id = student.id, "student deleted");
    let message = state.translator.trans("message.deleted", &[("%name%", ENTITY_NAME)]);
    Ok(response::success_deleted(message))
}
