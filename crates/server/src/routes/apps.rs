//! CRUD handlers for app records.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use db::models::app::{App, CreateApp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::validation::{DESCRIPTION_RULES, NAME_RULES};

/// Request body for create and update. Both fields are optional at the wire
/// level so that a missing `name` surfaces as a validation message instead
/// of a deserialization rejection; create requires it during validation.
#[derive(Debug, Deserialize)]
pub struct AppPayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteAppResponse {
    pub message: String,
    pub deleted: bool,
    pub id: Uuid,
}

fn parse_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::BadRequest("invalid app id".to_string()))
}

/// Unwrap a JSON body, turning extractor rejections (malformed JSON, wrong
/// content type) into the API's JSON error shape instead of axum's
/// plain-text response.
fn parse_body(payload: Result<Json<AppPayload>, JsonRejection>) -> ApiResult<AppPayload> {
    let Json(payload) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(payload)
}

/// GET /api/apps
pub async fn list_apps(State(state): State<AppState>) -> ApiResult<Json<Vec<App>>> {
    let apps = App::find_all(state.pool()).await?;
    Ok(Json(apps))
}

/// GET /api/apps/{id}
pub async fn get_app(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<App>> {
    let id = parse_id(&id)?;
    let app = App::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound("app not found".to_string()))?;
    Ok(Json(app))
}

/// POST /api/apps
pub async fn create_app(
    State(state): State<AppState>,
    payload: Result<Json<AppPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<App>)> {
    let payload = parse_body(payload)?;
    let mut details = Vec::new();

    let name = NAME_RULES
        .check_required("name", payload.name.as_deref())
        .map_err(|msg| details.push(msg))
        .ok();
    let description = DESCRIPTION_RULES
        .check_optional("description", payload.description.as_deref())
        .map_err(|msg| details.push(msg))
        .ok()
        .flatten();

    let Some(name) = name else {
        return Err(ApiError::Validation(details));
    };
    if !details.is_empty() {
        return Err(ApiError::Validation(details));
    }

    // Advisory fast path; the unique constraint on the insert below is the
    // authoritative duplicate check.
    if App::name_exists(state.pool(), &name, None).await? {
        return Err(ApiError::Conflict("app name already exists".to_string()));
    }

    let data = CreateApp {
        name,
        description: Some(description.unwrap_or_default()),
    };
    let app = App::create(state.pool(), &data, Uuid::new_v4()).await?;

    tracing::info!(id = %app.id, name = %app.name, "app created");
    Ok((StatusCode::CREATED, Json(app)))
}

/// PUT /api/apps/{id}
pub async fn update_app(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AppPayload>, JsonRejection>,
) -> ApiResult<Json<App>> {
    let id = parse_id(&id)?;
    let payload = parse_body(payload)?;

    let mut details = Vec::new();
    let name = NAME_RULES
        .check_optional("name", payload.name.as_deref())
        .map_err(|msg| details.push(msg))
        .ok()
        .flatten();
    let description = DESCRIPTION_RULES
        .check_optional("description", payload.description.as_deref())
        .map_err(|msg| details.push(msg))
        .ok()
        .flatten();
    if !details.is_empty() {
        return Err(ApiError::Validation(details));
    }

    let existing = App::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound("app not found".to_string()))?;

    // A record may keep its own name; only a collision with a different
    // record is a conflict.
    if let Some(new_name) = &name {
        if *new_name != existing.name && App::name_exists(state.pool(), new_name, Some(id)).await? {
            return Err(ApiError::Conflict("app name already exists".to_string()));
        }
    }

    // Unset fields fall back to the record's current values.
    let name = name.unwrap_or(existing.name);
    let description = description.unwrap_or(existing.description);

    let app = App::update(state.pool(), id, &name, &description).await?;

    tracing::info!(id = %app.id, name = %app.name, "app updated");
    Ok(Json(app))
}

/// DELETE /api/apps/{id}
pub async fn delete_app(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteAppResponse>> {
    let id = parse_id(&id)?;

    App::delete(state.pool(), id).await?;

    tracing::info!(id = %id, "app deleted");
    Ok(Json(DeleteAppResponse {
        message: "app deleted successfully".to_string(),
        deleted: true,
        id,
    }))
}
