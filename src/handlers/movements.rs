// src/handlers/movements.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        extract::AppJson,
        pagination::ListParams,
    },
    config::AppState,
    middleware::i18n::Locale,
    models::movement::{CreateMovementPayload, PolicyMovement, UpdateMovementPayload},
};

// POST /api/v1/movements
#[utoipa::path(
    post,
    path = "/api/v1/movements",
    tag = "Movements",
    request_body = CreateMovementPayload,
    responses(
        (status = 201, description = "Movimento de vigência registrado", body = PolicyMovement),
        (status = 400, description = "Dados inválidos, referência inexistente ou apólice/endosso duplicado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_movement(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<CreateMovementPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let movement = app_state
        .movement_service
        .create_movement(&payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(movement)))
}

// GET /api/v1/movements
#[utoipa::path(
    get,
    path = "/api/v1/movements",
    tag = "Movements",
    params(ListParams),
    responses(
        (status = 200, description = "Lista de movimentos, mais recentes primeiro", body = Vec<PolicyMovement>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_movements(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let movements = app_state
        .movement_service
        .list_movements(&params)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(movements))
}

// GET /api/v1/movements/{id}
#[utoipa::path(
    get,
    path = "/api/v1/movements/{id}",
    tag = "Movements",
    params(("id" = i32, Path, description = "ID do movimento")),
    responses(
        (status = 200, description = "Movimento encontrado", body = PolicyMovement),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_movement(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let movement = app_state
        .movement_service
        .get_movement(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(movement))
}

// PUT /api/v1/movements/{id}
#[utoipa::path(
    put,
    path = "/api/v1/movements/{id}",
    tag = "Movements",
    params(("id" = i32, Path, description = "ID do movimento")),
    request_body = UpdateMovementPayload,
    responses(
        (status = 200, description = "Movimento atualizado", body = PolicyMovement),
        (status = 400, description = "Dados inválidos ou vigência invertida"),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_movement(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateMovementPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let movement = app_state
        .movement_service
        .update_movement(id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(movement))
}

// DELETE /api/v1/movements/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/movements/{id}",
    tag = "Movements",
    params(("id" = i32, Path, description = "ID do movimento")),
    responses(
        (status = 204, description = "Movimento excluído"),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_movement(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .movement_service
        .delete_movement(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
