// src/handlers/insurance_types.rs

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
    middleware::{
        i18n::Locale,
        rbac::{RequireRole, RoleAdmin},
    },
    models::insurance_type::{CreateInsuranceTypePayload, InsuranceType, UpdateInsuranceTypePayload},
};

// POST /api/v1/insurance-types
#[utoipa::path(
    post,
    path = "/api/v1/insurance-types",
    tag = "Insurance Types",
    request_body = CreateInsuranceTypePayload,
    responses(
        (status = 201, description = "Tipo de seguro criado", body = InsuranceType),
        (status = 400, description = "Dados inválidos ou seguradora+código duplicado"),
        (status = 403, description = "Apenas administradores")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_insurance_type(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<RoleAdmin>,
    AppJson(payload): AppJson<CreateInsuranceTypePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let insurance_type = app_state
        .insurance_type_service
        .create_insurance_type(&payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(insurance_type)))
}

// GET /api/v1/insurance-types
#[utoipa::path(
    get,
    path = "/api/v1/insurance-types",
    tag = "Insurance Types",
    params(ListParams),
    responses(
        (status = 200, description = "Lista de tipos de seguro", body = Vec<InsuranceType>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_insurance_types(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let types = app_state
        .insurance_type_service
        .list_insurance_types(&params)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(types))
}

// GET /api/v1/insurance-types/{id}
#[utoipa::path(
    get,
    path = "/api/v1/insurance-types/{id}",
    tag = "Insurance Types",
    params(("id" = i32, Path, description = "ID do tipo de seguro")),
    responses(
        (status = 200, description = "Tipo de seguro encontrado", body = InsuranceType),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_insurance_type(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let insurance_type = app_state
        .insurance_type_service
        .get_insurance_type(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(insurance_type))
}

// PUT /api/v1/insurance-types/{id}
#[utoipa::path(
    put,
    path = "/api/v1/insurance-types/{id}",
    tag = "Insurance Types",
    params(("id" = i32, Path, description = "ID do tipo de seguro")),
    request_body = UpdateInsuranceTypePayload,
    responses(
        (status = 200, description = "Tipo de seguro atualizado", body = InsuranceType),
        (status = 400, description = "Dados inválidos"),
        (status = 403, description = "Apenas administradores"),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_insurance_type(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<RoleAdmin>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateInsuranceTypePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let insurance_type = app_state
        .insurance_type_service
        .update_insurance_type(id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(insurance_type))
}

// DELETE /api/v1/insurance-types/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/insurance-types/{id}",
    tag = "Insurance Types",
    params(("id" = i32, Path, description = "ID do tipo de seguro")),
    responses(
        (status = 204, description = "Tipo de seguro excluído"),
        (status = 400, description = "Tipo de seguro em uso por movimentos"),
        (status = 403, description = "Apenas administradores"),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_insurance_type(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<RoleAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .insurance_type_service
        .delete_insurance_type(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
