// src/handlers/brokers.rs

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
    models::broker::{Broker, CreateBrokerPayload, UpdateBrokerPayload},
};

// POST /api/v1/brokers
#[utoipa::path(
    post,
    path = "/api/v1/brokers",
    tag = "Brokers",
    request_body = CreateBrokerPayload,
    responses(
        (status = 201, description = "Corredor cadastrado", body = Broker),
        (status = 400, description = "Dados inválidos ou número/documento/e-mail duplicado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_broker(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<CreateBrokerPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let broker = app_state
        .broker_service
        .create_broker(&payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(broker)))
}

// GET /api/v1/brokers
#[utoipa::path(
    get,
    path = "/api/v1/brokers",
    tag = "Brokers",
    params(ListParams),
    responses(
        (status = 200, description = "Lista de corredores", body = Vec<Broker>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_brokers(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let brokers = app_state
        .broker_service
        .list_brokers(&params)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(brokers))
}

// GET /api/v1/brokers/{number}
#[utoipa::path(
    get,
    path = "/api/v1/brokers/{number}",
    tag = "Brokers",
    params(("number" = i32, Path, description = "Número do corredor")),
    responses(
        (status = 200, description = "Corredor encontrado", body = Broker),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_broker(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(number): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let broker = app_state
        .broker_service
        .get_broker(number)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(broker))
}

// PUT /api/v1/brokers/{number}
#[utoipa::path(
    put,
    path = "/api/v1/brokers/{number}",
    tag = "Brokers",
    params(("number" = i32, Path, description = "Número do corredor")),
    request_body = UpdateBrokerPayload,
    responses(
        (status = 200, description = "Corredor atualizado", body = Broker),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_broker(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(number): Path<i32>,
    AppJson(payload): AppJson<UpdateBrokerPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let broker = app_state
        .broker_service
        .update_broker(number, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(broker))
}

// DELETE /api/v1/brokers/{number}
#[utoipa::path(
    delete,
    path = "/api/v1/brokers/{number}",
    tag = "Brokers",
    params(("number" = i32, Path, description = "Número do corredor")),
    responses(
        (status = 204, description = "Corredor excluído"),
        (status = 400, description = "Corredor com clientes ou movimentos vinculados"),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_broker(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(number): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .broker_service
        .delete_broker(number)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
