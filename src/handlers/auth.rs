// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        extract::{AppForm, AppJson},
    },
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::auth::{FirstRunStatus, LoginForm, SetupAdminPayload, TokenResponse, User},
};

// POST /api/v1/auth/token
#[utoipa::path(
    post,
    path = "/api/v1/auth/token",
    tag = "Auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login bem-sucedido", body = TokenResponse),
        (status = 401, description = "Credenciais inválidas"),
        (status = 403, description = "Usuário inativo")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    locale: Locale,
    AppForm(payload): AppForm<LoginForm>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let (token, user) = app_state
        .auth_service
        .login_user(&payload.username, &payload.password)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(TokenResponse::bearer(token, user)))
}

// GET /api/v1/auth/first-run
#[utoipa::path(
    get,
    path = "/api/v1/auth/first-run",
    tag = "Auth",
    responses(
        (status = 200, description = "Indica se ainda não existe nenhum usuário", body = FirstRunStatus)
    )
)]
pub async fn first_run(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let first_run = app_state
        .auth_service
        .is_first_run()
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(FirstRunStatus { first_run }))
}

// POST /api/v1/auth/setup-admin
#[utoipa::path(
    post,
    path = "/api/v1/auth/setup-admin",
    tag = "Auth",
    request_body = SetupAdminPayload,
    responses(
        (status = 201, description = "Administrador inicial criado", body = TokenResponse),
        (status = 400, description = "Dados inválidos ou administrador já configurado")
    )
)]
pub async fn setup_admin(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<SetupAdminPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let (token, admin) = app_state
        .auth_service
        .setup_admin(&payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(TokenResponse::bearer(token, admin))))
}

// GET /api/v1/users/me
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "Dados do usuário logado", body = User),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}
