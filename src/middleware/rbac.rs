// src/middleware/rbac.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::marker::PhantomData;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::auth::{User, UserRole},
};

/// O que um papel precisa saber para liberar o acesso
pub trait RoleDef: Send + Sync + 'static {
    fn allows(user: &User) -> bool;
}

/// Guardião: só deixa o handler rodar se o usuário tiver o papel `T`.
pub struct RequireRole<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequireRole<T>
where
    T: RoleDef,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser(user) = AuthenticatedUser::from_request_parts(parts, state).await?;

        if !T::allows(&user) {
            let app_state = AppState::from_ref(state);
            let locale = Locale::from_request_parts(parts, state).await.unwrap_or_default();

            tracing::warn!("Acesso negado: {} não tem o papel exigido", user.email);
            return Err(AppError::InsufficientRole.to_api_error(&locale, &app_state.i18n_store));
        }

        Ok(RequireRole(PhantomData))
    }
}

// ---
// PAPÉIS
// ---

pub struct RoleAdmin;
impl RoleDef for RoleAdmin {
    fn allows(user: &User) -> bool {
        user.role == UserRole::Admin
    }
}
