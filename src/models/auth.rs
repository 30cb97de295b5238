// src/models/auth.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::validate_percentage;

// Mapeia o CREATE TYPE user_role do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema, Default)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,

    #[schema(example = "Ana Pérez")]
    pub name: String,

    #[schema(example = "ana@agencia.com")]
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub password_hash: String,

    pub role: UserRole,
    pub is_active: bool,

    #[schema(value_type = f64, example = 12.5)]
    pub commission_percentage: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

// Credenciais do login (application/x-www-form-urlencoded, estilo OAuth2)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginForm {
    /// O e-mail do usuário
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "ana@agencia.com")]
    pub username: String,

    #[validate(length(min = 1, message = "required"))]
    pub password: String,
}

// Resposta do login
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    #[schema(example = "bearer")]
    pub token_type: String,
    pub user: User,
}

impl TokenResponse {
    pub fn bearer(access_token: String, user: User) -> Self {
        Self { access_token, token_type: "bearer".to_string(), user }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirstRunStatus {
    pub first_run: bool,
}

// Dados para configurar o administrador inicial
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetupAdminPayload {
    #[validate(length(min = 1, max = 64, message = "invalid_name"))]
    #[schema(example = "Administrador")]
    pub name: String,

    #[validate(email(message = "invalid_email"), length(max = 64, message = "too_long"))]
    #[schema(example = "admin@agencia.com")]
    pub email: String,

    #[validate(length(min = 8, message = "password_too_short"))]
    pub password: String,

    #[serde(default)]
    #[validate(custom(function = "validate_percentage"))]
    #[schema(value_type = f64, example = 0.0)]
    pub commission_percentage: Decimal,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // Subject (ID do usuário)
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}
