// src/models/user.rs

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_percentage;
use crate::models::auth::UserRole;

fn default_true() -> bool {
    true
}

// Dados para um administrador criar uma conta
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[validate(length(min = 1, max = 64, message = "invalid_name"))]
    #[schema(example = "Carlos Gómez")]
    pub name: String,

    #[validate(email(message = "invalid_email"), length(max = 64, message = "too_long"))]
    #[schema(example = "carlos@agencia.com")]
    pub email: String,

    #[validate(length(min = 8, message = "password_too_short"))]
    pub password: String,

    #[serde(default)]
    pub role: UserRole,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    #[validate(custom(function = "validate_percentage"))]
    #[schema(value_type = f64, example = 10.0)]
    pub commission_percentage: Decimal,
}

// Atualização parcial: só os campos enviados mudam
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    #[validate(length(min = 1, max = 64, message = "invalid_name"))]
    pub name: Option<String>,

    #[validate(email(message = "invalid_email"), length(max = 64, message = "too_long"))]
    pub email: Option<String>,

    #[validate(length(min = 8, message = "password_too_short"))]
    pub password: Option<String>,

    pub role: Option<UserRole>,
    pub is_active: Option<bool>,

    #[validate(custom(function = "validate_percentage"))]
    #[schema(value_type = Option<f64>)]
    pub commission_percentage: Option<Decimal>,
}

impl UpdateUserPayload {
    /// Campos que só um administrador pode alterar
    pub fn touches_admin_fields(&self) -> bool {
        self.role.is_some() || self.is_active.is_some() || self.commission_percentage.is_some()
    }
}
