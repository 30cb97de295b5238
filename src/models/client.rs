// src/models/client.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::validate_phone;

// --- CLIENTE (o segurado) ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,

    // Numeração sequencial gerada pelo banco (começa em 1000)
    #[schema(example = 1000)]
    pub client_number: i64,

    #[schema(example = "María José")]
    pub first_names: Option<String>,
    #[schema(example = "Fernández")]
    pub last_names: String,

    #[schema(example = "CI")]
    pub document_type: Option<String>,
    #[schema(example = "3.456.789-0")]
    pub document: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "1985-03-14")]
    pub birth_date: Option<NaiveDate>,

    pub address: String,
    pub locality: Option<String>,
    pub phones: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,

    pub broker_number: Option<i32>,
    pub notes: Option<String>,

    // Auditoria
    pub created_by: Uuid,
    pub modified_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientPayload {
    #[validate(length(max = 100, message = "too_long"))]
    pub first_names: Option<String>,

    #[validate(length(min = 1, max = 100, message = "invalid_length"))]
    pub last_names: String,

    #[validate(length(max = 50, message = "too_long"))]
    pub document_type: Option<String>,

    #[validate(length(max = 50, message = "too_long"))]
    pub document: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "1985-03-14")]
    pub birth_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 200, message = "invalid_length"))]
    pub address: String,

    #[validate(length(max = 50, message = "too_long"))]
    pub locality: Option<String>,

    #[validate(length(max = 100, message = "too_long"), custom(function = "validate_phone"))]
    pub phones: Option<String>,

    #[validate(length(max = 100, message = "too_long"), custom(function = "validate_phone"))]
    pub mobile: Option<String>,

    #[validate(email(message = "invalid_email"), length(max = 100, message = "too_long"))]
    pub email: Option<String>,

    pub broker_number: Option<i32>,

    #[validate(length(max = 500, message = "too_long"))]
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientPayload {
    #[validate(length(max = 100, message = "too_long"))]
    pub first_names: Option<String>,

    #[validate(length(min = 1, max = 100, message = "invalid_length"))]
    pub last_names: Option<String>,

    #[validate(length(max = 50, message = "too_long"))]
    pub document_type: Option<String>,

    #[validate(length(max = 50, message = "too_long"))]
    pub document: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub birth_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 200, message = "invalid_length"))]
    pub address: Option<String>,

    #[validate(length(max = 50, message = "too_long"))]
    pub locality: Option<String>,

    #[validate(length(max = 100, message = "too_long"), custom(function = "validate_phone"))]
    pub phones: Option<String>,

    #[validate(length(max = 100, message = "too_long"), custom(function = "validate_phone"))]
    pub mobile: Option<String>,

    #[validate(email(message = "invalid_email"), length(max = 100, message = "too_long"))]
    pub email: Option<String>,

    pub broker_number: Option<i32>,

    #[validate(length(max = 500, message = "too_long"))]
    pub notes: Option<String>,
}

/// Campos de texto opcionais vazios viram NULL, para não esbarrar nas
/// constraints de unicidade (documento/e-mail) com strings vazias.
pub(crate) fn blank_to_none(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
