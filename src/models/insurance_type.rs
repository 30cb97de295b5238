// src/models/insurance_type.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Tabela de apoio: seguradora + código do ramo
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceType {
    #[schema(example = 3)]
    pub id: i32,

    #[schema(example = "Sura")]
    pub insurer: String,

    #[schema(example = "AUT")]
    pub code: String,

    #[schema(example = "Automóviles")]
    pub description: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInsuranceTypePayload {
    #[validate(length(min = 1, max = 15, message = "invalid_length"))]
    pub insurer: String,

    #[validate(length(min = 1, max = 5, message = "invalid_length"))]
    pub code: String,

    #[validate(length(min = 1, max = 30, message = "invalid_length"))]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInsuranceTypePayload {
    #[validate(length(min = 1, max = 15, message = "invalid_length"))]
    pub insurer: Option<String>,

    #[validate(length(min = 1, max = 5, message = "invalid_length"))]
    pub code: Option<String>,

    #[validate(length(min = 1, max = 30, message = "invalid_length"))]
    pub description: Option<String>,
}
