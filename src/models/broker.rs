// src/models/broker.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_phone;

// --- CORREDOR (intermediário de seguros) ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Broker {
    #[schema(example = 12)]
    pub number: i32,

    #[schema(example = "Juan Carlos")]
    pub first_names: Option<String>,

    #[schema(example = "Rodríguez")]
    pub last_names: String,

    #[schema(example = "4.123.456-7")]
    pub document: String,

    pub address: String,
    pub locality: String,
    pub phones: Option<String>,
    pub mobile: Option<String>,

    #[schema(example = "jrodriguez@corredores.com")]
    pub email: String,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrokerPayload {
    #[validate(range(min = 1, message = "must_be_positive"))]
    #[schema(example = 12)]
    pub number: i32,

    #[validate(length(max = 30, message = "too_long"))]
    pub first_names: Option<String>,

    #[validate(length(min = 1, max = 30, message = "invalid_length"))]
    pub last_names: String,

    #[validate(length(min = 1, max = 20, message = "invalid_length"))]
    pub document: String,

    #[validate(length(min = 1, max = 70, message = "invalid_length"))]
    pub address: String,

    #[validate(length(min = 1, max = 15, message = "invalid_length"))]
    pub locality: String,

    #[validate(length(max = 20, message = "too_long"), custom(function = "validate_phone"))]
    pub phones: Option<String>,

    #[validate(length(max = 20, message = "too_long"), custom(function = "validate_phone"))]
    pub mobile: Option<String>,

    #[validate(email(message = "invalid_email"), length(max = 40, message = "too_long"))]
    pub email: String,

    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrokerPayload {
    #[validate(length(max = 30, message = "too_long"))]
    pub first_names: Option<String>,

    #[validate(length(min = 1, max = 30, message = "invalid_length"))]
    pub last_names: Option<String>,

    #[validate(length(min = 1, max = 20, message = "invalid_length"))]
    pub document: Option<String>,

    #[validate(length(min = 1, max = 70, message = "invalid_length"))]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 15, message = "invalid_length"))]
    pub locality: Option<String>,

    #[validate(length(max = 20, message = "too_long"), custom(function = "validate_phone"))]
    pub phones: Option<String>,

    #[validate(length(max = 20, message = "too_long"), custom(function = "validate_phone"))]
    pub mobile: Option<String>,

    #[validate(email(message = "invalid_email"), length(max = 40, message = "too_long"))]
    pub email: Option<String>,

    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateBrokerPayload {
        CreateBrokerPayload {
            number: 7,
            first_names: Some("Juan".into()),
            last_names: "Rodríguez".into(),
            document: "41234567".into(),
            address: "Av. Italia 1234".into(),
            locality: "Montevideo".into(),
            phones: Some("2600 1234".into()),
            mobile: None,
            email: "juan@corredores.com".into(),
            notes: None,
        }
    }

    #[test]
    fn accepts_a_complete_broker() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn number_must_be_positive() {
        let payload = CreateBrokerPayload { number: 0, ..valid() };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("number"));
    }

    #[test]
    fn locality_length_is_limited() {
        let payload = CreateBrokerPayload { locality: "Ciudad de la Costa Norte".into(), ..valid() };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_with_bad_phone_is_rejected() {
        let payload = UpdateBrokerPayload { mobile: Some("09x-123".into()), ..Default::default() };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("mobile"));
    }
}
