// src/models/movement.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::common::validation::validate_not_negative;

// --- MOVIMENTO DE VIGÊNCIA (emissão/renovação de apólice) ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyMovement {
    pub id: i32,

    #[schema(value_type = String, format = Date, example = "2025-02-01")]
    pub movement_date: NaiveDate,

    #[schema(example = 1000)]
    pub client_number: i64,

    // Vem do JOIN com clients (nomes + sobrenomes)
    #[schema(example = "María José Fernández")]
    pub client_name: Option<String>,

    pub broker_number: i32,
    pub insurance_type_id: i32,

    #[schema(example = "2025/014")]
    pub folder: String,

    #[schema(example = "AUT-558812")]
    pub policy_number: Option<String>,
    pub endorsement: Option<String>,

    #[schema(value_type = String, format = Date, example = "2025-02-01")]
    pub coverage_from: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2026-02-01")]
    pub coverage_to: NaiveDate,

    #[schema(example = "UYU")]
    pub currency: String,

    #[schema(value_type = Option<f64>, example = 18500.0)]
    pub premium: Option<Decimal>,

    #[schema(example = 10)]
    pub installments: Option<i32>,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovementPayload {
    #[schema(value_type = String, format = Date, example = "2025-02-01")]
    pub movement_date: NaiveDate,

    #[validate(range(min = 1, message = "must_be_positive"))]
    pub client_number: i64,

    #[validate(range(min = 1, message = "must_be_positive"))]
    pub broker_number: i32,

    #[validate(range(min = 1, message = "must_be_positive"))]
    pub insurance_type_id: i32,

    #[validate(length(min = 1, max = 100, message = "invalid_length"))]
    pub folder: String,

    #[validate(length(max = 100, message = "too_long"))]
    pub policy_number: Option<String>,

    #[validate(length(max = 100, message = "too_long"))]
    pub endorsement: Option<String>,

    #[schema(value_type = String, format = Date)]
    pub coverage_from: NaiveDate,

    #[schema(value_type = String, format = Date)]
    pub coverage_to: NaiveDate,

    #[validate(length(min = 1, max = 10, message = "invalid_length"))]
    pub currency: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(value_type = Option<f64>)]
    pub premium: Option<Decimal>,

    #[validate(range(min = 1, message = "must_be_positive"))]
    pub installments: Option<i32>,

    #[validate(length(max = 500, message = "too_long"))]
    pub notes: Option<String>,
}

impl CreateMovementPayload {
    /// Regra: a vigência não pode terminar antes de começar.
    pub fn validate_coverage(&self) -> Result<(), ValidationError> {
        if self.coverage_to < self.coverage_from {
            let mut err = ValidationError::new("coverage_period");
            err.message = Some("coverage_to_before_coverage_from".into());
            return Err(err);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovementPayload {
    #[schema(value_type = Option<String>, format = Date)]
    pub movement_date: Option<NaiveDate>,

    #[validate(range(min = 1, message = "must_be_positive"))]
    pub client_number: Option<i64>,

    #[validate(range(min = 1, message = "must_be_positive"))]
    pub broker_number: Option<i32>,

    #[validate(range(min = 1, message = "must_be_positive"))]
    pub insurance_type_id: Option<i32>,

    #[validate(length(min = 1, max = 100, message = "invalid_length"))]
    pub folder: Option<String>,

    #[validate(length(max = 100, message = "too_long"))]
    pub policy_number: Option<String>,

    #[validate(length(max = 100, message = "too_long"))]
    pub endorsement: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub coverage_from: Option<NaiveDate>,

    #[schema(value_type = Option<String>, format = Date)]
    pub coverage_to: Option<NaiveDate>,

    #[validate(length(min = 1, max = 10, message = "invalid_length"))]
    pub currency: Option<String>,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(value_type = Option<f64>)]
    pub premium: Option<Decimal>,

    #[validate(range(min = 1, message = "must_be_positive"))]
    pub installments: Option<i32>,

    #[validate(length(max = 500, message = "too_long"))]
    pub notes: Option<String>,
}

impl UpdateMovementPayload {
    // Só dá para checar aqui quando as duas datas vêm juntas; o resto fica
    // com a CHECK constraint do banco.
    pub fn validate_coverage(&self) -> Result<(), ValidationError> {
        if let (Some(from), Some(to)) = (self.coverage_from, self.coverage_to) {
            if to < from {
                let mut err = ValidationError::new("coverage_period");
                err.message = Some("coverage_to_before_coverage_from".into());
                return Err(err);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_json(from: &str, to: &str) -> String {
        format!(
            r#"{{
                "movementDate": "2025-02-01",
                "clientNumber": 1000,
                "brokerNumber": 12,
                "insuranceTypeId": 3,
                "folder": "2025/014",
                "policyNumber": "AUT-558812",
                "coverageFrom": "{}",
                "coverageTo": "{}",
                "currency": "UYU",
                "premium": 18500.50,
                "installments": 10
            }}"#,
            from, to
        )
    }

    #[test]
    fn accepts_a_valid_movement() {
        let payload: CreateMovementPayload =
            serde_json::from_str(&payload_json("2025-02-01", "2026-02-01")).unwrap();
        assert!(payload.validate().is_ok());
        assert!(payload.validate_coverage().is_ok());
        assert_eq!(payload.premium, Some(Decimal::new(1850050, 2)));
    }

    #[test]
    fn rejects_inverted_coverage() {
        let payload: CreateMovementPayload =
            serde_json::from_str(&payload_json("2026-02-01", "2025-02-01")).unwrap();
        let err = payload.validate_coverage().unwrap_err();
        assert_eq!(err.code, "coverage_period");
    }

    #[test]
    fn same_day_coverage_is_allowed() {
        let payload: CreateMovementPayload =
            serde_json::from_str(&payload_json("2025-02-01", "2025-02-01")).unwrap();
        assert!(payload.validate_coverage().is_ok());
    }

    #[test]
    fn zero_installments_is_rejected() {
        let mut payload: CreateMovementPayload =
            serde_json::from_str(&payload_json("2025-02-01", "2026-02-01")).unwrap();
        payload.installments = Some(0);
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("installments"));
    }

    #[test]
    fn partial_update_only_checks_dates_sent_together() {
        let only_end = UpdateMovementPayload {
            coverage_to: NaiveDate::from_ymd_opt(2020, 1, 1),
            ..Default::default()
        };
        assert!(only_end.validate_coverage().is_ok());

        let inverted = UpdateMovementPayload {
            coverage_from: NaiveDate::from_ymd_opt(2025, 6, 1),
            coverage_to: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..Default::default()
        };
        assert!(inverted.validate_coverage().is_err());
    }
}
