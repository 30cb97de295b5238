// src/common/db_utils.rs

use crate::common::error::{AppError, Resource};

/// Traduz violações de constraint do Postgres (pelo nome da constraint) em
/// erros de domínio. Qualquer outro erro segue como `DatabaseError`.
pub(crate) fn map_constraint_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if let Some(constraint) = db_err.constraint() {
            if let Some(mapped) = error_for_constraint(constraint) {
                return mapped;
            }
        }
    }
    e.into()
}

/// Na exclusão, uma violação de chave estrangeira significa que o registro
/// ainda é referenciado por outro.
pub(crate) fn map_delete_error(e: sqlx::Error, resource: Resource) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            return AppError::RecordInUse(resource);
        }
    }
    e.into()
}

fn error_for_constraint(constraint: &str) -> Option<AppError> {
    let err = match constraint {
        "users_email_key" | "brokers_email_key" | "clients_email_key" => AppError::DuplicateRecord("email"),
        "brokers_document_key" | "clients_document_key" => AppError::DuplicateRecord("document"),
        "brokers_pkey" => AppError::DuplicateRecord("broker_number"),
        "clients_client_number_key" => AppError::DuplicateRecord("client_number"),
        "insurance_types_insurer_code_key" => AppError::DuplicateRecord("insurer_code"),
        "policy_movements_policy_endorsement_key" => AppError::DuplicateRecord("policy_endorsement"),

        "clients_broker_fkey" | "policy_movements_broker_fkey" => AppError::ReferenceNotFound(Resource::Broker),
        "policy_movements_client_fkey" => AppError::ReferenceNotFound(Resource::Client),
        "policy_movements_insurance_type_fkey" => AppError::ReferenceNotFound(Resource::InsuranceType),
        "clients_created_by_fkey" | "clients_modified_by_fkey" => AppError::ReferenceNotFound(Resource::User),

        "policy_movements_coverage_check" => AppError::InvalidCoveragePeriod,
        _ => return None,
    };
    Some(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_constraints_map_to_duplicate_fields() {
        assert!(matches!(
            error_for_constraint("users_email_key"),
            Some(AppError::DuplicateRecord("email"))
        ));
        assert!(matches!(
            error_for_constraint("brokers_document_key"),
            Some(AppError::DuplicateRecord("document"))
        ));
        assert!(matches!(
            error_for_constraint("policy_movements_policy_endorsement_key"),
            Some(AppError::DuplicateRecord("policy_endorsement"))
        ));
    }

    #[test]
    fn foreign_keys_map_to_missing_references() {
        assert!(matches!(
            error_for_constraint("policy_movements_client_fkey"),
            Some(AppError::ReferenceNotFound(Resource::Client))
        ));
        assert!(matches!(
            error_for_constraint("clients_broker_fkey"),
            Some(AppError::ReferenceNotFound(Resource::Broker))
        ));
    }

    #[test]
    fn coverage_check_maps_to_invalid_period() {
        assert!(matches!(
            error_for_constraint("policy_movements_coverage_check"),
            Some(AppError::InvalidCoveragePeriod)
        ));
    }

    #[test]
    fn unknown_constraint_is_not_mapped() {
        assert!(error_for_constraint("something_else").is_none());
    }

    #[test]
    fn non_database_errors_pass_through() {
        let err = map_constraint_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::DatabaseError(sqlx::Error::RowNotFound)));

        let err = map_delete_error(sqlx::Error::RowNotFound, Resource::Broker);
        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
