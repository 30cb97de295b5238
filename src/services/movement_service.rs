// src/services/movement_service.rs

use crate::{
    common::{
        error::{AppError, Resource},
        pagination::ListParams,
    },
    db::MovementRepository,
    models::movement::{CreateMovementPayload, PolicyMovement, UpdateMovementPayload},
};

#[derive(Clone)]
pub struct MovementService {
    repo: MovementRepository,
}

impl MovementService {
    pub fn new(repo: MovementRepository) -> Self {
        Self { repo }
    }

    // Cliente, corredor e tipo de seguro inexistentes são barrados pelas FKs
    pub async fn create_movement(&self, payload: &CreateMovementPayload) -> Result<PolicyMovement, AppError> {
        payload
            .validate_coverage()
            .map_err(|_| AppError::InvalidCoveragePeriod)?;

        let movement = self.repo.create(payload).await?;
        tracing::info!(
            "Movimento {} registrado para o cliente nº {}",
            movement.id,
            movement.client_number
        );
        Ok(movement)
    }

    pub async fn get_movement(&self, id: i32) -> Result<PolicyMovement, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ResourceNotFound(Resource::Movement))
    }

    pub async fn list_movements(&self, params: &ListParams) -> Result<Vec<PolicyMovement>, AppError> {
        let pattern = params.search_pattern();
        self.repo.list(params.skip, params.limit, pattern.as_deref()).await
    }

    pub async fn update_movement(
        &self,
        id: i32,
        payload: &UpdateMovementPayload,
    ) -> Result<PolicyMovement, AppError> {
        payload
            .validate_coverage()
            .map_err(|_| AppError::InvalidCoveragePeriod)?;

        self.repo
            .update(id, payload)
            .await?
            .ok_or(AppError::ResourceNotFound(Resource::Movement))
    }

    pub async fn delete_movement(&self, id: i32) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::ResourceNotFound(Resource::Movement));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::tests::lazy_pool;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn inverted_coverage_is_rejected_before_touching_the_database() {
        let service = MovementService::new(MovementRepository::new(lazy_pool()));
        let payload = CreateMovementPayload {
            movement_date: date(2024, 3, 1),
            client_number: 1000,
            broker_number: 1,
            insurance_type_id: 1,
            folder: "A-1".into(),
            policy_number: None,
            endorsement: None,
            coverage_from: date(2024, 12, 31),
            coverage_to: date(2024, 1, 1),
            currency: "ARS".into(),
            premium: Some(Decimal::new(150000, 2)),
            installments: Some(1),
            notes: None,
        };

        let err = service.create_movement(&payload).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCoveragePeriod));
    }

    #[tokio::test]
    async fn partial_update_with_inverted_dates_is_rejected() {
        let service = MovementService::new(MovementRepository::new(lazy_pool()));
        let payload = UpdateMovementPayload {
            coverage_from: Some(date(2025, 6, 1)),
            coverage_to: Some(date(2025, 5, 1)),
            ..Default::default()
        };

        let err = service.update_movement(1, &payload).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCoveragePeriod));
    }
}
