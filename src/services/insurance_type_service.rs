// src/services/insurance_type_service.rs

use crate::{
    common::{
        error::{AppError, Resource},
        pagination::ListParams,
    },
    db::InsuranceTypeRepository,
    models::insurance_type::{CreateInsuranceTypePayload, InsuranceType, UpdateInsuranceTypePayload},
};

#[derive(Clone)]
pub struct InsuranceTypeService {
    repo: InsuranceTypeRepository,
}

impl InsuranceTypeService {
    pub fn new(repo: InsuranceTypeRepository) -> Self {
        Self { repo }
    }

    pub async fn create_insurance_type(
        &self,
        payload: &CreateInsuranceTypePayload,
    ) -> Result<InsuranceType, AppError> {
        self.repo.create(payload).await
    }

    pub async fn get_insurance_type(&self, id: i32) -> Result<InsuranceType, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ResourceNotFound(Resource::InsuranceType))
    }

    pub async fn list_insurance_types(&self, params: &ListParams) -> Result<Vec<InsuranceType>, AppError> {
        let pattern = params.search_pattern();
        self.repo.list(params.skip, params.limit, pattern.as_deref()).await
    }

    pub async fn update_insurance_type(
        &self,
        id: i32,
        payload: &UpdateInsuranceTypePayload,
    ) -> Result<InsuranceType, AppError> {
        self.repo
            .update(id, payload)
            .await?
            .ok_or(AppError::ResourceNotFound(Resource::InsuranceType))
    }

    pub async fn delete_insurance_type(&self, id: i32) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::ResourceNotFound(Resource::InsuranceType));
        }
        Ok(())
    }
}
