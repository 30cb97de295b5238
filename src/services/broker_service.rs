// src/services/broker_service.rs

use crate::{
    common::{
        error::{AppError, Resource},
        pagination::ListParams,
        validation::normalize_email,
    },
    db::BrokerRepository,
    models::broker::{Broker, CreateBrokerPayload, UpdateBrokerPayload},
};

#[derive(Clone)]
pub struct BrokerService {
    repo: BrokerRepository,
}

impl BrokerService {
    pub fn new(repo: BrokerRepository) -> Self {
        Self { repo }
    }

    pub async fn create_broker(&self, payload: &CreateBrokerPayload) -> Result<Broker, AppError> {
        let email = normalize_email(&payload.email);
        let broker = self.repo.create(payload, &email).await?;
        tracing::info!("Corredor {} cadastrado", broker.number);
        Ok(broker)
    }

    pub async fn get_broker(&self, number: i32) -> Result<Broker, AppError> {
        self.repo
            .find_by_number(number)
            .await?
            .ok_or(AppError::ResourceNotFound(Resource::Broker))
    }

    pub async fn list_brokers(&self, params: &ListParams) -> Result<Vec<Broker>, AppError> {
        let pattern = params.search_pattern();
        self.repo.list(params.skip, params.limit, pattern.as_deref()).await
    }

    pub async fn update_broker(
        &self,
        number: i32,
        payload: &UpdateBrokerPayload,
    ) -> Result<Broker, AppError> {
        let email = payload.email.as_deref().map(normalize_email);
        self.repo
            .update(number, payload, email.as_deref())
            .await?
            .ok_or(AppError::ResourceNotFound(Resource::Broker))
    }

    pub async fn delete_broker(&self, number: i32) -> Result<(), AppError> {
        if !self.repo.delete(number).await? {
            return Err(AppError::ResourceNotFound(Resource::Broker));
        }
        Ok(())
    }
}
