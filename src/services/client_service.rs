// src/services/client_service.rs

use uuid::Uuid;

use crate::{
    common::{
        error::{AppError, Resource},
        pagination::ListParams,
        validation::normalize_email,
    },
    db::{ClientRepository, MovementRepository},
    models::{
        auth::User,
        client::{blank_to_none, Client, CreateClientPayload, UpdateClientPayload},
        movement::PolicyMovement,
    },
};

#[derive(Clone)]
pub struct ClientService {
    repo: ClientRepository,
    movement_repo: MovementRepository,
}

impl ClientService {
    pub fn new(repo: ClientRepository, movement_repo: MovementRepository) -> Self {
        Self { repo, movement_repo }
    }

    /// Cria o cliente com a auditoria apontando para quem está logado.
    pub async fn create_client(
        &self,
        actor: &User,
        payload: &CreateClientPayload,
    ) -> Result<Client, AppError> {
        let document = blank_to_none(payload.document.clone());
        let email = blank_to_none(payload.email.clone()).map(|e| normalize_email(&e));

        let client = self
            .repo
            .create(payload, document.as_deref(), email.as_deref(), actor.id)
            .await?;

        tracing::info!("Cliente nº {} criado por {}", client.client_number, actor.email);
        Ok(client)
    }

    pub async fn get_client(&self, id: Uuid) -> Result<Client, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ResourceNotFound(Resource::Client))
    }

    pub async fn get_client_by_number(&self, client_number: i64) -> Result<Client, AppError> {
        self.repo
            .find_by_number(client_number)
            .await?
            .ok_or(AppError::ResourceNotFound(Resource::Client))
    }

    pub async fn list_clients(&self, params: &ListParams) -> Result<Vec<Client>, AppError> {
        let pattern = params.search_pattern();
        self.repo.list(params.skip, params.limit, pattern.as_deref()).await
    }

    pub async fn update_client(
        &self,
        actor: &User,
        id: Uuid,
        payload: &UpdateClientPayload,
    ) -> Result<Client, AppError> {
        let document = blank_to_none(payload.document.clone());
        let email = blank_to_none(payload.email.clone()).map(|e| normalize_email(&e));

        self.repo
            .update(id, payload, document.as_deref(), email.as_deref(), actor.id)
            .await?
            .ok_or(AppError::ResourceNotFound(Resource::Client))
    }

    pub async fn delete_client(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::ResourceNotFound(Resource::Client));
        }
        Ok(())
    }

    pub async fn list_client_movements(&self, id: Uuid) -> Result<Vec<PolicyMovement>, AppError> {
        let client = self.get_client(id).await?;
        self.movement_repo.list_by_client(client.client_number).await
    }
}
