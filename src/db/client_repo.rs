// src/db/client_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{
        db_utils::{map_constraint_error, map_delete_error},
        error::{AppError, Resource},
    },
    models::client::{Client, CreateClientPayload, UpdateClientPayload},
};

#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Cria o cliente; o número sai da sequence `client_number_seq`.
    pub async fn create(
        &self,
        input: &CreateClientPayload,
        document: Option<&str>,
        email: Option<&str>,
        user_id: Uuid,
    ) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (
                first_names, last_names, document_type, document, birth_date,
                address, locality, phones, mobile, email, broker_number, notes,
                created_by, modified_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
            RETURNING *
            "#,
        )
        .bind(&input.first_names)
        .bind(&input.last_names)
        .bind(&input.document_type)
        .bind(document)
        .bind(input.birth_date)
        .bind(&input.address)
        .bind(&input.locality)
        .bind(&input.phones)
        .bind(&input.mobile)
        .bind(email)
        .bind(input.broker_number)
        .bind(&input.notes)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        Ok(client)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(client)
    }

    pub async fn find_by_number(&self, client_number: i64) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE client_number = $1")
            .bind(client_number)
            .fetch_optional(&self.pool)
            .await?;
        Ok(client)
    }

    /// Busca por nomes, sobrenomes, documento ou e-mail
    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        search: Option<&str>,
    ) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT * FROM clients
            WHERE $1::text IS NULL
                OR first_names ILIKE $1
                OR last_names ILIKE $1
                OR document ILIKE $1
                OR email ILIKE $1
            ORDER BY client_number ASC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(search)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(clients)
    }

    /// Atualização parcial; sempre carimba quem modificou e quando.
    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateClientPayload,
        document: Option<&str>,
        email: Option<&str>,
        user_id: Uuid,
    ) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients SET
                first_names = COALESCE($2, first_names),
                last_names = COALESCE($3, last_names),
                document_type = COALESCE($4, document_type),
                document = COALESCE($5, document),
                birth_date = COALESCE($6, birth_date),
                address = COALESCE($7, address),
                locality = COALESCE($8, locality),
                phones = COALESCE($9, phones),
                mobile = COALESCE($10, mobile),
                email = COALESCE($11, email),
                broker_number = COALESCE($12, broker_number),
                notes = COALESCE($13, notes),
                modified_by = $14,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.first_names)
        .bind(&input.last_names)
        .bind(&input.document_type)
        .bind(document)
        .bind(input.birth_date)
        .bind(&input.address)
        .bind(&input.locality)
        .bind(&input.phones)
        .bind(&input.mobile)
        .bind(email)
        .bind(input.broker_number)
        .bind(&input.notes)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        Ok(client)
    }

    // Os movimentos do cliente caem junto (ON DELETE CASCADE)
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error(e, Resource::Client))?;

        Ok(result.rows_affected() > 0)
    }
}
