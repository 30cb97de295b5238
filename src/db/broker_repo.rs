// src/db/broker_repo.rs

use sqlx::PgPool;

use crate::{
    common::{
        db_utils::{map_constraint_error, map_delete_error},
        error::{AppError, Resource},
    },
    models::broker::{Broker, CreateBrokerPayload, UpdateBrokerPayload},
};

#[derive(Clone)]
pub struct BrokerRepository {
    pool: PgPool,
}

impl BrokerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &CreateBrokerPayload, email: &str) -> Result<Broker, AppError> {
        let broker = sqlx::query_as::<_, Broker>(
            r#"
            INSERT INTO brokers (
                number, first_names, last_names, document,
                address, locality, phones, mobile, email, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(input.number)
        .bind(&input.first_names)
        .bind(&input.last_names)
        .bind(&input.document)
        .bind(&input.address)
        .bind(&input.locality)
        .bind(&input.phones)
        .bind(&input.mobile)
        .bind(email)
        .bind(&input.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        Ok(broker)
    }

    pub async fn find_by_number(&self, number: i32) -> Result<Option<Broker>, AppError> {
        let broker = sqlx::query_as::<_, Broker>("SELECT * FROM brokers WHERE number = $1")
            .bind(number)
            .fetch_optional(&self.pool)
            .await?;
        Ok(broker)
    }

    /// Lista paginada, com busca opcional (padrão ILIKE já montado)
    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        search: Option<&str>,
    ) -> Result<Vec<Broker>, AppError> {
        let brokers = sqlx::query_as::<_, Broker>(
            r#"
            SELECT * FROM brokers
            WHERE $1::text IS NULL
                OR last_names ILIKE $1
                OR first_names ILIKE $1
                OR document ILIKE $1
                OR email ILIKE $1
            ORDER BY number ASC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(search)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(brokers)
    }

    pub async fn update(
        &self,
        number: i32,
        input: &UpdateBrokerPayload,
        email: Option<&str>,
    ) -> Result<Option<Broker>, AppError> {
        let broker = sqlx::query_as::<_, Broker>(
            r#"
            UPDATE brokers SET
                first_names = COALESCE($2, first_names),
                last_names = COALESCE($3, last_names),
                document = COALESCE($4, document),
                address = COALESCE($5, address),
                locality = COALESCE($6, locality),
                phones = COALESCE($7, phones),
                mobile = COALESCE($8, mobile),
                email = COALESCE($9, email),
                notes = COALESCE($10, notes),
                updated_at = NOW()
            WHERE number = $1
            RETURNING *
            "#,
        )
        .bind(number)
        .bind(&input.first_names)
        .bind(&input.last_names)
        .bind(&input.document)
        .bind(&input.address)
        .bind(&input.locality)
        .bind(&input.phones)
        .bind(&input.mobile)
        .bind(email)
        .bind(&input.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        Ok(broker)
    }

    pub async fn delete(&self, number: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM brokers WHERE number = $1")
            .bind(number)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error(e, Resource::Broker))?;

        Ok(result.rows_affected() > 0)
    }
}
