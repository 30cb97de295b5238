// src/db/movement_repo.rs

use sqlx::PgPool;

use crate::{
    common::{
        db_utils::{map_constraint_error, map_delete_error},
        error::{AppError, Resource},
    },
    models::movement::{CreateMovementPayload, PolicyMovement, UpdateMovementPayload},
};

// Toda leitura traz o nome do cliente junto
const SELECT_MOVEMENT: &str = r#"
    SELECT
        m.id, m.movement_date, m.client_number,
        NULLIF(CONCAT_WS(' ', c.first_names, c.last_names), '') AS client_name,
        m.broker_number, m.insurance_type_id, m.folder,
        m.policy_number, m.endorsement, m.coverage_from, m.coverage_to,
        m.currency, m.premium, m.installments, m.notes,
        m.created_at, m.updated_at
    FROM policy_movements m
    LEFT JOIN clients c ON c.client_number = m.client_number
"#;

#[derive(Clone)]
pub struct MovementRepository {
    pool: PgPool,
}

impl MovementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insere e relê com o JOIN, numa única ida ao banco (CTE).
    pub async fn create(&self, input: &CreateMovementPayload) -> Result<PolicyMovement, AppError> {
        let movement = sqlx::query_as::<_, PolicyMovement>(
            r#"
            WITH m AS (
                INSERT INTO policy_movements (
                    movement_date, client_number, broker_number, insurance_type_id,
                    folder, policy_number, endorsement, coverage_from, coverage_to,
                    currency, premium, installments, notes
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                RETURNING *
            )
            SELECT
                m.id, m.movement_date, m.client_number,
                NULLIF(CONCAT_WS(' ', c.first_names, c.last_names), '') AS client_name,
                m.broker_number, m.insurance_type_id, m.folder,
                m.policy_number, m.endorsement, m.coverage_from, m.coverage_to,
                m.currency, m.premium, m.installments, m.notes,
                m.created_at, m.updated_at
            FROM m
            LEFT JOIN clients c ON c.client_number = m.client_number
            "#,
        )
        .bind(input.movement_date)
        .bind(input.client_number)
        .bind(input.broker_number)
        .bind(input.insurance_type_id)
        .bind(&input.folder)
        .bind(&input.policy_number)
        .bind(&input.endorsement)
        .bind(input.coverage_from)
        .bind(input.coverage_to)
        .bind(&input.currency)
        .bind(input.premium)
        .bind(input.installments)
        .bind(&input.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        Ok(movement)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<PolicyMovement>, AppError> {
        let movement = sqlx::query_as::<_, PolicyMovement>(&format!("{} WHERE m.id = $1", SELECT_MOVEMENT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(movement)
    }

    /// Busca por número de apólice ou pasta
    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        search: Option<&str>,
    ) -> Result<Vec<PolicyMovement>, AppError> {
        let movements = sqlx::query_as::<_, PolicyMovement>(&format!(
            r#"{}
            WHERE $1::text IS NULL
                OR m.policy_number ILIKE $1
                OR m.folder ILIKE $1
            ORDER BY m.movement_date DESC, m.id DESC
            OFFSET $2 LIMIT $3
            "#,
            SELECT_MOVEMENT
        ))
        .bind(search)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(movements)
    }

    pub async fn list_by_client(&self, client_number: i64) -> Result<Vec<PolicyMovement>, AppError> {
        let movements = sqlx::query_as::<_, PolicyMovement>(&format!(
            "{} WHERE m.client_number = $1 ORDER BY m.movement_date DESC, m.id DESC",
            SELECT_MOVEMENT
        ))
        .bind(client_number)
        .fetch_all(&self.pool)
        .await?;
        Ok(movements)
    }

    /// Atualização parcial; devolve None se o movimento não existe.
    pub async fn update(
        &self,
        id: i32,
        input: &UpdateMovementPayload,
    ) -> Result<Option<PolicyMovement>, AppError> {
        let updated_id: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE policy_movements SET
                movement_date = COALESCE($2, movement_date),
                client_number = COALESCE($3, client_number),
                broker_number = COALESCE($4, broker_number),
                insurance_type_id = COALESCE($5, insurance_type_id),
                folder = COALESCE($6, folder),
                policy_number = COALESCE($7, policy_number),
                endorsement = COALESCE($8, endorsement),
                coverage_from = COALESCE($9, coverage_from),
                coverage_to = COALESCE($10, coverage_to),
                currency = COALESCE($11, currency),
                premium = COALESCE($12, premium),
                installments = COALESCE($13, installments),
                notes = COALESCE($14, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(input.movement_date)
        .bind(input.client_number)
        .bind(input.broker_number)
        .bind(input.insurance_type_id)
        .bind(&input.folder)
        .bind(&input.policy_number)
        .bind(&input.endorsement)
        .bind(input.coverage_from)
        .bind(input.coverage_to)
        .bind(&input.currency)
        .bind(input.premium)
        .bind(input.installments)
        .bind(&input.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        match updated_id {
            Some(id) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM policy_movements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error(e, Resource::Movement))?;

        Ok(result.rows_affected() > 0)
    }
}
