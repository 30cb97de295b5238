// src/db/insurance_type_repo.rs

use sqlx::PgPool;

use crate::{
    common::{
        db_utils::{map_constraint_error, map_delete_error},
        error::{AppError, Resource},
    },
    models::insurance_type::{CreateInsuranceTypePayload, InsuranceType, UpdateInsuranceTypePayload},
};

#[derive(Clone)]
pub struct InsuranceTypeRepository {
    pool: PgPool,
}

impl InsuranceTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &CreateInsuranceTypePayload) -> Result<InsuranceType, AppError> {
        let insurance_type = sqlx::query_as::<_, InsuranceType>(
            r#"
            INSERT INTO insurance_types (insurer, code, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&input.insurer)
        .bind(&input.code)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        Ok(insurance_type)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<InsuranceType>, AppError> {
        let insurance_type =
            sqlx::query_as::<_, InsuranceType>("SELECT * FROM insurance_types WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(insurance_type)
    }

    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        search: Option<&str>,
    ) -> Result<Vec<InsuranceType>, AppError> {
        let types = sqlx::query_as::<_, InsuranceType>(
            r#"
            SELECT * FROM insurance_types
            WHERE $1::text IS NULL
                OR insurer ILIKE $1
                OR code ILIKE $1
                OR description ILIKE $1
            ORDER BY insurer ASC, code ASC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(search)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(types)
    }

    pub async fn update(
        &self,
        id: i32,
        input: &UpdateInsuranceTypePayload,
    ) -> Result<Option<InsuranceType>, AppError> {
        let insurance_type = sqlx::query_as::<_, InsuranceType>(
            r#"
            UPDATE insurance_types SET
                insurer = COALESCE($2, insurer),
                code = COALESCE($3, code),
                description = COALESCE($4, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.insurer)
        .bind(&input.code)
        .bind(&input.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        Ok(insurance_type)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM insurance_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error(e, Resource::InsuranceType))?;

        Ok(result.rows_affected() > 0)
    }
}
