// src/services/user_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{
        error::{AppError, Resource},
        validation::normalize_email,
    },
    db::{user_repo::UserChanges, UserRepository},
    models::{
        auth::{User, UserRole},
        user::{CreateUserPayload, UpdateUserPayload},
    },
    services::auth::hash_password,
};

#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
    pool: PgPool,
}

impl UserService {
    pub fn new(repo: UserRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create_user(&self, payload: CreateUserPayload) -> Result<User, AppError> {
        let hashed_password = hash_password(payload.password).await?;

        self.repo
            .create_user(
                &self.pool,
                payload.name.trim(),
                &normalize_email(&payload.email),
                &hashed_password,
                payload.role,
                payload.is_active,
                payload.commission_percentage,
            )
            .await
    }

    pub async fn list_users(&self, skip: i64, limit: i64) -> Result<Vec<User>, AppError> {
        self.repo.list(skip, limit).await
    }

    /// Um usuário comum só enxerga a si mesmo.
    pub async fn get_user(&self, actor: &User, id: Uuid) -> Result<User, AppError> {
        ensure_self_or_admin(actor, id)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ResourceNotFound(Resource::User))
    }

    pub async fn update_user(
        &self,
        actor: &User,
        id: Uuid,
        payload: UpdateUserPayload,
    ) -> Result<User, AppError> {
        ensure_self_or_admin(actor, id)?;

        // Cargo, status e comissão são decisões administrativas
        if payload.touches_admin_fields() && !actor.is_admin() {
            return Err(AppError::ForbiddenAdminFields);
        }

        // Sem isso o último administrador pode se trancar fora
        if actor.id == id && (payload.is_active == Some(false) || payload.role == Some(UserRole::User)) {
            return Err(AppError::CannotChangeOwnAccess);
        }

        let password_hash = match payload.password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        let changes = UserChanges {
            name: payload.name.map(|n| n.trim().to_string()),
            email: payload.email.as_deref().map(normalize_email),
            password_hash,
            role: payload.role,
            is_active: payload.is_active,
            commission_percentage: payload.commission_percentage,
        };

        self.repo
            .update_user(id, changes)
            .await?
            .ok_or(AppError::ResourceNotFound(Resource::User))
    }

    pub async fn delete_user(&self, actor: &User, id: Uuid) -> Result<(), AppError> {
        if actor.id == id {
            return Err(AppError::CannotDeleteSelf);
        }

        if !self.repo.delete_user(id).await? {
            return Err(AppError::ResourceNotFound(Resource::User));
        }
        tracing::info!("🗑️ Usuário {} excluído por {}", id, actor.email);
        Ok(())
    }
}

fn ensure_self_or_admin(actor: &User, target: Uuid) -> Result<(), AppError> {
    if actor.id != target && !actor.is_admin() {
        return Err(AppError::ForbiddenOtherUser);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@agencia.com".into(),
            password_hash: String::new(),
            role,
            is_active: true,
            commission_percentage: Decimal::ZERO,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn user_can_reach_itself() {
        let me = user(UserRole::User);
        assert!(ensure_self_or_admin(&me, me.id).is_ok());
    }

    #[test]
    fn user_cannot_reach_others() {
        let me = user(UserRole::User);
        assert!(matches!(
            ensure_self_or_admin(&me, Uuid::new_v4()),
            Err(AppError::ForbiddenOtherUser)
        ));
    }

    #[test]
    fn admin_can_reach_anyone() {
        let admin = user(UserRole::Admin);
        assert!(ensure_self_or_admin(&admin, Uuid::new_v4()).is_ok());
    }

    #[tokio::test]
    async fn admin_cannot_delete_itself() {
        let pool = crate::services::auth::tests::lazy_pool();
        let service = UserService::new(UserRepository::new(pool.clone()), pool);
        let admin = user(UserRole::Admin);

        let result = service.delete_user(&admin, admin.id).await;
        assert!(matches!(result, Err(AppError::CannotDeleteSelf)));
    }

    #[tokio::test]
    async fn plain_user_cannot_promote_itself() {
        let pool = crate::services::auth::tests::lazy_pool();
        let service = UserService::new(UserRepository::new(pool.clone()), pool);
        let me = user(UserRole::User);

        let payload = UpdateUserPayload { role: Some(UserRole::Admin), ..Default::default() };
        let result = service.update_user(&me, me.id, payload).await;
        assert!(matches!(result, Err(AppError::ForbiddenAdminFields)));
    }

    #[tokio::test]
    async fn admin_cannot_deactivate_itself() {
        let pool = crate::services::auth::tests::lazy_pool();
        let service = UserService::new(UserRepository::new(pool.clone()), pool);
        let admin = user(UserRole::Admin);

        let payload = UpdateUserPayload { is_active: Some(false), ..Default::default() };
        let result = service.update_user(&admin, admin.id, payload).await;
        assert!(matches!(result, Err(AppError::CannotChangeOwnAccess)));
    }

    #[tokio::test]
    async fn admin_cannot_demote_itself() {
        let pool = crate::services::auth::tests::lazy_pool();
        let service = UserService::new(UserRepository::new(pool.clone()), pool);
        let admin = user(UserRole::Admin);

        let payload = UpdateUserPayload { role: Some(UserRole::User), ..Default::default() };
        let result = service.update_user(&admin, admin.id, payload).await;
        assert!(matches!(result, Err(AppError::CannotChangeOwnAccess)));
    }
}
