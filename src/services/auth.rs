// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{error::AppError, validation::normalize_email},
    db::UserRepository,
    models::auth::{Claims, SetupAdminPayload, User, UserRole},
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
    token_ttl_minutes: i64,
    pool: PgPool,
}

impl AuthService {
    pub fn new(
        user_repo: UserRepository,
        jwt_secret: String,
        token_ttl_minutes: i64,
        pool: PgPool,
    ) -> Self {
        Self { user_repo, jwt_secret, token_ttl_minutes, pool }
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let email = normalize_email(email);

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            // Gasta o mesmo tempo de um hash para não revelar se o e-mail existe
            let _ = hash_password(password.to_owned()).await;
            return Err(AppError::InvalidCredentials);
        };

        if !verify_password(password.to_owned(), user.password_hash.clone()).await? {
            return Err(AppError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(AppError::InactiveUser);
        }

        let token = self.create_token(user.id)?;
        tracing::info!("🔑 Login de {}", user.email);
        Ok((token, user))
    }

    /// Valida assinatura e expiração, e carrega o dono do token.
    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let claims = self.decode_token(token)?;

        let user = self
            .user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if !user.is_active {
            return Err(AppError::InactiveUser);
        }
        Ok(user)
    }

    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }

    pub fn create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::minutes(self.token_ttl_minutes);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }

    /// Primeira execução = nenhum usuário cadastrado
    pub async fn is_first_run(&self) -> Result<bool, AppError> {
        Ok(self.user_repo.count(&self.pool).await? == 0)
    }

    /// Cria o administrador inicial. Só funciona enquanto a tabela de usuários
    /// estiver vazia.
    pub async fn setup_admin(&self, payload: &SetupAdminPayload) -> Result<(String, User), AppError> {
        let hashed_password = hash_password(payload.password.clone()).await?;
        let email = normalize_email(&payload.email);

        // --- INÍCIO DA TRANSAÇÃO ---
        let mut tx = self.pool.begin().await?;

        // Trava a tabela para dois setups simultâneos não criarem dois admins
        sqlx::query("LOCK TABLE users IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        if self.user_repo.count(&mut *tx).await? > 0 {
            return Err(AppError::AdminAlreadyConfigured);
        }

        let admin = self
            .user_repo
            .create_user(
                &mut *tx,
                payload.name.trim(),
                &email,
                &hashed_password,
                UserRole::Admin,
                true,
                payload.commission_percentage,
            )
            .await?;

        tx.commit().await?;
        // --- FIM DA TRANSAÇÃO ---

        tracing::info!("🛠️ Administrador inicial criado: {}", admin.email);
        let token = self.create_token(admin.id)?;
        Ok((token, admin))
    }
}

// O bcrypt é pesado: roda fora das threads do runtime
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hashed = tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
    Ok(hashed)
}

pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    let is_valid = tokio::task::spawn_blocking(move || verify(&password, &password_hash))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;
    Ok(is_valid)
}
