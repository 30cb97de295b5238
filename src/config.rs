// src/config.rs

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, str::FromStr, sync::Arc, time::Duration};

use crate::{
    common::i18n::I18nStore,
    db::{BrokerRepository, ClientRepository, InsuranceTypeRepository, MovementRepository, UserRepository},
    services::{
        auth::AuthService, broker_service::BrokerService, client_service::ClientService,
        insurance_type_service::InsuranceTypeService, movement_service::MovementService,
        user_service::UserService,
    },
};

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub jwt_secret: String,
    pub access_token_expire_minutes: i64,
    pub bind_addr: String,
    pub db_max_connections: u32,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?,
            access_token_expire_minutes: check_token_ttl(parse_or(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                1440,
            )?)?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 5)?,
        })
    }
}

// Variável opcional: ausente usa o padrão, presente mas inválida é erro
fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} tem um valor inválido: {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

// Um ano, em minutos
const MAX_TOKEN_TTL_MINUTES: i64 = 525_600;

// Zero ou negativo gera tokens já vencidos; valores enormes estouram o `exp`
fn check_token_ttl(minutes: i64) -> anyhow::Result<i64> {
    anyhow::ensure!(
        (1..=MAX_TOKEN_TTL_MINUTES).contains(&minutes),
        "ACCESS_TOKEN_EXPIRE_MINUTES deve estar entre 1 e {}, veio {}",
        MAX_TOKEN_TTL_MINUTES,
        minutes
    );
    Ok(minutes)
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub settings: Arc<Settings>,
    pub i18n_store: Arc<I18nStore>,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub broker_service: BrokerService,
    pub client_service: ClientService,
    pub insurance_type_service: InsuranceTypeService,
    pub movement_service: MovementService,
}

impl AppState {
    pub async fn new(settings: Settings) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(settings.db_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&settings.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool, settings))
    }

    /// Monta o gráfico de dependências sobre um pool já criado.
    pub fn from_pool(db_pool: PgPool, settings: Settings) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let movement_repo = MovementRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            user_repo.clone(),
            settings.jwt_secret.clone(),
            settings.access_token_expire_minutes,
            db_pool.clone(),
        );
        let user_service = UserService::new(user_repo, db_pool.clone());
        let broker_service = BrokerService::new(BrokerRepository::new(db_pool.clone()));
        let client_service =
            ClientService::new(ClientRepository::new(db_pool.clone()), movement_repo.clone());
        let insurance_type_service =
            InsuranceTypeService::new(InsuranceTypeRepository::new(db_pool.clone()));
        let movement_service = MovementService::new(movement_repo);

        Self {
            db_pool,
            settings: Arc::new(settings),
            i18n_store: Arc::new(I18nStore::default()),
            auth_service,
            user_service,
            broker_service,
            client_service,
            insurance_type_service,
            movement_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_values_fall_back_to_defaults() {
        let minutes: i64 = parse_or("AGENDA_TESTE_VARIAVEL_INEXISTENTE", 1440).unwrap();
        assert_eq!(minutes, 1440);
    }

    #[test]
    fn unparsable_values_are_reported() {
        // SAFETY: só este teste usa esta variável
        unsafe { env::set_var("AGENDA_TESTE_MAX_CONN", "muitas") };
        let result: anyhow::Result<u32> = parse_or("AGENDA_TESTE_MAX_CONN", 5);
        assert!(result.is_err());
        unsafe { env::remove_var("AGENDA_TESTE_MAX_CONN") };
    }

    #[test]
    fn token_ttl_must_be_positive() {
        assert!(check_token_ttl(0).is_err());
        assert!(check_token_ttl(-30).is_err());
    }

    #[test]
    fn token_ttl_is_capped_at_one_year() {
        assert_eq!(check_token_ttl(1440).unwrap(), 1440);
        assert_eq!(check_token_ttl(MAX_TOKEN_TTL_MINUTES).unwrap(), MAX_TOKEN_TTL_MINUTES);
        assert!(check_token_ttl(MAX_TOKEN_TTL_MINUTES + 1).is_err());
        assert!(check_token_ttl(i64::MAX).is_err());
    }
}
