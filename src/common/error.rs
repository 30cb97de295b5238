// src/common/error.rs

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use thiserror::Error;

use crate::common::i18n::I18nStore;
use crate::middleware::i18n::Locale;

/// Recursos do domínio, usados para montar mensagens de "não encontrado",
/// "referência inexistente" e "registro em uso".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Broker,
    Client,
    InsuranceType,
    Movement,
}

impl Resource {
    pub fn key(&self) -> &'static str {
        match self {
            Resource::User => "resource.user",
            Resource::Broker => "resource.broker",
            Resource::Client => "resource.client",
            Resource::InsuranceType => "resource.insurance_type",
            Resource::Movement => "resource.movement",
        }
    }
}

// Nosso tipo de erro, agora com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário inativo")]
    InactiveUser,

    #[error("Permissão insuficiente")]
    InsufficientRole,

    #[error("Acesso negado a outro usuário")]
    ForbiddenOtherUser,

    #[error("Alteração de campos administrativos não permitida")]
    ForbiddenAdminFields,

    #[error("Recurso não encontrado: {0:?}")]
    ResourceNotFound(Resource),

    // Chave de campo duplicada (ex: "email", "document")
    #[error("Registro duplicado: {0}")]
    DuplicateRecord(&'static str),

    #[error("Referência inexistente: {0:?}")]
    ReferenceNotFound(Resource),

    #[error("Registro em uso: {0:?}")]
    RecordInUse(Resource),

    #[error("Período de vigência inválido")]
    InvalidCoveragePeriod,

    #[error("Administrador já configurado")]
    AdminAlreadyConfigured,

    #[error("Não é possível excluir o próprio usuário")]
    CannotDeleteSelf,

    #[error("Administrador não pode se desativar nem se rebaixar")]
    CannotChangeOwnAccess,

    // Corpo que nem chegou a ser desserializado (JSON/form malformado, campo faltando)
    #[error("Corpo da requisição inválido: {0}")]
    InvalidBody(String),

    // Variante para erros de banco de dados (exemplo com sqlx)
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

/// O erro já traduzido, pronto para virar resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::DuplicateRecord(_)
            | AppError::ReferenceNotFound(_)
            | AppError::RecordInUse(_)
            | AppError::InvalidCoveragePeriod
            | AppError::AdminAlreadyConfigured
            | AppError::CannotDeleteSelf
            | AppError::CannotChangeOwnAccess
            | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,

            AppError::InvalidCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,

            AppError::InactiveUser
            | AppError::InsufficientRole
            | AppError::ForbiddenOtherUser
            | AppError::ForbiddenAdminFields => StatusCode::FORBIDDEN,

            AppError::ResourceNotFound(_) => StatusCode::NOT_FOUND,

            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_)
            | AppError::JwtError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converte o erro de domínio numa resposta traduzida para o idioma do cliente.
    pub fn to_api_error(&self, locale: &Locale, store: &I18nStore) -> ApiError {
        let lang = locale.0.as_str();
        let status = self.status_code();

        let (error, details) = match self {
            AppError::ValidationError(errors) => {
                let mut details: HashMap<String, Vec<String>> = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            let code = e.message.as_deref().unwrap_or(e.code.as_ref());
                            store
                                .lookup(lang, &format!("validation.{}", code))
                                .unwrap_or_else(|| code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                (store.translate(lang, "validation_error", &[]), Some(json!(details)))
            }
            AppError::InvalidCredentials => (store.translate(lang, "invalid_credentials", &[]), None),
            AppError::InvalidToken => (store.translate(lang, "invalid_token", &[]), None),
            AppError::InactiveUser => (store.translate(lang, "inactive_user", &[]), None),
            AppError::InsufficientRole => (store.translate(lang, "insufficient_role", &[]), None),
            AppError::ForbiddenOtherUser => (store.translate(lang, "forbidden_other_user", &[]), None),
            AppError::ForbiddenAdminFields => (store.translate(lang, "forbidden_admin_fields", &[]), None),
            AppError::ResourceNotFound(resource) => {
                let name = store.translate(lang, resource.key(), &[]);
                (store.translate(lang, "not_found", &[&name]), None)
            }
            AppError::DuplicateRecord(field) => {
                let field_name = store.translate(lang, &format!("field.{}", field), &[]);
                (
                    store.translate(lang, "duplicate_record", &[&field_name]),
                    Some(json!({ "field": field })),
                )
            }
            AppError::ReferenceNotFound(resource) => {
                let name = store.translate(lang, resource.key(), &[]);
                (store.translate(lang, "reference_not_found", &[&name]), None)
            }
            AppError::RecordInUse(resource) => {
                let name = store.translate(lang, resource.key(), &[]);
                (store.translate(lang, "record_in_use", &[&name]), None)
            }
            AppError::InvalidCoveragePeriod => (store.translate(lang, "invalid_coverage_period", &[]), None),
            AppError::AdminAlreadyConfigured => (store.translate(lang, "admin_already_configured", &[]), None),
            AppError::CannotDeleteSelf => (store.translate(lang, "cannot_delete_self", &[]), None),
            AppError::CannotChangeOwnAccess => (store.translate(lang, "cannot_change_own_access", &[]), None),
            AppError::InvalidBody(reason) => (
                store.translate(lang, "invalid_body", &[]),
                Some(json!({ "body": reason })),
            ),

            // Todos os outros erros viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (store.translate(lang, "internal_error", &[]), None)
            }
        };

        ApiError { status, error, details }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };

        let mut response = (self.status, Json(body)).into_response();
        if self.status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

// Para os casos em que não temos o idioma à mão (ex: rejeições fora dos handlers)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default(), &I18nStore::default()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_category() {
        assert_eq!(AppError::DuplicateRecord("email").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::ReferenceNotFound(Resource::Broker).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InactiveUser.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::InsufficientRole.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::ResourceNotFound(Resource::Client).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::InternalServerError(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_names_the_resource() {
        let store = I18nStore::default();
        let api = AppError::ResourceNotFound(Resource::Broker)
            .to_api_error(&Locale("en".to_string()), &store);
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.error, "Broker not found.");

        let api = AppError::ResourceNotFound(Resource::Broker)
            .to_api_error(&Locale("es".to_string()), &store);
        assert_eq!(api.error, "Corredor no encontrado.");
    }

    #[test]
    fn internal_errors_do_not_leak_details() {
        let store = I18nStore::default();
        let api = AppError::InternalServerError(anyhow::anyhow!("senha do banco: hunter2"))
            .to_api_error(&Locale("en".to_string()), &store);
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api.error.contains("hunter2"));
        assert!(api.details.is_none());
    }

    #[test]
    fn validation_errors_are_reported_per_field() {
        let mut errors = validator::ValidationErrors::new();
        let mut err = validator::ValidationError::new("email");
        err.message = Some("invalid_email".into());
        errors.add("email", err);

        let api = AppError::ValidationError(errors)
            .to_api_error(&Locale("en".to_string()), &I18nStore::default());
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        let details = api.details.expect("details");
        assert_eq!(details["email"][0], "Invalid email address.");
    }

    #[test]
    fn validation_details_follow_the_locale() {
        let mut errors = validator::ValidationErrors::new();
        let mut err = validator::ValidationError::new("length");
        err.message = Some("too_long".into());
        errors.add("notes", err);
        let mut err = validator::ValidationError::new("custom_rule");
        err.message = Some("sem_traducao".into());
        errors.add("folder", err);

        let api = AppError::ValidationError(errors)
            .to_api_error(&Locale("pt".to_string()), &I18nStore::default());
        let details = api.details.expect("details");
        assert_eq!(details["notes"][0], "Texto longo demais.");
        // Código sem tradução segue como veio
        assert_eq!(details["folder"][0], "sem_traducao");
    }

    #[test]
    fn malformed_body_is_a_bad_request_with_reason() {
        let api = AppError::InvalidBody("missing field `name`".into())
            .to_api_error(&Locale("en".to_string()), &I18nStore::default());
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.error, "The request body is malformed or incomplete.");
        assert_eq!(api.details.expect("details")["body"], "missing field `name`");
    }

    #[test]
    fn unauthorized_response_carries_bearer_challenge() {
        let response = AppError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
