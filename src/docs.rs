// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "Agenda Seguros API", description = "Back office da agência de seguros"),
    paths(
        handlers::health,

        // --- Auth ---
        handlers::auth::login,
        handlers::auth::first_run,
        handlers::auth::setup_admin,

        // --- Users ---
        handlers::auth::get_me,
        handlers::users::create_user,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::users::update_user,
        handlers::users::delete_user,

        // --- Brokers ---
        handlers::brokers::create_broker,
        handlers::brokers::list_brokers,
        handlers::brokers::get_broker,
        handlers::brokers::update_broker,
        handlers::brokers::delete_broker,

        // --- Clients ---
        handlers::clients::create_client,
        handlers::clients::list_clients,
        handlers::clients::get_client,
        handlers::clients::get_client_by_number,
        handlers::clients::update_client,
        handlers::clients::delete_client,
        handlers::clients::list_client_movements,

        // --- Insurance Types ---
        handlers::insurance_types::create_insurance_type,
        handlers::insurance_types::list_insurance_types,
        handlers::insurance_types::get_insurance_type,
        handlers::insurance_types::update_insurance_type,
        handlers::insurance_types::delete_insurance_type,

        // --- Movements ---
        handlers::movements::create_movement,
        handlers::movements::list_movements,
        handlers::movements::get_movement,
        handlers::movements::update_movement,
        handlers::movements::delete_movement,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::User,
            models::auth::LoginForm,
            models::auth::TokenResponse,
            models::auth::FirstRunStatus,
            models::auth::SetupAdminPayload,

            // --- Users ---
            models::user::CreateUserPayload,
            models::user::UpdateUserPayload,

            // --- Brokers ---
            models::broker::Broker,
            models::broker::CreateBrokerPayload,
            models::broker::UpdateBrokerPayload,

            // --- Clients ---
            models::client::Client,
            models::client::CreateClientPayload,
            models::client::UpdateClientPayload,

            // --- Insurance Types ---
            models::insurance_type::InsuranceType,
            models::insurance_type::CreateInsuranceTypePayload,
            models::insurance_type::UpdateInsuranceTypePayload,

            // --- Movements ---
            models::movement::PolicyMovement,
            models::movement::CreateMovementPayload,
            models::movement::UpdateMovementPayload,
        )
    ),
    tags(
        (name = "Health", description = "Verificação de disponibilidade"),
        (name = "Auth", description = "Login e configuração inicial"),
        (name = "Users", description = "Contas de usuário e perfil"),
        (name = "Brokers", description = "Corredores"),
        (name = "Clients", description = "Clientes da agência"),
        (name = "Insurance Types", description = "Seguradoras e ramos"),
        (name = "Movements", description = "Movimentos de vigência das apólices")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
