//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;


use crate::config::{AppState, Settings};
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar
    let settings = Settings::from_env()?;
    let bind_addr = settings.bind_addr.clone();
    let app_state = AppState::new(settings).await?;

    sqlx::migrate!().run(&app_state.db_pool).await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);

    axum::serve(listener, app(app_state)).await?;
    Ok(())
}

/// Monta o router completo: rotas públicas, rotas protegidas e documentação.
pub fn app(app_state: AppState) -> Router {
    // Rotas públicas de autenticação
    let auth_routes = Router::new()
        .route("/token", post(handlers::auth::login))
        .route("/first-run", get(handlers::auth::first_run))
        .route("/setup-admin", post(handlers::auth::setup_admin));

    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route(
            "/",
            post(handlers::users::create_user).get(handlers::users::list_users),
        )
        .route(
            "/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        );

    let broker_routes = Router::new()
        .route(
            "/",
            post(handlers::brokers::create_broker).get(handlers::brokers::list_brokers),
        )
        .route(
            "/{number}",
            get(handlers::brokers::get_broker)
                .put(handlers::brokers::update_broker)
                .delete(handlers::brokers::delete_broker),
        );

    let client_routes = Router::new()
        .route(
            "/",
            post(handlers::clients::create_client).get(handlers::clients::list_clients),
        )
        .route("/number/{client_number}", get(handlers::clients::get_client_by_number))
        .route(
            "/{id}",
            get(handlers::clients::get_client)
                .put(handlers::clients::update_client)
                .delete(handlers::clients::delete_client),
        )
        .route("/{id}/movements", get(handlers::clients::list_client_movements));

    let insurance_type_routes = Router::new()
        .route(
            "/",
            post(handlers::insurance_types::create_insurance_type)
                .get(handlers::insurance_types::list_insurance_types),
        )
        .route(
            "/{id}",
            get(handlers::insurance_types::get_insurance_type)
                .put(handlers::insurance_types::update_insurance_type)
                .delete(handlers::insurance_types::delete_insurance_type),
        );

    let movement_routes = Router::new()
        .route(
            "/",
            post(handlers::movements::create_movement).get(handlers::movements::list_movements),
        )
        .route(
            "/{id}",
            get(handlers::movements::get_movement)
                .put(handlers::movements::update_movement)
                .delete(handlers::movements::delete_movement),
        );

    // Tudo aqui exige token; route_layer mantém 404 para rotas inexistentes
    let protected_routes = Router::new()
        .nest("/users", user_routes)
        .nest("/brokers", broker_routes)
        .nest("/clients", client_routes)
        .nest("/insurance-types", insurance_type_routes)
        .nest("/movements", movement_routes)
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    Router::new()
        .route("/api/health", get(handlers::health))
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1", protected_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
