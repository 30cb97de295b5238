pub mod auth;
pub mod brokers;
pub mod clients;
pub mod insurance_types;
pub mod movements;
pub mod users;

// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Servidor no ar", body = String))
)]
pub async fn health() -> &'static str {
    "OK"
}
