// src/tests/database.rs
//
// Router completo sobre um Postgres de verdade. O `#[sqlx::test]` cria um banco
// novo por teste (a partir de DATABASE_URL) e aplica ./migrations antes.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use super::{json_body, test_settings};
use crate::{app, common::i18n::I18nStore, config::AppState};

fn db_app(pool: PgPool) -> Router {
    app(AppState::from_pool(pool, test_settings()))
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    if status == StatusCode::NO_CONTENT {
        return (status, Value::Null);
    }
    (status, json_body(response).await)
}

async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    let form = format!("username={}&password={}", email.replace('@', "%40"), password);
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/v1/auth/token")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, json_body(response).await)
}

/// Cria o administrador inicial e devolve (token, id).
async fn admin(app: &Router) -> (String, String) {
    let (status, body) = call(
        app,
        Method::POST,
        "/api/v1/auth/setup-admin",
        None,
        Some(json!({"name": "Admin", "email": "admin@agencia.com", "password": "segredo123"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    let token = body["access_token"].as_str().unwrap().to_string();
    let id = body["user"]["id"].as_str().unwrap().to_string();
    (token, id)
}

fn broker(number: i32, document: &str, email: &str) -> Value {
    json!({
        "number": number,
        "lastNames": "Gómez",
        "document": document,
        "address": "18 de Julio 1234",
        "locality": "Montevideo",
        "email": email,
    })
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    serde_json::from_value(value.clone()).unwrap()
}

fn movement(client_number: i64, insurance_type_id: i64, policy: &str) -> Value {
    json!({
        "movementDate": "2025-02-01",
        "clientNumber": client_number,
        "brokerNumber": 7,
        "insuranceTypeId": insurance_type_id,
        "folder": "A-100",
        "policyNumber": policy,
        "coverageFrom": "2025-02-01",
        "coverageTo": "2026-02-01",
        "currency": "UYU",
    })
}

/// Corredor 7, um tipo de seguro e um cliente ligados a ele. Devolve
/// (id do cliente, número do cliente, id do tipo).
async fn seed_portfolio(app: &Router, token: &str) -> (String, i64, i64) {
    let (status, _) = call(
        app,
        Method::POST,
        "/api/v1/brokers",
        Some(token),
        Some(broker(7, "1.234.567-8", "gomez@corredores.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, kind) = call(
        app,
        Method::POST,
        "/api/v1/insurance-types",
        Some(token),
        Some(json!({"insurer": "Sura", "code": "AUT", "description": "Automóviles"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, client) = call(
        app,
        Method::POST,
        "/api/v1/clients",
        Some(token),
        Some(json!({"lastNames": "Pérez", "address": "Colonia 1234", "brokerNumber": 7})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    (
        client["id"].as_str().unwrap().to_string(),
        client["clientNumber"].as_i64().unwrap(),
        kind["id"].as_i64().unwrap(),
    )
}

#[sqlx::test]
async fn login_token_authorizes_the_profile_route(pool: PgPool) {
    let app = db_app(pool);
    admin(&app).await;

    let (status, body) = login(&app, "Admin@Agencia.com", "segredo123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().unwrap();
    let (status, me) = call(&app, Method::GET, "/api/v1/users/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "admin@agencia.com");
    assert_eq!(me["role"], "admin");
    assert!(me.get("passwordHash").is_none());
}

#[sqlx::test]
async fn wrong_password_is_unauthorized(pool: PgPool) {
    let app = db_app(pool);
    admin(&app).await;

    let (status, _) = login(&app, "admin@agencia.com", "errada123").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn second_setup_admin_is_refused(pool: PgPool) {
    let app = db_app(pool);

    let (_, before) = call(&app, Method::GET, "/api/v1/auth/first-run", None, None).await;
    assert_eq!(before["firstRun"], true);

    admin(&app).await;

    let (_, after) = call(&app, Method::GET, "/api/v1/auth/first-run", None, None).await;
    assert_eq!(after["firstRun"], false);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/v1/auth/setup-admin",
        None,
        Some(json!({"name": "Outro", "email": "outro@agencia.com", "password": "segredo123"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        I18nStore::default().translate("es", "admin_already_configured", &[])
    );
}

#[sqlx::test]
async fn created_client_gets_id_and_sequential_number(pool: PgPool) {
    let app = db_app(pool);
    let (token, admin_id) = admin(&app).await;

    let (status, first) = call(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(&token),
        Some(json!({"lastNames": "Pérez", "address": "Colonia 1234"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(Uuid::parse_str(first["id"].as_str().unwrap()).is_ok());
    assert_eq!(first["createdBy"], admin_id.as_str());

    let (_, second) = call(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(&token),
        Some(json!({"lastNames": "Rodríguez", "address": "Rivera 99"})),
    )
    .await;
    assert_eq!(
        second["clientNumber"].as_i64().unwrap(),
        first["clientNumber"].as_i64().unwrap() + 1
    );

    let uri = format!("/api/v1/clients/number/{}", first["clientNumber"]);
    let (status, found) = call(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"], first["id"]);
}

#[sqlx::test]
async fn duplicate_emails_and_documents_are_bad_requests(pool: PgPool) {
    let app = db_app(pool);
    let (token, _) = admin(&app).await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/v1/users",
        Some(&token),
        Some(json!({"name": "Copia", "email": "ADMIN@agencia.com", "password": "segredo123"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "email");

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/v1/brokers",
        Some(&token),
        Some(broker(7, "1.234.567-8", "gomez@corredores.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/v1/brokers",
        Some(&token),
        Some(broker(8, "1.234.567-8", "otro@corredores.com")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "document");

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/v1/brokers",
        Some(&token),
        Some(broker(7, "9.999.999-9", "nuevo@corredores.com")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "broker_number");

    let client = json!({"lastNames": "Pérez", "address": "Colonia 1234", "email": "perez@correo.com"});
    let (status, _) = call(&app, Method::POST, "/api/v1/clients", Some(&token), Some(client.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = call(&app, Method::POST, "/api/v1/clients", Some(&token), Some(client)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "email");
}

#[sqlx::test]
async fn duplicate_policy_is_refused_even_without_endorsement(pool: PgPool) {
    let app = db_app(pool);
    let (token, _) = admin(&app).await;
    let (_, client_number, kind) = seed_portfolio(&app, &token).await;

    let first = movement(client_number, kind, "POL-1");
    let (status, _) = call(&app, Method::POST, "/api/v1/movements", Some(&token), Some(first.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(&app, Method::POST, "/api/v1/movements", Some(&token), Some(first)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "policy_endorsement");

    // Mesma apólice com endosso novo é outro movimento
    let mut endorsed = movement(client_number, kind, "POL-1");
    endorsed["endorsement"] = json!("E-1");
    let (status, _) = call(&app, Method::POST, "/api/v1/movements", Some(&token), Some(endorsed.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = call(&app, Method::POST, "/api/v1/movements", Some(&token), Some(endorsed)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Movimentos sem apólice não colidem entre si
    let mut unnumbered = movement(client_number, kind, "");
    unnumbered["policyNumber"] = Value::Null;
    for _ in 0..2 {
        let (status, _) =
            call(&app, Method::POST, "/api/v1/movements", Some(&token), Some(unnumbered.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[sqlx::test]
async fn missing_records_are_not_found(pool: PgPool) {
    let app = db_app(pool);
    let (token, _) = admin(&app).await;

    let uris = [
        format!("/api/v1/clients/{}", Uuid::new_v4()),
        format!("/api/v1/users/{}", Uuid::new_v4()),
        "/api/v1/clients/number/424242".to_string(),
        "/api/v1/brokers/999".to_string(),
        "/api/v1/insurance-types/999".to_string(),
        "/api/v1/movements/999".to_string(),
    ];
    for uri in uris {
        let (status, body) = call(&app, Method::GET, &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(body["error"].is_string());
    }
}

#[sqlx::test]
async fn update_changes_only_supplied_fields(pool: PgPool) {
    let app = db_app(pool);
    let (token, admin_id) = admin(&app).await;

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/v1/users",
        Some(&token),
        Some(json!({"name": "Lucía", "email": "lucia@agencia.com", "password": "segredo123"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, session) = login(&app, "lucia@agencia.com", "segredo123").await;
    let lucia_token = session["access_token"].as_str().unwrap().to_string();
    let lucia_id = session["user"]["id"].as_str().unwrap().to_string();

    let (_, created) = call(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(&token),
        Some(json!({
            "firstNames": "Juan",
            "lastNames": "Pérez",
            "address": "Colonia 1234",
            "locality": "Centro",
        })),
    )
    .await;
    assert_eq!(created["modifiedBy"], admin_id.as_str());

    let uri = format!("/api/v1/clients/{}", created["id"].as_str().unwrap());
    let (status, updated) = call(
        &app,
        Method::PUT,
        &uri,
        Some(&lucia_token),
        Some(json!({"address": "Rivera 99"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["address"], "Rivera 99");
    assert_eq!(updated["firstNames"], "Juan");
    assert_eq!(updated["lastNames"], "Pérez");
    assert_eq!(updated["locality"], "Centro");
    assert_eq!(updated["clientNumber"], created["clientNumber"]);
    assert_eq!(updated["createdBy"], admin_id.as_str());
    assert_eq!(updated["modifiedBy"], lucia_id.as_str());
    assert!(timestamp(&updated["updatedAt"]) > timestamp(&created["updatedAt"]));
}

#[sqlx::test]
async fn deleted_record_is_gone(pool: PgPool) {
    let app = db_app(pool);
    let (token, _) = admin(&app).await;

    let (_, kind) = call(
        &app,
        Method::POST,
        "/api/v1/insurance-types",
        Some(&token),
        Some(json!({"insurer": "Sura", "code": "HOG", "description": "Hogar"})),
    )
    .await;
    let uri = format!("/api/v1/insurance-types/{}", kind["id"]);

    let (status, _) = call(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn deleting_a_client_takes_its_movements(pool: PgPool) {
    let app = db_app(pool);
    let (token, _) = admin(&app).await;
    let (client_id, client_number, kind) = seed_portfolio(&app, &token).await;

    let (status, created) = call(
        &app,
        Method::POST,
        "/api/v1/movements",
        Some(&token),
        Some(movement(client_number, kind, "POL-9")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let movement_uri = format!("/api/v1/movements/{}", created["id"]);

    let movements_uri = format!("/api/v1/clients/{}/movements", client_id);
    let (_, listed) = call(&app, Method::GET, &movements_uri, Some(&token), None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = call(
        &app,
        Method::DELETE,
        &format!("/api/v1/clients/{}", client_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&app, Method::GET, &movement_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&app, Method::GET, &movements_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn admin_cannot_lock_itself_out(pool: PgPool) {
    let app = db_app(pool);
    let (token, admin_id) = admin(&app).await;
    let uri = format!("/api/v1/users/{}", admin_id);

    for change in [json!({"isActive": false}), json!({"role": "user"})] {
        let (status, body) = call(&app, Method::PUT, &uri, Some(&token), Some(change)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            I18nStore::default().translate("es", "cannot_change_own_access", &[])
        );
    }

    let (status, me) = call(&app, Method::GET, "/api/v1/users/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["isActive"], true);
    assert_eq!(me["role"], "admin");
}
