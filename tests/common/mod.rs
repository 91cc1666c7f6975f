#![allow(dead_code)]

use adreset::config::Config;
use adreset::domain::claims::Claims;
use adreset::infrastructure::persistence;
use adreset::routes::app_routes;
use adreset::state::AppState;
use axum_test::TestServer;
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::SqlitePool;

pub const JWT_SECRET: &str = "test-jwt-secret";
pub const SERVER_NAME: &str = "adreset.test";

pub fn test_config() -> Config {
    Config {
        jwt_secret_key: JWT_SECRET.to_string(),
        server_name: Some(SERVER_NAME.to_string()),
        ..Config::test()
    }
}

/// Fresh in-memory database with migrations applied.
pub async fn test_pool() -> SqlitePool {
    persistence::connect("sqlite::memory:", 1).await.unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(test_config(), pool)
}

pub async fn create_test_server() -> (TestServer, SqlitePool) {
    create_test_server_with(test_config()).await
}

pub async fn create_test_server_with(config: Config) -> (TestServer, SqlitePool) {
    let pool = test_pool().await;
    let server = TestServer::new(app_routes(AppState::new(config, pool.clone()))).unwrap();
    (server, pool)
}

pub fn token_for(sub: &str, roles: &[&str]) -> String {
    let now = chrono::Utc::now().timestamp() as u64;
    let claims = Claims {
        sub: sub.to_string(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        exp: now + 3600,
        iat: Some(now),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn admin_token() -> String {
    token_for("administrator", &["admin"])
}

pub fn user_token(sub: &str) -> String {
    token_for(sub, &["user"])
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub async fn create_test_question(pool: &SqlitePool, question: &str, enabled: bool) -> i64 {
    sqlx::query_scalar("INSERT INTO questions (question, enabled) VALUES (?1, ?2) RETURNING id")
        .bind(question)
        .bind(enabled)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_answer(pool: &SqlitePool, username: &str, question_id: i64) {
    sqlx::query("INSERT INTO answers (username, question_id, answer_hash) VALUES (?1, ?2, ?3)")
        .bind(username)
        .bind(question_id)
        .bind("0".repeat(64))
        .execute(pool)
        .await
        .unwrap();
}
