// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration and login outcomes.

use axum::http::Method;
use recipy_client::error::ApiError;
use recipy_client::config::Config;
use recipy_client::models::{AuthOutcome, Credentials, NewUser};
use recipy_client::services::AuthService;
use recipy_client::store::FileStore;
use recipy_client::RecipyClient;
use serde_json::json;
use std::sync::Arc;

mod common;
use common::{client_for, unreachable_base_url, FakeGateway};

fn new_user() -> NewUser {
    NewUser {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        username: "ada".to_string(),
        password: "engine".to_string(),
    }
}

fn credentials() -> Credentials {
    Credentials {
        username: "ada".to_string(),
        password: "engine".to_string(),
    }
}

#[tokio::test]
async fn test_register_success() {
    let gateway = FakeGateway::new()
        .json(Method::POST, "/user/register", 200, json!({"message": "ok"}))
        .start()
        .await;
    let (client, _) = gateway.client();

    let outcome = client.users.register_user(&new_user()).await.unwrap();
    assert!(outcome.is_success());

    let body = gateway.single_request().body.unwrap();
    assert_eq!(
        body,
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "username": "ada",
            "password": "engine"
        })
    );
}

#[tokio::test]
async fn test_register_blank_error_field_is_success() {
    let gateway = FakeGateway::new()
        .json(
            Method::POST,
            "/user/register",
            200,
            json!({"message": "ok", "error": ""}),
        )
        .start()
        .await;
    let (client, _) = gateway.client();

    let outcome = client.users.register_user(&new_user()).await.unwrap();
    assert_eq!(outcome, AuthOutcome::Success);
}

#[tokio::test]
async fn test_login_false_error_field_is_success() {
    let gateway = FakeGateway::new()
        .json(
            Method::POST,
            "/user/login",
            200,
            json!({"token": "abc", "error": false}),
        )
        .start()
        .await;
    let (client, _) = gateway.client();

    let outcome = client.users.login_user(&credentials()).await.unwrap();
    assert!(outcome.is_success());
    assert_eq!(client.session.get_token().as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_register_error_field() {
    let gateway = FakeGateway::new()
        .json(
            Method::POST,
            "/user/register",
            200,
            json!({"error": "email taken"}),
        )
        .start()
        .await;
    let (client, _) = gateway.client();

    let outcome = client.users.register_user(&new_user()).await.unwrap();
    assert!(!outcome.is_success());
    assert_eq!(outcome.error(), Some("email taken"));
}

#[tokio::test]
async fn test_register_error_with_failure_status() {
    let gateway = FakeGateway::new()
        .json(
            Method::POST,
            "/user/register",
            409,
            json!({"error": "username taken"}),
        )
        .start()
        .await;
    let (client, _) = gateway.client();

    let outcome = client.users.register_user(&new_user()).await.unwrap();
    assert_eq!(outcome, AuthOutcome::rejected("username taken"));
}

#[tokio::test]
async fn test_register_without_message_or_error_fails() {
    let gateway = FakeGateway::new()
        .json(Method::POST, "/user/register", 200, json!({}))
        .start()
        .await;
    let (client, _) = gateway.client();

    let outcome = client.users.register_user(&new_user()).await.unwrap();
    assert_eq!(outcome, AuthOutcome::rejected("Registration failed"));
}

#[tokio::test]
async fn test_register_validates_before_sending() {
    let gateway = FakeGateway::new().start().await;
    let (client, _) = gateway.client();

    let user = NewUser {
        email: "ada-at-example".to_string(),
        ..new_user()
    };
    let outcome = client.users.register_user(&user).await.unwrap();

    assert_eq!(outcome.error(), Some("Email is not valid"));
    assert!(gateway.requests().is_empty());
}

#[tokio::test]
async fn test_login_stores_token() {
    let gateway = FakeGateway::new()
        .json(Method::POST, "/user/login", 200, json!({"token": "abc"}))
        .start()
        .await;
    let (client, _) = gateway.client();
    assert!(!client.users.is_authenticated());

    let outcome = client.users.login_user(&credentials()).await.unwrap();

    assert!(outcome.is_success());
    assert!(client.users.is_authenticated());
    assert_eq!(client.session.get_token().as_deref(), Some("abc"));
    assert_eq!(
        gateway.single_request().body.unwrap(),
        json!({"username": "ada", "password": "engine"})
    );
}

#[tokio::test]
async fn test_failed_login_keeps_prior_session() {
    let gateway = FakeGateway::new()
        .json(
            Method::POST,
            "/user/login",
            200,
            json!({"error": "bad credentials"}),
        )
        .start()
        .await;
    let (client, _) = gateway.client();
    client.session.set_token("previous");

    let outcome = client.users.login_user(&credentials()).await.unwrap();

    assert_eq!(outcome.error(), Some("bad credentials"));
    assert_eq!(client.session.get_token().as_deref(), Some("previous"));
}

#[tokio::test]
async fn test_failed_login_without_session_stays_logged_out() {
    let gateway = FakeGateway::new()
        .json(
            Method::POST,
            "/user/login",
            401,
            json!({"error": "bad credentials"}),
        )
        .start()
        .await;
    let (client, store) = gateway.client();

    let outcome = client.users.login_user(&credentials()).await.unwrap();

    assert!(!outcome.is_success());
    assert!(!client.users.is_authenticated());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_login_without_token_is_rejected() {
    let gateway = FakeGateway::new()
        .json(Method::POST, "/user/login", 200, json!({"user": "ada"}))
        .start()
        .await;
    let (client, _) = gateway.client();

    let outcome = client.users.login_user(&credentials()).await.unwrap();

    assert_eq!(outcome, AuthOutcome::rejected("Login failed"));
    assert!(!client.users.is_authenticated());
}

#[tokio::test]
async fn test_login_server_error_is_rejection() {
    let gateway = FakeGateway::new()
        .raw(Method::POST, "/user/login", 500, "")
        .start()
        .await;
    let (client, _) = gateway.client();

    let outcome = client.users.login_user(&credentials()).await.unwrap();
    assert_eq!(outcome.error(), Some("Error 500"));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let gateway = FakeGateway::new()
        .json(Method::POST, "/user/login", 200, json!({"token": "abc"}))
        .start()
        .await;
    let (client, _) = gateway.client();

    client.users.login_user(&credentials()).await.unwrap();
    client.users.logout_user();

    assert!(!client.users.is_authenticated());
    assert_eq!(client.session.get_token(), None);
}

#[tokio::test]
async fn test_login_transport_failure_is_error() {
    let (client, _) = client_for(&unreachable_base_url());

    let err = client.users.login_user(&credentials()).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_login_persists_token_to_file_store() {
    let gateway = FakeGateway::new()
        .json(Method::POST, "/user/login", 200, json!({"token": "abc"}))
        .start()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let config = Config {
        api_gateway_url: gateway.base_url.clone(),
        ..Config::test_default()
    };
    let client = RecipyClient::new(config, Arc::new(FileStore::new(&path))).unwrap();

    let outcome = client.users.login_user(&credentials()).await.unwrap();
    assert!(outcome.is_success());

    let reopened = AuthService::new(Arc::new(FileStore::new(&path)));
    assert_eq!(reopened.get_token().as_deref(), Some("abc"));
}
