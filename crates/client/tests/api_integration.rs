//! End-to-end operation tests against a mock identity service.

use authgate_client::{
    AuthClient, AuthError, AuthorizeOptions, ClientConfig, OidcCredentials, Provider,
};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AuthClient {
    let mut headers = HeaderMap::new();
    headers.insert("apikey", HeaderValue::from_static("service-key"));

    let config = ClientConfig::builder().base_url(server.uri()).default_headers(headers).build();
    AuthClient::new(config).unwrap()
}

#[tokio::test]
async fn session_lifecycle_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(query_param("grant_type", "id_token"))
        .and(body_json(json!({"id_token": "jwt"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at1",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "rt1",
            "user": {"id": "u1"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(query_param("grant_type", "refresh_token"))
        .and(body_json(json!({"refresh_token": "rt1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at2",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "rt2"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/logout"))
        .and(header("authorization", "Bearer at2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let session = client.sign_in_with_oidc(&OidcCredentials::new("jwt")).await.unwrap();
    assert_eq!(session.access_token, "at1");
    assert!(session.expires_at.is_some());

    let refreshed =
        client.refresh_access_token(session.refresh_token.as_deref().unwrap()).await.unwrap();
    assert_eq!(refreshed.access_token, "at2");

    client.sign_out(&refreshed.access_token).await.unwrap();
}

#[tokio::test]
async fn session_without_lifetime_has_no_expiry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let session = client.refresh_access_token("rt").await.unwrap();

    assert!(session.expires_in.is_none());
    assert!(session.expires_at.is_none());
}

#[tokio::test]
async fn operations_share_the_client_without_coordination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"users": [{"id": "1"}, {"id": "2"}]})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let admin = client.admin();

    let (listed, fetched, refreshed) = tokio::join!(
        admin.list_users(),
        admin.get_user_by_id("1"),
        client.refresh_access_token("rt"),
    );

    assert_eq!(listed.unwrap().len(), 2);
    assert_eq!(fetched.unwrap().id, "1");
    assert_eq!(refreshed.unwrap().access_token, "at");
}

#[tokio::test]
async fn connection_failures_propagate_as_transport_errors() {
    // Nothing is listening on this port once the server is dropped.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let config = ClientConfig::builder().base_url(uri).build();
    let client = AuthClient::new(config).unwrap();

    let error = client.refresh_access_token("rt").await.unwrap_err();
    assert!(matches!(error, AuthError::Http(_)));
}

#[tokio::test]
async fn provider_url_never_touches_the_network() {
    // A server with no mounted mocks would fail any request it received.
    let server = MockServer::start().await;
    let client = client_for(&server);

    let url = client.provider_url(
        Provider::Github,
        &AuthorizeOptions {
            redirect_to: Some("https://a.example/cb".to_string()),
            ..AuthorizeOptions::default()
        },
    );

    assert!(url.ends_with("/authorize?provider=github&redirect_to=https%3A%2F%2Fa.example%2Fcb"));
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}
