//! 传输层集成测试：Bearer 注入与 401 处理

use ai_tutor_client::config::{ApiConfig, AuthConfig, ClientConfig, MockConfig};
use ai_tutor_client::error::ClientError;
use ai_tutor_client::mock::MockProvider;
use ai_tutor_client::security::{
    FileTokenStore, MemoryTokenStore, TokenStore, token_store_from_config,
};
use ai_tutor_client::services::ApiService;
use ai_tutor_client::transport::{HttpTransport, NO_QUERY};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..ApiConfig::default()
    }
}

#[tokio::test]
async fn test_bearer_token_attached_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/students/1"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::with_token("secret-token"));
    let transport = HttpTransport::new(&api_config(&server.uri()), tokens).unwrap();
    let body: Value = transport.get_json("/v1/students/1", NO_QUERY).await.unwrap();
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let transport =
        HttpTransport::new(&api_config(&server.uri()), Arc::new(MemoryTokenStore::new())).unwrap();
    let _: Value = transport.get_json("/v1/students", NO_QUERY).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_401_clears_persisted_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/students/1/stats"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "token expired"})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("storage.json");
    std::fs::write(&storage, r#"{"auth_token":"stale","theme":"dark"}"#).unwrap();

    let config = ClientConfig {
        api: api_config(&server.uri()),
        auth: AuthConfig {
            token_path: Some(storage.clone()),
            ..AuthConfig::default()
        },
        mock: MockConfig {
            enabled: false,
            ..MockConfig::deterministic(1)
        },
        ..ClientConfig::default()
    };
    let tokens = token_store_from_config(&config.auth);
    let transport = HttpTransport::new(&config.api, tokens.clone()).unwrap();
    let service = ApiService::new(&config, transport, MockProvider::seeded(1));

    let stats = service.get_student_stats(1).await;
    assert_eq!(
        stats.error(),
        Some(&ClientError::Unauthorized("token expired".into()))
    );
    assert_eq!(tokens.get().unwrap(), None);

    let reopened = FileTokenStore::new(&storage, "auth_token");
    assert_eq!(reopened.get().unwrap(), None);
    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&storage).unwrap()).unwrap();
    assert_eq!(raw["theme"], "dark");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].headers.get("authorization").unwrap(),
        "Bearer stale"
    );
}

#[rstest]
#[case(200)]
#[case(404)]
#[case(500)]
#[tokio::test]
async fn test_other_statuses_keep_token(#[case] status: u16) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("keep-me"));
    let transport = HttpTransport::new(&api_config(&server.uri()), tokens.clone()).unwrap();
    let result = transport.get_status("/health").await;

    assert_eq!(result.is_ok(), status == 200);
    assert_eq!(tokens.get().unwrap().as_deref(), Some("keep-me"));
}

#[tokio::test]
async fn test_report_download_keeps_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/homework/analysis_7/report"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"%PDF-1.4".to_vec())
                .insert_header("content-type", "application/pdf"),
        )
        .mount(&server)
        .await;

    let transport =
        HttpTransport::new(&api_config(&server.uri()), Arc::new(MemoryTokenStore::new())).unwrap();
    let blob = transport
        .get_bytes("/v1/homework/analysis_7/report")
        .await
        .unwrap();
    assert_eq!(blob.content_type, "application/pdf");
    assert_eq!(blob.bytes, b"%PDF-1.4");
}
