//! Unit tests for the project endpoints

use super::*;

use pypi_core::utils::sha256_hex;
use pypi_core::CoreError;
use reqwest::StatusCode;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::ClientConfig;

fn client_for(server: &MockServer) -> PypiClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    PypiClient::with_config(config, None).unwrap()
}

#[test]
fn test_endpoint_paths() {
    assert_eq!(project_path("requests"), "pypi/requests/json");
    assert_eq!(project_path("zope.interface"), "pypi/zope%2Einterface/json");
    assert_eq!(release_path("requests", "1.0.0"), "pypi/requests/1%2E0%2E0/json");
    assert_eq!(release_path("a/b", "1.0+local"), "pypi/a%2Fb/1%2E0+local/json");
}

#[tokio::test]
async fn test_get_project_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pypi/requests/json"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "info": {"name": "requests", "version": "2.31.0"},
            "last_serial": 123,
            "releases": {},
            "urls": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let (project, response) = client.projects().get_project("requests").await.unwrap();

    assert_eq!(project.info.name, "requests");
    assert_eq!(project.info.version, "2.31.0");
    assert_eq!(project.last_serial, 123);
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_project_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pypi/nonexistent/json"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.projects().get_project("nonexistent").await.unwrap_err();

    assert!(err.is_not_found());
    assert!(err.suggestion().is_some());

    let response = err.response().expect("API errors carry the response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    match err {
        PypiError::Api(error) => {
            assert_eq!(error.body_text(), "Not Found");
            assert_eq!(error.response.url().path(), "/pypi/nonexistent/json");
        },
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_release_escapes_version_dots() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pypi/requests/1%2E0%2E0/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "info": {"name": "requests", "version": "1.0.0"},
            "last_serial": 456,
            "urls": [{
                "filename": "requests-1.0.0.tar.gz",
                "packagetype": "sdist",
                "python_version": "source",
                "size": 335548
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let (project, _) = client.projects().get_release("requests", "1.0.0").await.unwrap();

    assert_eq!(project.info.version, "1.0.0");
    assert_eq!(project.source_distribution().map(|f| f.size), Some(335548));

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.path(), "/pypi/requests/1%2E0%2E0/json");
}

#[tokio::test]
async fn test_dot_only_names_are_rejected_before_sending() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client.projects().get_release("requests", ".").await.unwrap_err();
    assert!(matches!(
        err,
        PypiError::InvalidPath { source: CoreError::DotSegment { .. }, .. }
    ));
    assert!(err.response().is_none());

    let err = client.projects().get_project("..").await.unwrap_err();
    assert!(matches!(
        err,
        PypiError::InvalidPath { source: CoreError::DotSegment { .. }, .. }
    ));
    assert!(err.response().is_none());

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_get_project_with_base_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mirror/pypi/flask/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "info": {"name": "Flask", "version": "3.0.0"}
        })))
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server);
    client.set_base_url(&format!("{}/mirror", mock_server.uri())).unwrap();

    let (project, _) = client.projects().get_project("flask").await.unwrap();
    assert_eq!(project.info.name, "Flask");
}

#[tokio::test]
async fn test_get_project_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pypi/requests/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.projects().get_project("requests").await.unwrap_err();

    assert!(matches!(err, PypiError::Decode { .. }));
    assert_eq!(err.status(), Some(StatusCode::OK));
}

#[tokio::test]
async fn test_download_file_verifies_digest() {
    let mock_server = MockServer::start().await;
    let content = b"PK\x03\x04 pretend wheel".to_vec();

    Mock::given(method("GET"))
        .and(path("/packages/demo-1.0-py3-none-any.whl"))
        .and(header("Accept", "*/*"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.clone()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut file = ReleaseFile {
        filename: "demo-1.0-py3-none-any.whl".to_string(),
        url: format!("{}/packages/demo-1.0-py3-none-any.whl", mock_server.uri()),
        size: content.len() as u64,
        ..Default::default()
    };
    file.digests.sha256 = Some(sha256_hex(&content));

    let (data, response) = client.projects().download_file(&file).await.unwrap();
    assert_eq!(data, content);
    assert_eq!(response.status(), StatusCode::OK);

    file.digests.sha256 = Some(sha256_hex(b"something else"));
    let err = client.projects().download_file(&file).await.unwrap_err();
    match err {
        PypiError::Integrity { response, source } => {
            assert_eq!(response.status(), StatusCode::OK);
            assert!(matches!(source, CoreError::IntegrityFailure { .. }));
        },
        other => panic!("Expected Integrity error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_download_file_without_digest() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/packages/old.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"zip".to_vec()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let file = ReleaseFile {
        filename: "old.zip".to_string(),
        url: format!("{}/packages/old.zip", mock_server.uri()),
        ..Default::default()
    };

    let err = client.projects().download_file(&file).await.unwrap_err();
    assert!(matches!(
        err,
        PypiError::Integrity { source: CoreError::MissingDigest { .. }, .. }
    ));
}
