//! Tests for the HTTP transport against local responders.

use futures::StreamExt;
use kgutils::http::{HttpClientConfig, HttpTransport, Transport};
use reqwest::Url;
use wiremock::ResponseTemplate;

mod common;
use common::helpers::*;

fn transport() -> HttpTransport {
    HttpTransport::new(HttpClientConfig {
        no_proxy: true,
        ..HttpClientConfig::default()
    })
    .expect("Failed to build transport")
}

async fn read_body(url: &str) -> (Option<u64>, Vec<u8>) {
    let response = transport().fetch(&Url::parse(url).unwrap()).await.unwrap();
    let length = response.content_length();
    let mut body = response.into_body();
    let mut content = Vec::new();
    while let Some(chunk) = body.next().await {
        content.extend_from_slice(&chunk.unwrap());
    }
    (length, content)
}

#[tokio::test]
async fn test_fetch_with_content_length() {
    let body = create_test_content(4096);
    let (_server, url) =
        mock_server("blob.bin", ResponseTemplate::new(200).set_body_bytes(body.clone())).await;

    let (length, content) = read_body(&url).await;
    assert_eq!(length, Some(4096));
    assert_eq!(content, body);
}

#[tokio::test]
async fn test_fetch_without_content_length() {
    let url = serve_once(response_without_length(b"streamed"), "stream");

    let (length, content) = read_body(&url).await;
    assert_eq!(length, None);
    assert_eq!(content, b"streamed");
}

#[tokio::test]
async fn test_error_status_is_transport_error() {
    let (_server, url) = mock_server("missing", ResponseTemplate::new(404)).await;

    let err = transport()
        .fetch(&Url::parse(&url).unwrap())
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let url = Url::parse(&format!("http://127.0.0.1:{}/file", port)).unwrap();

    let err = transport().fetch(&url).await.unwrap_err();
    assert!(err.is_transport());
}
