//! End-to-end tests: a real HTTP request through the downloader to disk.

use kgutils::downloader::DownloaderBuilder;
use kgutils::progress::{AppendSink, RedrawSink};
use kgutils::utils::format_bytes;
use kgutils::Download;
use std::convert::TryFrom;
use wiremock::ResponseTemplate;

mod common;
use common::helpers::*;

#[tokio::test]
async fn test_end_to_end_download_workflow() {
    init_tracing();
    let temp_dir = create_temp_dir();
    let body = create_test_content(250_000);
    let (_server, url) = mock_server(
        "archive.bin",
        ResponseTemplate::new(200).set_body_bytes(body.clone()),
    )
    .await;

    let download = Download::try_from(url.as_str()).unwrap();
    let downloader = DownloaderBuilder::new()
        .directory(temp_dir.path().to_path_buf())
        .no_proxy()
        .build();

    let mut sink = RedrawSink::new(Vec::new());
    let summary = downloader
        .download_with_sink(&download, &mut sink)
        .await
        .unwrap();

    let expected_path = output_path(&temp_dir, "archive.bin");
    assert_eq!(summary.path(), expected_path);
    assert_file_content(&expected_path, &body);
    assert_eq!(summary.total(), Some(250_000));
    assert!(summary.is_complete());

    let out = String::from_utf8(sink.into_inner()).unwrap();
    let header = format!("Downloading {} ({})", url, format_bytes(250_000));
    assert!(out.starts_with(&header));
    assert!(out.contains("100.00% |"));
    assert!(out.ends_with('\n'));
}

#[tokio::test]
async fn test_end_to_end_without_length() {
    let temp_dir = create_temp_dir();
    let body = create_test_content(1234);
    let url = serve_once(response_without_length(&body), "stream.bin");

    let download = Download::try_from(url.as_str())
        .unwrap()
        .with_destination(output_path(&temp_dir, "renamed.bin"));
    let downloader = DownloaderBuilder::new()
        .chunk_size(100)
        .no_proxy()
        .build();

    let mut sink = AppendSink::new(Vec::new());
    let summary = downloader
        .download_with_sink(&download, &mut sink)
        .await
        .unwrap();

    assert_eq!(summary.total(), None);
    assert_eq!(summary.transferred(), 1234);
    assert_file_content(&output_path(&temp_dir, "renamed.bin"), &body);

    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert!(out.lines().count() >= 1 + 13);
    assert!(out.lines().all(|line| !line.contains('%')));
}

#[test]
fn test_end_to_end_blocking() {
    let temp_dir = create_temp_dir();
    let url = serve_once(response_with_length(b"hello world"), "hello.txt");

    let download = Download::try_from(url.as_str()).unwrap();
    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .no_proxy()
        .build();

    let summary = downloader.download_blocking(&download).unwrap();
    assert_eq!(summary.transferred(), 11);
    assert_file_content(&output_path(&temp_dir, "hello.txt"), b"hello world");
}

#[tokio::test]
async fn test_http_error_leaves_no_file() {
    let temp_dir = create_temp_dir();
    let (_server, url) = mock_server("broken.bin", ResponseTemplate::new(500)).await;

    let download = Download::try_from(url.as_str()).unwrap();
    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .no_proxy()
        .build();

    let err = downloader.download(&download).await.unwrap_err();
    assert!(err.is_transport());
    assert!(!output_path(&temp_dir, "broken.bin").exists());
}

#[tokio::test]
async fn test_connection_dropped_mid_transfer() {
    let temp_dir = create_temp_dir();
    let url = serve_once(response_truncated(100, b"0123456789"), "short.bin");

    let download = Download::try_from(url.as_str()).unwrap();
    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .no_proxy()
        .build();

    let err = downloader.download(&download).await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {:?}", err);
    assert_file_content(&output_path(&temp_dir, "short.bin"), b"0123456789");
}
