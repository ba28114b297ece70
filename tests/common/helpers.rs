#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, StreamExt};
use kgutils::http::{Transport, TransportResponse};
use kgutils::progress::{ProgressSink, ProgressSnapshot};
use kgutils::{Download, Error, Result};
use reqwest::Url;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path as url_path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Common test constants
pub const TEST_URL: &str = "http://domain.com/file.bin";

/// Installs a test subscriber; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Creates a download for the common test URL written into `dir`.
pub fn create_test_download(dir: &Path) -> Download {
    Download::try_from(TEST_URL)
        .expect("Failed to create test download")
        .with_destination(dir.join("file.bin"))
}

/// Asserts that a file has exactly the expected content
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let content = std::fs::read(path).expect("Failed to read downloaded file");
    assert_eq!(content, expected, "File content mismatch at path: {:?}", path);
}

// === Mock transport ===

/// Transport serving a fixed list of chunks, optionally failing afterwards.
#[derive(Clone, Default)]
pub struct MockTransport {
    content_length: Option<u64>,
    chunks: Vec<Bytes>,
    fail_after_chunks: Option<io::ErrorKind>,
    fail_to_connect: bool,
    calls: Arc<AtomicUsize>,
}

impl MockTransport {
    pub fn new(content_length: Option<u64>, chunks: &[&[u8]]) -> Self {
        Self {
            content_length,
            chunks: chunks.iter().map(|c| Bytes::copy_from_slice(c)).collect(),
            ..Self::default()
        }
    }

    /// Break the body stream once every chunk has been delivered.
    pub fn dropping_after_chunks(mut self) -> Self {
        self.fail_after_chunks = Some(io::ErrorKind::ConnectionReset);
        self
    }

    /// Refuse to open the response at all.
    pub fn refusing(mut self) -> Self {
        self.fail_to_connect = true;
        self
    }

    /// Counter of `fetch` calls, shared with clones.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(&self, _url: &Url) -> Result<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_to_connect {
            return Err(Error::from(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }

        let mut items: Vec<Result<Bytes>> = self.chunks.iter().cloned().map(Ok).collect();
        if let Some(kind) = self.fail_after_chunks {
            items.push(Err(Error::from(io::Error::new(kind, "connection dropped"))));
        }
        Ok(TransportResponse::new(
            self.content_length,
            stream::iter(items).boxed(),
        ))
    }
}

// === Recording sink ===

/// Sink keeping every event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub started: Option<(String, Option<u64>)>,
    pub snapshots: Vec<ProgressSnapshot>,
    pub finished: Option<ProgressSnapshot>,
}

impl ProgressSink for RecordingSink {
    fn start(&mut self, source: &str, total: Option<u64>) -> io::Result<()> {
        self.started = Some((source.to_string(), total));
        Ok(())
    }

    fn update(&mut self, snapshot: &ProgressSnapshot) -> io::Result<()> {
        self.snapshots.push(*snapshot);
        Ok(())
    }

    fn finish(&mut self, snapshot: &ProgressSnapshot) -> io::Result<()> {
        self.finished = Some(*snapshot);
        Ok(())
    }

    fn supports_redraw(&self) -> bool {
        false
    }
}

/// Sink whose output is gone, like a closed stdout pipe.
#[derive(Debug, Default)]
pub struct BrokenSink {
    pub calls: usize,
}

impl BrokenSink {
    fn fail(&mut self) -> io::Result<()> {
        self.calls += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }
}

impl ProgressSink for BrokenSink {
    fn start(&mut self, _source: &str, _total: Option<u64>) -> io::Result<()> {
        self.fail()
    }

    fn update(&mut self, _snapshot: &ProgressSnapshot) -> io::Result<()> {
        self.fail()
    }

    fn finish(&mut self, _snapshot: &ProgressSnapshot) -> io::Result<()> {
        self.fail()
    }

    fn supports_redraw(&self) -> bool {
        true
    }
}

// === Local HTTP responders ===

/// Starts a wiremock server answering `GET /<path>` with `template`.
pub async fn mock_server(path: &str, template: ResponseTemplate) -> (MockServer, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(url_path(format!("/{}", path)))
        .respond_with(template)
        .mount(&server)
        .await;
    let url = format!("{}/{}", server.uri(), path);
    (server, url)
}

/// Serves one raw HTTP response on a local port and returns the URL to `path`.
///
/// Used for responses a well-behaved server would not send: bodies delimited
/// by connection close, or bodies shorter than the declared length.
pub fn serve_once(response: Vec<u8>, path: &str) -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    listener
        .set_nonblocking(true)
        .expect("Failed to set listener non-blocking");
    let addr = listener.local_addr().expect("Failed to read local address");

    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_io()
            .build()
            .expect("Failed to build responder runtime");
        runtime.block_on(async move {
            let listener = TcpListener::from_std(listener).expect("Failed to adopt listener");
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = socket.write_all(&response).await;
                let _ = socket.shutdown().await;
            }
        });
    });

    format!("http://{}/{}", addr, path)
}

/// A 200 response with a `Content-Length` header.
pub fn response_with_length(body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// A 200 response delimited by connection close, without `Content-Length`.
pub fn response_without_length(body: &[u8]) -> Vec<u8> {
    let mut response = b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n".to_vec();
    response.extend_from_slice(body);
    response
}

/// A 200 response declaring `declared` bytes but carrying only `body`.
pub fn response_truncated(declared: u64, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        declared
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// Path inside `dir` for a downloaded file.
pub fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
