//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use lambda_runtime::{Context, LambdaEvent};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing_subscriber::fmt::format::FmtSpan;

/// Request heads received by a mock backend, in arrival order.
pub type RecordedRequests = Arc<Mutex<Vec<String>>>;

/// Start a mock backend that records each request head and returns `body`.
///
/// When `declared_len` exceeds the body length, the connection is closed early
/// so the client sees a truncated body.
pub async fn start_mock_backend(
    body: &'static str,
    declared_len: Option<usize>,
) -> (SocketAddr, RecordedRequests) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests: RecordedRequests = Arc::default();
    let recorded = requests.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let recorded = recorded.clone();
                    tokio::spawn(async move {
                        let head = read_head(&mut socket).await;
                        recorded.lock().unwrap().push(head);

                        let response_str = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            declared_len.unwrap_or(body.len()),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, requests)
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

/// Client that never routes through an environment proxy.
pub fn direct_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// API Gateway event with the given X-Ray trace id on its context.
pub fn proxy_event(trace_id: Option<&str>) -> LambdaEvent<ApiGatewayProxyRequest> {
    let mut context = Context::default();
    context.request_id = "integration-req".to_string();
    context.xray_trace_id = trace_id.map(str::to_string);
    LambdaEvent::new(ApiGatewayProxyRequest::default(), context)
}

/// Log output captured from a thread-local subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route this thread's tracing output into a buffer until the guard drops.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    capture_logs_with_spans(FmtSpan::NONE)
}

/// Like [`capture_logs`], also writing the given span lifecycle events.
pub fn capture_logs_with_spans(
    span_events: FmtSpan,
) -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_span_events(span_events)
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
