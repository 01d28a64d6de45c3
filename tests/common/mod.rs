//! Shared mock HTTP backend for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a mock backend on an ephemeral port that answers every request
/// with a fixed status line, content type and body. Returns the bound
/// address.
pub async fn start_mock_backend(
    status_line: &'static str,
    content_type: Option<&'static str>,
    body: &'static str,
) -> SocketAddr {
    let (addr, _requests) = start_counting_backend(status_line, content_type, body).await;
    addr
}

/// Like [`start_mock_backend`], but also returns a counter of requests
/// served. Every response closes the connection, so each request arrives
/// on its own connection.
pub async fn start_counting_backend(
    status_line: &'static str,
    content_type: Option<&'static str>,
    body: &'static str,
) -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(AtomicUsize::new(0));
    let served = requests.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    served.fetch_add(1, Ordering::SeqCst);
                    tokio::spawn(async move {
                        // Drain the request head before answering.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let content_type_header = content_type
                            .map(|ct| format!("Content-Type: {}\r\n", ct))
                            .unwrap_or_default();
                        let response = format!(
                            "HTTP/1.1 {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line,
                            content_type_header,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, requests)
}
