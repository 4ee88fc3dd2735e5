// Server loop module
// Accepts connections until shutdown is requested, then closes them gracefully

use hyper_util::server::graceful::GracefulShutdown;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections until `shutdown` is notified
///
/// Open connections are then told to finish their in-flight request and
/// close; idle keep-alive connections close straight away. Whatever is
/// still open after `connection_timeout` is abandoned.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
    shutdown: Arc<Notify>,
) {
    let graceful = GracefulShutdown::new();

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections, &graceful);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                break;
            }
        }
    }

    // Stop accepting before closing in-flight connections
    drop(listener);
    logger::log_shutdown(active_connections.load(Ordering::SeqCst));

    let grace = Duration::from_secs(state.config.performance.connection_timeout);
    if tokio::time::timeout(grace, graceful.shutdown()).await.is_err() {
        logger::log_warning(&format!(
            "Shutdown grace period elapsed with {} connection(s) open",
            active_connections.load(Ordering::SeqCst)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    #[tokio::test]
    async fn test_shutdown_closes_idle_keep_alive_connections() {
        let mut config = Config::load_from("nonexistent-config", &config::Map::new()).unwrap();
        config.performance.keep_alive = true;
        config.performance.connection_timeout = 10;
        let state = Arc::new(AppState::new(config));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());
        let server = tokio::spawn(start_server_loop(
            listener,
            state,
            Arc::new(AtomicUsize::new(0)),
            Arc::clone(&shutdown),
        ));

        let mut client = TcpStream::connect(addr).await.unwrap();
        client
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 4096];
        while !String::from_utf8_lossy(&received).contains("healthy") {
            let n = client.read(&mut buf).await.unwrap();
            assert_ne!(n, 0, "connection closed before the response arrived");
            received.extend_from_slice(&buf[..n]);
        }

        // The connection is now idle but kept alive
        shutdown.notify_one();
        tokio::time::timeout(Duration::from_secs(3), server)
            .await
            .expect("shutdown waited on an idle connection")
            .unwrap();

        let n = tokio::time::timeout(Duration::from_secs(1), client.read(&mut buf))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(n, 0);
    }
}
