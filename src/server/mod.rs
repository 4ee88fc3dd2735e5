// Server module entry
// Binds the listener, installs signal handlers and runs the accept loop

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is exposed as server_loop
#[path = "loop.rs"]
pub mod server_loop;

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use crate::config::{AppState, Config};
use crate::logger;

// Re-export commonly used types
pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;
pub use signal::SignalHandler;

/// Run the site until SIGTERM/SIGINT
///
/// # Errors
///
/// Fails if the configured address is invalid, cannot be bound, or signal
/// handlers cannot be registered.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.get_socket_addr()?;
    let listener = create_reusable_listener(addr)?;
    logger::log_server_start(&addr, &config);

    let state = Arc::new(AppState::new(config));
    let signals = Arc::new(SignalHandler::new());
    signal::start_signal_handler(Arc::clone(&signals))?;

    let active_connections = Arc::new(AtomicUsize::new(0));
    start_server_loop(
        listener,
        state,
        active_connections,
        Arc::clone(&signals.shutdown),
    )
    .await;

    tracing::info!("Server stopped");
    Ok(())
}
