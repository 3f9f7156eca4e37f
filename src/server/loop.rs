// Server loop module
// Accepts connections until shutdown is requested, then releases the listener
// and drains open connections

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::time::Instant;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Run the accept loop.
///
/// Takes ownership of the listener; it is dropped (and the port released)
/// as soon as `shutdown` is notified. Open connections are then asked to
/// close after their current response, and `run` returns once none remain
/// or `shutdown_timeout` has elapsed.
pub async fn run(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            () = shutdown.notified() => break,

            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }
        }
    }

    drop(listener);
    logger::log_shutdown(state.active_connections.load(Ordering::SeqCst));

    state.draining.send_replace(true);
    let grace = state.config.shutdown_timeout();
    let remaining = wait_for_connections(&state, Instant::now() + grace).await;
    logger::log_drain_finished(remaining, grace);
}

/// Wait until every connection task has finished or `deadline` passes.
/// Returns the number of connections still open.
async fn wait_for_connections(state: &AppState, deadline: Instant) -> usize {
    loop {
        let active = state.active_connections.load(Ordering::SeqCst);
        if active == 0 || Instant::now() >= deadline {
            return active;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}
