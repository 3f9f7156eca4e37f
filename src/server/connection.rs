// Connection handling module
// Accepts a single TCP connection and serves it with hyper until it goes
// idle, shutdown drains it, or the peer closes it

use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;
use tokio::sync::Notify;
use tokio::time::{sleep, Instant};

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept and process a connection, enforcing the connection limit.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state (holds the active connection counter)
pub fn accept_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
) {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = state.active_connections.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            // Exceeded limit: rollback counter and reject
            state.active_connections.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection from {peer_addr} rejected."
            ));
            drop(stream);
            return;
        }
    }

    logger::log_connection_accepted(&peer_addr);

    handle_connection(stream, peer_addr, Arc::clone(state));
}

/// Serve a single connection in a spawned task.
///
/// The active connection counter is decremented when the task finishes.
fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    tokio::spawn(async move {
        serve(stream, peer_addr, &state).await;
        state.active_connections.fetch_sub(1, Ordering::SeqCst);
    });
}

/// Drive the hyper connection to completion.
///
/// A connection idle for `keep_alive_timeout` (or `max(read_timeout,
/// write_timeout)` with keep-alive disabled) is closed gracefully, as is
/// every connection once shutdown starts draining. After a close has been
/// requested the connection has `max(read_timeout, write_timeout)` to finish
/// its current response before it is dropped.
async fn serve(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    let io_timeout = state.config.connection_timeout();
    let keep_alive = state.config.keep_alive_timeout();
    let idle_timeout = keep_alive.unwrap_or(io_timeout);

    let mut builder = http1::Builder::new();
    builder.keep_alive(keep_alive.is_some());

    let activity = Arc::new(Notify::new());
    let service_activity = Arc::clone(&activity);
    let service_state = Arc::clone(state);
    let conn = builder.serve_connection(
        TokioIo::new(stream),
        service_fn(move |req| {
            service_activity.notify_one();
            handler::handle_request(req, Arc::clone(&service_state), peer_addr)
        }),
    );
    let mut conn = std::pin::pin!(conn);

    let mut draining = state.draining.subscribe();
    let idle = sleep(idle_timeout);
    let hard_deadline = sleep(io_timeout);
    tokio::pin!(idle);
    tokio::pin!(hard_deadline);
    let mut closing = false;

    loop {
        tokio::select! {
            result = conn.as_mut() => {
                if let Err(err) = result {
                    logger::log_connection_error(&err);
                }
                return;
            }

            () = activity.notified(), if !closing => {
                idle.as_mut().reset(Instant::now() + idle_timeout);
            }

            () = &mut idle, if !closing => {
                if keep_alive.is_some() {
                    logger::log_keep_alive_expired(&peer_addr);
                }
                conn.as_mut().graceful_shutdown();
                closing = true;
                hard_deadline.as_mut().reset(Instant::now() + io_timeout);
            }

            _ = draining.wait_for(|draining| *draining), if !closing => {
                conn.as_mut().graceful_shutdown();
                closing = true;
                hard_deadline.as_mut().reset(Instant::now() + io_timeout);
            }

            () = &mut hard_deadline, if closing => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} did not close within {} seconds; dropping it",
                    io_timeout.as_secs()
                ));
                return;
            }
        }
    }
}
