//! Router assembly and server lifecycle.

use crate::routes::{common_routes_with_ready, student_routes};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinError;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Drain window for in-flight requests after a shutdown signal.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Largest accepted request body. Enforced when the body extractors buffer, so an oversized
/// body is answered with the error envelope and 413.
pub const BODY_LIMIT: usize = 1024 * 1024;

/// Full application: common routes at the root, student routes under `/api`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api", student_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(BODY_LIMIT)),
        )
}

/// Serve `app` until `shutdown` resolves, then give in-flight requests `grace` to finish.
/// Returns early with the server's error if it stops on its own.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F, grace: Duration) -> io::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        res = &mut server => return flatten(res),
        () = shutdown => {}
    }

    tracing::info!("shutting down the server");
    let _ = stop_tx.send(());
    match tokio::time::timeout(grace, &mut server).await {
        Ok(res) => {
            flatten(res)?;
            tracing::info!("server shutdown successfully");
        }
        Err(_) => {
            server.abort();
            tracing::error!(grace_secs = grace.as_secs(), "failed to shutdown server: drain window elapsed");
        }
    }
    Ok(())
}

fn flatten(res: Result<io::Result<()>, JoinError>) -> io::Result<()> {
    res.map_err(io::Error::other)?
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
