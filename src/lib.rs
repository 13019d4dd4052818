use std::any::Any;
use std::error::Error;
use std::future::IntoFuture;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{middleware as axum_middleware, Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, watch};
use tokio::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};

use app_state::AppState;
use lifecycle::{
    termination_signal, DrainError, FaultReporter, Lifecycle, LifecycleState, ShutdownCause,
};
use middleware::{log_requests, request_id, require_auth};
use routes::{login, status, upload, user_data};
use utils::{JSON_BODY_LIMIT_BYTES, SHUTDOWN_GRACE_SECONDS};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod lifecycle;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

pub fn app_router(app_state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/user-data", get(user_data))
        .route("/api/storage/upload", post(upload))
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    let panic_handler = panic_response(app_state.config.is_production());

    Router::new()
        .route("/", get(status))
        .route("/api/login", post(login))
        .merge(protected)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_handler))
        .layer(cors_layer(app_state.config.frontend_url()))
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT_BYTES))
        .layer(axum_middleware::from_fn(log_requests))
        .layer(axum_middleware::from_fn(request_id))
        .with_state(app_state)
}

async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Rota não encontrada",
            "path": uri.path(),
            "method": method.as_str(),
        })),
    )
}

// Last line of defense: anything that panics past the per-route error
// enums becomes a JSON 500, with the panic message visible only outside
// production.
fn panic_response(
    is_production: bool,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone {
    move |err| {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            (*s).to_owned()
        } else {
            "panic sem mensagem".to_owned()
        };
        log::error!("unhandled panic while serving request: {}", detail);

        let body = if is_production {
            json!({ "error": "Erro interno no servidor" })
        } else {
            json!({ "error": "Erro interno no servidor", "details": detail })
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

fn cors_layer(frontend_url: &str) -> CorsLayer {
    let origin = match frontend_url.parse::<HeaderValue>() {
        Ok(value) => AllowOrigin::exact(value),
        Err(_) => {
            log::warn!("FRONTEND_URL is not a valid origin, allowing any");
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

// This struct encapsulates our application-related logic.
pub struct Application {
    listener: TcpListener,
    router: Router,
    state: AppState,
    lifecycle: Lifecycle,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state.clone());
        let listener = TcpListener::bind(address).await?;
        let address = format!("http://{}", listener.local_addr()?);

        // Listener is bound, so the lifecycle starts out Running.
        let lifecycle = Lifecycle::new();

        Ok(Self {
            listener,
            router,
            state: app_state,
            lifecycle,
            address,
        })
    }

    /// Handle for background tasks (and tests) to surface failures to the
    /// lifecycle.
    pub fn fault_reporter(&self) -> FaultReporter {
        self.lifecycle.reporter()
    }

    pub fn lifecycle_states(&self) -> watch::Receiver<LifecycleState> {
        self.lifecycle.subscribe()
    }

    /// Serves until a termination signal or fatal fault arrives, then runs
    /// the ordered drain. Returns the process exit code.
    pub async fn run(mut self) -> i32 {
        println!("listening on {}", &self.address);

        let (close_tx, close_rx) = oneshot::channel::<()>();
        let server = axum::serve(self.listener, self.router).with_graceful_shutdown(async move {
            let _ = close_rx.await;
        });
        let mut server_task = tokio::spawn(server.into_future());

        let (cause, server_died) = tokio::select! {
            cause = self.lifecycle.wait_for_trigger(termination_signal()) => (cause, None),
            joined = &mut server_task => {
                let detail = match joined {
                    Ok(Ok(())) => "server stopped unexpectedly".to_owned(),
                    Ok(Err(e)) => e.to_string(),
                    Err(e) => e.to_string(),
                };
                (ShutdownCause::Fault, Some(detail))
            }
        };
        log::info!("shutting down ({:?})", cause);

        let state = self.state;
        let cleanup = async move {
            // Ordered teardown: stop accepting connections, release the
            // provider handle, drop cached credentials, then wait for
            // in-flight requests.
            let _ = close_tx.send(());
            state.identity_service.close().await;
            state.token_cache.write().await.clear().await;

            match server_died {
                Some(detail) => Err(DrainError::Server(detail)),
                None => match server_task.await {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(e)) => Err(DrainError::Server(e.to_string())),
                    Err(e) => Err(DrainError::Server(e.to_string())),
                },
            }
        };

        self.lifecycle
            .drain(cleanup, Duration::from_secs(SHUTDOWN_GRACE_SECONDS))
            .await
    }
}
