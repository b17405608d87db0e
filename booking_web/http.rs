use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use booking_app::{AppBus, config::Config};
use booking_types::errors::{AppError, ApplicationError};

use crate::handlers::{
    create_airport, delete_airport, delete_passenger, get_airport, get_passenger, login, logout,
    me, register, register_passenger,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
    pub cookie_key: Key,
    /// Root of every request's cancellation token; cancelled on shutdown.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(
        app_bus: Arc<AppBus>,
        config: &Config,
        shutdown: CancellationToken,
    ) -> Result<AppState, ApplicationError> {
        let cookie_key = Key::try_from(config.auth_cookie_secret.as_bytes())
            .map_err(|e| AppError::InvalidConfig(format!("cookie secret: {e}")))?;

        Ok(AppState {
            app_bus,
            cookie_key,
            shutdown,
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        let api = Router::new()
            .route("/identity/register", post(register))
            .route("/identity/login", post(login))
            .route("/identity/logout", post(logout))
            .route("/identity/me", get(me))
            .route("/flight/airport", post(create_airport))
            .route(
                "/flight/airport/{id}",
                get(get_airport).delete(delete_airport),
            )
            .route("/passenger", post(register_passenger))
            .route(
                "/passenger/{id}",
                get(get_passenger).delete(delete_passenger),
            );

        let base = state.app_bus.config().api_base.clone();
        let router = if base.is_empty() {
            api
        } else {
            Router::new().nest(&base, api)
        };

        router
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;
        Self::serve_on(state, listener).await
    }

    /// Serves on an already bound listener until the shutdown token fires.
    pub async fn serve_on(state: AppState, listener: TcpListener) -> Result<(), ApplicationError> {
        let addr = listener.local_addr().map_err(infra_error)?;
        let shutdown = state.shutdown.clone();
        let router = Self::router(state);

        tracing::info!("HTTP Server started, listening on http://{addr}");
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.cancelled_owned())
            .await
            .map_err(infra_error)?;

        tracing::info!("HTTP Server stopped");
        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
