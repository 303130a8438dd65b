use axum::{
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация API-роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/contact", post(handlers::contact::send))
        .layer(middleware::from_fn(request_logger))
}

/// Простой middleware для логирования запросов
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    tracing::info!(
        "{:>5}ms | {} {:>6} {}",
        start.elapsed().as_millis(),
        response.status().as_u16(),
        method,
        uri.path()
    );

    response
}
