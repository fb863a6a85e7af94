//! # HTTP Layer
//!
//! A JSON API over [`TriviaApi`]. Routes:
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET | `/categories` | category labels |
//! | GET | `/questions?page=N` | listing page |
//! | POST | `/questions?page=N` | search (`searchTerm`) or create |
//! | GET | `/questions/{id}` | one question |
//! | DELETE | `/questions/{id}?page=N` | delete |
//! | GET | `/categories/{id}/questions?page=N` | questions of one category |
//! | POST | `/quizzes` | next quiz question |
//!
//! Every response carries the CORS headers below. `OPTIONS` preflights are
//! answered directly. Unknown routes and wrong methods get the usual failure
//! envelope, rendered by `ApiError`.
//!
//! The facade sits behind a `std::sync::Mutex`. Handlers hold the lock for one
//! synchronous store call and never across an `.await`.

mod error;
mod handlers;

use anyhow::Result;
use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::info;
use triviaapp::api::TriviaApi;
use triviaapp::store::DataStore;

pub type SharedApi<S> = Arc<Mutex<TriviaApi<S>>>;

const ALLOW_HEADERS: &str = "Content-Type, Authorization";
const ALLOW_METHODS: &str = "GET, PATCH, DELETE, OPTIONS, POST, PUT";

pub fn router<S: DataStore + Send + 'static>(api: TriviaApi<S>) -> Router {
    let state: SharedApi<S> = Arc::new(Mutex::new(api));

    Router::new()
        .route("/categories", get(handlers::categories::<S>))
        .route(
            "/categories/{id}/questions",
            get(handlers::questions_by_category::<S>),
        )
        .route(
            "/questions",
            get(handlers::list_questions::<S>).post(handlers::post_questions::<S>),
        )
        .route(
            "/questions/{id}",
            get(handlers::get_question::<S>).delete(handlers::delete_question::<S>),
        )
        .route("/quizzes", post(handlers::play_quiz::<S>))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(middleware::from_fn(log_request))
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

pub async fn serve<S: DataStore + Send + 'static>(
    listener: TcpListener,
    api: TriviaApi<S>,
) -> Result<()> {
    axum::serve(listener, router(api))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    response
}
