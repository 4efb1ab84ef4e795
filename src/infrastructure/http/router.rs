use crate::infrastructure::http::controllers::posts;
use crate::infrastructure::http::middleware::{ApiError, AppState};
use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use http::{header, HeaderValue, Method};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: AppState, allowed_origin: &str) -> Router {
    let api = Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/:id",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        );

    let router = Router::new()
        .route("/ping", get(ping_handler))
        .nest("/api", api)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http());

    let router = match HeaderValue::from_str(allowed_origin) {
        Ok(origin) => router.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(origin))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT]),
        ),
        Err(_) => {
            tracing::warn!("Invalid CORS origin {:?}, CORS layer disabled", allowed_origin);
            router
        }
    };

    router.with_state(state)
}

async fn ping_handler() -> &'static str {
    "pong"
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);
    ApiError::Internal("internal server error".to_string()).into_response()
}
