use crate::application::services::PostService;
use crate::domain::ports::post_repository::PostRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use std::sync::Arc;

/// Wire repositories into services and services into the handler state.
pub fn build_app_state(db: Database) -> AppState {
    let post_repo = Arc::new(db) as Arc<dyn PostRepository>;
    let post_service = PostService::new(post_repo);
    tracing::info!("Post service initialized");

    AppState { post_service }
}
