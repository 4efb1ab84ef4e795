use crate::application::services::PostService;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub post_service: PostService,
}
