use axum::{extract::State, http::StatusCode, Json};

use crate::{
    domain::entities::PostResponse,
    infrastructure::http::extractors::{PostId, ValidatedPost},
    infrastructure::http::middleware::{ApiResult, AppState},
    infrastructure::http::response::BaseResponse,
};

/// GET /api/posts - List all posts
pub async fn list_posts(
    State(state): State<AppState>,
) -> ApiResult<Json<BaseResponse<Vec<PostResponse>>>> {
    let posts = state.post_service.get_posts().await?;

    Ok(Json(BaseResponse::ok(posts)))
}

/// POST /api/posts - Create a new post
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedPost(draft): ValidatedPost,
) -> ApiResult<(StatusCode, Json<BaseResponse<()>>)> {
    state.post_service.create_post(draft).await?;

    Ok((StatusCode::CREATED, Json(BaseResponse::result("created"))))
}

/// GET /api/posts/:id - Get post by ID
pub async fn get_post(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> ApiResult<Json<BaseResponse<PostResponse>>> {
    let post = state.post_service.get_post(id).await?;

    Ok(Json(BaseResponse::ok(post)))
}

/// PUT /api/posts/:id - Update post and reconcile its tags
pub async fn update_post(
    State(state): State<AppState>,
    PostId(id): PostId,
    ValidatedPost(draft): ValidatedPost,
) -> ApiResult<Json<BaseResponse<()>>> {
    state.post_service.update_post(id, draft).await?;

    Ok(Json(BaseResponse::result("updated")))
}

/// DELETE /api/posts/:id - Delete post
pub async fn delete_post(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> ApiResult<Json<BaseResponse<()>>> {
    state.post_service.delete_post(id).await?;

    Ok(Json(BaseResponse::result("deleted")))
}
