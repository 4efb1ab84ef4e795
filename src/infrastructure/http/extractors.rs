use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use std::num::ParseIntError;

use crate::domain::entities::{CreateOrUpdatePostRequest, PostDraft};
use crate::infrastructure::http::middleware::ApiError;

/// Positive integer `:id` path segment.
#[derive(Debug, Clone, Copy)]
pub struct PostId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        parse_post_id(&raw).map(PostId)
    }
}

pub fn parse_post_id(raw: &str) -> Result<i64, ApiError> {
    let id: i64 = raw
        .parse()
        .map_err(|e: ParseIntError| ApiError::BadRequest(format!("invalid id {:?}: {}", raw, e)))?;

    if id <= 0 {
        return Err(ApiError::BadRequest("id must be greater than 0".to_string()));
    }

    Ok(id)
}

/// JSON post body that already passed field validation.
#[derive(Debug)]
pub struct ValidatedPost(pub PostDraft);

#[async_trait]
impl<S> FromRequest<S> for ValidatedPost
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<CreateOrUpdatePostRequest>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        payload
            .validate()
            .map(ValidatedPost)
            .map_err(ApiError::Validation)
    }
}

/// Bad or mistyped JSON is a 400; content-type and body-size failures keep their own status.
fn json_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            ApiError::BadRequest(rejection.body_text())
        }
        other => ApiError::Rejected(other.status(), other.body_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_id() {
        assert_eq!(parse_post_id("42").unwrap(), 42);
        assert!(matches!(parse_post_id("abc"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_post_id("1212aasas"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_post_id("0"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_post_id("-3"), Err(ApiError::BadRequest(_))));
    }
}
