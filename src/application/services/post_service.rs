use crate::{
    domain::entities::*,
    domain::errors::{DomainError, DomainResult},
    domain::ports::post_repository::PostRepository,
};
use std::collections::HashSet;
use std::sync::Arc;

const ENTITY: &str = "post";

/// Service for post CRUD and tag reconciliation
#[derive(Clone)]
pub struct PostService {
    post_repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(post_repo: Arc<dyn PostRepository>) -> Self {
        Self { post_repo }
    }

    pub async fn get_posts(&self) -> DomainResult<Vec<PostResponse>> {
        let posts = self.post_repo.get_posts().await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    pub async fn get_post(&self, id: i64) -> DomainResult<PostResponse> {
        let post = self.find_post(id).await?;
        Ok(PostResponse::from(post))
    }

    pub async fn create_post(&self, draft: PostDraft) -> DomainResult<i64> {
        let id = self.post_repo.create_post(&draft).await?;
        tracing::info!(post_id = id, tags = draft.tags.len(), "Post created");
        Ok(id)
    }

    /// Update a post's fields and reconcile its tags against the requested labels.
    pub async fn update_post(&self, id: i64, draft: PostDraft) -> DomainResult<()> {
        let post = self.find_post(id).await?;

        let stale = tags_to_remove(&post.tags, &draft.tags);

        self.post_repo
            .update_post(id, &draft, &stale)
            .await
            .map_err(|err| DomainError::from_lookup(err, ENTITY, id))?;

        tracing::info!(
            post_id = id,
            removed_tags = stale.len(),
            requested_tags = draft.tags.len(),
            "Post updated"
        );
        Ok(())
    }

    pub async fn delete_post(&self, id: i64) -> DomainResult<()> {
        let post = self.find_post(id).await?;

        self.post_repo
            .delete_post(post.id)
            .await
            .map_err(|err| DomainError::from_lookup(err, ENTITY, id))?;

        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }

    async fn find_post(&self, id: i64) -> DomainResult<Post> {
        self.post_repo
            .get_post(id)
            .await
            .map_err(|err| DomainError::from_lookup(err, ENTITY, id))
    }
}

/// Ids of currently attached tags whose label is absent from the requested labels.
///
/// Matching is exact string equality on labels. Tags present on both sides are
/// left untouched.
pub fn tags_to_remove(current: &[Tag], requested: &[String]) -> Vec<i64> {
    let requested: HashSet<&str> = requested.iter().map(String::as_str).collect();

    current
        .iter()
        .filter(|tag| !requested.contains(tag.label.as_str()))
        .map(|tag| tag.id)
        .collect()
}
