use crate::domain::entities::{Post, PostDraft};

/// Repository errors are the driver's own; callers inspect them for "no rows".
pub type RepositoryResult<T> = Result<T, sqlx::Error>;

/// Repository for posts and their tag associations
#[async_trait::async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts with their tags, newest id first
    async fn get_posts(&self) -> RepositoryResult<Vec<Post>>;

    /// Insert a post and get-or-create its tags atomically. Returns the new post id.
    async fn create_post(&self, post: &PostDraft) -> RepositoryResult<i64>;

    /// Single post with its tags; `RowNotFound` when absent
    async fn get_post(&self, id: i64) -> RepositoryResult<Post>;

    /// Drop the listed tag associations, update the scalar fields and
    /// get-or-create every requested tag, atomically
    async fn update_post(
        &self,
        id: i64,
        post: &PostDraft,
        tags_to_remove: &[i64],
    ) -> RepositoryResult<()>;

    /// Remove the post and all its tag associations atomically
    async fn delete_post(&self, id: i64) -> RepositoryResult<()>;
}
