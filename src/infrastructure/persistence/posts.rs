use crate::domain::entities::{Post, PostDraft, Tag};
use crate::domain::ports::post_repository::{PostRepository, RepositoryResult};
use crate::infrastructure::persistence::Database;
use sqlx::any::AnyRow;
use sqlx::{AnyConnection, Row};
use std::collections::HashMap;

impl Database {
    // ========== Post Operations ==========

    /// List all posts with tags, newest id first
    pub async fn get_posts(&self) -> RepositoryResult<Vec<Post>> {
        let rows = sqlx::query(
            "SELECT id, title, content
             FROM posts
             ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let tag_rows = sqlx::query(
            "SELECT pt.post_id, t.id, t.label
             FROM post_tags pt
             INNER JOIN tags t ON t.id = pt.tag_id
             ORDER BY t.id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut tags_by_post: HashMap<i64, Vec<Tag>> = HashMap::new();
        for row in tag_rows {
            let post_id: i64 = row.try_get("post_id")?;
            tags_by_post.entry(post_id).or_default().push(tag_from_row(&row)?);
        }

        let mut posts = Vec::with_capacity(rows.len());
        for row in rows {
            let mut post = post_from_row(&row)?;
            post.tags = tags_by_post.remove(&post.id).unwrap_or_default();
            posts.push(post);
        }

        Ok(posts)
    }

    /// Get post by ID with its tags
    pub async fn get_post(&self, id: i64) -> RepositoryResult<Post> {
        let row = sqlx::query(
            "SELECT id, title, content
             FROM posts
             WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        let mut post = post_from_row(&row)?;
        post.tags = self.get_post_tags(id).await?;

        Ok(post)
    }

    /// Get tags for a post
    pub async fn get_post_tags(&self, post_id: i64) -> RepositoryResult<Vec<Tag>> {
        let rows = sqlx::query(
            "SELECT t.id, t.label
             FROM tags t
             INNER JOIN post_tags pt ON t.id = pt.tag_id
             WHERE pt.post_id = $1
             ORDER BY t.id",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(tag_from_row).collect()
    }

    /// Get tag by label
    pub async fn get_tag_by_label(&self, label: &str) -> RepositoryResult<Option<Tag>> {
        let row = sqlx::query("SELECT id, label FROM tags WHERE label = $1")
            .bind(label)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(tag_from_row).transpose()
    }

    /// Create a post and attach its tags in one transaction
    pub async fn create_post(&self, post: &PostDraft) -> RepositoryResult<i64> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            "INSERT INTO posts (title, content)
             VALUES ($1, $2)
             RETURNING id",
        )
        .bind(&post.title)
        .bind(&post.content)
        .fetch_one(&mut *tx)
        .await?;
        let post_id: i64 = row.try_get("id")?;

        attach_tags(&mut tx, post_id, &post.tags).await?;

        tx.commit().await?;

        tracing::debug!("Post {} inserted with {} tags", post_id, post.tags.len());
        Ok(post_id)
    }

    /// Remove stale associations, update the post and attach requested tags atomically
    pub async fn update_post(
        &self,
        id: i64,
        post: &PostDraft,
        tags_to_remove: &[i64],
    ) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await?;

        if !tags_to_remove.is_empty() {
            let placeholders = (0..tags_to_remove.len())
                .map(|i| format!("${}", i + 2))
                .collect::<Vec<_>>()
                .join(", ");
            let delete_query = format!(
                "DELETE FROM post_tags WHERE post_id = $1 AND tag_id IN ({})",
                placeholders
            );

            let mut query = sqlx::query(&delete_query).bind(id);
            for tag_id in tags_to_remove {
                query = query.bind(*tag_id);
            }
            let removed = query.execute(&mut *tx).await?;

            tracing::debug!(
                "Removed {} tag associations from post {}",
                removed.rows_affected(),
                id
            );
        }

        let updated = sqlx::query(
            "UPDATE posts
             SET title = $1, content = $2
             WHERE id = $3",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        // Post disappeared after it was read
        if updated.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        attach_tags(&mut tx, id, &post.tags).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Delete a post together with its tag associations
    pub async fn delete_post(&self, id: i64) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        tx.commit().await?;
        Ok(())
    }
}

/// Get-or-create each label and link it to the post (idempotent).
async fn attach_tags(conn: &mut AnyConnection, post_id: i64, labels: &[String]) -> RepositoryResult<()> {
    for label in labels {
        let tag = get_or_create_tag(conn, label).await?;

        sqlx::query(
            "INSERT INTO post_tags (post_id, tag_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(post_id)
        .bind(tag.id)
        .execute(&mut *conn)
        .await?;

        tracing::debug!("Tag {} ({}) linked to post {}", tag.id, tag.label, post_id);
    }

    Ok(())
}

async fn get_or_create_tag(conn: &mut AnyConnection, label: &str) -> RepositoryResult<Tag> {
    sqlx::query(
        "INSERT INTO tags (label)
         VALUES ($1)
         ON CONFLICT (label) DO NOTHING",
    )
    .bind(label)
    .execute(&mut *conn)
    .await?;

    let row = sqlx::query("SELECT id, label FROM tags WHERE label = $1")
        .bind(label)
        .fetch_one(&mut *conn)
        .await?;

    tag_from_row(&row)
}

fn post_from_row(row: &AnyRow) -> RepositoryResult<Post> {
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        tags: Vec::new(),
    })
}

fn tag_from_row(row: &AnyRow) -> RepositoryResult<Tag> {
    Ok(Tag {
        id: row.try_get("id")?,
        label: row.try_get("label")?,
    })
}

// Repository trait implementation
#[async_trait::async_trait]
impl PostRepository for Database {
    async fn get_posts(&self) -> RepositoryResult<Vec<Post>> {
        self.get_posts().await
    }

    async fn create_post(&self, post: &PostDraft) -> RepositoryResult<i64> {
        self.create_post(post).await
    }

    async fn get_post(&self, id: i64) -> RepositoryResult<Post> {
        self.get_post(id).await
    }

    async fn update_post(
        &self,
        id: i64,
        post: &PostDraft,
        tags_to_remove: &[i64],
    ) -> RepositoryResult<()> {
        self.update_post(id, post, tags_to_remove).await
    }

    async fn delete_post(&self, id: i64) -> RepositoryResult<()> {
        self.delete_post(id).await
    }
}
