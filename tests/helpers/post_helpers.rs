#![allow(dead_code)]
use postboard::domain::entities::PostDraft;
use postboard::infrastructure::persistence::Database;
use sqlx::Row;

pub fn draft(title: &str, content: &str, tags: &[&str]) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Create a test post and return its id
pub async fn create_test_post(db: &Database, title: &str, tags: &[&str]) -> i64 {
    db.create_post(&draft(title, "content", tags))
        .await
        .expect("Failed to create test post")
}

/// Row count of a table
pub async fn count_rows(db: &Database, table: &str) -> i64 {
    let row = sqlx::query(&format!("SELECT COUNT(*) AS count FROM {}", table))
        .fetch_one(db.pool())
        .await
        .expect("Failed to count rows");
    row.try_get("count").expect("Failed to read count")
}

/// Join rows for one post
pub async fn count_post_tags(db: &Database, post_id: i64) -> i64 {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM post_tags WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(db.pool())
        .await
        .expect("Failed to count post tags");
    row.try_get("count").expect("Failed to read count")
}

pub fn labels(tags: &[postboard::domain::entities::Tag]) -> Vec<&str> {
    tags.iter().map(|t| t.label.as_str()).collect()
}

/// Install a SQLite trigger that aborts every `event` (e.g. "INSERT ON post_tags")
pub async fn fail_on(db: &Database, name: &str, event: &str) {
    let sql = format!(
        "CREATE TRIGGER {} BEFORE {} BEGIN SELECT RAISE(ABORT, 'forced failure'); END",
        name, event
    );
    sqlx::query(&sql)
        .execute(db.pool())
        .await
        .expect("Failed to install trigger");
}
