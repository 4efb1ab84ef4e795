use serde::{Deserialize, Serialize};

use super::tag::Tag;

/// Post entity with its eagerly loaded tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<Tag>,
}

/// Validated post fields used for both create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

// ========== DTOs (Data Transfer Objects) ==========

/// Request body for creating or updating a post
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrUpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// A single failed field check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, "This field is required")
    }
}

impl CreateOrUpdatePostRequest {
    /// Check required fields and turn the request into a draft.
    ///
    /// Every failing field is reported, in declaration order.
    pub fn validate(self) -> Result<PostDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = self.title.filter(|t| !t.is_empty());
        if title.is_none() {
            errors.push(FieldError::required("Title"));
        }

        let content = self.content.filter(|c| !c.is_empty());
        if content.is_none() {
            errors.push(FieldError::required("Content"));
        }

        match &self.tags {
            None => errors.push(FieldError::required("Tags")),
            Some(tags) if tags.is_empty() => {
                errors.push(FieldError::new("Tags", "Should be greater than 0"))
            }
            Some(tags) => {
                for (i, tag) in tags.iter().enumerate() {
                    if tag.is_empty() {
                        errors.push(FieldError::required(format!("Tags[{}]", i)));
                    }
                }
            }
        }

        match (title, content, self.tags) {
            (Some(title), Some(content), Some(tags)) if errors.is_empty() => Ok(PostDraft {
                title,
                content,
                tags,
            }),
            _ => Err(errors),
        }
    }
}

/// Response containing full post data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            tags: post.tags.into_iter().map(|tag| tag.label).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, content: &str, tags: &[&str]) -> CreateOrUpdatePostRequest {
        CreateOrUpdatePostRequest {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        }
    }

    #[test]
    fn test_valid_request() {
        let draft = request("Hello", "World", &["rust", "web"]).validate().unwrap();
        assert_eq!(draft.title, "Hello");
        assert_eq!(draft.content, "World");
        assert_eq!(draft.tags, vec!["rust", "web"]);
    }

    #[test]
    fn test_empty_fields_rejected() {
        let errors = request("", "", &[]).validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::required("Title"),
                FieldError::required("Content"),
                FieldError::new("Tags", "Should be greater than 0"),
            ]
        );
    }

    #[test]
    fn test_missing_fields_rejected() {
        let errors = CreateOrUpdatePostRequest::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[2], FieldError::required("Tags"));
    }

    #[test]
    fn test_empty_tag_element_rejected() {
        let errors = request("Hello", "World", &["rust", ""]).validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::required("Tags[1]")]);
    }

    #[test]
    fn test_response_flattens_tag_labels() {
        let post = Post {
            id: 3,
            title: "t".to_string(),
            content: "c".to_string(),
            tags: vec![Tag::new(1, "a"), Tag::new(2, "b")],
        };
        let response = PostResponse::from(post);
        assert_eq!(response.tags, vec!["a", "b"]);
    }
}
