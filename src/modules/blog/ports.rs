use async_trait::async_trait;

use super::domain::BlogPost;

/// Input DTO for creating a blog post. The repository assigns the identifier
/// and both timestamps.
#[derive(Debug, Clone, Default)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
}

/// Full replacement of the editable fields. `revision`, when present, must
/// match the stored value or the update is rejected.
#[derive(Debug, Clone, Default)]
pub struct BlogPostUpdate {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub revision: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlogRepositoryError {
    #[error("Blog not found")]
    NotFound,

    #[error("Revision mismatch")]
    RevisionMismatch,
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn list(&self) -> Vec<BlogPost>;

    async fn get(&self, id: &str) -> Result<BlogPost, BlogRepositoryError>;

    async fn create(&self, data: NewBlogPost) -> BlogPost;

    async fn update(&self, id: &str, data: BlogPostUpdate)
        -> Result<BlogPost, BlogRepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), BlogRepositoryError>;

    /// Drops every mutation and reseeds the hard-coded defaults.
    async fn reset(&self) -> Vec<BlogPost>;
}
