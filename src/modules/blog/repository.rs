use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use super::domain::{seed_blogs, BlogPost, DEFAULT_AUTHOR};
use super::ports::{BlogPostUpdate, BlogRepository, BlogRepositoryError, NewBlogPost};

struct BlogStore {
    blogs: Vec<BlogPost>,
    next_id: u64,
}

impl BlogStore {
    fn seeded() -> Self {
        let blogs = seed_blogs();
        let next_id = blogs.len() as u64 + 1;
        Self { blogs, next_id }
    }
}

/// The only storage this application has. Every restart reseeds the
/// hard-coded defaults; the lock makes single operations atomic under
/// actix's multi-worker runtime.
pub struct InMemoryBlogRepository {
    inner: RwLock<BlogStore>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BlogStore::seeded()),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list(&self) -> Vec<BlogPost> {
        self.inner.read().await.blogs.clone()
    }

    async fn get(&self, id: &str) -> Result<BlogPost, BlogRepositoryError> {
        self.inner
            .read()
            .await
            .blogs
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(BlogRepositoryError::NotFound)
    }

    async fn create(&self, data: NewBlogPost) -> BlogPost {
        let mut store = self.inner.write().await;
        let now = Utc::now();
        let blog = BlogPost {
            id: store.next_id.to_string(),
            title: data.title,
            content: data.content,
            summary: data.summary,
            cover_image: data.cover_image,
            author: Some(DEFAULT_AUTHOR.to_string()),
            tags: data.tags,
            created_at: now,
            updated_at: now,
            revision: 1,
        };
        store.next_id += 1;
        // Newest first, like the public listing expects.
        store.blogs.insert(0, blog.clone());
        info!(id = %blog.id, "blog created");
        blog
    }

    async fn update(
        &self,
        id: &str,
        data: BlogPostUpdate,
    ) -> Result<BlogPost, BlogRepositoryError> {
        let mut store = self.inner.write().await;
        let blog = store
            .blogs
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(BlogRepositoryError::NotFound)?;

        if let Some(expected) = data.revision {
            if expected != blog.revision {
                return Err(BlogRepositoryError::RevisionMismatch);
            }
        }

        blog.title = data.title;
        blog.content = data.content;
        blog.summary = data.summary;
        blog.cover_image = data.cover_image;
        blog.tags = data.tags;
        blog.updated_at = Utc::now();
        blog.revision += 1;
        Ok(blog.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), BlogRepositoryError> {
        let mut store = self.inner.write().await;
        let before = store.blogs.len();
        store.blogs.retain(|b| b.id != id);
        if store.blogs.len() == before {
            return Err(BlogRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn reset(&self) -> Vec<BlogPost> {
        let mut store = self.inner.write().await;
        *store = BlogStore::seeded();
        info!(count = store.blogs.len(), "blog store reseeded");
        store.blogs.clone()
    }
}
