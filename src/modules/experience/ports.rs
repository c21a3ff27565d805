use async_trait::async_trait;

use super::domain::Experience;

#[derive(Debug, Clone, Default)]
pub struct NewExperience {
    pub company: String,
    pub position: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExperienceUpdate {
    pub company: String,
    pub position: String,
    pub period: String,
    pub description: String,
    pub revision: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Revision mismatch")]
    RevisionMismatch,
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn list(&self) -> Vec<Experience>;

    async fn create(&self, data: NewExperience) -> Experience;

    async fn update(
        &self,
        id: &str,
        data: ExperienceUpdate,
    ) -> Result<Experience, ExperienceRepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), ExperienceRepositoryError>;
}
