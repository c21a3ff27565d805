use async_trait::async_trait;

use super::domain::Project;

#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub demo_link: String,
    pub github_link: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub demo_link: String,
    pub github_link: String,
    pub revision: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Revision mismatch")]
    RevisionMismatch,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list(&self) -> Vec<Project>;

    async fn get(&self, id: &str) -> Result<Project, ProjectRepositoryError>;

    async fn create(&self, data: NewProject) -> Project;

    async fn update(&self, id: &str, data: ProjectUpdate)
        -> Result<Project, ProjectRepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), ProjectRepositoryError>;
}
