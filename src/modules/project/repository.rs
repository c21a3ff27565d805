use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::domain::{seed_projects, Project};
use super::ports::{NewProject, ProjectRepository, ProjectRepositoryError, ProjectUpdate};

pub struct InMemoryProjectRepository {
    projects: RwLock<Vec<Project>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(seed_projects()),
        }
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    async fn get(&self, id: &str) -> Result<Project, ProjectRepositoryError> {
        self.projects
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn create(&self, data: NewProject) -> Project {
        let project = Project {
            id: Uuid::new_v4().simple().to_string(),
            title: data.title,
            description: data.description,
            technologies: data.technologies,
            image: data.image,
            demo_link: data.demo_link,
            github_link: data.github_link,
            revision: 1,
        };
        let mut projects = self.projects.write().await;
        projects.push(project.clone());
        info!(id = %project.id, "project created");
        project
    }

    async fn update(
        &self,
        id: &str,
        data: ProjectUpdate,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        if let Some(expected) = data.revision {
            if expected != project.revision {
                return Err(ProjectRepositoryError::RevisionMismatch);
            }
        }

        project.title = data.title;
        project.description = data.description;
        project.technologies = data.technologies;
        project.image = data.image;
        project.demo_link = data.demo_link;
        project.github_link = data.github_link;
        project.revision += 1;
        Ok(project.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ProjectRepositoryError> {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}
