use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::domain::{seed_experiences, Experience};
use super::ports::{
    ExperienceRepository, ExperienceRepositoryError, ExperienceUpdate, NewExperience,
};

pub struct InMemoryExperienceRepository {
    experiences: RwLock<Vec<Experience>>,
}

impl InMemoryExperienceRepository {
    pub fn new() -> Self {
        Self {
            experiences: RwLock::new(seed_experiences()),
        }
    }
}

impl Default for InMemoryExperienceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExperienceRepository for InMemoryExperienceRepository {
    async fn list(&self) -> Vec<Experience> {
        self.experiences.read().await.clone()
    }

    async fn create(&self, data: NewExperience) -> Experience {
        let mut experiences = self.experiences.write().await;
        // Millisecond-timestamp identifiers, nudged forward on the rare
        // same-millisecond collision.
        let mut id = Utc::now().timestamp_millis();
        while experiences.iter().any(|e| e.id == id.to_string()) {
            id += 1;
        }
        let experience = Experience {
            id: id.to_string(),
            company: data.company,
            position: data.position,
            period: data.period,
            description: data.description,
            revision: 1,
        };
        experiences.insert(0, experience.clone());
        experience
    }

    async fn update(
        &self,
        id: &str,
        data: ExperienceUpdate,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let mut experiences = self.experiences.write().await;
        let experience = experiences
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ExperienceRepositoryError::NotFound)?;

        if let Some(expected) = data.revision {
            if expected != experience.revision {
                return Err(ExperienceRepositoryError::RevisionMismatch);
            }
        }

        experience.company = data.company;
        experience.position = data.position;
        experience.period = data.period;
        experience.description = data.description;
        experience.revision += 1;
        Ok(experience.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ExperienceRepositoryError> {
        let mut experiences = self.experiences.write().await;
        let before = experiences.len();
        experiences.retain(|e| e.id != id);
        if experiences.len() == before {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry(company: &str) -> NewExperience {
        NewExperience {
            company: company.to_string(),
            position: "Developer".to_string(),
            period: "2024-Present".to_string(),
            description: "Shipping things.".to_string(),
        }
    }

    #[tokio::test]
    async fn create_prepends_with_unique_timestamp_id() {
        let repo = InMemoryExperienceRepository::new();

        let a = repo.create(new_entry("A")).await;
        let b = repo.create(new_entry("B")).await;

        assert_ne!(a.id, b.id);
        let list = repo.list().await;
        assert_eq!(list[0].company, "B");
        assert_eq!(list[1].company, "A");
    }

    #[tokio::test]
    async fn update_of_missing_id_reports_not_found() {
        let repo = InMemoryExperienceRepository::new();

        let result = repo
            .update(
                "does-not-exist",
                ExperienceUpdate {
                    company: "X".to_string(),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result, Err(ExperienceRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn delete_existing_then_again_reports_not_found() {
        let repo = InMemoryExperienceRepository::new();

        assert!(repo.delete("1").await.is_ok());
        assert_eq!(
            repo.delete("1").await,
            Err(ExperienceRepositoryError::NotFound)
        );
        assert_eq!(repo.list().await.len(), 1);
    }
}
