use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::domain::{seed_skills, Skill, SkillCategory, MAX_SKILL_LEVEL};
use super::ports::{NewSkillCategory, SkillCategoryUpdate, SkillRepository, SkillRepositoryError};

struct SkillStore {
    categories: Vec<SkillCategory>,
    next_id: u32,
}

impl SkillStore {
    fn seeded() -> Self {
        let categories = seed_skills();
        let next_id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            categories,
            next_id,
        }
    }
}

pub struct InMemorySkillRepository {
    inner: RwLock<SkillStore>,
}

impl InMemorySkillRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SkillStore::seeded()),
        }
    }
}

impl Default for InMemorySkillRepository {
    fn default() -> Self {
        Self::new()
    }
}

// Skill names are the edit/delete key within a category, so duplicates and
// out-of-range levels are rejected before they reach the collection.
fn validate_items(items: &[Skill]) -> Result<(), SkillRepositoryError> {
    let mut seen = HashSet::new();
    for skill in items {
        if skill.level > MAX_SKILL_LEVEL {
            return Err(SkillRepositoryError::LevelOutOfRange(skill.name.clone()));
        }
        if !seen.insert(skill.name.as_str()) {
            return Err(SkillRepositoryError::DuplicateSkillName(skill.name.clone()));
        }
    }
    Ok(())
}

#[async_trait]
impl SkillRepository for InMemorySkillRepository {
    async fn list(&self) -> Vec<SkillCategory> {
        self.inner.read().await.categories.clone()
    }

    async fn get(&self, id: u32) -> Result<SkillCategory, SkillRepositoryError> {
        self.inner
            .read()
            .await
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(SkillRepositoryError::NotFound)
    }

    async fn create(&self, data: NewSkillCategory) -> Result<SkillCategory, SkillRepositoryError> {
        validate_items(&data.items)?;
        let mut store = self.inner.write().await;
        let category = SkillCategory {
            id: store.next_id,
            category: data.category,
            items: data.items,
            revision: 1,
        };
        store.next_id += 1;
        store.categories.push(category.clone());
        Ok(category)
    }

    async fn update(
        &self,
        id: u32,
        data: SkillCategoryUpdate,
    ) -> Result<SkillCategory, SkillRepositoryError> {
        validate_items(&data.items)?;
        let mut store = self.inner.write().await;
        let category = store
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(SkillRepositoryError::NotFound)?;

        if let Some(expected) = data.revision {
            if expected != category.revision {
                return Err(SkillRepositoryError::RevisionMismatch);
            }
        }

        category.category = data.category;
        category.items = data.items;
        category.revision += 1;
        Ok(category.clone())
    }

    async fn delete(&self, id: u32) -> Result<(), SkillRepositoryError> {
        let mut store = self.inner.write().await;
        let before = store.categories.len();
        store.categories.retain(|c| c.id != id);
        if store.categories.len() == before {
            return Err(SkillRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, level: u8) -> Skill {
        Skill {
            name: name.to_string(),
            level,
        }
    }

    #[tokio::test]
    async fn create_assigns_next_integer_id() {
        let repo = InMemorySkillRepository::new();

        let category = repo
            .create(NewSkillCategory {
                category: "Databases".to_string(),
                items: vec![skill("Redis", 70)],
            })
            .await
            .unwrap();

        assert_eq!(category.id, 5);
    }

    #[tokio::test]
    async fn duplicate_skill_names_within_a_category_are_rejected() {
        let repo = InMemorySkillRepository::new();

        let result = repo
            .create(NewSkillCategory {
                category: "Dup".to_string(),
                items: vec![skill("Git", 80), skill("Git", 60)],
            })
            .await;

        assert_eq!(
            result,
            Err(SkillRepositoryError::DuplicateSkillName("Git".to_string()))
        );
    }

    #[tokio::test]
    async fn level_above_100_is_rejected() {
        let repo = InMemorySkillRepository::new();

        let result = repo
            .update(
                1,
                SkillCategoryUpdate {
                    category: "Frontend".to_string(),
                    items: vec![skill("React", 101)],
                    revision: None,
                },
            )
            .await;

        assert_eq!(
            result,
            Err(SkillRepositoryError::LevelOutOfRange("React".to_string()))
        );
    }

    #[tokio::test]
    async fn update_replaces_items_and_leaves_other_categories_alone() {
        let repo = InMemorySkillRepository::new();
        let backend_before = repo.get(2).await.unwrap();

        let updated = repo
            .update(
                1,
                SkillCategoryUpdate {
                    category: "Frontend".to_string(),
                    items: vec![skill("React", 95)],
                    revision: Some(1),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.items.len(), 1);
        assert_eq!(updated.revision, 2);
        assert_eq!(repo.get(2).await.unwrap(), backend_before);
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let repo = InMemorySkillRepository::new();

        assert!(repo.delete(4).await.is_ok());
        assert_eq!(repo.delete(4).await, Err(SkillRepositoryError::NotFound));
    }
}
