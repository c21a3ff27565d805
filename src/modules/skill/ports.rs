use async_trait::async_trait;

use super::domain::{Skill, SkillCategory};

#[derive(Debug, Clone, Default)]
pub struct NewSkillCategory {
    pub category: String,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, Default)]
pub struct SkillCategoryUpdate {
    pub category: String,
    pub items: Vec<Skill>,
    pub revision: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill category not found")]
    NotFound,

    #[error("Revision mismatch")]
    RevisionMismatch,

    #[error("Duplicate skill name: {0}")]
    DuplicateSkillName(String),

    #[error("Skill level out of range for {0}")]
    LevelOutOfRange(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list(&self) -> Vec<SkillCategory>;

    async fn get(&self, id: u32) -> Result<SkillCategory, SkillRepositoryError>;

    async fn create(&self, data: NewSkillCategory) -> Result<SkillCategory, SkillRepositoryError>;

    async fn update(
        &self,
        id: u32,
        data: SkillCategoryUpdate,
    ) -> Result<SkillCategory, SkillRepositoryError>;

    async fn delete(&self, id: u32) -> Result<(), SkillRepositoryError>;
}
