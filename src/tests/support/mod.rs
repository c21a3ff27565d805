use std::sync::Arc;

use actix_web::web;

use crate::admin::credentials::AdminCredentials;
use crate::admin::session::SessionService;
use crate::blog::repository::InMemoryBlogRepository;
use crate::contact::notifier::LoggingContactNotifier;
use crate::contact::ports::ContactNotifier;
use crate::experience::repository::InMemoryExperienceRepository;
use crate::project::repository::InMemoryProjectRepository;
use crate::skill::repository::InMemorySkillRepository;
use crate::AppState;

/// Freshly seeded state for route tests. Every call gets its own
/// repositories, so tests cannot see each other's mutations.
pub fn test_state() -> web::Data<AppState> {
    test_state_with_contact(Arc::new(LoggingContactNotifier))
}

pub fn test_state_with_contact(
    contact: Arc<dyn ContactNotifier + Send + Sync>,
) -> web::Data<AppState> {
    web::Data::new(AppState {
        blogs: Arc::new(InMemoryBlogRepository::new()),
        projects: Arc::new(InMemoryProjectRepository::new()),
        skills: Arc::new(InMemorySkillRepository::new()),
        experiences: Arc::new(InMemoryExperienceRepository::new()),
        contact,
        credentials: Arc::new(AdminCredentials::fast_env("admin", "admin123")),
        sessions: SessionService::new("test-secret"),
    })
}
