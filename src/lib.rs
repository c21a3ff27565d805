pub mod client;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::admin;
pub use modules::blog;
pub use modules::contact;
pub use modules::experience;
pub use modules::profile;
pub use modules::project;
pub use modules::skill;

use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::admin::credentials::AdminCredentials;
use crate::admin::session::SessionService;
use crate::blog::ports::BlogRepository;
use crate::blog::repository::InMemoryBlogRepository;
use crate::contact::notifier::LoggingContactNotifier;
use crate::contact::ports::ContactNotifier;
use crate::experience::ports::ExperienceRepository;
use crate::experience::repository::InMemoryExperienceRepository;
use crate::project::ports::ProjectRepository;
use crate::project::repository::InMemoryProjectRepository;
use crate::shared::api::custom_json_config;
use crate::skill::ports::SkillRepository;
use crate::skill::repository::InMemorySkillRepository;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository + Send + Sync>,
    pub projects: Arc<dyn ProjectRepository + Send + Sync>,
    pub skills: Arc<dyn SkillRepository + Send + Sync>,
    pub experiences: Arc<dyn ExperienceRepository + Send + Sync>,
    pub contact: Arc<dyn ContactNotifier + Send + Sync>,
    pub credentials: Arc<AdminCredentials>,
    pub sessions: SessionService,
}

impl AppState {
    /// Production wiring: seeded in-memory repositories, env-configured
    /// credentials and session secret, log-only contact delivery.
    pub fn with_defaults() -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            projects: Arc::new(InMemoryProjectRepository::new()),
            skills: Arc::new(InMemorySkillRepository::new()),
            experiences: Arc::new(InMemoryExperienceRepository::new()),
            contact: Arc::new(LoggingContactNotifier),
            credentials: Arc::new(AdminCredentials::from_env()),
            sessions: SessionService::from_env(),
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health);
    blog::routes::configure(cfg);
    project::routes::configure(cfg);
    skill::routes::configure(cfg);
    experience::routes::configure(cfg);
    profile::routes::configure(cfg);
    contact::routes::configure(cfg);
    admin::routes::configure(cfg);
}

pub async fn serve() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5001".to_string());
    let server_url = format!("{host}:{port}");

    let state = AppState::with_defaults();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}
