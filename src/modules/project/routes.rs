use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::{
    project::domain::Project,
    project::ports::{NewProject, ProjectRepositoryError, ProjectUpdate},
    shared::api::{ok_message, ApiError},
    AppState,
};

#[derive(Debug, Deserialize)]
struct ProjectLookup {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectPayload {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    technologies: Vec<String>,
    #[serde(default)]
    image: String,
    #[serde(default)]
    demo_link: String,
    #[serde(default)]
    github_link: String,
    revision: Option<u64>,
}

impl ProjectPayload {
    fn missing_required(&self) -> bool {
        self.title.trim().is_empty() || self.description.trim().is_empty()
    }
}

#[derive(Serialize)]
struct ProjectMutationResponse {
    message: String,
    project: Project,
}

#[get("/api/projects")]
pub async fn list_projects(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.projects.list().await)
}

// The frontend looks a single project up by POSTing `{id}`, a shape kept
// from the original API.
#[post("/api/projects")]
pub async fn get_project(
    payload: web::Json<ProjectLookup>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.projects.get(&payload.id).await {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(_) => ApiError::not_found("Project not found"),
    }
}

#[post("/api/projects/create")]
pub async fn create_project(
    payload: web::Json<ProjectPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    if payload.missing_required() {
        return ApiError::bad_request("Title and description are required");
    }

    let project = data
        .projects
        .create(NewProject {
            title: payload.title.clone(),
            description: payload.description.clone(),
            technologies: payload.technologies.clone(),
            image: payload.image.clone(),
            demo_link: payload.demo_link.clone(),
            github_link: payload.github_link.clone(),
        })
        .await;

    HttpResponse::Created().json(ProjectMutationResponse {
        message: "Project created successfully".to_string(),
        project,
    })
}

#[put("/api/projects/{id}")]
pub async fn update_project(
    path: web::Path<String>,
    payload: web::Json<ProjectPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    if payload.missing_required() {
        return ApiError::bad_request("Title and description are required");
    }

    let update = ProjectUpdate {
        title: payload.title.clone(),
        description: payload.description.clone(),
        technologies: payload.technologies.clone(),
        image: payload.image.clone(),
        demo_link: payload.demo_link.clone(),
        github_link: payload.github_link.clone(),
        revision: payload.revision,
    };

    match data.projects.update(&path, update).await {
        Ok(project) => HttpResponse::Ok().json(ProjectMutationResponse {
            message: "Project updated successfully".to_string(),
            project,
        }),
        Err(ProjectRepositoryError::NotFound) => ApiError::not_found("Project not found"),
        Err(ProjectRepositoryError::RevisionMismatch) => ApiError::conflict("Revision mismatch"),
    }
}

#[delete("/api/projects/{id}")]
pub async fn delete_project(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    match data.projects.delete(&path).await {
        Ok(()) => ok_message("Project deleted successfully"),
        Err(_) => ApiError::not_found("Project not found"),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_projects)
        .service(create_project)
        .service(get_project)
        .service(update_project)
        .service(delete_project);
}
