use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::{
    experience::domain::Experience,
    experience::ports::{ExperienceRepositoryError, ExperienceUpdate, NewExperience},
    shared::api::{ok_message, ApiError},
    AppState,
};

// The experience endpoints keep the original wire shape: every error body is
// message-shaped, update takes the id in the body, delete in the query string.

#[derive(Debug, Deserialize)]
struct ExperiencePayload {
    id: Option<String>,
    #[serde(default)]
    company: String,
    #[serde(default)]
    position: String,
    #[serde(default)]
    period: String,
    #[serde(default)]
    description: String,
    revision: Option<u64>,
}

impl ExperiencePayload {
    fn missing_required(&self) -> bool {
        self.company.trim().is_empty()
            || self.position.trim().is_empty()
            || self.period.trim().is_empty()
            || self.description.trim().is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct DeleteQuery {
    id: Option<String>,
}

#[derive(Serialize)]
struct ExperienceMutationResponse {
    message: String,
    experience: Experience,
}

#[get("/api/experience")]
pub async fn list_experiences(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.experiences.list().await)
}

#[post("/api/experience")]
pub async fn create_experience(
    payload: web::Json<ExperiencePayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    if payload.missing_required() {
        return ApiError::bad_request("Missing required fields");
    }

    let experience = data
        .experiences
        .create(NewExperience {
            company: payload.company.clone(),
            position: payload.position.clone(),
            period: payload.period.clone(),
            description: payload.description.clone(),
        })
        .await;

    HttpResponse::Created().json(ExperienceMutationResponse {
        message: "Experience created successfully".to_string(),
        experience,
    })
}

#[put("/api/experience")]
pub async fn update_experience(
    payload: web::Json<ExperiencePayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match payload.id.as_deref() {
        Some(id) if !payload.missing_required() => id,
        _ => return ApiError::bad_request("Missing required fields"),
    };

    let update = ExperienceUpdate {
        company: payload.company.clone(),
        position: payload.position.clone(),
        period: payload.period.clone(),
        description: payload.description.clone(),
        revision: payload.revision,
    };

    match data.experiences.update(id, update).await {
        Ok(experience) => HttpResponse::Ok().json(ExperienceMutationResponse {
            message: "Experience updated successfully".to_string(),
            experience,
        }),
        Err(ExperienceRepositoryError::NotFound) => {
            ApiError::not_found_message("Experience not found")
        }
        Err(ExperienceRepositoryError::RevisionMismatch) => {
            ApiError::conflict("Revision mismatch")
        }
    }
}

#[delete("/api/experience")]
pub async fn delete_experience(
    query: web::Query<DeleteQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match query.id.as_deref() {
        Some(id) => id,
        None => return ApiError::bad_request("Experience ID is required"),
    };

    match data.experiences.delete(id).await {
        Ok(()) => ok_message("Experience deleted successfully"),
        Err(_) => ApiError::not_found_message("Experience not found"),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_experiences)
        .service(create_experience)
        .service(update_experience)
        .service(delete_experience);
}
