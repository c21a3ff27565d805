use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::{
    shared::api::{ok_message, ApiError},
    skill::domain::{Skill, SkillCategory},
    skill::ports::{NewSkillCategory, SkillCategoryUpdate, SkillRepositoryError},
    AppState,
};

#[derive(Debug, Deserialize)]
struct SkillLookup {
    id: u32,
}

#[derive(Debug, Deserialize)]
struct SkillCategoryPayload {
    #[serde(default)]
    category: String,
    #[serde(default)]
    items: Vec<Skill>,
    revision: Option<u64>,
}

#[derive(Serialize)]
struct SkillMutationResponse {
    message: String,
    category: SkillCategory,
}

fn map_validation_error(err: SkillRepositoryError) -> HttpResponse {
    match err {
        SkillRepositoryError::NotFound => ApiError::not_found("Skill category not found"),
        SkillRepositoryError::RevisionMismatch => ApiError::conflict("Revision mismatch"),
        other => ApiError::bad_request(&other.to_string()),
    }
}

#[get("/api/skills")]
pub async fn list_skills(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.skills.list().await)
}

#[post("/api/skills")]
pub async fn get_skill_category(
    payload: web::Json<SkillLookup>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skills.get(payload.id).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(_) => ApiError::not_found("Skill category not found"),
    }
}

#[post("/api/skills/create")]
pub async fn create_skill_category(
    payload: web::Json<SkillCategoryPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    if payload.category.trim().is_empty() {
        return ApiError::bad_request("Category name is required");
    }

    match data
        .skills
        .create(NewSkillCategory {
            category: payload.category.clone(),
            items: payload.items.clone(),
        })
        .await
    {
        Ok(category) => HttpResponse::Created().json(SkillMutationResponse {
            message: "Skill category created successfully".to_string(),
            category,
        }),
        Err(err) => map_validation_error(err),
    }
}

#[put("/api/skills/{id}")]
pub async fn update_skill_category(
    path: web::Path<u32>,
    payload: web::Json<SkillCategoryPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    if payload.category.trim().is_empty() {
        return ApiError::bad_request("Category name is required");
    }

    match data
        .skills
        .update(
            *path,
            SkillCategoryUpdate {
                category: payload.category.clone(),
                items: payload.items.clone(),
                revision: payload.revision,
            },
        )
        .await
    {
        Ok(category) => HttpResponse::Ok().json(SkillMutationResponse {
            message: "Skill category updated successfully".to_string(),
            category,
        }),
        Err(err) => map_validation_error(err),
    }
}

#[delete("/api/skills/{id}")]
pub async fn delete_skill_category(
    path: web::Path<u32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skills.delete(*path).await {
        Ok(()) => ok_message("Skill category deleted successfully"),
        Err(_) => ApiError::not_found("Skill category not found"),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_skills)
        .service(create_skill_category)
        .service(get_skill_category)
        .service(update_skill_category)
        .service(delete_skill_category);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::test_state;

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn list_skills_returns_all_four_categories() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_json(resp).await.as_array().unwrap().len(), 4);
    }

    #[actix_web::test]
    async fn lookup_by_posted_id_returns_category() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/skills")
            .set_json(serde_json::json!({ "id": 2 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_json(resp).await["category"], "Backend");
    }

    #[actix_web::test]
    async fn lookup_of_unknown_category_returns_not_found() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/skills")
            .set_json(serde_json::json!({ "id": 42 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(resp).await["error"], "Skill category not found");
    }

    #[actix_web::test]
    async fn update_with_duplicate_skill_name_is_rejected() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;

        let req = test::TestRequest::put()
            .uri("/api/skills/1")
            .set_json(serde_json::json!({
                "category": "Frontend",
                "items": [
                    { "name": "React", "level": 90 },
                    { "name": "React", "level": 50 }
                ]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn delete_category_then_repeat_is_not_found() {
        let state = test_state();
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

        let req = test::TestRequest::delete().uri("/api/skills/3").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::OK
        );

        let req = test::TestRequest::delete().uri("/api/skills/3").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}
