use actix_web::{get, web, HttpResponse, Responder};

use super::domain::canonical_profile;

#[get("/api/profile")]
pub async fn get_profile() -> impl Responder {
    HttpResponse::Ok().json(canonical_profile())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_profile);
}
