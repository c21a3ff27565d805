// src/shared/api/response.rs
use actix_web::HttpResponse;
use serde::Serialize;

/// Error-shaped body used by the lookup endpoints: `{"error": "..."}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Message-shaped body used by mutation endpoints: `{"message": "..."}`.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub struct ApiError;

impl ApiError {
    pub fn not_found(error: &str) -> HttpResponse {
        HttpResponse::NotFound().json(ErrorBody {
            error: error.to_string(),
        })
    }

    pub fn conflict(error: &str) -> HttpResponse {
        HttpResponse::Conflict().json(ErrorBody {
            error: error.to_string(),
        })
    }

    pub fn internal(error: &str) -> HttpResponse {
        HttpResponse::InternalServerError().json(ErrorBody {
            error: error.to_string(),
        })
    }

    /// Validation failures reply in the message shape, matching the
    /// mutation endpoints they guard.
    pub fn bad_request(message: &str) -> HttpResponse {
        HttpResponse::BadRequest().json(MessageBody {
            message: message.to_string(),
        })
    }

    pub fn not_found_message(message: &str) -> HttpResponse {
        HttpResponse::NotFound().json(MessageBody {
            message: message.to_string(),
        })
    }

    pub fn internal_message(message: &str) -> HttpResponse {
        HttpResponse::InternalServerError().json(MessageBody {
            message: message.to_string(),
        })
    }
}

pub fn ok_message(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(MessageBody {
        message: message.to_string(),
    })
}
