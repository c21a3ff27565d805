use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie},
    get, post, web, HttpRequest, HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::{admin::session::SESSION_COOKIE, AppState};

#[derive(Debug, Deserialize)]
struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Serialize)]
struct LoginResponse {
    success: bool,
    message: String,
}

#[derive(Serialize)]
struct AuthCheckResponse {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[post("/api/admin/login")]
pub async fn login(payload: web::Json<LoginRequest>, data: web::Data<AppState>) -> impl Responder {
    if !data.credentials.verify(&payload.username, &payload.password) {
        warn!(username = %payload.username, "failed admin login attempt");
        return HttpResponse::Unauthorized().json(LoginResponse {
            success: false,
            message: "Invalid username or password".to_string(),
        });
    }

    let token = match data.sessions.issue(data.credentials.username()) {
        Ok(token) => token,
        Err(err) => {
            error!(error = %err, "session issuance failed");
            return HttpResponse::InternalServerError().json(LoginResponse {
                success: false,
                message: "An error occurred during login".to_string(),
            });
        }
    };

    info!("admin logged in");
    let cookie = Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .max_age(CookieDuration::days(1))
        .finish();

    HttpResponse::Ok().cookie(cookie).json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
    })
}

#[get("/api/admin/check-auth")]
pub async fn check_auth(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let authenticated = req
        .cookie(SESSION_COOKIE)
        .map(|cookie| data.sessions.validate(cookie.value()))
        .unwrap_or(false);

    if authenticated {
        HttpResponse::Ok().json(AuthCheckResponse {
            authenticated: true,
            message: None,
        })
    } else {
        HttpResponse::Unauthorized().json(AuthCheckResponse {
            authenticated: false,
            message: Some("Not authenticated".to_string()),
        })
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login).service(check_auth);
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
    async fn login_with_default_credentials_sets_session_cookie() {
        // Arrange
        let state = test_state();
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

        // Act
        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(serde_json::json!({ "username": "admin", "password": "admin123" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .expect("admin-auth cookie missing");
        assert!(state.sessions.validate(cookie.value()));
        assert_eq!(cookie.http_only(), Some(true));

        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Login successful");
    }

    #[actix_web::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(serde_json::json!({ "username": "admin", "password": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json = read_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid username or password");
    }

    #[actix_web::test]
    async fn check_auth_accepts_a_freshly_issued_token() {
        let state = test_state();
        let token = state.sessions.issue("admin").unwrap();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/check-auth")
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_json(resp).await["authenticated"], true);
    }

    #[actix_web::test]
    async fn check_auth_without_cookie_is_unauthorized() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/check-auth")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json = read_json(resp).await;
        assert_eq!(json["authenticated"], false);
        assert_eq!(json["message"], "Not authenticated");
    }

    #[actix_web::test]
    async fn check_auth_rejects_the_legacy_literal_cookie_value() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/check-auth")
            .cookie(Cookie::new(SESSION_COOKIE, "authenticated"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
