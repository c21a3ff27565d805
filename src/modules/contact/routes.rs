use std::time::Duration;

use actix_web::{post, web, Responder};
use email_address::EmailAddress;
use serde::Deserialize;
use tracing::error;

use crate::{
    contact::ports::ContactMessage,
    shared::api::{ok_message, ApiError},
    AppState,
};

// Matches the original handler's artificial latency.
const SIMULATED_DELIVERY_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Deserialize)]
struct ContactRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

#[post("/api/contact")]
pub async fn submit_contact(
    payload: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.message.trim().is_empty()
    {
        return ApiError::bad_request("Name, email and message are required");
    }

    if !EmailAddress::is_valid(payload.email.trim()) {
        return ApiError::bad_request("Invalid email address");
    }

    tokio::time::sleep(SIMULATED_DELIVERY_DELAY).await;

    let message = ContactMessage {
        name: payload.name.clone(),
        email: payload.email.clone(),
        message: payload.message.clone(),
    };

    match data.contact.deliver(&message).await {
        Ok(()) => ok_message("Message sent successfully! We'll get back to you soon."),
        Err(err) => {
            error!(error = %err, "contact delivery failed");
            ApiError::internal_message("Failed to send message. Please try again later.")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_contact);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::contact::ports::{ContactNotifier, ContactNotifyError};
    use crate::tests::support::{test_state, test_state_with_contact};

    struct FailingNotifier;

    #[async_trait]
    impl ContactNotifier for FailingNotifier {
        async fn deliver(&self, _message: &ContactMessage) -> Result<(), ContactNotifyError> {
            Err(ContactNotifyError::DeliveryFailed("smtp down".to_string()))
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn valid_submission_is_acknowledged() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "Jo",
                "email": "jo@example.com",
                "message": "Hello there"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(
            json["message"],
            "Message sent successfully! We'll get back to you soon."
        );
    }

    #[actix_web::test]
    async fn missing_message_field_is_rejected() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({ "name": "Jo", "email": "jo@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(resp).await["message"],
            "Name, email and message are required"
        );
    }

    #[actix_web::test]
    async fn malformed_email_is_rejected() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "Jo",
                "email": "not-an-email",
                "message": "Hi"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn notifier_failure_maps_to_internal_error() {
        let state = test_state_with_contact(Arc::new(FailingNotifier));
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "Jo",
                "email": "jo@example.com",
                "message": "Hello"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            read_json(resp).await["message"],
            "Failed to send message. Please try again later."
        );
    }
}
