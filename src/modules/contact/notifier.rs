use async_trait::async_trait;
use tracing::info;

use super::ports::{ContactMessage, ContactNotifier, ContactNotifyError};

pub struct LoggingContactNotifier;

#[async_trait]
impl ContactNotifier for LoggingContactNotifier {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactNotifyError> {
        info!(
            name = %message.name,
            email = %message.email,
            "contact form submission received"
        );
        Ok(())
    }
}
