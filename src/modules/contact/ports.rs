use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactNotifyError {
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Outgoing port for contact-form submissions. The production adapter only
/// logs; a real mail sender would slot in behind the same trait.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactNotifyError>;
}
