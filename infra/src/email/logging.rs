//! Logging notifier for development
//!
//! Writes each message to the log instead of delivering it and always
//! reports success.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ra_core::services::{NotificationRequest, Notifier};
use ra_shared::utils::email::mask_email;

/// Notifier that logs messages instead of sending them
#[derive(Clone, Default)]
pub struct LoggingEmailNotifier {
    /// Counter for tracking number of messages logged
    message_count: Arc<AtomicU64>,
}

impl LoggingEmailNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages logged
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for LoggingEmailNotifier {
    async fn send(&self, request: &NotificationRequest) -> bool {
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::info!(
            recipient = %mask_email(&request.recipient),
            sender = %request.sender,
            template = %request.template_key,
            redirect_url = %request.redirect_url,
            message_number = count,
            "[LOG EMAIL] verification email"
        );
        tracing::debug!(code = %request.code, "[LOG EMAIL] verification code");

        true
    }
}
