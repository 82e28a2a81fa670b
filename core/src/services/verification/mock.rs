//! Recording notifier for tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use super::traits::Notifier;
use super::types::NotificationRequest;

/// Notifier that records every request and can be told to fail
#[derive(Default)]
pub struct MockEmailNotifier {
    sent: Mutex<Vec<NotificationRequest>>,
    should_fail: AtomicBool,
}

impl MockEmailNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier whose sends all report failure
    pub fn failing() -> Self {
        let notifier = Self::new();
        notifier.set_failing(true);
        notifier
    }

    pub fn set_failing(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// All requests received so far, including failed ones
    pub async fn sent(&self) -> Vec<NotificationRequest> {
        self.sent.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    pub async fn last(&self) -> Option<NotificationRequest> {
        self.sent.lock().await.last().cloned()
    }
}

#[async_trait]
impl Notifier for MockEmailNotifier {
    async fn send(&self, request: &NotificationRequest) -> bool {
        self.sent.lock().await.push(request.clone());
        !self.should_fail.load(Ordering::SeqCst)
    }
}
