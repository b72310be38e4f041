use crate::domain::order::{OrderReceipt, OrderSubmission};
use crate::domain::ports::{Notification, Notifier, OrderService};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::RwLock;

/// An order service that keeps every submission in memory.
///
/// Uses `Arc<RwLock<Vec<OrderSubmission>>>` so clones share the same log, which lets
/// a test hand one clone to the flow and inspect the other. Also backs the CLI when
/// no endpoint is configured.
#[derive(Default, Clone)]
pub struct InMemoryOrderService {
    submissions: Arc<RwLock<Vec<OrderSubmission>>>,
    failure: Option<String>,
}

impl InMemoryOrderService {
    /// Creates a new service that accepts every order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service that records each order and then rejects it with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Returns every order received so far, oldest first.
    pub async fn submissions(&self) -> Vec<OrderSubmission> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl OrderService for InMemoryOrderService {
    async fn submit_order(&self, order: &OrderSubmission) -> Result<OrderReceipt> {
        let mut submissions = self.submissions.write().await;
        submissions.push(order.clone());

        match &self.failure {
            Some(message) => Err(CheckoutError::ServiceError(message.clone())),
            None => Ok(OrderReceipt::new(format!("order-{}", submissions.len()))),
        }
    }
}

/// A notifier that remembers what it was asked to show.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
