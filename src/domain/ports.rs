use super::order::{OrderReceipt, OrderSubmission};
use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// Remote order persistence. Resolves on success, errors on failure; callers do not retry.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn submit_order(&self, order: &OrderSubmission) -> Result<OrderReceipt>;
}

pub type OrderServiceBox = Box<dyn OrderService>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationLevel::Success => f.write_str("success"),
            NotificationLevel::Error => f.write_str("error"),
        }
    }
}

/// A popup shown to the buyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub detail: Option<String>,
}

impl Notification {
    pub fn success(title: &str) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.to_string(),
            detail: None,
        }
    }

    pub fn error(title: &str, detail: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.to_string(),
            detail: Some(detail.into()),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

pub type NotifierBox = Box<dyn Notifier>;
