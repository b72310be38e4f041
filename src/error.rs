use crate::domain::form::FormErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Invalid cart item: {0}")]
    InvalidItem(String),
    #[error("Cannot submit an order for an empty cart")]
    EmptyCart,
    #[error("Form validation failed: {0}")]
    Validation(FormErrors),
    #[error("Order service error: {0}")]
    ServiceError(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
