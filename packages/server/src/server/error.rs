use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domains::listings::StoreError;

/// Controller-boundary error. Every store or render failure crossing into the
/// HTTP layer is converted here and mapped to a status plus a plain-text
/// message; no backtrace or driver detail reaches the client.
#[derive(Debug)]
pub enum AppError {
    Store(StoreError),
    Render(tera::Error),
}

impl AppError {
    /// Malformed id is a client error everywhere, including update and
    /// delete; missing record is 404; everything else is a 500.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Store(StoreError::InvalidId) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Store(StoreError::InvalidId) => "Invalid ID format.".to_string(),
            AppError::Store(StoreError::NotFound) => "Listing not found!".to_string(),
            AppError::Store(StoreError::Validation(field)) => {
                format!("Missing or invalid required field: {field}.")
            }
            AppError::Store(StoreError::Database(_)) => {
                "Error talking to the listing store.".to_string()
            }
            AppError::Render(_) => "Error rendering the page.".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }
        (status, self.message()).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::Render(err)
    }
}
