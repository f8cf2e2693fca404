use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{import::ImportError, response::ErrorBody, session::SessionError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("{}", .0.body_text())]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("{0}")]
    NotImplemented(String),

    #[error("Database error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Session(_) => StatusCode::UNAUTHORIZED,
            AppError::Import(ImportError::Unreadable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Import(_) => StatusCode::BAD_REQUEST,
            // 413 when the body limit trips mid-stream, 400 for malformed input
            AppError::Multipart(err) => err.status(),
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::OrmError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::OrmError(err) => tracing::error!(error = %err, "database error"),
            AppError::Internal(err) => tracing::error!(error = %err, "internal error"),
            AppError::Import(ImportError::Unreadable(err)) => {
                tracing::error!(error = %err, "spreadsheet could not be read")
            }
            _ => {}
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
