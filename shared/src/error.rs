use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    // 以下 3 つは外部には同じ 403 として見せる
    #[error("申し込みが見つかりませんでした。")]
    NoEnrollment,
    #[error("このチケットではホテルを予約できません。")]
    NotEligible,
    #[error("部屋が満室です。")]
    RoomAtCapacity,
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error(transparent)]
    JsonRejection(#[from] axum::extract::rejection::JsonRejection),
    #[error("トランザクションを実行できませんでした。")]
    TransactionError(#[source] sqlx::Error),
    #[error("データベース処理実行中にエラーが発生しました。")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("ログインが必要です。")]
    UnauthenticatedError,
    #[error("{0}")]
    ConversionEntityError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::NoEnrollment | AppError::NotEligible | AppError::RoomAtCapacity => {
                StatusCode::FORBIDDEN
            }
            AppError::ValidationError(_) | AppError::JsonRejection(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        self.status_code().into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
