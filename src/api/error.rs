use crate::application::booking::BookingApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    Application(BookingApplicationError),
    /// リクエスト自体が解釈できない（不明なステータス文字列など）
    BadRequest(String),
}

impl From<BookingApplicationError> for ApiError {
    fn from(err: BookingApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.as_str())
            }

            // 404 Not Found - リクエストされたリソースが存在しない
            ApiError::Application(BookingApplicationError::BookingNotFound) => {
                (StatusCode::NOT_FOUND, "BOOKING_NOT_FOUND", "Booking not found")
            }

            // 422 Unprocessable Entity - ビジネスルール違反
            ApiError::Application(BookingApplicationError::OfficeNotFound) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "OFFICE_NOT_FOUND",
                "Office not found",
            ),
            ApiError::Application(BookingApplicationError::InvalidScheduleTime) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_SCHEDULE_TIME",
                "Schedule boundaries must be whole hours with a positive duration",
            ),
            ApiError::Application(BookingApplicationError::OfficeUnavailable) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "OFFICE_UNAVAILABLE",
                "Office is not available for the requested slot",
            ),
            ApiError::Application(BookingApplicationError::EntitlementNotFound) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ENTITLEMENT_NOT_FOUND",
                "Entitlement not found",
            ),
            ApiError::Application(BookingApplicationError::EntitlementForbidden) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ENTITLEMENT_FORBIDDEN",
                "Entitlement does not belong to the renter",
            ),
            ApiError::Application(BookingApplicationError::EntitlementNotActive) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ENTITLEMENT_NOT_ACTIVE",
                "Entitlement is not active for the requested date",
            ),
            ApiError::Application(BookingApplicationError::AlreadyScheduled) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ALREADY_SCHEDULED",
                "Booking is already scheduled",
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(BookingApplicationError::RepositoryError(ref e)) => {
                tracing::error!("Repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPOSITORY_ERROR",
                    "Failed to access storage",
                )
            }
            ApiError::Application(BookingApplicationError::NotificationError(ref e)) => {
                tracing::error!("Notification error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NOTIFICATION_ERROR",
                    "Failed to send notification",
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
