use thiserror::Error;

use crate::domain::errors::{BookOfficeError, ConfirmBookingError, EntitlementAccessError};

/// 予約管理アプリケーション層のエラー
///
/// ビジネス上の失敗はすべて期待される結果として呼び出し側に返される。
/// ストレージ障害はビジネスエラーと区別され、リトライは永続化
/// コラボレータの責務（この層では行わない）。
#[derive(Debug, Error)]
pub enum BookingApplicationError {
    /// オフィスが存在しない
    #[error("Office not found")]
    OfficeNotFound,

    /// 予約時間帯が不正（正時に揃っていない、または長さが正でない）
    #[error("Invalid schedule time")]
    InvalidScheduleTime,

    /// オフィスが利用不可（削除済み・休業・稼働数超過）
    #[error("Office is not available for the requested slot")]
    OfficeUnavailable,

    /// 会員権が存在しない
    #[error("Entitlement not found")]
    EntitlementNotFound,

    /// 会員権の購入者と予約者が一致しない
    #[error("Entitlement does not belong to the renter")]
    EntitlementForbidden,

    /// 会員権が有効でない（未払い・有効月外・許可されない曜日）
    #[error("Entitlement is not active for the requested date")]
    EntitlementNotActive,

    /// 予約が見つからない
    #[error("Booking not found")]
    BookingNotFound,

    /// 既に確定済みの予約への再確定（重複Webhook）
    #[error("Booking is already scheduled")]
    AlreadyScheduled,

    /// リポジトリのエラー
    #[error("Repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 通知サービスのエラー
    #[error("Notification error")]
    NotificationError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<BookOfficeError> for BookingApplicationError {
    fn from(err: BookOfficeError) -> Self {
        match err {
            BookOfficeError::InvalidScheduleTime => BookingApplicationError::InvalidScheduleTime,
            BookOfficeError::OfficeUnavailable => BookingApplicationError::OfficeUnavailable,
        }
    }
}

impl From<ConfirmBookingError> for BookingApplicationError {
    fn from(err: ConfirmBookingError) -> Self {
        match err {
            ConfirmBookingError::AlreadyScheduled => BookingApplicationError::AlreadyScheduled,
        }
    }
}

impl From<EntitlementAccessError> for BookingApplicationError {
    fn from(err: EntitlementAccessError) -> Self {
        match err {
            EntitlementAccessError::Forbidden => BookingApplicationError::EntitlementForbidden,
            EntitlementAccessError::NotActive => BookingApplicationError::EntitlementNotActive,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookingApplicationError>;
