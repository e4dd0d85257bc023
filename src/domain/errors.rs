#![allow(dead_code)]

use super::time_interval::ScheduleTimeError;

/// 予約受け入れ判定のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookOfficeError {
    /// 時間帯が不正（正時に揃っていない、または長さが正でない）
    InvalidScheduleTime,
    /// オフィスが利用不可（削除済み・休業・稼働数超過）
    OfficeUnavailable,
}

impl From<ScheduleTimeError> for BookOfficeError {
    fn from(_: ScheduleTimeError) -> Self {
        BookOfficeError::InvalidScheduleTime
    }
}

/// 確定遷移のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmBookingError {
    /// 既に確定済み（支払い記録の上書き防止）
    AlreadyScheduled,
}

/// 会員権の認可エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntitlementAccessError {
    /// 購入者と予約者が一致しない
    Forbidden,
    /// 未払い・有効月外・許可されない曜日
    NotActive,
}
