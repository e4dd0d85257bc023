use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::commands::PaymentEventStatus;
use super::value_objects::{BookingId, OfficeId, RenterId};

/// イベント：予約が作成された（PENDINGホールド）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreated {
    pub booking_id: BookingId,
    pub office_id: OfficeId,
    pub renter_id: RenterId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
}

/// イベント：支払いが確認され予約が確定した
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingScheduled {
    pub booking_id: BookingId,
    pub office_id: OfficeId,
    pub renter_id: RenterId,
    /// プロバイダ側のトランザクションID（会員権の場合は会員権参照）
    pub external_id: String,
    pub amount: i64,
    pub confirmed_at: DateTime<Utc>,
}

/// イベント：支払いが失敗・取消された
///
/// 予約の状態は変化しない。通知の契機としてのみ使われる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFailed {
    pub booking_id: BookingId,
    pub renter_id: RenterId,
    pub status: PaymentEventStatus,
    pub external_id: String,
    pub received_at: DateTime<Utc>,
}
