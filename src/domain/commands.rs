use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{BookingId, EntitlementId, OfficeId, RenterId};

/// 予約の作成経路
///
/// 2通りの作成方法を網羅的な列挙型で表す：
/// - `Direct`: 確定時に料金を請求する通常予約
/// - `Entitled`: 月額会員権で料金を免除する予約
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingOrigin {
    Direct,
    Entitled { entitlement_id: EntitlementId },
}

/// コマンド：予約を作成する
///
/// 開始・終了はリクエスト元の壁時計時刻（タイムゾーンなし）で渡され、
/// オフィスの表示タイムゾーンで解釈される。現在時刻は呼び出し側から
/// 明示的に渡す（グローバルな時刻取得はしない）。
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBooking {
    pub office_id: OfficeId,
    pub renter_id: RenterId,
    pub attendees: u32,
    pub local_start: NaiveDateTime,
    pub local_end: NaiveDateTime,
    pub origin: BookingOrigin,
    pub requested_at: DateTime<Utc>,
}

/// 決済プロバイダのイベント種別
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentEventStatus {
    Approved,
    Rejected,
    Cancelled,
    Refunded,
    ChargedBack,
}

impl PaymentEventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentEventStatus::Approved => "approved",
            PaymentEventStatus::Rejected => "rejected",
            PaymentEventStatus::Cancelled => "cancelled",
            PaymentEventStatus::Refunded => "refunded",
            PaymentEventStatus::ChargedBack => "charged_back",
        }
    }
}

impl std::str::FromStr for PaymentEventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(PaymentEventStatus::Approved),
            "rejected" => Ok(PaymentEventStatus::Rejected),
            "cancelled" => Ok(PaymentEventStatus::Cancelled),
            "refunded" => Ok(PaymentEventStatus::Refunded),
            "charged_back" => Ok(PaymentEventStatus::ChargedBack),
            _ => Err(format!("Invalid payment event status: {}", s)),
        }
    }
}

/// コマンド：支払いイベントを処理する
///
/// 決済プロバイダから予約単位で非同期に届くWebhookの内容。
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmPayment {
    pub booking_id: BookingId,
    pub status: PaymentEventStatus,
    pub external_id: String,
    pub amount: i64,
    pub fee: i64,
    pub currency: String,
    pub method: String,
    pub kind: String,
    pub received_at: DateTime<Utc>,
}
