use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::booking::{self, Booking, PaymentRecord};
use crate::domain::commands::{
    BookingOrigin, ConfirmPayment, CreateBooking, PaymentEventStatus,
};
use crate::domain::value_objects::{BookingId, EntitlementId, OfficeId, RenterId};

/// 予約作成リクエスト（POST /bookings）
///
/// 開始・終了はオフィスの表示タイムゾーンにおける壁時計時刻。
/// `entitlement_id` があれば会員権経由の作成になる。
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub office_id: Uuid,
    pub renter_id: String,
    pub attendees: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub entitlement_id: Option<Uuid>,
}

impl CreateBookingRequest {
    pub fn to_command(&self, requested_at: DateTime<Utc>) -> CreateBooking {
        let origin = match self.entitlement_id {
            Some(id) => BookingOrigin::Entitled {
                entitlement_id: EntitlementId::from_uuid(id),
            },
            None => BookingOrigin::Direct,
        };

        CreateBooking {
            office_id: OfficeId::from_uuid(self.office_id),
            renter_id: RenterId::new(self.renter_id.clone()),
            attendees: self.attendees,
            local_start: self.start,
            local_end: self.end,
            origin,
            requested_at,
        }
    }
}

/// 決済プロバイダのWebhookペイロード（POST /payments/notifications）
#[derive(Debug, Deserialize)]
pub struct PaymentNotificationRequest {
    pub booking_id: Uuid,
    pub status: String,
    pub external_id: String,
    pub amount: i64,
    pub fee: i64,
    pub currency: String,
    pub method: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl PaymentNotificationRequest {
    /// ステータス文字列のパースとコマンドへの変換
    pub fn to_command(&self, received_at: DateTime<Utc>) -> Result<ConfirmPayment, String> {
        let status: PaymentEventStatus = self.status.parse()?;

        Ok(ConfirmPayment {
            booking_id: BookingId::from_uuid(self.booking_id),
            status,
            external_id: self.external_id.clone(),
            amount: self.amount,
            fee: self.fee,
            currency: self.currency.clone(),
            method: self.method.clone(),
            kind: self.kind.clone(),
            received_at,
        })
    }
}

/// 予約一覧取得のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    /// オフィスIDでフィルタリング
    pub office_id: Option<Uuid>,
    /// オフィスの表示タイムゾーンにおける日付
    pub date: Option<NaiveDate>,
    /// 表示ステータスでフィルタリング（pending, scheduled, cancelled）
    pub status: Option<String>,
}

/// 予約作成レスポンス（POST /bookings）
#[derive(Debug, Serialize)]
pub struct BookingCreatedResponse {
    pub booking_id: Uuid,
    pub office_id: Uuid,
    pub status: String,
    pub total_amount: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// 支払い記録レスポンス
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub external_id: String,
    pub amount: i64,
    pub fee: i64,
    pub currency: String,
    pub method: String,
}

impl From<&PaymentRecord> for PaymentResponse {
    fn from(payment: &PaymentRecord) -> Self {
        Self {
            external_id: payment.external_id.clone(),
            amount: payment.amount,
            fee: payment.fee,
            currency: payment.currency.clone(),
            method: payment.method.clone(),
        }
    }
}

/// 予約レスポンス（GET /bookings/:id と GET /bookings）
///
/// `status` は導出ビュー：PENDINGのままホールド期限を過ぎた予約は
/// cancelled として表示される。
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: Uuid,
    pub office_id: Uuid,
    pub renter_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub timezone: String,
    pub attendees: u32,
    pub total_amount: i64,
    pub status: String,
    pub payment: Option<PaymentResponse>,
    pub created_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl BookingResponse {
    /// 予約集約から表示用レスポンスを構築する
    ///
    /// CANCELLEDは保存されないため、現在時刻を渡して読み取り時に導出する。
    pub fn from_booking(b: &Booking, now: DateTime<Utc>) -> Self {
        Self {
            booking_id: b.booking_id.value(),
            office_id: b.office_id.value(),
            renter_id: b.renter_id.as_str().to_string(),
            start: b.interval.start(),
            end: b.interval.end(),
            timezone: b.interval.display_tz().name().to_string(),
            attendees: b.attendees,
            total_amount: b.total_amount,
            status: booking::presented_status(b, now).as_str().to_string(),
            payment: b.payment.as_ref().map(PaymentResponse::from),
            created_at: b.created_at,
            confirmed_at: b.confirmed_at,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
