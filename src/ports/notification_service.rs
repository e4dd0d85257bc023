use crate::domain::commands::PaymentEventStatus;
use crate::domain::value_objects::{BookingId, RenterId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知サービスポート
///
/// 利用者への通知配信メカニズムを抽象化する。
/// 通知の文面・配信手段（メール等）はこのコンテキストの関心外。
#[allow(dead_code)]
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// 予約確定通知を利用者に送信する
    ///
    /// BookingScheduledイベント処理時に呼ばれる。
    async fn send_booking_confirmed(
        &self,
        renter_id: &RenterId,
        booking_id: BookingId,
        confirmed_at: DateTime<Utc>,
    ) -> Result<()>;

    /// 支払い失敗通知を利用者に送信する
    ///
    /// 承認以外の支払いイベント受信時に呼ばれる。予約の状態は変更されない。
    async fn send_payment_failed(
        &self,
        renter_id: &RenterId,
        booking_id: BookingId,
        status: PaymentEventStatus,
    ) -> Result<()>;
}
