#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ConfirmBookingError;
use super::events::BookingScheduled;
use super::time_interval::TimeInterval;
use super::value_objects::{BookingId, OfficeId, RenterId};

/// 未確定ホールドの有効時間（時間）
///
/// 支払い確認がないまま作成から1時間を超えたPENDING予約は、
/// 読み取り時にキャンセル扱いとして表示される。
pub const PENDING_HOLD_HOURS: i64 = 1;

/// 支払い記録
///
/// 決済プロバイダの確認イベントから作成される。確定時に一度だけ作られ、
/// 以後変更されない。金額は最小通貨単位の整数。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// プロバイダ側のトランザクションID
    pub external_id: String,
    /// 請求金額
    pub amount: i64,
    /// プロバイダ手数料
    pub fee: i64,
    pub currency: String,
    /// 支払い手段（card, transfer, membership など）
    pub method: String,
    /// 決済種別
    pub kind: String,
}

impl PaymentRecord {
    /// 会員権による予約の支払いプレースホルダ
    ///
    /// 月額会員権で料金が免除された予約に記録される。
    /// 外部決済は発生しないため金額・手数料ともに0。
    pub fn membership(entitlement_ref: impl Into<String>) -> Self {
        Self {
            external_id: entitlement_ref.into(),
            amount: 0,
            fee: 0,
            currency: "EUR".to_string(),
            method: "membership".to_string(),
            kind: "membership".to_string(),
        }
    }
}

/// 保存される予約ステータス
///
/// `Cancelled` は保存されない：PENDINGのまま1時間を超えた予約を
/// 読み取り時に導出するビューであり、背景ジョブは存在しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    /// 作成直後、支払い待ち
    Pending,
    /// 支払い確認済み
    Scheduled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Scheduled => "scheduled",
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "scheduled" => Ok(BookingStatus::Scheduled),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

/// 表示用の予約ステータス（導出ビュー）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatusView {
    Pending,
    Scheduled,
    Cancelled,
}

impl BookingStatusView {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatusView::Pending => "pending",
            BookingStatusView::Scheduled => "scheduled",
            BookingStatusView::Cancelled => "cancelled",
        }
    }
}

/// 予約集約 - 1つのオフィスの1回の時間帯予約
///
/// オフィスへの参照はIDのみ（FK型）。`total_amount` は作成時の
/// 単価×時間で確定し、以後オフィス側の変更に影響されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    // 識別子
    pub booking_id: BookingId,

    // 他の集約への参照（IDのみ）
    pub office_id: OfficeId,
    pub renter_id: RenterId,

    // 予約内容
    pub interval: TimeInterval,
    pub attendees: u32,
    pub total_amount: i64,

    // ライフサイクル
    pub status: BookingStatus,
    pub payment: Option<PaymentRecord>,
    pub created_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// 純粋関数：予約が稼働中か
///
/// ビジネスルール：
/// - SCHEDULED は常に稼働中
/// - PENDING は作成から1時間以内のみ稼働中（ホールド）
///
/// 稼働中の予約だけが稼働モデルの判定対象になる。
pub fn is_active(booking: &Booking, now: DateTime<Utc>) -> bool {
    match booking.status {
        BookingStatus::Scheduled => true,
        BookingStatus::Pending => {
            now - booking.created_at <= Duration::hours(PENDING_HOLD_HOURS)
        }
    }
}

/// 純粋関数：表示用ステータスの導出
///
/// PENDINGのままホールド期限を過ぎた予約はCANCELLEDとして表示される。
/// 保存ステータスは変更されない（読み取り時の計算のみ）。
pub fn presented_status(booking: &Booking, now: DateTime<Utc>) -> BookingStatusView {
    match booking.status {
        BookingStatus::Scheduled => BookingStatusView::Scheduled,
        BookingStatus::Pending => {
            if is_active(booking, now) {
                BookingStatusView::Pending
            } else {
                BookingStatusView::Cancelled
            }
        }
    }
}

/// 純粋関数：支払い確認による確定遷移
///
/// ビジネスルール：
/// - PENDING → SCHEDULED の一方向遷移
/// - 支払い記録と確定日時を記録する
/// - 既にSCHEDULEDの予約は再確定不可（重複Webhookで支払い記録を
///   上書きしないための冪等性ガード）
///
/// 副作用なし。新しいBookingとイベントを返す。
pub fn mark_scheduled(
    booking: &Booking,
    payment: PaymentRecord,
    confirmed_at: DateTime<Utc>,
) -> Result<(Booking, BookingScheduled), ConfirmBookingError> {
    if booking.status == BookingStatus::Scheduled {
        return Err(ConfirmBookingError::AlreadyScheduled);
    }

    let event = BookingScheduled {
        booking_id: booking.booking_id,
        office_id: booking.office_id,
        renter_id: booking.renter_id.clone(),
        external_id: payment.external_id.clone(),
        amount: payment.amount,
        confirmed_at,
    };

    let new_booking = Booking {
        status: BookingStatus::Scheduled,
        payment: Some(payment),
        confirmed_at: Some(confirmed_at),
        ..booking.clone()
    };

    Ok((new_booking, event))
}
