#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::booking::{self, Booking, BookingStatus};
use super::capacity::CapacityPolicy;
use super::errors::BookOfficeError;
use super::events::BookingCreated;
use super::inactivity::InactivityCalendar;
use super::time_interval::TimeInterval;
use super::value_objects::{BookingId, OfficeId, RenterId};

/// オフィス集約 - 予約可能な物理リソース
///
/// 稼働モデルと休業カレンダーを値として所有する（独立した
/// ライフサイクルを持たないため）。管理操作で編集されるが、
/// 予約エンジンからは読み取り専用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    pub office_id: OfficeId,
    pub name: String,

    /// 1時間あたりの料金（最小通貨単位）
    pub hourly_rate: i64,

    /// 表示タイムゾーン。日付・曜日の判定はこのゾーンで行う
    pub timezone: Tz,

    pub capacity: CapacityPolicy,
    pub inactivity: InactivityCalendar,

    /// 猶予期間付き削除マーカー。この日付に達した時点で削除扱い
    pub deleted_on: Option<NaiveDate>,
}

/// 純粋関数：削除済み判定
///
/// `deleted_on` が設定され、その日付に達していれば削除扱い。
pub fn is_deleted(office: &Office, today: NaiveDate) -> bool {
    match office.deleted_on {
        Some(deleted_on) => deleted_on <= today,
        None => false,
    }
}

/// 純粋関数：予約リクエストの受け入れ判定
///
/// ビジネスルール（この順で判定）：
/// 1. 時間帯が整形であること（正時揃い、end > start）
/// 2. オフィスが削除済みでなく、提案日が休業に該当しないこと
/// 3. 稼働モデルが、同日の稼働中予約に対して時間帯を受け入れること
///
/// 判定対象は渡された予約のうち稼働中（SCHEDULED、または1時間以内の
/// PENDINGホールド）のもののみ。同日の予約の取得は呼び出し側の責務。
///
/// 副作用なし。成功時はPENDINGの新しいBookingとイベントを返す。
/// `total_amount` はここで `hourly_rate × 時間数` として確定する。
///
/// # エラー
/// - `InvalidScheduleTime`: 時間帯が不正
/// - `OfficeUnavailable`: 削除済み・休業・稼働数超過
pub fn try_book(
    office: &Office,
    renter_id: RenterId,
    attendees: u32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    existing_bookings: &[Booking],
    now: DateTime<Utc>,
) -> Result<(Booking, BookingCreated), BookOfficeError> {
    // 1. 時間帯の検証
    let interval = TimeInterval::new(start, end, office.timezone)?;

    // 2. 削除済み・休業の判定（オフィスのタイムゾーンで）
    let today = now.with_timezone(&office.timezone).date_naive();
    if is_deleted(office, today) {
        return Err(BookOfficeError::OfficeUnavailable);
    }
    if office
        .inactivity
        .blocks(interval.local_start_date(), interval.start_weekday())
    {
        return Err(BookOfficeError::OfficeUnavailable);
    }

    // 3. 稼働中の予約に対する稼働モデル判定
    let active_intervals: Vec<TimeInterval> = existing_bookings
        .iter()
        .filter(|b| booking::is_active(b, now))
        .map(|b| b.interval.clone())
        .collect();

    if !office.capacity.admits(&interval, &active_intervals) {
        return Err(BookOfficeError::OfficeUnavailable);
    }

    // 4. PENDING予約の構築
    let booking_id = BookingId::new();
    let total_amount = office.hourly_rate * interval.hours();

    let new_booking = Booking {
        booking_id,
        office_id: office.office_id,
        renter_id: renter_id.clone(),
        interval: interval.clone(),
        attendees,
        total_amount,
        status: BookingStatus::Pending,
        payment: None,
        created_at: now,
        confirmed_at: None,
    };

    let event = BookingCreated {
        booking_id,
        office_id: office.office_id,
        renter_id,
        start: interval.start(),
        end: interval.end(),
        total_amount,
        created_at: now,
    };

    Ok((new_booking, event))
}
