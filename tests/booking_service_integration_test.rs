use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use rusty_office_ddd::adapters::mock::{EntitlementRepository, OfficeRepository};
use rusty_office_ddd::application::booking::{
    BookingApplicationError, ServiceDependencies, confirm_payment, create_booking, get_booking,
    list_bookings_for_office,
};
use rusty_office_ddd::domain::booking::{self, Booking, BookingStatus, BookingStatusView};
use rusty_office_ddd::domain::capacity::CapacityPolicy;
use rusty_office_ddd::domain::commands::*;
use rusty_office_ddd::domain::entitlement::{
    EntitlementStatus, MembershipEntitlement, ValidMonth,
};
use rusty_office_ddd::domain::inactivity::{InactivityCalendar, InactivityEntry};
use rusty_office_ddd::domain::office::Office;
use rusty_office_ddd::domain::value_objects::*;
use rusty_office_ddd::ports::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// インメモリモック実装（テスト用）
// ============================================================================

/// インメモリBookingRepository実装
struct InMemoryBookingRepository {
    bookings: Mutex<HashMap<BookingId, Booking>>,
}

impl InMemoryBookingRepository {
    fn new() -> Self {
        Self {
            bookings: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn store(&self, booking: Booking) -> booking_repository::Result<()> {
        let mut bookings = self.bookings.lock().unwrap();
        bookings.insert(booking.booking_id, booking);
        Ok(())
    }

    async fn update(&self, booking: Booking) -> booking_repository::Result<()> {
        let mut bookings = self.bookings.lock().unwrap();
        bookings.insert(booking.booking_id, booking);
        Ok(())
    }

    async fn find_for_office_on_date(
        &self,
        office_id: OfficeId,
        local_date: NaiveDate,
    ) -> booking_repository::Result<Vec<Booking>> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings
            .values()
            .filter(|b| b.office_id == office_id && b.interval.local_start_date() == local_date)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, booking_id: BookingId) -> booking_repository::Result<Option<Booking>> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings.get(&booking_id).cloned())
    }
}

/// 送信された通知を記録するNotificationService実装
struct RecordingNotificationService {
    confirmed: Mutex<Vec<BookingId>>,
    failed: Mutex<Vec<(BookingId, PaymentEventStatus)>>,
}

impl RecordingNotificationService {
    fn new() -> Self {
        Self {
            confirmed: Mutex::new(Vec::new()),
            failed: Mutex::new(Vec::new()),
        }
    }

    fn confirmed_count(&self) -> usize {
        self.confirmed.lock().unwrap().len()
    }

    fn failed_events(&self) -> Vec<(BookingId, PaymentEventStatus)> {
        self.failed.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NotificationService for RecordingNotificationService {
    async fn send_booking_confirmed(
        &self,
        _renter_id: &RenterId,
        booking_id: BookingId,
        _confirmed_at: DateTime<Utc>,
    ) -> notification_service::Result<()> {
        self.confirmed.lock().unwrap().push(booking_id);
        Ok(())
    }

    async fn send_payment_failed(
        &self,
        _renter_id: &RenterId,
        booking_id: BookingId,
        status: PaymentEventStatus,
    ) -> notification_service::Result<()> {
        self.failed.lock().unwrap().push((booking_id, status));
        Ok(())
    }
}

// ============================================================================
// テストセットアップ
// ============================================================================

struct TestContext {
    deps: ServiceDependencies,
    offices: Arc<OfficeRepository>,
    entitlements: Arc<EntitlementRepository>,
    notifications: Arc<RecordingNotificationService>,
}

fn setup() -> TestContext {
    let booking_repository = Arc::new(InMemoryBookingRepository::new());
    let offices = Arc::new(OfficeRepository::new());
    let entitlements = Arc::new(EntitlementRepository::new());
    let notifications = Arc::new(RecordingNotificationService::new());

    let deps = ServiceDependencies {
        booking_repository,
        office_repository: offices.clone(),
        entitlement_repository: entitlements.clone(),
        notification_service: notifications.clone(),
    };

    TestContext {
        deps,
        offices,
        entitlements,
        notifications,
    }
}

fn exclusive_office(timezone: Tz) -> Office {
    Office {
        office_id: OfficeId::new(),
        name: "Sala Norte".to_string(),
        hourly_rate: 100,
        timezone,
        capacity: CapacityPolicy::Exclusive,
        inactivity: InactivityCalendar::empty(),
        deleted_on: None,
    }
}

fn pooled_office(timezone: Tz, units: u32) -> Office {
    Office {
        capacity: CapacityPolicy::Pooled {
            unit_count: UnitCount::try_from(units).unwrap(),
        },
        ..exclusive_office(timezone)
    }
}

fn paid_entitlement(buyer: &str, weekdays: Vec<Weekday>) -> MembershipEntitlement {
    MembershipEntitlement {
        entitlement_id: EntitlementId::new(),
        buyer_id: RenterId::new(buyer),
        permitted_weekdays: weekdays,
        valid_month: ValidMonth::new(2024, 6),
        price: 5000,
        status: EntitlementStatus::Paid,
    }
}

/// 2024-06-03（月曜日）の壁時計時刻
fn monday_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn monday_utc(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, hour, 0, 0).unwrap()
}

fn direct_request(office: &Office, renter: &str, start_hour: u32, end_hour: u32) -> CreateBooking {
    CreateBooking {
        office_id: office.office_id,
        renter_id: RenterId::new(renter),
        attendees: 2,
        local_start: monday_at(start_hour),
        local_end: monday_at(end_hour),
        origin: BookingOrigin::Direct,
        requested_at: monday_utc(9),
    }
}

fn approved_payment(booking_id: BookingId, received_at: DateTime<Utc>) -> ConfirmPayment {
    ConfirmPayment {
        booking_id,
        status: PaymentEventStatus::Approved,
        external_id: "tx-999".to_string(),
        amount: 200,
        fee: 7,
        currency: "EUR".to_string(),
        method: "card".to_string(),
        kind: "credit_card".to_string(),
        received_at,
    }
}

// ============================================================================
// 直接予約の作成
// ============================================================================

#[tokio::test]
async fn test_direct_booking_creates_pending_hold() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    let booking_id = create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16))
        .await
        .unwrap();

    let stored = get_booking(&ctx.deps, booking_id).await.unwrap();
    assert_eq!(stored.status, BookingStatus::Pending);
    assert!(stored.payment.is_none());
    assert!(booking::is_active(&stored, monday_utc(9)));

    // 100/時 × 2時間 = 200
    assert_eq!(stored.total_amount, 200);

    // 直接予約では確定通知は送られない（支払い待ち）
    assert_eq!(ctx.notifications.confirmed_count(), 0);
}

#[tokio::test]
async fn test_direct_booking_rejects_unaligned_time() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    let mut cmd = direct_request(&office, "renter-1", 14, 16);
    cmd.local_start = NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();

    let result = create_booking(&ctx.deps, cmd).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::InvalidScheduleTime
    ));
}

#[tokio::test]
async fn test_direct_booking_rejects_inverted_range() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    let cmd = direct_request(&office, "renter-1", 16, 14);

    let result = create_booking(&ctx.deps, cmd).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::InvalidScheduleTime
    ));
}

#[tokio::test]
async fn test_create_booking_fails_for_unknown_office() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    // オフィスは登録しない

    let result = create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16)).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::OfficeNotFound
    ));
}

// ============================================================================
// 稼働モデル（専有・プール）
// ============================================================================

#[tokio::test]
async fn test_exclusive_office_rejects_overlapping_slot() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16))
        .await
        .unwrap();

    // [14,16) が稼働中 → [15,17) は不可
    let result = create_booking(&ctx.deps, direct_request(&office, "renter-2", 15, 17)).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::OfficeUnavailable
    ));

    // 背中合わせの [16,17) は可
    let result = create_booking(&ctx.deps, direct_request(&office, "renter-2", 16, 17)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_pooled_office_rejects_when_units_exhausted() {
    let ctx = setup();
    let office = pooled_office(chrono_tz::UTC, 3);
    ctx.offices.add_office(office.clone());

    // [16,17) に重なる3件で3ユニットが埋まる
    create_booking(&ctx.deps, direct_request(&office, "renter-1", 15, 17))
        .await
        .unwrap();
    create_booking(&ctx.deps, direct_request(&office, "renter-2", 16, 18))
        .await
        .unwrap();
    create_booking(&ctx.deps, direct_request(&office, "renter-3", 16, 17))
        .await
        .unwrap();

    let result = create_booking(&ctx.deps, direct_request(&office, "renter-4", 16, 18)).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::OfficeUnavailable
    ));
}

#[tokio::test]
async fn test_pooled_office_admits_when_unit_remains() {
    let ctx = setup();
    let office = pooled_office(chrono_tz::UTC, 3);
    ctx.offices.add_office(office.clone());

    // 同じ時間帯に2件だけなら3ユニット目が空いている
    create_booking(&ctx.deps, direct_request(&office, "renter-1", 15, 17))
        .await
        .unwrap();
    create_booking(&ctx.deps, direct_request(&office, "renter-2", 16, 18))
        .await
        .unwrap();

    let result = create_booking(&ctx.deps, direct_request(&office, "renter-4", 16, 18)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_expired_pending_hold_releases_capacity() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    // 9時に作成されたホールドは10時を過ぎると失効する
    create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16))
        .await
        .unwrap();

    let mut late = direct_request(&office, "renter-2", 14, 16);
    late.requested_at = monday_utc(11);

    let result = create_booking(&ctx.deps, late).await;
    assert!(result.is_ok());
}

// ============================================================================
// 休業・削除
// ============================================================================

#[tokio::test]
async fn test_inactivity_specific_date_blocks_booking() {
    let ctx = setup();
    let mut office = exclusive_office(chrono_tz::UTC);
    office.inactivity = InactivityCalendar::new(vec![InactivityEntry::SpecificDate(
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    )]);
    ctx.offices.add_office(office.clone());

    let result = create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16)).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::OfficeUnavailable
    ));
}

#[tokio::test]
async fn test_inactivity_recurring_weekday_blocks_booking() {
    let ctx = setup();
    let mut office = exclusive_office(chrono_tz::UTC);
    office.inactivity =
        InactivityCalendar::new(vec![InactivityEntry::RecurringWeekday(Weekday::Mon)]);
    ctx.offices.add_office(office.clone());

    // 2024-06-03 は月曜日
    let result = create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16)).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::OfficeUnavailable
    ));
}

#[tokio::test]
async fn test_deleted_office_is_unavailable() {
    let ctx = setup();
    let mut office = exclusive_office(chrono_tz::UTC);
    office.deleted_on = Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    ctx.offices.add_office(office.clone());

    let result = create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16)).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::OfficeUnavailable
    ));
}

#[tokio::test]
async fn test_office_with_future_deletion_date_still_admits() {
    let ctx = setup();
    let mut office = exclusive_office(chrono_tz::UTC);
    office.deleted_on = Some(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    ctx.offices.add_office(office.clone());

    let result = create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16)).await;
    assert!(result.is_ok());
}

// ============================================================================
// タイムゾーン変換
// ============================================================================

#[tokio::test]
async fn test_booking_interpreted_in_office_timezone() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::Europe::Madrid);
    ctx.offices.add_office(office.clone());

    // マドリード 2024-06-03 14:00 は CEST (UTC+2) → UTC 12:00
    let booking_id = create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16))
        .await
        .unwrap();

    let stored = get_booking(&ctx.deps, booking_id).await.unwrap();
    assert_eq!(stored.interval.start(), monday_utc(12));
    assert_eq!(stored.interval.end(), monday_utc(14));
    assert_eq!(
        stored.interval.local_start_date(),
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    );

    // 同じローカル時間帯の2件目は専有オフィスでは不可
    let result = create_booking(&ctx.deps, direct_request(&office, "renter-2", 14, 16)).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::OfficeUnavailable
    ));
}

// ============================================================================
// 会員権経由の作成
// ============================================================================

#[tokio::test]
async fn test_entitled_booking_fails_when_entitlement_missing() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    let mut cmd = direct_request(&office, "renter-1", 14, 16);
    cmd.origin = BookingOrigin::Entitled {
        entitlement_id: EntitlementId::new(),
    };

    let result = create_booking(&ctx.deps, cmd).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::EntitlementNotFound
    ));
}

#[tokio::test]
async fn test_entitled_booking_fails_for_other_buyer() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    let membership = paid_entitlement("renter-1", vec![Weekday::Mon]);
    ctx.entitlements.add_entitlement(membership.clone());

    let mut cmd = direct_request(&office, "renter-2", 14, 16);
    cmd.origin = BookingOrigin::Entitled {
        entitlement_id: membership.entitlement_id,
    };

    let result = create_booking(&ctx.deps, cmd).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::EntitlementForbidden
    ));
}

#[tokio::test]
async fn test_entitled_booking_fails_when_not_paid() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    let mut membership = paid_entitlement("renter-1", vec![Weekday::Mon]);
    membership.status = EntitlementStatus::Pending;
    ctx.entitlements.add_entitlement(membership.clone());

    let mut cmd = direct_request(&office, "renter-1", 14, 16);
    cmd.origin = BookingOrigin::Entitled {
        entitlement_id: membership.entitlement_id,
    };

    let result = create_booking(&ctx.deps, cmd).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::EntitlementNotActive
    ));
}

#[tokio::test]
async fn test_entitled_booking_fails_outside_valid_month() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    let mut membership = paid_entitlement("renter-1", vec![Weekday::Mon]);
    membership.valid_month = ValidMonth::new(2024, 5);
    ctx.entitlements.add_entitlement(membership.clone());

    let mut cmd = direct_request(&office, "renter-1", 14, 16);
    cmd.origin = BookingOrigin::Entitled {
        entitlement_id: membership.entitlement_id,
    };

    let result = create_booking(&ctx.deps, cmd).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::EntitlementNotActive
    ));
}

#[tokio::test]
async fn test_entitled_booking_fails_on_non_permitted_weekday() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    // 月曜日に水曜日限定の会員権は使えない
    let membership = paid_entitlement("renter-1", vec![Weekday::Wed]);
    ctx.entitlements.add_entitlement(membership.clone());

    let mut cmd = direct_request(&office, "renter-1", 14, 16);
    cmd.origin = BookingOrigin::Entitled {
        entitlement_id: membership.entitlement_id,
    };

    let result = create_booking(&ctx.deps, cmd).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::EntitlementNotActive
    ));
}

#[tokio::test]
async fn test_entitled_booking_is_scheduled_with_zero_payment() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    let membership = paid_entitlement("renter-1", vec![Weekday::Mon]);
    ctx.entitlements.add_entitlement(membership.clone());

    let mut cmd = direct_request(&office, "renter-1", 14, 16);
    cmd.origin = BookingOrigin::Entitled {
        entitlement_id: membership.entitlement_id,
    };

    let booking_id = create_booking(&ctx.deps, cmd).await.unwrap();

    // 外部決済なしで即時確定、支払いはゼロ額のプレースホルダ
    let stored = get_booking(&ctx.deps, booking_id).await.unwrap();
    assert_eq!(stored.status, BookingStatus::Scheduled);
    let payment = stored.payment.unwrap();
    assert_eq!(payment.amount, 0);
    assert_eq!(payment.method, "membership");

    // 予約自体の金額は通常どおり計算される
    assert_eq!(stored.total_amount, 200);

    // 確定通知が送られる
    assert_eq!(ctx.notifications.confirmed_count(), 1);
}

// ============================================================================
// 支払いイベント処理
// ============================================================================

#[tokio::test]
async fn test_approved_payment_schedules_booking() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    let booking_id = create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16))
        .await
        .unwrap();

    confirm_payment(&ctx.deps, approved_payment(booking_id, monday_utc(10)))
        .await
        .unwrap();

    let stored = get_booking(&ctx.deps, booking_id).await.unwrap();
    assert_eq!(stored.status, BookingStatus::Scheduled);
    assert_eq!(stored.confirmed_at, Some(monday_utc(10)));
    assert_eq!(stored.payment.unwrap().external_id, "tx-999");
    assert_eq!(ctx.notifications.confirmed_count(), 1);
}

#[tokio::test]
async fn test_rejected_payment_keeps_booking_pending() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    let booking_id = create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16))
        .await
        .unwrap();

    let mut event = approved_payment(booking_id, monday_utc(10));
    event.status = PaymentEventStatus::Rejected;

    confirm_payment(&ctx.deps, event).await.unwrap();

    // 状態は変わらず、失敗通知のみ
    let stored = get_booking(&ctx.deps, booking_id).await.unwrap();
    assert_eq!(stored.status, BookingStatus::Pending);
    assert!(stored.payment.is_none());

    let failed = ctx.notifications.failed_events();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0], (booking_id, PaymentEventStatus::Rejected));
    assert_eq!(ctx.notifications.confirmed_count(), 0);
}

#[tokio::test]
async fn test_duplicate_approval_is_rejected() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    let booking_id = create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16))
        .await
        .unwrap();

    confirm_payment(&ctx.deps, approved_payment(booking_id, monday_utc(10)))
        .await
        .unwrap();

    // 重複Webhook：2回目の承認は拒否され、支払い記録は上書きされない
    let mut duplicate = approved_payment(booking_id, monday_utc(11));
    duplicate.external_id = "tx-duplicate".to_string();

    let result = confirm_payment(&ctx.deps, duplicate).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::AlreadyScheduled
    ));

    let stored = get_booking(&ctx.deps, booking_id).await.unwrap();
    assert_eq!(stored.payment.unwrap().external_id, "tx-999");
}

#[tokio::test]
async fn test_payment_for_unknown_booking_fails() {
    let ctx = setup();

    let result = confirm_payment(
        &ctx.deps,
        approved_payment(BookingId::new(), monday_utc(10)),
    )
    .await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::BookingNotFound
    ));
}

// ============================================================================
// ライフサイクル表示
// ============================================================================

#[tokio::test]
async fn test_pending_hold_displays_cancelled_after_expiry() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    let booking_id = create_booking(&ctx.deps, direct_request(&office, "renter-1", 14, 16))
        .await
        .unwrap();
    let stored = get_booking(&ctx.deps, booking_id).await.unwrap();

    // 作成直後はPENDINGとして表示され、稼働中
    let created_at = stored.created_at;
    assert_eq!(
        booking::presented_status(&stored, created_at),
        BookingStatusView::Pending
    );

    // 1時間1分経過で表示はCANCELLEDになり、稼働中でなくなる
    let expired_at = created_at + Duration::hours(1) + Duration::minutes(1);
    assert_eq!(
        booking::presented_status(&stored, expired_at),
        BookingStatusView::Cancelled
    );
    assert!(!booking::is_active(&stored, expired_at));
}

#[tokio::test]
async fn test_list_bookings_for_office_on_date() {
    let ctx = setup();
    let office = exclusive_office(chrono_tz::UTC);
    ctx.offices.add_office(office.clone());

    create_booking(&ctx.deps, direct_request(&office, "renter-1", 9, 10))
        .await
        .unwrap();
    create_booking(&ctx.deps, direct_request(&office, "renter-2", 14, 16))
        .await
        .unwrap();

    let found = list_bookings_for_office(
        &ctx.deps,
        office.office_id,
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(found.len(), 2);

    let other_day = list_bookings_for_office(
        &ctx.deps,
        office.office_id,
        NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
    )
    .await
    .unwrap();
    assert!(other_day.is_empty());
}
