use crate::domain::booking::{self, Booking, PaymentRecord};
use crate::domain::commands::*;
use crate::domain::entitlement;
use crate::domain::events::PaymentFailed;
use crate::domain::office::{self, Office};
use crate::domain::time_interval::TimeInterval;
use crate::domain::value_objects::*;
use crate::ports::*;
use chrono::NaiveDate;
use std::sync::Arc;

use super::errors::{BookingApplicationError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
///
/// エンジン自体は同期的・無状態な判定計算であり、ブロッキングI/O
/// （既存予約の取得、予約の永続化、通知）はすべてポート越しに行われる。
#[derive(Clone)]
#[allow(dead_code)]
pub struct ServiceDependencies {
    pub booking_repository: Arc<dyn BookingRepository>,
    pub office_repository: Arc<dyn OfficeRepository>,
    pub entitlement_repository: Arc<dyn EntitlementRepository>,
    pub notification_service: Arc<dyn NotificationService>,
}

/// オフィスを取得するヘルパー関数
///
/// # エラー
/// - RepositoryError: 読み込み失敗
/// - OfficeNotFound: オフィスが存在しない
async fn load_office(
    office_repository: &Arc<dyn OfficeRepository>,
    office_id: OfficeId,
) -> Result<Office> {
    office_repository
        .get(office_id)
        .await
        .map_err(BookingApplicationError::RepositoryError)?
        .ok_or(BookingApplicationError::OfficeNotFound)
}

/// 予約を取得するヘルパー関数
///
/// # エラー
/// - RepositoryError: 読み込み失敗
/// - BookingNotFound: 予約が存在しない
async fn load_booking(
    booking_repository: &Arc<dyn BookingRepository>,
    booking_id: BookingId,
) -> Result<Booking> {
    booking_repository
        .get_by_id(booking_id)
        .await
        .map_err(BookingApplicationError::RepositoryError)?
        .ok_or(BookingApplicationError::BookingNotFound)
}

/// 予約を作成する（純粋な関数）
///
/// ビジネスルール：
/// - 時間帯はオフィスの表示タイムゾーンで解釈し、正時に揃っていること
/// - オフィスが削除済みでなく、提案日が休業に該当しないこと
/// - 稼働モデルが同日の稼働中予約に対して時間帯を受け入れること
/// - 会員権経由の場合は、会員権が予約者本人のもので、支払い済み、
///   有効月内、許可曜日であること。成功時は外部決済なしで即時確定する
///
/// 2つの作成経路は可用性判定を完全に共有し、支払いゲートと会員権の
/// 前提条件のみが異なる。
///
/// # 一貫性保証
///
/// 「既存予約の読み取り」と「新規予約の保存」の間で競合しうるため、
/// 同一オフィスへの受け入れは永続化層側で直列化されている必要がある
/// （例：トランザクション分離、オフィス単位のロック）。このエンジンは
/// 判定を計算するのみで、相互排除は提供しない。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `cmd` - 予約作成コマンド
///
/// # 戻り値
/// 成功時は作成された予約のID
#[allow(dead_code)]
pub async fn create_booking(deps: &ServiceDependencies, cmd: CreateBooking) -> Result<BookingId> {
    // 1. オフィスの取得
    let office = load_office(&deps.office_repository, cmd.office_id).await?;

    // 2. 壁時計時刻をオフィスの表示タイムゾーンで解釈
    let interval = TimeInterval::from_local(cmd.local_start, cmd.local_end, office.timezone)
        .map_err(|_| BookingApplicationError::InvalidScheduleTime)?;
    let local_date = interval.local_start_date();

    // 3. 同日の既存予約を取得（候補集合は開始日の暦日のみ）
    let existing = deps
        .booking_repository
        .find_for_office_on_date(office.office_id, local_date)
        .await
        .map_err(BookingApplicationError::RepositoryError)?;

    match cmd.origin {
        // 直接予約：PENDINGのまま保存し、支払いは後続のWebhookで確認される
        BookingOrigin::Direct => {
            let (new_booking, _event) = office::try_book(
                &office,
                cmd.renter_id,
                cmd.attendees,
                interval.start(),
                interval.end(),
                &existing,
                cmd.requested_at,
            )?;

            let booking_id = new_booking.booking_id;
            deps.booking_repository
                .store(new_booking)
                .await
                .map_err(BookingApplicationError::RepositoryError)?;

            Ok(booking_id)
        }

        // 会員権予約：認可判定の後、同じ可用性判定を経て即時確定する
        BookingOrigin::Entitled { entitlement_id } => {
            let membership = deps
                .entitlement_repository
                .get(entitlement_id)
                .await
                .map_err(BookingApplicationError::RepositoryError)?
                .ok_or(BookingApplicationError::EntitlementNotFound)?;

            entitlement::authorize(&membership, &cmd.renter_id, local_date)?;

            let (new_booking, _created) = office::try_book(
                &office,
                cmd.renter_id.clone(),
                cmd.attendees,
                interval.start(),
                interval.end(),
                &existing,
                cmd.requested_at,
            )?;

            // 料金は会員権で免除：ゼロ額のプレースホルダで即時確定
            let payment = PaymentRecord::membership(entitlement_id.value().to_string());
            let (confirmed, event) =
                booking::mark_scheduled(&new_booking, payment, cmd.requested_at)?;

            let booking_id = confirmed.booking_id;
            deps.booking_repository
                .store(confirmed)
                .await
                .map_err(BookingApplicationError::RepositoryError)?;

            deps.notification_service
                .send_booking_confirmed(&cmd.renter_id, booking_id, event.confirmed_at)
                .await
                .map_err(BookingApplicationError::NotificationError)?;

            Ok(booking_id)
        }
    }
}

/// 支払いイベントを処理する（純粋な関数）
///
/// ビジネスルール：
/// - 承認（approved）のみが PENDING → SCHEDULED 遷移を起こす
/// - それ以外（rejected/cancelled/refunded/charged_back）は状態を
///   変更せず、失敗通知のみを送る
/// - 既に確定済みの予約への承認はAlreadyScheduled（重複Webhook対策）
///
/// 決済プロバイダのエラーは確定ステップに閉じており、
/// 作成判定には影響しない。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `cmd` - 支払いイベントコマンド
#[allow(dead_code)]
pub async fn confirm_payment(deps: &ServiceDependencies, cmd: ConfirmPayment) -> Result<()> {
    // 1. 予約の取得
    let booking = load_booking(&deps.booking_repository, cmd.booking_id).await?;

    match cmd.status {
        PaymentEventStatus::Approved => {
            // 2. 支払い記録を作成し、ドメイン層の純粋関数で確定遷移
            let payment = PaymentRecord {
                external_id: cmd.external_id,
                amount: cmd.amount,
                fee: cmd.fee,
                currency: cmd.currency,
                method: cmd.method,
                kind: cmd.kind,
            };
            let (confirmed, event) =
                booking::mark_scheduled(&booking, payment, cmd.received_at)?;

            // 3. 更新を永続化
            deps.booking_repository
                .update(confirmed)
                .await
                .map_err(BookingApplicationError::RepositoryError)?;

            // 4. 確定通知
            deps.notification_service
                .send_booking_confirmed(&event.renter_id, event.booking_id, event.confirmed_at)
                .await
                .map_err(BookingApplicationError::NotificationError)?;

            Ok(())
        }

        // 失敗系：状態は変えず通知のみ
        status => {
            let event = PaymentFailed {
                booking_id: booking.booking_id,
                renter_id: booking.renter_id,
                status,
                external_id: cmd.external_id,
                received_at: cmd.received_at,
            };

            deps.notification_service
                .send_payment_failed(&event.renter_id, event.booking_id, event.status)
                .await
                .map_err(BookingApplicationError::NotificationError)?;

            Ok(())
        }
    }
}

/// IDで予約を取得する
///
/// 表示用ステータス（CANCELLED導出を含む）の計算は呼び出し側が
/// `domain::booking::presented_status` で行う。
#[allow(dead_code)]
pub async fn get_booking(deps: &ServiceDependencies, booking_id: BookingId) -> Result<Booking> {
    load_booking(&deps.booking_repository, booking_id).await
}

/// オフィスの特定日の予約一覧を取得する
#[allow(dead_code)]
pub async fn list_bookings_for_office(
    deps: &ServiceDependencies,
    office_id: OfficeId,
    local_date: NaiveDate,
) -> Result<Vec<Booking>> {
    deps.booking_repository
        .find_for_office_on_date(office_id, local_date)
        .await
        .map_err(BookingApplicationError::RepositoryError)
}
