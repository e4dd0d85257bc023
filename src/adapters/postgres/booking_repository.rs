use crate::domain::booking::{Booking, BookingStatus, PaymentRecord};
use crate::domain::time_interval::TimeInterval;
use crate::domain::value_objects::{BookingId, OfficeId, RenterId};
use crate::ports::booking_repository::{BookingRepository as BookingRepositoryTrait, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

fn invalid_data(message: impl Into<String>) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        message.into(),
    ))
}

/// PostgreSQLの行データをBookingに変換する
///
/// ステータス・タイムゾーン・時間帯・支払い記録（JSONB）の復元で
/// エラーハンドリングを行う。
fn map_row_to_booking(row: &PgRow) -> Result<Booking> {
    let status_str: &str = row.get("status");
    let status = BookingStatus::from_str(status_str).map_err(invalid_data)?;

    let tz_str: &str = row.get("display_tz");
    let display_tz = chrono_tz::Tz::from_str(tz_str)
        .map_err(|_| invalid_data(format!("Invalid timezone: {}", tz_str)))?;

    let interval = TimeInterval::new(row.get("start_at"), row.get("end_at"), display_tz)
        .map_err(|e| invalid_data(format!("Invalid stored interval: {:?}", e)))?;

    let attendees_i32: i32 = row.get("attendees");
    let attendees: u32 = attendees_i32
        .try_into()
        .map_err(|_| invalid_data(format!("attendees out of range: {}", attendees_i32)))?;

    let payment: Option<PaymentRecord> = row
        .get::<Option<serde_json::Value>, _>("payment")
        .map(serde_json::from_value)
        .transpose()?;

    Ok(Booking {
        booking_id: BookingId::from_uuid(row.get("booking_id")),
        office_id: OfficeId::from_uuid(row.get("office_id")),
        renter_id: RenterId::new(row.get::<String, _>("renter_id")),
        interval,
        attendees,
        total_amount: row.get("total_amount"),
        status,
        payment,
        created_at: row.get("created_at"),
        confirmed_at: row.get("confirmed_at"),
    })
}

/// BookingRepositoryのPostgreSQL実装
///
/// 予約の受け入れ判定は「既存予約の読み取り」と「保存」の間で
/// 競合しうる。同一オフィスへの受け入れの直列化（トランザクション
/// 分離やオフィス単位のアドバイザリロック）はこの永続化層を使う
/// 呼び出し側のトランザクション設計で担保すること。
#[allow(dead_code)]
pub struct BookingRepository {
    pool: PgPool,
}

#[allow(dead_code)]
impl BookingRepository {
    /// PostgreSQLコネクションプールから新しいBookingRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepositoryTrait for BookingRepository {
    /// 新しい予約を保存する
    ///
    /// `local_date` はオフィスの表示タイムゾーンにおける開始日で
    /// 非正規化され、同日予約の検索に使われる。
    async fn store(&self, booking: Booking) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                booking_id,
                office_id,
                renter_id,
                start_at,
                end_at,
                display_tz,
                local_date,
                attendees,
                total_amount,
                status,
                payment,
                created_at,
                confirmed_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(booking.booking_id.value())
        .bind(booking.office_id.value())
        .bind(booking.renter_id.as_str())
        .bind(booking.interval.start())
        .bind(booking.interval.end())
        .bind(booking.interval.display_tz().name())
        .bind(booking.interval.local_start_date())
        .bind(booking.attendees as i32)
        .bind(booking.total_amount)
        .bind(booking.status.as_str())
        .bind(
            booking
                .payment
                .as_ref()
                .map(serde_json::to_value)
                .transpose()?,
        )
        .bind(booking.created_at)
        .bind(booking.confirmed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 既存の予約を更新する
    ///
    /// 可変なのはライフサイクル関連のカラムのみ。時間帯・金額は
    /// 作成時に確定し変更されない。
    async fn update(&self, booking: Booking) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE bookings
            SET status = $2,
                payment = $3,
                confirmed_at = $4
            WHERE booking_id = $1
            "#,
        )
        .bind(booking.booking_id.value())
        .bind(booking.status.as_str())
        .bind(
            booking
                .payment
                .as_ref()
                .map(serde_json::to_value)
                .transpose()?,
        )
        .bind(booking.confirmed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// オフィスの特定日の予約をすべて取得する
    ///
    /// (office_id, local_date) のインデックスを使用する。
    async fn find_for_office_on_date(
        &self,
        office_id: OfficeId,
        local_date: NaiveDate,
    ) -> Result<Vec<Booking>> {
        let rows = sqlx::query(
            r#"
            SELECT
                booking_id,
                office_id,
                renter_id,
                start_at,
                end_at,
                display_tz,
                local_date,
                attendees,
                total_amount,
                status,
                payment,
                created_at,
                confirmed_at
            FROM bookings
            WHERE office_id = $1 AND local_date = $2
            ORDER BY start_at ASC
            "#,
        )
        .bind(office_id.value())
        .bind(local_date)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_booking).collect()
    }

    /// IDで予約を取得する
    async fn get_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>> {
        let row = sqlx::query(
            r#"
            SELECT
                booking_id,
                office_id,
                renter_id,
                start_at,
                end_at,
                display_tz,
                local_date,
                attendees,
                total_amount,
                status,
                payment,
                created_at,
                confirmed_at
            FROM bookings
            WHERE booking_id = $1
            "#,
        )
        .bind(booking_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_booking).transpose()
    }
}
