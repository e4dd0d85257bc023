use crate::domain::booking::Booking;
use crate::domain::value_objects::{BookingId, OfficeId};
use async_trait::async_trait;
use chrono::NaiveDate;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 予約リポジトリポート
///
/// 予約集約の永続化と取得を抽象化する。エンジンは判定結果を返すのみで、
/// 保存・更新はユースケース側がこのポート経由で行う。
#[allow(dead_code)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// 新しい予約を保存する
    async fn store(&self, booking: Booking) -> Result<()>;

    /// 既存の予約を更新する
    ///
    /// 支払い確認による確定遷移の永続化に使用される。
    async fn update(&self, booking: Booking) -> Result<()>;

    /// オフィスの特定日の予約をすべて取得する
    ///
    /// 日付はオフィスの表示タイムゾーンにおける暦日。稼働モデル判定の
    /// 候補集合の構築に使用される。稼働中かどうかのフィルタは
    /// ドメイン側で行うため、ここでは日付一致分をすべて返す。
    async fn find_for_office_on_date(
        &self,
        office_id: OfficeId,
        local_date: NaiveDate,
    ) -> Result<Vec<Booking>>;

    /// IDで予約を取得する
    async fn get_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>>;
}
