use crate::domain::office::Office;
use crate::domain::value_objects::OfficeId;
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// オフィスリポジトリポート
///
/// 予約コンテキストから見たオフィスは読み取り専用。
/// 管理操作（料金・休業・削除マーカーの編集）は別コンテキストの責務。
#[allow(dead_code)]
#[async_trait]
pub trait OfficeRepository: Send + Sync {
    /// IDでオフィスを取得する
    async fn get(&self, office_id: OfficeId) -> Result<Option<Office>>;
}
