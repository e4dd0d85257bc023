use crate::domain::entitlement::MembershipEntitlement;
use crate::domain::value_objects::EntitlementId;
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員権リポジトリポート
///
/// 会員権の購入・支払いフローは別コンテキストの責務。
/// 予約コンテキストは認可判定のための参照のみを行う。
#[allow(dead_code)]
#[async_trait]
pub trait EntitlementRepository: Send + Sync {
    /// IDで会員権を取得する
    async fn get(&self, entitlement_id: EntitlementId) -> Result<Option<MembershipEntitlement>>;
}
