use crate::domain::entitlement::{EntitlementStatus, MembershipEntitlement, ValidMonth};
use crate::domain::value_objects::{EntitlementId, RenterId};
use crate::ports::entitlement_repository::{
    EntitlementRepository as EntitlementRepositoryTrait, Result,
};
use async_trait::async_trait;
use chrono::Weekday;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// PostgreSQLの行データをMembershipEntitlementに変換する
fn map_row_to_entitlement(row: &PgRow) -> Result<MembershipEntitlement> {
    let status_str: &str = row.get("status");
    let status = EntitlementStatus::from_str(status_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    let permitted_weekdays: Vec<Weekday> =
        serde_json::from_value(row.get::<serde_json::Value, _>("permitted_weekdays"))?;

    let valid_month_i32: i32 = row.get("valid_month");
    let valid_month_u32: u32 = valid_month_i32.try_into().map_err(|_| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("valid_month out of range: {}", valid_month_i32),
        )) as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(MembershipEntitlement {
        entitlement_id: EntitlementId::from_uuid(row.get("entitlement_id")),
        buyer_id: RenterId::new(row.get::<String, _>("buyer_id")),
        permitted_weekdays,
        valid_month: ValidMonth::new(row.get("valid_year"), valid_month_u32),
        price: row.get("price"),
        status,
    })
}

/// EntitlementRepositoryのPostgreSQL実装
#[allow(dead_code)]
pub struct EntitlementRepository {
    pool: PgPool,
}

#[allow(dead_code)]
impl EntitlementRepository {
    /// PostgreSQLコネクションプールから新しいEntitlementRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntitlementRepositoryTrait for EntitlementRepository {
    /// IDで会員権を取得する
    async fn get(&self, entitlement_id: EntitlementId) -> Result<Option<MembershipEntitlement>> {
        let row = sqlx::query(
            r#"
            SELECT
                entitlement_id,
                buyer_id,
                permitted_weekdays,
                valid_year,
                valid_month,
                price,
                status
            FROM entitlements
            WHERE entitlement_id = $1
            "#,
        )
        .bind(entitlement_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_entitlement).transpose()
    }
}
