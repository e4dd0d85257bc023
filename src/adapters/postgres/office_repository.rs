use crate::domain::capacity::CapacityPolicy;
use crate::domain::inactivity::InactivityCalendar;
use crate::domain::office::Office;
use crate::domain::value_objects::OfficeId;
use crate::ports::office_repository::{OfficeRepository as OfficeRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// PostgreSQLの行データをOfficeに変換する
///
/// 稼働モデルと休業カレンダーはJSONBカラムから復元する。
fn map_row_to_office(row: &PgRow) -> Result<Office> {
    let tz_str: &str = row.get("timezone");
    let timezone = chrono_tz::Tz::from_str(tz_str).map_err(|_| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Invalid timezone: {}", tz_str),
        )) as Box<dyn std::error::Error + Send + Sync>
    })?;

    let capacity: CapacityPolicy =
        serde_json::from_value(row.get::<serde_json::Value, _>("capacity"))?;
    let inactivity: InactivityCalendar =
        serde_json::from_value(row.get::<serde_json::Value, _>("inactivity"))?;

    Ok(Office {
        office_id: OfficeId::from_uuid(row.get("office_id")),
        name: row.get("name"),
        hourly_rate: row.get("hourly_rate"),
        timezone,
        capacity,
        inactivity,
        deleted_on: row.get("deleted_on"),
    })
}

/// OfficeRepositoryのPostgreSQL実装
#[allow(dead_code)]
pub struct OfficeRepository {
    pool: PgPool,
}

#[allow(dead_code)]
impl OfficeRepository {
    /// PostgreSQLコネクションプールから新しいOfficeRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfficeRepositoryTrait for OfficeRepository {
    /// IDでオフィスを取得する
    async fn get(&self, office_id: OfficeId) -> Result<Option<Office>> {
        let row = sqlx::query(
            r#"
            SELECT
                office_id,
                name,
                hourly_rate,
                timezone,
                capacity,
                inactivity,
                deleted_on
            FROM offices
            WHERE office_id = $1
            "#,
        )
        .bind(office_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_office).transpose()
    }
}
