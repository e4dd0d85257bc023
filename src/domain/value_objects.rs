#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// オフィスID - 予約対象リソースの集約ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfficeId(Uuid);

impl OfficeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for OfficeId {
    fn default() -> Self {
        Self::new()
    }
}

/// 予約ID - 予約管理コンテキストの集約ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(Uuid);

impl BookingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

/// 会員権ID - 月額会員権コンテキストへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntitlementId(Uuid);

impl EntitlementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for EntitlementId {
    fn default() -> Self {
        Self::new()
    }
}

/// 利用者ID - 認証コラボレータから渡される不透明な識別子
///
/// 予約コンテキストは利用者の詳細を知らず、識別子のみを扱う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenterId(String);

impl RenterId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// ユニット数エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitCountError {
    /// ユニット数が0
    Zero,
}

/// プール型オフィスのユニット数
///
/// 不変条件：プール型オフィスは常にユニット数 >= 1
/// 型システムでこの制約を強制し、不正な値（0）を作成できないようにする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCount(u32);

impl UnitCount {
    /// 現在のユニット数
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for UnitCount {
    type Error = UnitCountError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(UnitCountError::Zero);
        }
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // TDD: UnitCount のテスト
    #[test]
    fn test_unit_count_try_from_valid() {
        let count = UnitCount::try_from(1);
        assert!(count.is_ok());
        assert_eq!(count.unwrap().value(), 1);

        let count = UnitCount::try_from(12);
        assert!(count.is_ok());
        assert_eq!(count.unwrap().value(), 12);
    }

    #[test]
    fn test_unit_count_try_from_zero_fails() {
        let count = UnitCount::try_from(0);
        assert!(count.is_err());
        assert_eq!(count.unwrap_err(), UnitCountError::Zero);
    }

    // ID value objects のテスト
    #[test]
    fn test_office_id_creation() {
        let id1 = OfficeId::new();
        let id2 = OfficeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_office_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = OfficeId::from_uuid(uuid);
        assert_eq!(id.value(), uuid);
    }

    #[test]
    fn test_booking_id_creation() {
        let id1 = BookingId::new();
        let id2 = BookingId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_entitlement_id_creation() {
        let id1 = EntitlementId::new();
        let id2 = EntitlementId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_renter_id_holds_opaque_string() {
        let renter = RenterId::new("auth0|someone");
        assert_eq!(renter.as_str(), "auth0|someone");
        assert_eq!(renter, RenterId::new("auth0|someone".to_string()));
    }
}
