#![allow(dead_code)]

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::errors::EntitlementAccessError;
use super::value_objects::{EntitlementId, RenterId};

/// 会員権の有効月
///
/// 会員権は特定の暦月に対してのみ有効。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidMonth {
    pub year: i32,
    pub month: u32,
}

impl ValidMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// 日付がこの暦月に含まれるか
    pub fn covers(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// 会員権の購入状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntitlementStatus {
    /// 購入手続き中（支払い未完了）
    Pending,
    /// 支払い済み
    Paid,
}

impl EntitlementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntitlementStatus::Pending => "pending",
            EntitlementStatus::Paid => "paid",
        }
    }
}

impl std::str::FromStr for EntitlementStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(EntitlementStatus::Pending),
            "paid" => Ok(EntitlementStatus::Paid),
            _ => Err(format!("Invalid entitlement status: {}", s)),
        }
    }
}

/// 月額会員権集約 - 事前購入された定期利用の権利
///
/// 予約ごとの支払いを免除する。有効月・許可曜日・支払い状態で
/// ゲートされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipEntitlement {
    pub entitlement_id: EntitlementId,

    /// 購入者（予約者と一致しなければ使用不可）
    pub buyer_id: RenterId,

    /// 予約が許可される曜日の集合
    pub permitted_weekdays: Vec<Weekday>,

    pub valid_month: ValidMonth,
    pub price: i64,
    pub status: EntitlementStatus,
}

/// 純粋関数：会員権による予約の認可判定
///
/// ビジネスルール：
/// - 購入者と予約者が一致すること（不一致はForbidden）
/// - 支払い済み（PAID）であること
/// - 提案日が有効月に含まれること
/// - 提案日の曜日が許可曜日に含まれること
///
/// 後三者のいずれかを満たさない場合はNotActive。
pub fn authorize(
    entitlement: &MembershipEntitlement,
    renter_id: &RenterId,
    local_date: NaiveDate,
) -> Result<(), EntitlementAccessError> {
    if entitlement.buyer_id != *renter_id {
        return Err(EntitlementAccessError::Forbidden);
    }

    if entitlement.status != EntitlementStatus::Paid {
        return Err(EntitlementAccessError::NotActive);
    }

    if !entitlement.valid_month.covers(local_date) {
        return Err(EntitlementAccessError::NotActive);
    }

    if !entitlement.permitted_weekdays.contains(&local_date.weekday()) {
        return Err(EntitlementAccessError::NotActive);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn paid_entitlement(buyer: &str) -> MembershipEntitlement {
        MembershipEntitlement {
            entitlement_id: EntitlementId::new(),
            buyer_id: RenterId::new(buyer),
            permitted_weekdays: vec![Weekday::Mon, Weekday::Wed],
            valid_month: ValidMonth::new(2024, 6),
            price: 5000,
            status: EntitlementStatus::Paid,
        }
    }

    // TDD: ValidMonth のテスト
    #[test]
    fn test_valid_month_covers_only_its_month() {
        let month = ValidMonth::new(2024, 6);
        assert!(month.covers(date(2024, 6, 1)));
        assert!(month.covers(date(2024, 6, 30)));
        assert!(!month.covers(date(2024, 7, 1)));
        assert!(!month.covers(date(2023, 6, 15)));
    }

    // TDD: authorize() のテスト
    #[test]
    fn test_authorize_success_for_matching_paid_entitlement() {
        let entitlement = paid_entitlement("renter-1");
        let renter = RenterId::new("renter-1");

        // 2024-06-03 は月曜日
        let result = authorize(&entitlement, &renter, date(2024, 6, 3));
        assert!(result.is_ok());
    }

    #[test]
    fn test_authorize_fails_for_other_renter() {
        let entitlement = paid_entitlement("renter-1");
        let other = RenterId::new("renter-2");

        let result = authorize(&entitlement, &other, date(2024, 6, 3));
        assert_eq!(result.unwrap_err(), EntitlementAccessError::Forbidden);
    }

    #[test]
    fn test_authorize_fails_when_not_paid() {
        let mut entitlement = paid_entitlement("renter-1");
        entitlement.status = EntitlementStatus::Pending;
        let renter = RenterId::new("renter-1");

        let result = authorize(&entitlement, &renter, date(2024, 6, 3));
        assert_eq!(result.unwrap_err(), EntitlementAccessError::NotActive);
    }

    #[test]
    fn test_authorize_fails_outside_valid_month() {
        let entitlement = paid_entitlement("renter-1");
        let renter = RenterId::new("renter-1");

        // 2024-07-01 は月曜日だが有効月は6月
        let result = authorize(&entitlement, &renter, date(2024, 7, 1));
        assert_eq!(result.unwrap_err(), EntitlementAccessError::NotActive);
    }

    #[test]
    fn test_authorize_fails_on_non_permitted_weekday() {
        let entitlement = paid_entitlement("renter-1");
        let renter = RenterId::new("renter-1");

        // 2024-06-04 は火曜日（許可は月・水のみ）
        let result = authorize(&entitlement, &renter, date(2024, 6, 4));
        assert_eq!(result.unwrap_err(), EntitlementAccessError::NotActive);
    }
}
