#![allow(dead_code)]

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// 休業エントリ - 管理者が宣言するブラックアウト
///
/// 特定の日付、または毎週繰り返す曜日のいずれか。
/// 管理操作で作成・削除され、予約エンジンからは参照のみ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InactivityEntry {
    SpecificDate(NaiveDate),
    RecurringWeekday(Weekday),
}

/// 休業カレンダー - オフィスごとのブラックアウトルールの集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InactivityCalendar {
    entries: Vec<InactivityEntry>,
}

impl InactivityCalendar {
    pub fn new(entries: Vec<InactivityEntry>) -> Self {
        Self { entries }
    }

    /// ルールなしの空カレンダー
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[InactivityEntry] {
        &self.entries
    }

    /// 提案された日付・曜日が休業に該当するか
    ///
    /// 日付は提案開始時刻をオフィスの表示タイムゾーンへ変換したもの。
    /// 稼働モデルとは独立に判定される。
    pub fn blocks(&self, date: NaiveDate, weekday: Weekday) -> bool {
        self.entries.iter().any(|entry| match entry {
            InactivityEntry::SpecificDate(blocked) => *blocked == date,
            InactivityEntry::RecurringWeekday(blocked) => *blocked == weekday,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // TDD: blocks() のテスト
    #[test]
    fn test_blocks_specific_date() {
        let calendar =
            InactivityCalendar::new(vec![InactivityEntry::SpecificDate(date(2024, 12, 25))]);

        assert!(calendar.blocks(date(2024, 12, 25), Weekday::Wed));
        assert!(!calendar.blocks(date(2024, 12, 26), Weekday::Thu));
    }

    #[test]
    fn test_blocks_recurring_weekday() {
        let calendar =
            InactivityCalendar::new(vec![InactivityEntry::RecurringWeekday(Weekday::Sun)]);

        // どの日曜日でもブロックされる
        assert!(calendar.blocks(date(2024, 6, 2), Weekday::Sun));
        assert!(calendar.blocks(date(2024, 6, 9), Weekday::Sun));
        assert!(!calendar.blocks(date(2024, 6, 3), Weekday::Mon));
    }

    #[test]
    fn test_blocks_checks_all_entries() {
        let calendar = InactivityCalendar::new(vec![
            InactivityEntry::SpecificDate(date(2024, 8, 15)),
            InactivityEntry::RecurringWeekday(Weekday::Sat),
            InactivityEntry::RecurringWeekday(Weekday::Sun),
        ]);

        assert!(calendar.blocks(date(2024, 8, 15), Weekday::Thu));
        assert!(calendar.blocks(date(2024, 8, 17), Weekday::Sat));
        assert!(calendar.blocks(date(2024, 8, 18), Weekday::Sun));
        assert!(!calendar.blocks(date(2024, 8, 16), Weekday::Fri));
    }

    #[test]
    fn test_empty_calendar_blocks_nothing() {
        let calendar = InactivityCalendar::empty();
        assert!(!calendar.blocks(date(2024, 1, 1), Weekday::Mon));
    }
}
