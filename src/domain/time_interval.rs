#![allow(dead_code)]

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// 予約時間帯のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleTimeError {
    /// 終了時刻が開始時刻より後でない
    EndNotAfterStart,
    /// 時刻が正時（分・秒・ナノ秒 = 0）に揃っていない
    NotHourAligned,
    /// 表示タイムゾーン上で存在しない、または曖昧なローカル時刻
    InvalidLocalTime,
}

/// 予約時間帯 - 半開区間 `[start, end)`
///
/// 不変条件：
/// - `end` は `start` より厳密に後
/// - 両端とも正時（分・秒・ナノ秒 = 0）
///
/// 比較はすべてUTCに正規化した絶対時刻で行い、表示タイムゾーンは
/// カレンダー日付・曜日の導出と表示にのみ使用する。構築後は不変。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    display_tz: Tz,
}

fn is_hour_aligned(instant: &DateTime<Utc>) -> bool {
    instant.minute() == 0 && instant.second() == 0 && instant.nanosecond() == 0
}

impl TimeInterval {
    /// UTC絶対時刻から時間帯を構築する
    ///
    /// # エラー
    /// - `EndNotAfterStart`: `end <= start`
    /// - `NotHourAligned`: どちらかの境界が正時でない
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        display_tz: Tz,
    ) -> Result<Self, ScheduleTimeError> {
        if end <= start {
            return Err(ScheduleTimeError::EndNotAfterStart);
        }
        if !is_hour_aligned(&start) || !is_hour_aligned(&end) {
            return Err(ScheduleTimeError::NotHourAligned);
        }
        Ok(Self {
            start,
            end,
            display_tz,
        })
    }

    /// 壁時計時刻（タイムゾーンなしのローカル時刻）から時間帯を構築する
    ///
    /// リクエストのローカル時刻を表示タイムゾーンで解釈し、
    /// UTCへ変換して保持する。
    ///
    /// # エラー
    /// `new`のエラーに加え、DST切り替えで存在しない・曖昧な
    /// ローカル時刻は`InvalidLocalTime`。
    pub fn from_local(
        local_start: NaiveDateTime,
        local_end: NaiveDateTime,
        display_tz: Tz,
    ) -> Result<Self, ScheduleTimeError> {
        let start = display_tz
            .from_local_datetime(&local_start)
            .single()
            .ok_or(ScheduleTimeError::InvalidLocalTime)?;
        let end = display_tz
            .from_local_datetime(&local_end)
            .single()
            .ok_or(ScheduleTimeError::InvalidLocalTime)?;
        Self::new(start.with_timezone(&Utc), end.with_timezone(&Utc), display_tz)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn display_tz(&self) -> Tz {
        self.display_tz
    }

    /// 時間帯の長さ（時間単位）
    ///
    /// 両端が正時に揃っているため常に整数時間になる。
    pub fn hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }

    /// 2つの半開区間が重なるか
    ///
    /// 厳密な半開区間の定義：一方の終了時刻が他方の開始時刻と
    /// ちょうど一致する（背中合わせの）場合は重ならない。
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// 表示タイムゾーンにおける開始日
    pub fn local_start_date(&self) -> NaiveDate {
        self.start.with_timezone(&self.display_tz).date_naive()
    }

    /// 表示タイムゾーンにおける開始曜日
    pub fn start_weekday(&self) -> Weekday {
        self.local_start_date().weekday()
    }
}
