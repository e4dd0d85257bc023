#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use super::time_interval::TimeInterval;
use super::value_objects::UnitCount;

/// 稼働モデル - オフィスの同時利用ルール
///
/// - `Exclusive`: 1組のみが利用できる専有オフィス
/// - `Pooled`: 互換なユニットをN席持つプール型オフィス
///   （各ユニットは同時に1組のみ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CapacityPolicy {
    Exclusive,
    Pooled { unit_count: UnitCount },
}

impl CapacityPolicy {
    /// 提案された時間帯を既存の有効な予約群に対して受け入れられるか判定する
    ///
    /// ビジネスルール：
    /// - 専有：既存のどの時間帯とも重ならないこと（ペアワイズ判定）
    /// - プール：どの瞬間にも同時稼働数がユニット数を超えないこと
    ///   （開始・終了イベントのスイープラインで稼働数を数える）
    ///
    /// 境界の扱いは半開区間の定義に統一している：ある時間帯が
    /// ちょうど終わる瞬間に別の時間帯が始まる場合、同時稼働とは数えない。
    pub fn admits(&self, proposed: &TimeInterval, existing: &[TimeInterval]) -> bool {
        match self {
            CapacityPolicy::Exclusive => !existing.iter().any(|i| i.overlaps(proposed)),
            CapacityPolicy::Pooled { unit_count } => {
                pooled_admits(proposed, existing, unit_count.value())
            }
        }
    }
}

/// プール型のスイープライン判定
///
/// 候補集合（既存 + 提案）の境界イベントを時刻順に走査し、
/// 稼働カウンタがユニット数を超えた時点で拒否する。
/// 同時刻では終了(-1)を開始(+1)より先に処理する。これにより
/// 背中合わせの時間帯が同時稼働として数えられることはない。
fn pooled_admits(proposed: &TimeInterval, existing: &[TimeInterval], unit_count: u32) -> bool {
    let mut events: Vec<(chrono::DateTime<chrono::Utc>, i32)> = Vec::new();
    for interval in existing.iter().chain(std::iter::once(proposed)) {
        events.push((interval.start(), 1));
        events.push((interval.end(), -1));
    }
    events.sort_by_key(|&(at, delta)| (at, delta));

    let mut occupancy: i64 = 0;
    for (_, delta) in events {
        occupancy += i64::from(delta);
        if occupancy > i64::from(unit_count) {
            return false;
        }
    }
    true
}
