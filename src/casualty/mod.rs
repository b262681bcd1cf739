mod statistics;

pub use statistics::{CasualtyStatistics, CasualtySummary};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::battle::FightingUnit;
use crate::catalog::UnitKind;
use crate::roster::Roster;

/// 相対変化がこの割合を超えたら有意とみなす。
const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

/// 1回の戦闘での、ユニット種別ごとの損失数。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CasualtyRecord {
    pub kind: UnitKind,
    pub count: u32,
}

/// 元の編成と生存ユニットの差分から損失を求める。
/// カタログ順に並び、編成に含まれない種別は出力しない。
pub fn casualties(roster: &Roster, survivors: &[FightingUnit]) -> Vec<CasualtyRecord> {
    let alive = survivors.iter().map(|u| u.kind()).counts();
    roster
        .counts()
        .map(|(kind, original)| {
            let remaining = alive.get(&kind).copied().unwrap_or(0) as u32;
            CasualtyRecord {
                kind,
                count: original.saturating_sub(remaining),
            }
        })
        .collect()
}

/// 統計値の変化が有意かどうか。
/// 片方だけが 0 の場合は常に有意、両方 0 なら有意ではない。
pub fn significant_change(prev: f64, next: f64) -> bool {
    if prev == 0.0 && next == 0.0 {
        return false;
    }
    if prev == 0.0 || next == 0.0 {
        return true;
    }
    (prev - next).abs() / next > SIGNIFICANCE_THRESHOLD
}
