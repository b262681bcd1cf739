use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::battle::{FightingUnit, Phase};
use crate::catalog::UnitKind;

/// ユニット種別ごとの数。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnitCount {
    pub kind: UnitKind,
    pub count: u32,
}

/// フェーズ終了時点の生存ユニット数のスナップショット。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BattleLogEntry {
    pub stage_name: String,
    pub player_remaining: Vec<UnitCount>,
    pub enemy_remaining: Vec<UnitCount>,
}

/// 表示用の戦闘経過ログ。
/// 全試行ではなく、最初の1回の戦闘だけ記録される。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct BattleLog {
    entries: Vec<BattleLogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[BattleLogEntry] {
        &self.entries
    }

    pub fn record_start(&mut self, player: &[FightingUnit], enemy: &[FightingUnit]) {
        self.push("Start".to_owned(), player, enemy);
    }

    pub fn record_phase(
        &mut self,
        round: u32,
        phase: Phase,
        player: &[FightingUnit],
        enemy: &[FightingUnit],
    ) {
        self.push(format!("Round {round} {phase}"), player, enemy);
    }

    fn push(&mut self, stage_name: String, player: &[FightingUnit], enemy: &[FightingUnit]) {
        self.entries.push(BattleLogEntry {
            stage_name,
            player_remaining: unit_counts(player),
            enemy_remaining: unit_counts(enemy),
        });
    }
}

// ユニット列は種別ごとにまとまっている (表示順ソート後、撃破は除去のみ) ので、
// 連続する同種を数えれば足りる
fn unit_counts(units: &[FightingUnit]) -> Vec<UnitCount> {
    units
        .iter()
        .map(|u| u.kind())
        .dedup_with_count()
        .map(|(n, kind)| UnitCount {
            kind,
            count: n as u32,
        })
        .collect()
}
