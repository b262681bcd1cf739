use serde::{Deserialize, Serialize};

use crate::battle::{Battle, BattleLog};
use crate::casualty::{casualties, CasualtyRecord};

/// 戦闘の勝者。両軍全滅の場合は引き分け。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Winner {
    Player,
    Enemy,
    Draw,
}

/// 1回の戦闘の結果。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    pub winner: Winner,
    pub player_casualties: Vec<CasualtyRecord>,
    pub enemy_casualties: Vec<CasualtyRecord>,
    pub battle_log: Option<BattleLog>,
}

impl From<Battle<'_>> for BattleResult {
    fn from(battle: Battle<'_>) -> Self {
        Self {
            winner: battle.winner(),
            player_casualties: casualties(battle.player_roster, &battle.player),
            enemy_casualties: casualties(battle.enemy_roster, &battle.enemy),
            battle_log: battle.log,
        }
    }
}
