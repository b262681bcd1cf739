use serde::{Deserialize, Serialize};

use crate::catalog::UnitKind;

/// この値以上のティアを持つユニットはボスとして扱われる。
pub const BOSS_TIER: u32 = 25;

/// この値未満のロスターサイズでは全ユニットが選択可能。
const MIN_RESTRICTED_ROSTER_SIZE: u32 = 12;

/// ユニットが持つスキルの集合。各スキルは独立している。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitSkills {
    pub first_strike: bool,
    pub ranged: bool,
    pub flanking: bool,
    pub double_strike: bool,
    pub trample: bool,
    pub last_strike: bool,
}

/// ユニット種別の不変な定義。
/// 戦闘中に変化する情報は `FightingUnit` に分離されている。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitTypeDefinition {
    pub kind: UnitKind,
    pub friendly: bool,
    pub max_hp: u32,
    pub attack: u32,
    /// 会心率。0.0 ~ 1.0
    pub crit: f64,
    /// 表示順。同値の場合はカタログ上の順序を維持する。
    pub order: f64,
    pub tier: u32,
    #[serde(default)]
    pub skills: UnitSkills,
    #[serde(default)]
    pub min_roster_size: Option<u32>,
    #[serde(default)]
    pub max_roster_size: Option<u32>,
}

impl UnitTypeDefinition {
    pub fn is_boss(&self) -> bool {
        self.tier >= BOSS_TIER
    }

    /// 編成画面で、指定サイズのロスターにこのユニットを出せるかどうかを判定する。
    /// 戦闘処理では使用されない。
    pub fn valid_for_roster_size(&self, size: u32) -> bool {
        if size < MIN_RESTRICTED_ROSTER_SIZE {
            return true;
        }
        if self.min_roster_size.is_some_and(|min| min > size) {
            return false;
        }
        if self.max_roster_size.is_some_and(|max| max < size) {
            return false;
        }
        true
    }
}
