use crate::catalog::{UnitKind, UnitSkills, UnitTypeDefinition};

// 戦闘中のユニットの状態を管理する構造体
// 1回の戦闘の間だけ存在し、戦闘終了時に破棄される
#[derive(Debug, Clone, PartialEq)]
pub struct FightingUnit {
    kind: UnitKind,
    attack: u32,
    crit: f64,
    skills: UnitSkills,
    hp: u32,
}

impl FightingUnit {
    pub fn new(def: &UnitTypeDefinition) -> Self {
        Self {
            kind: def.kind,
            attack: def.attack,
            crit: def.crit,
            skills: def.skills,
            hp: def.max_hp,
        }
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }
    pub fn attack(&self) -> u32 {
        self.attack
    }
    pub fn crit(&self) -> f64 {
        self.crit
    }
    pub fn skills(&self) -> UnitSkills {
        self.skills
    }
    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply `damage` and return what is left over after this unit dies.
    pub fn apply_damage(&mut self, damage: u32) -> u32 {
        if damage < self.hp {
            self.hp -= damage;
            0
        } else {
            let leftover = damage - self.hp;
            self.hp = 0;
            leftover
        }
    }
}
