use crate::catalog::UnitSkills;

/// 1ラウンド内の攻撃フェーズ。この順序で処理される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    FirstStrike,
    Normal,
    LastStrike,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::FirstStrike, Phase::Normal, Phase::LastStrike];

    /// このフェーズで攻撃できるかどうか。
    /// 連撃持ちは先制と後攻の両方で攻撃する。
    pub fn is_eligible(&self, skills: &UnitSkills) -> bool {
        match self {
            Phase::FirstStrike => skills.first_strike || skills.double_strike,
            Phase::Normal => !(skills.first_strike || skills.last_strike || skills.double_strike),
            Phase::LastStrike => skills.last_strike || skills.double_strike,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::FirstStrike => "first strike",
            Phase::Normal => "normal",
            Phase::LastStrike => "last strike",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_skill_combination_acts_at_least_once_per_round() {
        for bits in 0u8..8 {
            let skills = UnitSkills {
                first_strike: bits & 1 != 0,
                double_strike: bits & 2 != 0,
                last_strike: bits & 4 != 0,
                ..Default::default()
            };
            assert!(Phase::ALL.iter().any(|p| p.is_eligible(&skills)));
        }
    }

    #[test]
    fn double_strike_acts_twice() {
        let skills = UnitSkills {
            double_strike: true,
            ..Default::default()
        };
        let phases: Vec<_> = Phase::ALL.iter().filter(|p| p.is_eligible(&skills)).collect();
        assert_eq!(phases, vec![&Phase::FirstStrike, &Phase::LastStrike]);
    }
}
