mod battle_log;
mod battle_result;
mod fighting_unit;
mod phase;

pub use battle_log::{BattleLog, BattleLogEntry, UnitCount};
pub use battle_result::{BattleResult, Winner};
pub use fighting_unit::FightingUnit;
pub use phase::Phase;

use log::{debug, warn};
use rand::Rng;

use crate::catalog::UnitSkills;
use crate::roster::Roster;

// 戦闘の進行を管理する構造体
// 先に渡された側 (player) が各フェーズで先に攻撃する
pub struct Battle<'a> {
    player_roster: &'a Roster<'a>,
    enemy_roster: &'a Roster<'a>,
    pub player: Vec<FightingUnit>,
    pub enemy: Vec<FightingUnit>,
    round: u32,
    log: Option<BattleLog>,
}

impl<'a> Battle<'a> {
    pub fn new(player: &'a Roster<'a>, enemy: &'a Roster<'a>, record_log: bool) -> Self {
        Self {
            player_roster: player,
            enemy_roster: enemy,
            player: player.to_unit_instances(),
            enemy: enemy.to_unit_instances(),
            round: 1,
            log: record_log.then(BattleLog::new),
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_over(&self) -> bool {
        self.player.is_empty() || self.enemy.is_empty()
    }

    pub fn winner(&self) -> Winner {
        if !self.enemy.is_empty() {
            Winner::Enemy
        } else if !self.player.is_empty() {
            Winner::Player
        } else {
            Winner::Draw
        }
    }

    fn total_hp(&self) -> u64 {
        self.player
            .iter()
            .chain(self.enemy.iter())
            .map(|u| u64::from(u.hp()))
            .sum()
    }

    /// どちらかが全滅するまでラウンドを繰り返す。
    /// 全滅はフェーズ単位で判定し、ラウンド途中でも即座に終了する。
    pub fn fight<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(log) = self.log.as_mut() {
            log.record_start(&self.player, &self.enemy);
        }
        if self.is_over() {
            debug!("One of the sides is empty, skipping battle");
            return;
        }

        'rounds: loop {
            let hp_before = self.total_hp();
            for phase in Phase::ALL {
                let acted = self.fight_phase(phase, rng);
                if acted {
                    if let Some(log) = self.log.as_mut() {
                        log.record_phase(self.round, phase, &self.player, &self.enemy);
                    }
                }
                if self.is_over() {
                    break 'rounds;
                }
            }
            // 攻撃力 0 のユニットしか残っていない場合の無限ループ防止
            if self.total_hp() == hp_before {
                warn!("No damage dealt in round {}, ending battle", self.round);
                break;
            }
            self.round += 1;
        }
        debug!(
            "Battle ended in round {}: {} player / {} enemy units left",
            self.round,
            self.player.len(),
            self.enemy.len()
        );
    }

    // フェーズ1回分の処理。誰かが攻撃した場合 true を返す。
    fn fight_phase<R: Rng + ?Sized>(&mut self, phase: Phase, rng: &mut R) -> bool {
        // 攻撃者はフェーズ開始時点で決定する。
        // このフェーズ中に倒されたユニットも自分の攻撃は行う。
        let player_strikers = strikers(&self.player, phase);
        let enemy_strikers = strikers(&self.enemy, phase);

        attack(&player_strikers, &mut self.enemy, rng);
        attack(&enemy_strikers, &mut self.player, rng);

        self.player.retain(FightingUnit::is_alive);
        self.enemy.retain(FightingUnit::is_alive);

        !(player_strikers.is_empty() && enemy_strikers.is_empty())
    }
}

fn strikers(units: &[FightingUnit], phase: Phase) -> Vec<FightingUnit> {
    units
        .iter()
        .filter(|u| phase.is_eligible(&u.skills()))
        .cloned()
        .collect()
}

fn attack<R: Rng + ?Sized>(attackers: &[FightingUnit], defenders: &mut [FightingUnit], rng: &mut R) {
    for unit in attackers {
        let mut damage = unit.attack();
        // 会心判定は攻撃ごとに1回
        if rng.random::<f64>() < unit.crit() {
            damage = damage.saturating_mul(2);
        }
        deal_damage(defenders, damage, unit.skills());
    }
}

// 貫通持ちは撃破後の余剰ダメージを次の標的に持ち越す
fn deal_damage(defenders: &mut [FightingUnit], mut damage: u32, skills: UnitSkills) {
    loop {
        let Some(target) = find_target(defenders, skills.flanking) else {
            break;
        };
        damage = target.apply_damage(damage);
        if damage == 0 || !skills.trample {
            break;
        }
    }
}

// 側面攻撃持ちは残りHPが最も少ない相手を狙う (同値なら先頭側)
fn find_target(defenders: &mut [FightingUnit], flanking: bool) -> Option<&mut FightingUnit> {
    let mut alive = defenders.iter_mut().filter(|u| u.is_alive());
    if flanking {
        alive.min_by_key(|u| u.hp())
    } else {
        alive.next()
    }
}

/// 2つのロスターで1回戦闘を行い、結果を返す。
pub fn resolve<R: Rng + ?Sized>(
    player: &Roster,
    enemy: &Roster,
    record_log: bool,
    rng: &mut R,
) -> BattleResult {
    let mut battle = Battle::new(player, enemy, record_log);
    battle.fight(rng);
    battle.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{UnitCatalog, UnitKind, UnitTypeDefinition};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit(kind: UnitKind, hp: u32, attack: u32, order: f64, skills: UnitSkills) -> UnitTypeDefinition {
        UnitTypeDefinition {
            kind,
            friendly: true,
            max_hp: hp,
            attack,
            crit: 0.0,
            order,
            tier: 1,
            skills,
            min_roster_size: None,
            max_roster_size: None,
        }
    }

    fn hps(units: &[FightingUnit]) -> Vec<u32> {
        units.iter().map(|u| u.hp()).collect()
    }

    #[test]
    fn plain_attack_hits_first_living_defender() {
        let catalog = UnitCatalog::new(vec![
            unit(UnitKind::Militia, 10, 4, 0.0, UnitSkills::default()),
            unit(UnitKind::Orkling, 5, 1, 0.0, UnitSkills::default()),
        ]);
        let militia = FightingUnit::new(catalog.get(UnitKind::Militia).unwrap());
        let mut defenders = vec![militia.clone(), militia.clone()];
        defenders[0].apply_damage(10);

        deal_damage(&mut defenders, 4, UnitSkills::default());
        assert_eq!(hps(&defenders), vec![0, 6]);
    }

    #[test]
    fn flanking_targets_weakest_and_breaks_ties_by_position() {
        let catalog = UnitCatalog::new(vec![unit(
            UnitKind::Militia,
            10,
            4,
            0.0,
            UnitSkills::default(),
        )]);
        let militia = FightingUnit::new(catalog.get(UnitKind::Militia).unwrap());
        let mut defenders = vec![militia.clone(), militia.clone(), militia.clone(), militia];
        defenders[1].apply_damage(7);
        defenders[2].apply_damage(7);
        defenders[3].apply_damage(10);

        let flanking = UnitSkills {
            flanking: true,
            ..Default::default()
        };
        deal_damage(&mut defenders, 1, flanking);
        assert_eq!(hps(&defenders), vec![10, 2, 3, 0]);
        deal_damage(&mut defenders, 1, flanking);
        assert_eq!(hps(&defenders), vec![10, 1, 3, 0]);
    }

    #[test]
    fn trample_carries_leftover_damage() {
        let catalog = UnitCatalog::new(vec![unit(
            UnitKind::Militia,
            10,
            4,
            0.0,
            UnitSkills::default(),
        )]);
        let militia = FightingUnit::new(catalog.get(UnitKind::Militia).unwrap());
        let mut defenders = vec![militia.clone(), militia.clone(), militia];

        let trample = UnitSkills {
            trample: true,
            ..Default::default()
        };
        deal_damage(&mut defenders, 25, trample);
        assert_eq!(hps(&defenders), vec![0, 0, 5]);

        // 標的がいなくなれば余剰は捨てられる
        deal_damage(&mut defenders, 100, trample);
        assert_eq!(hps(&defenders), vec![0, 0, 0]);
    }

    #[test]
    fn trample_with_flanking_retargets_weakest() {
        let catalog = UnitCatalog::new(vec![
            unit(UnitKind::Knight, 30, 4, 0.0, UnitSkills::default()),
            unit(UnitKind::Militia, 10, 4, 0.0, UnitSkills::default()),
        ]);
        let knight = FightingUnit::new(catalog.get(UnitKind::Knight).unwrap());
        let militia = FightingUnit::new(catalog.get(UnitKind::Militia).unwrap());
        let mut defenders = vec![knight, militia.clone(), militia];

        let skills = UnitSkills {
            trample: true,
            flanking: true,
            ..Default::default()
        };
        // 持ち越しのたびに残りHPが最も少ない相手を選び直す
        deal_damage(&mut defenders, 25, skills);
        assert_eq!(hps(&defenders), vec![25, 0, 0]);
    }

    #[test]
    fn without_trample_overkill_is_discarded() {
        let catalog = UnitCatalog::new(vec![unit(
            UnitKind::Militia,
            10,
            4,
            0.0,
            UnitSkills::default(),
        )]);
        let militia = FightingUnit::new(catalog.get(UnitKind::Militia).unwrap());
        let mut defenders = vec![militia.clone(), militia];
        deal_damage(&mut defenders, 25, UnitSkills::default());
        assert_eq!(hps(&defenders), vec![0, 10]);
    }

    #[test]
    fn sure_crit_doubles_damage() {
        let mut def = unit(UnitKind::Militia, 100, 10, 0.0, UnitSkills::default());
        def.crit = 1.0;
        let catalog = UnitCatalog::new(vec![def]);
        let striker = FightingUnit::new(catalog.get(UnitKind::Militia).unwrap());
        let mut defenders = vec![striker.clone()];
        let mut rng = StdRng::seed_from_u64(3);
        attack(&[striker], &mut defenders, &mut rng);
        assert_eq!(hps(&defenders), vec![80]);
    }

    #[test]
    fn first_side_strikes_first_and_dead_units_still_swing() {
        // 先制フェーズで互いに一撃で倒し合う
        let first = UnitSkills {
            first_strike: true,
            ..Default::default()
        };
        let catalog = UnitCatalog::new(vec![
            unit(UnitKind::Cavalry, 5, 5, 0.0, first),
            unit(UnitKind::WargRider, 5, 5, 0.0, first),
        ]);
        let mut player = Roster::unlimited(&catalog);
        player.set_count(UnitKind::Cavalry, 1);
        let mut enemy = Roster::unlimited(&catalog);
        enemy.set_count(UnitKind::WargRider, 1);

        let mut rng = StdRng::seed_from_u64(0);
        let result = resolve(&player, &enemy, true, &mut rng);
        assert_eq!(result.winner, Winner::Draw);
        let log = result.battle_log.unwrap();
        let stages: Vec<_> = log.entries().iter().map(|e| e.stage_name.as_str()).collect();
        assert_eq!(stages, vec!["Start", "Round 1 first strike"]);
    }

    #[test]
    fn empty_side_loses_immediately() {
        let catalog = UnitCatalog::standard();
        let mut player = Roster::new(&catalog, Some(100));
        player.set_count(UnitKind::Knight, 4);
        let enemy = Roster::unlimited(&catalog);

        let mut rng = StdRng::seed_from_u64(1);
        let result = resolve(&player, &enemy, true, &mut rng);
        assert_eq!(result.winner, Winner::Player);
        assert_eq!(result.player_casualties[0].count, 0);
        assert!(result.enemy_casualties.is_empty());
        assert_eq!(result.battle_log.unwrap().entries().len(), 1);
    }

    #[test]
    fn zero_attack_stalemate_terminates() {
        let catalog = UnitCatalog::new(vec![
            unit(UnitKind::Militia, 10, 0, 0.0, UnitSkills::default()),
            unit(UnitKind::Orkling, 10, 0, 0.0, UnitSkills::default()),
        ]);
        let mut player = Roster::unlimited(&catalog);
        player.set_count(UnitKind::Militia, 2);
        let mut enemy = Roster::unlimited(&catalog);
        enemy.set_count(UnitKind::Orkling, 2);

        let mut rng = StdRng::seed_from_u64(1);
        let result = resolve(&player, &enemy, false, &mut rng);
        assert_eq!(result.winner, Winner::Enemy);
        assert!(result.battle_log.is_none());
    }
}
