//! モンテカルロ法による戦闘結果の推定。
//!
//! 同じ編成で戦闘を繰り返し、損失の統計が収束した時点で打ち切る。
//! 試行は逐次的に評価されるため、同じ乱数列に対しては常に同じ回数で停止する。

mod config;
mod duration;
mod report;

pub use config::SimulationConfig;
pub use duration::{battle_duration, format_duration, MAX_BATTLE_SECONDS};
pub use report::SimulationReport;

use log::{debug, info};
use rand::Rng;

use crate::battle::{self, BattleLog, BattleResult, Winner};
use crate::casualty::CasualtyStatistics;
use crate::roster::Roster;

/// 1回のシミュレーション実行の集計結果。
/// 実行ごとに新しく作られ、前回の結果とは合算しない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateResult {
    pub trials: u32,
    pub victories: u32,
    pub draws: u32,
    pub defeats: u32,
    pub player_casualties: CasualtyStatistics,
    pub enemy_casualties: CasualtyStatistics,
    /// 最初の試行の戦闘経過
    pub battle_log: BattleLog,
    pub battle_duration_seconds: u64,
    /// 実測のシミュレーション時間。保証のない参考値。
    pub simulation_ms: Option<f64>,
}

impl AggregateResult {
    /// 1試行分を取り込み、損失統計に有意な変化があったかを返す。
    fn fold(&mut self, result: &BattleResult) -> bool {
        self.trials += 1;
        match result.winner {
            Winner::Player => self.victories += 1,
            Winner::Draw => self.draws += 1,
            Winner::Enemy => self.defeats += 1,
        }
        // 両陣営とも必ず更新する
        let enemy_changed = self.enemy_casualties.update(&result.enemy_casualties);
        let player_changed = self.player_casualties.update(&result.player_casualties);
        enemy_changed || player_changed
    }

    /// 勝率。敵が全滅している引き分けも勝ちに数える。
    pub fn win_fraction(&self) -> f64 {
        self.fraction(self.victories + self.draws)
    }

    pub fn draw_fraction(&self) -> f64 {
        self.fraction(self.draws)
    }

    pub fn loss_fraction(&self) -> f64 {
        1.0 - self.win_fraction()
    }

    fn fraction(&self, count: u32) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        f64::from(count) / f64::from(self.trials)
    }

    pub fn set_simulation_ms(&mut self, ms: Option<f64>) {
        self.simulation_ms = ms;
    }
}

pub struct Simulator<'a> {
    player: &'a Roster<'a>,
    enemy: &'a Roster<'a>,
    config: SimulationConfig,
}

impl<'a> Simulator<'a> {
    pub fn new(player: &'a Roster<'a>, enemy: &'a Roster<'a>, mut config: SimulationConfig) -> Self {
        config.validate();
        Self {
            player,
            enemy,
            config,
        }
    }

    /// 収束するか上限に達するまで戦闘を繰り返す。
    /// どちらかのロスターが空の場合は何もせず `None` を返す。
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<AggregateResult> {
        if !self.player.has_units() || !self.enemy.has_units() {
            debug!("One of the rosters is empty, skipping simulation");
            return None;
        }

        let mut aggregate = AggregateResult::default();
        for i in 0..self.config.max_trials {
            let record_log = i == 0;
            let mut result = battle::resolve(self.player, self.enemy, record_log, rng);
            if let Some(log) = result.battle_log.take() {
                aggregate.battle_log = log;
            }
            let significant = aggregate.fold(&result);
            if i + 1 >= self.config.min_trials && !significant {
                debug!("Casualty statistics converged after {} trials", i + 1);
                break;
            }
        }

        aggregate.battle_duration_seconds =
            battle_duration(self.player, self.enemy, self.config.berserk);
        info!(
            "Simulated {} battles: {} won, {} drawn, {} lost",
            aggregate.trials, aggregate.victories, aggregate.draws, aggregate.defeats
        );
        Some(aggregate)
    }
}
