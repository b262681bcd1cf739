use serde::{Deserialize, Serialize};

use crate::battle::BattleLog;
use crate::casualty::{CasualtyStatistics, CasualtySummary};
use crate::simulation::{format_duration, AggregateResult};

/// フロントエンドに返す集計結果のスナップショット。
/// 割合はパーセント表記で小数第2位に丸めてある。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub trials: u32,
    pub wins_percent: f64,
    pub draws_percent: f64,
    pub losses_percent: f64,
    pub player_losses: Vec<CasualtySummary>,
    pub enemy_losses: Vec<CasualtySummary>,
    pub battle_duration_seconds: u64,
    pub battle_duration: String,
    pub simulation_ms: Option<f64>,
    pub battle_log: BattleLog,
}

fn decimal(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn rows(stats: &CasualtyStatistics) -> Vec<CasualtySummary> {
    stats
        .summaries()
        .into_iter()
        .map(|s| CasualtySummary {
            expected: decimal(s.expected),
            ..s
        })
        .collect()
}

impl From<&AggregateResult> for SimulationReport {
    fn from(result: &AggregateResult) -> Self {
        Self {
            trials: result.trials,
            wins_percent: decimal(100.0 * result.win_fraction()),
            draws_percent: decimal(100.0 * result.draw_fraction()),
            losses_percent: decimal(100.0 * result.loss_fraction()),
            player_losses: rows(&result.player_casualties),
            enemy_losses: rows(&result.enemy_casualties),
            battle_duration_seconds: result.battle_duration_seconds,
            battle_duration: format_duration(result.battle_duration_seconds),
            simulation_ms: result.simulation_ms,
            battle_log: result.battle_log.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casualty::CasualtyRecord;
    use crate::catalog::UnitKind;

    #[test]
    fn report_rounds_percentages() {
        let mut result = AggregateResult {
            trials: 3,
            victories: 1,
            draws: 1,
            defeats: 1,
            battle_duration_seconds: 117,
            ..Default::default()
        };
        result.enemy_casualties.update(&[CasualtyRecord {
            kind: UnitKind::Orkling,
            count: 2,
        }]);
        result.enemy_casualties.update(&[CasualtyRecord {
            kind: UnitKind::Orkling,
            count: 1,
        }]);
        result.enemy_casualties.update(&[CasualtyRecord {
            kind: UnitKind::Orkling,
            count: 1,
        }]);

        let report = SimulationReport::from(&result);
        assert_eq!(report.wins_percent, 66.67);
        assert_eq!(report.draws_percent, 33.33);
        assert_eq!(report.losses_percent, 33.33);
        assert_eq!(report.battle_duration, "1m 57s ");
        assert_eq!(
            report.enemy_losses,
            vec![CasualtySummary {
                kind: UnitKind::Orkling,
                expected: 1.33,
                min: 1,
                max: 2,
            }]
        );
        assert!(report.player_losses.is_empty());
    }
}
