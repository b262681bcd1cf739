//! Simulation configuration.
use log::warn;
use serde::{Deserialize, Serialize};

/// Configuration for a simulation run.
/// フロントエンドから渡される設定。省略された項目はデフォルト値で補完される。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// 収束判定を始めるまでの最低試行回数
    pub min_trials: u32,

    /// 試行回数の上限
    pub max_trials: u32,

    /// 狂戦士の管理人による戦闘時間短縮
    pub berserk: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_trials: 50,
            max_trials: 1000,
            berserk: false,
        }
    }
}

impl SimulationConfig {
    /// 設定値の妥当性を検証し、必要に応じて修正する。
    /// - 試行回数の上限が 0
    /// - 最低試行回数が上限を超えている
    pub fn validate(&mut self) {
        if self.max_trials == 0 {
            warn!("max_trials is 0, running a single trial");
            self.max_trials = 1;
        }
        if self.min_trials > self.max_trials {
            warn!(
                "min_trials {} exceeds max_trials {}, clamping",
                self.min_trials, self.max_trials
            );
            self.min_trials = self.max_trials;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: SimulationConfig = serde_json::from_str(r#"{"berserk": true}"#).unwrap();
        assert_eq!(config.min_trials, 50);
        assert_eq!(config.max_trials, 1000);
        assert!(config.berserk);
    }

    #[test]
    fn validate_clamps_bounds() {
        let mut config = SimulationConfig {
            min_trials: 80,
            max_trials: 0,
            berserk: false,
        };
        config.validate();
        assert_eq!(config.max_trials, 1);
        assert_eq!(config.min_trials, 1);
    }
}
