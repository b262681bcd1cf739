use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::casualty::{significant_change, CasualtyRecord};
use crate::catalog::UnitKind;

/// 種別ごとの損失の最小・最大・合計を、試行ごとに逐次更新する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CasualtyStatistics {
    trial_count: u32,
    min: BTreeMap<UnitKind, u32>,
    max: BTreeMap<UnitKind, u32>,
    total: BTreeMap<UnitKind, u64>,
    // 初出順 (= カタログ順) を保持する
    kinds: Vec<UnitKind>,
}

/// 種別ごとの予想損失と、その最小・最大の幅。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CasualtySummary {
    pub kind: UnitKind,
    pub expected: f64,
    pub min: u32,
    pub max: u32,
}

impl CasualtyStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trial_count(&self) -> u32 {
        self.trial_count
    }

    pub fn min(&self, kind: UnitKind) -> Option<u32> {
        self.min.get(&kind).copied()
    }

    pub fn max(&self, kind: UnitKind) -> Option<u32> {
        self.max.get(&kind).copied()
    }

    pub fn total(&self, kind: UnitKind) -> Option<u64> {
        self.total.get(&kind).copied()
    }

    /// 1試行あたりの平均損失。
    pub fn expected(&self, kind: UnitKind) -> Option<f64> {
        if self.trial_count == 0 {
            return None;
        }
        self.total(kind)
            .map(|t| t as f64 / f64::from(self.trial_count))
    }

    /// 1試行分の損失を取り込む。
    /// 最大・最小・平均のいずれかが有意に変化した場合、もしくは初めて観測した種別があった場合に true を返す。
    pub fn update(&mut self, records: &[CasualtyRecord]) -> bool {
        self.trial_count += 1;
        let mut significant = false;

        for record in records {
            let kind = record.kind;
            let count = record.count;

            match self.max.get(&kind).copied() {
                None => {
                    self.max.insert(kind, count);
                    significant = true;
                }
                Some(old) if count > old => {
                    self.max.insert(kind, count);
                    significant |= significant_change(f64::from(old), f64::from(count));
                }
                Some(_) => {}
            }

            match self.min.get(&kind).copied() {
                None => {
                    self.min.insert(kind, count);
                    significant = true;
                }
                Some(old) if count < old => {
                    self.min.insert(kind, count);
                    significant |= significant_change(f64::from(old), f64::from(count));
                }
                Some(_) => {}
            }

            match self.total.get(&kind).copied() {
                None => {
                    self.kinds.push(kind);
                    self.total.insert(kind, u64::from(count));
                    significant = true;
                }
                Some(old_total) => {
                    let old_avg = old_total as f64 / f64::from(self.trial_count - 1);
                    let new_total = old_total + u64::from(count);
                    let new_avg = new_total as f64 / f64::from(self.trial_count);
                    significant |= significant_change(old_avg, new_avg);
                    self.total.insert(kind, new_total);
                }
            }
        }

        significant
    }

    /// 初出順の集計行。平均は丸めずに返す。
    pub fn summaries(&self) -> Vec<CasualtySummary> {
        self.kinds
            .iter()
            .map(|&kind| CasualtySummary {
                kind,
                expected: self.expected(kind).unwrap_or(0.0),
                min: self.min(kind).unwrap_or(0),
                max: self.max(kind).unwrap_or(0),
            })
            .collect()
    }
}
