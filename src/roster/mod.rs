//! 片方の陣営の編成 (ユニット種別ごとの数) を管理する。
//! 上限が設定されている場合、合計数が上限を超えることはない。
//! また、ボス級のユニットは1つのロスターに1種類までしか存在できない。
use std::collections::BTreeMap;

use itertools::Itertools;
use log::{debug, warn};
use thiserror::Error;

use crate::battle::FightingUnit;
use crate::catalog::{UnitCatalog, UnitKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("{0} is unsupported on an unlimited roster")]
    Unlimited(&'static str),
}

#[derive(Debug, Clone)]
pub struct Roster<'c> {
    catalog: &'c UnitCatalog,
    // 0 のエントリは保持しない
    counts: BTreeMap<UnitKind, u32>,
    limit: Option<u32>,
}

impl<'c> Roster<'c> {
    pub fn new(catalog: &'c UnitCatalog, limit: Option<u32>) -> Self {
        Self {
            catalog,
            counts: BTreeMap::new(),
            limit,
        }
    }

    pub fn unlimited(catalog: &'c UnitCatalog) -> Self {
        Self::new(catalog, None)
    }

    pub fn catalog(&self) -> &'c UnitCatalog {
        self.catalog
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn count(&self, kind: UnitKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn has_units(&self) -> bool {
        !self.counts.is_empty()
    }

    /// カタログ順に (種別, 数) を列挙する。
    pub fn counts(&self) -> impl Iterator<Item = (UnitKind, u32)> + '_ {
        self.catalog
            .iter()
            .filter_map(|u| self.counts.get(&u.kind).map(|&c| (u.kind, c)))
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// 指定ユニットの数を設定する。
    ///
    /// - 上限がある場合は上限で頭打ちにする
    /// - 0 以下は 0 (エントリ削除) として扱う
    /// - ボスを追加した場合、他のボスはすべて取り除く
    /// - 合計が上限を超えた場合、カタログ順に他のユニットから押し出す
    pub fn set_count(&mut self, kind: UnitKind, new_count: i64) {
        if i64::from(self.count(kind)) == new_count {
            return;
        }
        if self.catalog.get(kind).is_none() {
            warn!("Unknown unit {kind} is not in the catalog, ignoring");
            return;
        }

        let capped = match self.limit {
            Some(limit) => new_count.min(i64::from(limit)),
            None => new_count,
        };
        let new_count = capped.clamp(0, i64::from(u32::MAX)) as u32;

        if new_count == 0 {
            self.counts.remove(&kind);
            return;
        }
        self.counts.insert(kind, new_count);

        if self.catalog.is_boss(kind) {
            let catalog = self.catalog;
            for other in catalog.iter().filter(|u| u.is_boss() && u.kind != kind) {
                self.counts.remove(&other.kind);
            }
        }

        self.evict_overflow(kind);
    }

    // 上限超過分を、keep 以外のユニットからカタログ順に削る
    fn evict_overflow(&mut self, keep: UnitKind) {
        let Some(limit) = self.limit else {
            return;
        };
        let mut excess = self.total().saturating_sub(u64::from(limit));
        if excess == 0 {
            return;
        }

        let catalog = self.catalog;
        for unit in catalog.iter() {
            if excess == 0 {
                break;
            }
            if unit.kind == keep {
                continue;
            }
            let Some(count) = self.counts.get_mut(&unit.kind) else {
                continue;
            };
            let removed = excess.min(u64::from(*count)) as u32;
            *count -= removed;
            excess -= u64::from(removed);
            debug!("Evicted {removed} x {} to stay within limit {limit}", unit.kind);
            if *count == 0 {
                self.counts.remove(&unit.kind);
            }
        }
    }

    /// 空き枠をすべて指定ユニットで埋める。
    pub fn fill_count(&mut self, kind: UnitKind) -> Result<(), RosterError> {
        let limit = self.limit.ok_or(RosterError::Unlimited("fill_count"))?;
        let others: u64 = self
            .counts
            .iter()
            .filter(|(k, _)| **k != kind)
            .map(|(_, &c)| u64::from(c))
            .sum();
        let available = i64::from(limit) - others as i64;
        self.set_count(kind, available);
        Ok(())
    }

    /// ロスターを指定ユニットのみ、上限いっぱいの数で置き換える。
    pub fn set_all(&mut self, kind: UnitKind) -> Result<(), RosterError> {
        let limit = self.limit.ok_or(RosterError::Unlimited("set_all"))?;
        self.counts.clear();
        if limit > 0 && self.catalog.get(kind).is_some() {
            self.counts.insert(kind, limit);
        }
        Ok(())
    }

    /// 1ユニットごとに全快状態の `FightingUnit` を生成する。
    /// 表示順の昇順に並び、同値の場合はカタログ順を保つ。
    pub fn to_unit_instances(&self) -> Vec<FightingUnit> {
        self.catalog
            .iter()
            .filter(|u| self.count(u.kind) > 0)
            .sorted_by(|a, b| a.order.total_cmp(&b.order))
            .flat_map(|u| (0..self.count(u.kind)).map(move |_| FightingUnit::new(u)))
            .collect()
    }
}
