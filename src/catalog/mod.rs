mod standard;
mod unit_kind;
mod unit_type;

pub use unit_kind::{UnitKind, UnknownUnit};
pub use unit_type::{UnitSkills, UnitTypeDefinition, BOSS_TIER};

use log::warn;

/// ユニット定義の順序付きリスト。
/// 全コンポーネントに不変参照として渡され、戦闘中に変更されることはない。
/// リスト上の順序は兵力の押し出し順やカジュアルティの並び順として使われる。
#[derive(Debug, Clone)]
pub struct UnitCatalog {
    units: Vec<UnitTypeDefinition>,
}

impl UnitCatalog {
    /// Build a catalog from definitions. Later duplicates of a kind are dropped.
    pub fn new(units: Vec<UnitTypeDefinition>) -> Self {
        let mut deduped: Vec<UnitTypeDefinition> = Vec::with_capacity(units.len());
        for unit in units {
            if deduped.iter().any(|u| u.kind == unit.kind) {
                warn!("Duplicate unit definition ignored: {}", unit.kind);
                continue;
            }
            deduped.push(unit);
        }
        Self { units: deduped }
    }

    /// ゲーム内の標準ユニット一覧。
    pub fn standard() -> Self {
        Self::new(standard::units())
    }

    /// JSON 配列からカタログを読み込む。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let units: Vec<UnitTypeDefinition> = serde_json::from_str(json)?;
        Ok(Self::new(units))
    }

    pub fn get(&self, kind: UnitKind) -> Option<&UnitTypeDefinition> {
        self.units.iter().find(|u| u.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitTypeDefinition> {
        self.units.iter()
    }

    pub fn is_boss(&self, kind: UnitKind) -> bool {
        self.get(kind).is_some_and(|u| u.is_boss())
    }

    pub fn friendly_units(&self) -> impl Iterator<Item = &UnitTypeDefinition> {
        self.units.iter().filter(|u| u.friendly)
    }

    pub fn hostile_units(&self) -> impl Iterator<Item = &UnitTypeDefinition> {
        self.units.iter().filter(|u| !u.friendly)
    }

    /// 編成画面向け: 陣営とロスターサイズで選択可能なユニットを列挙する。
    pub fn units_for_roster_size(&self, friendly: bool, size: u32) -> Vec<UnitKind> {
        self.units
            .iter()
            .filter(|u| u.friendly == friendly && u.valid_for_roster_size(size))
            .map(|u| u.kind)
            .collect()
    }
}
