//! フロントエンドとシミュレーションコア間のインターフェースを定義する。
//! このモジュールで公開される構造体は、シリアライズ/デシリアライズ可能でなければならない。
//! また、`Army` のメソッドはロスター操作の委譲に限定し、原則的にロジックを含めてはならない。
mod army;

use std::sync::OnceLock;

pub use army::Army;

pub use crate::battle::{BattleLog, BattleLogEntry, UnitCount, Winner};
pub use crate::catalog::{UnitKind, UnitSkills, UnitTypeDefinition};
pub use crate::casualty::CasualtySummary;
pub use crate::simulation::{SimulationConfig, SimulationReport};

use crate::catalog::UnitCatalog;

static STANDARD_CATALOG: OnceLock<UnitCatalog> = OnceLock::new();

/// wasm 側で共有する標準カタログ。
pub(crate) fn standard_catalog() -> &'static UnitCatalog {
    STANDARD_CATALOG.get_or_init(UnitCatalog::standard)
}
