use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ユニット種別を表す列挙型。
/// ロスターのキーとして使用され、シリアライズ時は表示名になる。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitKind {
    // -- 味方 --
    Militia,
    Archer,
    Footsoldier,
    #[serde(rename = "Longbow Archer")]
    LongbowArcher,
    Knight,
    Crossbowman,
    Cavalry,
    Cuirassier,
    Cannoneer,

    // -- 敵 --
    Orkling,
    #[serde(rename = "Orc Hunter")]
    OrcHunter,
    #[serde(rename = "Orc Raiders")]
    OrcRaiders,
    #[serde(rename = "Elite Orc Hunters")]
    EliteOrcHunters,
    #[serde(rename = "Orc Veteran")]
    OrcVeteran,
    #[serde(rename = "Elite Orc Sniper")]
    EliteOrcSniper,
    #[serde(rename = "Warg Rider")]
    WargRider,
    #[serde(rename = "Orc Vanguard")]
    OrcVanguard,
    #[serde(rename = "Orc Demolisher")]
    OrcDemolisher,

    // -- ボス --
    #[serde(rename = "Bula (boss 1)")]
    Bula,
    #[serde(rename = "Aguk (boss 2)")]
    Aguk,
    #[serde(rename = "Mazoga (boss 3)")]
    Mazoga,
    #[serde(rename = "Durgash (boss 4)")]
    Durgash,
}

impl UnitKind {
    pub const ALL: [UnitKind; 22] = [
        UnitKind::Militia,
        UnitKind::Archer,
        UnitKind::Footsoldier,
        UnitKind::LongbowArcher,
        UnitKind::Knight,
        UnitKind::Crossbowman,
        UnitKind::Cavalry,
        UnitKind::Cuirassier,
        UnitKind::Cannoneer,
        UnitKind::Orkling,
        UnitKind::OrcHunter,
        UnitKind::OrcRaiders,
        UnitKind::EliteOrcHunters,
        UnitKind::OrcVeteran,
        UnitKind::EliteOrcSniper,
        UnitKind::WargRider,
        UnitKind::OrcVanguard,
        UnitKind::OrcDemolisher,
        UnitKind::Bula,
        UnitKind::Aguk,
        UnitKind::Mazoga,
        UnitKind::Durgash,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnitKind::Militia => "Militia",
            UnitKind::Archer => "Archer",
            UnitKind::Footsoldier => "Footsoldier",
            UnitKind::LongbowArcher => "Longbow Archer",
            UnitKind::Knight => "Knight",
            UnitKind::Crossbowman => "Crossbowman",
            UnitKind::Cavalry => "Cavalry",
            UnitKind::Cuirassier => "Cuirassier",
            UnitKind::Cannoneer => "Cannoneer",
            UnitKind::Orkling => "Orkling",
            UnitKind::OrcHunter => "Orc Hunter",
            UnitKind::OrcRaiders => "Orc Raiders",
            UnitKind::EliteOrcHunters => "Elite Orc Hunters",
            UnitKind::OrcVeteran => "Orc Veteran",
            UnitKind::EliteOrcSniper => "Elite Orc Sniper",
            UnitKind::WargRider => "Warg Rider",
            UnitKind::OrcVanguard => "Orc Vanguard",
            UnitKind::OrcDemolisher => "Orc Demolisher",
            UnitKind::Bula => "Bula (boss 1)",
            UnitKind::Aguk => "Aguk (boss 2)",
            UnitKind::Mazoga => "Mazoga (boss 3)",
            UnitKind::Durgash => "Durgash (boss 4)",
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 表示名からユニット種別を引く。
impl std::str::FromStr for UnitKind {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownUnit(s.to_owned()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no such unit: {0}")]
pub struct UnknownUnit(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_display_name() {
        let json = serde_json::to_string(&UnitKind::LongbowArcher).unwrap();
        assert_eq!(json, "\"Longbow Archer\"");
        let kind: UnitKind = serde_json::from_str("\"Bula (boss 1)\"").unwrap();
        assert_eq!(kind, UnitKind::Bula);
        assert_eq!(kind.to_string(), "Bula (boss 1)");
    }

    #[test]
    fn parses_every_display_name() {
        for kind in UnitKind::ALL {
            assert_eq!(kind.name().parse::<UnitKind>(), Ok(kind));
        }
        assert_eq!(
            "Dragon".parse::<UnitKind>(),
            Err(UnknownUnit("Dragon".to_owned()))
        );
    }
}
