use crate::catalog::{UnitKind, UnitSkills, UnitTypeDefinition};

const FRIENDLY_CRIT: f64 = 0.8;
const HOSTILE_CRIT: f64 = 0.6;
const BOSS_CRIT: f64 = 0.5;

fn skills(f: impl FnOnce(&mut UnitSkills)) -> UnitSkills {
    let mut s = UnitSkills::default();
    f(&mut s);
    s
}

#[allow(clippy::too_many_arguments)]
fn unit(
    kind: UnitKind,
    friendly: bool,
    max_hp: u32,
    attack: u32,
    crit: f64,
    order: f64,
    tier: u32,
    skills: UnitSkills,
    roster_size: (Option<u32>, Option<u32>),
) -> UnitTypeDefinition {
    UnitTypeDefinition {
        kind,
        friendly,
        max_hp,
        attack,
        crit,
        order,
        tier,
        skills,
        min_roster_size: roster_size.0,
        max_roster_size: roster_size.1,
    }
}

/// 標準ユニット定義。リストの並びがカタログ順になる。
pub(super) fn units() -> Vec<UnitTypeDefinition> {
    use UnitKind::*;
    let none = UnitSkills::default();
    let any = (None, None);

    vec![
        // -- 味方 --
        unit(Militia, true, 15, 5, FRIENDLY_CRIT, 0.0, 1, none, any),
        unit(Archer, true, 10, 20, FRIENDLY_CRIT, 5.0, 1, skills(|s| s.ranged = true), any),
        unit(Footsoldier, true, 40, 15, FRIENDLY_CRIT, 1.0, 1, none, any),
        unit(
            LongbowArcher,
            true,
            10,
            15,
            FRIENDLY_CRIT,
            6.0,
            2,
            skills(|s| {
                s.ranged = true;
                s.double_strike = true;
            }),
            any,
        ),
        unit(Knight, true, 90, 20, FRIENDLY_CRIT, 2.0, 3, none, any),
        unit(Crossbowman, true, 15, 90, FRIENDLY_CRIT, 7.0, 3, skills(|s| s.ranged = true), any),
        unit(
            Cavalry,
            true,
            5,
            5,
            FRIENDLY_CRIT,
            4.0,
            2,
            skills(|s| {
                s.flanking = true;
                s.first_strike = true;
            }),
            any,
        ),
        unit(Cuirassier, true, 120, 10, FRIENDLY_CRIT, 3.0, 4, skills(|s| s.first_strike = true), any),
        unit(
            Cannoneer,
            true,
            60,
            80,
            FRIENDLY_CRIT,
            8.0,
            4,
            skills(|s| {
                s.trample = true;
                s.last_strike = true;
                s.ranged = true;
                s.flanking = true;
            }),
            any,
        ),
        // -- 敵 --
        unit(Orkling, false, 15, 5, HOSTILE_CRIT, 0.0, 1, none, (Some(12), Some(14))),
        unit(
            OrcHunter,
            false,
            10,
            20,
            HOSTILE_CRIT,
            5.0,
            1,
            skills(|s| s.ranged = true),
            (Some(12), Some(20)),
        ),
        unit(OrcRaiders, false, 40, 15, HOSTILE_CRIT, 1.0, 1, none, (Some(12), Some(20))),
        unit(
            EliteOrcHunters,
            false,
            10,
            15,
            HOSTILE_CRIT,
            6.0,
            2,
            skills(|s| {
                s.ranged = true;
                s.double_strike = true;
            }),
            (Some(16), None),
        ),
        unit(OrcVeteran, false, 90, 20, HOSTILE_CRIT, 2.0, 3, none, (Some(20), None)),
        unit(
            EliteOrcSniper,
            false,
            15,
            90,
            HOSTILE_CRIT,
            7.0,
            3,
            skills(|s| s.ranged = true),
            (Some(20), None),
        ),
        unit(
            WargRider,
            false,
            5,
            5,
            HOSTILE_CRIT,
            4.0,
            2,
            skills(|s| {
                s.flanking = true;
                s.first_strike = true;
            }),
            (Some(14), None),
        ),
        unit(
            OrcVanguard,
            false,
            120,
            10,
            HOSTILE_CRIT,
            3.0,
            4,
            skills(|s| s.first_strike = true),
            (Some(24), None),
        ),
        unit(
            OrcDemolisher,
            false,
            60,
            80,
            HOSTILE_CRIT,
            8.0,
            4,
            skills(|s| {
                s.ranged = true;
                s.trample = true;
                s.flanking = true;
                s.last_strike = true;
            }),
            (Some(24), None),
        ),
        // -- ボス --
        unit(
            Bula,
            false,
            5000,
            150,
            BOSS_CRIT,
            100.0,
            100,
            skills(|s| {
                s.trample = true;
                s.last_strike = true;
            }),
            (Some(12), Some(18)),
        ),
        unit(
            Aguk,
            false,
            11000,
            300,
            BOSS_CRIT,
            100.0,
            150,
            skills(|s| {
                s.trample = true;
                s.last_strike = true;
            }),
            (Some(16), Some(22)),
        ),
        // 先頭寄りに並ぶボス
        unit(
            Mazoga,
            false,
            120000,
            100,
            BOSS_CRIT,
            3.5,
            200,
            skills(|s| {
                s.trample = true;
                s.last_strike = true;
            }),
            (Some(20), None),
        ),
        unit(
            Durgash,
            false,
            40000,
            500,
            BOSS_CRIT,
            100.0,
            300,
            skills(|s| {
                s.trample = true;
                s.first_strike = true;
            }),
            (Some(20), None),
        ),
    ]
}
