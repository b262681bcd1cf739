use log::{debug, error, info};
use wasm_bindgen::prelude::*;

pub mod battle;
pub mod casualty;
pub mod catalog;
pub mod interface;
pub mod roster;
pub mod simulation;
mod utils;

use crate::interface::{standard_catalog, Army, SimulationConfig, SimulationReport};
use crate::simulation::Simulator;

static INIT: std::sync::Once = std::sync::Once::new();

fn initialize() {
    INIT.call_once(|| {
        utils::set_panic_hook();
        wasm_logger::init(wasm_logger::Config::default()); // ロガー初期化
        info!("Logger initialized");
    });
}

/// 2つの編成で戦闘をシミュレーションし、`SimulationReport` を返す。
/// どちらかの編成が空の場合は `null` を返す (前回の結果は破棄される)。
#[wasm_bindgen]
pub fn simulate(player: &Army, enemy: &Army, options: JsValue) -> JsValue {
    initialize();

    let config = if options.is_undefined() || options.is_null() {
        SimulationConfig::default()
    } else {
        match serde_wasm_bindgen::from_value::<SimulationConfig>(options) {
            Ok(c) => c,
            Err(err) => {
                error!("Failed to parse simulation options: {:?}", err);
                SimulationConfig::default()
            }
        }
    };
    debug!("Simulation config: {:?}", config);
    debug!("Player roster: {:?}", player.roster().counts().collect::<Vec<_>>());
    debug!("Enemy roster: {:?}", enemy.roster().counts().collect::<Vec<_>>());

    let started = now_ms();
    let simulator = Simulator::new(player.roster(), enemy.roster(), config);
    let Some(mut result) = simulator.run(&mut rand::rng()) else {
        info!("Nothing to simulate");
        return JsValue::NULL;
    };
    result.set_simulation_ms(started.zip(now_ms()).map(|(start, end)| end - start));

    let report = SimulationReport::from(&result);
    serde_wasm_bindgen::to_value(&report).unwrap_or_else(|err| {
        error!("Failed to serialize simulation report: {:?}", err);
        JsValue::NULL
    })
}

/// 標準ユニット定義の一覧を返す。
#[wasm_bindgen(js_name = unitCatalog)]
pub fn unit_catalog() -> JsValue {
    initialize();
    let units: Vec<_> = standard_catalog().iter().collect();
    serde_wasm_bindgen::to_value(&units).unwrap_or_else(|err| {
        error!("Failed to serialize unit catalog: {:?}", err);
        JsValue::NULL
    })
}

/// 指定サイズのロスターに出せるユニット名の一覧を返す。
#[wasm_bindgen(js_name = unitsForRosterSize)]
pub fn units_for_roster_size(friendly: bool, size: u32) -> Vec<String> {
    standard_catalog()
        .units_for_roster_size(friendly, size)
        .into_iter()
        .map(|kind| kind.to_string())
        .collect()
}

// 計測できない環境では None
fn now_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}
