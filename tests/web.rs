//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use army_sim_core::interface::{Army, SimulationReport};
use army_sim_core::simulate;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn army_enforces_limit() {
    let mut army = Army::new(Some(100));
    army.set_count("Militia", 60);
    army.set_count("Archer", 50);
    assert_eq!(army.count("Militia"), 50);
    assert_eq!(army.count("Archer"), 50);
    army.set_count("Dragon", 5);
    assert_eq!(army.count("Dragon"), 0);
}

#[wasm_bindgen_test]
fn unlimited_army_rejects_fill() {
    let mut army = Army::new(None);
    assert!(army.fill_count("Orkling").is_err());
    assert!(army.set_all("Orkling").is_err());
}

#[wasm_bindgen_test]
fn simulate_returns_report() {
    let mut player = Army::new(Some(100));
    player.set_all("Knight").unwrap();
    let mut enemy = Army::new(None);
    enemy.set_count("Orkling", 3);

    let value = simulate(&player, &enemy, JsValue::UNDEFINED);
    let report: SimulationReport = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(report.wins_percent, 100.0);
    assert_eq!(report.trials, 50);
    assert_eq!(report.battle_log.entries()[0].stage_name, "Start");
}

#[wasm_bindgen_test]
fn simulate_with_empty_side_returns_null() {
    let player = Army::new(Some(100));
    let mut enemy = Army::new(None);
    enemy.set_count("Orkling", 3);
    assert!(simulate(&player, &enemy, JsValue::UNDEFINED).is_null());
}
