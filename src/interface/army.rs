use log::warn;
use wasm_bindgen::prelude::*;

use crate::battle::UnitCount;
use crate::catalog::UnitKind;
use crate::interface::standard_catalog;
use crate::roster::Roster;

/// 標準カタログ上のロスターを JS に公開するラッパー。
#[wasm_bindgen]
pub struct Army {
    roster: Roster<'static>,
}

#[wasm_bindgen]
impl Army {
    /// `limit` を省略すると上限なしのロスターになる。
    #[wasm_bindgen(constructor)]
    pub fn new(limit: Option<u32>) -> Army {
        Army {
            roster: Roster::new(standard_catalog(), limit),
        }
    }

    #[wasm_bindgen(js_name = setCount)]
    pub fn set_count(&mut self, unit: &str, count: i32) {
        if let Some(kind) = parse_unit(unit) {
            self.roster.set_count(kind, i64::from(count));
        }
    }

    #[wasm_bindgen(js_name = fillCount)]
    pub fn fill_count(&mut self, unit: &str) -> Result<(), JsError> {
        match parse_unit(unit) {
            Some(kind) => self.roster.fill_count(kind).map_err(|e| JsError::new(&e.to_string())),
            None => Ok(()),
        }
    }

    #[wasm_bindgen(js_name = setAll)]
    pub fn set_all(&mut self, unit: &str) -> Result<(), JsError> {
        match parse_unit(unit) {
            Some(kind) => self.roster.set_all(kind).map_err(|e| JsError::new(&e.to_string())),
            None => Ok(()),
        }
    }

    pub fn clear(&mut self) {
        self.roster.clear();
    }

    pub fn count(&self, unit: &str) -> u32 {
        parse_unit(unit).map_or(0, |kind| self.roster.count(kind))
    }

    #[wasm_bindgen(js_name = hasUnits)]
    pub fn has_units(&self) -> bool {
        self.roster.has_units()
    }

    #[wasm_bindgen(getter)]
    pub fn limit(&self) -> Option<u32> {
        self.roster.limit()
    }

    /// カタログ順の `{ kind, count }[]` を返す。
    pub fn counts(&self) -> JsValue {
        let counts: Vec<UnitCount> = self
            .roster
            .counts()
            .map(|(kind, count)| UnitCount { kind, count })
            .collect();
        serde_wasm_bindgen::to_value(&counts).unwrap_or(JsValue::NULL)
    }
}

impl Army {
    pub fn roster(&self) -> &Roster<'static> {
        &self.roster
    }
}

fn parse_unit(unit: &str) -> Option<UnitKind> {
    match unit.parse::<UnitKind>() {
        Ok(kind) => Some(kind),
        Err(err) => {
            warn!("{err}, ignoring");
            None
        }
    }
}
