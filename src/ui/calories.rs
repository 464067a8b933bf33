use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::fdc::food;

/// USDA nutrient number for energy in kcal.
pub const ENERGY_NUTRIENT_NUMBER: &str = "208";

lazy_static! {
    static ref ENERGY_NAME_RE: Regex = Regex::new(r"(?i)energy|calor").unwrap();
}

/// Base calorie value of a food: the first nutrient named like energy/calories
/// or numbered 208.
pub fn extract_calories(food: &Value) -> Option<f64> {
    food::nutrients(food)
        .iter()
        .find(|n| {
            ENERGY_NAME_RE.is_match(food::nutrient_name(n))
                || food::nutrient_number(n) == ENERGY_NUTRIENT_NUMBER
        })
        .and_then(food::nutrient_value)
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub fn display_calories(base: Option<f64>, multiplier: Multiplier) -> Option<f64> {
    base.map(|v| round1(v * multiplier.value()))
}

pub fn average_calories(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    Some(round1(present.iter().sum::<f64>() / present.len() as f64))
}

/// Serving-size multiplier, kept within 0.5..=2.0 on a 0.1 grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multiplier(f64);

impl Multiplier {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 2.0;

    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(round1(value.clamp(Self::MIN, Self::MAX)))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self(1.0)
    }
}
