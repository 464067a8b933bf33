//! Accessors over the provider's food records.
//!
//! Records stay as `serde_json::Value`; only the handful of fields the app
//! displays are read, and every one of them is optional.

use serde_json::Value;

pub fn description(food: &Value) -> Option<&str> {
    food.get("description").and_then(Value::as_str)
}

pub fn brand_owner(food: &Value) -> Option<&str> {
    food.get("brandOwner").and_then(Value::as_str)
}

pub fn data_type(food: &Value) -> Option<&str> {
    food.get("dataType").and_then(Value::as_str)
}

pub fn fdc_id(food: &Value) -> Option<i64> {
    food.get("fdcId").and_then(Value::as_i64)
}

/// Entries of `foodNutrients`; empty when the field is absent or not a list.
pub fn nutrients(food: &Value) -> &[Value] {
    food.get("foodNutrients")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Search results use `nutrientName`, detail records use `name`.
pub fn nutrient_name(nutrient: &Value) -> &str {
    first_text(nutrient, "nutrientName", "name")
}

pub fn nutrient_number(nutrient: &Value) -> &str {
    first_text(nutrient, "nutrientNumber", "number")
}

/// First of the two keys holding a non-empty string; null and "" fall through.
fn first_text<'a>(v: &'a Value, key: &str, fallback: &str) -> &'a str {
    let text = |k: &str| v.get(k).and_then(Value::as_str).filter(|s| !s.is_empty());
    text(key).or_else(|| text(fallback)).unwrap_or("")
}

/// Numeric `value` of a nutrient entry. Numeric strings are accepted too.
pub fn nutrient_value(nutrient: &Value) -> Option<f64> {
    match nutrient.get("value")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn nutrient_unit(nutrient: &Value) -> Option<&str> {
    nutrient.get("unitName").and_then(Value::as_str)
}

/// The `foods` array of a search payload, empty when missing.
pub fn search_foods(payload: &Value) -> Vec<Value> {
    payload
        .get("foods")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
