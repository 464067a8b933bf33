//! Plain-text rendering of the controller state for the terminal front-end.

use std::fmt::Write;

use serde_json::Value;

use crate::fdc::food;

use super::backend::{Backend, SavedSummary};
use super::controller::Controller;

pub fn render_results<B: Backend>(c: &Controller<B>) -> String {
    let mut out = String::new();
    if c.results().is_empty() {
        out.push_str("No results\n");
        return out;
    }

    let displayed = c.displayed_calories();
    for (i, (item, kcal)) in c.results().iter().zip(displayed).enumerate() {
        let mark = if c.is_selected(i) { "x" } else { " " };
        let title = food::description(item).unwrap_or("(no description)");
        let _ = write!(out, "[{mark}] {i:>3}  {title}");
        if let Some(brand) = food::brand_owner(item) {
            let _ = write!(out, " | {brand}");
        }
        if let Some(kind) = food::data_type(item) {
            let _ = write!(out, " | {kind}");
        }
        match kcal {
            Some(v) => {
                let _ = writeln!(out, " | {v} kcal");
            }
            None => out.push_str(" | n/a\n"),
        }
    }

    let avg = c
        .average_calories()
        .map(|v| format!("{v} kcal"))
        .unwrap_or_else(|| "n/a".into());
    let _ = writeln!(
        out,
        "{} results, {} selected, avg {} at {}x serving",
        c.results().len(),
        c.selected_count(),
        avg,
        c.multiplier().value()
    );
    out
}

pub fn render_saved(saved: &[SavedSummary]) -> String {
    if saved.is_empty() {
        return "No saved queries\n".into();
    }
    let mut out = String::new();
    for s in saved {
        let count = s.count.map(|n| n.to_string()).unwrap_or_else(|| "-".into());
        let avg = s.avg_cal.map(|v| format!("{v} kcal")).unwrap_or_else(|| "-".into());
        let _ = writeln!(
            out,
            "#{:<5} {}  ({} items, avg {})  {}",
            s.id, s.query, count, avg, s.created_at
        );
    }
    out
}

pub fn render_details(details: &Value) -> String {
    serde_json::to_string_pretty(details).unwrap_or_else(|_| details.to_string())
}
