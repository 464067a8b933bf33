use std::collections::BTreeSet;

use serde_json::{json, Value};
use tracing::debug;

use crate::fdc::food;

use super::backend::{Backend, SaveBody, SavedSummary, SearchBody};
use super::calories::{self, Multiplier};

pub const SEARCH_PAGE_SIZE: u32 = 25;

/// State of the single search view.
///
/// Every action awaits exactly one endpoint call (plus a list reload after a
/// successful save). Results are addressed by index; a selection is not
/// re-keyed when a new search replaces the results.
pub struct Controller<B> {
    backend: B,
    query: String,
    loading: bool,
    saving: bool,
    results: Vec<Value>,
    error: Option<String>,
    saved: Vec<SavedSummary>,
    selected: BTreeSet<usize>,
    multiplier: Multiplier,
    selected_id: Option<i32>,
    selected_details: Option<Value>,
}

impl<B: Backend> Controller<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            query: String::new(),
            loading: false,
            saving: false,
            results: Vec::new(),
            error: None,
            saved: Vec::new(),
            selected: BTreeSet::new(),
            multiplier: Multiplier::default(),
            selected_id: None,
            selected_details: None,
        }
    }

    /// Builds the view and fetches the saved list once.
    pub async fn start(backend: B) -> Self {
        let mut controller = Self::new(backend);
        controller.load_saved().await;
        controller
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub async fn search(&mut self) {
        if self.query.trim().is_empty() {
            return;
        }
        self.loading = true;
        self.error = None;
        self.results.clear();

        let body = SearchBody {
            query: self.query.clone(),
            page_size: SEARCH_PAGE_SIZE,
        };
        match self.backend.search(&body).await {
            Ok(data) => {
                self.results = food::search_foods(&data);
                debug!(query = %self.query, results = self.results.len(), "search results");
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    pub fn base_calories(&self) -> Vec<Option<f64>> {
        self.results.iter().map(calories::extract_calories).collect()
    }

    pub fn displayed_calories(&self) -> Vec<Option<f64>> {
        self.base_calories()
            .into_iter()
            .map(|base| calories::display_calories(base, self.multiplier))
            .collect()
    }

    pub fn average_calories(&self) -> Option<f64> {
        calories::average_calories(&self.displayed_calories())
    }

    pub fn toggle_select(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    pub fn select_all(&mut self) {
        self.selected = (0..self.results.len()).collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn set_multiplier(&mut self, value: f64) {
        self.multiplier = Multiplier::new(value);
    }

    /// "Save Results" button above the list.
    pub async fn save_results(&mut self) {
        self.save_indices((0..self.results.len()).collect()).await;
    }

    /// "Save All" button below the list; same payload as `save_results`.
    pub async fn save_all(&mut self) {
        self.save_results().await;
    }

    pub async fn save_selected(&mut self) {
        let indices = self
            .selected
            .iter()
            .copied()
            .filter(|i| *i < self.results.len())
            .collect();
        self.save_indices(indices).await;
    }

    async fn save_indices(&mut self, indices: Vec<usize>) {
        if indices.is_empty() {
            return;
        }
        let results: Vec<Value> = indices.iter().map(|i| self.results[*i].clone()).collect();

        // The average shown in the view, over every current result.
        let body = SaveBody {
            query: self.query.clone(),
            count: results.len(),
            results,
            avg_cal: self.average_calories(),
        };

        self.saving = true;
        match self.backend.save(&body).await {
            Ok(ack) if ack.ok => self.load_saved().await,
            Ok(_) => {}
            Err(e) => self.error = Some(e.to_string()),
        }
        self.saving = false;
    }

    pub async fn load_saved(&mut self) {
        match self.backend.list_saved().await {
            Ok(list) => self.saved = list,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn view_saved(&mut self, id: i32) {
        self.selected_id = Some(id);
        self.selected_details = None;
        let details = match self.backend.get_saved(id).await {
            Ok(body) => body,
            Err(_) => json!({ "error": "Unable to load" }),
        };
        self.selected_details = Some(details);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn results(&self) -> &[Value] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn saved(&self) -> &[SavedSummary] {
        &self.saved
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    pub fn selected_id(&self) -> Option<i32> {
        self.selected_id
    }

    pub fn selected_details(&self) -> Option<&Value> {
        self.selected_details.as_ref()
    }
}
