//! # Population View Model
//!
//! The orchestrator behind the population list: owns the observable state,
//! coordinates the fetch lifecycle (start / cancel / replace), narrows the
//! snapshot by year and search text, and translates failures into the
//! messages the presentation layer shows.
//!
//! State is only ever mutated by the owner. Fetches run in a spawned task
//! that reports back over a channel with a generation tag; the owner applies
//! outcomes when it drains the channel in [`pump`](PopulationViewModel::pump)
//! or [`try_pump`](PopulationViewModel::try_pump), so a cancelled or
//! superseded fetch can never touch state, no matter when it resolves.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::config;
use crate::filters::{create_filter, DataFilter};
use crate::models::{Category, PopulationRecord};
use crate::services::{DefaultErrorTranslator, ErrorTranslator, FetchError, PopulationProvider};
use crate::view_models::debounce::SearchDebouncer;
use crate::view_models::events::{StateEvent, StateEventBus, StateEventHandler};

/// Informational message shown when a fetch succeeds but carries no records
pub const NO_DATA_MESSAGE: &str = "No data available for the selected type.";

/// Mutually exclusive presentation states derived from the observable fields
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    /// A fetch is in flight
    Loading,
    /// A fetch failed; the translated message to show
    Error(String),
    /// The current search matched nothing
    NoResults { search_text: String },
    /// Records are available to render
    Populated,
}

/// Outcome of one fetch attempt, tagged with the generation that started it
struct FetchMessage {
    generation: u64,
    outcome: Result<Vec<PopulationRecord>, FetchError>,
}

enum Pumped {
    Outcome(Option<FetchMessage>),
    DebounceElapsed,
}

/// Orchestrator for population data: fetch lifecycle, year narrowing,
/// debounced search filtering, and error translation.
///
/// Must be created inside a Tokio runtime; construction starts the initial
/// fetch for the given category.
pub struct PopulationViewModel {
    // Observable state
    filtered_data: Vec<PopulationRecord>,
    error_message: Option<String>,
    is_loading: bool,
    is_no_search_results: bool,
    selected_year: String,
    search_text: String,
    available_years: Vec<String>,
    category: Category,

    // Snapshot and its year narrowing
    all_data: Vec<PopulationRecord>,
    year_data: Vec<PopulationRecord>,

    // Collaborators
    provider: Arc<dyn PopulationProvider>,
    translator: Box<dyn ErrorTranslator>,
    data_filter: Box<dyn DataFilter>,
    events: StateEventBus,

    // Fetch plumbing: one in-flight task, generation-guarded outcomes
    fetch_generation: u64,
    fetch_handle: Option<JoinHandle<()>>,
    outcome_tx: mpsc::Sender<FetchMessage>,
    outcome_rx: mpsc::Receiver<FetchMessage>,

    debouncer: SearchDebouncer,
}

impl PopulationViewModel {
    /// Create a view model and start fetching data for `category`
    pub fn new(provider: Arc<dyn PopulationProvider>, category: Category) -> Self {
        Self::with_translator(provider, category, Box::new(DefaultErrorTranslator))
    }

    /// Create a view model with a custom error translator
    pub fn with_translator(
        provider: Arc<dyn PopulationProvider>,
        category: Category,
        translator: Box<dyn ErrorTranslator>,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel(10);
        let mut vm = Self {
            filtered_data: Vec::new(),
            error_message: None,
            is_loading: false,
            is_no_search_results: false,
            selected_year: String::new(),
            search_text: String::new(),
            available_years: Vec::new(),
            category,
            all_data: Vec::new(),
            year_data: Vec::new(),
            provider,
            translator,
            data_filter: create_filter(category),
            events: StateEventBus::new(),
            fetch_generation: 0,
            fetch_handle: None,
            outcome_tx,
            outcome_rx,
            debouncer: SearchDebouncer::new(Duration::from_millis(config::SEARCH_DEBOUNCE_MS)),
        };
        vm.fetch_population_data();
        vm
    }

    // --- Observable state ---------------------------------------------------

    /// The year- and search-narrowed records the presentation layer renders
    pub fn filtered_data(&self) -> &[PopulationRecord] {
        &self.filtered_data
    }

    /// Translated error message, if the last fetch failed or returned nothing
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the current filter matched nothing
    pub fn is_no_search_results(&self) -> bool {
        self.is_no_search_results
    }

    /// Currently selected year; empty string when no data is loaded
    pub fn selected_year(&self) -> &str {
        &self.selected_year
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Distinct years present in the snapshot, most recent first.
    ///
    /// Years sort lexicographically descending, which is correct for
    /// four-digit year strings; non-numeric year strings get the same
    /// deterministic ordering.
    pub fn available_years(&self) -> &[String] {
        &self.available_years
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Which of the mutually exclusive presentation states applies right now
    pub fn render_state(&self) -> RenderState {
        if self.is_loading {
            RenderState::Loading
        } else if let Some(message) = &self.error_message {
            RenderState::Error(message.clone())
        } else if self.is_no_search_results {
            RenderState::NoResults {
                search_text: self.search_text.clone(),
            }
        } else {
            RenderState::Populated
        }
    }

    /// Subscribe to notify-on-change state events
    pub fn subscribe(&mut self, handler: StateEventHandler) {
        self.events.subscribe(handler);
    }

    // --- Commands ------------------------------------------------------------

    /// Cancel any in-flight fetch and fetch the current category again
    pub fn fetch_population_data(&mut self) {
        self.cancel_fetch_operation();
        self.error_message = None;
        self.is_loading = true;
        self.fetch_generation += 1;

        let generation = self.fetch_generation;
        let category = self.category;
        let provider = Arc::clone(&self.provider);
        let sender = self.outcome_tx.clone();

        tracing::debug!("starting {category} fetch (generation {generation})");
        self.events.publish(StateEvent::LoadingStarted { category });

        self.fetch_handle = Some(tokio::spawn(async move {
            let outcome = provider.fetch_population(category).await;
            // A dropped receiver means the owner is gone; nothing to report.
            let _ = sender.send(FetchMessage { generation, outcome }).await;
        }));
    }

    /// Switch category: discard the old snapshot's relevance, swap the filter
    /// strategy, and fetch the new category
    pub fn set_category(&mut self, category: Category) {
        let old_category = self.category;
        self.category = category;
        self.error_message = None;
        self.data_filter = create_filter(category);
        self.events.publish(StateEvent::CategoryChanged {
            old_category,
            new_category: category,
        });
        self.fetch_population_data();
    }

    /// Update the search text. The observable field changes immediately; the
    /// refilter runs only after the debounce window elapses without further
    /// edits (drive it with [`pump`](Self::pump) or [`try_pump`](Self::try_pump)).
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search_text {
            return;
        }
        self.search_text = text.clone();
        self.debouncer.push(text);
    }

    /// Clear the search text, showing all data for the selected year again
    pub fn reset_search(&mut self) {
        self.set_search_text("");
    }

    /// Select a year and re-narrow immediately; no refetch happens.
    ///
    /// Years not present in `available_years` are ignored so the selection
    /// invariant (empty, or a member of the available list) always holds.
    pub fn set_selected_year(&mut self, year: impl Into<String>) {
        let year = year.into();
        if !self.available_years.contains(&year) {
            tracing::warn!("ignoring selection of unavailable year {year:?}");
            return;
        }
        self.selected_year = year;
        self.load_data_for_selected_year();
    }

    /// Abort the in-flight fetch, if any. Silent from the state machine's
    /// perspective: no error, no snapshot change, loading simply ends.
    pub fn cancel_fetch_operation(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            tracing::debug!("cancelling in-flight fetch (generation {})", self.fetch_generation);
            handle.abort();
        }
        // Invalidate any outcome already queued by the aborted task.
        self.fetch_generation += 1;
        self.is_loading = false;
    }

    // --- Event pumping ---------------------------------------------------------

    /// Wait for the next state-affecting event (fetch outcome or debounce
    /// expiry) and apply it. Blocks until one arrives; callers that cannot
    /// block use [`try_pump`](Self::try_pump).
    pub async fn pump(&mut self) {
        let pumped = match self.debouncer.deadline() {
            Some(deadline) => {
                tokio::select! {
                    msg = self.outcome_rx.recv() => Pumped::Outcome(msg),
                    _ = tokio::time::sleep_until(deadline) => Pumped::DebounceElapsed,
                }
            }
            None => Pumped::Outcome(self.outcome_rx.recv().await),
        };

        match pumped {
            Pumped::Outcome(Some(msg)) => {
                self.apply_outcome(msg);
            }
            Pumped::Outcome(None) => {}
            Pumped::DebounceElapsed => self.fire_debounce(),
        }
    }

    /// Apply every queued fetch outcome and any elapsed debounce without
    /// blocking. Returns true if state changed; discarded stale outcomes do
    /// not count.
    pub fn try_pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(msg) = self.outcome_rx.try_recv() {
            changed |= self.apply_outcome(msg);
        }
        if self.debouncer.poll().is_some() {
            self.filter_data();
            changed = true;
        }
        changed
    }

    /// Whether a search edit is waiting out its debounce window
    pub fn has_pending_search(&self) -> bool {
        self.debouncer.deadline().is_some()
    }

    // --- Internals ------------------------------------------------------------

    fn fire_debounce(&mut self) {
        // The pending text is already in `search_text`; the debouncer only
        // decides when the refilter runs.
        if self.debouncer.poll().is_some() {
            self.filter_data();
        }
    }

    fn apply_outcome(&mut self, msg: FetchMessage) -> bool {
        if msg.generation != self.fetch_generation {
            tracing::debug!(
                "ignoring stale fetch outcome (generation {} != {})",
                msg.generation,
                self.fetch_generation
            );
            return false;
        }
        self.is_loading = false;
        self.fetch_handle = None;

        match msg.outcome {
            Ok(records) => {
                tracing::info!("snapshot replaced with {} records", records.len());
                self.all_data = records;
                self.events.publish(StateEvent::DataLoaded {
                    record_count: self.all_data.len(),
                });
                self.load_available_years();
                self.load_data_for_selected_year();
            }
            Err(err) => {
                tracing::error!("population fetch failed: {err}");
                let message = self.translator.translate(&err);
                self.error_message = Some(message.clone());
                self.year_data.clear();
                self.filtered_data.clear();
                self.is_no_search_results = false;
                self.events.publish(StateEvent::FetchFailed { message });
            }
        }
        true
    }

    fn load_available_years(&mut self) {
        let mut years: Vec<String> = self
            .all_data
            .iter()
            .filter_map(|record| record.year.clone())
            .collect();
        years.sort();
        years.dedup();
        years.reverse();
        self.available_years = years;

        match self.available_years.first() {
            Some(latest) => self.selected_year = latest.clone(),
            None => {
                self.selected_year.clear();
                self.error_message = Some(NO_DATA_MESSAGE.to_string());
            }
        }
        self.events.publish(StateEvent::YearsRecomputed {
            available_years: self.available_years.clone(),
            selected_year: self.selected_year.clone(),
        });
    }

    fn load_data_for_selected_year(&mut self) {
        self.year_data = self
            .all_data
            .iter()
            .filter(|record| record.year.as_deref() == Some(self.selected_year.as_str()))
            .cloned()
            .collect();
        self.filter_data();
    }

    fn filter_data(&mut self) {
        self.filtered_data = self.data_filter.filter(&self.year_data, &self.search_text);
        self.is_no_search_results = self.filtered_data.is_empty();
        self.events.publish(StateEvent::FilterApplied {
            visible_count: self.filtered_data.len(),
            search_text: self.search_text.clone(),
        });
    }
}

impl Drop for PopulationViewModel {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}
