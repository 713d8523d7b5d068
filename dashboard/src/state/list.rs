//! List screen core: load state, refresh signal, stale-load guard

use shared::Page;

use crate::error::AppError;

use super::{page_controls, FilterState, ModalState, PageControls, SubmitState};

/// State of the current data load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(Page<T>),
    /// Coarse user-facing message; prior results are cleared so a
    /// failed load never shows partial data
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn results(&self) -> &[T] {
        match self {
            LoadState::Loaded(page) => &page.results,
            _ => &[],
        }
    }

    pub fn count(&self) -> u64 {
        match self {
            LoadState::Loaded(page) => page.count,
            _ => 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

/// Monotonically incrementing counter used as the cache-invalidation
/// signal between mutations and the data fetcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSignal {
    current: u64,
    observed: u64,
}

impl RefreshSignal {
    /// Signal that cached data is stale; called after every successful
    /// mutation
    pub fn bump(&mut self) {
        self.current += 1;
    }

    /// Whether a reload is due since the last observed load
    pub fn is_stale(&self) -> bool {
        self.current > self.observed
    }

    /// Mark the signal as consumed by a completed load
    pub fn observe(&mut self) {
        self.observed = self.current;
    }

    pub fn value(&self) -> u64 {
        self.current
    }
}

/// Why a list rendered empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    /// No records exist at all
    NoRecords,
    /// Records exist but none match the active filters
    NoMatches,
}

/// The per-screen LFPM state: filters, load state, modal, submission,
/// and refresh handshake
#[derive(Debug, Default)]
pub struct ListCore<T> {
    pub filters: FilterState,
    pub modal: ModalState,
    pub submit: SubmitState,
    load: LoadState<T>,
    refresh: RefreshSignal,
    /// Load generation guard: results from a superseded load are
    /// discarded instead of clobbering newer state
    generation: u64,
}

impl<T> ListCore<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            filters: FilterState::new(page_size),
            modal: ModalState::None,
            submit: SubmitState::Idle,
            load: LoadState::Idle,
            refresh: RefreshSignal::default(),
            generation: 0,
        }
    }

    /// Start a load: supersedes any in-flight load and returns the
    /// generation token the caller must hand back to [`finish_load`]
    ///
    /// [`finish_load`]: ListCore::finish_load
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.load = LoadState::Loading;
        self.generation
    }

    /// Complete a load; returns false when the result was stale and
    /// discarded
    pub fn finish_load(&mut self, generation: u64, result: Result<Page<T>, AppError>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "stale load discarded");
            return false;
        }

        self.refresh.observe();
        match result {
            Ok(page) => {
                self.load = LoadState::Loaded(page);
            }
            Err(err) => {
                tracing::error!(error = %err, "list load failed");
                self.load = LoadState::Failed(err.user_message());
            }
        }
        true
    }

    pub fn load_state(&self) -> &LoadState<T> {
        &self.load
    }

    pub fn results(&self) -> &[T] {
        self.load.results()
    }

    pub fn total_pages(&self) -> u32 {
        self.filters.params().total_pages(self.load.count())
    }

    /// Pagination footer for the current page and count
    pub fn page_controls(&self) -> PageControls {
        page_controls(self.total_pages(), self.filters.page())
    }

    /// The empty-state affordance to render, if any; errors and loads
    /// in flight take precedence over the empty state
    pub fn empty_kind(&self) -> Option<EmptyKind> {
        match &self.load {
            LoadState::Loaded(page) if page.is_empty() => {
                if self.filters.is_filtered() {
                    Some(EmptyKind::NoMatches)
                } else {
                    Some(EmptyKind::NoRecords)
                }
            }
            _ => None,
        }
    }

    /// Invalidate cached data after a successful mutation
    pub fn bump_refresh(&mut self) {
        self.refresh.bump();
    }

    /// Whether the screen should reload: explicitly signalled, never
    /// loaded, or recovering is left to the manual retry affordance
    pub fn needs_reload(&self) -> bool {
        self.refresh.is_stale() || matches!(self.load, LoadState::Idle)
    }

    /// Common success path for mutations: reset submission, close the
    /// modal, and signal the fetcher
    pub fn mutation_succeeded(&mut self) {
        self.submit.succeed();
        self.modal.close();
        self.refresh.bump();
    }

    /// Common failure path: the modal stays open with the message shown
    /// inline
    pub fn mutation_failed(&mut self, err: &AppError) {
        tracing::error!(error = %err, "mutation failed");
        self.submit.fail(err.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize, count: u64) -> Page<u32> {
        Page {
            results: (0..n as u32).collect(),
            count,
        }
    }

    #[test]
    fn test_stale_load_discarded() {
        let mut core: ListCore<u32> = ListCore::new(20);
        let first = core.begin_load();
        let second = core.begin_load();

        // The slower first load arrives after the second superseded it
        assert!(!core.finish_load(first, Ok(page(3, 3))));
        assert!(core.load_state().is_loading());

        assert!(core.finish_load(second, Ok(page(5, 5))));
        assert_eq!(core.results().len(), 5);
    }

    #[test]
    fn test_failed_load_clears_results() {
        let mut core: ListCore<u32> = ListCore::new(20);
        let generation = core.begin_load();
        core.finish_load(generation, Ok(page(5, 5)));
        assert_eq!(core.results().len(), 5);

        let generation = core.begin_load();
        core.finish_load(
            generation,
            Err(AppError::Api {
                detail: "status 502".to_string(),
                status: Some(502),
            }),
        );
        assert!(core.results().is_empty());
        assert_eq!(
            core.load_state().error(),
            Some("Request failed. Please try again.")
        );
    }

    #[test]
    fn test_refresh_is_idempotent_on_filters() {
        let mut core: ListCore<u32> = ListCore::new(20);
        core.filters.set_search("brake");
        core.filters.set_page(3);
        let generation = core.begin_load();
        core.finish_load(generation, Ok(page(5, 100)));
        assert!(!core.needs_reload());

        // Bumping the refresh signal N times requests a reload but
        // leaves the filter/page state untouched
        core.bump_refresh();
        core.bump_refresh();
        core.bump_refresh();
        assert!(core.needs_reload());
        assert_eq!(core.filters.search(), "brake");
        assert_eq!(core.filters.page(), 3);

        let generation = core.begin_load();
        core.finish_load(generation, Ok(page(5, 100)));
        assert!(!core.needs_reload());
    }

    #[test]
    fn test_empty_kind_distinguishes_filtered() {
        let mut core: ListCore<u32> = ListCore::new(20);
        let generation = core.begin_load();
        core.finish_load(generation, Ok(page(0, 0)));
        assert_eq!(core.empty_kind(), Some(EmptyKind::NoRecords));

        core.filters.set_facet("status", "active");
        let generation = core.begin_load();
        core.finish_load(generation, Ok(page(0, 0)));
        assert_eq!(core.empty_kind(), Some(EmptyKind::NoMatches));
    }

    #[test]
    fn test_mutation_success_closes_modal_and_signals() {
        let mut core: ListCore<u32> = ListCore::new(20);
        let generation = core.begin_load();
        core.finish_load(generation, Ok(page(1, 1)));

        core.modal = ModalState::Edit(1);
        core.submit.begin();
        core.mutation_succeeded();
        assert_eq!(core.modal, ModalState::None);
        assert!(core.needs_reload());
    }

    #[test]
    fn test_mutation_failure_keeps_modal_open() {
        let mut core: ListCore<u32> = ListCore::new(20);
        core.modal = ModalState::Add;
        core.submit.begin();
        core.mutation_failed(&AppError::Api {
            detail: "status 400".to_string(),
            status: Some(400),
        });
        assert_eq!(core.modal, ModalState::Add);
        assert_eq!(
            core.submit.error(),
            Some("Request failed. Please try again.")
        );
    }
}
