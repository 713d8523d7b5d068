//! List screen flow tests
//!
//! Exercises the shared list machinery end to end: filter changes and
//! page resets, the pagination footer, the refresh handshake after
//! mutations, and the stale-load guard.

use proptest::prelude::*;

use fleet_ops_dashboard::state::{EmptyKind, ListCore, ModalState};
use fleet_ops_dashboard::AppError;
use shared::Page;

fn loaded(core: &mut ListCore<u32>, results: Vec<u32>, count: u64) {
    let generation = core.begin_load();
    assert!(core.finish_load(generation, Ok(Page { results, count })));
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Any filter change lands the user back on page 1; only explicit
    /// page navigation keeps the rest of the state
    #[test]
    fn test_filter_changes_reset_to_first_page() {
        let mut core: ListCore<u32> = ListCore::new(20);
        core.filters.set_page(5);
        core.filters.set_search("brake pad");
        assert_eq!(core.filters.page(), 1);

        core.filters.set_page(5);
        core.filters.set_facet("category", "3");
        assert_eq!(core.filters.page(), 1);

        core.filters.set_page(5);
        assert_eq!(core.filters.page(), 5);
        assert_eq!(core.filters.search(), "brake pad");
        assert_eq!(core.filters.facet("category"), Some("3"));
    }

    /// 115 records at 10 per page paginate to 12 pages, and the
    /// window tracks the current page
    #[test]
    fn test_pagination_footer_window() {
        let mut core: ListCore<u32> = ListCore::new(10);
        loaded(&mut core, (0..10).collect(), 115);
        assert_eq!(core.total_pages(), 12);

        let controls = core.page_controls();
        assert!(controls.visible);
        assert_eq!(controls.window, vec![1, 2, 3, 4, 5]);
        assert!(!controls.prev_enabled);
        assert!(controls.next_enabled);

        core.filters.set_page(12);
        loaded(&mut core, (0..5).collect(), 115);
        assert_eq!(core.page_controls().window, vec![8, 9, 10, 11, 12]);

        core.filters.set_page(6);
        loaded(&mut core, (0..10).collect(), 115);
        assert_eq!(core.page_controls().window, vec![4, 5, 6, 7, 8]);
    }

    /// The footer disappears when everything fits on one page
    #[test]
    fn test_footer_hidden_for_single_page() {
        let mut core: ListCore<u32> = ListCore::new(20);
        loaded(&mut core, (0..7).collect(), 7);
        assert!(!core.page_controls().visible);
    }

    /// A successful mutation closes the modal and flags the list stale;
    /// reloading clears the flag without touching the filters
    #[test]
    fn test_mutation_refresh_handshake() {
        let mut core: ListCore<u32> = ListCore::new(20);
        core.filters.set_search("oil filter");
        core.filters.set_page(2);
        loaded(&mut core, (0..20).collect(), 60);

        core.modal = ModalState::Edit(4);
        core.submit.begin();
        core.mutation_succeeded();

        assert_eq!(core.modal, ModalState::None);
        assert!(core.needs_reload());
        assert_eq!(core.filters.search(), "oil filter");
        assert_eq!(core.filters.page(), 2);

        loaded(&mut core, (0..20).collect(), 60);
        assert!(!core.needs_reload());
    }

    /// A failed mutation keeps the modal open and shows the coarse
    /// message; the list is not marked stale
    #[test]
    fn test_failed_mutation_keeps_modal() {
        let mut core: ListCore<u32> = ListCore::new(20);
        loaded(&mut core, vec![1], 1);

        core.modal = ModalState::Add;
        core.submit.begin();
        core.mutation_failed(&AppError::Api {
            detail: "status 400: {\"sku\": [\"already exists\"]}".to_string(),
            status: Some(400),
        });

        assert_eq!(core.modal, ModalState::Add);
        assert_eq!(core.submit.error(), Some("Request failed. Please try again."));
        assert!(!core.needs_reload());
    }

    /// A load that was superseded mid-flight must not clobber the
    /// newer result
    #[test]
    fn test_superseded_load_discarded() {
        let mut core: ListCore<u32> = ListCore::new(20);
        let slow = core.begin_load();
        let fast = core.begin_load();

        assert!(core.finish_load(fast, Ok(Page { results: vec![1, 2], count: 2 })));
        assert!(!core.finish_load(slow, Ok(Page { results: vec![9; 20], count: 100 })));
        assert_eq!(core.results(), &[1, 2]);
    }

    /// A failed load clears prior results and leaves recovery to the
    /// manual retry affordance
    #[test]
    fn test_failed_load_clears_and_waits() {
        let mut core: ListCore<u32> = ListCore::new(20);
        loaded(&mut core, (0..20).collect(), 40);

        let generation = core.begin_load();
        core.finish_load(
            generation,
            Err(AppError::Api {
                detail: "connection refused".to_string(),
                status: None,
            }),
        );

        assert!(core.results().is_empty());
        assert!(core.load_state().error().is_some());
        // Failure does not queue an automatic reload
        assert!(!core.needs_reload());
    }

    /// Empty lists distinguish "nothing exists" from "nothing matches"
    #[test]
    fn test_empty_state_kinds() {
        let mut core: ListCore<u32> = ListCore::new(20);
        loaded(&mut core, vec![], 0);
        assert_eq!(core.empty_kind(), Some(EmptyKind::NoRecords));

        core.filters.set_search("xyzzy");
        loaded(&mut core, vec![], 0);
        assert_eq!(core.empty_kind(), Some(EmptyKind::NoMatches));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Bumping the refresh signal any number of times requests exactly
    /// one reload and never disturbs the filter state
    #[test]
    fn prop_refresh_idempotent(bumps in 1usize..50, page in 1u32..100) {
        let mut core: ListCore<u32> = ListCore::new(20);
        core.filters.set_search("hilux");
        core.filters.set_page(page);
        loaded(&mut core, vec![1], 1);

        for _ in 0..bumps {
            core.bump_refresh();
        }
        prop_assert!(core.needs_reload());
        prop_assert_eq!(core.filters.page(), page);
        prop_assert_eq!(core.filters.search(), "hilux");

        loaded(&mut core, vec![1], 1);
        prop_assert!(!core.needs_reload());
    }

    /// Total pages always covers the record count at the given size
    #[test]
    fn prop_total_pages_covers_count(count in 0u64..100_000, page_size in 1u32..500) {
        let mut core: ListCore<u32> = ListCore::new(page_size);
        loaded(&mut core, vec![], count);
        let pages = u64::from(core.total_pages());
        prop_assert!(pages * u64::from(page_size) >= count);
        prop_assert!(pages >= 1);
        if count > 0 {
            prop_assert!((pages - 1) * u64::from(page_size) < count);
        }
    }
}
