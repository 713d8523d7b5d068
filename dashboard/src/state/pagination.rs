//! Pagination footer state

pub use shared::page_window;

/// Pagination footer state for a list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    /// The footer is only rendered when there is more than one page
    pub visible: bool,
    pub window: Vec<u32>,
    pub first_enabled: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub last_enabled: bool,
}

/// Full footer state including boundary enablement
pub fn page_controls(total_pages: u32, current_page: u32) -> PageControls {
    let current = current_page.clamp(1, total_pages.max(1));
    let at_first = current == 1;
    let at_last = current >= total_pages;

    PageControls {
        visible: total_pages > 1,
        window: page_window(total_pages, current),
        first_enabled: !at_first,
        prev_enabled: !at_first,
        next_enabled: !at_last,
        last_enabled: !at_last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_hidden_for_single_page() {
        assert!(!page_controls(1, 1).visible);
        assert!(page_controls(2, 1).visible);
    }

    #[test]
    fn test_footer_window_matches_page_count() {
        assert_eq!(page_controls(12, 1).window, vec![1, 2, 3, 4, 5]);
        assert_eq!(page_controls(12, 12).window, vec![8, 9, 10, 11, 12]);
        assert_eq!(page_controls(12, 6).window, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_boundary_enablement() {
        let first = page_controls(12, 1);
        assert!(!first.first_enabled && !first.prev_enabled);
        assert!(first.next_enabled && first.last_enabled);

        let last = page_controls(12, 12);
        assert!(last.first_enabled && last.prev_enabled);
        assert!(!last.next_enabled && !last.last_enabled);

        let middle = page_controls(12, 6);
        assert!(middle.first_enabled && middle.prev_enabled);
        assert!(middle.next_enabled && middle.last_enabled);
    }
}
