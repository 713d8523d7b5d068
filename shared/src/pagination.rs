//! Pagination window derivation shared by the dashboard and the
//! browser bindings

/// Page-number window of at most 5 buttons
///
/// If there are 5 pages or fewer, all are shown. Near the start the
/// window is pinned to 1..5, near the end to the last 5, and otherwise
/// it is centered on the current page.
pub fn page_window(total_pages: u32, current_page: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current_page.clamp(1, total_pages);

    if total_pages <= 5 {
        (1..=total_pages).collect()
    } else if current <= 3 {
        (1..=5).collect()
    } else if current >= total_pages - 2 {
        (total_pages - 4..=total_pages).collect()
    } else {
        (current - 2..=current + 2).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_small_page_counts() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(5, 3), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_pinned_at_start() {
        assert_eq!(page_window(12, 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(12, 3), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_pinned_at_end() {
        assert_eq!(page_window(12, 12), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(12, 10), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_window_centered_in_middle() {
        assert_eq!(page_window(12, 6), vec![4, 5, 6, 7, 8]);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The window never exceeds 5 buttons and always contains the
        /// current page
        #[test]
        fn prop_window_size_and_membership(
            total in 1u32..=500,
            current in 1u32..=500,
        ) {
            let current = current.min(total);
            let window = page_window(total, current);
            prop_assert!(window.len() <= 5);
            prop_assert!(window.contains(&current));
        }

        /// Window pages are consecutive and within bounds
        #[test]
        fn prop_window_consecutive(total in 1u32..=500, current in 1u32..=500) {
            let current = current.min(total);
            let window = page_window(total, current);
            for pair in window.windows(2) {
                prop_assert_eq!(pair[1], pair[0] + 1);
            }
            prop_assert!(*window.first().unwrap() >= 1);
            prop_assert!(*window.last().unwrap() <= total);
        }
    }
}
