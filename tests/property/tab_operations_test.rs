//! Property-based tests for the tab container.
//!
//! These tests verify the floor-of-one invariant and active-index validity
//! under arbitrary interleavings of open, close, and switch operations.

use orlanda::managers::tab_manager::{TabManager, TabManagerTrait};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum TabOp {
    Open,
    Close(usize),
    Switch(usize),
}

fn arb_op() -> impl Strategy<Value = TabOp> {
    prop_oneof![
        Just(TabOp::Open),
        (0usize..12).prop_map(TabOp::Close),
        (0usize..12).prop_map(TabOp::Switch),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Once a tab exists, no sequence of operations can empty the container,
    // and the active index always points at a live tab.
    #[test]
    fn container_never_drops_below_one_tab(
        ops in proptest::collection::vec(arb_op(), 0..80),
    ) {
        let mut mgr = TabManager::new();
        mgr.add_tab("https://start.example", "start.example");

        for op in &ops {
            match op {
                TabOp::Open => {
                    mgr.add_tab("https://page.example", "page.example");
                }
                TabOp::Close(i) => {
                    let _ = mgr.close_tab(*i);
                }
                TabOp::Switch(i) => {
                    let _ = mgr.switch_tab(*i);
                }
            }

            prop_assert!(mgr.tab_count() >= 1);
            let active = mgr.active_index();
            prop_assert!(active.is_some());
            prop_assert!(active.unwrap() < mgr.tab_count());
            prop_assert!(mgr.active_tab().is_some());
        }
    }

    // A successful close reduces the count by exactly one; a failed close
    // and the sole-tab no-op leave it unchanged.
    #[test]
    fn close_changes_count_by_at_most_one(
        opens in 1usize..10,
        index in 0usize..12,
    ) {
        let mut mgr = TabManager::new();
        for _ in 0..opens {
            mgr.add_tab("https://page.example", "page.example");
        }

        let before = mgr.tab_count();
        let result = mgr.close_tab(index);

        match result {
            Ok(()) if before > 1 => prop_assert_eq!(mgr.tab_count(), before - 1),
            Ok(()) => prop_assert_eq!(mgr.tab_count(), before),
            Err(_) => prop_assert_eq!(mgr.tab_count(), before),
        }
    }
}
