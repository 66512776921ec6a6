//! # Tabs Module Unit Tests / 标签页模块单元测试
//!
//! This module contains unit tests for the `tabs.rs` module, covering id
//! sanitization, collision handling against taken and reserved ids, and the
//! active-tab bookkeeping.
//!
//! 此模块包含 `tabs.rs` 模块的单元测试，
//! 覆盖 id 清洗、与已占用及保留 id 的冲突处理，以及激活标签的维护。

use karate_consolidator::core::tabs::{sanitize_id, TabBar, RESERVED_IDS};

#[cfg(test)]
mod sanitize_id_tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_id("checkout"), "checkout");
        assert_eq!(sanitize_id("user_login-2"), "user_login-2");
        assert_eq!(sanitize_id("Feature01"), "Feature01");
    }

    #[test]
    fn test_sanitize_collapses_unsafe_runs_to_one_dash() {
        assert_eq!(sanitize_id("Login Feature"), "Login-Feature");
        assert_eq!(sanitize_id("payment.flow"), "payment-flow");
        assert_eq!(sanitize_id("a  b!!c"), "a-b-c");
    }

    #[test]
    fn test_sanitize_trims_edge_dashes() {
        assert_eq!(sanitize_id("--weird--"), "weird");
        assert_eq!(sanitize_id("!!abc"), "abc");
        assert_eq!(sanitize_id("abc!!"), "abc");
    }

    #[test]
    fn test_sanitize_empty_result_falls_back() {
        assert_eq!(sanitize_id(""), "feature");
        assert_eq!(sanitize_id("..."), "feature");
        assert_eq!(sanitize_id("ログイン"), "feature");
    }

    #[test]
    fn test_sanitize_mixed_unicode() {
        assert_eq!(sanitize_id("héllo wörld"), "h-llo-w-rld");
    }
}

#[cfg(test)]
mod tab_bar_tests {
    use super::*;

    #[test]
    fn test_first_tab_is_active() {
        let mut bar = TabBar::new();
        let added = bar.add("checkout");

        assert_eq!(added.index, 0);
        assert_eq!(added.id, "checkout");
        assert!(!added.renamed);
        assert_eq!(bar.active_index(), Some(0));
        assert!(bar.tabs()[0].active);
    }

    #[test]
    fn test_later_tabs_are_inactive() {
        let mut bar = TabBar::new();
        bar.add("checkout");
        let added = bar.add("login");

        assert_eq!(added.index, 1);
        assert!(!bar.tabs()[1].active);
        assert_eq!(bar.active_index(), Some(0));
    }

    #[test]
    fn test_duplicate_labels_get_numeric_suffixes() {
        let mut bar = TabBar::new();
        let first = bar.add("login");
        let second = bar.add("login");
        let third = bar.add("login");

        assert_eq!(first.id, "login");
        assert!(!first.renamed);
        assert_eq!(second.id, "login-2");
        assert!(second.renamed);
        assert_eq!(third.id, "login-3");
        assert!(third.renamed);
    }

    #[test]
    fn test_suffix_skips_ids_already_claimed() {
        let mut bar = TabBar::new();
        bar.add("login-2");
        let plain = bar.add("login");
        let clashed = bar.add("login");

        assert_eq!(plain.id, "login");
        assert!(!plain.renamed);
        // "login-2" is taken by the first tab, so the suffix moves on.
        assert_eq!(clashed.id, "login-3");
        assert!(clashed.renamed);
    }

    #[test]
    fn test_reserved_ids_force_a_rename() {
        for reserved in RESERVED_IDS {
            let mut bar = TabBar::new();
            let added = bar.add(reserved);
            assert_eq!(added.id, format!("{}-2", reserved));
            assert!(added.renamed);
        }
    }

    #[test]
    fn test_labels_keep_their_original_text() {
        let mut bar = TabBar::new();
        bar.add("Login Feature");

        assert_eq!(bar.tabs()[0].label, "Login Feature");
        assert_eq!(bar.tabs()[0].id, "Login-Feature");
    }

    #[test]
    fn test_activate_moves_the_marker() {
        let mut bar = TabBar::new();
        bar.add("checkout");
        bar.add("login");

        bar.activate(1).unwrap();

        assert_eq!(bar.active_index(), Some(1));
        assert!(!bar.tabs()[0].active);
        assert!(bar.tabs()[1].active);
    }

    #[test]
    fn test_activate_out_of_range_is_an_error() {
        let mut bar = TabBar::new();
        bar.add("checkout");

        assert!(bar.activate(1).is_err());
        assert!(bar.activate(5).is_err());
        // The marker stays where it was.
        assert_eq!(bar.active_index(), Some(0));
    }

    #[test]
    fn test_empty_bar() {
        let bar = TabBar::new();

        assert!(bar.is_empty());
        assert_eq!(bar.len(), 0);
        assert_eq!(bar.active_index(), None);
    }

    #[test]
    fn test_len_counts_tabs() {
        let mut bar = TabBar::new();
        bar.add("a");
        bar.add("b");
        bar.add("c");

        assert_eq!(bar.len(), 3);
        assert!(!bar.is_empty());
    }
}
