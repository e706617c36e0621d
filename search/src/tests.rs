use super::*;
use common::{explorer_with, names, row, send};
use zapper_core::tree::TopicKind;

mod common {
    use super::*;
    use zapper_core::types::TopicEvent;

    pub(super) fn send(explorer: &TopicExplorer, path: &str, payload: &[u8]) {
        explorer.update(TopicEvent::parse(path, payload).unwrap());
    }

    pub(super) fn explorer_with(events: &[(&str, &[u8])]) -> TopicExplorer {
        let explorer = TopicExplorer::default();
        for (path, payload) in events {
            send(&explorer, path, payload);
        }
        explorer
    }

    pub(super) fn names(rows: &[TopicRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    pub(super) fn row<'a>(rows: &'a [TopicRow], name: &str) -> &'a TopicRow {
        rows.iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("no row named {name:?}"))
    }
}

mod unfiltered {
    use super::*;

    #[test]
    fn test_empty_tree_yields_no_rows() {
        let explorer = TopicExplorer::default();
        assert!(explorer.query("").is_empty());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let explorer = explorer_with(&[("a/b", b"true"), ("a/c", br#"{"x":1}"#)]);

        let rows = explorer.query("");
        assert_eq!(names(&rows), vec!["a"]);

        let a = row(&rows, "a");
        assert_eq!(a.kind, TopicKind::Internal);
        assert_eq!(a.value, None);
        assert_eq!(names(&a.children), vec!["b", "c"]);

        let b = row(&a.children, "b");
        assert_eq!(b.kind, TopicKind::Leaf);
        assert_eq!(b.value.as_deref(), Some("true"));
        assert_eq!(b.full_path.as_deref(), Some("a/b"));

        let c = row(&a.children, "c");
        assert_eq!(c.value.as_deref(), Some(r#"{"x":1}"#));
    }

    #[test]
    fn test_children_ascend_lexicographically() {
        let explorer = explorer_with(&[("z/1", b"1"), ("a/1", b"1"), ("m/1", b"1")]);
        assert_eq!(names(&explorer.query("")), vec!["a", "m", "z"]);
    }

    #[test]
    fn test_rows_carry_no_scores() {
        let explorer = explorer_with(&[("a/b", b"1")]);
        let rows = explorer.query("");
        assert_eq!(rows[0].score, None);
        assert_eq!(rows[0].children[0].score, None);
    }

    #[test]
    fn test_valued_prefix_renders_as_both_with_children() {
        let explorer = explorer_with(&[("a", b"1"), ("a/b", b"2")]);

        let rows = explorer.query("");
        let a = row(&rows, "a");
        assert_eq!(a.kind, TopicKind::Both);
        assert_eq!(a.value.as_deref(), Some("1"));
        assert_eq!(names(&a.children), vec!["b"]);
    }
}

mod filtered {
    use super::*;

    #[test]
    fn test_end_to_end_scenario() {
        let explorer = explorer_with(&[("a/b", b"true"), ("a/c", br#"{"x":1}"#)]);

        let rows = explorer.query("true");
        assert_eq!(names(&rows), vec!["a"]);
        assert_eq!(names(&rows[0].children), vec!["b"]);
        assert!(rows[0].children[0].children.is_empty());
    }

    #[test]
    fn test_no_match_yields_empty_tree() {
        let explorer = explorer_with(&[("a/b", b"1")]);
        assert!(explorer.query("zzzzzz").is_empty());
    }

    #[test]
    fn test_ancestors_pulled_in_with_propagated_score() {
        let explorer = explorer_with(&[("a/b/c", b"hello"), ("a/d", b"1")]);

        let rows = explorer.query("hello");
        assert_eq!(names(&rows), vec!["a"]);

        let a = &rows[0];
        assert_eq!(names(&a.children), vec!["b"]);
        let b = &a.children[0];
        let c = &b.children[0];

        assert!(c.score.is_some());
        assert_eq!(a.score, c.score);
        assert_eq!(b.score, c.score);
    }

    #[test]
    fn test_every_row_has_a_matching_reason() {
        // Ancestor closure: rows are either matches or have a matching
        // descendant; the unrelated branch never appears.
        let explorer = explorer_with(&[("a/b/c", b"needle"), ("a/x", b"1"), ("z/y", b"2")]);

        let rows = explorer.query("needle");
        assert_eq!(names(&rows), vec!["a"]);
        assert_eq!(names(&rows[0].children), vec!["b"]);
    }

    #[test]
    fn test_value_text_is_searchable() {
        let explorer = explorer_with(&[("sensors/temp", b"kitchen"), ("sensors/hum", b"1")]);

        let rows = explorer.query("kitchen");
        assert_eq!(names(&rows), vec!["sensors"]);
        assert_eq!(names(&rows[0].children), vec!["temp"]);
    }

    #[test]
    fn test_equal_scores_break_ties_by_descending_name() {
        let explorer = explorer_with(&[("a/x", b"true"), ("a/y", b"true")]);

        let rows = explorer.query("true");
        assert_eq!(names(&rows[0].children), vec!["y", "x"]);
    }

    #[test]
    fn test_better_matches_rank_first() {
        // A contiguous match outscores one spread across separators.
        let explorer = explorer_with(&[("a1b2c3", b"1"), ("abc", b"1")]);

        let rows = explorer.query("abc");
        assert_eq!(names(&rows), vec!["abc", "a1b2c3"]);
        assert!(rows[0].score.unwrap() > rows[1].score.unwrap());
    }

    #[test]
    fn test_matched_ancestor_keeps_kind_and_value() {
        let explorer = explorer_with(&[("a", b"unrelated"), ("a/b", b"needle")]);

        let rows = explorer.query("needle");
        let a = &rows[0];
        assert_eq!(a.kind, TopicKind::Both);
        assert_eq!(a.value.as_deref(), Some("\"unrelated\""));
        assert_eq!(names(&a.children), vec!["b"]);
    }

    #[test]
    fn test_smart_case_matches_case_insensitively() {
        let explorer = explorer_with(&[("Sensors/Temp", b"1")]);
        assert_eq!(names(&explorer.query("sensors")), vec!["Sensors"]);
    }
}

mod concurrency {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_updates_and_queries() {
        let explorer = Arc::new(TopicExplorer::default());

        let writer = {
            let explorer = Arc::clone(&explorer);
            thread::spawn(move || {
                for i in 0..200 {
                    let path = format!("load/{}/value", i % 10);
                    send(&explorer, &path, format!("{i}").as_bytes());
                }
            })
        };

        let readers: Vec<_> = (0..2)
            .map(|_| {
                let explorer = Arc::clone(&explorer);
                thread::spawn(move || {
                    for _ in 0..100 {
                        // Each query sees some consistent point-in-time tree.
                        let _ = explorer.query("");
                        let _ = explorer.query("value");
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }

        let rows = explorer.query("");
        assert_eq!(names(&rows), vec!["load"]);
        assert_eq!(rows[0].children.len(), 10);
    }
}
