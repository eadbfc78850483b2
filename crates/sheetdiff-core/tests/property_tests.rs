use std::collections::HashSet;

use proptest::prelude::*;
use sheetdiff_core::{RowKey, Table, Workbook, compare, diff_sheet};

/// Small alphabet so that generated tables share rows often
fn table_strategy() -> impl Strategy<Value = Table> {
    prop::collection::vec(prop::collection::vec("[abc]", 2), 0..12)
        .prop_map(|rows| Table::from_text(["k", "v"], rows))
}

fn keys(table: &Table) -> HashSet<RowKey> {
    table.keyed_rows().map(|(_, key)| key).collect()
}

proptest! {
    #[test]
    fn roles_are_symmetric(a in table_strategy(), b in table_strategy()) {
        let forward = diff_sheet(&a, &b);
        let backward = diff_sheet(&b, &a);

        prop_assert_eq!(&forward.added, &backward.deleted);
        prop_assert_eq!(&forward.deleted, &backward.added);
    }

    #[test]
    fn diff_is_complete_and_disjoint(a in table_strategy(), b in table_strategy()) {
        let diff = diff_sheet(&a, &b);
        let keys_a = keys(&a);
        let keys_b = keys(&b);

        let deleted: Vec<&RowKey> = diff.deleted.iter().map(|r| &r.cells).collect();
        let added: Vec<&RowKey> = diff.added.iter().map(|r| &r.cells).collect();

        prop_assert_eq!(deleted.len(), keys_a.difference(&keys_b).count());
        prop_assert_eq!(added.len(), keys_b.difference(&keys_a).count());
        for key in keys_a.difference(&keys_b) {
            prop_assert_eq!(deleted.iter().filter(|k| **k == key).count(), 1);
        }
        for key in keys_b.difference(&keys_a) {
            prop_assert_eq!(added.iter().filter(|k| **k == key).count(), 1);
        }
        for key in &added {
            prop_assert!(!deleted.contains(key));
        }
    }

    #[test]
    fn lines_are_sorted_first_occurrences(a in table_strategy(), b in table_strategy()) {
        let diff = diff_sheet(&a, &b);

        prop_assert!(diff.deleted.windows(2).all(|w| w[0].line < w[1].line));
        prop_assert!(diff.added.windows(2).all(|w| w[0].line < w[1].line));

        for row in &diff.deleted {
            let first = a.keyed_rows().find(|(_, key)| *key == row.cells).map(|(line, _)| line);
            prop_assert_eq!(first, Some(row.line));
        }
    }

    #[test]
    fn compare_is_idempotent(a in table_strategy(), b in table_strategy()) {
        let first = Workbook::new().with_sheet("S", a);
        let second = Workbook::new().with_sheet("S", b);

        prop_assert_eq!(compare(&first, &second), compare(&first, &second));
    }

    #[test]
    fn same_row_sets_have_no_changes(a in table_strategy()) {
        let mut shuffled = a.clone();
        shuffled.rows.reverse();
        let first = Workbook::new().with_sheet("S", a);
        let second = Workbook::new().with_sheet("S", shuffled);

        prop_assert!(compare(&first, &second).sheet_changes.is_empty());
    }
}
