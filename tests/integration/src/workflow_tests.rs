//! End-to-end workflow tests
//!
//! Upload two workbooks, diff them, pick rows, compare the picks and render
//! the comparison, the same sequence a user goes through.

use pretty_assertions::assert_eq;
use sheetdiff_core::{Error as CoreError, Side, render_html};
use sheetdiff_io::{DiffSession, Error};
use sheetdiff_test_utils::{FixtureBook, FixtureCell, FixtureDir};

fn inventory_v1() -> FixtureBook {
    FixtureBook::new()
        .sheet(
            "Stock",
            &[
                &["sku", "name", "qty"],
                &["A-1", "bolt", "100"],
                &["A-2", "nut", "250"],
                &["A-3", "washer", "75"],
                &["A-2", "nut", "250"],
            ],
        )
        .sheet("Suppliers", &[&["name"], &["Acme"]])
        .sheet("Archive", &[&["year"], &["2019"]])
}

fn inventory_v2() -> FixtureBook {
    FixtureBook::new()
        .sheet(
            "Stock",
            &[
                &["sku", "name", "qty"],
                &["A-3", "washer", "75"],
                &["A-1", "bolt", "120"],
                &["A-2", "nut", "250"],
                &["A-4", "screw", "10"],
            ],
        )
        .sheet("Suppliers", &[&["name"], &["Acme"]])
        .sheet_cells(
            "Notes",
            vec![vec!["note".into()], vec![FixtureCell::Number(3.0)]],
        )
}

#[test]
fn test_full_workflow() {
    let dir = FixtureDir::new();
    let v1 = dir.write_book("v1.xlsx", &inventory_v1());
    let v2 = dir.write_book("v2.xlsx", &inventory_v2());
    let mut session = DiffSession::new();

    let diff = session.compare_paths(&v1, &v2).unwrap().clone();

    assert_eq!(diff.only_in_first, vec!["Archive".to_string()]);
    assert_eq!(diff.only_in_second, vec!["Notes".to_string()]);
    assert_eq!(diff.sheet_changes.keys().collect::<Vec<_>>(), vec!["Stock"]);

    let stock = diff.sheet("Stock").unwrap();
    assert_eq!(stock.deleted_lines(), vec![2]);
    assert_eq!(stock.added_lines(), vec![3, 5]);

    let table = stock.compare_lines(&[2], &[3]).unwrap();
    assert_eq!(table.changed_cells(), 1);
    assert_eq!(table.rows[0].changed_columns().collect::<Vec<_>>(), vec!["qty"]);

    let html = render_html(&table);
    assert!(html.contains(">120<"));

    // Same files again: served from the session cache
    session.compare_paths(&v1, &v2).unwrap();
    assert_eq!(session.stats().hits, 1);
}

#[test]
fn test_mismatched_selection_does_not_end_session() {
    let mut session = DiffSession::new();
    let v1 = inventory_v1().to_bytes();
    let v2 = inventory_v2().to_bytes();

    let stock = session.compare_bytes(&v1, &v2).unwrap().sheet("Stock").unwrap().clone();

    let err = stock.compare_lines(&[2], &[3, 5]).unwrap_err();
    assert_eq!(err, CoreError::SelectionMismatch { deleted: 1, added: 2 });

    let err = stock.compare_lines(&[4], &[3]).unwrap_err();
    assert_eq!(
        err,
        CoreError::UnknownLine {
            side: Side::Deleted,
            line: 4
        }
    );

    // The cached diff is still there for the next attempt
    assert!(session.cached().is_some());
    assert!(stock.compare_lines(&[2], &[5]).is_ok());
}

#[test]
fn test_reupload_with_corrupt_file() {
    let mut session = DiffSession::new();
    let v1 = inventory_v1().to_bytes();
    let v2 = inventory_v2().to_bytes();
    session.compare_bytes(&v1, &v2).unwrap();

    let err = session.compare_bytes(&v1, &v2[..v2.len() / 2]).unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(session.cached().is_none());
}
