use super::*;
use records::FieldKind;

use crate::state::workspace::CellView;

fn row(id: &str, texts: &[&str]) -> RowView {
    RowView {
        id: id.to_owned(),
        cells: texts
            .iter()
            .map(|text| CellView { key: "name", kind: FieldKind::Text, text: (*text).to_owned(), editable: true, status: None })
            .collect(),
        due: None,
    }
}

#[test]
fn row_key_changes_with_cell_text() {
    let before = row("BID-1", &["Harbor", "$1"]);
    let after = row("BID-1", &["Harbor", "$2"]);
    assert_ne!(row_key(&before), row_key(&after));
    assert_eq!(row_key(&before), row_key(&before.clone()));
}

#[test]
fn row_key_keeps_cell_boundaries() {
    assert_ne!(row_key(&row("A", &["ab", "c"])), row_key(&row("A", &["a", "bc"])));
}

#[test]
fn aria_sort_values() {
    assert_eq!(aria_sort(None), "none");
    assert_eq!(aria_sort(Some(SortDirection::Ascending)), "ascending");
    assert_eq!(aria_sort(Some(SortDirection::Descending)), "descending");
}

#[test]
fn result_count_mentions_total_when_filtered() {
    assert_eq!(result_count(7, 7), "7 records");
    assert_eq!(result_count(2, 7), "2 of 7 records");
}
