//! Sortable, filterable record table for one workspace tab.

#[cfg(test)]
#[path = "record_table_test.rs"]
mod record_table_test;

use leptos::prelude::*;
use records::SortDirection;

use crate::components::editable_cell::EditableCell;
use crate::state::workspace::{RowView, WorkspaceState, WorkspaceTab};

/// Identity of a rendered row. Changes whenever a visible cell changes so
/// the keyed list rebuilds just that row.
pub fn row_key(row: &RowView) -> String {
    let mut key = row.id.clone();
    for cell in &row.cells {
        key.push('\u{1f}');
        key.push_str(&cell.text);
    }
    key
}

/// `aria-sort` value for a column header.
pub fn aria_sort(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    }
}

pub fn result_count(shown: usize, total: usize) -> String {
    if shown == total { format!("{total} records") } else { format!("{shown} of {total} records") }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum TableStatus {
    Rows,
    Empty,
    Failed(String),
}

#[component]
pub fn RecordTable(tab: WorkspaceTab) -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let rows = Memo::new(move |_| workspace.with(|ws| ws.rows(tab)));
    let status = Memo::new(move |_| {
        rows.with(|rows| match rows {
            Err(err) => TableStatus::Failed(err.to_string()),
            Ok(list) if list.is_empty() => TableStatus::Empty,
            Ok(_) => TableStatus::Rows,
        })
    });
    let total = move || workspace.with(|ws| ws.total(tab));
    let shown = move || rows.with(|rows| rows.as_ref().map_or(0, Vec::len));
    let has_due = tab.due_field().is_some();

    let body = move || match status.get() {
        TableStatus::Failed(message) => view! { <p class="record-table__error" role="alert">{message}</p> }.into_any(),
        TableStatus::Empty => view! {
            <div class="record-table__empty">
                <p>"No records match the current filters."</p>
                <button class="btn" on:click=move |_| workspace.update(|ws| ws.clear_filters(tab))>
                    "Clear filters"
                </button>
            </div>
        }
        .into_any(),
        TableStatus::Rows => view! {
            <table class="record-table">
                <thead>
                    <tr>
                        <HeaderCells tab=tab/>
                        <Show when=move || has_due>
                            <th class="record-table__head record-table__head--due">"Due"</th>
                        </Show>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get().unwrap_or_default()
                        key=row_key
                        children=move |row: RowView| {
                            let id = row.id.clone();
                            view! {
                                <tr class="record-table__row">
                                    {row
                                        .cells
                                        .into_iter()
                                        .map(|cell| view! { <EditableCell tab=tab record_id=id.clone() cell=cell/> })
                                        .collect_view()}
                                    {has_due.then(|| match row.due {
                                        Some(due) => view! { <td class=due.class()>{due.label.clone()}</td> }.into_any(),
                                        None => view! { <td class="due due--none"></td> }.into_any(),
                                    })}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        }
        .into_any(),
    };

    view! {
        <section class="record-table__wrap">
            <p class="record-table__count">{move || result_count(shown(), total())}</p>
            {body}
        </section>
    }
}

/// Column headers; clicking one toggles the sort on that column.
#[component]
fn HeaderCells(tab: WorkspaceTab) -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    tab.columns()
        .iter()
        .map(|column| {
            let key = column.key;
            let direction = move || workspace.with(|ws| ws.tab(tab).query.direction_for(key));
            view! {
                <th class="record-table__head" aria-sort=move || aria_sort(direction())>
                    <button class="record-table__sort" on:click=move |_| workspace.update(|ws| ws.toggle_sort(tab, key))>
                        {column.label}
                        <span class="record-table__arrow">{move || direction().map(SortDirection::arrow)}</span>
                    </button>
                </th>
            }
        })
        .collect_view()
}
