//! Inline-editable table cell.
//!
//! DESIGN
//! ======
//! The open cell and its draft live in the tab's `EditSession` inside
//! `WorkspaceState`, so only one cell is ever open and re-renders of the
//! table keep the draft. Blur and Enter commit; Escape cancels. A rejected
//! draft keeps the input open with the error under it.

#[cfg(test)]
#[path = "editable_cell_test.rs"]
mod editable_cell_test;

use leptos::prelude::*;
use records::{DateFormat, FieldKind};

use crate::components::status_badge::StatusBadge;
use crate::state::workspace::{CellView, WorkspaceState, WorkspaceTab};

/// CSS classes for a table cell.
pub fn cell_class(cell: &CellView, editing: bool) -> String {
    let kind = match cell.kind {
        FieldKind::Text => "text",
        FieldKind::Number => "number",
        FieldKind::Currency => "currency",
        FieldKind::Percent => "percent",
        FieldKind::Date => "date",
        FieldKind::Status => "status",
    };
    let mut class = format!("cell cell--{kind}");
    if cell.editable {
        class.push_str(" cell--editable");
    }
    if editing {
        class.push_str(" cell--editing");
    }
    class
}

/// Soft keyboard hint for the editor input.
pub fn input_mode(kind: FieldKind) -> &'static str {
    if kind.is_numeric() { "decimal" } else { "text" }
}

/// Placeholder shown in an empty editor.
pub fn placeholder(kind: FieldKind, dates: DateFormat) -> &'static str {
    match kind {
        FieldKind::Date => dates.pattern(),
        FieldKind::Currency => "$0",
        FieldKind::Percent => "0%",
        FieldKind::Number => "0",
        FieldKind::Text | FieldKind::Status => "",
    }
}

#[component]
pub fn EditableCell(tab: WorkspaceTab, #[prop(into)] record_id: String, cell: CellView) -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let record_id = StoredValue::new(record_id);
    let field = cell.key;
    let kind = cell.kind;
    let cell = StoredValue::new(cell);
    let dates = workspace.with_untracked(|ws| ws.dates);

    let editing = move || workspace.with(|ws| record_id.with_value(|id| ws.tab(tab).edit.is_editing(id, field)));
    let draft = move || workspace.with(|ws| ws.tab(tab).edit.draft().unwrap_or_default().to_owned());
    let error = move || workspace.with(|ws| ws.tab(tab).edit.last_error().map(ToString::to_string));

    let begin = move |_| {
        if editing() || !cell.with_value(|cell| cell.editable) {
            return;
        }
        workspace.update(|ws| {
            let id = record_id.get_value();
            if let Err(err) = ws.begin_edit(tab, &id, field) {
                leptos::logging::warn!("cannot edit {id}.{field}: {err}");
            }
        });
    };
    let commit = move || {
        if !editing() {
            return;
        }
        workspace.update(|ws| {
            if let Err(err) = ws.commit_edit(tab) {
                leptos::logging::log!("edit rejected: {err}");
            }
        });
    };
    let cancel = move || workspace.update(|ws| ws.cancel_edit(tab));
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            commit();
        }
        "Escape" => {
            ev.prevent_default();
            cancel();
        }
        _ => {}
    };

    let input_ref = NodeRef::<leptos::html::Input>::new();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            if let Err(err) = input.focus() {
                leptos::logging::warn!("cell editor focus failed: {err:?}");
            }
        }
    });

    let editor = move || {
        if kind == FieldKind::Status {
            view! {
                <select
                    class="cell__editor"
                    prop:value=draft
                    on:change=move |ev| {
                        workspace.update(|ws| ws.set_draft(tab, event_target_value(&ev)));
                        commit();
                    }
                    on:blur=move |_| commit()
                    on:keydown=on_keydown
                >
                    {tab
                        .status_options()
                        .into_iter()
                        .map(|(key, label)| view! { <option value=key>{label}</option> })
                        .collect_view()}
                </select>
            }
            .into_any()
        } else {
            view! {
                <input
                    class="cell__editor"
                    node_ref=input_ref
                    inputmode=input_mode(kind)
                    placeholder=placeholder(kind, dates)
                    prop:value=draft
                    on:input=move |ev| workspace.update(|ws| ws.set_draft(tab, event_target_value(&ev)))
                    on:blur=move |_| commit()
                    on:keydown=on_keydown
                />
            }
            .into_any()
        }
    };

    let display = move || {
        cell.with_value(|cell| match &cell.status {
            Some(status) => view! { <StatusBadge status=status.clone() label=cell.text.clone()/> }.into_any(),
            None => view! { <span class="cell__text">{cell.text.clone()}</span> }.into_any(),
        })
    };

    view! {
        <td
            class=move || cell.with_value(|cell| cell_class(cell, editing()))
            title=move || cell.with_value(|cell| if cell.editable { "Click to edit" } else { "" })
            on:click=begin
        >
            {move || {
                if editing() {
                    view! {
                        {editor()}
                        {move || error().map(|message| view! { <span class="cell__error" role="alert">{message}</span> })}
                    }
                    .into_any()
                } else {
                    display()
                }
            }}
        </td>
    }
}
