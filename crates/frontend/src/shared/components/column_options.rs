//! Панель "Columns": видимость колонок, поиск по названию и порядок
//! перетаскиванием.

use leptos::prelude::*;

use crate::shared::components::ui::Checkbox;
use crate::shared::icons::icon;
use crate::shared::table_state::{resolve_column_order, TableState};

/// Колонка, доступная в панели: `(id, заголовок)`
pub type ColumnOption = (&'static str, &'static str);

/// Columns whose header contains `query` (case-insensitive), keeping `order`.
pub fn filter_columns(
    columns: &[ColumnOption],
    order: &[&'static str],
    query: &str,
) -> Vec<ColumnOption> {
    let query = query.trim().to_lowercase();
    order
        .iter()
        .filter_map(|id| columns.iter().find(|(c, _)| c == id).copied())
        .filter(|(_, header)| query.is_empty() || header.to_lowercase().contains(&query))
        .collect()
}

#[component]
pub fn ColumnOptions(
    /// Все колонки таблицы в порядке определения
    columns: Vec<ColumnOption>,
    table: TableState,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (query, set_query) = signal(String::new());
    let (dragged, set_dragged) = signal(None::<&'static str>);
    let columns = StoredValue::new(columns);

    let effective_order = move || {
        let ids: Vec<&'static str> = columns.with_value(|c| c.iter().map(|(id, _)| *id).collect());
        table
            .snapshot
            .with(|s| resolve_column_order(&ids, &s.column_order))
    };

    let visible_rows = move || {
        let order = effective_order();
        let q = query.get();
        columns.with_value(|c| filter_columns(c, &order, &q))
    };

    let drop_on = move |target: &'static str| {
        if let Some(source) = dragged.get_untracked() {
            let current = effective_order().into_iter().map(String::from).collect();
            table.move_column(current, source, target);
        }
        set_dragged.set(None);
    };

    view! {
        <div class="column-options">
            <button
                class="button button--secondary"
                on:click=move |_| set_open.update(|o| *o = !*o)
                title="View options"
            >
                {icon("columns")}
                " Columns"
            </button>
            <Show when=move || open.get()>
                <div class="column-options__panel">
                    <input
                        type="text"
                        class="column-options__search"
                        placeholder="Search columns..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <ul class="column-options__list">
                        <For
                            each=visible_rows
                            key=|(id, _)| *id
                            children=move |(id, header)| {
                                view! {
                                    <li
                                        class=move || {
                                            if dragged.get() == Some(id) {
                                                "column-options__item column-options__item--dragging"
                                            } else {
                                                "column-options__item"
                                            }
                                        }
                                        draggable="true"
                                        on:dragstart=move |_| set_dragged.set(Some(id))
                                        on:dragover=move |ev| ev.prevent_default()
                                        on:drop=move |ev| {
                                            ev.prevent_default();
                                            drop_on(id);
                                        }
                                        on:dragend=move |_| set_dragged.set(None)
                                    >
                                        <span class="column-options__grip">{icon("grip")}</span>
                                        <Checkbox
                                            label=header
                                            checked=Signal::derive(move || table.is_visible(id))
                                            on_change=Callback::new(move |visible: bool| {
                                                table.toggle_visibility(id, visible)
                                            })
                                        />
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <button class="button button--ghost" on:click=move |_| table.reset()>
                        "Reset"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: [ColumnOption; 3] = [
        ("sku", "SKU"),
        ("vendorName", "Vendor"),
        ("vendorId", "Vendor ID"),
    ];

    #[test]
    fn test_filter_follows_order() {
        let rows = filter_columns(&COLUMNS, &["vendorId", "sku", "vendorName"], "");
        let ids: Vec<_> = rows.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["vendorId", "sku", "vendorName"]);
    }

    #[test]
    fn test_filter_by_header() {
        let rows = filter_columns(&COLUMNS, &["sku", "vendorName", "vendorId"], " vendor ");
        let ids: Vec<_> = rows.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["vendorName", "vendorId"]);
        assert!(filter_columns(&COLUMNS, &["sku"], "price").is_empty());
    }
}
