pub mod state;

use self::state::InventoryListState;
use crate::domain::a001_inventory::api::fetch_inventory;
use crate::domain::a001_inventory::columns::{
    cell_text, column_ids, column_options, default_column_visibility, find_column, raw_value,
    CellKind, InventoryColumn, TABLE_KEY,
};
use crate::domain::a001_inventory::filters::{
    filters_from_record, inventory_param_schema, LIMIT, PAGE,
};
use crate::domain::a001_inventory::ui::filters::InventoryFiltersBar;
use crate::shared::components::column_options::ColumnOptions;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::TableCellCopy;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::config::ApiConfig;
use crate::shared::date_utils::format_relative;
use crate::shared::icons::icon;
use crate::shared::request_slot::{CancelToken, RequestSlot};
use crate::shared::table_state::{resolve_column_order, use_table_state, TableStateOptions};
use crate::shared::table_utils::init_column_resize;
use crate::shared::url_params::use_url_params;
use contracts::domain::a001_inventory::InventoryItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLE_ID: &str = "a001-inventory-table";

fn render_cell(item: &InventoryItem, column: &InventoryColumn) -> AnyView {
    let text = cell_text(item, column);
    let raw = raw_value(item, column.id).unwrap_or_default();
    let empty = text == "-";

    match column.kind {
        CellKind::Count | CellKind::Price if !empty => {
            let variant = if column.kind == CellKind::Count {
                BadgeVariant::Warning
            } else {
                BadgeVariant::Success
            };
            view! {
                <TableCellCopy text=raw copy=column.copyable align_right=true>
                    <Badge variant=variant>{text}</Badge>
                </TableCellCopy>
            }
            .into_any()
        }
        CellKind::DateTime if !empty => {
            let relative = format_relative(&raw, chrono::Utc::now()).unwrap_or_default();
            view! {
                <TableCellCopy text=raw copy=column.copyable>
                    <div class="cell-datetime">
                        <span>{relative}</span>
                        <span class="text-muted">{text}</span>
                    </div>
                </TableCellCopy>
            }
            .into_any()
        }
        _ => view! {
            <TableCellCopy text=raw copy=column.copyable>
                {text}
            </TableCellCopy>
        }
        .into_any(),
    }
}

/// Список инвентаря: фильтры и пагинация в URL, вид таблицы в localStorage
#[component]
pub fn InventoryList() -> impl IntoView {
    let config = StoredValue::new(use_context::<ApiConfig>().unwrap_or_default());

    let url = use_url_params(inventory_param_schema());
    let filters = Memo::new(move |_| url.params.with(filters_from_record));

    let table = use_table_state(TableStateOptions::new(
        TABLE_KEY,
        default_column_visibility(),
    ));
    let visible_columns = Memo::new(move |_| {
        let ids = column_ids();
        table.snapshot.with(|s| {
            resolve_column_order(&ids, &s.column_order)
                .into_iter()
                .filter(|id| s.is_visible(id))
                .filter_map(find_column)
                .collect::<Vec<&'static InventoryColumn>>()
        })
    });

    let state = RwSignal::new(InventoryListState::default());
    let requests = StoredValue::new_local(RequestSlot::new());

    // Новый запрос при каждом изменении фильтров; предыдущий отменяется.
    Effect::new(move |_| {
        let filters = filters.get();
        let Some(token) = requests.try_update_value(|r| r.begin(CancelToken::abortable())) else {
            return;
        };
        state.update(|s| s.begin_loading());
        let config = config.get_value();

        spawn_local(async move {
            let abort = token.signal();
            let result = fetch_inventory(&config, &filters, abort.as_ref()).await;
            if token.is_cancelled() {
                log::debug!("Dropping result of a cancelled inventory request");
                return;
            }
            let _ = requests.try_update_value(|r| r.finish(&token));
            state.try_update(|s| s.apply(result));
        });
    });

    on_cleanup(move || {
        let _ = requests.try_update_value(|r| r.cancel());
    });

    // Resize handles for freshly rendered headers.
    Effect::new(move |_| {
        visible_columns.track();
        init_column_resize(
            TABLE_ID,
            table.min_column_size(),
            Callback::new(move |(column, width): (String, f64)| {
                table.resize_column(&column, width);
            }),
        );
    });

    let column_width = move |id: &str| {
        table
            .snapshot
            .with(|s| s.column_sizing.get(id).copied())
            .map(|w| format!("width: {}px;", w))
            .unwrap_or_default()
    };

    view! {
        <div id="a001_inventory--list" class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("inventory")}
                    <h1 class="page__title">"Inventory"</h1>
                    {move || state.with(|s| s.pagination.map(|p| p.total_items)).map(|total| view! {
                        <Badge variant=BadgeVariant::Primary>{total.to_string()}</Badge>
                    })}
                    <Show when=move || state.with(|s| s.is_refreshing())>
                        <Spinner size=SpinnerSize::Small />
                    </Show>
                </div>
            </div>

            <div class="page__content">
                <div class="toolbar">
                    <InventoryFiltersBar filters=filters url=url />
                    <ColumnOptions columns=column_options() table=table />
                </div>

                {move || state.with(|s| s.error.clone()).map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class=move || {
                    if state.with(|s| s.is_refreshing()) {
                        "table-wrapper table-wrapper--refreshing"
                    } else {
                        "table-wrapper"
                    }
                }>
                    <Table attr:id=TABLE_ID attr:style="width: 100%; table-layout: fixed;">
                        <colgroup>
                            {move || visible_columns.get().into_iter().map(|c| view! {
                                <col style=column_width(c.id) />
                            }).collect_view()}
                        </colgroup>
                        <TableHeader>
                            <TableRow>
                                {move || visible_columns.get().into_iter().map(|c| view! {
                                    <TableHeaderCell resizable=false class="resizable">
                                        <span data-column-id=c.id>{c.header}</span>
                                    </TableHeaderCell>
                                }).collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let columns = visible_columns.get();
                                let colspan = columns.len().max(1).to_string();
                                state.with(|s| {
                                    if s.is_initial_loading {
                                        view! {
                                            <TableRow>
                                                <TableCell class="table-placeholder" attr:colspan=colspan>
                                                    <Spinner />
                                                </TableCell>
                                            </TableRow>
                                        }.into_any()
                                    } else if s.items.is_empty() {
                                        view! {
                                            <TableRow>
                                                <TableCell class="table-placeholder" attr:colspan=colspan>
                                                    "No results."
                                                </TableCell>
                                            </TableRow>
                                        }.into_any()
                                    } else {
                                        s.items.iter().map(|item| {
                                            let cells = columns
                                                .iter()
                                                .map(|c| render_cell(item, c))
                                                .collect_view();
                                            view! { <TableRow>{cells}</TableRow> }
                                        }).collect_view().into_any()
                                    }
                                })
                            }}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    pagination=Signal::derive(move || state.with(|s| s.pagination))
                    page_size=Signal::derive(move || filters.with(|f| f.limit))
                    on_page_change=Callback::new(move |page: u64| url.set_param(PAGE, page as f64))
                    on_page_size_change=Callback::new(move |limit: u64| url.set_param(LIMIT, limit as f64))
                />
            </div>
        </div>
    }
}
