//! Панель фильтров инвентаря

use contracts::domain::a001_inventory::InventoryFilters;
use contracts::enums::{CountryCode, FulfillmentModel};
use leptos::prelude::*;

use crate::domain::a001_inventory::filters::{
    COUNTRY_CODE, FULFILLMENT_MODEL, PAGE, SKU, UPDATED_FROM, UPDATED_TO, VENDOR,
};
use crate::shared::components::date_input::DateRangeInput;
use crate::shared::components::ui::{Badge, BadgeVariant, Checkbox};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::url_params::{ParamValue, UrlParams};

/// Adds `code` to the selection or removes it, keeping selection order.
pub fn toggle_selected(selected: &[String], code: &str) -> Vec<String> {
    if selected.iter().any(|s| s == code) {
        selected.iter().filter(|s| *s != code).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(code.to_string());
        next
    }
}

/// Фильтр с несколькими значениями (модель фулфилмента)
#[component]
fn FulfillmentFilter(
    #[prop(into)] selected: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="faceted-filter">
            <button
                class="button button--outline"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {icon("filter")}
                " Fulfillment"
                {move || {
                    let count = selected.with(|s| s.len());
                    (count > 0).then(|| view! {
                        <Badge variant=BadgeVariant::Primary>{count}</Badge>
                    })
                }}
            </button>
            <Show when=move || open.get()>
                <div class="faceted-filter__panel">
                    {FulfillmentModel::all().into_iter().map(|model| {
                        let code = model.code();
                        view! {
                            <Checkbox
                                label=model.label()
                                checked=Signal::derive(move || selected.with(|s| s.iter().any(|c| c == code)))
                                on_change=Callback::new(move |_: bool| {
                                    on_change.run(toggle_selected(&selected.get_untracked(), code));
                                })
                            />
                        }
                    }).collect_view()}
                    {move || (!selected.with(|s| s.is_empty())).then(|| view! {
                        <button
                            class="button button--ghost"
                            on:click=move |_| on_change.run(Vec::new())
                        >
                            "Clear filters"
                        </button>
                    })}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn InventoryFiltersBar(
    #[prop(into)] filters: Signal<InventoryFilters>,
    url: UrlParams,
) -> impl IntoView {
    let sku = Signal::derive(move || filters.with(|f| f.sku.clone()));
    let vendor = Signal::derive(move || filters.with(|f| f.vendor.clone()));
    let country = move || filters.with(|f| f.country_code.clone());
    let fulfillment = Signal::derive(move || filters.with(|f| f.fulfillment_model.clone()));
    let updated_from = Signal::derive(move || filters.with(|f| f.updated_from.clone()));
    let updated_to = Signal::derive(move || filters.with(|f| f.updated_to.clone()));
    let active_count = move || filters.with(|f| f.active_filter_count());
    let has_active = move || filters.with(|f| f.has_active_filters());

    view! {
        <div class="filter-bar">
            <SearchInput
                value=sku
                on_change=Callback::new(move |v: String| url.set_param(SKU, v))
                placeholder="Search SKU..."
            />

            <select
                class="filter-bar__select"
                prop:value=country
                on:change=move |ev| url.set_param(COUNTRY_CODE, event_target_value(&ev))
            >
                <option value="">"All Countries"</option>
                {CountryCode::all().into_iter().map(|c| view! {
                    <option value=c.code()>{c.label()}</option>
                }).collect_view()}
            </select>

            <FulfillmentFilter
                selected=fulfillment
                on_change=Callback::new(move |codes: Vec<String>| url.set_param(FULFILLMENT_MODEL, codes))
            />

            <SearchInput
                value=vendor
                on_change=Callback::new(move |v: String| url.set_param(VENDOR, v))
                placeholder="Search Vendor..."
                width="200px"
            />

            <DateRangeInput
                label="Updated At"
                from=updated_from
                to=updated_to
                on_change=Callback::new(move |(from, to): (String, String)| {
                    url.set_params(vec![
                        (UPDATED_FROM, ParamValue::from(from)),
                        (UPDATED_TO, ParamValue::from(to)),
                        (PAGE, ParamValue::from(1u32)),
                    ]);
                })
            />

            {move || {
                let count = active_count();
                (count > 0).then(|| view! {
                    <span class="filter-bar__count" title="Active filters">
                        {icon("filter")}
                        <Badge variant=BadgeVariant::Primary>{count}</Badge>
                    </span>
                })
            }}

            <Show when=has_active>
                <button class="button button--ghost" on:click=move |_| url.reset_params()>
                    {icon("x")}
                    " Clear"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_selected() {
        assert_eq!(toggle_selected(&[], "FBM"), codes(&["FBM"]));
        assert_eq!(toggle_selected(&codes(&["FBM"]), "DS"), codes(&["FBM", "DS"]));
        assert_eq!(toggle_selected(&codes(&["FBM", "DS"]), "FBM"), codes(&["DS"]));
    }
}
