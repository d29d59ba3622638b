use crate::shared::icons::icon;
use contracts::shared::pagination::Pagination;
use leptos::prelude::*;

pub const PAGE_SIZE_OPTIONS: [u64; 4] = [10, 25, 50, 100];

/// "Showing 11 to 20 of 42 results"
pub fn results_summary(pagination: &Pagination) -> String {
    let total = pagination.total_items;
    format!(
        "Showing {} to {} of {} result{}",
        pagination.first_item(),
        pagination.last_item(),
        total,
        if total == 1 { "" } else { "s" }
    )
}

/// Панель страниц под таблицей. Страницы нумеруются с 1; без данных о
/// пагинации панель не отображается.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    pagination: Signal<Option<Pagination>>,

    /// Текущий размер страницы (значение `limit` из URL)
    #[prop(into)]
    page_size: Signal<u64>,

    /// Callback when page changes (1-based)
    on_page_change: Callback<u64>,

    /// Callback when page size changes
    on_page_size_change: Callback<u64>,
) -> impl IntoView {
    move || {
        let Some(p) = pagination.get() else {
            return view! { <></> }.into_any();
        };
        let page = p.current_page;
        let last = p.total_pages.max(1);

        view! {
            <div class="pagination-controls">
                <span class="pagination-info">{results_summary(&p)}</span>
                <div class="pagination-nav">
                    <span class="pagination-page">{format!("Page {} of {}", page, last)}</span>
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run(1)
                        disabled=!p.has_previous()
                        title="First page"
                    >
                        {icon("chevrons-left")}
                    </button>
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run(page.saturating_sub(1).max(1))
                        disabled=!p.has_previous()
                        title="Previous page"
                    >
                        {icon("chevron-left")}
                    </button>
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run(page + 1)
                        disabled=!p.has_next()
                        title="Next page"
                    >
                        {icon("chevron-right")}
                    </button>
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run(last)
                        disabled=!p.has_next()
                        title="Last page"
                    >
                        {icon("chevrons-right")}
                    </button>
                </div>
                <label class="pagination-size">
                    "Rows per page"
                    <select
                        class="page-size-select"
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<u64>() {
                                on_page_size_change.run(size);
                            }
                        }
                        prop:value=move || page_size.get().to_string()
                    >
                        {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {size.to_string()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(page: u64, total: u64) -> Pagination {
        Pagination {
            item_count: 10,
            total_items: total,
            items_per_page: 10,
            current_page: page,
            total_pages: total.div_ceil(10),
        }
    }

    #[test]
    fn test_results_summary() {
        assert_eq!(results_summary(&pagination(2, 42)), "Showing 11 to 20 of 42 results");
        assert_eq!(results_summary(&pagination(5, 42)), "Showing 41 to 42 of 42 results");
        assert_eq!(results_summary(&pagination(1, 1)), "Showing 1 to 1 of 1 result");
    }

    #[test]
    fn test_results_summary_empty() {
        assert_eq!(results_summary(&pagination(1, 0)), "Showing 0 to 0 of 0 results");
    }
}
