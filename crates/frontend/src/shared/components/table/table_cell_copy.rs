//! Ячейка таблицы с кнопкой копирования значения
//!
//! ```ignore
//! <TableCellCopy text=item.sku.clone() copy=true>{item.sku.clone()}</TableCellCopy>
//! ```

use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

/// Сколько держится отметка "скопировано"
const COPIED_FEEDBACK_MS: u32 = 1_500;

#[component]
pub fn TableCellCopy(
    /// Значение, попадающее в буфер обмена
    #[prop(into)]
    text: String,
    /// Показывать ли кнопку копирования
    #[prop(optional)]
    copy: bool,
    /// Выравнивание по правому краю (числа, цены)
    #[prop(optional)]
    align_right: bool,
    children: Children,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let text = StoredValue::new(text);

    let on_copy = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        copy_to_clipboard(&text.get_value(), move || {
            set_copied.set(true);
            let reset = Timeout::new(COPIED_FEEDBACK_MS, move || {
                let _ = set_copied.try_set(false);
            });
            let _ = reset.forget();
        });
    };

    let show_button = copy && text.with_value(|t| !t.is_empty() && t != "-");

    view! {
        <TableCell class=if align_right { "table-cell-copy text-right" } else { "table-cell-copy" }>
            <TableCellLayout truncate=true>
                {children()}
                {show_button.then(|| view! {
                    <button class="table-cell-copy__button" title="Copy" on:click=on_copy>
                        {move || if copied.get() { icon("check") } else { icon("copy") }}
                    </button>
                })}
            </TableCellLayout>
        </TableCell>
    }
}
