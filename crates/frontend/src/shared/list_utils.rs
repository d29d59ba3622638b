//! Поля ввода для панелей фильтров списков
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Задержка перед применением текста поиска
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Компонент поиска с debounce и кнопкой очистки
///
/// `value` is the applied filter (e.g. a URL parameter); when it changes from
/// outside (reset, back button) the input follows it.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional, into)]
    width: Option<String>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let width = width.unwrap_or_else(|| "250px".to_string());

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    // Номер последнего ввода и номер последнего применённого значения
    let typed = StoredValue::new(0u64);
    let applied = StoredValue::new(0u64);

    Effect::new(move |_| {
        let current = value.get();
        if typed.get_value() == applied.get_value() {
            set_input_value.set(current);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let generation = typed.get_value() + 1;
        typed.set_value(generation);
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            // Superseded by later input or the component is gone.
            if typed.try_get_value() != Some(generation) {
                return;
            }
            applied.set_value(generation);
            on_change.run(new_value);
        });
        let _ = timeout.forget();
    };

    let clear_filter = move |_| {
        let generation = typed.get_value() + 1;
        typed.set_value(generation);
        applied.set_value(generation);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input" style=format!("position: relative; display: inline-flex; align-items: center; width: {};", width)>
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                placeholder=placeholder
                class=move || if is_filter_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
