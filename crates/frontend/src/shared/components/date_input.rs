use leptos::prelude::*;

/// DateInput component with native date picker (`yyyy-mm-dd` values)
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format, empty when unset
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] max: Option<Signal<String>>,
    #[prop(optional, into)] min: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            prop:value=value
            min=move || min.map(|m| m.get()).unwrap_or_default()
            max=move || max.map(|m| m.get()).unwrap_or_default()
            on:change=move |ev| {
                on_change.run(event_target_value(&ev));
            }
        />
    }
}

/// Swaps the bounds when `from` is after `to` (ISO dates compare as strings).
pub fn normalize_range(from: String, to: String) -> (String, String) {
    if !from.is_empty() && !to.is_empty() && from > to {
        (to, from)
    } else {
        (from, to)
    }
}

/// Два поля даты "с" / "по". Изменение любой границы передаёт обе границы
/// сразу, чтобы их можно было применить одним обновлением.
#[component]
pub fn DateRangeInput(
    #[prop(into)] label: String,
    #[prop(into)] from: Signal<String>,
    #[prop(into)] to: Signal<String>,
    /// Receives `(from, to)`
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="date-range-input">
            <span class="date-range-input__label">{label}</span>
            <DateInput
                value=from
                max=to
                on_change=Callback::new(move |value: String| {
                    on_change.run(normalize_range(value, to.get_untracked()));
                })
            />
            <span class="date-range-input__separator">"–"</span>
            <DateInput
                value=to
                min=from
                on_change=Callback::new(move |value: String| {
                    on_change.run(normalize_range(from.get_untracked(), value));
                })
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_range() {
        let r = |a: &str, b: &str| normalize_range(a.to_string(), b.to_string());
        assert_eq!(r("2024-01-01", "2024-02-01"), ("2024-01-01".into(), "2024-02-01".into()));
        assert_eq!(r("2024-03-01", "2024-02-01"), ("2024-02-01".into(), "2024-03-01".into()));
        assert_eq!(r("", "2024-02-01"), ("".into(), "2024-02-01".into()));
        assert_eq!(r("2024-03-01", ""), ("2024-03-01".into(), "".into()));
    }
}
