use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Primary,
    /// Цены
    Success,
    /// Остатки
    Warning,
    #[default]
    Neutral,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    #[prop(optional)]
    variant: BadgeVariant,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!("badge {}", variant.class())>
            {children()}
        </span>
    }
}
