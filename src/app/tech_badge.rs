use leptos::prelude::*;

use crate::tech::{BadgeVariant, Tech};

#[component]
pub fn TechBadge(
    #[prop(into)] tech: String,
    #[prop(optional)] variant: BadgeVariant,
) -> impl IntoView {
    let class = format!(
        "{} border rounded-md text-xs font-semibold px-3 py-1",
        Tech::from(tech.as_str()).badge_class(variant)
    );
    view! { <span class=class>{tech}</span> }
}
