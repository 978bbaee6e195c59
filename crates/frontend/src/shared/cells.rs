use crate::shared::icons::icon;
use contracts::domain::a001_material_return::columns::{is_link_target, CellKind};
use contracts::domain::common::is_set;
use leptos::prelude::*;
use thaw::*;

/// Badge colour for status-like cell text
fn badge_color(value: &str) -> BadgeColor {
    match value.trim().to_ascii_lowercase().as_str() {
        "paid" | "yes" | "sent" => BadgeColor::Success,
        "" | "no" | "not sent" => BadgeColor::Informative,
        _ => BadgeColor::Warning,
    }
}

/// Renders one table cell according to its column kind
pub fn cell_view(kind: CellKind, value: String) -> AnyView {
    match kind {
        CellKind::Text => view! { <span>{value}</span> }.into_any(),
        CellKind::Key => view! { <span class="table__cell-key">{value}</span> }.into_any(),
        CellKind::Amount if is_set(&value) => {
            view! { <span class="table__cell-amount">{format!("₹{}", value)}</span> }.into_any()
        }
        CellKind::Amount => view! { <span></span> }.into_any(),
        CellKind::Link { empty } if !is_set(&value) => {
            view! { <span class="table__cell-muted">{empty}</span> }.into_any()
        }
        CellKind::Link { .. } if !is_link_target(&value) => {
            view! { <span>{value}</span> }.into_any()
        }
        CellKind::Link { .. } => view! {
            <a
                class="table__link"
                href=value
                target="_blank"
                rel="noopener noreferrer"
                title="Open document"
            >
                {icon("external-link")}
            </a>
        }
        .into_any(),
        CellKind::Badge => {
            let color = badge_color(&value);
            let text = if is_set(&value) { value } else { "Not Set".to_string() };
            view! {
                <Badge appearance=BadgeAppearance::Tint color=color>{text}</Badge>
            }
            .into_any()
        }
    }
}
