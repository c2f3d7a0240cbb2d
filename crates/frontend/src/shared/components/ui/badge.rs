use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Primary,
    Success,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Neutral => "badge badge--neutral",
            BadgeTone::Primary => "badge badge--primary",
            BadgeTone::Success => "badge badge--success",
        }
    }
}

/// Small inline label used in list cells.
#[component]
pub fn Badge(#[prop(optional)] tone: BadgeTone, children: Children) -> impl IntoView {
    view! { <span class=tone.class()>{children()}</span> }
}

/// Badge for a quotation status code ("draft" / "submit").
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<String>, children: Children) -> impl IntoView {
    let status_class = move || {
        if status.with(|s| s == "submit") {
            "badge badge--status badge--status-submitted"
        } else {
            "badge badge--status badge--status-draft"
        }
    };

    view! { <span class=status_class>{children()}</span> }
}
