//! Sidebar with collapsible menu groups.

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::registry::TabEntity;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (entity, icon)
    items: Vec<(TabEntity, &'static str)>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "master_data",
            label: "Master Data",
            icon: "database",
            items: vec![
                (TabEntity::Customer, "customers"),
                (TabEntity::ItemProduct, "products"),
                (TabEntity::TermCondition, "file-text"),
                (TabEntity::BankAccount, "bank"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "shopping-cart",
            items: vec![(TabEntity::Quotation, "invoices")],
        },
    ]
}

#[component]
fn MenuItem(entity: TabEntity, icon_name: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    let key = StoredValue::new(entity.full_name());
    let is_active = move || key.with_value(|k| ctx.active.with(|a| a.as_deref() == Some(k.as_str())));

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=is_active
            style:padding-left="10px"
            on:click=move |_| key.with_value(|k| ctx.open_tab(k, entity.list_name()))
        >
            <div class="app-sidebar__item-content">
                {icon(icon_name)}
                <span>{entity.list_name()}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    // All groups start expanded; there are only two.
    let expanded_groups = RwSignal::new(
        menu_groups().iter().map(|g| g.id).collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let gid = group.id;
                let is_expanded = move || expanded_groups.with(|items| items.contains(&gid));
                let toggle = move |_| {
                    expanded_groups.update(|items| {
                        if let Some(pos) = items.iter().position(|x| *x == gid) {
                            items.remove(pos);
                        } else {
                            items.push(gid);
                        }
                    });
                };
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div class="app-sidebar__item" style:padding-left="12px" on:click=toggle>
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(entity, icon_name)| {
                                    view! { <MenuItem entity=entity icon_name=icon_name /> }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_is_reachable_from_the_menu() {
        let listed: Vec<TabEntity> = menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(entity, _)| entity))
            .collect();
        for entity in TabEntity::ALL {
            assert!(listed.contains(&entity), "{:?} missing from menu", entity);
        }
    }
}
