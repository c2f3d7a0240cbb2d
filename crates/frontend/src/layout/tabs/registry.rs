//! Tab content registry: the single mapping from `tab.key` to a view.
//!
//! Key format:
//! - `<entity>`: list page, e.g. `a001_customer`
//! - `<entity>_new`: create form
//! - `<entity>_detail_<id>`: edit form of one record
//!
//! where `<entity>` is the aggregate's `full_name()`.

use crate::domain::a001_customer::ui::details::CustomerDetails;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_item_product::ui::details::ItemProductDetails;
use crate::domain::a002_item_product::ui::list::ItemProductList;
use crate::domain::a003_term_condition::ui::details::TermConditionDetails;
use crate::domain::a003_term_condition::ui::list::TermConditionList;
use crate::domain::a004_bank_account::ui::details::BankAccountDetails;
use crate::domain::a004_bank_account::ui::list::BankAccountList;
use crate::domain::a006_quotation::ui::details::QuotationDetails;
use crate::domain::a006_quotation::ui::list::QuotationList;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_customer::{Customer, CustomerId};
use contracts::domain::a002_item_product::{ItemProduct, ItemProductId};
use contracts::domain::a003_term_condition::{TermCondition, TermConditionId};
use contracts::domain::a004_bank_account::{BankAccount, BankAccountId};
use contracts::domain::a006_quotation::{Quotation, QuotationId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::logging::log;
use leptos::prelude::*;

const DETAIL_MARKER: &str = "_detail_";
const NEW_SUFFIX: &str = "_new";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabRoute<'a> {
    List(&'a str),
    New(&'a str),
    /// Entity key and the raw id text.
    Detail(&'a str, &'a str),
}

impl<'a> TabRoute<'a> {
    pub fn entity_key(&self) -> &'a str {
        match self {
            TabRoute::List(e) | TabRoute::New(e) | TabRoute::Detail(e, _) => e,
        }
    }
}

pub fn parse_tab_key(key: &str) -> TabRoute<'_> {
    if let Some((entity, id)) = key.split_once(DETAIL_MARKER) {
        return TabRoute::Detail(entity, id);
    }
    match key.strip_suffix(NEW_SUFFIX) {
        Some(entity) => TabRoute::New(entity),
        None => TabRoute::List(key),
    }
}

/// Aggregates that have pages in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEntity {
    Customer,
    ItemProduct,
    TermCondition,
    BankAccount,
    Quotation,
}

impl TabEntity {
    pub const ALL: [TabEntity; 5] = [
        TabEntity::Customer,
        TabEntity::ItemProduct,
        TabEntity::TermCondition,
        TabEntity::BankAccount,
        TabEntity::Quotation,
    ];

    pub fn from_key(entity_key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.full_name() == entity_key)
    }

    pub fn full_name(&self) -> String {
        match self {
            TabEntity::Customer => Customer::full_name(),
            TabEntity::ItemProduct => ItemProduct::full_name(),
            TabEntity::TermCondition => TermCondition::full_name(),
            TabEntity::BankAccount => BankAccount::full_name(),
            TabEntity::Quotation => Quotation::full_name(),
        }
    }

    pub fn element_name(&self) -> &'static str {
        match self {
            TabEntity::Customer => Customer::element_name(),
            TabEntity::ItemProduct => ItemProduct::element_name(),
            TabEntity::TermCondition => TermCondition::element_name(),
            TabEntity::BankAccount => BankAccount::element_name(),
            TabEntity::Quotation => Quotation::element_name(),
        }
    }

    pub fn list_name(&self) -> &'static str {
        match self {
            TabEntity::Customer => Customer::list_name(),
            TabEntity::ItemProduct => ItemProduct::list_name(),
            TabEntity::TermCondition => TermCondition::list_name(),
            TabEntity::BankAccount => BankAccount::list_name(),
            TabEntity::Quotation => Quotation::list_name(),
        }
    }
}

/// What a route asks for once the id is parsed.
#[derive(Debug, PartialEq, Eq)]
enum Page<I> {
    List,
    /// `None` for the create form.
    Form(Option<I>),
}

/// `None` when a detail key carries an id that does not parse.
fn resolve_page<I: AggregateId>(route: TabRoute<'_>) -> Option<Page<I>> {
    match route {
        TabRoute::List(_) => Some(Page::List),
        TabRoute::New(_) => Some(Page::Form(None)),
        TabRoute::Detail(_, raw) => I::from_string(raw).ok().map(|id| Page::Form(Some(id))),
    }
}

fn placeholder(text: &'static str) -> AnyView {
    view! { <div class="placeholder">{text}</div> }.into_any()
}

/// Renders the content of a tab by its key.
///
/// After a successful save the form tab is replaced by the entity's list
/// and every open list of that entity reloads.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let route = parse_tab_key(key);
    let Some(entity) = TabEntity::from_key(route.entity_key()) else {
        log!("Unknown tab type: {}", key);
        return placeholder("Not implemented yet");
    };

    let key_for_close = key.to_string();
    let on_cancel = Callback::new({
        let key_for_close = key_for_close.clone();
        move |_| tabs_store.close_tab(&key_for_close)
    });
    let on_saved = Callback::new(move |_| {
        let list_key = entity.full_name();
        tabs_store.bump_revision(&list_key);
        tabs_store.replace_tab(&key_for_close, &list_key, entity.list_name());
    });

    let view = match entity {
        TabEntity::Customer => resolve_page::<CustomerId>(route).map(|page| match page {
            Page::List => view! { <CustomerList /> }.into_any(),
            Page::Form(id) => view! { <CustomerDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
        }),
        TabEntity::ItemProduct => resolve_page::<ItemProductId>(route).map(|page| match page {
            Page::List => view! { <ItemProductList /> }.into_any(),
            Page::Form(id) => view! { <ItemProductDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
        }),
        TabEntity::TermCondition => resolve_page::<TermConditionId>(route).map(|page| match page {
            Page::List => view! { <TermConditionList /> }.into_any(),
            Page::Form(id) => view! { <TermConditionDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
        }),
        TabEntity::BankAccount => resolve_page::<BankAccountId>(route).map(|page| match page {
            Page::List => view! { <BankAccountList /> }.into_any(),
            Page::Form(id) => view! { <BankAccountDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
        }),
        TabEntity::Quotation => resolve_page::<QuotationId>(route).map(|page| match page {
            Page::List => view! { <QuotationList /> }.into_any(),
            Page::Form(id) => view! { <QuotationDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
        }),
    };

    view.unwrap_or_else(|| {
        log!("Bad record id in tab key: {}", key);
        placeholder("Record not found")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_key() {
        assert_eq!(parse_tab_key("a001_customer"), TabRoute::List("a001_customer"));
        assert_eq!(parse_tab_key("a006_quotation_new"), TabRoute::New("a006_quotation"));
        assert_eq!(
            parse_tab_key("a002_item_product_detail_42"),
            TabRoute::Detail("a002_item_product", "42")
        );
    }

    #[test]
    fn test_entities_resolve_from_their_full_name() {
        for entity in TabEntity::ALL {
            assert_eq!(TabEntity::from_key(&entity.full_name()), Some(entity));
        }
        assert_eq!(TabEntity::from_key("a005_employee"), None);
    }

    #[test]
    fn test_bad_detail_id_is_rejected() {
        assert_eq!(
            resolve_page::<CustomerId>(TabRoute::Detail("a001_customer", "7")),
            Some(Page::Form(Some(CustomerId(7))))
        );
        assert_eq!(resolve_page::<CustomerId>(TabRoute::Detail("a001_customer", "x")), None);
        assert_eq!(resolve_page::<CustomerId>(TabRoute::New("a001_customer")), Some(Page::Form(None)));
    }
}
