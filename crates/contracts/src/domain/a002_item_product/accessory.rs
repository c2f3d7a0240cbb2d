use crate::domain::common::{AggregateRoot, ApiResource, AuditFields};
use crate::enums::Island;
use crate::shared::pagination::ListQuery;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(AccessoryId);

/// Accessory catalog entry. Each island has its own catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    pub id: AccessoryId,
    pub accessory_name: String,
    pub island: Island,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Accessory {
    /// Catalog query for one island.
    pub fn query_for(island: Island) -> ListQuery {
        ListQuery::new(1, 100).with_filter("island", island.code())
    }
}

impl AggregateRoot for Accessory {
    type Id = AccessoryId;

    fn id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        self.accessory_name.clone()
    }

    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "accessory"
    }

    fn element_name() -> &'static str {
        "Accessory"
    }

    fn list_name() -> &'static str {
        "Accessories"
    }
}

/// Read-only: the catalog is maintained outside this dashboard.
impl ApiResource for Accessory {
    type Payload = ();

    const BASE_PATH: &'static str = "/quotation/accessories";
}
