use super::{AggregateId, AuditFields};

/// Root of an aggregate.
///
/// Carries both instance data (id, display name, audit columns) and static
/// metadata the UI uses for tab keys and titles.
pub trait AggregateRoot {
    type Id: AggregateId;

    // ============================================================================
    // Instance methods
    // ============================================================================

    /// `None` until the backend has assigned one.
    fn id(&self) -> Option<Self::Id>;

    /// Human-readable name for pickers and tab titles.
    fn display_name(&self) -> String;

    fn audit(&self) -> &AuditFields;

    // ============================================================================
    // Aggregate class metadata
    // ============================================================================

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "customer")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Customer")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Customers")
    fn list_name() -> &'static str;

    // ============================================================================
    // Provided methods
    // ============================================================================

    /// Full aggregate name, also the list tab key (e.g. "a001_customer")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Tab key of the edit page for a record.
    fn detail_key(id: Self::Id) -> String {
        format!("{}_detail_{}", Self::full_name(), id.as_string())
    }

    /// Tab key of the create page.
    fn new_key() -> String {
        format!("{}_new", Self::full_name())
    }

    fn is_deleted(&self) -> bool {
        self.audit().is_deleted()
    }
}
