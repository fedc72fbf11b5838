use super::EntityMetadata;

/// Trait for aggregate roots
///
/// Defines the mandatory accessors and static metadata for every
/// aggregate in the system.
pub trait AggregateRoot {
    /// Aggregate identifier type
    type Id;

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Business code (e.g. "KB-2026-001")
    fn code(&self) -> &str;

    /// Description / display name
    fn description(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Aggregate index in the system (e.g. "k001")
    fn aggregate_index() -> &'static str;

    /// Collection name for the DB (e.g. "knowledge_item")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Knowledge item")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Knowledge items")
    fn list_name() -> &'static str;

    /// Check aggregate invariants before persisting
    fn validate(&self) -> Result<(), String>;

    /// Full aggregate name (e.g. "k001_knowledge_item")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Lifecycle bookkeeping applied right before a write
    fn before_write(&mut self) {
        self.metadata_mut().touch();
        self.metadata_mut().increment_version();
    }
}
