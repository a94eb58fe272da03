pub mod local;

pub use crate::error::StoreError;
use crate::types::List;

/// Abstract storage trait for list-aggregate backends.
/// Cards are addressed only as a sub-field of their list; the four
/// primitives here are everything the services need.
pub trait ListStorage: Send + Sync {
    /// All list aggregates in stored order.
    fn find_all(&self) -> Result<Vec<List>, StoreError>;

    /// One list aggregate by id, or None if absent.
    fn find_one(&self, list_id: u64) -> Result<Option<List>, StoreError>;

    /// Upsert a list aggregate by its id.
    fn save(&self, list: &List) -> Result<(), StoreError>;

    /// Remove a list aggregate. Returns false if no list had that id;
    /// translating that into ListNotFound is the caller's job.
    fn delete_one(&self, list_id: u64) -> Result<bool, StoreError>;
}
