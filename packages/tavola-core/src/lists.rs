/// Service over the list aggregates: identity allocation, partial updates,
/// and cascading delete (removing the aggregate removes its cards with it).

use std::sync::Arc;

use crate::error::StoreError;
use crate::ids;
use crate::storage::ListStorage;
use crate::types::{List, ListDetails, ListPatch, ListSummary};

#[derive(Clone)]
pub struct ListsService {
    storage: Arc<dyn ListStorage>,
}

impl ListsService {
    pub fn new(storage: Arc<dyn ListStorage>) -> Self {
        Self { storage }
    }

    /// All lists as card-free summaries, in stored order.
    pub fn get_all(&self) -> Result<Vec<ListSummary>, StoreError> {
        Ok(self
            .storage
            .find_all()?
            .into_iter()
            .map(|l| ListSummary {
                id: l.id,
                name: l.name,
            })
            .collect())
    }

    /// Full aggregate including cards.
    pub fn get(&self, list_id: u64) -> Result<List, StoreError> {
        self.storage
            .find_one(list_id)?
            .ok_or(StoreError::ListNotFound(list_id))
    }

    /// Create a list with the next id over all current list ids and an
    /// empty card sequence. Returns the new id.
    pub fn add(&self, details: ListDetails) -> Result<u64, StoreError> {
        let lists = self.storage.find_all()?;
        let list_id = ids::next_id(lists.iter().map(|l| l.id));
        let list = List {
            id: list_id,
            name: details.name,
            cards: Vec::new(),
        };
        self.storage.save(&list)?;
        log::info!("[tavola.lists] Created list {} ({})", list_id, list.name);
        Ok(list_id)
    }

    /// Merge supplied fields into the list's own attributes.
    /// Does not touch the card sequence.
    pub fn update(&self, list_id: u64, patch: ListPatch) -> Result<(), StoreError> {
        let mut list = self
            .storage
            .find_one(list_id)?
            .ok_or(StoreError::ListNotFound(list_id))?;
        if let Some(name) = patch.name {
            list.name = name;
        }
        self.storage.save(&list)
    }

    /// Remove the aggregate and, with it, every card it owns.
    pub fn delete(&self, list_id: u64) -> Result<(), StoreError> {
        if !self.storage.delete_one(list_id)? {
            return Err(StoreError::ListNotFound(list_id));
        }
        log::info!("[tavola.lists] Deleted list {} and its cards", list_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::local::LocalStorage;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> ListsService {
        let storage = LocalStorage::open(&dir.path().join("lists.json")).unwrap();
        ListsService::new(Arc::new(storage))
    }

    fn details(name: &str) -> ListDetails {
        ListDetails {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_add_then_get_yields_named_empty_list() {
        let dir = TempDir::new().unwrap();
        let lists = service(&dir);

        let id = lists.add(details("List0")).unwrap();
        let list = lists.get(id).unwrap();
        assert_eq!(list.name, "List0");
        assert!(list.cards.is_empty());
    }

    #[test]
    fn test_sequential_adds_allocate_zero_one_two() {
        let dir = TempDir::new().unwrap();
        let lists = service(&dir);

        assert_eq!(lists.add(details("List0")).unwrap(), 0);
        assert_eq!(lists.add(details("List name 2")).unwrap(), 1);
        assert_eq!(lists.add(details("Third")).unwrap(), 2);
    }

    #[test]
    fn test_deleted_max_id_is_reused() {
        let dir = TempDir::new().unwrap();
        let lists = service(&dir);

        lists.add(details("A")).unwrap();
        let max = lists.add(details("B")).unwrap();
        lists.delete(max).unwrap();
        assert_eq!(lists.add(details("C")).unwrap(), max);
    }

    #[test]
    fn test_gap_ids_are_not_reclaimed() {
        let dir = TempDir::new().unwrap();
        let lists = service(&dir);

        let first = lists.add(details("A")).unwrap();
        lists.add(details("B")).unwrap();
        lists.delete(first).unwrap();
        assert_eq!(lists.add(details("C")).unwrap(), 2);
    }

    #[test]
    fn test_emptied_collection_restarts_at_zero() {
        let dir = TempDir::new().unwrap();
        let lists = service(&dir);

        lists.add(details("A")).unwrap();
        lists.add(details("B")).unwrap();
        lists.delete(0).unwrap();
        lists.delete(1).unwrap();
        assert_eq!(lists.add(details("C")).unwrap(), 0);
    }

    #[test]
    fn test_get_all_excludes_card_data() {
        let dir = TempDir::new().unwrap();
        let lists = service(&dir);

        lists.add(details("List0")).unwrap();
        lists.add(details("List1")).unwrap();

        let summaries = lists.get_all().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, 0);
        assert_eq!(summaries[0].name, "List0");
        assert_eq!(summaries[1].id, 1);
    }

    #[test]
    fn test_update_merges_name_only() {
        let dir = TempDir::new().unwrap();
        let lists = service(&dir);

        let id = lists.add(details("List name")).unwrap();
        lists
            .update(
                id,
                ListPatch {
                    name: Some("List name modified".to_string()),
                },
            )
            .unwrap();
        assert_eq!(lists.get(id).unwrap().name, "List name modified");

        // An empty patch leaves everything as it is.
        lists.update(id, ListPatch::default()).unwrap();
        assert_eq!(lists.get(id).unwrap().name, "List name modified");
    }

    #[test]
    fn test_get_absent_list_carries_id() {
        let dir = TempDir::new().unwrap();
        let lists = service(&dir);

        match lists.get(1) {
            Err(StoreError::ListNotFound(id)) => assert_eq!(id, 1),
            other => panic!("expected ListNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_update_and_delete_absent_list_fail() {
        let dir = TempDir::new().unwrap();
        let lists = service(&dir);

        assert!(matches!(
            lists.update(3, ListPatch::default()),
            Err(StoreError::ListNotFound(3))
        ));
        assert!(matches!(
            lists.delete(0),
            Err(StoreError::ListNotFound(0))
        ));
    }
}
