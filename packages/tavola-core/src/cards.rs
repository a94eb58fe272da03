/// Service over the card sequence nested inside one list aggregate.
///
/// Every operation loads the parent aggregate first and fails with
/// ListNotFound before any card-level logic runs. Card ids are allocated
/// per list, so two lists may each own a card 0.

use std::sync::Arc;

use crate::error::StoreError;
use crate::ids;
use crate::storage::ListStorage;
use crate::types::{Card, CardDetails, CardPatch, List};

#[derive(Clone)]
pub struct CardsService {
    storage: Arc<dyn ListStorage>,
}

impl CardsService {
    pub fn new(storage: Arc<dyn ListStorage>) -> Self {
        Self { storage }
    }

    fn load_list(&self, list_id: u64) -> Result<List, StoreError> {
        self.storage
            .find_one(list_id)?
            .ok_or(StoreError::ListNotFound(list_id))
    }

    /// The full ordered card sequence of the list (possibly empty).
    pub fn get_all(&self, list_id: u64) -> Result<Vec<Card>, StoreError> {
        Ok(self.load_list(list_id)?.cards)
    }

    /// Append a card with the next id over this list's current card ids.
    /// Returns the new id.
    pub fn add(&self, list_id: u64, details: CardDetails) -> Result<u64, StoreError> {
        let mut list = self.load_list(list_id)?;
        let card_id = ids::next_id(list.cards.iter().map(|c| c.id));
        list.cards.push(Card {
            id: card_id,
            title: details.title,
            description: details.description,
            due_date: details.due_date,
        });
        self.storage.save(&list)?;
        log::info!("[tavola.cards] Added card {} to list {}", card_id, list_id);
        Ok(card_id)
    }

    /// Merge supplied fields into the card; its id is untouched.
    pub fn update(
        &self,
        list_id: u64,
        card_id: u64,
        patch: CardPatch,
    ) -> Result<(), StoreError> {
        let mut list = self.load_list(list_id)?;
        let card = list
            .cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or(StoreError::CardNotFound { list_id, card_id })?;
        if let Some(title) = patch.title {
            card.title = title;
        }
        if let Some(description) = patch.description {
            card.description = description;
        }
        if let Some(due_date) = patch.due_date {
            card.due_date = Some(due_date);
        }
        self.storage.save(&list)
    }

    /// Remove the card; the remaining cards close the gap.
    pub fn delete(&self, list_id: u64, card_id: u64) -> Result<(), StoreError> {
        let mut list = self.load_list(list_id)?;
        let index = list
            .cards
            .iter()
            .position(|c| c.id == card_id)
            .ok_or(StoreError::CardNotFound { list_id, card_id })?;
        list.cards.remove(index);
        self.storage.save(&list)?;
        log::info!(
            "[tavola.cards] Deleted card {} from list {}",
            card_id,
            list_id
        );
        Ok(())
    }
}
