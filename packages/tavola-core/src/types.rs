use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A list together with all of its cards. The list is the unit of storage:
/// its identity and its card sequence are persisted as one aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: u64,
    pub name: String,
    pub cards: Vec<Card>,
}

/// A card owned exclusively by one list. Card ids are unique only within
/// their parent list; two different lists may each contain a card 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Card-free list view returned by bulk reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: u64,
    pub name: String,
}

/// Creation payload for a list.
#[derive(Debug, Clone, Deserialize)]
pub struct ListDetails {
    pub name: String,
}

/// Creation payload for a card.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Partial list update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPatch {
    #[serde(default)]
    pub name: Option<String>,
}

/// Partial card update. `None` fields are left unchanged, so a patch can
/// replace a due date but never clear one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}
