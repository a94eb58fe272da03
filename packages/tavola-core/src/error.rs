#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("List with id {0} not found.")]
    ListNotFound(u64),

    #[error("Card with id {card_id} for list {list_id} not found.")]
    CardNotFound { list_id: u64, card_id: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data file: {0}")]
    InvalidData(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether this error addresses an entity that does not exist.
    /// The HTTP adapter maps these to a not-found response class.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::ListNotFound(_) | StoreError::CardNotFound { .. }
        )
    }
}
