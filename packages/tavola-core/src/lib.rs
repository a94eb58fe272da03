pub mod cards;
pub mod error;
pub mod ids;
pub mod lists;
pub mod storage;
pub mod types;
