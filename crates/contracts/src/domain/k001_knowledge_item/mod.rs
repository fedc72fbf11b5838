pub mod aggregate;

pub use aggregate::{KnowledgeItem, KnowledgeItemDto, KnowledgeItemId};
