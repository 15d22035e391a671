pub mod catalog;
pub mod config;
pub mod conversation;
pub mod knowledge;
pub mod matcher;

// Re-export main types for convenience
pub use catalog::{Service, ServiceCatalog, ServiceFaq, ServiceFeature};
pub use config::{Config, Theme};
pub use conversation::{Conversation, Message, PendingReply, ReplyDelay, Sender, WELCOME_MESSAGE};
pub use knowledge::{Category, KnowledgeBase, KnowledgeEntry};
pub use matcher::{answer_for, best_match, FALLBACK_ANSWER};
