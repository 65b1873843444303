pub mod context_managers;
pub mod labeled_hierarchy;
pub mod manager;
pub mod message_id;
pub mod registry;
pub mod translate;
pub mod translation_manager;

// Re-exports
pub use context_managers::*;
pub use labeled_hierarchy::*;
pub use manager::*;
pub use message_id::*;
pub use registry::*;
pub use translate::*;
pub use translation_manager::*;
