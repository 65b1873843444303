pub mod delete;
pub mod load;
pub mod persistence_manager;
pub mod save;
pub mod serialize;
pub mod translator;

// Re-exports
pub use delete::*;
pub use load::*;
pub use persistence_manager::*;
pub use save::*;
pub use serialize::*;
pub use translator::*;
