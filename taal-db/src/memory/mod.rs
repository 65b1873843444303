pub mod memory_manager;
pub mod memory_translator;

pub use memory_manager::*;
pub use memory_translator::*;
