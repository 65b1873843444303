pub mod attribute_type;
pub mod identifiable;
pub mod instance;
pub mod translation_model;
pub mod type_descriptor;
pub mod type_registry;

// Re-exports
pub use attribute_type::*;
pub use identifiable::*;
pub use instance::*;
pub use translation_model::*;
pub use type_descriptor::*;
pub use type_registry::*;
