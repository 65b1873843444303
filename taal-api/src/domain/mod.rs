pub mod constants;
pub mod translatable_string;
pub mod translatable_value;

pub use constants::*;
pub use translatable_string::*;
pub use translatable_value::*;
