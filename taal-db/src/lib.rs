pub mod memory;
pub mod models;
pub mod repository;
pub mod translation;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use models::*;
pub use repository::*;
pub use translation::*;
