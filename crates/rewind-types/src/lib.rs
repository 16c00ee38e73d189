pub mod entity;
pub mod types;

pub use entity::*;
pub use types::*;
