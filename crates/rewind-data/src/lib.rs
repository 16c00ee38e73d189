pub mod attribute_modifiers;
pub mod data_types;
pub mod entity_types;
pub mod mappings;
pub mod translations;

pub use data_types::*;
pub use entity_types::*;
pub use mappings::*;
