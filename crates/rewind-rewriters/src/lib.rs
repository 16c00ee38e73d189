pub mod component;
pub mod filter;
pub mod registry;

pub use component::*;
pub use filter::*;
pub use registry::*;
