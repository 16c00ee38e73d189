pub mod adapter;
mod component;

pub use adapter::Protocol1_21To1_20_5;
pub use component::ComponentRewriter1_21;
