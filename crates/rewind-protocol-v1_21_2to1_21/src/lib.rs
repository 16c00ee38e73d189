pub mod adapter;
mod entity;
mod player;
mod registries;

pub use adapter::Protocol1_21_2To1_21;
