pub mod adapter;
pub mod codec;
pub mod config;
pub mod entity_data;
pub mod error;
pub mod field;
pub mod packets;
pub mod pipeline;
pub mod state;
pub mod storage;
pub mod wrapper;

pub use adapter::*;
pub use codec::*;
pub use config::*;
pub use entity_data::*;
pub use error::*;
pub use packets::*;
pub use pipeline::*;
pub use state::*;
pub use storage::*;
pub use wrapper::*;
