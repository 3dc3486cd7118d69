pub mod command;
pub mod constants;
pub mod env;
pub mod error;
pub mod handler;
pub mod host_map;
pub mod memory_store;
pub mod store;

pub use error::{HostMapError, Result};
pub use host_map::{HostMap, SharedHostMap};
pub use memory_store::MemoryStore;
pub use store::{Callbacks, Store};
